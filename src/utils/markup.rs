// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Plain-text preview of rich snippet bodies for display in the accordion.

/// Elements whose closing tag ends a line in the preview.
const BLOCK_TAGS: &[&str] = &[
    "p", "div", "li", "ul", "ol", "h1", "h2", "h3", "h4", "h5", "h6", "tr", "table",
    "blockquote", "pre", "section", "article", "header", "footer", "dt", "dd",
];

/// Produce a tag-free preview of an HTML snippet.
///
/// Markup is stripped with `ammonia` (empty tag allow-list) and the few
/// entities it emits are decoded again. The copied text is never derived
/// from this; copy always uses the raw body.
pub fn preview_text(body: &str) -> String {
    let marked = mark_line_breaks(body);
    let stripped = ammonia::Builder::empty().clean(&marked).to_string();
    let decoded = decode_entities(&stripped);

    decoded
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Insert a newline in front of every tag that ends a line.
///
/// The tags themselves are left in place for the sanitizer to drop.
fn mark_line_breaks(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut rest = body;
    while let Some(pos) = rest.find('<') {
        out.push_str(&rest[..pos]);
        let tag = &rest[pos + 1..];
        if breaks_line(tag) {
            out.push('\n');
        }
        out.push('<');
        rest = tag;
    }
    out.push_str(rest);
    out
}

/// `tag` is the text right after a `<`.
fn breaks_line(tag: &str) -> bool {
    let (closing, tag) = match tag.strip_prefix('/') {
        Some(rest) => (true, rest),
        None => (false, tag),
    };
    let name_len = tag
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(tag.len());
    let name = tag[..name_len].to_ascii_lowercase();
    if name.is_empty() {
        return false;
    }

    match name.as_str() {
        "br" | "hr" => true,
        _ => closing && BLOCK_TAGS.contains(&name.as_str()),
    }
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}
