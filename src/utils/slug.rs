// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Derive a whitespace-insensitive key from a free-text title.

/// Collapse a title into a key used to spot aliasing titles.
///
/// # Steps
/// - Transliterate Unicode to ASCII with `deunicode` (e.g., "Å" → "A").
/// - Trim, then replace each run of whitespace with a single `-`.
///
/// Case and punctuation are kept, so "Email  Signature" and
/// "Email Signature" share a key while "email signature" does not.
pub fn slugify_title(title: &str) -> String {
    let transliterated = deunicode::deunicode(title);
    let mut out = String::with_capacity(transliterated.len());
    let mut in_space = false;

    for ch in transliterated.trim().chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('-');
                in_space = true;
            }
        } else {
            out.push(ch);
            in_space = false;
        }
    }

    out
}
