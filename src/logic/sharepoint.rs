// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! SharePoint REST list source.
//!
//! Issues one `GET .../_api/web/lists/getbytitle('<list>')/items` with
//! `$select` and `$orderby` so the server returns exactly the content fields,
//! already sorted. Authentication beyond an optional bearer token is left to
//! whatever sits in front of the site.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use url::Url;

use crate::logic::error::FetchError;
use crate::logic::source::{ContentSource, ListQuery, decode_records};
use crate::models::RawRecord;

const ACCEPT_NOMETADATA: &str = "application/json;odata=nometadata";

/// Blocking HTTP client bound to one SharePoint site.
pub struct SharePointSource {
    site: Url,
    client: Client,
    access_token: Option<String>,
}

impl SharePointSource {
    /// Validate the site URL and build the HTTP client.
    pub fn new(
        site_url: &str,
        access_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let site = Url::parse(site_url).map_err(|err| FetchError::InvalidEndpoint {
            site: site_url.to_string(),
            reason: err.to_string(),
        })?;
        if site.cannot_be_a_base() || !matches!(site.scheme(), "http" | "https") {
            return Err(FetchError::InvalidEndpoint {
                site: site_url.to_string(),
                reason: "site URL must be an absolute http(s) URL".into(),
            });
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| FetchError::Transport {
                url: site_url.to_string(),
                source,
            })?;

        Ok(Self {
            site,
            client,
            access_token,
        })
    }

    /// Build the items endpoint for a query.
    pub fn items_url(&self, query: &ListQuery) -> Result<Url, FetchError> {
        let mut url = self.site.clone();
        {
            let mut segments =
                url.path_segments_mut()
                    .map_err(|_| FetchError::InvalidEndpoint {
                        site: self.site.to_string(),
                        reason: "site URL cannot carry a path".into(),
                    })?;
            // OData string literals escape quotes by doubling them.
            let list = format!("getbytitle('{}')", query.list_title.replace('\'', "''"));
            segments
                .pop_if_empty()
                .extend(["_api", "web", "lists", list.as_str(), "items"]);
        }

        let direction = if query.ascending { "asc" } else { "desc" };
        url.query_pairs_mut()
            .append_pair("$select", &query.select.join(","))
            .append_pair("$orderby", &format!("{} {direction}", query.order_by));

        Ok(url)
    }
}

impl ContentSource for SharePointSource {
    fn query(&self, query: &ListQuery) -> Result<Vec<RawRecord>, FetchError> {
        let url = self.items_url(query)?;
        tracing::debug!(%url, "querying SharePoint list");

        let mut request = self.client.get(url.clone()).header(ACCEPT, ACCEPT_NOMETADATA);
        if let Some(token) = &self.access_token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = request.send().map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;
        decode_records(&body, url.as_str())
    }

    fn describe(&self) -> String {
        format!("SharePoint site {}", self.site)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;

    /// Serve exactly one HTTP response and hand back the raw request.
    fn one_shot_server(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
            let _ = tx.send(String::from_utf8_lossy(&request).into_owned());
        });

        (format!("http://{addr}/sites/team"), rx)
    }

    #[test]
    fn items_url_selects_and_orders() {
        let source = SharePointSource::new(
            "https://contoso.sharepoint.com/sites/team/",
            None,
            Duration::from_secs(5),
        )
        .unwrap();
        let url = source
            .items_url(&ListQuery::reusable_content("Reusable Content"))
            .unwrap();

        assert!(url.path().starts_with("/sites/team/_api/web/lists/getbytitle("));
        assert!(url.path().ends_with("/items"));
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("$select".to_string(), "Title,Content,Order0,Expand".to_string()),
                ("$orderby".to_string(), "Order0 asc".to_string()),
            ]
        );
    }

    #[test]
    fn rejects_relative_site_url() {
        let err = SharePointSource::new("sites/team", None, Duration::from_secs(5))
            .err()
            .expect("relative URL must be rejected");
        assert!(matches!(err, FetchError::InvalidEndpoint { .. }));
    }

    #[test]
    fn query_decodes_nometadata_response() {
        let (site, requests) = one_shot_server(
            "HTTP/1.1 200 OK",
            r#"{"value":[{"Title":"Disclaimer","Content":"Confidential.","Order0":1,"Expand":true}]}"#,
        );
        let source =
            SharePointSource::new(&site, Some("token".into()), Duration::from_secs(5)).unwrap();

        let records = source
            .query(&ListQuery::reusable_content("ReusableContent"))
            .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title.as_deref(), Some("Disclaimer"));

        let request = requests.recv().unwrap().to_ascii_lowercase();
        assert!(request.starts_with("get /sites/team/_api/web/lists/getbytitle("));
        assert!(request.contains("accept: application/json;odata=nometadata"));
        assert!(request.contains("authorization: bearer token"));
    }

    #[test]
    fn non_success_status_is_reported() {
        let (site, _requests) = one_shot_server("HTTP/1.1 404 Not Found", r#"{"error":"missing"}"#);
        let source = SharePointSource::new(&site, None, Duration::from_secs(5)).unwrap();

        let err = source
            .query(&ListQuery::reusable_content("Missing"))
            .unwrap_err();

        assert!(matches!(err, FetchError::Status { status: 404, .. }));
    }
}
