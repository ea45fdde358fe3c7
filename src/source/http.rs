//! HTTP record source backed by a blocking `reqwest` client.

use super::{records_from_body, RawRecord, RecordSource};
use crate::config::{Endpoints, ResolvedConfig};
use crate::model::{FetchError, TableKind};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use std::time::Duration;
use tracing::debug;

const AGENT: &str = concat!("recap/", env!("CARGO_PKG_VERSION"));

/// Fetches `GET {base_url}/{endpoint}` for each table.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: String,
    endpoints: Endpoints,
}

impl HttpSource {
    /// Build a source with an explicit base URL, endpoint map and timeout.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Client`] if the TLS backend cannot be initialized.
    pub fn new(
        base_url: impl Into<String>,
        endpoints: Endpoints,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            endpoints,
        })
    }

    /// Build a source from resolved configuration.
    ///
    /// # Errors
    ///
    /// See [`HttpSource::new`].
    pub fn from_config(config: &ResolvedConfig) -> Result<Self, FetchError> {
        Self::new(
            config.api_base_url.clone(),
            config.endpoints.clone(),
            config.request_timeout,
        )
    }

    /// Full URL for a table.
    pub fn url_for(&self, kind: TableKind) -> String {
        join_url(&self.base_url, self.endpoints.path(kind))
    }
}

impl RecordSource for HttpSource {
    fn fetch(&self, kind: TableKind) -> Result<Vec<RawRecord>, FetchError> {
        let url = self.url_for(kind);
        debug!(%url, table = kind.key(), "Fetching records");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|source| FetchError::Transport {
            url: url.clone(),
            source,
        })?;
        let json = serde_json::from_str(&body).map_err(|e| FetchError::Decode {
            url: url.clone(),
            reason: e.to_string(),
        })?;

        Ok(records_from_body(json, &url))
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve exactly one HTTP response on a local port.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{}", addr)
    }

    fn source(base: String) -> HttpSource {
        HttpSource::new(base, Endpoints::default(), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn url_joins_base_and_endpoint_with_single_slash() {
        assert_eq!(join_url("http://h/dev/", "/getX"), "http://h/dev/getX");
        assert_eq!(join_url("http://h/dev", "getX"), "http://h/dev/getX");
    }

    #[test]
    fn url_for_uses_endpoint_overrides() {
        let endpoints = Endpoints::default().with_override(TableKind::Reinsurers, "reinsurers/all");
        let source = HttpSource::new("http://h", endpoints, Duration::from_secs(1)).unwrap();

        assert_eq!(source.url_for(TableKind::Reinsurers), "http://h/reinsurers/all");
        assert_eq!(
            source.url_for(TableKind::Policies),
            "http://h/getGridDataPolicyLanding"
        );
    }

    #[test]
    fn fetch_returns_array_records() {
        let base = serve_once("200 OK", r#"[{"POLICY_NUMBER":1},{"POLICY_NUMBER":2}]"#);
        let records = source(base).fetch(TableKind::Policies).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn fetch_rejects_non_success_status() {
        let base = serve_once("503 Service Unavailable", r#"{"message":"down"}"#);
        let err = source(base).fetch(TableKind::Policies).unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 503, .. }));
    }

    #[test]
    fn fetch_treats_object_body_as_empty() {
        let base = serve_once("200 OK", r#"{"items":[1,2,3]}"#);
        let records = source(base).fetch(TableKind::Policies).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn fetch_reports_invalid_json_as_decode_error() {
        let base = serve_once("200 OK", "<html>oops</html>");
        let err = source(base).fetch(TableKind::Policies).unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }));
    }
}
