//! Art Institute of Chicago API Client
//!
//! `GET {base}/artworks?page=P&limit=N&fields=...` returning
//! `{ "data": [...], "pagination": { "total": ... } }`.

use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};

use crate::domain::config::ApiConfig;
use crate::domain::page::{ArtworksResponse, Page};
use crate::error::{Error, Result};
use crate::services::page_source::PageSource;

const USER_AGENT: &str = concat!("artworks-table/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the artworks endpoint
#[derive(Clone)]
pub struct ArticClient {
    client: Client,
    base_url: String,
    fields: String,
    timeout_secs: u64,
}

impl ArticClient {
    /// Build a client from the API configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        // The API asks callers to identify themselves with this header
        headers.insert(
            HeaderName::from_static("aic-user-agent"),
            HeaderValue::from_static(USER_AGENT),
        );

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .connect_timeout(Duration::from_secs(config.timeout_secs))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            fields: config.fields.join(","),
            timeout_secs: config.timeout_secs,
        })
    }

    /// URL of one page
    pub fn page_url(&self, page: u32, page_size: u32) -> String {
        let mut url = format!(
            "{}/artworks?page={}&limit={}",
            self.base_url, page, page_size
        );
        if !self.fields.is_empty() {
            url.push_str("&fields=");
            url.push_str(&self.fields);
        }
        url
    }

    async fn fetch(
        client: Client,
        url: String,
        page_size: u32,
        timeout_secs: u64,
    ) -> Result<Page> {
        tracing::debug!("GET {}", url);

        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| classify_transport(e, timeout_secs))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| classify_transport(e, timeout_secs))?;

        let page = decode_page(&body)?;
        if page.len() > page_size as usize {
            tracing::warn!(
                "Source returned {} records for limit {}, truncating",
                page.len(),
                page_size
            );
        }
        Ok(page.truncated(page_size as usize))
    }
}

impl PageSource for ArticClient {
    fn name(&self) -> &str {
        "api.artic.edu"
    }

    fn fetch_page(&self, page: u32, page_size: u32) -> BoxFuture<'static, Result<Page>> {
        let url = self.page_url(page, page_size);
        Self::fetch(self.client.clone(), url, page_size, self.timeout_secs).boxed()
    }
}

/// Decode a list response body into a page
pub fn decode_page(body: &[u8]) -> Result<Page> {
    let response: ArtworksResponse = serde_json::from_slice(body)?;
    Ok(Page::from(response))
}

fn classify_transport(error: reqwest::Error, timeout_secs: u64) -> Error {
    if error.is_timeout() {
        Error::Timeout { secs: timeout_secs }
    } else {
        Error::Network { source: error }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchErrorKind;

    fn client() -> ArticClient {
        ArticClient::new(&ApiConfig::default()).expect("client")
    }

    #[test]
    fn test_page_url() {
        let url = client().page_url(3, 12);
        assert_eq!(
            url,
            "https://api.artic.edu/api/v1/artworks?page=3&limit=12\
             &fields=id,title,place_of_origin,artist_display,inscriptions,date_start,date_end"
        );
    }

    #[test]
    fn test_page_url_without_fields() {
        let config = ApiConfig {
            base_url: "http://localhost:8080/api/v1/".to_string(),
            fields: Vec::new(),
            ..Default::default()
        };
        let client = ArticClient::new(&config).expect("client");
        assert_eq!(
            client.page_url(1, 12),
            "http://localhost:8080/api/v1/artworks?page=1&limit=12"
        );
    }

    #[test]
    fn test_decode_page() {
        let body = br#"{
            "pagination": {"total": 100, "limit": 12, "offset": 0, "total_pages": 9, "current_page": 1},
            "data": [
                {"id": 1, "title": "One", "place_of_origin": "France", "artist_display": "A",
                 "inscriptions": null, "date_start": 1880, "date_end": 1884},
                {"id": 2, "title": null, "place_of_origin": null, "artist_display": null,
                 "inscriptions": "signed", "date_start": -500, "date_end": -450}
            ]
        }"#;
        let page = decode_page(body).expect("page");
        assert_eq!(page.total(), 100);
        assert_eq!(page.len(), 2);
        assert_eq!(page.records()[1].date_start, Some(-500));
    }

    #[test]
    fn test_decode_errors_are_decode_kind() {
        for body in [
            &b"<html>rate limited</html>"[..],
            &br#"{"data": []}"#[..],
            &br#"{"data": [{"title": "no id"}], "pagination": {"total": 1}}"#[..],
            &br#"{"data": {}, "pagination": {"total": 1}}"#[..],
        ] {
            let err = decode_page(body).expect_err("should fail");
            assert_eq!(err.kind(), FetchErrorKind::Decode);
        }
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let config = ApiConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 2,
            ..Default::default()
        };
        let client = ArticClient::new(&config).expect("client");
        let err = client.fetch_page(1, 12).await.expect_err("nothing listens on port 9");
        assert_eq!(err.kind(), FetchErrorKind::Network);
    }
}
