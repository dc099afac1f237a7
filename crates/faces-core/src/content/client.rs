use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_ENCODING, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use super::models::{PageResponse, WebPage, Website, WebsiteResponse};
use crate::config::{ApiConfig, AppConfig};
use crate::feed::Feed;
use crate::{Error, Result};

const MAX_DOCUMENT_BYTES: usize = 5 * 1024 * 1024;
const CLIENT_USER_AGENT: &str = concat!("faces/", env!("CARGO_PKG_VERSION"));

/// Read access to the documents the site is built from
#[async_trait::async_trait]
pub trait ContentSource: Send + Sync {
    /// Website document: theme and header navigation
    async fn website(&self, language_code: &str) -> Result<Website>;

    /// Page document with its sections
    async fn page(&self, slug: &str, language_code: &str) -> Result<WebPage>;

    /// Directory feed, in publish order
    async fn feed(&self, directory: &str) -> Result<Feed>;
}

/// Content API client. One GET per document, no retries and no caching:
/// every failure is returned to the caller as is.
pub struct ContentClient {
    client: Client,
    websites_base: Url,
    contents_base: Url,
    domain: String,
    public_key: String,
}

impl ContentClient {
    /// Create a new client with configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        Self::from_api_config(&config.api)
    }

    pub fn from_api_config(api: &ApiConfig) -> Result<Self> {
        let client = Self::build_client(api.request_timeout_secs)?;

        Ok(Self {
            client,
            websites_base: parse_base(&api.websites_base)?,
            contents_base: parse_base(&api.contents_base)?,
            domain: api.domain.clone(),
            public_key: api.public_key.clone(),
        })
    }

    fn build_client(timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .redirect(reqwest::redirect::Policy::limited(10))
            .default_headers(Self::build_headers())
            .build()
            .map_err(Error::Http)
    }

    fn build_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate, br"));
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));
        headers
    }

    pub fn website_url(&self, language_code: &str) -> Url {
        let mut url = self.websites_base.clone();
        push_segments(&mut url, &[&self.domain]);
        url.query_pairs_mut()
            .append_pair("public_key", &self.public_key)
            .append_pair("language_code", language_code);
        url
    }

    pub fn page_url(&self, slug: &str, language_code: &str) -> Url {
        let mut url = self.websites_base.clone();
        push_segments(&mut url, &[&self.domain, "pages", slug]);
        url.query_pairs_mut()
            .append_pair("public_key", &self.public_key)
            .append_pair("language_code", language_code);
        url
    }

    pub fn feed_url(&self, directory: &str) -> Url {
        let mut url = self.contents_base.clone();
        push_segments(&mut url, &[directory, "feed.json"]);
        url.query_pairs_mut().append_pair("public_key", &self.public_key);
        url
    }

    async fn get_bytes(&self, url: &Url) -> Result<Bytes> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            tracing::warn!("Request failed for {}: {}", url, e);
            Error::Http(e)
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(url.path().to_string()));
        }
        if !status.is_success() {
            tracing::warn!("Content API returned {} for {}", status, url);
            return Err(Error::Fetch {
                url: redact(url),
                reason: format!("HTTP {}", status),
            });
        }

        let body = response.bytes().await?;
        ensure_content_size(body.len(), url)?;
        Ok(body)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let body = self.get_bytes(&url).await?;
        serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!("Malformed document from {}: {}", url, e);
            Error::Fetch {
                url: redact(&url),
                reason: format!("invalid JSON: {}", e),
            }
        })
    }
}

#[async_trait::async_trait]
impl ContentSource for ContentClient {
    async fn website(&self, language_code: &str) -> Result<Website> {
        let response: WebsiteResponse = self.get_json(self.website_url(language_code)).await?;
        Ok(response.website)
    }

    async fn page(&self, slug: &str, language_code: &str) -> Result<WebPage> {
        let response: PageResponse = self.get_json(self.page_url(slug, language_code)).await?;
        Ok(response.page)
    }

    async fn feed(&self, directory: &str) -> Result<Feed> {
        let feed: Feed = self.get_json(self.feed_url(directory)).await?;
        tracing::debug!("Feed '{}': {} items", directory, feed.len());
        Ok(feed)
    }
}

fn parse_base(base: &str) -> Result<Url> {
    let url = Url::parse(base.trim_end_matches('/'))?;
    if url.cannot_be_a_base() {
        return Err(Error::Config(format!("'{}' cannot be used as a base URL", base)));
    }
    Ok(url)
}

fn push_segments(url: &mut Url, segments: &[&str]) {
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
}

/// URL without its query, so the public key stays out of error pages
fn redact(url: &Url) -> String {
    let mut url = url.clone();
    url.set_query(None);
    url.to_string()
}

fn ensure_content_size(size: usize, url: &Url) -> Result<()> {
    if size > MAX_DOCUMENT_BYTES {
        return Err(Error::Fetch {
            url: redact(url),
            reason: format!("document too large ({} bytes)", size),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ContentClient {
        let api = ApiConfig {
            websites_base: format!("{}/websites/v0/websites", server.uri()),
            contents_base: format!("{}/contents/v0/directories", server.uri()),
            domain: "faces.example.com".to_string(),
            public_key: "test-key".to_string(),
            ..ApiConfig::default()
        };
        ContentClient::from_api_config(&api).unwrap()
    }

    #[test]
    fn test_document_urls() {
        let client = ContentClient::new(&AppConfig::default()).unwrap();

        assert_eq!(
            client.feed_url("facing-my-faces").as_str(),
            "https://cdn.revas.app/contents/v0/directories/facing-my-faces/feed.json?public_key=01exy3y9j9pdvyzhchkpj9vc5w"
        );
        assert_eq!(
            client.website_url("it-IT").as_str(),
            "https://cdn.revas.app/websites/v0/websites/facingmyfaces.davidegiovanni.com?public_key=01exy3y9j9pdvyzhchkpj9vc5w&language_code=it-IT"
        );
        assert_eq!(
            client.page_url("index", "it-IT").path(),
            "/websites/v0/websites/facingmyfaces.davidegiovanni.com/pages/index"
        );
    }

    #[test]
    fn test_page_slug_is_one_segment() {
        let client = ContentClient::new(&AppConfig::default()).unwrap();
        let url = client.page_url("../secret page", "it-IT");
        assert!(url.path().ends_with("/pages/..%2Fsecret%20page"));
    }

    #[test]
    fn test_redact_drops_query() {
        let url = Url::parse("https://cdn.example.com/feed.json?public_key=abc").unwrap();
        assert_eq!(redact(&url), "https://cdn.example.com/feed.json");
    }

    #[tokio::test]
    async fn test_fetch_feed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/contents/v0/directories/faces/feed.json"))
            .and(query_param("public_key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"items":[{"id":"x?content=a","title":"A"},{"id":"x?content=b","title":"B"}]}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let feed = client_for(&server).feed("faces").await.unwrap();
        assert_eq!(feed.len(), 2);
        assert_eq!(feed.items[1].slug, "b");
    }

    #[tokio::test]
    async fn test_fetch_website_and_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/websites/v0/websites/faces.example.com"))
            .and(query_param("language_code", "it-IT"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r##"{"website":{"theme":{"primaryColor":"#000"},"headerNav":{"links":[{"title":"About","url":"/about"}]}}}"##,
            ))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/websites/v0/websites/faces.example.com/pages/index"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"page":{"title":"Home","sections":[{"title":"Hello"}]}}"#,
            ))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let website = client.website("it-IT").await.unwrap();
        assert_eq!(website.theme.primary_color, "#000");
        assert_eq!(website.navbar().len(), 1);

        let page = client.page("index", "it-IT").await.unwrap();
        assert_eq!(page.title, "Home");
        assert_eq!(page.sections.len(), 1);
    }

    #[tokio::test]
    async fn test_server_error_is_fetch_failure_without_retry() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server).feed("faces").await.unwrap_err();
        assert!(matches!(err, Error::Fetch { .. }));
        assert!(err.to_string().contains("503"));
        assert!(!err.to_string().contains("test-key"));
    }

    #[tokio::test]
    async fn test_missing_document_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client_for(&server).page("nope", "it-IT").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_malformed_json_is_fetch_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).feed("faces").await.unwrap_err();
        match err {
            Error::Fetch { reason, .. } => assert!(reason.contains("invalid JSON")),
            other => panic!("unexpected error: {}", other),
        }
    }
}
