//! # Quote Client SDK
//!
//! A typed Rust client for the quote server, plus the fetch-and-save
//! pipeline used by the `fetch-quote` binary.

use std::path::Path;
use std::time::Duration;

use quote_types::Quote;
use reqwest::Client;
use tokio::io::AsyncWriteExt;

/// Quote endpoint of a locally running server.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080/cotacao";

/// Bound on one request to the server, body read included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(300);

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid request: {0}")]
    Request(reqwest::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Quote server client.
pub struct QuoteClient {
    url: String,
    timeout: Duration,
    http: Client,
}

impl QuoteClient {
    /// Creates a new client for the quote endpoint at `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
            http: Client::new(),
        }
    }

    /// Sets the request deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Requests one quote from the server within the deadline.
    pub async fn fetch_quote(&self) -> Result<Quote, ClientError> {
        tokio::time::timeout(self.timeout, self.request())
            .await
            .map_err(|_| ClientError::Timeout(self.timeout))?
    }

    /// Fetches a quote and writes it to `path`.
    ///
    /// The file is only touched once a quote has been received.
    pub async fn fetch_and_save(&self, path: impl AsRef<Path>) -> Result<Quote, ClientError> {
        let quote = self.fetch_quote().await?;
        save_quote(path, &quote).await?;
        Ok(quote)
    }

    async fn request(&self) -> Result<Quote, ClientError> {
        let req = self
            .http
            .get(&self.url)
            .build()
            .map_err(ClientError::Request)?;
        let resp = self.http.execute(req).await?;
        self.handle_response(resp).await
    }

    async fn handle_response(&self, resp: reqwest::Response) -> Result<Quote, ClientError> {
        let status = resp.status();
        let body = resp.text().await?;
        if status.is_success() {
            Ok(serde_json::from_str(&body)?)
        } else {
            Err(ClientError::Api {
                status: status.as_u16(),
                message: body.trim().to_string(),
            })
        }
    }
}

/// Text written to the output file for `quote`.
pub fn render(quote: &Quote) -> String {
    format!("Dólar: {}", quote.bid())
}

/// Creates (or truncates) `path` and writes the rendered quote.
pub async fn save_quote(path: impl AsRef<Path>, quote: &Quote) -> Result<(), ClientError> {
    let mut file = tokio::fs::File::create(path.as_ref()).await?;
    file.write_all(render(quote).as_bytes()).await?;
    file.flush().await?;
    tracing::debug!("Wrote quote to {}", path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::{Router, http::StatusCode, routing::get};

    async fn spawn_server(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/cotacao", addr)
    }

    async fn quote_server(body: &'static str) -> String {
        spawn_server(Router::new().route("/cotacao", get(move || async move { body }))).await
    }

    async fn unreachable_url() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}/cotacao", addr)
    }

    #[test]
    fn test_client_creation() {
        let client = QuoteClient::new(DEFAULT_SERVER_URL);
        assert_eq!(client.url, "http://localhost:8080/cotacao");
        assert_eq!(client.timeout, Duration::from_millis(300));
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = QuoteClient::new("http://localhost:8080/cotacao/");
        assert_eq!(client.url, "http://localhost:8080/cotacao");
    }

    #[test]
    fn test_render() {
        assert_eq!(render(&Quote::new("5.4321")), "Dólar: 5.4321");
    }

    #[tokio::test]
    async fn test_fetch_and_save_writes_exact_bytes() {
        let url = quote_server(r#"{"bid":"5.4321"}"#).await;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cotation.txt");

        let quote = QuoteClient::new(url).fetch_and_save(&path).await.unwrap();

        assert_eq!(quote.bid(), "5.4321");
        assert_eq!(std::fs::read(&path).unwrap(), "Dólar: 5.4321".as_bytes());
    }

    #[tokio::test]
    async fn test_save_truncates_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cotation.txt");
        std::fs::write(&path, "Dólar: 5.0000000000 (stale)").unwrap();

        save_quote(&path, &Quote::new("5.43")).await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Dólar: 5.43");
    }

    #[tokio::test]
    async fn test_unreachable_server_leaves_no_file() {
        let url = unreachable_url().await;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cotation.txt");

        let result = QuoteClient::new(url).fetch_and_save(&path).await;

        assert!(matches!(result, Err(ClientError::Http(_))));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_unreachable_server_keeps_existing_file() {
        let url = unreachable_url().await;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cotation.txt");
        std::fs::write(&path, "Dólar: 5.40").unwrap();

        let result = QuoteClient::new(url).fetch_and_save(&path).await;

        assert!(result.is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Dólar: 5.40");
    }

    #[tokio::test]
    async fn test_slow_server_times_out() {
        let router = Router::new().route(
            "/cotacao",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                r#"{"bid":"5.43"}"#
            }),
        );
        let url = spawn_server(router).await;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cotation.txt");

        let started = std::time::Instant::now();
        let result = QuoteClient::new(url).fetch_and_save(&path).await;

        assert!(started.elapsed() < Duration::from_secs(1));
        assert!(matches!(result, Err(ClientError::Timeout(_))));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_server_error_is_api_error() {
        let router = Router::new().route(
            "/cotacao",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Upstream deadline of 200ms exceeded",
                )
            }),
        );
        let url = spawn_server(router).await;

        let result = QuoteClient::new(url).fetch_quote().await;

        let Err(ClientError::Api { status, message }) = result else {
            panic!("expected API error");
        };
        assert_eq!(status, 500);
        assert_eq!(message, "Upstream deadline of 200ms exceeded");
    }

    #[tokio::test]
    async fn test_malformed_body_is_json_error() {
        let url = quote_server(r#"{"price":"5.43"}"#).await;

        let result = QuoteClient::new(url).fetch_quote().await;

        assert!(matches!(result, Err(ClientError::Json(_))));
    }

    #[tokio::test]
    async fn test_malformed_url_is_request_error() {
        let result = QuoteClient::new("not a url").fetch_quote().await;

        assert!(matches!(result, Err(ClientError::Request(_))));
    }

    #[tokio::test]
    async fn test_missing_output_directory_is_io_error() {
        let url = quote_server(r#"{"bid":"5.43"}"#).await;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing/cotation.txt");

        let result = QuoteClient::new(url).fetch_and_save(&path).await;

        assert!(matches!(result, Err(ClientError::Io(_))));
    }
}
