//! Quote provider HTTP client

use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::types::*;

/// Provider used when no base URL is configured
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co";

/// Key accepted by the provider for its demo tier
pub const DEMO_API_KEY: &str = "demo";

/// HTTP client for the quote provider
#[derive(Debug, Clone)]
pub struct QuoteClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl QuoteClient {
    /// Create a new client with the given base URL and API key
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: Client::new(),
        }
    }

    /// Use a preconfigured HTTP client (proxy, TLS, timeouts)
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request against the provider's query endpoint
    async fn query<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T> {
        let response = self
            .client
            .get(format!("{}/query", self.base_url))
            .query(params)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "Request failed: {} {}",
                response.status(),
                response.text().await.unwrap_or_default()
            ));
        }

        Ok(response.json().await?)
    }

    /// Search for symbols matching `query`.
    ///
    /// Best effort: any failure is logged and yields no matches.
    pub async fn search_symbols(&self, query: &str) -> Vec<SymbolMatch> {
        let result: Result<SearchResponse> = self
            .query(&[("function", "SYMBOL_SEARCH"), ("keywords", query)])
            .await;

        match result {
            Ok(response) => {
                let matches = response.best_matches.unwrap_or_default();
                tracing::debug!("Symbol search {:?} returned {} matches", query, matches.len());
                matches
            }
            Err(e) => {
                tracing::error!("Error searching stocks: {}", e);
                Vec::new()
            }
        }
    }

    /// Fetch a raw time series, e.g. `interval = "daily"` for `TIME_SERIES_DAILY`.
    ///
    /// The provider payload is returned verbatim; failures are logged and
    /// propagated.
    pub async fn fetch_time_series(&self, symbol: &str, interval: &str) -> Result<serde_json::Value> {
        let function = format!("TIME_SERIES_{}", interval.to_uppercase());

        self.query(&[("function", function.as_str()), ("symbol", symbol)])
            .await
            .map_err(|e| {
                tracing::error!("Error fetching stock data: {}", e);
                e
            })
    }
}

impl Default for QuoteClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEMO_API_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response and hand back the request line.
    async fn serve_once(status: &str, body: &str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let n = socket.read(&mut buf).await.unwrap();
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&buf[..n])
                .lines()
                .next()
                .unwrap_or_default()
                .to_string()
        });

        (format!("http://{}", addr), handle)
    }

    fn local_client(base_url: &str) -> QuoteClient {
        let http = Client::builder().no_proxy().build().unwrap();
        QuoteClient::new(base_url, DEMO_API_KEY).with_http_client(http)
    }

    #[tokio::test]
    async fn test_search_parses_matches() {
        let body = r#"{"bestMatches":[{"1. symbol":"AAPL","2. name":"Apple Inc"},{"1. symbol":"APLE","2. name":"Apple Hospitality REIT Inc"}]}"#;
        let (base_url, server) = serve_once("200 OK", body).await;

        let http = Client::builder().no_proxy().build().unwrap();
        let client = QuoteClient::new(&base_url, "secret").with_http_client(http);
        let matches = client.search_symbols("apple").await;

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0], SymbolMatch::new("AAPL", "Apple Inc"));

        let request_line = server.await.unwrap();
        assert!(request_line.starts_with("GET /query?"));
        assert!(request_line.contains("function=SYMBOL_SEARCH"));
        assert!(request_line.contains("keywords=apple"));
        assert!(request_line.contains("apikey=secret"));
    }

    #[tokio::test]
    async fn test_search_network_error_returns_empty() {
        // Nothing listens on the discard port
        let client = local_client("http://127.0.0.1:9");
        assert!(client.search_symbols("AAPL").await.is_empty());
    }

    #[tokio::test]
    async fn test_search_non_success_returns_empty() {
        let (base_url, _server) = serve_once("503 Service Unavailable", "{}").await;
        let client = local_client(&base_url);
        assert!(client.search_symbols("AAPL").await.is_empty());
    }

    #[tokio::test]
    async fn test_search_malformed_payload_returns_empty() {
        let (base_url, _server) = serve_once("200 OK", "<html>not json</html>").await;
        let client = local_client(&base_url);
        assert!(client.search_symbols("AAPL").await.is_empty());
    }

    #[tokio::test]
    async fn test_search_without_matches_field_returns_empty() {
        let (base_url, _server) = serve_once("200 OK", r#"{"Note":"limit"}"#).await;
        let client = local_client(&base_url);
        assert!(client.search_symbols("AAPL").await.is_empty());
    }

    #[tokio::test]
    async fn test_time_series_passthrough() {
        let body = r#"{"Meta Data":{"2. Symbol":"IBM"},"Time Series (Daily)":{}}"#;
        let (base_url, server) = serve_once("200 OK", body).await;

        let client = local_client(&base_url);
        let value = client.fetch_time_series("IBM", "daily").await.unwrap();

        assert_eq!(value["Meta Data"]["2. Symbol"], "IBM");
        let request_line = server.await.unwrap();
        assert!(request_line.contains("function=TIME_SERIES_DAILY"));
        assert!(request_line.contains("symbol=IBM"));
    }

    #[tokio::test]
    async fn test_time_series_error_propagates() {
        let (base_url, _server) = serve_once("500 Internal Server Error", "boom").await;
        let client = local_client(&base_url);
        assert!(client.fetch_time_series("IBM", "weekly").await.is_err());
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = QuoteClient::new("http://localhost:8080/", DEMO_API_KEY);
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
