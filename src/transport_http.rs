//! HTTP transport using reqwest.

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;

use crate::transport::{HttpResponse, Transport};
use crate::Result;

/// A transport that sends real HTTP requests via reqwest.
///
/// Uses the client's default timeouts; nothing is retried.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a new `HttpTransport` with default settings.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("es-countries/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Creates an `HttpTransport` with a custom reqwest client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, method: Method, url: &str, body: Option<&Value>) -> Result<HttpResponse> {
        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_transport_new() {
        assert!(HttpTransport::new().is_ok());
    }

    #[test]
    fn test_http_transport_with_client() {
        let client = Client::builder()
            .user_agent("test-agent")
            .build()
            .unwrap();
        let _transport = HttpTransport::with_client(client);
    }

    #[tokio::test]
    async fn test_http_transport_connection_refused() {
        let transport = HttpTransport::new().unwrap();
        let result = transport.get("http://127.0.0.1:1").await;
        assert!(matches!(result, Err(crate::DemoError::Http(_))));
    }
}
