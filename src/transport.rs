//! HTTP transport abstraction shared by the country source and the search node client.

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use crate::Result;

/// Raw response returned by a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl HttpResponse {
    /// Creates a response with the given status and body.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for issuing a single HTTP request.
///
/// Implementations carry their own client configuration; `send` is a
/// method + URL + optional JSON body in, status + text out interface.
/// Non-2xx statuses are returned as responses, not errors.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends one request and returns the raw response.
    async fn send(&self, method: Method, url: &str, body: Option<&Value>) -> Result<HttpResponse>;

    /// Sends a GET without a body.
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        self.send(Method::GET, url, None).await
    }
}


#[cfg(test)]
mod tests {
    use super::mock::MockTransport;
    use super::*;

    #[test]
    fn test_http_response_new() {
        let response = HttpResponse::new(200, "{}");
        assert_eq!(response.status, 200);
        assert_eq!(response.body, "{}");
    }

    #[test]
    fn test_http_response_is_success() {
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(201, "").is_success());
        assert!(!HttpResponse::new(199, "").is_success());
        assert!(!HttpResponse::new(301, "").is_success());
        assert!(!HttpResponse::new(404, "").is_success());
        assert!(!HttpResponse::new(500, "").is_success());
    }

    #[tokio::test]
    async fn test_failing_transport_returns_http_error() {
        let transport = MockTransport::failing();
        let result = transport.get("http://localhost:8771").await;
        assert!(matches!(result, Err(crate::DemoError::Http(_))));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_default_get_sends_get_without_body() {
        let transport = MockTransport::always(200, "ok");
        let response = transport.get("http://localhost:8771").await.unwrap();
        assert_eq!(response.body, "ok");

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::GET);
        assert_eq!(requests[0].url, "http://localhost:8771");
        assert!(requests[0].body.is_none());
    }
}
