//! Search node client.
//!
//! Thin pass-throughs to the node's document and index REST endpoints.
//! Responses are handed back as raw JSON without any translation.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use crate::transport::{HttpResponse, Transport};
use crate::{DemoError, Result};

/// Client for an Elasticsearch-compatible node.
pub struct SearchNode<T: Transport + ?Sized> {
    base_url: String,
    transport: Arc<T>,
}

impl<T: Transport + ?Sized> SearchNode<T> {
    /// Creates a client for the node at `base_url`.
    pub fn new(base_url: impl Into<String>, transport: Arc<T>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
        }
    }

    /// Base URL of the node.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Indexes `body` as document `id` of type `doc_type`.
    pub async fn index(&self, index: &str, doc_type: &str, id: u64, body: &Value) -> Result<Value> {
        let url = self.url(&[index, doc_type, &id.to_string()]);
        self.request(Method::PUT, &url, Some(body), &[]).await
    }

    /// Fetches document `id` of type `doc_type`.
    pub async fn get(&self, index: &str, doc_type: &str, id: u64) -> Result<Value> {
        let url = self.url(&[index, doc_type, &id.to_string()]);
        self.request(Method::GET, &url, None, &[]).await
    }

    /// Runs a query DSL `body` against `index`.
    pub async fn search(&self, index: &str, body: &Value) -> Result<Value> {
        let url = self.url(&[index, "_search"]);
        self.request(Method::POST, &url, Some(body), &[]).await
    }

    /// Returns the names of the indices matching `pattern`.
    pub async fn list_indices(&self, pattern: &str) -> Result<Vec<String>> {
        let url = format!("{}/{}", self.base_url, pattern);
        let indices = self.request(Method::GET, &url, None, &[]).await?;
        Ok(indices
            .as_object()
            .map(|map| map.keys().cloned().collect())
            .unwrap_or_default())
    }

    /// Deletes `index`. Statuses listed in `ignore` are not treated as errors.
    pub async fn delete_index(&self, index: &str, ignore: &[u16]) -> Result<Value> {
        let url = self.url(&[index]);
        self.request(Method::DELETE, &url, None, ignore).await
    }

    fn url(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        for segment in segments {
            url.push('/');
            url.push_str(&urlencoding::encode(segment));
        }
        url
    }

    async fn request(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
        ignore: &[u16],
    ) -> Result<Value> {
        debug!("{} {}", method, url);
        let response = self.transport.send(method, url, body).await?;
        into_json(response, ignore)
    }
}

fn into_json(response: HttpResponse, ignore: &[u16]) -> Result<Value> {
    if !response.is_success() {
        if ignore.contains(&response.status) {
            debug!("Ignoring status {}", response.status);
            return Ok(serde_json::from_str(&response.body).unwrap_or(Value::Null));
        }
        return Err(DemoError::Engine {
            status: response.status,
            body: response.body,
        });
    }

    if response.body.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&response.body)?)
}
