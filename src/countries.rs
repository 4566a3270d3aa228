//! Country API client.

use std::sync::Arc;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

use crate::transport::Transport;
use crate::{DemoError, Result};

/// One page of the country API, e.g. `getCountries?pRegion=Europe`.
///
/// Country records stay opaque JSON objects.
#[derive(Debug, Clone, Deserialize)]
pub struct CountriesPage {
    /// Number of countries the API says it returned. Negative counts read as 0.
    #[serde(rename = "TotalCount", deserialize_with = "non_negative")]
    pub total_count: u64,
    /// The country records; a missing or null `Response` is empty.
    #[serde(rename = "Response", default, deserialize_with = "null_as_empty")]
    pub response: Vec<Value>,
}

fn non_negative<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<u64, D::Error> {
    let count = i64::deserialize(deserializer)?;
    Ok(u64::try_from(count).unwrap_or(0))
}

fn null_as_empty<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Vec<Value>, D::Error> {
    Ok(Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default())
}

impl CountriesPage {
    /// Returns the record at position `index`.
    pub fn document(&self, index: u64) -> Result<&Value> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.response.get(i))
            .ok_or(DemoError::MissingDocument {
                index,
                len: self.response.len(),
            })
    }
}

/// Fetches country records from the country API.
pub struct CountrySource<T: Transport + ?Sized> {
    transport: Arc<T>,
}

impl<T: Transport + ?Sized> CountrySource<T> {
    /// Creates a source sharing the given transport.
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Fetches and parses the countries listed at `region_url`.
    pub async fn fetch_region(&self, region_url: &str) -> Result<CountriesPage> {
        let response = self.transport.get(region_url).await?;
        debug!("Country API returned status {}", response.status);
        let page: CountriesPage = serde_json::from_str(&response.body)?;
        Ok(page)
    }
}
