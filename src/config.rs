//! Demo configuration.

use url::Url;

use crate::Result;

/// Country API endpoint listing countries of a region.
pub const COUNTRIES_URL: &str = "http://countryapi.gear.host/v1/Country/getCountries";

/// Name of the index the country documents are written to.
pub const INDEX_NAME: &str = "countries_index";

/// Configuration for a demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Search node host.
    pub host: String,
    /// Search node port.
    pub port: u16,
    /// Region passed to the country API and used in the document type.
    pub region: String,
    /// Base URL of the country API.
    pub countries_url: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 8771,
            region: "Europe".to_string(),
            countries_url: COUNTRIES_URL.to_string(),
        }
    }
}

impl DemoConfig {
    /// Creates a configuration with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search node host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the search node port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Points the country source at another base URL.
    pub fn with_countries_url(mut self, url: impl Into<String>) -> Self {
        self.countries_url = url.into();
        self
    }

    /// Base URL of the search node, e.g. `http://localhost:8771`.
    pub fn node_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Country API URL filtered by the configured region.
    pub fn region_url(&self) -> Result<String> {
        let url = Url::parse_with_params(&self.countries_url, &[("pRegion", &self.region)])?;
        Ok(url.into())
    }

    /// Index holding the country documents.
    pub fn index_name(&self) -> &str {
        INDEX_NAME
    }

    /// Document type of this region's countries, e.g. `Europe_countries`.
    pub fn doc_type(&self) -> String {
        format!("{}_countries", self.region)
    }
}
