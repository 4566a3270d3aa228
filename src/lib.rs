//! # es-countries
//!
//! A small demo client that fills an Elasticsearch-compatible node with
//! country records from a public REST API, then runs a few example queries.
//!
//! The pipeline is linear and sequential:
//!
//! - Probe the node with a plain GET
//! - Fetch one page of countries for a region
//! - Index each country under its position in the page
//! - Send the example query bodies
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use es_countries::{DemoConfig, EsDemo, HttpTransport};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let config = DemoConfig::new().with_port(9200).with_region("Americas");
//!     let demo = EsDemo::connect(config, Arc::new(HttpTransport::new()?)).await?;
//!
//!     demo.create_region_index().await?;
//!     demo.search_by_name("Chile").await?;
//!     Ok(())
//! }
//! ```

mod config;
mod countries;
mod demo;
mod engine;
mod error;
mod node;
mod transport;
mod transport_http;

pub mod queries;

pub use config::{DemoConfig, COUNTRIES_URL, INDEX_NAME};
pub use countries::{CountriesPage, CountrySource};
pub use demo::EsDemo;
pub use engine::SearchNode;
pub use error::{DemoError, Result};
pub use node::{check_node_connection, probe_node};
pub use transport::{HttpResponse, Transport};
pub use transport_http::HttpTransport;
