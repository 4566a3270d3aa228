//! Demo orchestration: populate the countries index and query it.

use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use crate::countries::CountrySource;
use crate::engine::SearchNode;
use crate::node::probe_node;
use crate::transport::Transport;
use crate::{queries, DemoConfig, Result};

/// Statuses ignored when deleting the countries index.
const DELETE_IGNORE: [u16; 2] = [400, 404];

/// Creates, queries and deletes the region's countries index.
pub struct EsDemo<T: Transport + ?Sized> {
    config: DemoConfig,
    transport: Arc<T>,
    node: SearchNode<T>,
    countries: CountrySource<T>,
}

impl<T: Transport + ?Sized> EsDemo<T> {
    /// Sets up the clients and checks that the search node is reachable.
    pub async fn connect(config: DemoConfig, transport: Arc<T>) -> Result<Self> {
        let node = SearchNode::new(config.node_url(), Arc::clone(&transport));
        let countries = CountrySource::new(Arc::clone(&transport));
        probe_node(transport.as_ref(), node.base_url()).await?;

        Ok(Self {
            config,
            transport,
            node,
            countries,
        })
    }

    /// Configuration this demo runs with.
    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    /// Fetches the region's countries and indexes each one under its position.
    ///
    /// Returns the number of documents indexed. The first failing index call
    /// aborts the run; nothing already indexed is rolled back.
    pub async fn create_region_index(&self) -> Result<u64> {
        let page = self
            .countries
            .fetch_region(&self.config.region_url()?)
            .await?;
        info!("Total number of countries: {}", page.total_count);

        probe_node(self.transport.as_ref(), self.node.base_url()).await?;

        let index = self.config.index_name();
        let doc_type = self.config.doc_type();
        for id in 0..page.total_count {
            self.node
                .index(index, &doc_type, id, page.document(id)?)
                .await?;
        }

        info!("Index for region {} created successfully", self.config.region);
        Ok(page.total_count)
    }

    /// Gets a country by its document id.
    pub async fn search_by_id(&self, id: u64) -> Result<Value> {
        let country = self
            .node
            .get(self.config.index_name(), &self.config.doc_type(), id)
            .await?;
        info!("{}", country);
        Ok(country)
    }

    /// Searches countries by name.
    pub async fn search_by_name(&self, name: &str) -> Result<Value> {
        let result = self
            .node
            .search(self.config.index_name(), &queries::name_match(name))
            .await?;
        info!("{}", result);
        Ok(result)
    }

    /// Lists every index on the node.
    pub async fn list_all_indices(&self) -> Result<Vec<String>> {
        let indices = self.node.list_indices("*").await?;
        for index in &indices {
            info!("{}", index);
        }
        Ok(indices)
    }

    /// Deletes the countries index; a missing index is not an error.
    pub async fn delete_region_index(&self) -> Result<()> {
        self.node
            .delete_index(self.config.index_name(), &DELETE_IGNORE)
            .await?;
        Ok(())
    }

    /// Runs the four example queries in order and returns their raw results.
    pub async fn custom_query(&self) -> Result<Vec<Value>> {
        let mut results = Vec::with_capacity(4);
        for body in queries::examples() {
            results.push(self.node.search(self.config.index_name(), &body).await?);
        }
        Ok(results)
    }
}
