//! Integration tests against a live search node and the country API.
//!
//! These tests are marked with `#[ignore]` by default because they require
//! network access and a node listening on `ES_HOST:ES_PORT`
//! (default `localhost:8771`).
//!
//! Run with: `cargo test --test integration -- --ignored --test-threads=1`

use std::sync::Arc;

use es_countries::{check_node_connection, DemoConfig, EsDemo, HttpTransport};

fn config() -> DemoConfig {
    let mut config = DemoConfig::new();
    if let Ok(host) = std::env::var("ES_HOST") {
        config = config.with_host(host);
    }
    if let Some(port) = std::env::var("ES_PORT").ok().and_then(|p| p.parse().ok()) {
        config = config.with_port(port);
    }
    config
}

async fn connect(config: DemoConfig) -> EsDemo<HttpTransport> {
    let transport = Arc::new(HttpTransport::new().unwrap());
    EsDemo::connect(config, transport).await.unwrap()
}

mod node_tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_node_is_not_connected() {
        let transport = HttpTransport::new().unwrap();
        assert!(!check_node_connection(&transport, "http://127.0.0.1:1").await);
    }

    #[tokio::test]
    async fn test_connect_to_unreachable_node_fails() {
        let config = DemoConfig::new().with_host("127.0.0.1").with_port(1);
        let transport = Arc::new(HttpTransport::new().unwrap());
        let result = EsDemo::connect(config, transport).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    #[ignore]
    async fn test_live_node_is_connected() {
        let transport = HttpTransport::new().unwrap();
        assert!(check_node_connection(&transport, &config().node_url()).await);
    }
}

mod demo_tests {
    use super::*;

    #[tokio::test]
    #[ignore]
    async fn test_create_and_query_region_index() {
        let demo = connect(config()).await;
        demo.delete_region_index().await.unwrap();

        let count = demo.create_region_index().await.unwrap();
        println!("Indexed {} countries", count);
        assert!(count > 0, "Country API should return countries for Europe");

        let indices = demo.list_all_indices().await.unwrap();
        assert!(indices.iter().any(|i| i == "countries_index"));

        let country = demo.search_by_id(0).await.unwrap();
        assert_eq!(country["found"], true);

        let results = demo.custom_query().await.unwrap();
        assert_eq!(results.len(), 4);

        demo.delete_region_index().await.unwrap();
    }

    #[tokio::test]
    #[ignore]
    async fn test_delete_missing_index_is_ok() {
        let demo = connect(config()).await;
        demo.delete_region_index().await.unwrap();
        demo.delete_region_index().await.unwrap();
    }
}
