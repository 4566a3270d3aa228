//! es-countries CLI - index country records and run example queries.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use serde_json::Value;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use es_countries::{DemoConfig, EsDemo, HttpTransport};

/// Populate a search node with countries of a region and query it
#[derive(Parser)]
#[command(name = "es-countries")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Search node host
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Search node port
    #[arg(long, default_value_t = 8771)]
    port: u16,

    /// Region to fetch countries for (also names the document type)
    #[arg(long, default_value = "Europe")]
    region: String,

    /// Skip fetching and indexing the region's countries
    #[arg(long)]
    skip_index: bool,

    /// Get a country by document id
    #[arg(long, value_name = "ID")]
    get: Option<u64>,

    /// Search countries by name
    #[arg(long, value_name = "NAME")]
    name: Option<String>,

    /// List all indices on the node
    #[arg(long)]
    list_indices: bool,

    /// Delete the countries index when done
    #[arg(long)]
    delete_index: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_line_number(true)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = DemoConfig::new()
        .with_host(&cli.host)
        .with_port(cli.port)
        .with_region(&cli.region);
    let demo = EsDemo::connect(config, Arc::new(HttpTransport::new()?)).await?;

    if !cli.skip_index {
        demo.create_region_index().await?;
    }

    if let Some(id) = cli.get {
        demo.search_by_id(id).await?;
    }

    if let Some(name) = &cli.name {
        demo.search_by_name(name).await?;
    }

    if cli.list_indices {
        demo.list_all_indices().await?;
    }

    let results = demo.custom_query().await?;
    for (i, result) in results.iter().enumerate() {
        println!("Query {}: {} hits", i + 1, total_hits(result));
    }
    if let Some(last) = results.last() {
        for hit in hits(last) {
            let source = &hit["_source"];
            debug!(
                "{} {} {} {}",
                hit["_score"], source["Name"], source["CurrencyName"], source["CurrencyCode"]
            );
        }
    }

    if cli.delete_index {
        demo.delete_region_index().await?;
    }

    Ok(())
}

fn hits(result: &Value) -> &[Value] {
    result["hits"]["hits"]
        .as_array()
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Total hit count; newer nodes report `{"value": n}`, older ones a bare number.
fn total_hits(result: &Value) -> u64 {
    let total = &result["hits"]["total"];
    total
        .as_u64()
        .or_else(|| total["value"].as_u64())
        .unwrap_or(0)
}
