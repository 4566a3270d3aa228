//! Search node connectivity probe.

use tracing::{debug, error, info};

use crate::transport::Transport;
use crate::{DemoError, Result};

/// Probes the node at `url` with a plain GET.
///
/// Succeeds only on status 200. A transport failure maps to
/// [`DemoError::NodeUnreachable`], any other status to
/// [`DemoError::NodeUnavailable`].
pub async fn probe_node<T: Transport + ?Sized>(transport: &T, url: &str) -> Result<()> {
    let response = match transport.get(url).await {
        Ok(response) => response,
        Err(e) => {
            debug!("Search node not running");
            error!("{}", e);
            return Err(DemoError::NodeUnreachable {
                url: url.to_string(),
            });
        }
    };

    if response.status == 200 {
        info!("Connected to node");
        Ok(())
    } else {
        info!("Failed to connect to node");
        debug!("Node returned status: {}", response.status);
        Err(DemoError::NodeUnavailable {
            url: url.to_string(),
            status: response.status,
        })
    }
}

/// Returns true iff the node at `url` answers a GET with 200.
pub async fn check_node_connection<T: Transport + ?Sized>(transport: &T, url: &str) -> bool {
    probe_node(transport, url).await.is_ok()
}
