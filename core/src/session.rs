//! Orchestration of one full scan session.
//!
//! Discovery runs first and its failure aborts the session. Scans then run
//! sequentially per address; a failure on one address is logged and the
//! session moves on to the next.

use tracing::error;

use portview_common::error::DiscoveryError;
use portview_common::network::view::NetworkView;

use crate::interfaces;
use crate::scanner::TcpScanner;

/// Discovers the local IPv4 addresses and scans each over the full port
/// space, building the session's [`NetworkView`].
pub async fn survey(scanner: &TcpScanner) -> Result<NetworkView, DiscoveryError> {
    let addresses = interfaces::discover_local_ipv4()?;

    let mut view: NetworkView = NetworkView::new();
    for address in addresses {
        let address: String = address.to_string();
        view.add_address(address.clone());

        match scanner.scan_host(&address).await {
            Ok(ports) => view.record_open_ports(&address, ports),
            Err(e) => error!("failed to scan {address}: {e}"),
        }
    }

    Ok(view)
}
