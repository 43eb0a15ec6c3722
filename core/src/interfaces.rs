//! Local interface discovery.
//!
//! A thin, sequential wrapper around the operating system's interface table:
//! enumerate the adapters, drop everything that is down or loopback, and keep
//! the IPv4 addresses of what remains. Read-only, no concurrency.

use std::net::Ipv4Addr;

use pnet::datalink::{self, NetworkInterface};
use pnet::ipnetwork::IpNetwork;
use tracing::debug;

use portview_common::error::DiscoveryError;

/// Returns the IPv4 addresses bound to the machine's active, non-loopback
/// interfaces, in interface table order.
pub fn discover_local_ipv4() -> Result<Vec<Ipv4Addr>, DiscoveryError> {
    let interfaces: Vec<NetworkInterface> = datalink::interfaces();
    if interfaces.is_empty() {
        return Err(DiscoveryError::NoInterfaces);
    }
    debug!("identified {} network interface(s)", interfaces.len());
    collect_ipv4(&interfaces)
}

fn collect_ipv4(interfaces: &[NetworkInterface]) -> Result<Vec<Ipv4Addr>, DiscoveryError> {
    let mut addresses: Vec<Ipv4Addr> = Vec::new();

    for interface in interfaces.iter().filter(|i| is_scannable(i)) {
        for network in &interface.ips {
            if let IpNetwork::V4(v4) = network {
                addresses.push(v4.ip());
            }
        }
    }

    if addresses.is_empty() {
        return Err(DiscoveryError::NoAddressesFound);
    }
    Ok(addresses)
}

fn is_scannable(interface: &NetworkInterface) -> bool {
    interface.is_up() && !interface.is_loopback()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
