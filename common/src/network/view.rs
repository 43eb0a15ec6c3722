use std::collections::HashMap;

/// The root result of one scan session.
///
/// Holds the machine's local IPv4 addresses in discovery order and, for each
/// scanned address, its open TCP ports sorted ascending. Built once per run
/// and handed to the presentation layer as-is.
#[derive(Debug, Default, Clone)]
pub struct NetworkView {
    addresses: Vec<String>,
    open_ports: HashMap<String, Vec<u16>>,
}

impl NetworkView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_address(&mut self, address: String) {
        if !self.addresses.contains(&address) {
            self.addresses.push(address);
        }
    }

    /// Records the scan outcome for a previously added address.
    ///
    /// Ports are deduplicated and sorted ascending so the view reads the same
    /// no matter in which order the concurrent probes reported. Unknown
    /// addresses are ignored, which keeps every map key backed by an entry in
    /// the address list.
    pub fn record_open_ports(&mut self, address: &str, mut ports: Vec<u16>) {
        if !self.addresses.iter().any(|a| a == address) {
            return;
        }
        ports.sort_unstable();
        ports.dedup();
        self.open_ports.insert(address.to_string(), ports);
    }

    pub fn addresses(&self) -> &[String] {
        &self.addresses
    }

    pub fn open_ports(&self, address: &str) -> Option<&[u16]> {
        self.open_ports.get(address).map(Vec::as_slice)
    }

    /// Iterates the scanned addresses in discovery order with their ports.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u16])> {
        self.addresses.iter().filter_map(|address| {
            self.open_ports
                .get(address)
                .map(|ports| (address.as_str(), ports.as_slice()))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}
