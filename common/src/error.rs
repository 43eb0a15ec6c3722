use thiserror::Error;

/// Failures of the local interface discovery step.
///
/// Per-port connection failures are deliberately absent here: a port that
/// refuses, times out or is unreachable is classified as closed, never as
/// an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiscoveryError {
    /// The operating system reported no network interfaces at all.
    #[error("no network interfaces available")]
    NoInterfaces,

    /// The addresses of one interface could not be read.
    ///
    /// Aborts the whole discovery rather than skipping the interface.
    #[error("couldn't fetch addresses for interface '{0}'")]
    AddressQuery(String),

    /// Discovery ran but no usable IPv4 address survived filtering.
    #[error("no IPv4 addresses available")]
    NoAddressesFound,
}

/// Input validation failures of a scan request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// A scan was requested with an empty host string.
    #[error("no host to scan")]
    EmptyHost,

    /// The requested port range runs backwards.
    #[error("invalid port range: start {start} exceeds end {end}")]
    InvalidRange { start: u16, end: u16 },
}
