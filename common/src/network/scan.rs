use std::time::Duration;

use crate::error::ScanError;
use crate::network::ports::PortRange;

/// Per-attempt connect timeout used when the caller does not pick one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// One scan operation: a host, the ports to probe and the per-attempt timeout.
///
/// Validation happens at construction, so holding a `ScanRequest` means the
/// inputs were acceptable before any network activity started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    pub host: String,
    pub range: PortRange,
    pub timeout: Duration,
}

impl ScanRequest {
    pub fn new(
        host: impl Into<String>,
        range: PortRange,
        timeout: Duration,
    ) -> Result<Self, ScanError> {
        let host: String = host.into();
        if host.is_empty() {
            return Err(ScanError::EmptyHost);
        }
        Ok(Self {
            host,
            range,
            timeout,
        })
    }

    /// A full-port-space request with the default timeout.
    pub fn full(host: impl Into<String>) -> Result<Self, ScanError> {
        Self::new(host, PortRange::FULL, DEFAULT_TIMEOUT)
    }
}
