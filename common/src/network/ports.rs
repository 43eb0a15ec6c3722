use std::fmt;

use tracing::debug;

use crate::error::ScanError;

/// An inclusive range of TCP ports.
///
/// The `start <= end` invariant is enforced at construction, so a value of
/// this type always describes at least one port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortRange {
    start: u16,
    end: u16,
}

impl PortRange {
    /// The whole TCP port space, `[0, 65535]`.
    pub const FULL: PortRange = PortRange {
        start: 0,
        end: u16::MAX,
    };

    pub fn new(start: u16, end: u16) -> Result<Self, ScanError> {
        if start > end {
            return Err(ScanError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Builds a range whose upper bound may be left unspecified.
    ///
    /// A missing upper bound defaults to 65535. An explicit `Some(0)` is a
    /// legitimate request to scan port 0, which an "end == 0 means unset"
    /// sentinel could not express.
    pub fn bounded(start: u16, end: Option<u16>) -> Result<Self, ScanError> {
        let end = end.unwrap_or_else(|| {
            debug!("no upper port bound given, defaulting to 65535");
            u16::MAX
        });
        Self::new(start, end)
    }

    pub fn start(&self) -> u16 {
        self.start
    }

    pub fn end(&self) -> u16 {
        self.end
    }

    pub fn port_count(&self) -> usize {
        usize::from(self.end - self.start) + 1
    }

    pub fn contains(&self, port: u16) -> bool {
        self.start <= port && port <= self.end
    }

    pub fn iter(&self) -> impl Iterator<Item = u16> {
        self.start..=self.end
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_backwards_range() {
        let result = PortRange::new(100, 10);
        assert_eq!(
            result,
            Err(ScanError::InvalidRange {
                start: 100,
                end: 10
            })
        );
    }

    #[test]
    fn bounded_defaults_missing_end_to_max() {
        let range: PortRange = PortRange::bounded(8000, None).unwrap();
        assert_eq!(range.start(), 8000);
        assert_eq!(range.end(), u16::MAX);
    }

    #[test]
    fn bounded_keeps_explicit_port_zero() {
        let range: PortRange = PortRange::bounded(0, Some(0)).unwrap();
        assert_eq!(range.port_count(), 1);
        assert!(range.contains(0));
    }

    #[test]
    fn full_range_covers_entire_port_space() {
        assert_eq!(PortRange::FULL.port_count(), 65_536);
        assert!(PortRange::FULL.contains(0));
        assert!(PortRange::FULL.contains(u16::MAX));
    }

    #[test]
    fn iter_is_inclusive_on_both_ends() {
        let range: PortRange = PortRange::new(65_533, u16::MAX).unwrap();
        let ports: Vec<u16> = range.iter().collect();
        assert_eq!(ports, vec![65_533, 65_534, 65_535]);
    }

    #[test]
    fn single_port_range() {
        let range: PortRange = PortRange::new(443, 443).unwrap();
        assert_eq!(range.port_count(), 1);
        assert_eq!(range.iter().collect::<Vec<u16>>(), vec![443]);
    }
}
