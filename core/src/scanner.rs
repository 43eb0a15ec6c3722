//! Concurrent TCP port scanning.
//!
//! The scanner fans a connection attempt out to every port of the requested
//! range, bounded by a concurrency cap, and aggregates the open ports through
//! a channel consumed by the calling task. A probe has exactly two terminal
//! outcomes, open or closed; refused, timed-out and unreachable attempts all
//! count as closed and are never surfaced as errors.

mod tcp;

pub use tcp::{DEFAULT_CONCURRENCY, ProgressFn, TcpScanner};
