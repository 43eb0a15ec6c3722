pub mod interfaces;
pub mod scan;
pub mod survey;

use std::sync::Arc;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use portview_core::scanner::{DEFAULT_CONCURRENCY, TcpScanner};

use crate::terminal::spinner;

#[derive(Parser)]
#[command(name = "portview")]
#[command(about = "Map the open TCP ports of this machine's network interfaces.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Reduce output decoration (repeatable)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Discover local IPv4 addresses and scan each over the full port space
    #[command(alias = "v")]
    Survey(ScanTuning),
    /// Scan a single host for open TCP ports
    #[command(alias = "s")]
    Scan {
        host: String,
        /// First port to probe
        #[arg(long, default_value_t = 0)]
        start_port: u16,
        /// Last port to probe; defaults to 65535 when omitted
        #[arg(long)]
        end_port: Option<u16>,
        #[command(flatten)]
        tuning: ScanTuning,
    },
    /// List the local IPv4 addresses without scanning
    #[command(alias = "i")]
    Interfaces,
}

#[derive(Args)]
pub struct ScanTuning {
    /// Per-port connect timeout in milliseconds
    #[arg(long, default_value_t = 2_000)]
    pub timeout_ms: u64,

    /// Maximum simultaneous connection attempts
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,
}

impl Default for ScanTuning {
    fn default() -> Self {
        Self {
            timeout_ms: 2_000,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl ScanTuning {
    /// Builds a scanner that reports its probe progress to the spinner.
    pub fn build_scanner(&self) -> TcpScanner {
        TcpScanner::new()
            .with_timeout(Duration::from_millis(self.timeout_ms))
            .with_concurrency(self.concurrency)
            .with_progress(Arc::new(spinner::report_probe_progress))
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
