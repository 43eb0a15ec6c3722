use std::time::{Duration, Instant};

use portview_common::config::Config;
use portview_common::network::ports::PortRange;
use portview_common::network::scan::ScanRequest;

use crate::commands::ScanTuning;
use crate::terminal::{print, spinner};

pub async fn scan(
    host: &str,
    start_port: u16,
    end_port: Option<u16>,
    tuning: ScanTuning,
    cfg: &Config,
) -> anyhow::Result<()> {
    let range: PortRange = PortRange::bounded(start_port, end_port)?;
    let timeout: Duration = Duration::from_millis(tuning.timeout_ms);
    let request: ScanRequest = ScanRequest::new(host, range, timeout)?;

    print::header("starting scanner", cfg.quiet);

    let scanner = tuning.build_scanner();
    let start_time: Instant = Instant::now();
    let open_ports: Vec<u16> = scanner.scan_range(&request).await?;

    spinner::finish();

    print::host_ports(host, &open_ports);
    print::summary(1, start_time.elapsed(), cfg.quiet);
    Ok(())
}
