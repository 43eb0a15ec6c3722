use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpStream;
use tokio::sync::{Semaphore, mpsc};
use tokio::time::timeout;
use tracing::debug;

use portview_common::error::ScanError;
use portview_common::network::ports::PortRange;
use portview_common::network::scan::{DEFAULT_TIMEOUT, ScanRequest};

/// Upper bound on simultaneous connection attempts.
///
/// A full-range scan would otherwise spawn 65536 connects at once and run
/// into file descriptor and ephemeral port limits on most systems. The cap
/// only throttles; the scan contract is unchanged by it.
pub const DEFAULT_CONCURRENCY: usize = 1024;

/// Callback fed with the running count of completed probes.
pub type ProgressFn = Arc<dyn Fn(usize) + Send + Sync>;

/// One connection attempt reduced to its outcome.
struct ProbeOutcome {
    port: u16,
    open: bool,
}

/// A TCP connect scanner.
///
/// Stateless between calls; the same scanner can probe any number of hosts.
pub struct TcpScanner {
    timeout: Duration,
    concurrency: usize,
    on_progress: Option<ProgressFn>,
}

impl Default for TcpScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl TcpScanner {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            concurrency: DEFAULT_CONCURRENCY,
            on_progress: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_progress(mut self, on_progress: ProgressFn) -> Self {
        self.on_progress = Some(on_progress);
        self
    }

    /// Scans every TCP port of `host` with the scanner's timeout.
    pub async fn scan_host(&self, host: &str) -> Result<Vec<u16>, ScanError> {
        let request: ScanRequest = ScanRequest::new(host, PortRange::FULL, self.timeout)?;
        self.scan_range(&request).await
    }

    /// Probes every port of the request's range and returns the open ones,
    /// sorted ascending.
    ///
    /// The call returns only once every probe has completed or timed out.
    /// A host with zero open ports yields an empty vector, not an error.
    pub async fn scan_range(&self, request: &ScanRequest) -> Result<Vec<u16>, ScanError> {
        let Some(target) = resolve(&request.host).await else {
            debug!(host = %request.host, "host did not resolve, treating every port as closed");
            return Ok(Vec::new());
        };

        debug!(
            host = %request.host,
            range = %request.range,
            "probing {} port(s)",
            request.range.port_count()
        );

        let permits: Arc<Semaphore> = Arc::new(Semaphore::new(self.concurrency));
        let (tx, mut rx) = mpsc::unbounded_channel::<ProbeOutcome>();

        for port in request.range.iter() {
            let permits = permits.clone();
            let tx = tx.clone();
            let connect_timeout = request.timeout;

            tokio::spawn(async move {
                let Ok(_permit) = permits.acquire().await else {
                    return;
                };
                let open: bool = probe(SocketAddr::new(target, port), connect_timeout).await;
                let _ = tx.send(ProbeOutcome { port, open });
            });
        }
        drop(tx);

        let mut open_ports: Vec<u16> = Vec::new();
        let mut completed: usize = 0;
        while let Some(outcome) = rx.recv().await {
            completed += 1;
            if outcome.open {
                open_ports.push(outcome.port);
            }
            if let Some(report) = &self.on_progress {
                report(completed);
            }
        }

        open_ports.sort_unstable();
        open_ports.dedup();
        Ok(open_ports)
    }
}

/// Attempts one TCP handshake; true means the port accepted within the
/// timeout. The stream is dropped immediately, no payload is ever exchanged.
async fn probe(addr: SocketAddr, connect_timeout: Duration) -> bool {
    match timeout(connect_timeout, TcpStream::connect(addr)).await {
        Ok(Ok(_stream)) => true,
        Ok(Err(_)) | Err(_) => false,
    }
}

/// Resolves the host once per scan call rather than once per port.
async fn resolve(host: &str) -> Option<IpAddr> {
    if let Ok(ip) = host.parse::<IpAddr>() {
        return Some(ip);
    }
    tokio::net::lookup_host((host, 0u16))
        .await
        .ok()?
        .next()
        .map(|addr| addr.ip())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
