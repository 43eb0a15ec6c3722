use std::time::Duration;

use portview_common::error::ScanError;
use portview_common::network::ports::PortRange;
use portview_common::network::scan::ScanRequest;
use portview_core::scanner::TcpScanner;
use tokio::net::TcpListener;

const PROBE_TIMEOUT: Duration = Duration::from_millis(500);

async fn bind_listeners(count: usize) -> (Vec<TcpListener>, Vec<u16>) {
    let mut listeners: Vec<TcpListener> = Vec::with_capacity(count);
    let mut ports: Vec<u16> = Vec::with_capacity(count);
    for _ in 0..count {
        let listener: TcpListener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        ports.push(listener.local_addr().unwrap().port());
        listeners.push(listener);
    }
    (listeners, ports)
}

fn loopback_request(range: PortRange) -> ScanRequest {
    ScanRequest::new("127.0.0.1", range, PROBE_TIMEOUT).unwrap()
}

/// A single listener inside a surrounding window is reported, and nothing
/// outside the window ever is.
#[tokio::test]
async fn scan_finds_single_listener_in_window() {
    let (_listeners, ports) = bind_listeners(1).await;
    let port: u16 = ports[0];

    let range: PortRange =
        PortRange::new(port.saturating_sub(50), port.saturating_add(50)).unwrap();
    let scanner: TcpScanner = TcpScanner::new();
    let open: Vec<u16> = scanner.scan_range(&loopback_request(range)).await.unwrap();

    assert!(open.contains(&port), "listener on {port} was not reported");
    assert!(open.iter().all(|p| range.contains(*p)));
}

/// Many listeners among thousands of probed ports must all be found, with no
/// duplicates and no lost updates under the concurrent fan-out.
#[tokio::test]
async fn concurrent_fanout_loses_no_updates() {
    let (_listeners, ports) = bind_listeners(16).await;

    let lo: u16 = *ports.iter().min().unwrap();
    let hi: u16 = *ports.iter().max().unwrap();
    let range: PortRange = PortRange::new(lo, hi).unwrap();

    let scanner: TcpScanner = TcpScanner::new().with_concurrency(2_048);
    let open: Vec<u16> = scanner.scan_range(&loopback_request(range)).await.unwrap();

    for port in &ports {
        assert!(open.contains(port), "listener on {port} was lost");
    }
    // Strictly ascending implies sorted and duplicate-free.
    assert!(open.windows(2).all(|w| w[0] < w[1]));
    assert!(open.iter().all(|p| range.contains(*p)));
}

#[tokio::test]
async fn scan_is_idempotent_against_stable_target() {
    let (_listeners, ports) = bind_listeners(3).await;

    let lo: u16 = *ports.iter().min().unwrap();
    let hi: u16 = *ports.iter().max().unwrap();
    let request: ScanRequest = loopback_request(PortRange::new(lo, hi).unwrap());

    let scanner: TcpScanner = TcpScanner::new();
    let first: Vec<u16> = scanner.scan_range(&request).await.unwrap();
    let second: Vec<u16> = scanner.scan_range(&request).await.unwrap();

    assert_eq!(first, second);
}

/// A blackhole target that neither accepts nor refuses within the timeout
/// classifies as closed, never as an error.
#[tokio::test]
async fn blackhole_target_yields_empty_result_not_error() {
    // 192.0.2.0/24 is TEST-NET-1, reserved and unroutable.
    let range: PortRange = PortRange::new(80, 99).unwrap();
    let request: ScanRequest =
        ScanRequest::new("192.0.2.1", range, Duration::from_millis(200)).unwrap();

    let result = TcpScanner::new().scan_range(&request).await;
    assert_eq!(result, Ok(Vec::new()));
}

#[tokio::test]
async fn empty_host_is_rejected_before_scanning() {
    let result = TcpScanner::new().scan_host("").await;
    assert_eq!(result, Err(ScanError::EmptyHost));
}

#[tokio::test]
async fn closed_window_returns_empty_vector() {
    let (listeners, ports) = bind_listeners(1).await;
    let port: u16 = ports[0];
    drop(listeners);

    // The freed ephemeral port now refuses; the whole window reads closed.
    let range: PortRange = PortRange::new(port, port).unwrap();
    let open: Vec<u16> = TcpScanner::new()
        .scan_range(&loopback_request(range))
        .await
        .unwrap();
    assert!(open.is_empty());
}
