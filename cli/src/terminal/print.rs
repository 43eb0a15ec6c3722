use std::net::Ipv4Addr;
use std::time::Duration;

use colored::*;

use portview_common::network::view::NetworkView;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: String = format!(
        "{}{}{}",
        "─".repeat(left).bright_black(),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right).bright_black()
    );

    println!("{}", line);
}

/// Renders the full scan report, one line per scanned address.
pub fn network_view(view: &NetworkView, q_level: u8) {
    if view.is_empty() {
        no_addresses();
        return;
    }

    for (address, ports) in view.iter() {
        host_ports(address, ports);
    }

    if q_level == 0 {
        let unscanned: usize = view.addresses().len() - view.iter().count();
        if unscanned > 0 {
            print_status(format!("{} address(es) could not be scanned", unscanned));
        }
    }
}

pub fn host_ports(address: &str, ports: &[u16]) {
    let label: ColoredString = "IP:".color(colors::TEXT_DEFAULT);
    let address: ColoredString = address.color(colors::PRIMARY).underline();

    if ports.is_empty() {
        println!("{} {} {}", label, address, "no open ports".dimmed());
        return;
    }

    let ports: String = ports
        .iter()
        .map(|port| port.to_string())
        .collect::<Vec<String>>()
        .join(" ");
    println!("{} {} {}", label, address, ports.color(colors::ACCENT));
}

pub fn addresses(addresses: &[Ipv4Addr]) {
    for (idx, address) in addresses.iter().enumerate() {
        let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
        println!(
            "{} {}",
            idx_str.color(colors::SEPARATOR),
            address.to_string().color(colors::PRIMARY)
        );
    }
}

pub fn no_addresses() {
    println!("{}", "No IP addresses found".red().bold());
}

pub fn summary(address_count: usize, total_time: Duration, q_level: u8) {
    if q_level > 1 {
        return;
    }

    let scanned: ColoredString = format!("{} host(s)", address_count).bold().green();
    let elapsed: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();

    println!(
        "{}",
        "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)
    );
    println!(
        "{}",
        format!("Scan complete: {} covered in {}", scanned, elapsed)
            .color(colors::TEXT_DEFAULT)
    );
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    println!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT));
}
