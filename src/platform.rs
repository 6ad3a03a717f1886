//! Host-side platform facts
//!
//! On the bench the console runs as an ordinary process; these providers
//! answer the handler queries from Linux facilities and fall back to fixed
//! values where the host offers no equivalent.

use std::fs;
use std::time::Instant;

use minicon_shared::Platform;

/// Locally administered address reported when no interface is readable.
const FALLBACK_MAC: [u8; 6] = [0x02, 0x00, 0x00, 0x00, 0x00, 0x01];

/// Platform facts sourced from the host OS.
#[derive(Debug)]
pub struct HostPlatform {
    started: Instant,
    mac: [u8; 6],
}

impl HostPlatform {
    /// Snapshot the boot reference and the interface address.
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            mac: read_interface_mac().unwrap_or(FALLBACK_MAC),
        }
    }
}

impl Platform for HostPlatform {
    fn mac_address(&self) -> [u8; 6] {
        self.mac
    }

    fn uptime_micros(&self) -> u64 {
        self.started.elapsed().as_micros() as u64
    }

    fn core_count(&self) -> u32 {
        std::thread::available_parallelism().map_or(1, |n| n.get() as u32)
    }

    fn free_heap_bytes(&self) -> u64 {
        fs::read_to_string("/proc/meminfo")
            .ok()
            .and_then(|text| parse_mem_available(&text))
            .unwrap_or(0)
    }
}

/// Address of the first non-loopback interface under /sys/class/net.
fn read_interface_mac() -> Option<[u8; 6]> {
    let entries = fs::read_dir("/sys/class/net").ok()?;
    for entry in entries.flatten() {
        if entry.file_name().to_string_lossy() == "lo" {
            continue;
        }
        let raw = match fs::read_to_string(entry.path().join("address")) {
            Ok(raw) => raw,
            Err(_) => continue,
        };
        if let Some(mac) = parse_mac(raw.trim()) {
            // All-zero addresses show up on virtual interfaces; keep looking.
            if mac != [0; 6] {
                return Some(mac);
            }
        }
    }
    None
}

/// Parse the kernel's colon-separated hex address form.
fn parse_mac(text: &str) -> Option<[u8; 6]> {
    let mut mac = [0u8; 6];
    let mut parts = text.split(':');
    for octet in &mut mac {
        *octet = u8::from_str_radix(parts.next()?, 16).ok()?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(mac)
}

/// MemAvailable from a meminfo listing, in bytes.
fn parse_mem_available(meminfo: &str) -> Option<u64> {
    for line in meminfo.lines() {
        if let Some(rest) = line.strip_prefix("MemAvailable:") {
            let kib: u64 = rest.split_whitespace().next()?.parse().ok()?;
            return Some(kib * 1024);
        }
    }
    None
}
