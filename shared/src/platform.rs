//! Platform facts consumed by command handlers

/// Hardware and OS facts the command handlers query.
///
/// Implementations must answer cheaply and without blocking; handlers call
/// them inline while holding the reply buffer.
pub trait Platform: Send + Sync {
    /// Physical address of the primary network interface.
    fn mac_address(&self) -> [u8; 6];

    /// Microseconds elapsed since the device booted.
    fn uptime_micros(&self) -> u64;

    /// Number of processing cores available to the firmware.
    fn core_count(&self) -> u32;

    /// Free dynamic memory in bytes.
    fn free_heap_bytes(&self) -> u64;
}

/// Fixed platform answers for tests and bench sessions without hardware.
#[derive(Debug, Clone, Copy)]
pub struct FixedPlatform {
    pub mac: [u8; 6],
    pub uptime_micros: u64,
    pub cores: u32,
    pub free_heap: u64,
}

impl Default for FixedPlatform {
    fn default() -> Self {
        Self {
            mac: [0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x01],
            uptime_micros: 90_000_000,
            cores: 2,
            free_heap: 163_840,
        }
    }
}

impl Platform for FixedPlatform {
    fn mac_address(&self) -> [u8; 6] {
        self.mac
    }

    fn uptime_micros(&self) -> u64 {
        self.uptime_micros
    }

    fn core_count(&self) -> u32 {
        self.cores
    }

    fn free_heap_bytes(&self) -> u64 {
        self.free_heap
    }
}
