//! Status command handler

use core::fmt::Write;

use super::HandlerError;
use crate::command::Command;
use crate::platform::Platform;
use crate::reply::Reply;

/// Handle `status`: report uptime, core count, and free heap memory.
///
/// Uptime arrives in microseconds and is reported in whole seconds. The
/// template is fixed; bench tooling greps these exact labels.
pub fn handle_status(
    _cmd: &Command,
    platform: &dyn Platform,
    reply: &mut Reply,
) -> Result<(), HandlerError> {
    let uptime_s = platform.uptime_micros() / 1_000_000;
    let _ = write!(
        reply,
        "SYSTEM_UPTIME: {} S \nAVAILABLE CORES: {} \nAVAILABLE HEAP MEMORY: {}",
        uptime_s,
        platform.core_count(),
        platform.free_heap_bytes()
    );
    Ok(())
}
