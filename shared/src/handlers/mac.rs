//! MAC address command handler

use core::fmt::Write;

use super::HandlerError;
use crate::command::Command;
use crate::platform::Platform;
use crate::reply::Reply;

/// Handle `mac`: report the hardware address as six colon-separated
/// uppercase hex octets.
pub fn handle_mac(
    _cmd: &Command,
    platform: &dyn Platform,
    reply: &mut Reply,
) -> Result<(), HandlerError> {
    let mac = platform.mac_address();
    let _ = write!(
        reply,
        "MAC {:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
        mac[0], mac[1], mac[2], mac[3], mac[4], mac[5]
    );
    Ok(())
}
