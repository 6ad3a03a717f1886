//! Identity command handler

use core::fmt::Write;

use super::HandlerError;
use crate::command::Command;
use crate::platform::Platform;
use crate::reply::Reply;

/// Fixed identity reported by `id`.
pub const DEVICE_IDENTITY: &str = "minicon-dev-01";

/// Handle `id`: report the fixed device identity.
pub fn handle_id(
    _cmd: &Command,
    _platform: &dyn Platform,
    reply: &mut Reply,
) -> Result<(), HandlerError> {
    let _ = write!(reply, "ID: {}", DEVICE_IDENTITY);
    Ok(())
}
