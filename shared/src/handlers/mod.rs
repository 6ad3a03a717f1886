//! Command handlers, one module per command word

mod dec;
mod id;
mod mac;
mod status;

pub use dec::{handle_dec, ARGUMENT_ERROR};
pub use id::{handle_id, DEVICE_IDENTITY};
pub use mac::handle_mac;
pub use status::handle_status;

use thiserror::Error;

/// Failure a handler reports instead of producing a reply.
///
/// None of the built-in handlers fail today; the variant keeps the dispatch
/// contract open for handlers whose platform queries can.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Platform query failed: {0}")]
    PlatformQuery(&'static str),
}
