//! minicon interpreter core
//!
//! This crate provides everything needed to turn one console input line into
//! one bounded reply: the tokenizer and command table, the command handlers,
//! the numeric literal decoder, the platform capability trait, and a
//! newline-framing codec for the transport side.

pub mod codec;
pub mod command;
pub mod handlers;
pub mod interpreter;
pub mod literal;
pub mod platform;
pub mod reply;

/// Shared text budget, in bytes, for input lines and replies.
///
/// Input lines at or past this length are rejected before parsing, and reply
/// writes saturate below it. Transports size their framing to the same
/// constant so no layer ever holds more than one buffer of command text.
pub const MSG_BUFFER_LEN: usize = 128;

// Re-export commonly used types at crate root
pub use command::{Command, CommandId};
pub use interpreter::{CommandError, Interpreter};
pub use platform::{FixedPlatform, Platform};
pub use reply::Reply;
