//! Command dispatch - turns one input line into one bounded reply

use thiserror::Error;

use crate::command::Command;
use crate::handlers::HandlerError;
use crate::platform::Platform;
use crate::reply::Reply;
use crate::MSG_BUFFER_LEN;

/// Failures reported instead of a reply.
///
/// Argument-level problems are not represented here: a bad `dec` literal is
/// reported inside the reply text by the handler itself, while these
/// variants cover structural failures where no reply exists at all.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Input line too long: {0} bytes (buffer: {MSG_BUFFER_LEN})")]
    InputTooLong(usize),

    #[error("Unknown command")]
    UnknownCommand,

    #[error("Handler failed: {0}")]
    Handler(#[from] HandlerError),
}

/// The command interpreter.
///
/// Owns the platform collaborators and processes one line at a time; all
/// per-command state lives on the stack of the call, so a shared reference
/// can serve any number of sessions.
pub struct Interpreter<P: Platform> {
    platform: P,
}

impl<P: Platform> Interpreter<P> {
    /// Create an interpreter over the given platform.
    pub fn new(platform: P) -> Self {
        Self { platform }
    }

    /// Parse, classify, and dispatch one input line.
    ///
    /// Unknown words and over-length lines fail without invoking any
    /// handler. The reply of a successful dispatch is always within the
    /// buffer budget.
    pub fn process_command(&self, line: &str) -> Result<Reply, CommandError> {
        let cmd = Command::parse(line)?;
        let entry = cmd.entry().ok_or(CommandError::UnknownCommand)?;

        let mut reply = Reply::new();
        (entry.handler)(&cmd, &self.platform, &mut reply)?;
        Ok(reply)
    }
}
