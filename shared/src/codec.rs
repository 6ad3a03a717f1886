//! Newline-delimited framing for console transports
//!
//! Input arrives as a raw byte stream and is framed as:
//! ```text
//! [ line bytes (no terminator) ][ optional '\r' ][ '\n' ]
//! ```
//!
//! The decoder yields one line at a time and enforces the shared buffer
//! budget: a line that outgrows it is reported once and skipped, with
//! decoding resuming after the next terminator, so transport memory stays
//! bounded no matter what the peer sends.

use bytes::{Buf, BytesMut};
use thiserror::Error;

use crate::MSG_BUFFER_LEN;

/// Errors that can occur while framing the stream into lines.
#[derive(Error, Debug)]
pub enum LineError {
    #[error("Line too long: {0} bytes (buffer: {MSG_BUFFER_LEN})")]
    LineTooLong(usize),

    #[error("Line is not valid UTF-8")]
    NotUtf8,
}

/// Streaming line decoder with bounded accumulation.
///
/// Lines up to `MSG_BUFFER_LEN` bytes are delivered even though the
/// interpreter applies its own stricter budget; the decoder cap exists to
/// bound accumulation, not to pre-empt the interpreter's oversize report.
#[derive(Debug, Default)]
pub struct LineDecoder {
    /// Partial line data being accumulated
    buffer: BytesMut,
    /// Set after an over-length report; bytes are dropped until the next
    /// terminator resynchronizes the stream.
    discarding: bool,
}

impl LineDecoder {
    /// Create a new line decoder.
    pub fn new() -> Self {
        Self {
            buffer: BytesMut::with_capacity(MSG_BUFFER_LEN * 2),
            discarding: false,
        }
    }

    /// Add data to the decoder buffer.
    pub fn extend(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Try to frame the next line from the buffer.
    ///
    /// Returns:
    /// - `Ok(Some(line))` for a complete line, terminator stripped
    /// - `Ok(None)` if more data is needed
    /// - `Err(...)` for an over-length or non-UTF-8 line; pull again to
    ///   continue with the rest of the stream
    ///
    /// Call repeatedly until `Ok(None)` to drain all complete lines.
    pub fn next_line(&mut self) -> Result<Option<String>, LineError> {
        if self.discarding {
            match self.buffer.iter().position(|&b| b == b'\n') {
                Some(at) => {
                    self.buffer.advance(at + 1);
                    self.discarding = false;
                }
                None => {
                    // Still inside the oversized line; drop it all.
                    self.buffer.clear();
                    return Ok(None);
                }
            }
        }

        match self.buffer.iter().position(|&b| b == b'\n') {
            Some(at) => {
                let mut line = self.buffer.split_to(at + 1);
                line.truncate(at);
                if line.last() == Some(&b'\r') {
                    line.truncate(line.len() - 1);
                }

                if line.len() > MSG_BUFFER_LEN {
                    return Err(LineError::LineTooLong(line.len()));
                }

                match std::str::from_utf8(&line) {
                    Ok(text) => Ok(Some(text.to_owned())),
                    Err(_) => Err(LineError::NotUtf8),
                }
            }
            None => {
                if self.buffer.len() > MSG_BUFFER_LEN {
                    // Report the overage once, then discard to the next
                    // terminator.
                    let over = self.buffer.len();
                    self.buffer.clear();
                    self.discarding = true;
                    return Err(LineError::LineTooLong(over));
                }
                Ok(None)
            }
        }
    }

    /// Get the current buffer length (for debugging).
    pub fn buffer_len(&self) -> usize {
        self.buffer.len()
    }
}
