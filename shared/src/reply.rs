//! Bounded reply text
//!
//! Every reply the interpreter produces lives in a fixed-capacity buffer
//! sized by [`MSG_BUFFER_LEN`]. Handler writes that would overflow are
//! truncated at a character boundary instead of growing the buffer or
//! failing the dispatch, so the text handed to the transport is always in
//! bounds no matter what a handler formats into it.

use core::fmt;

use crate::MSG_BUFFER_LEN;

/// Longest reply text, one below the buffer budget to match the strict
/// bound on input lines.
pub const REPLY_CAPACITY: usize = MSG_BUFFER_LEN - 1;

/// Fixed-capacity reply buffer with saturating writes.
#[derive(Debug, Default, Clone)]
pub struct Reply {
    text: heapless::String<REPLY_CAPACITY>,
}

impl Reply {
    /// Create an empty reply.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply text accumulated so far.
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Length of the reply text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True when nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Write for Reply {
    /// Append `s`, keeping only as much as still fits.
    ///
    /// Never reports an error: a reply that ran out of room is a truncated
    /// reply, not a failed command.
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.text.push_str(s).is_ok() {
            return Ok(());
        }

        // Out of room: keep the prefix that fits, cut on a char boundary.
        let room = REPLY_CAPACITY - self.text.len();
        let mut cut = room.min(s.len());
        while cut > 0 && !s.is_char_boundary(cut) {
            cut -= 1;
        }
        let _ = self.text.push_str(&s[..cut]);
        Ok(())
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
