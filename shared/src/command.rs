//! Input line parsing - tokenization and command classification
//!
//! One input line yields at most two tokens. Everything before the first
//! space or tab is the command word, folded to ASCII lowercase; everything
//! after it is the argument, kept verbatim. The first whitespace byte is the
//! only delimiter, so arguments may contain further whitespace. Known words
//! live in a static table that maps each one to its identifier and handler.

use heapless::String;

use crate::handlers::{self, HandlerError};
use crate::interpreter::CommandError;
use crate::platform::Platform;
use crate::reply::Reply;
use crate::MSG_BUFFER_LEN;

/// Token capacity, matching the strict bound on input line length.
const TOKEN_CAPACITY: usize = MSG_BUFFER_LEN - 1;

/// Identifier a command word resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandId {
    Unknown,
    Mac,
    Id,
    Status,
    Dec,
}

/// Handler signature: consume the parsed command, write the reply.
pub type Handler = fn(&Command, &dyn Platform, &mut Reply) -> Result<(), HandlerError>;

/// One row of the command table.
#[derive(Debug)]
pub struct CommandEntry {
    pub keyword: &'static str,
    pub id: CommandId,
    pub handler: Handler,
}

/// Every command the console understands.
///
/// Classification is a lookup here; a word with no row stays
/// [`CommandId::Unknown`] and is never dispatched.
pub static COMMAND_TABLE: &[CommandEntry] = &[
    CommandEntry {
        keyword: "mac",
        id: CommandId::Mac,
        handler: handlers::handle_mac,
    },
    CommandEntry {
        keyword: "id",
        id: CommandId::Id,
        handler: handlers::handle_id,
    },
    CommandEntry {
        keyword: "status",
        id: CommandId::Status,
        handler: handlers::handle_status,
    },
    CommandEntry {
        keyword: "dec",
        id: CommandId::Dec,
        handler: handlers::handle_dec,
    },
];

/// One parsed input line.
///
/// Built fresh for every line and dropped after dispatch; nothing persists
/// between commands.
#[derive(Debug, Default)]
pub struct Command {
    entry: Option<&'static CommandEntry>,
    word: String<TOKEN_CAPACITY>,
    argument: String<TOKEN_CAPACITY>,
}

impl Command {
    /// Tokenize and classify one input line.
    ///
    /// Lines at or past the buffer budget are rejected before any parsing so
    /// no downstream buffer can overflow. Both tokens of an accepted line
    /// always fit their capacity.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        if line.len() >= MSG_BUFFER_LEN {
            return Err(CommandError::InputTooLong(line.len()));
        }

        let mut cmd = Command::default();
        let mut split = false;
        for ch in line.chars() {
            if !split && (ch == ' ' || ch == '\t') {
                // First whitespace byte: switch targets, never again.
                split = true;
                continue;
            }
            if split {
                let _ = cmd.argument.push(ch);
            } else {
                let _ = cmd.word.push(ch.to_ascii_lowercase());
            }
        }

        cmd.entry = COMMAND_TABLE
            .iter()
            .find(|entry| entry.keyword == cmd.word.as_str());
        Ok(cmd)
    }

    /// Identifier of the matched command, `Unknown` when nothing matched.
    pub fn id(&self) -> CommandId {
        self.entry.map_or(CommandId::Unknown, |entry| entry.id)
    }

    /// Lowercased command word.
    pub fn word(&self) -> &str {
        self.word.as_str()
    }

    /// Argument text after the first delimiter, verbatim.
    pub fn argument(&self) -> &str {
        self.argument.as_str()
    }

    pub(crate) fn entry(&self) -> Option<&'static CommandEntry> {
        self.entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_is_case_folded() {
        for line in ["mac", "MAC", "Mac", "mAc"] {
            let cmd = Command::parse(line).expect("parse failed");
            assert_eq!(cmd.word(), "mac");
            assert_eq!(cmd.id(), CommandId::Mac);
        }
    }

    #[test]
    fn test_splits_on_first_space() {
        let cmd = Command::parse("dec 0x1A").expect("parse failed");
        assert_eq!(cmd.word(), "dec");
        assert_eq!(cmd.argument(), "0x1A");
        assert_eq!(cmd.id(), CommandId::Dec);
    }

    #[test]
    fn test_splits_on_first_tab() {
        let cmd = Command::parse("dec\t42").expect("parse failed");
        assert_eq!(cmd.word(), "dec");
        assert_eq!(cmd.argument(), "42");
    }

    #[test]
    fn test_argument_case_preserved() {
        let cmd = Command::parse("DEC 0xAb").expect("parse failed");
        assert_eq!(cmd.word(), "dec");
        assert_eq!(cmd.argument(), "0xAb");
    }

    #[test]
    fn test_later_whitespace_kept_verbatim() {
        let cmd = Command::parse("dec  0x10").expect("parse failed");
        assert_eq!(cmd.argument(), " 0x10");

        let cmd = Command::parse("dec a b\tc").expect("parse failed");
        assert_eq!(cmd.argument(), "a b\tc");
    }

    #[test]
    fn test_no_delimiter_whole_line_is_word() {
        let cmd = Command::parse("status").expect("parse failed");
        assert_eq!(cmd.word(), "status");
        assert_eq!(cmd.argument(), "");
        assert_eq!(cmd.id(), CommandId::Status);
    }

    #[test]
    fn test_empty_line_is_unknown() {
        let cmd = Command::parse("").expect("parse failed");
        assert_eq!(cmd.word(), "");
        assert_eq!(cmd.id(), CommandId::Unknown);
    }

    #[test]
    fn test_leading_space_makes_word_empty() {
        let cmd = Command::parse(" mac").expect("parse failed");
        assert_eq!(cmd.word(), "");
        assert_eq!(cmd.argument(), "mac");
        assert_eq!(cmd.id(), CommandId::Unknown);
    }

    #[test]
    fn test_unknown_word_has_no_entry() {
        let cmd = Command::parse("frobnicate").expect("parse failed");
        assert_eq!(cmd.id(), CommandId::Unknown);
        assert!(cmd.entry().is_none());
    }

    #[test]
    fn test_line_at_budget_is_rejected() {
        let line = "a".repeat(MSG_BUFFER_LEN);
        let result = Command::parse(&line);
        assert!(matches!(result, Err(CommandError::InputTooLong(len)) if len == MSG_BUFFER_LEN));

        let line = "a".repeat(MSG_BUFFER_LEN - 1);
        assert!(Command::parse(&line).is_ok());
    }

    #[test]
    fn test_table_keywords_lowercase_and_unique() {
        for entry in COMMAND_TABLE {
            assert_eq!(entry.keyword, entry.keyword.to_lowercase());
            assert_ne!(entry.id, CommandId::Unknown);
        }
        for (i, a) in COMMAND_TABLE.iter().enumerate() {
            for b in &COMMAND_TABLE[i + 1..] {
                assert_ne!(a.keyword, b.keyword);
            }
        }
    }
}
