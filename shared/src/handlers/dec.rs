//! Numeric decode command handler

use core::fmt::Write;

use super::HandlerError;
use crate::command::Command;
use crate::literal;
use crate::platform::Platform;
use crate::reply::Reply;

/// Reply text for a malformed or out-of-range literal.
pub const ARGUMENT_ERROR: &str = "ARGUMENT ERROR";

/// Handle `dec`: decode a prefixed integer literal and echo it in decimal.
///
/// A bad literal is reported inside the reply text and the dispatch still
/// succeeds; only structural failures surface as error values.
pub fn handle_dec(
    cmd: &Command,
    _platform: &dyn Platform,
    reply: &mut Reply,
) -> Result<(), HandlerError> {
    match literal::decode(cmd.argument()) {
        Some(value) => {
            let _ = write!(reply, "{}", value);
        }
        None => {
            let _ = reply.write_str(ARGUMENT_ERROR);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::FixedPlatform;

    fn run(line: &str) -> String {
        let cmd = Command::parse(line).expect("parse failed");
        let mut reply = Reply::new();
        handle_dec(&cmd, &FixedPlatform::default(), &mut reply).expect("handler failed");
        reply.as_str().to_owned()
    }

    #[test]
    fn test_decodes_to_decimal_text() {
        assert_eq!(run("dec 42"), "42");
        assert_eq!(run("dec 0x2a"), "42");
        assert_eq!(run("dec 0b101010"), "42");
        assert_eq!(run("dec 052"), "42");
    }

    #[test]
    fn test_bad_literal_reports_in_band() {
        assert_eq!(run("dec"), ARGUMENT_ERROR);
        assert_eq!(run("dec 12a"), ARGUMENT_ERROR);
        assert_eq!(run("dec 65536"), ARGUMENT_ERROR);
    }
}
