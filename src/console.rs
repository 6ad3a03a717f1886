//! Console sessions - the read, frame, dispatch, reply loop

use std::sync::Arc;

use minicon_shared::codec::{LineDecoder, LineError};
use minicon_shared::{CommandError, Interpreter, Platform};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

/// Error word for a line that matched no command.
const COMMAND_ERROR: &str = "COMMAND ERROR";
/// Error word for input past the buffer budget.
const INPUT_OVERFLOW: &str = "INPUT OVERFLOW";
/// Error word for a handler that could not complete its platform query.
const DEVICE_ERROR: &str = "DEVICE ERROR";

/// Drive one session until the peer closes the stream.
///
/// Bytes are framed into lines, each line is dispatched, and the reply (or
/// a terse error word) is written back terminated by CRLF. Empty lines are
/// ignored so terminals may send bare newlines.
pub async fn run_session<R, W, P>(
    interpreter: Arc<Interpreter<P>>,
    mut reader: R,
    mut writer: W,
    peer: &str,
) -> anyhow::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
    P: Platform,
{
    let mut decoder = LineDecoder::new();
    let mut buf = vec![0u8; 1024];

    loop {
        let n = reader.read(&mut buf).await?;
        if n == 0 {
            info!("Session closed: {}", peer);
            return Ok(());
        }
        decoder.extend(&buf[..n]);

        // Drain all complete lines before reading again
        loop {
            match decoder.next_line() {
                Ok(Some(line)) => {
                    if line.is_empty() {
                        continue;
                    }
                    respond(&interpreter, &line, &mut writer).await?;
                }
                Ok(None) => break,
                Err(err) => {
                    warn!("Bad line from {}: {}", peer, err);
                    let word = match err {
                        LineError::LineTooLong(_) => INPUT_OVERFLOW,
                        LineError::NotUtf8 => COMMAND_ERROR,
                    };
                    write_reply(&mut writer, word).await?;
                }
            }
        }
    }
}

/// Dispatch one line and write the reply or its error word.
async fn respond<W, P>(
    interpreter: &Interpreter<P>,
    line: &str,
    writer: &mut W,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
    P: Platform,
{
    match interpreter.process_command(line) {
        Ok(reply) => {
            debug!("Dispatched {:?}", line);
            write_reply(writer, reply.as_str()).await
        }
        Err(err) => {
            debug!("Rejected {:?}: {}", line, err);
            let word = match err {
                CommandError::InputTooLong(_) => INPUT_OVERFLOW,
                CommandError::UnknownCommand => COMMAND_ERROR,
                CommandError::Handler(_) => DEVICE_ERROR,
            };
            write_reply(writer, word).await
        }
    }
}

async fn write_reply<W: AsyncWrite + Unpin>(writer: &mut W, text: &str) -> anyhow::Result<()> {
    writer.write_all(text.as_bytes()).await?;
    writer.write_all(b"\r\n").await?;
    writer.flush().await?;
    Ok(())
}
