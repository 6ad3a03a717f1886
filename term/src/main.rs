//! Line terminal for a running minicon console
//!
//! Connects over TCP, forwards stdin lines as commands, and prints every
//! reply line. Usage: `minicon-term [HOST:PORT]`.

use minicon_shared::codec::LineDecoder;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let addr = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "127.0.0.1:5760".to_string());

    let stream = TcpStream::connect(&addr).await?;
    println!("Connected to {}", addr);

    let (mut read_half, mut write_half) = stream.into_split();

    // Print reply lines as they arrive
    let printer = tokio::spawn(async move {
        let mut decoder = LineDecoder::new();
        let mut buf = vec![0u8; 1024];
        loop {
            match read_half.read(&mut buf).await {
                Ok(0) => {
                    println!("Console closed the connection");
                    break;
                }
                Ok(n) => {
                    decoder.extend(&buf[..n]);
                    loop {
                        match decoder.next_line() {
                            Ok(Some(line)) => println!("{}", line),
                            Ok(None) => break,
                            Err(e) => eprintln!("Bad reply line: {}", e),
                        }
                    }
                }
                Err(e) => {
                    eprintln!("Read error: {}", e);
                    break;
                }
            }
        }
    });

    // Forward stdin lines as commands
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        write_half.write_all(line.as_bytes()).await?;
        write_half.write_all(b"\r\n").await?;
    }

    drop(write_half);
    printer.await?;
    Ok(())
}
