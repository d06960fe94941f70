//! Calculator demo client (REPL).
//!
//! Reads expressions from stdin, frames them to the server, and prints each
//! reply. Stops on `quit`, end of input, or any framing failure.

use std::io::{self, BufRead, Write};
use std::net::TcpStream;

use dfp::{DEFAULT_PORT, FrameConfig, receive, send};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut conn = TcpStream::connect(("127.0.0.1", DEFAULT_PORT))?;
    let config = FrameConfig::default();
    println!("connected to 127.0.0.1:{DEFAULT_PORT}; type \"num op num\", or quit");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" {
            break;
        }

        if let Err(e) = send(&mut conn, &config, line) {
            eprintln!("send failed ({}): {e}", e.kind());
            break;
        }
        match receive(&mut conn, &config) {
            Ok(reply) => println!("{reply}"),
            Err(e) => {
                eprintln!("receive failed ({}): {e}", e.kind());
                break;
            }
        }
    }
    Ok(())
}
