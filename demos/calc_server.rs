//! Calculator demo server.
//!
//! Accepts connections on the default DFP port, one thread per client, and
//! answers `"num op num"` expressions. All framing concerns live in the
//! library; this is a plain call-site.

use std::net::{TcpListener, TcpStream};
use std::thread;

use dfp::{DEFAULT_PORT, Error, FrameConfig, receive, send};
use tracing::{info, warn};

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let listener = TcpListener::bind(("0.0.0.0", DEFAULT_PORT))?;
    info!(port = DEFAULT_PORT, "calculator server listening");

    for stream in listener.incoming() {
        match stream {
            Ok(conn) => {
                thread::spawn(move || serve(conn));
            }
            Err(e) => warn!(error = %e, "accept failed"),
        }
    }
    Ok(())
}

fn serve(mut conn: TcpStream) {
    let config = FrameConfig::default();
    let peer = conn
        .peer_addr()
        .map_or_else(|_| String::from("unknown"), |addr| addr.to_string());
    info!(%peer, "client connected");

    loop {
        let request = match receive(&mut conn, &config) {
            Ok(text) => text,
            Err(Error::PeerClosed) => {
                info!(%peer, "client disconnected");
                return;
            }
            Err(e) => {
                // The connection is no longer trustworthy; close our end.
                warn!(%peer, kind = e.kind(), error = %e, "receive failed, closing");
                return;
            }
        };

        let reply = match evaluate(&request) {
            Ok(value) => value.to_string(),
            Err(msg) => format!("error: {msg}"),
        };
        if let Err(e) = send(&mut conn, &config, &reply) {
            warn!(%peer, kind = e.kind(), error = %e, "send failed, closing");
            return;
        }
    }
}

/// Evaluate a `"num op num"` expression.
fn evaluate(expr: &str) -> Result<f64, String> {
    let mut parts = expr.split_whitespace();
    let (Some(lhs), Some(op), Some(rhs), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(String::from("expected \"num op num\""));
    };
    let lhs: f64 = lhs.parse().map_err(|_| format!("bad number: {lhs}"))?;
    let rhs: f64 = rhs.parse().map_err(|_| format!("bad number: {rhs}"))?;
    match op {
        "+" => Ok(lhs + rhs),
        "-" => Ok(lhs - rhs),
        "*" => Ok(lhs * rhs),
        "/" if rhs == 0.0 => Err(String::from("division by zero")),
        "/" => Ok(lhs / rhs),
        _ => Err(format!("unknown operator: {op}")),
    }
}
