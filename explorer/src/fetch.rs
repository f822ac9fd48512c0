//! Minimal HTTP client for the node's explorer API.
//!
//! One GET against a known local endpoint does not need a full HTTP
//! client dependency — a raw HTTP/1.0 request over a tokio TCP stream
//! is enough. The 1.0 request line keeps the response un-chunked, so
//! the body is simply everything after the header block. In a
//! deployment that talks to remote nodes over TLS, swap this for a
//! proper HTTP client.

use anyhow::{bail, Context, Result};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use folio_classifier::config;

/// Normalizes a `host[:port]` authority, appending the default node
/// port when none is given.
pub fn normalize_authority(authority: &str) -> String {
    match authority.rsplit_once(':') {
        Some((_, port)) if port.chars().all(|c| c.is_ascii_digit()) && !port.is_empty() => {
            authority.to_string()
        }
        _ => format!("{}:{}", authority, config::DEFAULT_NODE_PORT),
    }
}

/// Performs a GET against `http://{authority}{path}` and returns the
/// response body.
///
/// Fails with context on connection errors and on any non-2xx status;
/// the error carries the node's own status line.
pub async fn http_get(authority: &str, path: &str) -> Result<String> {
    let addr = normalize_authority(authority);

    let mut stream = TcpStream::connect(&addr)
        .await
        .with_context(|| format!("failed to connect to node at {}", addr))?;

    let request = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nAccept: application/json\r\nConnection: close\r\n\r\n",
        path, addr,
    );
    stream
        .write_all(request.as_bytes())
        .await
        .with_context(|| format!("failed to send request to {}", addr))?;
    stream.shutdown().await.ok();

    let mut buf = Vec::new();
    stream
        .read_to_end(&mut buf)
        .await
        .with_context(|| format!("failed to read response from {}", addr))?;
    let response = String::from_utf8_lossy(&buf);

    let (head, body) = response
        .split_once("\r\n\r\n")
        .with_context(|| format!("malformed HTTP response from {}", addr))?;

    let status_line = head.lines().next().unwrap_or_default();
    let status_code = status_line
        .split_whitespace()
        .nth(1)
        .and_then(|code| code.parse::<u16>().ok())
        .with_context(|| format!("unparseable status line from {}: {:?}", addr, status_line))?;

    if !(200..300).contains(&status_code) {
        bail!("node at {} answered {} for {}", addr, status_line, path);
    }

    Ok(body.to_string())
}
