//! Test helpers: a one-shot HTTP responder for exercising the client and
//! worker against real sockets.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::mpsc::{Receiver, channel};
use std::thread;

/// The request line and body the test server received.
pub(crate) struct CapturedRequest {
    pub path: String,
    pub body: String,
}

/// Bind an ephemeral port, answer exactly one request with the given status
/// line and JSON body, and hand the captured request back over a channel.
pub(crate) fn spawn_one_shot_server(
    status: &'static str,
    body: String,
) -> (String, Receiver<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = channel();

    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        let path = request_line
            .split_whitespace()
            .nth(1)
            .unwrap_or("")
            .to_string();

        let mut content_length = 0usize;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            if line == "\r\n" || line == "\n" || line.is_empty() {
                break;
            }
            if let Some(value) = line.to_ascii_lowercase().strip_prefix("content-length:") {
                content_length = value.trim().parse().unwrap_or(0);
            }
        }

        let mut body_buf = vec![0u8; content_length];
        reader.read_exact(&mut body_buf).unwrap();
        let _ = tx.send(CapturedRequest {
            path,
            body: String::from_utf8_lossy(&body_buf).into_owned(),
        });

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let mut stream = stream;
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
    });

    (format!("http://{addr}"), rx)
}
