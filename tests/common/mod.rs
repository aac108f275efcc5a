// tests/common/mod.rs
//
// One-shot HTTP/1.0 responder on localhost so fetch tests stay offline.
//
#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

pub struct Served {
    pub url: String,
    handle: JoinHandle<()>,
}

impl Served {
    pub fn join(self) {
        self.handle.join().unwrap();
    }
}

/// Answer exactly one request with `status_line` (e.g. "200 OK") and `body`.
pub fn serve_once(status_line: &str, body: &str) -> Served {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let resp = format!(
        "HTTP/1.0 {status_line}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        // Drain the request head before answering
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }
        stream.write_all(resp.as_bytes()).unwrap();
        stream.flush().unwrap();
    });

    Served { url: format!("http://{addr}/vocabulary/top-1500-nouns.aspx"), handle }
}

pub const NOUN_PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>Top 1500 Nouns</title></head>
<body>
<table>
  <tr><td><b>Noun</b></td><td><b>Example</b></td></tr>
  <tr><td>1</td><td><a href="/how-to-use/time.aspx">time</a></td><td>Time flies.</td></tr>
  <tr><td>2</td><td><a href="/how-to-use/year.aspx">year</a></td><td>A good year.</td></tr>
  <tr><td>3</td><td><a href="/how-to-use/people.aspx">people</a></td><td>Many people.</td></tr>
  <tr><td>4</td><td><a href="/how-to-use/time.aspx">time</a></td><td>Again.</td></tr>
</table>
</body></html>"#;
