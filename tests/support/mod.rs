#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;

use dynasty_terminal::state::League;

pub const TWO_LEAGUES_JSON: &str = r#"[
    { "league_id": "1", "name": "Test League 1" },
    { "league_id": "2", "name": "Test League 2" }
]"#;

/// A backend that answers exactly one request, then closes.
pub struct OneShotBackend {
    pub base: String,
    request_lines: Receiver<String>,
}

impl OneShotBackend {
    /// The request line the backend saw, e.g. `GET /leagues/user/x HTTP/1.1`.
    pub fn request_line(&self) -> String {
        self.request_lines
            .recv_timeout(Duration::from_secs(5))
            .expect("backend should have received a request")
    }
}

pub fn serve_once(status: &str, body: &str) -> OneShotBackend {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    let (tx, rx) = mpsc::channel();
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept connection");
        let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
        let mut request_line = String::new();
        reader
            .read_line(&mut request_line)
            .expect("read request line");
        loop {
            let mut header = String::new();
            let read = reader.read_line(&mut header).expect("read header");
            if read == 0 || header == "\r\n" {
                break;
            }
        }
        let _ = tx.send(request_line.trim_end().to_string());
        stream
            .write_all(response.as_bytes())
            .expect("write response");
        stream.flush().expect("flush response");
    });

    OneShotBackend {
        base: format!("http://{addr}"),
        request_lines: rx,
    }
}

/// A base URL nothing is listening on.
pub fn closed_base() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

/// Talks straight to the loopback backend even when a proxy is configured.
pub fn test_client() -> Client {
    Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("test client should build")
}

pub fn league(id: &str, name: &str) -> League {
    League {
        league_id: id.to_string(),
        name: name.to_string(),
        season: None,
    }
}
