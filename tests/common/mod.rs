//! Common utilities for gistclip integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Scratch directory plus a handle on the built binary
pub struct TestConfig {
    pub temp_dir: TempDir,
}

impl TestConfig {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn temp_path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a file with given content and return its path as a string
    pub fn create_temp_file(&self, name: &str, content: &str) -> String {
        let file_path = self.temp_path().join(name);
        fs::write(&file_path, content).expect("Failed to write temp file");
        file_path.to_string_lossy().into_owned()
    }

    pub fn create_token_file(&self, token: &str) -> PathBuf {
        let path = self.temp_path().join("token");
        fs::write(&path, format!("{token}\n")).expect("Failed to write token file");
        path
    }

    /// Command for the gistclip binary, isolated from the caller's home,
    /// credential and proxy settings
    pub fn gistclip_command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_gistclip"));
        cmd.env("HOME", self.temp_path())
            .env_remove("GISTCLIP_TOKEN_FILE")
            .env_remove("GISTCLIP_API_URL")
            .env_remove("RUST_LOG")
            .env("NO_PROXY", "127.0.0.1,localhost")
            .env("no_proxy", "127.0.0.1,localhost");
        cmd
    }
}

/// What the mock endpoint saw
#[derive(Debug)]
pub struct CapturedRequest {
    pub head: String,
    pub body: String,
}

impl CapturedRequest {
    pub fn has_header(&self, name: &str, value: &str) -> bool {
        self.head.lines().any(|line| {
            line.split_once(':').is_some_and(|(k, v)| {
                k.trim().eq_ignore_ascii_case(name) && v.trim() == value
            })
        })
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("Request body is not JSON")
    }
}

/// Single-connection HTTP responder on localhost
pub struct MockGistServer {
    pub endpoint: String,
    handle: JoinHandle<CapturedRequest>,
}

impl MockGistServer {
    pub async fn start(status_line: &str, response_body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().expect("No local address");
        let status_line = status_line.to_string();
        let response_body = response_body.to_string();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("Accept failed");
            let mut buf = Vec::new();
            let mut chunk = [0u8; 4096];

            let header_end = loop {
                let n = socket.read(&mut chunk).await.expect("Read failed");
                assert!(n > 0, "Connection closed before headers were complete");
                buf.extend_from_slice(&chunk[..n]);
                if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
            };

            let head = String::from_utf8_lossy(&buf[..header_end]).into_owned();
            let content_length = head
                .lines()
                .find_map(|line| {
                    let (k, v) = line.split_once(':')?;
                    if k.trim().eq_ignore_ascii_case("content-length") {
                        v.trim().parse::<usize>().ok()
                    } else {
                        None
                    }
                })
                .unwrap_or(0);

            while buf.len() < header_end + content_length {
                let n = socket.read(&mut chunk).await.expect("Read failed");
                assert!(n > 0, "Connection closed before body was complete");
                buf.extend_from_slice(&chunk[..n]);
            }
            let body =
                String::from_utf8_lossy(&buf[header_end..header_end + content_length]).into_owned();

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                response_body.len(),
                response_body
            );
            socket
                .write_all(response.as_bytes())
                .await
                .expect("Write failed");
            let _ = socket.shutdown().await;

            CapturedRequest { head, body }
        });

        Self {
            endpoint: format!("http://{addr}/gists"),
            handle,
        }
    }

    pub async fn captured(self) -> CapturedRequest {
        self.handle.await.expect("Mock server task panicked")
    }
}

pub const CREATED_BODY: &str = r#"{
    "url": "https://api.github.com/gists/aa5a315d61ae9438b18d",
    "html_url": "https://gist.github.com/aa5a315d61ae9438b18d",
    "id": "aa5a315d61ae9438b18d"
}"#;

pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("Failed to build test client")
}
