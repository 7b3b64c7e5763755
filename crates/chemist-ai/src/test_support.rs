//! Test doubles: scripted clients and a one-shot HTTP endpoint.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Semaphore;

use crate::{AiClient, AiError, Completion, Turn};

/// Returns queued results in order and records every request.
#[derive(Default)]
pub(crate) struct StubClient {
    script: Mutex<VecDeque<Result<Completion, AiError>>>,
    requests: Mutex<Vec<Vec<Turn>>>,
}

impl StubClient {
    pub(crate) fn new(script: Vec<Result<Completion, AiError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<Vec<Turn>> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiClient for StubClient {
    async fn generate(&self, turns: &[Turn]) -> Result<Completion, AiError> {
        self.requests.lock().unwrap().push(turns.to_vec());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(Completion::NoCandidates))
    }
}

/// Answers `re: <last turn text>` after an optional delay.
pub(crate) struct EchoClient {
    pub(crate) delay: Duration,
    pub(crate) requests: Mutex<Vec<usize>>,
}

impl EchoClient {
    pub(crate) fn new(delay: Duration) -> Self {
        Self {
            delay,
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl AiClient for EchoClient {
    async fn generate(&self, turns: &[Turn]) -> Result<Completion, AiError> {
        self.requests.lock().unwrap().push(turns.len());
        tokio::time::sleep(self.delay).await;
        let last = turns.last().map(|t| t.text.as_str()).unwrap_or("");
        Ok(Completion::Candidate(format!("re: {last}")))
    }
}

/// Blocks each call until the test releases a permit.
pub(crate) struct GatedClient {
    pub(crate) gate: Semaphore,
}

impl GatedClient {
    pub(crate) fn new() -> Self {
        Self {
            gate: Semaphore::new(0),
        }
    }
}

#[async_trait]
impl AiClient for GatedClient {
    async fn generate(&self, _turns: &[Turn]) -> Result<Completion, AiError> {
        let permit = self
            .gate
            .acquire()
            .await
            .map_err(|e| AiError::Network(e.to_string()))?;
        permit.forget();
        Ok(Completion::Candidate("released".into()))
    }
}

/// Serve exactly one HTTP request with a canned response.
///
/// Returns the base URL and a handle resolving to the raw request text.
pub(crate) async fn serve_once(
    status: u16,
    body: &'static str,
) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let request = read_request(&mut stream).await;
        let response = format!(
            "HTTP/1.1 {status} Stub\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        let _ = stream.shutdown().await;
        request
    });

    (format!("http://{addr}"), handle)
}

/// A base URL where nothing is listening.
pub(crate) async fn dead_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Split a raw request into its head and body.
pub(crate) fn split_request(raw: &str) -> (&str, &str) {
    raw.split_once("\r\n\r\n").unwrap_or((raw, ""))
}

async fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(head_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..head_end]).to_ascii_lowercase();
            let content_length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= head_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}
