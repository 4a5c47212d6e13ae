//! In-process HTTP server that answers a fixed sequence of responses and
//! records what the client sent.

#![allow(dead_code)]

use auth::ApiCredentials;
use common::RestEndpoint;
use foxbit_rest::FoxbitRestClient;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

pub const API_KEY: &str = "test-api-key";
pub const API_SECRET: &str = "test-api-secret";

/// One request as seen on the wire.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub target: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    /// Header value, matched case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn path(&self) -> &str {
        self.target.split('?').next().unwrap_or_default()
    }

    pub fn query(&self) -> &str {
        self.target.split_once('?').map(|(_, q)| q).unwrap_or("")
    }

    pub fn body_str(&self) -> &str {
        std::str::from_utf8(&self.body).unwrap()
    }

    /// Recompute the signature from the transmitted bytes.
    pub fn expected_signature(&self, secret: &str) -> String {
        let pre_hash = format!(
            "{}{}{}{}{}",
            self.header("x-fb-access-timestamp").unwrap(),
            self.method,
            self.path(),
            self.query(),
            self.body_str()
        );

        let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(pre_hash.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

pub struct MockServer {
    pub base_url: String,
    handle: JoinHandle<Vec<CapturedRequest>>,
}

impl MockServer {
    /// Serve `responses` in order, one connection each.
    pub async fn start(responses: Vec<(u16, &'static str)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let mut captured = Vec::new();
            for (status, body) in responses {
                let (stream, _) = listener.accept().await.unwrap();
                captured.push(handle_connection(stream, status, body).await);
            }
            captured
        });

        Self {
            base_url: format!("http://{}", addr),
            handle,
        }
    }

    /// Client pointed at this server with the test credentials.
    pub fn client(&self) -> FoxbitRestClient {
        let credentials = ApiCredentials::new(API_KEY.into(), API_SECRET.into());
        let endpoint: RestEndpoint = self.base_url.parse().unwrap();
        FoxbitRestClient::with_endpoint(credentials, endpoint).unwrap()
    }

    /// Wait for every scripted response to be served.
    pub async fn finish(self) -> Vec<CapturedRequest> {
        self.handle.await.unwrap()
    }
}

async fn handle_connection(mut stream: TcpStream, status: u16, body: &str) -> CapturedRequest {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut chunk).await.unwrap();
        assert!(n > 0, "connection closed before request head");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).into_owned();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next().unwrap().split(' ');
    let method = request_line.next().unwrap().to_string();
    let target = request_line.next().unwrap().to_string();

    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect();

    let content_length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .map(|(_, v)| v.parse::<usize>().unwrap())
        .unwrap_or(0);

    let mut request_body = buf[header_end..].to_vec();
    while request_body.len() < content_length {
        let n = stream.read(&mut chunk).await.unwrap();
        assert!(n > 0, "connection closed before request body");
        request_body.extend_from_slice(&chunk[..n]);
    }
    request_body.truncate(content_length);

    let response = format!(
        "HTTP/1.1 {} Mock\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    stream.write_all(response.as_bytes()).await.unwrap();
    stream.shutdown().await.ok();

    CapturedRequest {
        method,
        target,
        headers,
        body: request_body,
    }
}
