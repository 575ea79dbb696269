//! In-process mock audit trail server built on `tiny_http`.
//!
//! The server answers a fixed script of responses, one per request, records
//! every request it sees, then shuts down.

#![allow(dead_code)]

use std::io::Read;
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::Duration;

pub const TOKEN: &str = "test-token";
pub const API_KEY: &str = "test-api-key";

pub const ENTRIES_JSON: &str = r#"[
    {
        "id": "0190f1c2-7a4b-7c3d-8e9f-0a1b2c3d4e5f",
        "user_id": "6f1c9a52-3b7e-4d21-9a0c-5e8f7d6b4a31",
        "action_type": "CREATE",
        "entity_name": "invoice",
        "entity_id": "c2d4e6f8-1a3b-4c5d-8e7f-9a0b1c2d3e4f",
        "change_data": "{\"amount\":120}",
        "timestamp": "2024-03-15T09:30:00Z"
    },
    {
        "id": "0190f1c2-7a4b-7c3d-8e9f-0a1b2c3d4e60",
        "user_id": "6f1c9a52-3b7e-4d21-9a0c-5e8f7d6b4a31",
        "action_type": "DELETE",
        "entity_name": "invoice",
        "entity_id": "c2d4e6f8-1a3b-4c5d-8e7f-9a0b1c2d3e4f",
        "change_data": "",
        "timestamp": "2024-03-16T10:00:00Z"
    }
]"#;

/// One request as the server received it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Recorded {
    /// Header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(field, _)| field.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn json_body(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body should be JSON")
    }
}

pub struct MockServer {
    pub base_url: String,
    requests: mpsc::Receiver<Recorded>,
    handle: Option<JoinHandle<()>>,
}

impl MockServer {
    /// Serve `script` in order, one `(status, body)` per request.
    pub fn start(script: Vec<(u16, &'static str)>) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("bind mock server");
        let port = server
            .server_addr()
            .to_ip()
            .map(|a| a.port())
            .expect("mock server port");
        let (tx, rx) = mpsc::channel();

        let handle = std::thread::spawn(move || {
            for (status, body) in script {
                let Ok(Some(mut request)) = server.recv_timeout(Duration::from_secs(10)) else {
                    return;
                };

                let mut received = String::new();
                let _ = request.as_reader().read_to_string(&mut received);
                let recorded = Recorded {
                    method: request.method().to_string(),
                    url: request.url().to_string(),
                    headers: request
                        .headers()
                        .iter()
                        .map(|h| (h.field.to_string(), h.value.to_string()))
                        .collect(),
                    body: received,
                };
                let _ = tx.send(recorded);

                let response = tiny_http::Response::from_string(body)
                    .with_status_code(status)
                    .with_header(
                        tiny_http::Header::from_bytes("Content-Type", "application/json")
                            .unwrap(),
                    );
                let _ = request.respond(response);
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}"),
            requests: rx,
            handle: Some(handle),
        }
    }

    /// Wait for the script to finish and return every recorded request.
    pub fn finish(mut self) -> Vec<Recorded> {
        if let Some(handle) = self.handle.take() {
            handle.join().expect("mock server thread panicked");
        }
        self.requests.try_iter().collect()
    }

    pub fn client(&self) -> trail_client::AuditTrailClient {
        trail_client::AuditTrailClient::new(&self.base_url, TOKEN, API_KEY).expect("client builds")
    }
}

/// Base URL of a port nothing listens on.
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// Assert both credential headers are present and well-formed.
pub fn assert_authenticated(request: &Recorded) {
    assert_eq!(
        request.header("Authorization"),
        Some(format!("Bearer {TOKEN}").as_str())
    );
    assert_eq!(request.header("X-API-Key"), Some(API_KEY));
}
