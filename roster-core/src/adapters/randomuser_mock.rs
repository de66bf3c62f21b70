//! Mock randomuser.me server for testing
//!
//! Serves `GET /?results=N&nat=XX` with demo users shaped like the real API
//! response (`{ results: [...], info: {...} }`), or a configured failure.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use serde::Serialize;

use super::demo::generate_demo_users;
use crate::domain::RawUser;

/// Mock randomuser.me server for testing
pub struct MockRandomUserServer {
    port: u16,
    running: Arc<AtomicBool>,
    requests: Arc<AtomicUsize>,
    targets: Arc<Mutex<Vec<String>>>,
    thread_handle: Option<thread::JoinHandle<()>>,
}

/// How the mock server responds
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// Seed for the generated users
    pub seed: u64,
    /// Respond with this HTTP status and an error body instead of users
    pub fail_status: Option<u16>,
    /// Respond 200 with a body that is not valid JSON
    pub malformed_body: bool,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            seed: 11,
            fail_status: None,
            malformed_body: false,
        }
    }
}

#[derive(Serialize)]
struct MockResponse {
    results: Vec<RawUser>,
    info: MockInfo,
}

#[derive(Serialize)]
struct MockInfo {
    seed: String,
    results: usize,
    page: u32,
    version: &'static str,
}

impl MockRandomUserServer {
    /// Start a new mock server on a random available port
    pub fn start(config: MockConfig) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let port = listener.local_addr()?.port();
        let running = Arc::new(AtomicBool::new(true));
        let requests = Arc::new(AtomicUsize::new(0));
        let targets = Arc::new(Mutex::new(Vec::new()));
        let running_clone = running.clone();
        let requests_clone = requests.clone();
        let targets_clone = targets.clone();

        // Set listener to non-blocking for graceful shutdown
        listener.set_nonblocking(true)?;

        let thread_handle = thread::spawn(move || {
            while running_clone.load(Ordering::SeqCst) {
                match listener.accept() {
                    Ok((stream, _)) => {
                        requests_clone.fetch_add(1, Ordering::SeqCst);
                        let cfg = config.clone();
                        let seen = targets_clone.clone();
                        thread::spawn(move || handle_connection(stream, &cfg, &seen));
                    }
                    Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                        thread::sleep(std::time::Duration::from_millis(10));
                    }
                    Err(_) => break,
                }
            }
        });

        Ok(Self {
            port,
            running,
            requests,
            targets,
            thread_handle: Some(thread_handle),
        })
    }

    /// Base URL for this mock server
    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    /// Number of connections accepted so far
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// Request targets (path and query) in arrival order
    pub fn request_targets(&self) -> Vec<String> {
        self.targets.lock().map(|t| t.clone()).unwrap_or_default()
    }

    /// Stop the mock server
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for MockRandomUserServer {
    fn drop(&mut self) {
        self.stop();
    }
}

fn handle_connection(mut stream: TcpStream, config: &MockConfig, seen: &Mutex<Vec<String>>) {
    // Accepted sockets inherit non-blocking mode on some platforms
    let _ = stream.set_nonblocking(false);
    let mut buffer = [0; 4096];

    let Ok(n) = stream.read(&mut buffer) else {
        return;
    };
    let request = String::from_utf8_lossy(&buffer[..n]);
    let first_line = request.lines().next().unwrap_or("");
    let parts: Vec<&str> = first_line.split_whitespace().collect();

    if parts.len() < 2 || parts[0] != "GET" {
        let body = r#"{"error": "Method not allowed"}"#;
        send_response(&mut stream, 405, "Method Not Allowed", body);
        return;
    }

    if let Ok(mut targets) = seen.lock() {
        targets.push(parts[1].to_string());
    }

    if let Some(status) = config.fail_status {
        let body = r#"{"error": "Uh oh, something has gone wrong."}"#;
        send_response(&mut stream, status, "Error", body);
        return;
    }

    if config.malformed_body {
        send_response(&mut stream, 200, "OK", "<html>not json</html>");
        return;
    }

    let results = query_param(parts[1], "results")
        .and_then(|v| v.parse().ok())
        .unwrap_or(1);

    let response = MockResponse {
        results: generate_demo_users(results, config.seed),
        info: MockInfo {
            seed: config.seed.to_string(),
            results,
            page: 1,
            version: "1.4",
        },
    };
    match serde_json::to_string(&response) {
        Ok(json) => send_response(&mut stream, 200, "OK", &json),
        Err(_) => send_response(&mut stream, 500, "Internal Server Error", "{}"),
    }
}

fn query_param<'a>(path: &'a str, key: &str) -> Option<&'a str> {
    let query = path.split_once('?')?.1;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
}

fn send_response(stream: &mut TcpStream, status: u16, status_text: &str, body: &str) {
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\
         Connection: close\r\n\r\n{}",
        status,
        status_text,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::randomuser::RandomUserClient;
    use crate::domain::result::Error;
    use crate::ports::{FetchRequest, UserSource};

    #[test]
    fn test_query_param() {
        assert_eq!(query_param("/?results=12&nat=us", "results"), Some("12"));
        assert_eq!(query_param("/?results=12&nat=us", "nat"), Some("us"));
        assert_eq!(query_param("/", "results"), None);
    }

    #[tokio::test]
    async fn test_fetch_users_from_mock() {
        let server = MockRandomUserServer::start(MockConfig::default()).unwrap();
        let client = RandomUserClient::new_with_base_url(&server.base_url()).unwrap();

        let users = client.fetch_users(&FetchRequest::default()).await.unwrap();

        assert_eq!(users.len(), 12);
        assert_eq!(server.request_count(), 1);
        assert_eq!(server.request_targets(), vec!["/?results=12&nat=us".to_string()]);
    }

    #[tokio::test]
    async fn test_request_keeps_base_path() {
        let server = MockRandomUserServer::start(MockConfig::default()).unwrap();
        let base_url = format!("{}/api", server.base_url());
        let client = RandomUserClient::new_with_base_url(&base_url).unwrap();

        let request = FetchRequest {
            results: 3,
            nationality: "gb".to_string(),
        };
        let users = client.fetch_users(&request).await.unwrap();

        assert_eq!(users.len(), 3);
        assert_eq!(server.request_targets(), vec!["/api/?results=3&nat=gb".to_string()]);
    }

    #[tokio::test]
    async fn test_non_2xx_is_fetch_failure() {
        let server = MockRandomUserServer::start(MockConfig {
            fail_status: Some(503),
            ..Default::default()
        })
        .unwrap();
        let client = RandomUserClient::new_with_base_url(&server.base_url()).unwrap();

        let err = client.fetch_users(&FetchRequest::default()).await.unwrap_err();

        assert!(matches!(err, Error::Fetch(_)));
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_fetch_failure() {
        let server = MockRandomUserServer::start(MockConfig {
            malformed_body: true,
            ..Default::default()
        })
        .unwrap();
        let client = RandomUserClient::new_with_base_url(&server.base_url()).unwrap();

        let err = client.fetch_users(&FetchRequest::default()).await.unwrap_err();

        assert!(matches!(err, Error::Fetch(_)));
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[tokio::test]
    async fn test_connection_refused_is_fetch_failure() {
        let mut server = MockRandomUserServer::start(MockConfig::default()).unwrap();
        let base_url = server.base_url();
        server.stop();
        drop(server);

        let client = RandomUserClient::new_with_base_url(&base_url).unwrap();
        let err = client.fetch_users(&FetchRequest::default()).await.unwrap_err();

        assert!(matches!(err, Error::Fetch(_)));
    }
}
