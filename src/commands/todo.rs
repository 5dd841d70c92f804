//! Todo Commands
//!
//! `RemoteStore` over HTTP/JSON using reqwest (browser fetch on wasm32).

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};

use super::{NetworkError, RemoteStore, StoreConfig, StoreResult};
use crate::models::{NewTodo, TitlePatch, Todo, TodoId};

/// HTTP-backed todo collection
#[derive(Debug, Clone)]
pub struct HttpTodoStore {
    client: Client,
    config: StoreConfig,
}

impl HttpTodoStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Use a preconfigured client (custom headers, proxy settings)
    pub fn with_client(config: StoreConfig, client: Client) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Send a request and reject anything outside 2xx
    async fn send(&self, method: &'static str, url: &str, request: RequestBuilder) -> StoreResult<Response> {
        log::debug!("[HTTP] {} {}", method, url);
        let response = request.send().await.map_err(|source| NetworkError::Transport {
            method,
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::Status {
                method,
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn decode<T: serde::de::DeserializeOwned>(url: &str, response: Response) -> StoreResult<T> {
        response.json::<T>().await.map_err(|source| NetworkError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait(?Send)]
impl RemoteStore for HttpTodoStore {
    async fn fetch_all(&self) -> StoreResult<Vec<Todo>> {
        let url = self.config.collection_url();
        let response = self.send("GET", &url, self.client.get(&url)).await?;
        Self::decode(&url, response).await
    }

    async fn create(&self, title: &str) -> StoreResult<Todo> {
        let url = self.config.collection_url();
        let body = NewTodo { title, completed: false };
        let response = self.send("POST", &url, self.client.post(&url).json(&body)).await?;
        Self::decode(&url, response).await
    }

    async fn update(&self, id: TodoId, title: &str) -> StoreResult<()> {
        let url = self.config.item_url(id);
        let body = TitlePatch { title };
        self.send("PUT", &url, self.client.put(&url).json(&body)).await?;
        Ok(())
    }

    async fn remove(&self, id: TodoId) -> StoreResult<()> {
        let url = self.config.item_url(id);
        self.send("DELETE", &url, self.client.delete(&url)).await?;
        Ok(())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::sync::oneshot;

    /// Serve exactly one HTTP response on a random local port.
    /// Returns the base URL and a receiver for the raw request text.
    async fn respond_once(status_line: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind");
        let addr = listener.local_addr().expect("No local addr");
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("Failed to accept");
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.expect("Failed to write");
            let _ = socket.shutdown().await;
            let _ = tx.send(request);
        });

        (format!("http://{}", addr), rx)
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.expect("Failed to read");
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let headers = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
                let content_length = headers
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|value| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn store_at(base_url: &str) -> HttpTodoStore {
        let client = Client::builder().no_proxy().build().expect("Failed to build client");
        HttpTodoStore::with_client(StoreConfig::default().with_base_url(base_url), client)
    }

    #[tokio::test]
    async fn test_fetch_all_keeps_server_order() {
        let body = r#"[{"userId":1,"id":2,"title":"B","completed":true},{"userId":1,"id":1,"title":"A","completed":false}]"#;
        let (base, request) = respond_once("200 OK", body).await;

        let todos = store_at(&base).fetch_all().await.expect("Fetch failed");

        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].id, TodoId(2));
        assert!(todos[0].completed);
        assert_eq!(todos[1].title, "A");
        assert!(request.await.unwrap().starts_with("GET /todos HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_create_posts_title_and_returns_record() {
        let (base, request) = respond_once("201 Created", r#"{"title":"New","completed":false,"id":201}"#).await;

        let created = store_at(&base).create("New").await.expect("Create failed");

        assert_eq!(created, Todo::new(201, "New"));
        let request = request.await.unwrap();
        assert!(request.starts_with("POST /todos HTTP/1.1"));
        assert!(request.ends_with(r#"{"title":"New","completed":false}"#));
    }

    #[tokio::test]
    async fn test_update_puts_title_only() {
        let (base, request) = respond_once("200 OK", r#"{"id":3}"#).await;

        store_at(&base).update(TodoId(3), "Renamed").await.expect("Update failed");

        let request = request.await.unwrap();
        assert!(request.starts_with("PUT /todos/3 HTTP/1.1"));
        assert!(request.ends_with(r#"{"title":"Renamed"}"#));
    }

    #[tokio::test]
    async fn test_remove_ignores_response_body() {
        let (base, request) = respond_once("200 OK", "not json at all").await;

        store_at(&base).remove(TodoId(5)).await.expect("Remove failed");

        assert!(request.await.unwrap().starts_with("DELETE /todos/5 HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_network_error() {
        let (base, _request) = respond_once("500 Internal Server Error", "{}").await;

        let err = store_at(&base).update(TodoId(9), "x").await.unwrap_err();

        match err {
            NetworkError::Status { method, url, status } => {
                assert_eq!(method, "PUT");
                assert_eq!(url, format!("{}/todos/9", base));
                assert_eq!(status, 500);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_bad_body_is_decode_error() {
        let (base, _request) = respond_once("200 OK", r#"{"not":"a list"}"#).await;

        let err = store_at(&base).fetch_all().await.unwrap_err();

        assert!(matches!(err, NetworkError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        // Bind then drop so the port is known to be closed
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = store_at(&format!("http://{}", addr)).remove(TodoId(1)).await.unwrap_err();

        assert!(matches!(err, NetworkError::Transport { method: "DELETE", .. }));
    }
}
