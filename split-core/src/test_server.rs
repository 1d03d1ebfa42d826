//! Throwaway HTTP server for exercising the client against canned responses.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub struct Reply {
    status: &'static str,
    body: String,
}

impl Reply {
    pub fn ok(body: &str) -> Self {
        Self::status("200 OK", body)
    }

    pub fn status(status: &'static str, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

pub struct TestServer {
    pub base_url: String,
    handle: JoinHandle<Vec<String>>,
}

impl TestServer {
    /// Waits until every reply was served and returns the raw requests seen.
    pub async fn finish(self) -> Vec<String> {
        self.handle.await.unwrap()
    }
}

/// Serves `replies` in order, one connection each.
pub async fn serve(replies: Vec<Reply>) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let mut requests = Vec::new();
        for reply in replies {
            let (mut socket, _) = listener.accept().await.unwrap();

            let mut raw = Vec::new();
            let mut buf = [0u8; 1024];
            while !raw.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
            }
            requests.push(String::from_utf8_lossy(&raw).into_owned());

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                reply.status,
                reply.body.len(),
                reply.body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        }
        requests
    });

    TestServer { base_url, handle }
}

/// A base URL nothing is listening on.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
