//! A tiny stand-in for the GitHub API: every server answers exactly one connection and then goes
//! away.

use std::time::Duration;

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
    sync::oneshot,
    time::sleep,
};
use url::Url;

pub(crate) fn http_response(status_line: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {}\r\ncontent-type: application/json; charset=utf-8\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    )
}

/// Answers the first request with `response`, and hands back the raw request head.
pub(crate) async fn serve_once(response: String) -> (Url, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = Url::parse(&format!("http://{}", listener.local_addr().unwrap())).unwrap();
    let (sender, receiver) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let head = read_request_head(&mut socket).await;
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        sender.send(head).ok();
    });

    (url, receiver)
}

/// Accepts a connection and never answers it.
pub(crate) async fn serve_silence() -> Url {
    serve_and_stall(String::new()).await
}

/// Sends the start of a response, then keeps the connection open without sending anything else.
pub(crate) async fn serve_and_stall(partial: String) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = Url::parse(&format!("http://{}", listener.local_addr().unwrap())).unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        read_request_head(&mut socket).await;
        if !partial.is_empty() {
            socket.write_all(partial.as_bytes()).await.unwrap();
            socket.flush().await.unwrap();
        }
        sleep(Duration::from_secs(30)).await;
        drop(socket);
    });

    url
}

/// Response head announcing a `content_length` byte body, followed by only part of that body.
pub(crate) fn truncated_response(content_length: usize, body: &str) -> String {
    format!(
        "HTTP/1.1 200 OK\r\ncontent-type: application/json; charset=utf-8\r\ncontent-length: {}\r\n\r\n{}",
        content_length, body
    )
}

async fn read_request_head(socket: &mut TcpStream) -> String {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];

    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut buf).await {
            Ok(0) | Err(_) => break,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }

    String::from_utf8_lossy(&head).into_owned()
}
