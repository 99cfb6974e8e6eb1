#![allow(dead_code)]

use serde_json::{Value, json};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

/// Raw HTTP/1.1 response with a JSON content type.
pub fn json_response(status: u16, reason: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {} {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    )
}

/// Raw HTTP/1.1 redirect pointing at `location`.
pub fn redirect_response(status: u16, location: &str) -> String {
    format!(
        "HTTP/1.1 {} Redirect\r\nlocation: {}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
        status, location
    )
}

/// Serves one canned HTTP/1.1 response and reports the raw request head.
pub async fn serve_once(status: u16, reason: &str, body: String) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = json_response(status, reason, &body);
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let head = read_head(&mut socket).await;
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        let _ = tx.send(head);
    });

    (format!("http://{}/api/analyze", addr), rx)
}

/// Answers successive connections with `responses`, in order, and reports
/// every request head once they are all served.
pub async fn serve_sequence(responses: Vec<String>) -> (String, oneshot::Receiver<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let mut heads = Vec::new();
        for response in responses {
            let (mut socket, _) = listener.accept().await.unwrap();
            heads.push(read_head(&mut socket).await);
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        }
        let _ = tx.send(heads);
    });

    (format!("http://{}/api/analyze", addr), rx)
}

/// Accepts one connection, never answers, and reports whether the client
/// closed the socket within five seconds.
pub async fn serve_silently() -> (String, oneshot::Receiver<bool>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        read_head(&mut socket).await;
        let mut buf = [0u8; 64];
        let closed = matches!(
            tokio::time::timeout(std::time::Duration::from_secs(5), socket.read(&mut buf)).await,
            Ok(Ok(0)) | Ok(Err(_))
        );
        let _ = tx.send(closed);
    });

    (format!("http://{}/api/analyze", addr), rx)
}

/// An endpoint on a port nobody listens on.
pub async fn refused_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api/analyze", addr)
}

async fn read_head(socket: &mut TcpStream) -> String {
    let mut head = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        head.extend_from_slice(&chunk[..n]);
        if head.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }
    String::from_utf8_lossy(&head).into_owned()
}

fn diagnostic(status: &str, icon: &str, message: &str) -> Value {
    json!({ "status": status, "icon": icon, "message": message })
}

fn category(name: &str, score: u32, status: &str, weight: u32) -> Value {
    let issues = if status == "pass" {
        json!([])
    } else {
        json!([format!("{} needs work", name)])
    };
    json!({
        "name": name,
        "score": score,
        "maxScore": 100,
        "status": status,
        "weight": weight,
        "issues": issues
    })
}

/// Analysis payload as the service returns it.
pub fn payload(grade: &str, overall: u32, total_issues: u32) -> Value {
    let (status, cat_status, score) = if total_issues == 0 {
        (("green", "check"), "pass", 100)
    } else {
        (("red", "error"), "fail", 0)
    };
    json!({
        "ok": true,
        "url": "https://example.com",
        "finalUrl": "https://example.com/",
        "analyzedAt": "2025-01-01T00:00:00.000Z",
        "timing": 321,
        "meta": { "title": "Example Domain" },
        "diagnostics": {
            "overall": diagnostic(status.0, status.1, "Summary"),
            "title": diagnostic("green", "check", "Title present"),
            "description": diagnostic(status.0, status.1, "Description check"),
            "ogTags": diagnostic(status.0, status.1, "OG tags check"),
            "ogImage": diagnostic(status.0, status.1, "OG image check"),
            "twitterCard": diagnostic(status.0, status.1, "Twitter card check"),
            "canonical": diagnostic(status.0, status.1, "Canonical check"),
            "robots": diagnostic("green", "check", "No restrictions")
        },
        "score": {
            "overall": overall,
            "grade": grade,
            "totalIssues": total_issues,
            "categories": {
                "title": category("Title", 100, "pass", 15),
                "description": category("Description", score, cat_status, 15),
                "openGraph": category("Open Graph", score, cat_status, 25),
                "ogImage": category("OG Image", score, cat_status, 20),
                "twitterCard": category("Twitter Card", score, cat_status, 10),
                "canonical": category("Canonical", score, cat_status, 10),
                "robots": category("Robots", 100, "pass", 5)
            }
        }
    })
}
