//! End-to-end checks of the URL-to-text contract against a local server.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use textlens::fetch::{FetchError, TextFetcher};

/// Serve exactly one canned HTTP response on an ephemeral port.
async fn serve_once(status_line: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let response = format!(
        "{status_line}\r\ncontent-type: text/html\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len(),
    );

    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = [0u8; 8192];
            let _ = socket.read(&mut buf).await;
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{}/", addr)
}

fn fetcher() -> TextFetcher {
    TextFetcher::new(Duration::from_secs(5), None)
}

#[tokio::test]
async fn test_fetch_strips_non_content_markup() {
    let body = r#"<html>
        <head><style>p { margin: 0; }</style></head>
        <body>
            <header>Masthead</header>
            <nav>menu menu menu</nav>
            <script>var tracker = 1;</script>
            <p>Alice   went to
            Paris.</p>
            <footer>footer links</footer>
        </body>
    </html>"#;
    let url = serve_once("HTTP/1.1 200 OK", body).await;

    let text = fetcher().fetch(&url).await.unwrap();
    assert_eq!(text, "Alice went to Paris.");
}

#[tokio::test]
async fn test_fetch_404_is_an_error() {
    let url = serve_once("HTTP/1.1 404 Not Found", "<html>gone</html>").await;

    let err = fetcher().fetch(&url).await.unwrap_err();
    assert!(matches!(err, FetchError::Status(404)));
}

#[tokio::test]
async fn test_fetch_500_is_an_error() {
    let url = serve_once("HTTP/1.1 500 Internal Server Error", "").await;

    let err = fetcher().fetch(&url).await.unwrap_err();
    assert!(matches!(err, FetchError::Status(500)));
}

#[tokio::test]
async fn test_fetch_blank_page_is_empty_document() {
    let url = serve_once(
        "HTTP/1.1 200 OK",
        "<html><body><script>only()</script></body></html>",
    )
    .await;

    let err = fetcher().fetch(&url).await.unwrap_err();
    assert!(matches!(err, FetchError::EmptyDocument));
}

#[tokio::test]
async fn test_fetch_unreachable_host() {
    // Reserved TLD per RFC 2606; guaranteed not to resolve.
    let err = fetcher()
        .fetch("http://unreachable.invalid/")
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Request(_)));
}
