//! Static server tests: the router in-process, and a real socket end to end.

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use inkpress::config::SiteConfig;
use inkpress::generate::generate;
use inkpress::server::{self, ServeError};
use std::fs;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tower::ServiceExt;

fn built_site() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("posts")).unwrap();
    fs::write(tmp.path().join("posts/hello.md"), "# Hi").unwrap();
    fs::write(
        tmp.path().join("layout.html"),
        "<title>{{ title }}</title>{{ content }}",
    )
    .unwrap();

    let config = SiteConfig {
        source_dir: tmp.path().join("posts"),
        output_dir: tmp.path().join("site"),
        layout: tmp.path().join("layout.html"),
        ..SiteConfig::default()
    };
    generate(&config).unwrap();
    tmp
}

async fn get(tmp: &TempDir, uri: &str) -> axum::response::Response {
    server::router(&tmp.path().join("site"))
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn serves_generated_page_as_html() {
    let tmp = built_site();
    let resp = get(&tmp, "/hello.html").await;

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"), "got {content_type}");

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"<title>hello</title><h1>Hi</h1>\n");
}

#[tokio::test]
async fn missing_file_is_not_found() {
    let tmp = built_site();
    let resp = get(&tmp, "/nope.html").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn root_without_index_is_not_found() {
    let tmp = built_site();
    let resp = get(&tmp, "/").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cannot_escape_the_site_directory() {
    let tmp = built_site();
    let resp = get(&tmp, "/../posts/hello.md").await;
    assert_ne!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn other_files_get_their_own_content_type() {
    let tmp = built_site();
    fs::write(tmp.path().join("site/style.css"), "body {}").unwrap();

    let resp = get(&tmp, "/style.css").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/css"), "got {content_type}");
}

#[tokio::test]
async fn bind_conflict_is_an_error() {
    let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = taken.local_addr().unwrap().port();

    let err = server::bind("127.0.0.1", port).await.unwrap_err();
    match err {
        ServeError::Bind { addr, .. } => assert_eq!(addr, format!("127.0.0.1:{port}")),
        other => panic!("expected bind error, got {other:?}"),
    }
}

#[tokio::test]
async fn serves_over_a_real_socket() {
    let tmp = built_site();
    let listener = server::bind("127.0.0.1", 0).await.unwrap();
    let addr = listener.local_addr().unwrap();
    let site_dir = tmp.path().join("site");
    tokio::spawn(async move { server::serve(listener, &site_dir).await });

    let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /hello.html HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();

    assert!(response.starts_with("HTTP/1.1 200 OK"), "got {response}");
    assert!(response.ends_with("<title>hello</title><h1>Hi</h1>\n"));
}
