//! Serving the generated site.
//!
//! A plain static file server over the output directory: `GET /hello.html`
//! returns `site/hello.html` with a content type guessed from the extension,
//! anything that doesn't map to a file is a 404. The server only starts after
//! the batch has finished, so it never sees a half-built site.

use axum::Router;
use std::io;
use std::net::SocketAddr;
use std::path::Path;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("could not start async runtime")]
    Runtime(#[source] io::Error),
    #[error("could not bind {addr}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },
    #[error("server stopped")]
    Io(#[source] io::Error),
}

/// Router serving the files under `site_dir`.
pub fn router(site_dir: &Path) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(site_dir))
        .layer(TraceLayer::new_for_http())
}

/// Bind `host:port`, failing immediately if the address is unavailable.
pub async fn bind(host: &str, port: u16) -> Result<TcpListener, ServeError> {
    TcpListener::bind((host, port))
        .await
        .map_err(|source| ServeError::Bind {
            addr: format!("{host}:{port}"),
            source,
        })
}

/// Serve `site_dir` on an already-bound listener until the process is stopped.
pub async fn serve(listener: TcpListener, site_dir: &Path) -> Result<(), ServeError> {
    let addr: SocketAddr = listener.local_addr().map_err(ServeError::Io)?;
    info!(%addr, site = %site_dir.display(), "serving");
    println!("Serving blog at {}", site_url(addr));

    axum::serve(listener, router(site_dir))
        .await
        .map_err(ServeError::Io)
}

/// URL to reach the server on. A wildcard bind is reachable via localhost.
pub fn site_url(addr: SocketAddr) -> String {
    if addr.ip().is_unspecified() {
        format!("http://localhost:{}", addr.port())
    } else {
        format!("http://{addr}")
    }
}

/// Blocking entry point: start a runtime, bind, and serve forever.
pub fn run(site_dir: &Path, host: &str, port: u16) -> Result<(), ServeError> {
    let runtime = tokio::runtime::Runtime::new().map_err(ServeError::Runtime)?;
    runtime.block_on(async {
        let listener = bind(host, port).await?;
        serve(listener, site_dir).await
    })
}
