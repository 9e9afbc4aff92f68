//! HTTP/1 server around [`App`].

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request as HyperRequest, Response as HyperResponse, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::request::{Method, Request};
use crate::response::Response;
use crate::routes::App;

/// Default bind address for the web UI.
pub const DEFAULT_BIND: &str = "127.0.0.1:8501";

/// Server settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind: SocketAddr,
}

impl ServerConfig {
    /// Creates a config listening on `bind`.
    #[must_use]
    pub const fn new(bind: SocketAddr) -> Self {
        Self { bind }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(SocketAddr::from(([127, 0, 0, 1], 8501)))
    }
}

/// Binds the configured address and serves until the listener fails.
pub async fn serve(config: ServerConfig, app: App) -> Result<()> {
    let listener = TcpListener::bind(config.bind).await?;
    info!(addr = %listener.local_addr()?, "Web UI listening");
    serve_listener(listener, app).await
}

/// Serves connections from an already bound listener.
pub async fn serve_listener(listener: TcpListener, app: App) -> Result<()> {
    let app = Arc::new(app);

    loop {
        let (stream, peer) = listener.accept().await?;
        let io = TokioIo::new(stream);
        let app = Arc::clone(&app);

        tokio::task::spawn(async move {
            let service = service_fn(move |req| {
                let app = Arc::clone(&app);
                handle_request(req, app)
            });

            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                warn!(peer = %peer, error = %err, "Error serving connection");
            }
        });
    }
}

async fn handle_request(
    req: HyperRequest<Incoming>,
    app: Arc<App>,
) -> std::result::Result<HyperResponse<Full<Bytes>>, Infallible> {
    let Some(method) = Method::parse(req.method().as_str()) else {
        return Ok(into_hyper(Response::method_not_allowed()));
    };

    let uri = req.uri();
    debug!(method = %req.method(), path = uri.path(), "Request");

    let mut request = Request::new(method, uri.path());
    if let Some(query) = uri.query() {
        request.query = Request::parse_query_string(query);
    }

    Ok(into_hyper(app.handle(request).await))
}

/// Converts a route response into a hyper response.
///
/// Header values hyper rejects fall back to a bare 500.
#[must_use]
pub fn into_hyper(res: Response) -> HyperResponse<Full<Bytes>> {
    let mut builder = HyperResponse::builder()
        .status(StatusCode::from_u16(res.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR));

    for (key, value) in &res.headers {
        builder = builder.header(key.as_str(), value.as_str());
    }

    builder
        .body(Full::new(Bytes::from(res.body)))
        .unwrap_or_else(|err| {
            warn!(error = %err, "Invalid response, sending 500");
            let mut fallback = HyperResponse::new(Full::new(Bytes::from_static(
                b"Internal Server Error",
            )));
            *fallback.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        })
}
