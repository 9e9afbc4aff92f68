//! Route dispatch.

use sqli_lab_core::Catalog;
use tracing::{error, info};

use crate::comparison::Comparison;
use crate::request::Request;
use crate::response::Response;
use crate::templates::render_page;

/// The web application: a catalog plus the routes over it.
#[derive(Debug, Clone)]
pub struct App {
    catalog: Catalog,
}

impl App {
    /// Creates the application over a catalog.
    #[must_use]
    pub const fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Handles a request.
    pub async fn handle(&self, req: Request) -> Response {
        if !req.method.is_read_only() {
            return Response::method_not_allowed();
        }

        match req.path.as_str() {
            "/" => self.index(&req).await,
            "/api/search" => self.api_search(&req).await,
            "/health" => Response::text("ok"),
            _ => Response::not_found(),
        }
    }

    /// The search page. Both searches run only for a non-empty term.
    async fn index(&self, req: &Request) -> Response {
        let term = req.get_query("q").unwrap_or("");
        if term.is_empty() {
            return Response::html(render_page(term, None));
        }

        info!(term = %term, "Comparing searches");
        let comparison = Comparison::run(&self.catalog, term).await;
        Response::html(render_page(term, Some(&comparison)))
    }

    /// The same comparison as JSON.
    async fn api_search(&self, req: &Request) -> Response {
        let term = match req.get_query("q") {
            Some(t) if !t.is_empty() => t,
            _ => return Response::bad_request("missing query parameter 'q'"),
        };

        let comparison = Comparison::run(&self.catalog, term).await;
        Response::json(&comparison).unwrap_or_else(|e| {
            error!(error = %e, "Failed to serialize comparison");
            Response::internal_server_error()
        })
    }
}
