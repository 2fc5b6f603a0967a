//! Request routing dispatch module
//!
//! Entry point for HTTP request processing, responsible for method
//! validation, resource resolution, dispatching, and access logging.

use crate::config::{AppState, RoutesConfig};
use crate::handler::{pages, static_files};
use crate::http::{self, mime};
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub remote_addr: SocketAddr,
    pub referer: Option<String>,
    pub user_agent: Option<String>,
}

/// What a request path resolves to
///
/// At most one resolution applies per request: an exact page-table
/// match, a recognized asset extension, or neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// A page rendered from the named template file
    Page(String),
    /// A static asset resolved under the static root
    Asset,
    /// Neither a page route nor a recognized asset extension
    NotFound,
}

/// Resolve a request path against the route configuration
#[must_use]
pub fn resolve(path: &str, routes: &RoutesConfig) -> Resource {
    // 1. Exact match against the page table
    if let Some(template) = routes.pages.get(path) {
        return Resource::Page(template.clone());
    }

    // 2. Recognized asset extension
    let extension = Path::new(path).extension().and_then(|e| e.to_str());
    if mime::is_asset_extension(extension) {
        return Resource::Asset;
    }

    // 3. Unmatched paths go straight to the not-found flow
    Resource::NotFound
}

/// Main entry point for HTTP request handling
///
/// Generic over the request body: the server never reads one, and
/// tests drive this with plain `Request<()>`.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    remote_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let version = req.version();
    let is_head = method == Method::HEAD;

    // 1. Check HTTP method
    if let Some(resp) = check_http_method(&method, state.config.http.enable_cors) {
        return Ok(resp);
    }

    // 2. Extract headers for access logging
    let ctx = RequestContext {
        path: &path,
        is_head,
        remote_addr,
        referer: header_value(&req, "referer"),
        user_agent: header_value(&req, "user-agent"),
    };

    // 3. Resolve and dispatch
    let routes = &state.config.routes;
    let response = match resolve(&path, routes) {
        Resource::Page(template) => pages::serve_page(&ctx, routes, &template).await,
        Resource::Asset => static_files::serve_asset(&ctx, routes).await,
        Resource::NotFound => static_files::serve_not_found(&ctx, routes).await,
    };

    // 4. Access log
    if state.access_log() {
        let mut entry = AccessLogEntry::new(
            remote_addr.ip().to_string(),
            method.to_string(),
            path.clone(),
        );
        entry.http_version = version_label(version).to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = body_len(&response);
        entry.referer = ctx.referer.clone();
        entry.user_agent = ctx.user_agent.clone();
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Extract a header as an owned string, ignoring non-UTF-8 values
fn header_value<B>(req: &Request<B>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

/// Exact body length for the access log
fn body_len(response: &Response<Full<Bytes>>) -> usize {
    use hyper::body::Body;
    usize::try_from(response.body().size_hint().exact().unwrap_or(0)).unwrap_or(0)
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        _ => "1.1",
    }
}
