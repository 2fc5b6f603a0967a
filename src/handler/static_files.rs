//! Static asset serving and the not-found flow
//!
//! Assets are resolved by joining the raw URL path onto the static
//! root. Any resolution or read failure falls through to the rendered
//! not-found page; if that page itself cannot be rendered, the
//! response degrades to a generic 500.

use crate::config::RoutesConfig;
use crate::handler::router::RequestContext;
use crate::http::{self, mime};
use crate::logger;
use crate::template::{self, RenderContext};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

/// Serve a static asset
pub async fn serve_asset(
    ctx: &RequestContext<'_>,
    routes: &RoutesConfig,
) -> Response<Full<Bytes>> {
    match load_asset(&routes.static_root, ctx.path).await {
        Some((content, content_type)) => {
            http::build_asset_response(content, content_type, ctx.is_head)
        }
        None => serve_not_found(ctx, routes).await,
    }
}

/// Serve the rendered not-found page with status 404
pub async fn serve_not_found(
    ctx: &RequestContext<'_>,
    routes: &RoutesConfig,
) -> Response<Full<Bytes>> {
    let template_path = Path::new(&routes.templates_dir).join(&routes.not_found_template);

    match template::render_file(&template_path, &RenderContext::new()).await {
        Ok(html) => http::build_not_found_response(html, ctx.is_head),
        Err(e) => {
            logger::log_error(&format!(
                "Failed to render fallback page '{}' for {}: {e}",
                template_path.display(),
                ctx.path
            ));
            http::build_server_error_response(ctx.is_head)
        }
    }
}

/// Load an asset's bytes and content type from the static root
///
/// Returns `None` for anything that should 404: missing files,
/// unreadable files, and paths escaping the static root.
pub async fn load_asset(static_root: &str, path: &str) -> Option<(Vec<u8>, &'static str)> {
    // Remove leading slash and prevent directory traversal
    let clean_path = path.trim_start_matches('/').replace("..", "");
    let file_path = Path::new(static_root).join(clean_path);

    let root_canonical = match Path::new(static_root).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Static root not found or inaccessible '{static_root}': {e}"
            ));
            return None;
        }
    };

    // A missing file is the routine 404 case, not worth a log line
    let Ok(file_canonical) = file_path.canonicalize() else {
        return None;
    };
    if !file_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {path} -> {}",
            file_canonical.display()
        ));
        return None;
    }

    // Directories are not assets
    if file_canonical.is_dir() {
        return None;
    }

    let content = match fs::read(&file_path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                file_path.display()
            ));
            return None;
        }
    };

    let content_type = mime::content_type_for(file_path.extension().and_then(|e| e.to_str()));
    Some((content, content_type))
}
