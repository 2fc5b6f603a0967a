//! Page rendering branch
//!
//! Serves the template-backed routes from the page table. Pages carry
//! no dynamic data, so every render uses an empty context.

use crate::config::RoutesConfig;
use crate::handler::router::RequestContext;
use crate::http;
use crate::logger;
use crate::template::{self, RenderContext};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;

/// Serve a page route by rendering its template
///
/// Read or render failure produces a 500 with a generic body; the
/// underlying error goes to the error log only.
pub async fn serve_page(
    ctx: &RequestContext<'_>,
    routes: &RoutesConfig,
    template_name: &str,
) -> Response<Full<Bytes>> {
    let template_path = Path::new(&routes.templates_dir).join(template_name);

    match template::render_file(&template_path, &RenderContext::new()).await {
        Ok(html) => http::build_html_response(html, ctx.is_head),
        Err(e) => {
            logger::log_error(&format!(
                "Failed to render page '{}' for {}: {e}",
                template_path.display(),
                ctx.path
            ));
            http::build_server_error_response(ctx.is_head)
        }
    }
}
