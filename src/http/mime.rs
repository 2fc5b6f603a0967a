//! MIME type resolution module
//!
//! Maps file extensions to Content-Type values. The table is the single
//! source of truth for which extensions are served as static assets.

/// Fallback Content-Type for extensions absent from the table.
pub const DEFAULT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Look up the Content-Type for a file extension.
///
/// Returns `None` for extensions the server does not recognize as
/// static assets. Text types always carry a UTF-8 charset.
pub fn lookup(extension: &str) -> Option<&'static str> {
    let content_type = match extension {
        "html" | "htm" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "js" | "mjs" => "text/javascript; charset=utf-8",
        "txt" => "text/plain; charset=utf-8",
        "json" => "application/json",
        "xml" => "application/xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "webp" => "image/webp",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        _ => return None,
    };
    Some(content_type)
}

/// Get the MIME Content-Type for a file extension.
///
/// Always returns a value; unknown extensions fall back to a generic
/// text type.
///
/// # Examples
/// ```
/// use sitelet::http::mime::content_type_for;
/// assert_eq!(content_type_for(Some("html")), "text/html; charset=utf-8");
/// assert_eq!(content_type_for(Some("png")), "image/png");
/// assert_eq!(content_type_for(None), "text/plain; charset=utf-8");
/// ```
pub fn content_type_for(extension: Option<&str>) -> &'static str {
    extension.and_then(lookup).unwrap_or(DEFAULT_CONTENT_TYPE)
}

/// Check whether a path's extension marks it as a static asset.
pub fn is_asset_extension(extension: Option<&str>) -> bool {
    extension.is_some_and(|ext| lookup(ext).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_types() {
        assert_eq!(content_type_for(Some("html")), "text/html; charset=utf-8");
        assert_eq!(content_type_for(Some("css")), "text/css; charset=utf-8");
        assert_eq!(
            content_type_for(Some("js")),
            "text/javascript; charset=utf-8"
        );
        assert_eq!(content_type_for(Some("json")), "application/json");
        assert_eq!(content_type_for(Some("png")), "image/png");
        assert_eq!(content_type_for(Some("svg")), "image/svg+xml");
    }

    #[test]
    fn test_unknown_extension_defaults_to_text() {
        assert_eq!(content_type_for(Some("xyz")), DEFAULT_CONTENT_TYPE);
        assert_eq!(content_type_for(None), DEFAULT_CONTENT_TYPE);
    }

    #[test]
    fn test_text_types_carry_charset() {
        for ext in ["html", "css", "js", "txt"] {
            let content_type = content_type_for(Some(ext));
            assert!(
                content_type.ends_with("charset=utf-8"),
                "{ext} -> {content_type}"
            );
        }
    }

    #[test]
    fn test_asset_extension_check() {
        assert!(is_asset_extension(Some("css")));
        assert!(is_asset_extension(Some("js")));
        assert!(is_asset_extension(Some("png")));
        assert!(!is_asset_extension(Some("xyz")));
        assert!(!is_asset_extension(None));
    }
}
