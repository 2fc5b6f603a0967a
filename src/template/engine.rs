//! Placeholder-substitution engine
//!
//! Templates are UTF-8 text with `{{ name }}` placeholders. Rendering
//! replaces placeholders whose name exists in the context with the
//! HTML-escaped value; unknown placeholders are left untouched so a
//! template never loses content it did not ask to substitute.

use std::collections::HashMap;
use std::path::Path;

use tokio::fs;

use super::error::TemplateError;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Values available to a template during rendering.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    values: HashMap<String, String>,
}

impl RenderContext {
    /// Create an empty context
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a value to a placeholder name
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Look up a bound value
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

/// Render template source against a context.
///
/// Substituted values are HTML-escaped; the template's own text is
/// passed through byte-for-byte.
pub fn render(source: &str, context: &RenderContext) -> Result<String, TemplateError> {
    let mut output = String::with_capacity(source.len());
    let mut rest = source;
    let mut consumed = 0;

    while let Some(start) = rest.find(OPEN) {
        output.push_str(&rest[..start]);

        let after_open = &rest[start + OPEN.len()..];
        let Some(end) = after_open.find(CLOSE) else {
            return Err(TemplateError::Unclosed {
                offset: consumed + start,
            });
        };

        let name = after_open[..end].trim();
        let placeholder_len = OPEN.len() + end + CLOSE.len();
        match context.get(name) {
            Some(value) => output.push_str(&escape_html(value)),
            // Unknown placeholder: keep the literal text
            None => output.push_str(&rest[start..start + placeholder_len]),
        }

        consumed += start + placeholder_len;
        rest = &rest[start + placeholder_len..];
    }

    output.push_str(rest);
    Ok(output)
}

/// Read a template file and render it against a context.
pub async fn render_file(
    path: &Path,
    context: &RenderContext,
) -> Result<String, TemplateError> {
    let source = fs::read_to_string(path)
        .await
        .map_err(|e| TemplateError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
    render(&source, context)
}

/// Escape special characters for embedding a value in HTML
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_passthrough() {
        let ctx = RenderContext::new();
        let html = "<html><body><h1>Home</h1></body></html>";
        assert_eq!(render(html, &ctx).unwrap(), html);
    }

    #[test]
    fn test_substitution() {
        let mut ctx = RenderContext::new();
        ctx.insert("title", "Calculator");
        assert_eq!(
            render("<title>{{ title }}</title>", &ctx).unwrap(),
            "<title>Calculator</title>"
        );
    }

    #[test]
    fn test_substituted_values_are_escaped() {
        let mut ctx = RenderContext::new();
        ctx.insert("name", "<script>alert('x')</script>");
        let rendered = render("{{ name }}", &ctx).unwrap();
        assert_eq!(
            rendered,
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_unknown_placeholder_left_intact() {
        let ctx = RenderContext::new();
        assert_eq!(render("hello {{ who }}", &ctx).unwrap(), "hello {{ who }}");
    }

    #[test]
    fn test_unclosed_placeholder_errors() {
        let ctx = RenderContext::new();
        let err = render("before {{ title", &ctx).unwrap_err();
        match err {
            TemplateError::Unclosed { offset } => assert_eq!(offset, 7),
            TemplateError::Read { .. } => panic!("expected Unclosed, got {err}"),
        }
    }

    #[test]
    fn test_multiple_placeholders() {
        let mut ctx = RenderContext::new();
        ctx.insert("a", "1");
        ctx.insert("b", "2");
        assert_eq!(render("{{a}} + {{b}} = 3", &ctx).unwrap(), "1 + 2 = 3");
    }

    #[tokio::test]
    async fn test_render_file_missing() {
        let ctx = RenderContext::new();
        let err = render_file(Path::new("no/such/template.html"), &ctx)
            .await
            .unwrap_err();
        assert!(matches!(err, TemplateError::Read { .. }));
    }
}
