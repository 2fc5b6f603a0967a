//! Template error definitions.

use thiserror::Error;

/// Errors that can occur while loading or rendering a template.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template file could not be read as UTF-8 text.
    #[error("failed to read template '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A `{{` placeholder opener was never closed.
    #[error("unclosed '{{{{' placeholder at byte {offset}")]
    Unclosed { offset: usize },
}
