//! Template rendering module
//!
//! A small placeholder-substitution renderer consumed by the page and
//! not-found responders. Pages carry no dynamic data, so they render
//! with an empty context and pass through as literal content.

mod engine;
mod error;

pub use engine::{render, render_file, RenderContext};
pub use error::TemplateError;
