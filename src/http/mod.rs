//! HTTP protocol layer module
//!
//! Provides HTTP protocol-related base functionality, decoupled from
//! routing and file loading.

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_405_response, build_asset_response, build_html_response, build_not_found_response,
    build_options_response, build_server_error_response,
};
