// Request handling module entry point
// Routing dispatch plus the page, asset, and not-found responders

pub mod pages;
pub mod router;
pub mod static_files;

pub use router::{handle_request, resolve, RequestContext, Resource};
