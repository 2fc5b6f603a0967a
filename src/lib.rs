//! Sitelet - a small template-and-asset web server
//!
//! Serves a fixed set of template-rendered pages plus static assets
//! over HTTP/1.1. Routing is an exact-match page table backed by a
//! MIME-table check for static assets; everything else renders the
//! not-found page.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
pub mod template;
