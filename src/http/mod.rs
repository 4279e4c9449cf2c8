//! HTTP protocol layer module
//!
//! The generic file server the static asset handler delegates to, and the
//! cache, MIME and response primitives it is built from.

pub mod cache;
pub mod file_server;
pub mod mime;
pub mod response;

pub use file_server::{FileServer, HttpFileServer, DEFAULT_CACHE_CONTROL};
pub use response::{
    build_304_response, build_404_response, build_405_response, build_html_response,
    build_redirect_response, build_text_response,
};
