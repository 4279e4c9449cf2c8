//! Helpers for backend web services
//!
//! - [`env::getenv`]: environment lookup with a fallback
//! - [`template`]: page templates composed on top of a shared layout
//! - [`handler::StaticAssetHandler`]: static/embedded assets with 404 handling
//!
//! Both components are stateless and safe to share across request tasks.

pub mod config;
pub mod env;
pub mod error;
pub mod fs;
pub mod handler;
pub mod http;
pub mod logger;
pub mod template;

pub use error::{Error, ErrorKind, Result};
pub use handler::StaticAssetHandler;
pub use template::{compose_templates, compose_templates_with_layout, ComposedTemplate};
pub use tera::Context;
