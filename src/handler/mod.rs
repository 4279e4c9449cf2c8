//! Request handler module
//!
//! Handlers that request-processing code calls directly.

pub mod static_files;

pub use static_files::StaticAssetHandler;
