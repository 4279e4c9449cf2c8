//! Log record module

/// Structured event emitted when a requested asset is missing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Error text from the failed lookup
    pub message: String,
    /// HTTP method (GET, HEAD, ...)
    pub method: String,
    /// Response status code
    pub status: u16,
    /// Request URI path, percent-decoded when possible
    pub path: String,
}

impl LogRecord {
    pub fn new(
        message: impl Into<String>,
        method: impl Into<String>,
        status: u16,
        path: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            method: method.into(),
            status,
            path: path.into(),
        }
    }
}
