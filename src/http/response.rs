//! HTTP response building module
//!
//! Provides builders for the status code responses the helpers produce.

use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::http::response::Builder;
use hyper::header::{self, HeaderValue};
use hyper::{Response, StatusCode};

/// Headers shared by every successful or conditional file response
#[derive(Debug, Clone, Copy)]
pub struct FileHeaders<'a> {
    pub content_type: &'a str,
    pub etag: &'a str,
    pub last_modified: Option<&'a str>,
    pub cache_control: &'a str,
}

impl FileHeaders<'_> {
    fn apply(&self, mut builder: Builder) -> Builder {
        builder = builder
            .header("ETag", self.etag)
            .header("Cache-Control", self.cache_control);
        if let Some(last_modified) = self.last_modified {
            builder = builder.header("Last-Modified", last_modified);
        }
        builder
    }
}

/// Build a plain-text response for the given status
pub fn build_text_response(status: StatusCode, text: &'static str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", "text/plain; charset=utf-8")
        .header("X-Content-Type-Options", "nosniff")
        .body(Full::new(Bytes::from_static(text.as_bytes())))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            Response::new(Full::new(Bytes::from_static(text.as_bytes())))
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    build_text_response(StatusCode::NOT_FOUND, "404 page not found\n")
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    let mut response = build_text_response(StatusCode::METHOD_NOT_ALLOWED, "405 Method Not Allowed\n");
    response
        .headers_mut()
        .insert(header::ALLOW, HeaderValue::from_static("GET, HEAD"));
    response
}

/// Build 301 redirect response (directory paths without a trailing slash)
pub fn build_redirect_response(target: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::MOVED_PERMANENTLY)
        .header("Location", target)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("301", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 304 Not Modified response
pub fn build_304_response(headers: &FileHeaders<'_>) -> Response<Full<Bytes>> {
    headers
        .apply(Response::builder().status(StatusCode::NOT_MODIFIED))
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("304", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build generic HTML response
pub fn build_html_response(content: String, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = content.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(content)
    };

    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("HTML", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 200 response with cache control
pub fn build_cached_response(
    data: Bytes,
    headers: &FileHeaders<'_>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { data };

    headers
        .apply(Response::builder().status(StatusCode::OK))
        .header("Content-Type", headers.content_type)
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADERS: FileHeaders<'static> = FileHeaders {
        content_type: "text/css",
        etag: "\"abc\"",
        last_modified: Some("Sun, 06 Nov 1994 08:49:37 GMT"),
        cache_control: "public, max-age=3600",
    };

    #[test]
    fn test_404_response() {
        let resp = build_404_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            resp.headers()["content-type"],
            "text/plain; charset=utf-8"
        );
    }

    #[test]
    fn test_cached_response_headers() {
        let resp = build_cached_response(Bytes::from_static(b"body{}"), &HEADERS, false);
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["content-length"], "6");
        assert_eq!(resp.headers()["etag"], "\"abc\"");
        assert_eq!(
            resp.headers()["last-modified"],
            "Sun, 06 Nov 1994 08:49:37 GMT"
        );
    }

    #[test]
    fn test_304_has_no_body_headers() {
        let resp = build_304_response(&HEADERS);
        assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);
        assert!(resp.headers().get("content-length").is_none());
    }

    #[test]
    fn test_405_allow_header() {
        let resp = build_405_response();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers()["allow"], "GET, HEAD");
    }
}
