//! Generic file serving module
//!
//! Serves an entry of a `FileSystem` as a negotiated response: index files
//! for directories, conditional requests, HEAD.

use super::cache;
use super::mime;
use super::response::{self, FileHeaders};
use crate::fs::{Entry, FileEntry, FileSystem};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{self, HeaderName};
use hyper::{Method, Request, Response};
use std::path::Path;

/// Default `Cache-Control` for served assets
pub const DEFAULT_CACHE_CONTROL: &str = "public, max-age=3600";

/// Writes the response for a path that is expected to exist
///
/// `path` is the decoded filesystem path; `req` supplies the method, the
/// conditional headers and the URL used for redirects.
pub trait FileServer: Send + Sync {
    fn serve<B>(&self, fs: &dyn FileSystem, path: &str, req: &Request<B>) -> Response<Full<Bytes>>;
}

#[derive(Debug, Clone)]
pub struct HttpFileServer {
    index_files: Vec<String>,
    cache_control: String,
}

impl Default for HttpFileServer {
    fn default() -> Self {
        Self {
            index_files: vec!["index.html".to_string()],
            cache_control: DEFAULT_CACHE_CONTROL.to_string(),
        }
    }
}

impl HttpFileServer {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_index_files(mut self, index_files: Vec<String>) -> Self {
        self.index_files = index_files;
        self
    }

    #[must_use]
    pub fn with_cache_control(mut self, value: impl Into<String>) -> Self {
        self.cache_control = value.into();
        self
    }

    /// Resolve a directory to its first existing index file
    fn find_index(&self, fs: &dyn FileSystem, dir: &str) -> Option<(FileEntry, String)> {
        let dir = dir.trim_end_matches('/');
        self.index_files.iter().find_map(|name| {
            let candidate = format!("{dir}/{name}");
            match fs.open(&candidate) {
                Ok(Entry::File(file)) => Some((file, candidate)),
                _ => None,
            }
        })
    }
}

fn header_str<'a, B>(req: &'a Request<B>, name: &HeaderName) -> Option<&'a str> {
    req.headers().get(name).and_then(|v| v.to_str().ok())
}

impl FileServer for HttpFileServer {
    fn serve<B>(&self, fs: &dyn FileSystem, path: &str, req: &Request<B>) -> Response<Full<Bytes>> {
        let is_head = match *req.method() {
            Method::GET => false,
            Method::HEAD => true,
            _ => return response::build_405_response(),
        };

        let (file, served_path) = match fs.open(path) {
            Ok(Entry::File(file)) => (file, path.to_string()),
            Ok(Entry::Dir) if !req.uri().path().ends_with('/') => {
                return response::build_redirect_response(&format!("{}/", req.uri().path()));
            }
            Ok(Entry::Dir) => match self.find_index(fs, path) {
                Some(found) => found,
                None => return response::build_404_response(),
            },
            Err(_) => return response::build_404_response(),
        };

        let etag = cache::generate_etag(&file.data);
        let last_modified = file.modified.map(cache::format_http_date);
        let headers = FileHeaders {
            content_type: mime::content_type(Path::new(&served_path)),
            etag: &etag,
            last_modified: last_modified.as_deref(),
            cache_control: &self.cache_control,
        };

        // If-None-Match takes precedence over If-Modified-Since
        let if_none_match = header_str(req, &header::IF_NONE_MATCH);
        let not_modified = match (if_none_match, file.modified) {
            (Some(_), _) => cache::check_etag_match(if_none_match, &etag),
            (None, Some(modified)) => {
                cache::check_not_modified_since(header_str(req, &header::IF_MODIFIED_SINCE), modified)
            }
            (None, None) => false,
        };
        if not_modified {
            return response::build_304_response(&headers);
        }

        response::build_cached_response(file.data, &headers, is_head)
    }
}
