//! Static asset handler
//!
//! Probes the filesystem for the requested path before handing the request to
//! the file server. A miss becomes a 404 plus one log record; the error text
//! only ever reaches the log sink, never the response body.
//!
//! The URL path is percent-decoded, optionally stripped of a mount prefix and
//! checked for `..` segments. The probe and the serve step see the same
//! resulting path, but open it separately, so content can change between
//! them. Backing stores are expected to be read-only or embedded.

use crate::fs::{self, FileSystem};
use crate::http::{self, FileServer, HttpFileServer};
use crate::logger::{LogRecord, LogSink, TracingSink};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response, StatusCode};
use percent_encoding::percent_decode_str;
use std::io;

pub struct StaticAssetHandler<F, S = HttpFileServer, L = TracingSink> {
    fs: F,
    server: S,
    logger: L,
    prefix: Option<String>,
}

impl<F: FileSystem> StaticAssetHandler<F> {
    /// Handler with the default file server, logging misses through `tracing`
    pub fn new(fs: F) -> Self {
        Self {
            fs,
            server: HttpFileServer::default(),
            logger: TracingSink,
            prefix: None,
        }
    }
}

impl<F: FileSystem, S: FileServer, L: LogSink> StaticAssetHandler<F, S, L> {
    pub fn with_logger<L2: LogSink>(self, logger: L2) -> StaticAssetHandler<F, S, L2> {
        StaticAssetHandler {
            fs: self.fs,
            server: self.server,
            logger,
            prefix: self.prefix,
        }
    }

    pub fn with_server<S2: FileServer>(self, server: S2) -> StaticAssetHandler<F, S2, L> {
        StaticAssetHandler {
            fs: self.fs,
            server,
            logger: self.logger,
            prefix: self.prefix,
        }
    }

    /// Strip `prefix` from request paths before they reach the filesystem
    ///
    /// With prefix `/static/` the URL `/static/css/site.css` opens
    /// `/css/site.css`. Paths outside the prefix are misses.
    #[must_use]
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        let prefix = prefix.trim_end_matches('/');
        self.prefix = (!prefix.is_empty()).then(|| prefix.to_string());
        self
    }

    pub const fn filesystem(&self) -> &F {
        &self.fs
    }

    /// Produce the single response for `req`
    pub fn handle<B>(&self, req: &Request<B>) -> Response<Full<Bytes>> {
        let raw = req.uri().path();
        let (logged, lookup) = match decode_path(raw) {
            Ok(decoded) => {
                let lookup = self.fs_path(&decoded);
                (decoded, lookup)
            }
            Err(e) => (raw.to_string(), Err(e)),
        };

        let found = lookup.and_then(|path| self.fs.stat(&path).map(|_| path));
        match found {
            Ok(path) => self.server.serve(&self.fs, &path, req),
            Err(e) => {
                self.logger.log(&LogRecord::new(
                    e.to_string(),
                    req.method().as_str(),
                    StatusCode::NOT_FOUND.as_u16(),
                    logged,
                ));
                http::build_404_response()
            }
        }
    }

    /// Filesystem path for a decoded URL path
    fn fs_path(&self, decoded: &str) -> io::Result<String> {
        let path = match self.prefix.as_deref() {
            None => decoded,
            Some(prefix) => decoded
                .strip_prefix(prefix)
                .filter(|rest| rest.is_empty() || rest.starts_with('/'))
                .ok_or_else(|| fs::not_found(decoded))?,
        };
        fs::check_path(path)?;
        Ok(if path.is_empty() { "/".to_string() } else { path.to_string() })
    }
}

fn decode_path(raw: &str) -> io::Result<String> {
    percent_decode_str(raw)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("open {raw}: {e}")))
}
