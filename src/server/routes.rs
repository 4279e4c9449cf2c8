// Request routing module
// Dispatches asset paths to the static handler and "/" to the composed index page

use super::AppState;
use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::{Method, Request, Response, StatusCode};
use std::convert::Infallible;
use std::path::Path;
use std::sync::Arc;
use web_helpers::{http, Context};

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let (parts, _body) = req.into_parts();
    let req = Request::from_parts(parts, ());
    let path = req.uri().path().to_string();
    let readable = matches!(*req.method(), Method::GET | Method::HEAD);

    let response = if path.starts_with(&state.config.assets.prefix) {
        blocking(move || state.assets.handle(&req)).await
    } else if path == "/" && readable {
        blocking(move || render_index(&state, &req)).await
    } else if path == "/" {
        http::build_405_response()
    } else {
        http::build_404_response()
    };
    Ok(response)
}

/// Filesystem work runs on the blocking pool
async fn blocking<F>(f: F) -> Response<Full<Bytes>>
where
    F: FnOnce() -> Response<Full<Bytes>> + Send + 'static,
{
    tokio::task::spawn_blocking(f).await.unwrap_or_else(|e| {
        web_helpers::logger::log_error(&format!("Request task failed: {e}"));
        http::build_text_response(StatusCode::INTERNAL_SERVER_ERROR, "500 Internal Server Error\n")
    })
}

fn render_index(state: &AppState, req: &Request<()>) -> Response<Full<Bytes>> {
    let base = Path::new(&state.config.templates.layout)
        .parent()
        .unwrap_or_else(|| Path::new("."));
    let pages = [
        base.join("pages").join("index.html"),
        base.join("components").join("login-form.html"),
    ];

    let tmpl = match state.templates.compose(&pages) {
        Ok(t) => t,
        Err(e) => {
            log_failure(&e, req, StatusCode::BAD_REQUEST);
            return http::build_text_response(StatusCode::BAD_REQUEST, "400 Bad Request\n");
        }
    };

    let mut ctx = Context::new();
    ctx.insert("greeting", "Hello from web_helpers");
    match tmpl.render("index.html", &ctx) {
        Ok(html) => http::build_html_response(html, *req.method() == Method::HEAD),
        Err(e) => {
            log_failure(&e, req, StatusCode::INTERNAL_SERVER_ERROR);
            http::build_text_response(StatusCode::INTERNAL_SERVER_ERROR, "500 Internal Server Error\n")
        }
    }
}

fn log_failure(err: &web_helpers::Error, req: &Request<()>, status: StatusCode) {
    tracing::error!(
        method = %req.method(),
        status = status.as_u16(),
        path = %req.uri().path(),
        kind = ?err.kind(),
        "{err}"
    );
}
