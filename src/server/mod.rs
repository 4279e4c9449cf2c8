// Demo server module
// Binds a listener and routes requests to the asset handler and templates

mod connection;
mod listener;
mod routes;

use std::sync::Arc;
use web_helpers::config::Config;
use web_helpers::fs::DiskFs;
use web_helpers::http::HttpFileServer;
use web_helpers::logger::{self, TracingSink};
use web_helpers::template::TemplateResolver;
use web_helpers::StaticAssetHandler;

/// Shared state handed to every connection
pub struct AppState {
    pub config: Config,
    pub assets: StaticAssetHandler<DiskFs, HttpFileServer, TracingSink>,
    pub templates: TemplateResolver,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let server = HttpFileServer::new().with_index_files(config.assets.index_files.clone());
        let assets = StaticAssetHandler::new(DiskFs::new(&config.assets.root))
            .with_prefix(&config.assets.prefix)
            .with_server(server);
        Self {
            assets,
            templates: TemplateResolver::from_config(&config.templates),
            config,
        }
    }
}

/// Accept connections until the process is stopped
pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.socket_addr()?;
    let listener = listener::create_reusable_listener(addr)?;
    logger::log_server_start(&addr, &config);

    let state = Arc::new(AppState::new(config));
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                tracing::debug!(peer = %peer_addr, "connection accepted");
                connection::handle_connection(stream, Arc::clone(&state));
            }
            Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
        }
    }
}
