mod server;

use web_helpers::config::Config;
use web_helpers::logger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;
    logger::init(&cfg.logging)?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
        tracing::info!(workers, "using configured worker threads");
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(server::run(cfg))
}
