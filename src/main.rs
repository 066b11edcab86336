use portfolio_server::config::{AppState, Config};
use portfolio_server::fixture::Fixture;
use portfolio_server::{logger, server};
use std::path::Path;
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use tokio::sync::Notify;

/// Config file stem used when no path is given on the command line
const DEFAULT_CONFIG: &str = "config";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    let cfg = Config::load_from(&config_path)?;
    logger::init(&cfg)?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let fixture = match cfg.content.fixture_path.as_deref() {
        Some(path) => Fixture::from_file(Path::new(path))?,
        None => Fixture::builtin()?,
    };

    let addr = cfg.get_socket_addr()?;
    let listener = server::create_listener(addr)?;

    let state = Arc::new(AppState::from_config(cfg, fixture));
    let build_dir = state
        .build
        .as_ref()
        .map(|b| b.root.path().display().to_string());
    logger::log_server_start(&addr, &state.config, build_dir.as_deref());
    if state.api_static.is_none() {
        logger::log_warning(&format!(
            "Asset directory '{}' not found, /api/static/ will answer 404",
            state.config.assets.static_dir
        ));
    }
    logger::log_info(&format!(
        "Loaded {} projects",
        state.fixture.projects().len()
    ));

    let shutdown = Arc::new(Notify::new());
    server::start_signal_handler(Arc::clone(&shutdown));

    server::start_server_loop(
        listener,
        state,
        Arc::new(AtomicUsize::new(0)),
        shutdown,
    )
    .await
}
