mod app_state;
mod cli;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Load config (before the subscriber so its logging directive can apply;
    // the loader's own log lines are dropped, which is fine)
    let config = match args.config.as_deref() {
        Some(path) => lingo_config::load_config_from(std::path::Path::new(path)),
        None => lingo_config::load_config(),
    }
    .unwrap_or_else(|e| {
        eprintln!("config load failed, using defaults: {e}");
        lingo_config::LingoConfig::default()
    });

    // Initialize logging: CLI directive wins over the config one
    let log_directive = args
        .log_level
        .as_deref()
        .unwrap_or(&config.logging.directive);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "lingo=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Lingo v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref endpoint) = args.endpoint {
        tracing::info!("Using endpoint override: {endpoint}");
    }

    // Create event loop and run
    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = app_state::LingoApp::new(config, args.endpoint);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
