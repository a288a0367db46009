//! Application struct that encapsulates server assembly and serving logic.

use crate::cli::RunArgs;
use anyhow::Context;
use hostpulse_core::config::{Config, parse_port_spec};
use hostpulse_core::lifecycle::signal::SignalHandler;
use hostpulse_core::lifecycle::{self, Lifecycle};

pub struct Application {
    config: Config,
    app_router: axum::Router,
    lifecycle: Box<dyn Lifecycle>,
}

impl Application {
    /// Build the application from CLI args: load config, apply overrides,
    /// build the metrics provider and router.
    pub fn build(args: &RunArgs) -> anyhow::Result<Self> {
        let loaded = Config::load(&args.config).unwrap_or_else(|e| {
            tracing::warn!(
                "Failed to load config from '{}': {e}, using defaults",
                args.config
            );
            Config::default()
        });
        let config = apply_overrides(loaded, args)?;

        tracing::info!(
            listen = %config.listen_addr(),
            disk_path = %config.disk_path.display(),
            "Configuration loaded"
        );

        let provider = hostpulse_provider::build_provider();
        let state = hostpulse_server::AppState::new(provider, config.disk_path.clone());
        let app_router = hostpulse_server::build_router(state);

        Ok(Self {
            config,
            app_router,
            lifecycle: lifecycle::detect_lifecycle(),
        })
    }

    /// Bind, serve until SIGINT/SIGTERM, and drain in-flight requests.
    pub async fn serve(self) -> anyhow::Result<()> {
        let Self {
            config,
            app_router,
            lifecycle,
        } = self;

        let (signal_handler, mut shutdown_rx) = SignalHandler::new();
        tokio::spawn(signal_handler.run());

        let addr = config.listen_addr();
        tracing::info!("Starting server on {addr}");
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("could not start server on {addr}"))?;
        lifecycle.on_ready(listener.local_addr()?);

        let shutdown = async move {
            let _ = shutdown_rx.wait_for(|v| *v).await;
        };

        axum::serve(listener, app_router)
            .with_graceful_shutdown(shutdown)
            .await?;

        lifecycle.on_stopping();
        tracing::info!("Server shut down.");
        Ok(())
    }
}

/// CLI / environment values win over the config file.
fn apply_overrides(mut config: Config, args: &RunArgs) -> anyhow::Result<Config> {
    if let Some(ref host) = args.host {
        config.host = host.clone();
    }
    if let Some(ref spec) = args.port {
        config.port = parse_port_spec(spec)?;
    }
    config.validate()?;
    Ok(config)
}
