pub mod api;
pub mod cli;
pub mod clients;
pub mod config;
pub mod constants;
pub mod db;
pub mod domain;
pub mod entities;
pub mod relay;
pub mod services;
pub mod state;

use std::sync::Arc;
use tokio::signal;

use anyhow::Context;
use clap::Parser;
pub use config::Config;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    config.validate()?;

    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let fmt_layer = tracing_subscriber::fmt::layer();

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer);

    if config.observability.loki_enabled {
        let url = url::Url::parse(&config.observability.loki_url).context("Invalid Loki URL")?;

        let mut builder = tracing_loki::builder();
        for (key, value) in &config.observability.loki_labels {
            builder = builder.label(key, value)?;
        }

        let (layer, task) = builder
            .extra_field("env", config.relay.environment.as_str())?
            .build_url(url)?;

        tokio::spawn(task);

        registry.with(layer).init();
        info!(
            "Loki logging initialized at {}",
            config.observability.loki_url
        );
    } else {
        registry.init();
    }

    let prometheus_handle = if config.observability.metrics_enabled {
        use metrics_exporter_prometheus::PrometheusBuilder;
        let builder = PrometheusBuilder::new();
        let handle = builder
            .install_recorder()
            .context("Failed to install Prometheus recorder")?;
        info!("Prometheus metrics recorder initialized");
        Some(handle)
    } else {
        None
    };

    let cli = cli::Cli::parse();

    let Some(command) = cli.command else {
        print_help();
        return Ok(());
    };

    match command {
        cli::Commands::Serve => run_server(config, prometheus_handle).await,

        cli::Commands::Relay => run_relay(config).await,

        cli::Commands::Generate { prompt } => {
            let prompt = prompt.join(" ");
            cli::cmd_generate(&config, &prompt).await
        }

        cli::Commands::List => cli::cmd_list(&config).await,

        cli::Commands::Show { id } => cli::cmd_show(&config, &id).await,

        cli::Commands::Remove { id } => cli::cmd_remove(&config, &id).await,

        cli::Commands::Health => cli::cmd_health(&config).await,

        cli::Commands::Init => {
            Config::create_default_if_missing()?;
            println!("✓ Config file created. Edit config.toml and run again.");
            Ok(())
        }
    }
}

fn print_help() {
    println!("Sitedraft - Website Section Generator");
    println!("Turns a one-line business description into a starter site outline");
    println!();
    println!("USAGE:");
    println!("  sitedraft <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("  serve             Run the generation backend server");
    println!("  relay             Run the public-facing relay server");
    println!("  generate <text>   Generate sections for a prompt and store the result");
    println!("  list, ls          List recent generation records");
    println!("  show <id>         Show a stored record with its sections");
    println!("  remove, rm <id>   Delete a stored record");
    println!("  health            Check backend health over HTTP");
    println!("  init              Create default config file");
    println!("  help              Show this help message");
    println!();
    println!("EXAMPLES:");
    println!("  sitedraft generate \"a cozy bakery in Cairo\"   # Classify and store");
    println!("  sitedraft list                                # Show recent records");
    println!("  sitedraft show 4f7b…                          # Inspect one record");
    println!("  sitedraft serve                               # Start the backend API");
    println!("  sitedraft relay                               # Start the relay front");
    println!();
    println!("CONFIG:");
    println!("  Edit config.toml to configure ports, backend URL, environment, etc.");
}

async fn run_server(
    config: Config,
    prometheus_handle: Option<metrics_exporter_prometheus::PrometheusHandle>,
) -> anyhow::Result<()> {
    info!(
        "Sitedraft v{} starting in server mode...",
        env!("CARGO_PKG_VERSION")
    );

    let port = config.server.port;
    let state = api::create_app_state_from_config(config, prometheus_handle).await?;

    let app = api::router(state);
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    let server_handle = tokio::spawn(async move {
        info!("🌐 Generation API running at http://0.0.0.0:{port}");
        if let Err(e) = axum::serve(listener, app).await {
            error!("Server error: {}", e);
        }
    });

    info!("Server running. Press Ctrl+C to stop.");

    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Shutdown signal received");
        }
        Err(e) => {
            error!("Error listening for shutdown: {}", e);
        }
    }

    server_handle.abort();
    info!("Server stopped");

    Ok(())
}

async fn run_relay(config: Config) -> anyhow::Result<()> {
    info!(
        "Sitedraft v{} starting in relay mode...",
        env!("CARGO_PKG_VERSION")
    );

    let port = config.relay.port;
    let environment = config.relay.environment;
    let state = Arc::new(relay::RelayState::from_config(&config)?);

    let app = relay::router(state);
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    let server_handle = tokio::spawn(async move {
        info!("🌐 Relay ({environment}) running at http://0.0.0.0:{port}");
        if let Err(e) = axum::serve(listener, app).await {
            error!("Relay error: {}", e);
        }
    });

    info!("Relay running. Press Ctrl+C to stop.");

    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Shutdown signal received");
        }
        Err(e) => {
            error!("Error listening for shutdown: {}", e);
        }
    }

    server_handle.abort();
    info!("Relay stopped");

    Ok(())
}
