//! MCEngine CLI - Main entry point

mod console;

use clap::Parser;
use mcengine_agent_example::{ExampleAiAgent, EXTENSION_ID};
use mcengine_core::{CommandRegistry, ExtensionManager};
use mcengine_foundation::HostConfig;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// MCEngine - console host for Artificial Intelligence extensions
#[derive(Parser, Debug)]
#[command(name = "mcengine")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Host config file (default: ~/.mcengine/host.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Plugin name used as the command namespace (overrides config)
    #[arg(long)]
    plugin_name: Option<String>,

    /// Execute a command line and exit (repeatable)
    #[arg(short, long = "exec")]
    exec: Vec<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Do not expose the command registry to extensions
    #[arg(long)]
    deny_registry: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let mut config = match &args.config {
        Some(path) => HostConfig::load(path)?,
        None => HostConfig::load_or_default(&HostConfig::default_path())?,
    };
    if let Some(name) = &args.plugin_name {
        config.plugin_name = name.clone();
    }
    config.validate()?;

    // Initialize logging
    let log_level = if args.debug {
        "debug".to_string()
    } else {
        config.log_level.clone()
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let mut manager = build_manager(&config, args.deny_registry);
    let echo = console::spawn_event_echo(manager.event_bus());

    let outcome = manager
        .load(EXTENSION_ID, Box::new(ExampleAiAgent::new()))
        .await?;
    println!("Extension {}: {}", EXTENSION_ID, outcome);

    let result = if args.exec.is_empty() {
        console::run_interactive(&manager).await
    } else {
        for line in &args.exec {
            console::handle_line(&manager, line).await;
        }
        Ok(())
    };

    manager.shutdown().await;
    echo.abort();
    result
}

/// 설정으로 확장 매니저 구성
///
/// `deny_registry`면 확장 모듈에 커맨드 등록 기능을 공개하지 않습니다.
fn build_manager(config: &HostConfig, deny_registry: bool) -> ExtensionManager {
    if !deny_registry {
        return ExtensionManager::new(config);
    }

    tracing::warn!("Command registry is not exposed to extensions");
    let handle = ExtensionManager::new(config)
        .handle()
        .clone()
        .without_command_registrar();
    ExtensionManager::with_handle(Arc::new(CommandRegistry::new()), handle, config.continue_on_error)
}
