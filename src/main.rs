use std::path::PathBuf;

use clap::Parser;

use service_host::config::{HostConfig, load_config};
use service_host::http::{HttpServer, demo_router};
use service_host::lifecycle::LifecycleController;
use service_host::observability::init_logging;

#[derive(Parser)]
#[command(name = "service-host")]
#[command(about = "Runs the demo HTTP service under the lifecycle controller", long_about = None)]
struct Args {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Override the graceful-stop timeout in seconds.
    #[arg(long)]
    shutdown_timeout: Option<u64>,

    /// Suppress startup and shutdown status messages.
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging("service_host=debug,info");

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => HostConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }
    if let Some(secs) = args.shutdown_timeout {
        config.shutdown.timeout_secs = secs;
    }
    if args.quiet {
        config.suppress_status_messages = true;
    }

    tracing::info!(
        environment = %config.environment,
        bind_address = %config.listener.bind_address,
        shutdown_timeout_secs = config.shutdown.timeout_secs,
        "Configuration loaded"
    );

    let service = HttpServer::new(config.listener.bind_address.clone(), demo_router());
    LifecycleController::new(service, config).run().await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
