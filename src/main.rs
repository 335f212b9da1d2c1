use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use compensation_engine::api::{AppState, create_router};
use compensation_engine::config::ConfigLoader;
use compensation_engine::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "compensation-engine",
    about = "Serve role-based pay calculation and hour reporting over HTTP",
    version
)]
struct Cli {
    /// Directory containing engine.yaml and roles.yaml
    #[arg(long, default_value = "./config/compensation")]
    config: PathBuf,
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:3000")]
    listen: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();

    let config = ConfigLoader::load(&cli.config)?;
    telemetry::init(&config.settings().log_level)?;

    info!(
        config = %cli.config.display(),
        roles = config.registry().len(),
        base_pay = %config.settings().base_pay,
        "Configuration loaded"
    );

    let app = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(cli.listen).await?;
    info!("listening on http://{}", cli.listen);

    axum::serve(listener, app).await?;
    Ok(())
}
