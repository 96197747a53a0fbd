use car_factory_client::{
    config::{CliArgs, ClientConfig},
    request_car_build,
    telemetry::init_telemetry,
};
use clap::Parser;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = ClientConfig::try_from(args)?;

    init_telemetry()?;

    match request_car_build(&config).await {
        Ok(resp) => {
            tracing::info!("Car: {:?}", resp);
            Ok(())
        }
        Err(err) => {
            // Every failure is terminal.
            tracing::error!("Building car err: {}", err);
            std::process::exit(1);
        }
    }
}
