use anyhow::Context;
use car_factory_core::types::DEFAULT_SERVER_ADDR;
use clap::Parser;
use std::net::SocketAddr;

/// Runtime configuration for the `car-factory-server` binary.
///
/// All values are parsed from CLI arguments or environment variables. The
/// defaults reproduce the fixed listening address clients expect.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "car-factory-server",
    version,
    about = "A gRPC service that builds and lists cars"
)]
pub struct CliArgs {
    /// TCP address to listen on.
    ///
    /// Example: "0.0.0.0:51001" or "127.0.0.1:0"
    ///
    /// Environment variable: `SERVER_ADDR`
    #[arg(long, env = "SERVER_ADDR", default_value_t = String::from(DEFAULT_SERVER_ADDR))]
    pub server_addr: String,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub server_addr: SocketAddr,
}

impl TryFrom<CliArgs> for ServerConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let server_addr = args
            .server_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("SERVER_ADDR ({}) is not a socket address", args.server_addr))?;

        Ok(Self { server_addr })
    }
}
