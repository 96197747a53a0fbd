use car_factory_core::{Error, types::DEFAULT_SERVER_URL};
use clap::Parser;
use core::time::Duration;
use tonic::transport::Endpoint;

/// Runtime configuration for the `car-factory-client` binary.
///
/// The defaults reproduce the fixed endpoint and one second deadline of the
/// factory demo; override them with flags or environment variables.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "car-factory-client",
    version,
    about = "Asks the car factory to build one car"
)]
pub struct CliArgs {
    /// URL of the factory server. Plaintext HTTP/2 only.
    ///
    /// Environment variable: `SERVER_URL`
    #[arg(long, env = "SERVER_URL", default_value_t = String::from(DEFAULT_SERVER_URL))]
    pub server_url: String,

    /// Deadline for connecting and calling, in milliseconds.
    ///
    /// A value of 0 is an already expired deadline: the call fails without
    /// dialing.
    ///
    /// Environment variable: `TIMEOUT_MS`
    #[arg(long, env = "TIMEOUT_MS", default_value_t = 1000)]
    pub timeout_ms: u64,
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: Endpoint,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Builds a config for `url` with the given deadline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEndpoint`] if `url` is not a valid URI.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, Error> {
        let url = url.into();
        let endpoint = Endpoint::from_shared(url.clone())
            .map_err(|source| Error::InvalidEndpoint { url, source })?;

        Ok(Self { endpoint, timeout })
    }
}

impl TryFrom<CliArgs> for ClientConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        Ok(Self::new(
            args.server_url,
            Duration::from_millis(args.timeout_ms),
        )?)
    }
}
