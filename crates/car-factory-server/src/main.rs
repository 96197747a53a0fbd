#![doc = include_str!("../README.md")]

mod server;

use car_factory_core::proto::{FILE_DESCRIPTOR_SET, factory_server::FactoryServer};
use clap::Parser;
use futures::Stream;
use server::config::{CliArgs, ServerConfig};
use server::service::handler::CarService;
use server::telemetry::init_telemetry;
use std::future::Future;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpListener;
use tokio::signal;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::server::Connected;
use tonic::{codec::CompressionEncoding, transport::Server};
use tonic_reflection::server::Builder;
use tonic_web::GrpcWebLayer;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

// Using mimalloc for better performance under contention, especially in musl
// environments.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = ServerConfig::try_from(args)?;

    init_telemetry()?;

    let tcp = match TcpListener::bind(config.server_addr).await {
        Ok(tcp) => tcp,
        Err(err) => {
            tracing::error!("failed to listen on {}: {}", config.server_addr, err);
            return Err(err.into());
        }
    };
    let incoming = TcpListenerStream::new(tcp);
    log_startup_info(&config);

    if let Err(err) = run_server_with_incoming(incoming, shutdown_signal()).await {
        tracing::error!("failed to serve: {:#}", err);
        return Err(err);
    }
    Ok(())
}

/// Serves the `Factory` service, health and reflection on `incoming` until
/// `signal` resolves, then drains in-flight calls.
pub(crate) async fn run_server_with_incoming<I, IO, IE, S>(
    incoming: I,
    signal: S,
) -> anyhow::Result<()>
where
    I: Stream<Item = Result<IO, IE>>,
    IO: AsyncRead + AsyncWrite + Connected + Unpin + Send + 'static,
    IE: Into<tower::BoxError>,
    S: Future<Output = ()>,
{
    let (health_reporter, health_service) = tonic_health::server::health_reporter();
    health_reporter
        .set_serving::<FactoryServer<CarService>>()
        .await;

    let reflection = Builder::configure()
        .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
        .build_v1()?;

    let shutdown = async move {
        signal.await;
        tracing::info!("Shutdown signal received, terminating gracefully...");
        health_reporter
            .set_not_serving::<FactoryServer<CarService>>()
            .await;
    };

    Server::builder()
        .accept_http1(true)
        .http2_adaptive_window(Some(true))
        .layer(
            ServiceBuilder::new()
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(GrpcWebLayer::new()),
        )
        .add_service(health_service)
        .add_service(reflection)
        .add_service(build_factory_service(CarService::new()))
        .serve_with_incoming_shutdown(incoming, shutdown)
        .await?;

    tracing::info!("Service shut down successfully");
    Ok(())
}

fn log_startup_info(config: &ServerConfig) {
    if cfg!(debug_assertions) {
        tracing::info!(
            "gRPC car factory server starting on {} with full config: {:#?}",
            config.server_addr,
            config
        );
    } else {
        tracing::info!(
            "gRPC car factory server starting on {}",
            config.server_addr
        );
    }
}

fn build_factory_service(service: CarService) -> FactoryServer<CarService> {
    FactoryServer::new(service)
        .send_compressed(CompressionEncoding::Zstd)
        .send_compressed(CompressionEncoding::Gzip)
        .send_compressed(CompressionEncoding::Deflate)
        .accept_compressed(CompressionEncoding::Zstd)
        .accept_compressed(CompressionEncoding::Gzip)
        .accept_compressed(CompressionEncoding::Deflate)
}

async fn shutdown_signal() {
    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::warn!("failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::warn!("failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        () = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }
}
