//! Deadline-bound invocation of `car.Factory/Build`.
//!
//! [`request_car_build`] dials the configured endpoint and sends the fixed
//! `Audi A3` request. Dialing and the call share a single deadline: if it
//! expires first the in-flight work is dropped (which cancels the call) and
//! [`Error::DeadlineExceeded`] is returned. The deadline is also sent to the
//! server as `grpc-timeout`, so the server may give up first; a status that
//! arrives after the deadline is reported as [`Error::DeadlineExceeded`] too.

use crate::config::ClientConfig;
use car_factory_core::{
    Error, Result,
    proto::{CreateCarResponse, factory_client::FactoryClient},
    types::audi_a3_request,
};
use tokio::time::Instant;
use tonic::Request;

/// Asks the factory to build one `Audi A3`.
///
/// # Errors
///
/// - [`Error::DeadlineExceeded`] if the deadline is zero or elapses before a
///   response arrives.
/// - [`Error::Transport`] if the connection cannot be established.
/// - [`Error::Status`] if the server answers with an error status.
#[tracing::instrument(skip_all, fields(endpoint = %config.endpoint.uri()))]
pub async fn request_car_build(config: &ClientConfig) -> Result<CreateCarResponse> {
    let timeout = config.timeout;
    if timeout.is_zero() {
        return Err(Error::DeadlineExceeded { timeout });
    }

    let started = Instant::now();
    match tokio::time::timeout(timeout, build(config, started)).await {
        Ok(res) => res,
        Err(_elapsed) => Err(Error::DeadlineExceeded { timeout }),
    }
}

async fn build(config: &ClientConfig, started: Instant) -> Result<CreateCarResponse> {
    let channel = config.endpoint.connect().await?;
    tracing::debug!("connected");

    let mut client = FactoryClient::new(channel);
    let mut request = Request::new(audi_a3_request());
    request.set_timeout(config.timeout);

    client
        .build(request)
        .await
        .map(tonic::Response::into_inner)
        .map_err(|status| Error::from_status(status, config.timeout, started.elapsed()))
}
