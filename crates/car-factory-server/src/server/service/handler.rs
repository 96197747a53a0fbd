//! gRPC service implementation for the car factory.
//!
//! This module defines [`CarService`], the concrete implementation of the
//! [`Factory`] gRPC service defined in the protobuf specification.
//!
//! ## Responsibilities
//!
//! - `Build`: log the request and hand back a freshly minted identifier.
//! - `List`: return the showroom cars, each with a fresh identifier.
//!
//! Nothing is stored between calls. Each call is served on its own Tokio task
//! by tonic, and since the service holds no state there is nothing to lock.

use car_factory_core::{
    identifier::next_identifier,
    proto::{
        Car, CreateCarRequest, CreateCarResponse, ListCarRequest, ListCarResponse,
        factory_server::Factory,
    },
    types::SHOWROOM,
};
use tonic::{Request, Response, Status};

/// Stateless implementation of the [`Factory`] service.
#[derive(Clone, Copy, Debug, Default)]
pub struct CarService;

impl CarService {
    pub const fn new() -> Self {
        Self
    }
}

#[tonic::async_trait]
impl Factory for CarService {
    /// Builds a car.
    ///
    /// The request is logged but otherwise ignored: name, color and cooler are
    /// neither validated nor stored. Always succeeds.
    #[tracing::instrument(skip_all, fields(name = %req.get_ref().name))]
    async fn build(
        &self,
        req: Request<CreateCarRequest>,
    ) -> Result<Response<CreateCarResponse>, Status> {
        tracing::info!("Building car... Request {:?}", req.get_ref());

        Ok(Response::new(CreateCarResponse {
            identifier: next_identifier(),
        }))
    }

    /// Lists the showroom. Identifiers are minted per call, so two listings
    /// never share them.
    #[tracing::instrument(skip_all)]
    async fn list(
        &self,
        _req: Request<ListCarRequest>,
    ) -> Result<Response<ListCarResponse>, Status> {
        let cars: Vec<Car> = SHOWROOM
            .iter()
            .map(|name| Car {
                identifier: next_identifier(),
                name: (*name).to_string(),
            })
            .collect();
        tracing::debug!("Listing {} cars", cars.len());

        Ok(Response::new(ListCarResponse { cars }))
    }
}
