pub mod error;
pub mod identifier;
pub mod types;

pub use error::*;

/// gRPC service and message definitions generated from `proto/car.proto`.
///
/// ## Service
///
/// - `car.Factory/Build` - builds a car and returns a fresh identifier.
/// - `car.Factory/List` - lists the showroom cars.
///
/// Server and client stubs live in [`proto::factory_server`] and
/// [`proto::factory_client`].
pub mod proto {
    tonic::include_proto!("car");

    /// Encoded file descriptor set for the `car` package, served through
    /// gRPC reflection.
    pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("car_descriptor");
}
