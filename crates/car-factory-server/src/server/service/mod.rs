//! gRPC service implementation.
//!
//! This module contains the handlers for client-facing gRPC requests. Both
//! calls are stateless and never fail.
//!
//! ## Structure
//!
//! - [`handler`] - gRPC service entry point (`CarService`).

pub mod handler;
