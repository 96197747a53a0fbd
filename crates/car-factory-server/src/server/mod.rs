//! Server-side plumbing for the car factory.
//!
//! - [`config`] - CLI/environment configuration.
//! - [`service`] - the `Factory` gRPC handlers.
//! - [`telemetry`] - log subscriber setup.

pub mod config;
pub mod service;
pub mod telemetry;

#[cfg(test)]
mod tests;
