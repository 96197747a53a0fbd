//! # Shared constants and fixed payloads
//!
//! Client and server agree on the listening port, the default deadline and
//! the hardcoded records through the values defined here.
//!
//! ## Constants
//!
//! - [`DEFAULT_PORT`] - TCP port the factory listens on
//! - [`DEFAULT_SERVER_ADDR`] - listen address of the server binary
//! - [`DEFAULT_SERVER_URL`] - endpoint dialed by the client binary
//! - [`DEFAULT_TIMEOUT`] - deadline applied to a single client call
//! - [`SHOWROOM`] - names returned by `List`, in order

use crate::proto::{CreateCarRequest, create_car_request::Color};
use core::time::Duration;

/// TCP port the factory listens on.
pub const DEFAULT_PORT: u16 = 51001;

/// Address the server binds to when none is configured.
pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:51001";

/// Endpoint the client dials when none is configured.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:51001";

/// Deadline bound to a single `Build` call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Names of the cars returned by `List`, in response order.
pub const SHOWROOM: [&str; 2] = ["Batmobile", "K2000"];

/// The payload the client sends on every `Build` call.
pub fn audi_a3_request() -> CreateCarRequest {
    CreateCarRequest {
        name: "Audi A3".to_string(),
        color: Color::Black as i32,
        cooler: true,
    }
}
