#![doc = include_str!("../README.md")]

mod common;
pub use common::*;
// Public re-export so downstream crates can decode identifiers via
// `car_factory_core::ferroid`
pub use ferroid;
