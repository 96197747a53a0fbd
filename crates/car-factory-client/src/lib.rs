#![doc = include_str!("../README.md")]

pub mod client;
pub mod config;
pub mod telemetry;

pub use client::request_car_build;
