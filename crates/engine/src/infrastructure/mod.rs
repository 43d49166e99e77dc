//! Infrastructure implementations.
//!
//! Contains configuration and the port implementation for the data directory.

pub mod config;
pub mod json_store;
pub mod ports;
