//! HTTP surface: analysis endpoints, health probes and the OpenAPI spec

pub mod analyze;
pub mod error;
pub mod health;
pub mod openapi;

pub use error::ApiError;
