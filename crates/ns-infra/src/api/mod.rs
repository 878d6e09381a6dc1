//! Upstream HTTP access.
mod seoul_open_api;

pub use seoul_open_api::SeoulOpenApi;
