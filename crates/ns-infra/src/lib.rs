//! Infrastructure adapters for NolSeoul: the Seoul OpenAPI client, file-backed
//! stores, the system clock, and configuration loading.

pub mod api;
pub mod config;
pub mod storage;
pub mod time;

pub use api::SeoulOpenApi;
pub use storage::{FavoriteFileStore, RecentSearchFileStore};
pub use time::SystemClock;
