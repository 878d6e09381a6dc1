//! File-backed stores: the durable-local-storage analog. Each store owns one
//! JSON record holding a whole list; every save replaces it atomically.

mod favorite_file_store;
mod json_record;
mod recent_file_store;

pub use favorite_file_store::FavoriteFileStore;
pub use recent_file_store::RecentSearchFileStore;

use std::path::{Path, PathBuf};

/// Directory for the persisted records: the configured one, else the
/// platform data directory.
pub fn resolve_data_dir(configured: Option<&Path>) -> Option<PathBuf> {
    configured
        .map(Path::to_path_buf)
        .or_else(|| dirs::data_dir().map(|dir| dir.join("nolseoul")))
}
