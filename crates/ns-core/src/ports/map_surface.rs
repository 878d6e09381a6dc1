use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::catalog::GeoPoint;
use crate::map::{MarkerId, MarkerStyle};

/// Why the map SDK could not be brought up. All variants are terminal: the
/// only recovery path is a full reload, never an automatic retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapSurfaceError {
    #[error("map SDK failed to load: {0}")]
    SdkLoad(String),

    #[error("map API key is missing or invalid")]
    InvalidKey,

    #[error("current origin is not allow-listed for the map API key")]
    OriginNotAllowed,
}

/// Marker operations on an initialized map surface.
///
/// Implementations own the marker lifecycle behind opaque [`MarkerId`]
/// handles; a removed id must never be reused for a still-visible marker.
/// Methods take `&self`: the surface is single-threaded UI state shared via
/// `Arc`, and implementations use interior mutability.
pub trait MapSurfacePort: Send + Sync {
    fn place_marker(&self, position: GeoPoint, style: MarkerStyle) -> MarkerId;

    fn remove_marker(&self, marker: MarkerId);

    fn restyle_marker(&self, marker: MarkerId, style: MarkerStyle);

    fn pan_to(&self, position: GeoPoint);
}

/// Brings up the map SDK (script injection, key validation) and hands out the
/// surface, or reports the terminal load failure.
#[async_trait]
pub trait MapSurfaceProviderPort: Send + Sync {
    async fn acquire(&self) -> Result<Arc<dyn MapSurfacePort>, MapSurfaceError>;
}
