use async_trait::async_trait;
use thiserror::Error;

use crate::catalog::{CulturalEvent, CulturalSpace, NightViewSpot};

/// Why a dataset fetch failed. Cloneable so a cached failure can be handed to
/// every later caller of the same session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogFetchError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("upstream returned status {0}")]
    Status(u16),

    /// The upstream API sometimes answers XML instead of JSON on error,
    /// detected by the body starting with `<`.
    #[error("upstream returned XML instead of JSON")]
    UpstreamXml,

    #[error("unexpected payload shape: {0}")]
    UnexpectedShape(String),
}

/// Read access to the three upstream datasets.
///
/// A fetch either yields the full row list or a typed failure; there is no
/// partial data and implementations must not retry.
#[async_trait]
pub trait CatalogSourcePort: Send + Sync {
    async fn fetch_events(&self) -> Result<Vec<CulturalEvent>, CatalogFetchError>;

    async fn fetch_spaces(&self) -> Result<Vec<CulturalSpace>, CatalogFetchError>;

    async fn fetch_spots(&self) -> Result<Vec<NightViewSpot>, CatalogFetchError>;
}
