use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;

use ns_core::catalog::{CulturalEvent, CulturalSpace, Dataset, NightViewSpot};
use ns_core::config::ApiConfig;
use ns_core::ports::{CatalogFetchError, CatalogSourcePort};

/// Rows are requested as one page covering the whole dataset.
const PAGE_START: u32 = 1;
const PAGE_END: u32 = 1000;

/// Seoul OpenAPI client.
///
/// One GET per dataset; the response is a JSON envelope keyed by the service
/// name wrapping a `row` array. Anything else — a non-2xx status, an XML body
/// (the upstream answers XML on some errors), or a missing `row` field — is a
/// typed fetch failure with no partial data. No retries.
pub struct SeoulOpenApi {
    http: reqwest::Client,
    base_url: String,
    key: String,
}

impl SeoulOpenApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(http: reqwest::Client, config: &ApiConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            key: config.key.clone(),
        }
    }

    fn endpoint_url(&self, dataset: Dataset) -> String {
        format!(
            "{}/{}/json/{}/{}/{}/",
            self.base_url,
            self.key,
            dataset.envelope_key(),
            PAGE_START,
            PAGE_END,
        )
    }

    async fn fetch_rows<T: DeserializeOwned>(
        &self,
        dataset: Dataset,
    ) -> Result<Vec<T>, CatalogFetchError> {
        let url = self.endpoint_url(dataset);
        debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|error| CatalogFetchError::Transport(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogFetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|error| CatalogFetchError::Transport(error.to_string()))?;
        if body.trim_start().starts_with('<') {
            return Err(CatalogFetchError::UpstreamXml);
        }

        let envelope: serde_json::Value = serde_json::from_str(&body)
            .map_err(|error| CatalogFetchError::UnexpectedShape(error.to_string()))?;
        let rows = envelope
            .get(dataset.envelope_key())
            .and_then(|service| service.get("row"))
            .and_then(|rows| rows.as_array())
            .cloned()
            .ok_or_else(|| {
                CatalogFetchError::UnexpectedShape(format!(
                    "missing {}.row array",
                    dataset.envelope_key()
                ))
            })?;

        serde_json::from_value(serde_json::Value::Array(rows))
            .map_err(|error| CatalogFetchError::UnexpectedShape(error.to_string()))
    }
}

#[async_trait]
impl CatalogSourcePort for SeoulOpenApi {
    async fn fetch_events(&self) -> Result<Vec<CulturalEvent>, CatalogFetchError> {
        self.fetch_rows(Dataset::Events).await
    }

    async fn fetch_spaces(&self) -> Result<Vec<CulturalSpace>, CatalogFetchError> {
        self.fetch_rows(Dataset::Spaces).await
    }

    async fn fetch_spots(&self) -> Result<Vec<NightViewSpot>, CatalogFetchError> {
        self.fetch_rows(Dataset::Spots).await
    }
}
