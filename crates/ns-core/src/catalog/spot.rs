use serde::{Deserialize, Serialize};

use super::GeoPoint;

/// One row of the `viewNightSpot` dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NightViewSpot {
    #[serde(rename = "TITLE", default)]
    pub title: String,
    #[serde(rename = "ADDR", default)]
    pub address: String,
    #[serde(rename = "LA", default)]
    pub lat: Option<String>,
    #[serde(rename = "LO", default)]
    pub lng: Option<String>,
    #[serde(rename = "TEL_NO", default)]
    pub phone: String,
    #[serde(rename = "URL", default)]
    pub url: String,
    #[serde(rename = "OPERATING_TIME", default)]
    pub operating_time: String,
    #[serde(rename = "ENTR_FEE", default)]
    pub entry_fee: String,
    #[serde(rename = "SUBWAY", default)]
    pub subway: String,
    #[serde(rename = "BUS", default)]
    pub bus: String,
    #[serde(rename = "CONTENT", default)]
    pub content: String,
    #[serde(rename = "SUBJECT_CD", default)]
    pub subject_code: String,
    #[serde(rename = "MAIN_IMG", default)]
    pub image: Option<String>,
    #[serde(rename = "PARKING_INFO", default)]
    pub parking_info: Option<String>,
}

impl NightViewSpot {
    pub fn coordinate(&self) -> Option<GeoPoint> {
        GeoPoint::from_strings(self.lat.as_deref(), self.lng.as_deref())
    }
}
