use serde::{Deserialize, Serialize};

use super::coords::{lenient_f64, GeoPoint};

/// One row of the `culturalSpaceInfo` dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CulturalSpace {
    #[serde(rename = "FAC_NAME", default)]
    pub name: String,
    #[serde(rename = "ADDR", default)]
    pub address: String,
    #[serde(rename = "PHNE", default)]
    pub phone: String,
    #[serde(rename = "FAX", default)]
    pub fax: Option<String>,
    #[serde(rename = "HOMEPAGE", default)]
    pub homepage: Option<String>,
    // Upstream sends X_COORD carrying the latitude-like value and Y_COORD the
    // longitude-like value for this dataset. Keep the transposition; the map
    // depends on it being applied.
    #[serde(rename = "X_COORD", default, deserialize_with = "lenient_f64")]
    pub x_coord: Option<f64>,
    #[serde(rename = "Y_COORD", default, deserialize_with = "lenient_f64")]
    pub y_coord: Option<f64>,
    #[serde(rename = "DTLCONT", default)]
    pub detail_html: String,
    #[serde(rename = "MAIN_IMG", default)]
    pub main_image: Option<String>,
    #[serde(rename = "IMG_URL", default)]
    pub image_url: Option<String>,
    #[serde(rename = "TICKET_YN", default)]
    pub ticket_flag: Option<String>,
    #[serde(rename = "CLOSEDAY", default)]
    pub closed_day: Option<String>,
    #[serde(rename = "SUBJCODE", default)]
    pub subject_code: Option<String>,
}

impl CulturalSpace {
    /// `(0, 0)` is the upstream sentinel for "unknown location" and yields `None`.
    pub fn coordinate(&self) -> Option<GeoPoint> {
        GeoPoint::from_transposed(self.x_coord, self.y_coord)
    }

    pub fn sells_tickets(&self) -> bool {
        matches!(self.ticket_flag.as_deref(), Some("Y") | Some("y"))
    }

    /// Preferred image, `MAIN_IMG` first then `IMG_URL`.
    pub fn image(&self) -> Option<&str> {
        self.main_image
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.image_url.as_deref().filter(|s| !s.is_empty()))
    }
}
