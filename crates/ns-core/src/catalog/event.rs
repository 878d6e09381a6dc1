use serde::{Deserialize, Serialize};

use super::GeoPoint;

/// One row of the `culturalEventInfo` dataset.
///
/// Field names mirror the upstream payload; rows have no stable id and are
/// identified by their position within the fetched dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CulturalEvent {
    #[serde(rename = "CODENAME", default)]
    pub category_code: String,
    #[serde(rename = "TITLE", default)]
    pub title: String,
    #[serde(rename = "DATE", default)]
    pub date: String,
    #[serde(rename = "GUNAME", default)]
    pub district: String,
    #[serde(rename = "PLACE", default)]
    pub venue: String,
    #[serde(rename = "ORG_NAME", default)]
    pub organizer: String,
    #[serde(rename = "MAIN_IMG", default)]
    pub image_url: String,
    #[serde(rename = "STRTDATE", default)]
    pub start_date: Option<String>,
    #[serde(rename = "END_DATE", default)]
    pub end_date: Option<String>,
    #[serde(rename = "USE_TRGT", default)]
    pub audience: Option<String>,
    #[serde(rename = "USE_FEE", default)]
    pub fee: Option<String>,
    #[serde(rename = "PLAYER", default)]
    pub player: Option<String>,
    #[serde(rename = "PROGRAM", default)]
    pub program: Option<String>,
    #[serde(rename = "ETC_DESC", default)]
    pub etc_desc: Option<String>,
    #[serde(rename = "ORG_LINK", default)]
    pub link: Option<String>,
    #[serde(rename = "HMPG_ADDR", default)]
    pub homepage: Option<String>,
    #[serde(rename = "LAT", default)]
    pub lat: Option<String>,
    #[serde(rename = "LOT", default)]
    pub lng: Option<String>,
    #[serde(rename = "IS_FREE", default)]
    pub free_flag: Option<String>,
}

impl CulturalEvent {
    pub fn coordinate(&self) -> Option<GeoPoint> {
        GeoPoint::from_strings(self.lat.as_deref(), self.lng.as_deref())
    }

    pub fn is_free(&self) -> bool {
        matches!(self.free_flag.as_deref(), Some("무료"))
    }

    /// Display label for the event period: `STRTDATE ~ END_DATE` trimmed to
    /// their date part, falling back to the free-form `DATE` field.
    pub fn date_label(&self) -> String {
        match (self.start_date.as_deref(), self.end_date.as_deref()) {
            (Some(start), Some(end)) if !start.is_empty() && !end.is_empty() => {
                format!("{} ~ {}", date_part(start), date_part(end))
            }
            _ => self.date.clone(),
        }
    }
}

fn date_part(value: &str) -> &str {
    // upstream timestamps look like "2026-05-01 00:00:00.0"
    value.get(..10).unwrap_or(value)
}
