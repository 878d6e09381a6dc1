use serde::{Deserialize, Deserializer, Serialize};

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Parse a coordinate pair from the string fields used by the event and
    /// night-spot datasets. Missing or non-numeric fields yield `None`.
    pub fn from_strings(lat: Option<&str>, lng: Option<&str>) -> Option<GeoPoint> {
        let lat = lat?.trim().parse::<f64>().ok()?;
        let lng = lng?.trim().parse::<f64>().ok()?;
        if lat.is_nan() || lng.is_nan() {
            return None;
        }
        Some(GeoPoint { lat, lng })
    }

    /// Coordinate pair for cultural spaces. Upstream sends the field named
    /// `X_COORD` carrying the latitude-like value and `Y_COORD` the
    /// longitude-like value; the transposition must be kept as-is.
    /// `(0, 0)` is the upstream sentinel for "unknown location".
    pub fn from_transposed(x_coord: Option<f64>, y_coord: Option<f64>) -> Option<GeoPoint> {
        let lat = x_coord?;
        let lng = y_coord?;
        if lat.is_nan() || lng.is_nan() || (lat == 0.0 && lng == 0.0) {
            return None;
        }
        Some(GeoPoint { lat, lng })
    }
}

/// Upstream serializes coordinates inconsistently as either numbers or
/// numeric strings; accept both, mapping anything else to `None`.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
        Other(serde_json::Value),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Num(n)) => Some(n),
        Some(Raw::Text(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_string_pair() {
        let point = GeoPoint::from_strings(Some("37.57"), Some("126.98")).unwrap();
        assert_eq!(point, GeoPoint::new(37.57, 126.98));
    }

    #[test]
    fn rejects_missing_or_garbage_strings() {
        assert!(GeoPoint::from_strings(None, Some("126.98")).is_none());
        assert!(GeoPoint::from_strings(Some("37.57"), None).is_none());
        assert!(GeoPoint::from_strings(Some("abc"), Some("126.98")).is_none());
        assert!(GeoPoint::from_strings(Some(""), Some("")).is_none());
    }

    #[test]
    fn transposed_pair_keeps_upstream_field_meaning() {
        let point = GeoPoint::from_transposed(Some(37.55), Some(127.0)).unwrap();
        assert_eq!(point.lat, 37.55);
        assert_eq!(point.lng, 127.0);
    }

    #[test]
    fn zero_zero_is_the_unknown_location_sentinel() {
        assert!(GeoPoint::from_transposed(Some(0.0), Some(0.0)).is_none());
        // a single zero axis is still a real coordinate
        assert!(GeoPoint::from_transposed(Some(0.0), Some(127.0)).is_some());
    }

    #[test]
    fn lenient_f64_accepts_numbers_and_strings() {
        #[derive(Deserialize)]
        struct Probe {
            #[serde(default, deserialize_with = "lenient_f64")]
            value: Option<f64>,
        }

        let n: Probe = serde_json::from_str(r#"{"value": 37.5}"#).unwrap();
        assert_eq!(n.value, Some(37.5));
        let s: Probe = serde_json::from_str(r#"{"value": "37.5"}"#).unwrap();
        assert_eq!(s.value, Some(37.5));
        let junk: Probe = serde_json::from_str(r#"{"value": "n/a"}"#).unwrap();
        assert_eq!(junk.value, None);
        let null: Probe = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(null.value, None);
    }
}
