use serde::{Deserialize, Serialize};

/// One of the three upstream Seoul OpenAPI collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dataset {
    Events,
    Spaces,
    Spots,
}

impl Dataset {
    pub const ALL: [Dataset; 3] = [Dataset::Events, Dataset::Spaces, Dataset::Spots];

    /// Value of the `type` query parameter understood by the proxy.
    pub fn query_value(self) -> &'static str {
        match self {
            Dataset::Events => "event",
            Dataset::Spaces => "space",
            Dataset::Spots => "night",
        }
    }

    /// Top-level key wrapping the `{ row: [...] }` envelope in upstream responses.
    pub fn envelope_key(self) -> &'static str {
        match self {
            Dataset::Events => "culturalEventInfo",
            Dataset::Spaces => "culturalSpaceInfo",
            Dataset::Spots => "viewNightSpot",
        }
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.query_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_values_match_proxy_contract() {
        assert_eq!(Dataset::Events.query_value(), "event");
        assert_eq!(Dataset::Spaces.query_value(), "space");
        assert_eq!(Dataset::Spots.query_value(), "night");
    }

    #[test]
    fn envelope_keys_match_upstream_services() {
        assert_eq!(Dataset::Events.envelope_key(), "culturalEventInfo");
        assert_eq!(Dataset::Spaces.envelope_key(), "culturalSpaceInfo");
        assert_eq!(Dataset::Spots.envelope_key(), "viewNightSpot");
    }
}
