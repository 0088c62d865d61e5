use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrikeFund {
    pub name: String,
    pub url: String,
    #[serde(flatten)]
    pub placement: Placement,
}

/// Where a fund sits on the map. Serialized inline next to `name` and `url`,
/// either as `lat`/`lng` or as `"type": "thematic"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Placement {
    Located { lat: f64, lng: f64 },
    Thematic {
        #[serde(rename = "type")]
        kind: FundKind,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FundKind {
    Thematic,
}

impl StrikeFund {
    pub fn located(name: &str, url: &str, lat: f64, lng: f64) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            placement: Placement::Located { lat, lng },
        }
    }

    pub fn thematic(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            placement: Placement::Thematic {
                kind: FundKind::Thematic,
            },
        }
    }

    pub fn has_coordinates(&self) -> bool {
        matches!(self.placement, Placement::Located { .. })
    }

    pub fn is_thematic(&self) -> bool {
        matches!(
            self.placement,
            Placement::Thematic {
                kind: FundKind::Thematic
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn located_fund_serializes_lat_lng_inline() {
        let fund = StrikeFund::located("FSU Jura", "https://example.org/fsu-39", 46.7, 5.6);

        let value = serde_json::to_value(&fund).expect("fund should serialize");

        assert_eq!(
            value,
            json!({
                "name": "FSU Jura",
                "url": "https://example.org/fsu-39",
                "lat": 46.7,
                "lng": 5.6,
            })
        );
    }

    #[test]
    fn thematic_fund_serializes_type_marker() {
        let fund = StrikeFund::thematic("CGT", "https://example.org/cgt");

        let value = serde_json::to_value(&fund).expect("fund should serialize");

        assert_eq!(
            value,
            json!({
                "name": "CGT",
                "url": "https://example.org/cgt",
                "type": "thematic",
            })
        );
    }

    #[test]
    fn keys_keep_name_url_first() {
        let fund = StrikeFund::located("AED 44", "https://example.org/aed", 47.2, -1.6);

        let text = serde_json::to_string(&fund).expect("fund should serialize");

        assert_eq!(
            text,
            r#"{"name":"AED 44","url":"https://example.org/aed","lat":47.2,"lng":-1.6}"#
        );
    }

    #[test]
    fn placement_predicates_are_exclusive() {
        let located = StrikeFund::located("a", "b", 1.0, 2.0);
        let thematic = StrikeFund::thematic("a", "b");

        assert!(located.has_coordinates() && !located.is_thematic());
        assert!(thematic.is_thematic() && !thematic.has_coordinates());
    }

    #[test]
    fn unknown_type_marker_is_rejected() {
        let raw = r#"{"name":"x","url":"y","type":"regional"}"#;

        assert!(serde_json::from_str::<StrikeFund>(raw).is_err());
    }
}
