use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of one independently scrollable surface on a screen.
///
/// Most screens only have a full-bleed background and a foreground sheet;
/// `Other` covers screens that stack more regions. Serialized as its display
/// name (`"background"`, `"sheet"`, `"region-3"`) so it also works as a map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum RegionId {
    Background,
    Sheet,
    Other(u32),
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionId::Background => write!(f, "background"),
            RegionId::Sheet => write!(f, "sheet"),
            RegionId::Other(n) => write!(f, "region-{n}"),
        }
    }
}

impl FromStr for RegionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "background" => Ok(RegionId::Background),
            "sheet" => Ok(RegionId::Sheet),
            other => other
                .strip_prefix("region-")
                .and_then(|n| n.parse::<u32>().ok())
                .map(RegionId::Other)
                .ok_or_else(|| format!("unknown region name '{other}'")),
        }
    }
}

impl TryFrom<String> for RegionId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RegionId> for String {
    fn from(region: RegionId) -> Self {
        region.to_string()
    }
}

/// One reading of scroll position along a single axis.
///
/// `seq` is the arrival-order index; within a region it must strictly
/// increase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollSample {
    pub offset: f64,
    pub seq: u64,
}

impl ScrollSample {
    pub fn new(offset: f64, seq: u64) -> Self {
        Self { offset, seq }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_id_display() {
        assert_eq!(RegionId::Background.to_string(), "background");
        assert_eq!(RegionId::Sheet.to_string(), "sheet");
        assert_eq!(RegionId::Other(4).to_string(), "region-4");
    }

    #[test]
    fn region_id_hash_and_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(RegionId::Sheet);
        set.insert(RegionId::Background);
        set.insert(RegionId::Sheet);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn region_id_serializes_as_name() {
        let json = serde_json::to_string(&RegionId::Background).unwrap();
        assert_eq!(json, "\"background\"");

        let parsed: RegionId = serde_json::from_str("\"sheet\"").unwrap();
        assert_eq!(parsed, RegionId::Sheet);

        let parsed: RegionId = serde_json::from_str("\"region-2\"").unwrap();
        assert_eq!(parsed, RegionId::Other(2));
    }

    #[test]
    fn region_id_rejects_unknown_names() {
        assert!("carousel".parse::<RegionId>().is_err());
        assert!("region-x".parse::<RegionId>().is_err());
        assert!(serde_json::from_str::<RegionId>("\"header\"").is_err());
    }

    #[test]
    fn region_id_works_as_map_key() {
        use std::collections::BTreeMap;
        let map = BTreeMap::from([(RegionId::Other(3), true), (RegionId::Sheet, false)]);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"sheet":false,"region-3":true}"#);
    }

    #[test]
    fn scroll_sample_from_json() {
        let sample: ScrollSample = serde_json::from_str(r#"{"offset": 42.5, "seq": 3}"#).unwrap();
        assert_eq!(sample, ScrollSample::new(42.5, 3));
    }
}
