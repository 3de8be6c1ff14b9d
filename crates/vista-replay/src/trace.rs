//! Recorded event traces: loading and validation.

use std::path::Path;

use serde::{Deserialize, Serialize};
use vista_common::{ScreenEvent, TraceError};

/// One recorded event and when it happened, relative to mount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEntry {
    pub at_ms: u64,
    pub event: ScreenEvent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceFormat {
    Json,
    Yaml,
}

impl TraceFormat {
    pub fn from_path(path: &Path) -> Result<Self, TraceError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(TraceFormat::Json),
            Some("yaml" | "yml") => Ok(TraceFormat::Yaml),
            _ => Err(TraceError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Read and parse a trace file, picking the format from its extension.
pub fn load_trace(path: &Path) -> Result<Vec<TraceEntry>, TraceError> {
    let format = TraceFormat::from_path(path)?;
    let contents = std::fs::read_to_string(path)
        .map_err(|e| TraceError::Read(format!("{}: {e}", path.display())))?;
    let entries = parse_trace(&contents, format)?;
    tracing::info!(path = %path.display(), entries = entries.len(), "trace loaded");
    Ok(entries)
}

/// Parse trace text. Entries must be in time order.
pub fn parse_trace(contents: &str, format: TraceFormat) -> Result<Vec<TraceEntry>, TraceError> {
    let entries: Vec<TraceEntry> = match format {
        TraceFormat::Json => {
            serde_json::from_str(contents).map_err(|e| TraceError::Parse(e.to_string()))?
        }
        TraceFormat::Yaml => {
            serde_yaml::from_str(contents).map_err(|e| TraceError::Parse(e.to_string()))?
        }
    };

    for (i, pair) in entries.windows(2).enumerate() {
        if pair[1].at_ms < pair[0].at_ms {
            return Err(TraceError::Parse(format!(
                "entry {} at {} ms is earlier than the entry before it ({} ms)",
                i + 1,
                pair[1].at_ms,
                pair[0].at_ms
            )));
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use vista_common::{GestureEvent, RegionId, ScrollSample};

    #[test]
    fn format_from_extension() {
        assert_eq!(
            TraceFormat::from_path(Path::new("a.json")).unwrap(),
            TraceFormat::Json
        );
        assert_eq!(
            TraceFormat::from_path(Path::new("a.yml")).unwrap(),
            TraceFormat::Yaml
        );
        assert_eq!(
            TraceFormat::from_path(Path::new("dir/a.yaml")).unwrap(),
            TraceFormat::Yaml
        );
        assert!(matches!(
            TraceFormat::from_path(Path::new("a.csv")),
            Err(TraceError::UnsupportedFormat(p)) if p == PathBuf::from("a.csv")
        ));
    }

    #[test]
    fn parse_json_trace() {
        let json = r#"[
            {"at_ms": 0, "event": {"type": "gesture", "region": "sheet", "phase": "drag_begin"}},
            {"at_ms": 16, "event": {"type": "scroll", "region": "sheet", "offset": 42.0, "seq": 1}},
            {"at_ms": 32, "event": {"type": "tick"}}
        ]"#;
        let entries = parse_trace(json, TraceFormat::Json).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(
            entries[0].event,
            ScreenEvent::gesture(RegionId::Sheet, GestureEvent::DragBegin)
        );
        assert_eq!(
            entries[1].event,
            ScreenEvent::scroll(RegionId::Sheet, ScrollSample::new(42.0, 1))
        );
        assert_eq!(entries[2].at_ms, 32);
    }

    #[test]
    fn parse_yaml_trace() {
        let yaml = r#"
- at_ms: 0
  event: { type: gesture, region: sheet, phase: drag_begin }
- at_ms: 80
  event: { type: gesture, region: sheet, phase: drag_end, velocity: 1.5 }
- at_ms: 400
  event: { type: tap, region: background }
- at_ms: 500
  event: { type: hide }
"#;
        let entries = parse_trace(yaml, TraceFormat::Yaml).unwrap();
        assert_eq!(entries.len(), 4);
        assert_eq!(
            entries[1].event,
            ScreenEvent::gesture(RegionId::Sheet, GestureEvent::DragEnd { velocity: 1.5 })
        );
        assert_eq!(
            entries[2].event,
            ScreenEvent::Tap {
                region: RegionId::Background
            }
        );
        assert_eq!(entries[3].event, ScreenEvent::Hide);
    }

    #[test]
    fn entries_must_be_time_ordered() {
        let json = r#"[
            {"at_ms": 50, "event": {"type": "tick"}},
            {"at_ms": 10, "event": {"type": "tick"}}
        ]"#;
        let err = parse_trace(json, TraceFormat::Json).unwrap_err();
        assert!(err.to_string().contains("earlier"));
    }

    #[test]
    fn unknown_region_name_fails_to_parse() {
        let json = r#"[{"at_ms": 0, "event": {"type": "tap", "region": "header"}}]"#;
        assert!(matches!(
            parse_trace(json, TraceFormat::Json),
            Err(TraceError::Parse(_))
        ));
    }

    #[test]
    fn load_trace_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        std::fs::write(&path, r#"[{"at_ms": 0, "event": {"type": "tick"}}]"#).unwrap();
        let entries = load_trace(&path).unwrap();
        assert_eq!(entries, vec![TraceEntry { at_ms: 0, event: ScreenEvent::Tick }]);
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");
        assert!(matches!(load_trace(&path), Err(TraceError::Read(_))));
    }
}
