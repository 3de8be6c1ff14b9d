//! Drive a scroll session from a trace on a manual clock.

use std::fmt::Write as _;
use std::time::Duration;

use serde::Serialize;
use vista_common::{ScreenEvent, ScrollError};
use vista_config::VistaConfig;
use vista_scroll::{ManualClock, ScreenPreset, ScrollSession, SessionSnapshot};

use crate::trace::TraceEntry;

/// The session's output after one trace entry.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayStep {
    pub at_ms: u64,
    pub event: ScreenEvent,
    pub snapshot: SessionSnapshot,
}

/// Mount `preset`, feed every entry at its recorded time, tear down.
pub fn replay(
    preset: ScreenPreset,
    config: &VistaConfig,
    entries: &[TraceEntry],
) -> Result<Vec<ReplayStep>, ScrollError> {
    let clock = ManualClock::new();
    let mut session = ScrollSession::mount_with_clock(preset, config, clock.clone())?;

    let steps = entries
        .iter()
        .map(|entry| {
            clock.set_elapsed(Duration::from_millis(entry.at_ms));
            ReplayStep {
                at_ms: entry.at_ms,
                event: entry.event.clone(),
                snapshot: session.handle(entry.event.clone()),
            }
        })
        .collect();

    session.teardown();
    Ok(steps)
}

/// Short human label for an event, e.g. `scroll sheet 120.0 #4`.
pub fn event_label(event: &ScreenEvent) -> String {
    match event {
        ScreenEvent::Scroll {
            region,
            offset,
            seq,
        } => format!("scroll {region} {offset:.1} #{seq}"),
        ScreenEvent::Gesture { region, gesture } => format!("{} {region}", gesture.name()),
        ScreenEvent::Tap { region } => format!("tap {region}"),
        ScreenEvent::Tick => "tick".to_string(),
        ScreenEvent::Hide => "hide".to_string(),
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

/// One-line summary of a step for terminal output.
pub fn summary_line(step: &ReplayStep) -> String {
    let snap = &step.snapshot;
    let mut line = format!(
        "{:>6}ms  {:<28} chrome {:>6.1} -> {:>5.1} {}",
        step.at_ms,
        event_label(&step.event),
        snap.chrome_offset,
        snap.chrome_target,
        if snap.is_visible { "shown" } else { "hidden" },
    );

    let owner = snap
        .active_region
        .map_or_else(|| "-".to_string(), |region| region.to_string());
    let _ = write!(line, "  owner {owner}  scroll");
    for (region, enabled) in &snap.scroll_enabled {
        let _ = write!(line, " {region}:{}", on_off(*enabled));
    }
    if let Some(within) = snap.within_overlap {
        let _ = write!(line, "  overlap {}", on_off(within));
    }
    if let Some(sticky) = snap.is_sticky {
        let _ = write!(line, "  sticky {}", on_off(sticky));
    }
    if let Some(touch) = snap.background_touch_enabled {
        let _ = write!(line, "  bg-touch {}", on_off(touch));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use vista_common::{GestureEvent, RegionId, ScrollSample};

    fn entry(at_ms: u64, event: ScreenEvent) -> TraceEntry {
        TraceEntry { at_ms, event }
    }

    #[test]
    fn replay_fling_then_settle() {
        let entries = vec![
            entry(0, ScreenEvent::gesture(RegionId::Sheet, GestureEvent::DragBegin)),
            entry(
                40,
                ScreenEvent::gesture(RegionId::Sheet, GestureEvent::DragEnd { velocity: 2.0 }),
            ),
            entry(100, ScreenEvent::Tick),
            entry(200, ScreenEvent::Tick),
        ];
        let steps = replay(ScreenPreset::PropertyDetail, &VistaConfig::default(), &entries).unwrap();

        let background_enabled: Vec<bool> = steps
            .iter()
            .map(|s| s.snapshot.scroll_enabled[&RegionId::Background])
            .collect();
        // Released at 40 ms, no momentum by 160 ms.
        assert_eq!(background_enabled, vec![false, false, false, true]);
    }

    #[test]
    fn replay_header_hysteresis() {
        let offsets = [0.0, 10.0, 40.0, 80.0, 60.0, 20.0];
        let entries: Vec<TraceEntry> = offsets
            .iter()
            .enumerate()
            .map(|(i, &offset)| {
                entry(
                    i as u64 * 16,
                    ScreenEvent::scroll(RegionId::Sheet, ScrollSample::new(offset, i as u64)),
                )
            })
            .collect();
        let steps = replay(ScreenPreset::CityModal, &VistaConfig::default(), &entries).unwrap();
        let visible: Vec<bool> = steps.iter().map(|s| s.snapshot.is_visible).collect();
        assert_eq!(visible, vec![true, true, false, false, true, true]);
    }

    #[test]
    fn one_mount_per_replay() {
        let entries = vec![entry(0, ScreenEvent::Tick), entry(10, ScreenEvent::Hide)];
        let steps = replay(ScreenPreset::ListingFeed, &VistaConfig::default(), &entries).unwrap();
        assert_eq!(steps[0].snapshot.mount_id, steps[1].snapshot.mount_id);
    }

    #[test]
    fn labels() {
        assert_eq!(
            event_label(&ScreenEvent::scroll(RegionId::Sheet, ScrollSample::new(120.0, 4))),
            "scroll sheet 120.0 #4"
        );
        assert_eq!(
            event_label(&ScreenEvent::gesture(
                RegionId::Background,
                GestureEvent::MomentumEnd
            )),
            "momentum_end background"
        );
        assert_eq!(event_label(&ScreenEvent::Hide), "hide");
    }

    #[test]
    fn summary_mentions_only_present_components() {
        let entries = vec![entry(0, ScreenEvent::Tick)];
        let steps = replay(ScreenPreset::CityModal, &VistaConfig::default(), &entries).unwrap();
        let line = summary_line(&steps[0]);
        assert!(line.contains("tick"));
        assert!(line.contains("sheet:on"));
        assert!(line.contains("shown"));
        assert!(!line.contains("overlap"));
        assert!(!line.contains("sticky"));

        let steps = replay(ScreenPreset::PropertyDetail, &VistaConfig::default(), &entries).unwrap();
        let line = summary_line(&steps[0]);
        assert!(line.contains("overlap on"));
        assert!(line.contains("bg-touch on"));
    }

    #[test]
    fn bundled_property_detail_trace() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("traces")
            .join("property-detail-fling.yaml");
        let entries = crate::trace::load_trace(&path).unwrap();
        let steps = replay(ScreenPreset::PropertyDetail, &VistaConfig::default(), &entries).unwrap();
        assert_eq!(steps.len(), 15);

        // Carousel drag while the sheet is being dragged is ignored.
        assert_eq!(steps[3].snapshot.active_region, Some(RegionId::Sheet));
        assert!(!steps[2].snapshot.is_visible);
        // Still locked between release and momentum.
        assert!(!steps[4].snapshot.scroll_enabled[&RegionId::Background]);
        assert_eq!(steps[7].snapshot.within_overlap, Some(false));
        assert!(steps[9].snapshot.scroll_enabled[&RegionId::Background]);
        // Tap 100 ms after rest is swallowed, 400 ms after is not.
        assert_eq!(steps[10].snapshot.background_touch_enabled, Some(false));
        assert_eq!(steps[11].snapshot.background_touch_enabled, Some(true));
        // Scrolling back up re-shows the header and re-enters the overlap.
        assert!(steps[12].snapshot.is_visible);
        assert_eq!(steps[12].snapshot.within_overlap, Some(true));
        assert_eq!(steps[14].snapshot.chrome_offset, 0.0);
    }

    #[test]
    fn step_serializes_as_json() {
        let entries = vec![entry(5, ScreenEvent::Tick)];
        let steps = replay(ScreenPreset::ListingFeed, &VistaConfig::default(), &entries).unwrap();
        let json = serde_json::to_value(&steps[0]).unwrap();
        assert_eq!(json["at_ms"], 5);
        assert_eq!(json["event"]["type"], "tick");
        assert_eq!(json["snapshot"]["is_sticky"], false);
    }
}
