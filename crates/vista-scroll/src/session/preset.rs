//! Named layouts for the screens that use scroll coordination.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use vista_common::RegionId;

/// Screens with a known scroll layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScreenPreset {
    /// Photo carousel behind a content sheet, hiding header.
    PropertyDetail,
    /// Single sheet in a modal; closing it hides the session.
    CityModal,
    /// Home/projects/properties lists: hiding header plus sticky search bar.
    ListingFeed,
}

impl ScreenPreset {
    pub const ALL: [ScreenPreset; 3] = [
        ScreenPreset::PropertyDetail,
        ScreenPreset::CityModal,
        ScreenPreset::ListingFeed,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ScreenPreset::PropertyDetail => "property-detail",
            ScreenPreset::CityModal => "city-modal",
            ScreenPreset::ListingFeed => "listing-feed",
        }
    }

    pub fn layout(&self) -> SessionLayout {
        match self {
            ScreenPreset::PropertyDetail => SessionLayout {
                label: self.name().to_string(),
                regions: vec![RegionId::Background, RegionId::Sheet],
                content_region: RegionId::Sheet,
                chrome: true,
                sticky: false,
                boundary: true,
                guarded_region: Some(RegionId::Background),
            },
            ScreenPreset::CityModal => SessionLayout {
                label: self.name().to_string(),
                ..SessionLayout::single_sheet()
            },
            ScreenPreset::ListingFeed => SessionLayout {
                label: self.name().to_string(),
                sticky: true,
                ..SessionLayout::single_sheet()
            },
        }
    }
}

impl fmt::Display for ScreenPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScreenPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or_else(|| format!("unknown screen preset '{s}'"))
    }
}

/// Which regions a session coordinates and which components it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionLayout {
    /// Name used in log lines.
    pub label: String,
    pub regions: Vec<RegionId>,
    /// Region whose offsets drive chrome, sticky and boundary.
    pub content_region: RegionId,
    pub chrome: bool,
    pub sticky: bool,
    pub boundary: bool,
    /// Region whose taps are suppressed right after `content_region` comes
    /// to rest.
    pub guarded_region: Option<RegionId>,
}

impl SessionLayout {
    /// One scrollable sheet with a hiding header and nothing else.
    pub fn single_sheet() -> Self {
        Self {
            label: "single-sheet".to_string(),
            regions: vec![RegionId::Sheet],
            content_region: RegionId::Sheet,
            chrome: true,
            sticky: false,
            boundary: false,
            guarded_region: None,
        }
    }
}
