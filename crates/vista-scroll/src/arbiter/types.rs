//! Core types and constructors for ScrollOwnershipArbiter.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use vista_common::{RegionId, ScrollError};

/// Point-in-time view of who owns the gesture and which regions are locked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipState {
    pub active_region: Option<RegionId>,
    pub locked: BTreeMap<RegionId, bool>,
}

/// Mutual-exclusion gate between scrollable regions. While one region is
/// mid-gesture every other region is locked (scroll disabled); the locks are
/// released only when that region reports it is at rest.
#[derive(Debug, Clone)]
pub struct ScrollOwnershipArbiter {
    /// Known regions in registration order.
    pub(super) regions: Vec<RegionId>,
    /// `true` means scrolling is disabled for that region.
    pub(super) locked: BTreeMap<RegionId, bool>,
    /// Region currently owning the gesture.
    pub(super) active: Option<RegionId>,
}

impl ScrollOwnershipArbiter {
    /// Create an arbiter over an explicit set of regions, all unlocked.
    pub fn new(regions: impl IntoIterator<Item = RegionId>) -> Result<Self, ScrollError> {
        let mut ordered = Vec::new();
        let mut locked = BTreeMap::new();
        for region in regions {
            if locked.insert(region, false).is_some() {
                return Err(ScrollError::DuplicateRegion(region));
            }
            ordered.push(region);
        }
        if ordered.is_empty() {
            return Err(ScrollError::NoRegions);
        }
        Ok(Self {
            regions: ordered,
            locked,
            active: None,
        })
    }

    /// The usual background + sheet pair.
    pub fn pair() -> Self {
        Self {
            regions: vec![RegionId::Background, RegionId::Sheet],
            locked: BTreeMap::from([(RegionId::Background, false), (RegionId::Sheet, false)]),
            active: None,
        }
    }

    // -- Accessors --

    pub fn regions(&self) -> &[RegionId] {
        &self.regions
    }

    pub fn contains(&self, region: RegionId) -> bool {
        self.locked.contains_key(&region)
    }

    pub fn active_region(&self) -> Option<RegionId> {
        self.active
    }

    /// `None` for a region the arbiter does not know.
    pub fn is_locked(&self, region: RegionId) -> Option<bool> {
        self.locked.get(&region).copied()
    }

    /// The value the rendering layer binds to the region's scroll view.
    /// Unknown regions report `false`.
    pub fn scroll_enabled(&self, region: RegionId) -> bool {
        self.locked.get(&region).is_some_and(|locked| !locked)
    }

    pub fn state(&self) -> OwnershipState {
        OwnershipState {
            active_region: self.active,
            locked: self.locked.clone(),
        }
    }
}
