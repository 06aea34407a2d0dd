//! The zone map: an ordered, indexable sequence of zones.
//!
//! Maps are produced by [`MapBuilder`] (authoring) or rebuilt from a
//! snapshot. Once built, the sequence is fixed; only zone items change as
//! players pick them up.
//!
//! Player positions are indices into the map (see
//! [`Position`](crate::core::Position)).

pub mod builder;
pub mod table;
pub mod zone;

pub use builder::{MapBuilder, Pick};
pub use table::{ItemTable, WeightRow};
pub use zone::{Item, Zone, ZoneKind, NO_ITEM_CODE};

use serde::{Deserialize, Serialize};

use crate::core::GameError;

/// Ordered zone sequence with contiguous ids starting at 1.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Map {
    zones: Vec<Zone>,
}

impl Map {
    /// Rebuild a map by replaying `(kind, item)` pairs in order.
    ///
    /// Ids are reassigned sequentially from 1.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (ZoneKind, Option<Item>)>) -> Self {
        let zones = pairs
            .into_iter()
            .zip(1u32..)
            .map(|((kind, item), id)| Zone::new(id, kind, item))
            .collect();
        Self { zones }
    }

    pub(crate) fn from_zones(zones: Vec<Zone>) -> Self {
        Self { zones }
    }

    /// Number of zones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// All zones in order.
    #[must_use]
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Zone at a 0-based index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Zone> {
        self.zones.get(index)
    }

    /// Index following `index`, or `None` at the last zone.
    #[must_use]
    pub fn next_index(&self, index: usize) -> Option<usize> {
        let next = index + 1;
        (next < self.zones.len()).then_some(next)
    }

    /// Index of the zone with the given id.
    #[must_use]
    pub fn index_of_id(&self, id: u32) -> Option<usize> {
        let index = usize::try_from(id).ok()?.checked_sub(1)?;
        (index < self.zones.len()).then_some(index)
    }

    /// Whether the last zone is the camp exit with nothing in it.
    #[must_use]
    pub fn ends_with_exit(&self) -> bool {
        self.zones
            .last()
            .is_some_and(|zone| zone.kind == ZoneKind::ExitCamp && zone.item.is_none())
    }

    /// Check that the map is a closed map fit for play: at least
    /// `min_authored_zones` zones followed by an empty camp exit.
    pub fn check_playable(&self, min_authored_zones: usize) -> Result<(), GameError> {
        if self.zones.is_empty() {
            return Err(GameError::EmptyMap);
        }
        if !self.ends_with_exit() {
            return Err(GameError::MissingExit);
        }
        let authored = self.zones.len() - 1;
        if authored < min_authored_zones {
            return Err(GameError::MapTooShort {
                have: authored,
                need: min_authored_zones,
            });
        }
        Ok(())
    }

    /// Remove and return the item lying in a zone.
    pub fn take_item(&mut self, index: usize) -> Option<Item> {
        self.zones.get_mut(index).and_then(|zone| zone.item.take())
    }

    /// Multi-line rendering of the whole map with items visible.
    #[must_use]
    pub fn describe(&self) -> String {
        let mut out = String::from("START-----------------------------------------------\n");
        for zone in &self.zones {
            out.push_str(&zone.describe(true));
            out.push('\n');
        }
        out.push_str("END-------------------------------------------------\n");
        out
    }
}
