//! Weighted item tables for procedural item assignment.
//!
//! Each zone kind has a row of six percentage weights, one per [`Item`] in
//! inventory order. A draw samples `1..=100` and walks the row accumulating
//! weights; the first item whose cumulative bound covers the draw and whose
//! own weight is non-zero is selected.

use serde::{Deserialize, Serialize};

use super::zone::{Item, ZoneKind};
use crate::core::{GameError, GameRng};

/// Weight row for one zone kind, in [`Item::ALL`] order.
pub type WeightRow = [u8; 6];

const DEFAULT_ROWS: [WeightRow; 6] = [
    [30, 20, 40, 0, 0, 10], // Kitchen
    [20, 10, 10, 30, 0, 30], // LivingRoom
    [20, 10, 30, 0, 30, 10], // Shed
    [80, 0, 10, 0, 10, 0],  // Street
    [70, 0, 10, 0, 20, 0],  // AlongLake
    [90, 0, 10, 0, 0, 0],   // ExitCamp
];

/// Lookup table keyed by [`ZoneKind`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemTable {
    rows: [WeightRow; 6],
}

impl Default for ItemTable {
    fn default() -> Self {
        Self { rows: DEFAULT_ROWS }
    }
}

impl ItemTable {
    /// Build a table from explicit rows, in [`ZoneKind::ALL`] order.
    ///
    /// Rows are not checked here; see [`ItemTable::validate`].
    #[must_use]
    pub const fn from_rows(rows: [WeightRow; 6]) -> Self {
        Self { rows }
    }

    /// Weights for a zone kind.
    #[must_use]
    pub fn weights(&self, kind: ZoneKind) -> &WeightRow {
        &self.rows[usize::from(kind.code())]
    }

    /// Check that every row sums to 100.
    pub fn validate(&self) -> Result<(), GameError> {
        for kind in ZoneKind::ALL {
            let sum: u32 = self.weights(kind).iter().map(|&w| u32::from(w)).sum();
            if sum != 100 {
                return Err(GameError::Invariant(format!(
                    "item weights for {kind} sum to {sum}, expected 100"
                )));
            }
        }
        Ok(())
    }

    /// Draw an item for a zone of the given kind.
    pub fn draw(&self, kind: ZoneKind, rng: &mut GameRng) -> Result<Item, GameError> {
        let roll = rng.roll_percent();
        self.select(kind, roll).ok_or_else(|| {
            log::warn!("item draw for {kind} selected nothing (roll {roll})");
            GameError::Invariant(format!("item draw for {kind} selected nothing (roll {roll})"))
        })
    }

    /// Resolve a roll in `1..=100` against a row.
    fn select(&self, kind: ZoneKind, roll: u32) -> Option<Item> {
        let mut upper = 0u32;
        for (item, &weight) in Item::ALL.iter().zip(self.weights(kind)) {
            let weight = u32::from(weight);
            let lower = upper;
            upper += weight;
            if weight != 0 && roll > lower && roll <= upper {
                return Some(*item);
            }
        }
        None
    }
}
