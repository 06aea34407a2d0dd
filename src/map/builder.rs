//! Map authoring.
//!
//! A [`MapBuilder`] appends zones one at a time, can undo the last one, and
//! finally closes the map by appending the camp exit. The menu that drives
//! authoring lives outside this crate; it only passes validated choices in.

use super::table::ItemTable;
use super::zone::{Item, Zone, ZoneKind};
use super::Map;
use crate::core::{GameError, GameRng, RulesConfig};

/// Either an explicit value or a request for a random one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pick<T> {
    /// Let the builder draw the value.
    Auto,
    /// Use this value.
    Exact(T),
}

/// Incremental map authoring.
///
/// ## Example
///
/// ```
/// use camp_escape::core::{GameRng, RulesConfig};
/// use camp_escape::map::{MapBuilder, Pick, ZoneKind};
///
/// let mut rng = GameRng::new(1);
/// let mut builder = MapBuilder::new(&RulesConfig::default());
/// for _ in 0..7 {
///     builder.append_zone(Pick::Auto, Pick::Auto, &mut rng).unwrap();
/// }
/// let map = builder.close().unwrap();
///
/// assert_eq!(map.len(), 8);
/// assert_eq!(map.zones()[7].kind, ZoneKind::ExitCamp);
/// ```
#[derive(Clone, Debug)]
pub struct MapBuilder {
    zones: Vec<Zone>,
    table: ItemTable,
    min_zones: usize,
    closed: bool,
}

impl MapBuilder {
    /// Start an empty map using the configured item table and minimum length.
    #[must_use]
    pub fn new(config: &RulesConfig) -> Self {
        Self {
            zones: Vec::new(),
            table: config.item_table.clone(),
            min_zones: config.min_authored_zones,
            closed: false,
        }
    }

    /// Zones authored so far.
    #[must_use]
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// How many more zones are needed before [`close`](Self::close) succeeds.
    #[must_use]
    pub fn remaining_required(&self) -> usize {
        self.min_zones.saturating_sub(self.zones.len())
    }

    /// Append a zone with the next sequential id.
    ///
    /// `Pick::Auto` for the kind draws uniformly among the authorable kinds;
    /// `Pick::Auto` for the item draws from the weighted item table. Nothing
    /// is appended unless every draw succeeds.
    pub fn append_zone(
        &mut self,
        kind: Pick<ZoneKind>,
        item: Pick<Option<Item>>,
        rng: &mut GameRng,
    ) -> Result<&Zone, GameError> {
        if self.closed {
            return Err(GameError::MapClosed);
        }

        let kind = match kind {
            Pick::Exact(kind) if !kind.is_authorable() => {
                return Err(GameError::ReservedZoneKind(kind));
            }
            Pick::Exact(kind) => kind,
            Pick::Auto => *rng
                .pick(&ZoneKind::AUTHORABLE)
                .ok_or_else(|| GameError::Invariant("no authorable zone kinds".into()))?,
        };
        let item = match item {
            Pick::Exact(item) => item,
            Pick::Auto => Some(self.table.draw(kind, rng)?),
        };

        let id = self.next_id();
        self.zones.push(Zone::new(id, kind, item));
        log::debug!("appended zone {id}: {kind} ({item:?})");
        Ok(&self.zones[self.zones.len() - 1])
    }

    /// Append a zone of uniformly random authorable kind with a drawn item.
    pub fn append_random_zone(&mut self, rng: &mut GameRng) -> Result<&Zone, GameError> {
        self.append_zone(Pick::Auto, Pick::Auto, rng)
    }

    /// Remove the tail zone.
    pub fn remove_last_zone(&mut self) -> Result<Zone, GameError> {
        if self.closed {
            return Err(GameError::MapClosed);
        }
        self.zones.pop().ok_or(GameError::EmptyMap)
    }

    /// Discard everything authored so far.
    pub fn discard(&mut self) {
        self.zones.clear();
    }

    /// Append the camp exit and hand out the finished map.
    ///
    /// Requires at least the configured minimum of authored zones. The
    /// builder is frozen afterwards.
    pub fn close(&mut self) -> Result<Map, GameError> {
        if self.closed {
            return Err(GameError::MapClosed);
        }
        if self.zones.is_empty() {
            return Err(GameError::EmptyMap);
        }
        if self.zones.len() < self.min_zones {
            return Err(GameError::MapTooShort {
                have: self.zones.len(),
                need: self.min_zones,
            });
        }

        let id = self.next_id();
        self.zones.push(Zone::new(id, ZoneKind::ExitCamp, None));
        self.closed = true;
        log::info!("map closed with {} zones", self.zones.len());
        Ok(Map::from_zones(std::mem::take(&mut self.zones)))
    }

    fn next_id(&self) -> u32 {
        self.zones.last().map_or(1, |zone| zone.id + 1)
    }
}
