//! Zone kinds, items and the zone record.
//!
//! Both enumerations carry a stable numeric code used by the snapshot
//! format. Codes follow declaration order.

use serde::{Deserialize, Serialize};

/// Kind of location a zone represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneKind {
    Kitchen,
    LivingRoom,
    Shed,
    Street,
    AlongLake,
    /// Final zone of every closed map. Never authored directly.
    ExitCamp,
}

impl ZoneKind {
    /// All kinds in code order.
    pub const ALL: [ZoneKind; 6] = [
        ZoneKind::Kitchen,
        ZoneKind::LivingRoom,
        ZoneKind::Shed,
        ZoneKind::Street,
        ZoneKind::AlongLake,
        ZoneKind::ExitCamp,
    ];

    /// Kinds the authoring tool may append.
    pub const AUTHORABLE: [ZoneKind; 5] = [
        ZoneKind::Kitchen,
        ZoneKind::LivingRoom,
        ZoneKind::Shed,
        ZoneKind::Street,
        ZoneKind::AlongLake,
    ];

    /// Snapshot code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decode a snapshot code.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }

    /// Whether the authoring tool may append this kind.
    #[must_use]
    pub const fn is_authorable(self) -> bool {
        !matches!(self, ZoneKind::ExitCamp)
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ZoneKind::Kitchen => "Kitchen",
            ZoneKind::LivingRoom => "Living room",
            ZoneKind::Shed => "Shed",
            ZoneKind::Street => "Street",
            ZoneKind::AlongLake => "Along the lake",
            ZoneKind::ExitCamp => "Camp exit",
        }
    }
}

impl std::fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// An item that can lie in a zone or sit in a backpack.
///
/// A zone without an item holds `None` in an `Option<Item>`; the snapshot
/// encodes that absence as code [`NO_ITEM_CODE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Item {
    Junk,
    Bandage,
    Knife,
    Gun,
    Gasoline,
    Adrenaline,
}

/// Snapshot code of an empty zone.
pub const NO_ITEM_CODE: u8 = 6;

impl Item {
    /// All items in inventory order.
    pub const ALL: [Item; 6] = [
        Item::Junk,
        Item::Bandage,
        Item::Knife,
        Item::Gun,
        Item::Gasoline,
        Item::Adrenaline,
    ];

    /// Items usable against the adversary, highest priority first.
    pub const DEFENSIVE: [Item; 3] = [Item::Gasoline, Item::Gun, Item::Knife];

    /// Inventory slot / snapshot code.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Decode a snapshot code; [`NO_ITEM_CODE`] decodes to `Some(None)`.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Option<Self>> {
        if code == NO_ITEM_CODE {
            return Some(None);
        }
        Self::ALL.get(usize::from(code)).copied().map(Some)
    }

    /// Encode an optional item as a snapshot code.
    #[must_use]
    pub fn code_of(item: Option<Item>) -> u8 {
        item.map_or(NO_ITEM_CODE, |i| i as u8)
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Item::Junk => "Junk",
            Item::Bandage => "Bandage",
            Item::Knife => "Knife",
            Item::Gun => "Gun",
            Item::Gasoline => "Gasoline",
            Item::Adrenaline => "Adrenaline",
        }
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One traversable location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Sequential id, starting at 1.
    pub id: u32,
    pub kind: ZoneKind,
    pub item: Option<Item>,
}

impl Zone {
    /// Create a zone record.
    #[must_use]
    pub const fn new(id: u32, kind: ZoneKind, item: Option<Item>) -> Self {
        Self { id, kind, item }
    }

    /// Render the zone, hiding the item unless `reveal_item` is set.
    #[must_use]
    pub fn describe(&self, reveal_item: bool) -> String {
        let item = match (reveal_item, self.item) {
            (false, _) => "???".to_string(),
            (true, Some(item)) => item.to_string(),
            (true, None) => "Nothing".to_string(),
        };
        format!("{:<2} {:<16} | item: {}", self.id, self.kind, item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_kind_codes() {
        for (i, kind) in ZoneKind::ALL.iter().enumerate() {
            assert_eq!(usize::from(kind.code()), i);
            assert_eq!(ZoneKind::from_code(kind.code()), Some(*kind));
        }
        assert_eq!(ZoneKind::from_code(6), None);
    }

    #[test]
    fn test_exit_not_authorable() {
        assert!(!ZoneKind::ExitCamp.is_authorable());
        assert!(ZoneKind::AUTHORABLE.iter().all(|k| k.is_authorable()));
    }

    #[test]
    fn test_item_codes() {
        assert_eq!(Item::from_code(0), Some(Some(Item::Junk)));
        assert_eq!(Item::from_code(5), Some(Some(Item::Adrenaline)));
        assert_eq!(Item::from_code(NO_ITEM_CODE), Some(None));
        assert_eq!(Item::from_code(7), None);
        assert_eq!(Item::code_of(None), NO_ITEM_CODE);
        assert_eq!(Item::code_of(Some(Item::Gun)), 3);
    }

    #[test]
    fn test_describe_hides_item() {
        let zone = Zone::new(3, ZoneKind::Shed, Some(Item::Gasoline));
        assert!(zone.describe(false).contains("???"));
        assert!(zone.describe(true).contains("Gasoline"));

        let empty = Zone::new(4, ZoneKind::Street, None);
        assert!(empty.describe(true).contains("Nothing"));
    }
}
