//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Index of one of the two players. `PlayerId::A` is the first player
//! (`P1` in snapshots), `PlayerId::B` the second.
//!
//! ## PlayerPair
//!
//! Fixed two-element storage indexed by `PlayerId`. The scheduler and the
//! rules operate on indices into a pair owned by the world state.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Player identifier: index 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// The first player.
    pub const A: PlayerId = PlayerId(0);
    /// The second player.
    pub const B: PlayerId = PlayerId(1);

    /// Create a player ID from a 0-based index.
    ///
    /// Returns `None` for anything other than 0 or 1.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::A),
            1 => Some(Self::B),
            _ => None,
        }
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player.
    #[must_use]
    pub const fn other(self) -> Self {
        PlayerId(1 - self.0)
    }

    /// Both player IDs, A first.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [Self::A, Self::B].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.0 + 1)
    }
}

/// Per-player data for exactly two players.
///
/// ## Example
///
/// ```
/// use camp_escape::core::{PlayerId, PlayerPair};
///
/// let mut moves = PlayerPair::with_value(1);
/// moves[PlayerId::B] = 3;
///
/// assert_eq!(moves[PlayerId::A], 1);
/// assert_eq!(moves[PlayerId::B], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair from explicit values for A and B.
    pub fn new(a: T, b: T) -> Self {
        Self { data: [a, b] }
    }

    /// Create a pair with values from a factory function.
    pub fn from_fn(factory: impl Fn(PlayerId) -> T) -> Self {
        Self::new(factory(PlayerId::A), factory(PlayerId::B))
    }

    /// Create a pair with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(value.clone(), value)
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::both().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::both().zip(self.data.iter_mut())
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::A.index(), 0);
        assert_eq!(PlayerId::B.index(), 1);
        assert_eq!(format!("{}", PlayerId::A), "P1");
        assert_eq!(format!("{}", PlayerId::B), "P2");
    }

    #[test]
    fn test_player_id_other() {
        assert_eq!(PlayerId::A.other(), PlayerId::B);
        assert_eq!(PlayerId::B.other(), PlayerId::A);
    }

    #[test]
    fn test_player_id_from_index() {
        assert_eq!(PlayerId::from_index(0), Some(PlayerId::A));
        assert_eq!(PlayerId::from_index(1), Some(PlayerId::B));
        assert_eq!(PlayerId::from_index(2), None);
    }

    #[test]
    fn test_pair_from_fn() {
        let pair = PlayerPair::from_fn(|p| p.index() * 10);

        assert_eq!(pair[PlayerId::A], 0);
        assert_eq!(pair[PlayerId::B], 10);
    }

    #[test]
    fn test_pair_mutation_and_iter() {
        let mut pair = PlayerPair::with_value(0);
        pair[PlayerId::A] = 5;
        for (_, v) in pair.iter_mut() {
            *v += 1;
        }

        let pairs: Vec<_> = pair.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::A, &6), (PlayerId::B, &1)]);
    }

    #[test]
    fn test_pair_serialization() {
        let pair = PlayerPair::new(1, 2);
        let json = serde_json::to_string(&pair).unwrap();
        let deserialized: PlayerPair<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, deserialized);
    }
}
