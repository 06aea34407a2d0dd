//! Text snapshot codec.
//!
//! ```text
//! LINKED LIST:
//! <kind>-<item>,<kind>-<item>,...,<kind>-<item>#
//! PLAYERS:
//! P1-<health>-<zoneId>-|<inv0>-<inv1>-<inv2>-<inv3>-<inv4>-<inv5>|-<itemTotal>-<searched>
//! P2-<health>-<zoneId>-|<inv0>-<inv1>-<inv2>-<inv3>-<inv4>-<inv5>|-<itemTotal>-<searched>
//! GAME VARIABLES:
//! <lastActor>, <gasolineSafeTurns>
//! ```
//!
//! Zone ids, inventory counts and item totals are padded to width 4. A zone
//! id of 0 means departed. `lastActor` is 0 for none, 1 for P1, 2 for P2.
//! The reader trims the padding and reports the first bad line.

use std::fmt::Write as _;

use crate::core::{
    HealthState, Inventory, Player, PlayerId, PlayerPair, Position, SaveError, WorldState,
};
use crate::map::{Item, Map, ZoneKind};

const MAP_HEADER: &str = "LINKED LIST:";
const PLAYERS_HEADER: &str = "PLAYERS:";
const VARIABLES_HEADER: &str = "GAME VARIABLES:";

/// Render a world as snapshot text.
#[must_use]
pub fn encode(world: &WorldState) -> String {
    let pairs: Vec<String> = world
        .map
        .zones()
        .iter()
        .map(|zone| format!("{}-{}", zone.kind.code(), Item::code_of(zone.item)))
        .collect();

    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{MAP_HEADER}");
    let _ = writeln!(out, "{}#", pairs.join(","));
    let _ = writeln!(out, "{PLAYERS_HEADER}");
    for (id, player) in world.players.iter() {
        let _ = writeln!(out, "{}", encode_player(id, player));
    }
    let _ = writeln!(out, "{VARIABLES_HEADER}");
    let _ = write!(
        out,
        "{}, {}",
        encode_last_actor(world.last_actor),
        world.gasoline_safe_turns
    );
    out
}

fn encode_player(id: PlayerId, player: &Player) -> String {
    let counts = player.inventory.counts();
    format!(
        "{id}-{}-{:4}-|{:4}-{:4}-{:4}-{:4}-{:4}-{:4}|-{:4}-{}",
        player.health.code(),
        player.position.zone_id(),
        counts[0],
        counts[1],
        counts[2],
        counts[3],
        counts[4],
        counts[5],
        player.item_total,
        u8::from(player.zone_searched),
    )
}

fn encode_last_actor(last: Option<PlayerId>) -> usize {
    last.map_or(0, |p| p.index() + 1)
}

/// Parse snapshot text back into a world.
pub fn decode(text: &str) -> Result<WorldState, SaveError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());
    let mut next = |what: &str| {
        lines.next().ok_or_else(|| {
            SaveError::corrupted(text.lines().count() + 1, format!("missing {what}"))
        })
    };

    expect_header(next("map header")?, MAP_HEADER)?;
    let map = decode_map(next("zone list")?)?;
    expect_header(next("players header")?, PLAYERS_HEADER)?;
    let a = decode_player(next("player 1")?, PlayerId::A, &map)?;
    let b = decode_player(next("player 2")?, PlayerId::B, &map)?;
    expect_header(next("variables header")?, VARIABLES_HEADER)?;
    let (last_actor, gasoline_safe_turns) = decode_variables(next("game variables")?)?;

    Ok(WorldState {
        map,
        players: PlayerPair::new(a, b),
        gasoline_safe_turns,
        last_actor,
    })
}

fn expect_header((line, text): (usize, &str), header: &str) -> Result<(), SaveError> {
    if text == header {
        Ok(())
    } else {
        Err(SaveError::corrupted(line, format!("expected `{header}`")))
    }
}

fn number<T: std::str::FromStr>(line: usize, field: &str, raw: &str) -> Result<T, SaveError> {
    raw.trim()
        .parse()
        .map_err(|_| SaveError::corrupted(line, format!("bad {field}: `{}`", raw.trim())))
}

fn decode_map((line, text): (usize, &str)) -> Result<Map, SaveError> {
    let body = text
        .strip_suffix('#')
        .ok_or_else(|| SaveError::corrupted(line, "zone list is not terminated by `#`"))?;

    let mut pairs = Vec::new();
    for pair in body.split(',') {
        let (kind, item) = pair
            .split_once('-')
            .ok_or_else(|| SaveError::corrupted(line, format!("bad zone `{}`", pair.trim())))?;
        let kind = ZoneKind::from_code(number(line, "zone kind", kind)?).ok_or_else(|| {
            SaveError::corrupted(line, format!("unknown zone kind `{}`", kind.trim()))
        })?;
        let item = Item::from_code(number(line, "item", item)?)
            .ok_or_else(|| SaveError::corrupted(line, format!("unknown item `{}`", item.trim())))?;
        pairs.push((kind, item));
    }

    let map = Map::from_pairs(pairs);
    if !map.ends_with_exit() {
        return Err(SaveError::corrupted(line, "the map does not end with an empty camp exit"));
    }
    Ok(map)
}

fn decode_player(
    (line, text): (usize, &str),
    id: PlayerId,
    map: &Map,
) -> Result<Player, SaveError> {
    let mut sections = text.split('|');
    let (Some(head), Some(inventory), Some(tail), None) =
        (sections.next(), sections.next(), sections.next(), sections.next())
    else {
        return Err(SaveError::corrupted(line, "expected three `|`-separated sections"));
    };

    // P1-<health>-<zoneId>-
    let head = head
        .strip_suffix('-')
        .ok_or_else(|| SaveError::corrupted(line, "missing `-` before inventory"))?;
    let fields: Vec<&str> = head.split('-').collect();
    let [tag, health, zone_id] = fields.as_slice() else {
        return Err(SaveError::corrupted(line, "bad player header"));
    };
    if tag.trim() != id.to_string() {
        return Err(SaveError::corrupted(line, format!("expected {id}")));
    }
    let health = HealthState::from_code(number(line, "health", health)?)
        .ok_or_else(|| SaveError::corrupted(line, format!("unknown health `{}`", health.trim())))?;
    let zone_id: u32 = number(line, "zone id", zone_id)?;
    let position = match zone_id {
        0 => Position::Departed,
        _ if health == HealthState::Dead => {
            let reason = format!("{id} is dead but still on zone {zone_id}");
            return Err(SaveError::corrupted(line, reason));
        }
        _ => map.index_of_id(zone_id).map(Position::At).ok_or_else(|| {
            SaveError::corrupted(
                line,
                format!("zone id {zone_id} is past the end of a {}-zone map", map.len()),
            )
        })?,
    };

    let counts: Vec<u16> = inventory
        .split('-')
        .map(|raw| number(line, "inventory count", raw))
        .collect::<Result<_, _>>()?;
    let counts: [u16; 6] = counts
        .try_into()
        .map_err(|_| SaveError::corrupted(line, "expected six inventory counts"))?;

    // -<itemTotal>-<searched>; the total may itself be negative.
    let tail = tail
        .strip_prefix('-')
        .ok_or_else(|| SaveError::corrupted(line, "missing `-` after inventory"))?;
    let (item_total, searched) = tail
        .rsplit_once('-')
        .ok_or_else(|| SaveError::corrupted(line, "missing searched flag"))?;
    let item_total: i32 = number(line, "item total", item_total)?;
    let zone_searched = match number::<u8>(line, "searched flag", searched)? {
        0 => false,
        1 => true,
        other => return Err(SaveError::corrupted(line, format!("bad searched flag {other}"))),
    };

    Ok(Player {
        health,
        position,
        inventory: Inventory::from_counts(counts),
        item_total,
        zone_searched,
    })
}

fn decode_variables((line, text): (usize, &str)) -> Result<(Option<PlayerId>, u32), SaveError> {
    let (last, gasoline) = text
        .split_once(',')
        .ok_or_else(|| SaveError::corrupted(line, "expected `<lastActor>, <gasolineSafeTurns>`"))?;
    let last_actor = match number::<u8>(line, "last actor", last)? {
        0 => None,
        1 => Some(PlayerId::A),
        2 => Some(PlayerId::B),
        other => return Err(SaveError::corrupted(line, format!("unknown last actor {other}"))),
    };
    Ok((last_actor, number(line, "gasoline turns", gasoline)?))
}
