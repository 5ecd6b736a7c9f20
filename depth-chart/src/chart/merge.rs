use std::collections::HashMap;
use super::types::{DepthChartEntry, Player, Position};

/// jersey number -> saved rank, per position
pub type SavedRanks = HashMap<Position, HashMap<String, u32>>;

/// Key used to match roster jerseys against saved entries. Only surrounding
/// whitespace is ignored: "0", "00" and "07" are all distinct jerseys.
pub fn jersey_key(jersey_number: &str) -> &str {
    jersey_number.trim()
}

/// Groups saved entries by position. When a jersey is ranked twice at the
/// same position the better (lower) rank is kept.
pub fn saved_ranks(entries: &[DepthChartEntry]) -> SavedRanks {
    let mut ranks: SavedRanks = HashMap::new();
    for entry in entries {
        let by_jersey = ranks.entry(entry.position).or_default();
        let rank = by_jersey.entry(jersey_key(&entry.jersey_number).to_string()).or_insert(entry.rank);
        *rank = (*rank).min(entry.rank);
    }
    ranks
}

/// Re-sorts a default-ordered list with saved ranks as the primary key.
/// Unranked players follow every ranked player, keeping their relative order.
pub fn apply_saved_ranks(mut players: Vec<Player>, ranks: Option<&HashMap<String, u32>>) -> Vec<Player> {
    let ranks = match ranks {
        Some(ranks) if !ranks.is_empty() => ranks,
        _ => return players,
    };

    // sort_by_key is stable
    players.sort_by_key(|player| match ranks.get(jersey_key(&player.jersey_number)) {
        Some(rank) => (0u8, *rank),
        None => (1u8, 0),
    });
    players
}
