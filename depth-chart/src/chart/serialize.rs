use super::types::{PositionLists, RankedJersey, SavePayload};

/// Builds the save payload from the current list order. Rank is the 1-based
/// list index; positions with no players emit an empty list.
pub fn serialize(lists: &PositionLists, team_id: &str) -> SavePayload {
    let depth_chart = lists
        .iter()
        .map(|(position, players)| {
            let ranked = players
                .iter()
                .enumerate()
                .map(|(index, player)| RankedJersey {
                    jersey_number: player.jersey_number.clone(),
                    rank: index as u32 + 1,
                })
                .collect();
            (position, ranked)
        })
        .collect();

    SavePayload {
        team_id: team_id.to_string(),
        depth_chart,
    }
}
