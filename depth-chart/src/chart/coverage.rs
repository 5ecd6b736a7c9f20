use std::collections::BTreeMap;
use serde::Serialize;
use super::types::{Player, Position};

/// Aggregate for one position on the diamond diagram
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PositionCoverage {
    pub players: u32,
    pub total_allocation: f64,
}

/// Counts eligible players and sums allocation per position.
/// Every position is present, including uncovered ones.
pub fn position_coverage(roster: &[Player]) -> BTreeMap<Position, PositionCoverage> {
    let mut coverage: BTreeMap<Position, PositionCoverage> =
        Position::all().map(|p| (p, PositionCoverage::default())).collect();

    for player in roster {
        for position in Position::all() {
            let allocation = player.allocation_for(position);
            if allocation <= 0.0 {
                continue;
            }
            let stats = coverage.entry(position).or_default();
            stats.players += 1;
            stats.total_allocation += allocation;
        }
    }

    coverage
}
