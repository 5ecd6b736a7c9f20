pub mod types;
pub mod ordering;
pub mod merge;
pub mod reorder;
pub mod serialize;
pub mod coverage;

pub use types::{DepthChartEntry, Player, Position, PositionLists, PositionSlot, RankedJersey, SavePayload};
pub use ordering::players_for_position;
pub use merge::{apply_saved_ranks, saved_ranks};
pub use reorder::{apply_drag, reorder, DragMove};
pub use serialize::serialize;
pub use coverage::{position_coverage, PositionCoverage};

/// Builds every position's list: default order, then saved ranks on top
pub fn compute_position_lists(roster: &[Player], saved_chart: &[DepthChartEntry]) -> PositionLists {
    let ranks = saved_ranks(saved_chart);
    let mut lists = PositionLists::empty();
    for position in Position::all() {
        let ordered = players_for_position(roster, position);
        lists.set(position, apply_saved_ranks(ordered, ranks.get(&position)));
    }
    lists
}
