use serde::{Serialize, Deserialize};
use tracing::debug;
use super::types::{Position, PositionLists};

/// A drag of one player from one list index to another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragMove {
    pub source: Position,
    pub from_index: usize,
    pub destination: Position,
    pub to_index: usize,
}

impl DragMove {
    pub fn within(position: Position, from_index: usize, to_index: usize) -> Self {
        Self {
            source: position,
            from_index,
            destination: position,
            to_index,
        }
    }
}

/// Moves the player at `from` to `to` within one position's list and returns
/// the new lists. Only `position` changes. An out-of-range `from` leaves the
/// lists unchanged; `to` past the end appends.
pub fn reorder(lists: &PositionLists, position: Position, from: usize, to: usize) -> PositionLists {
    let mut next = lists.clone();
    let list = next.list_mut(position);

    if from >= list.len() {
        debug!(%position, from, len = list.len(), "reorder source index out of range");
        return next;
    }

    let player = list.remove(from);
    let to = to.min(list.len());
    list.insert(to, player);
    next
}

/// Applies a drag move. Moves between two different positions are rejected
/// and return the lists unchanged.
pub fn apply_drag(lists: &PositionLists, mv: &DragMove) -> PositionLists {
    if mv.source != mv.destination {
        debug!(source = %mv.source, destination = %mv.destination, "rejected cross-position move");
        return lists.clone();
    }
    reorder(lists, mv.source, mv.from_index, mv.to_index)
}
