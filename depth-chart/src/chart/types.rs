use std::collections::BTreeMap;
use serde::{Serialize, Deserialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Defensive positions, in scorebook order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Position {
    #[serde(rename = "P")]
    #[strum(to_string = "P", serialize = "pitcher")]
    Pitcher,
    #[serde(rename = "C")]
    #[strum(to_string = "C", serialize = "catcher")]
    Catcher,
    #[serde(rename = "1B")]
    #[strum(to_string = "1B", serialize = "first base")]
    FirstBase,
    #[serde(rename = "2B")]
    #[strum(to_string = "2B", serialize = "second base")]
    SecondBase,
    #[serde(rename = "3B")]
    #[strum(to_string = "3B", serialize = "third base")]
    ThirdBase,
    #[serde(rename = "SS")]
    #[strum(to_string = "SS", serialize = "shortstop")]
    Shortstop,
    #[serde(rename = "LF")]
    #[strum(to_string = "LF", serialize = "left field")]
    LeftField,
    #[serde(rename = "CF")]
    #[strum(to_string = "CF", serialize = "center field")]
    CenterField,
    #[serde(rename = "RF")]
    #[strum(to_string = "RF", serialize = "right field")]
    RightField,
}

impl Position {
    /// All nine positions in scorebook order
    pub fn all() -> impl Iterator<Item = Position> {
        Position::iter()
    }
}

/// One of a player's assigned positions and the share of defensive time there
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionSlot {
    pub position: Position,
    pub allocation: f64, // 0.0..=1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub jersey_number: String,
    pub first_name: String,
    pub last_name: String,
    /// Slot order is priority order: index 0 is the player's first position
    pub slots: Vec<PositionSlot>,
}

impl Player {
    pub const MAX_SLOTS: usize = 4;

    pub fn new(id: impl Into<String>, jersey_number: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            jersey_number: jersey_number.into(),
            first_name: String::new(),
            last_name: String::new(),
            slots: Vec::new(),
        }
    }

    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    /// Adds a position slot; slots past the fourth are ignored
    pub fn with_slot(mut self, position: Position, allocation: f64) -> Self {
        if self.slots.len() < Self::MAX_SLOTS {
            self.slots.push(PositionSlot { position, allocation });
        }
        self
    }

    /// Returns the (slot index, allocation) of the first slot holding `position`
    pub fn slot_for(&self, position: Position) -> Option<(usize, f64)> {
        self.slots
            .iter()
            .enumerate()
            .find(|(_, slot)| slot.position == position)
            .map(|(index, slot)| (index, slot.allocation))
    }

    pub fn allocation_for(&self, position: Position) -> f64 {
        self.slot_for(position).map(|(_, allocation)| allocation).unwrap_or(0.0)
    }

    pub fn plays(&self, position: Position) -> bool {
        self.allocation_for(position) > 0.0
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

/// A persisted rank for one jersey number at one position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthChartEntry {
    pub position: Position,
    pub jersey_number: String,
    #[serde(rename = "player_rank")]
    pub rank: u32,
}

/// Ordered players for every position. All nine positions are always present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PositionLists {
    lists: BTreeMap<Position, Vec<Player>>,
}

impl PositionLists {
    pub fn empty() -> Self {
        Self {
            lists: Position::all().map(|p| (p, Vec::new())).collect(),
        }
    }

    pub fn get(&self, position: Position) -> &[Player] {
        self.lists.get(&position).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, &[Player])> {
        self.lists.iter().map(|(p, players)| (*p, players.as_slice()))
    }

    /// Jersey numbers at `position` in current order
    pub fn jersey_order(&self, position: Position) -> Vec<&str> {
        self.get(position).iter().map(|p| p.jersey_number.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.values().all(Vec::is_empty)
    }

    pub(crate) fn set(&mut self, position: Position, players: Vec<Player>) {
        self.lists.insert(position, players);
    }

    pub(crate) fn list_mut(&mut self, position: Position) -> &mut Vec<Player> {
        self.lists.entry(position).or_default()
    }
}

impl Default for PositionLists {
    fn default() -> Self {
        Self::empty()
    }
}

/// One row of a saved position list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedJersey {
    pub jersey_number: String,
    #[serde(rename = "player_rank")]
    pub rank: u32,
}

/// Body of `POST /teams/{team_id}/depth_chart_post`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavePayload {
    pub team_id: String,
    pub depth_chart: BTreeMap<Position, Vec<RankedJersey>>,
}

impl SavePayload {
    /// Flattens the payload back into persisted entries
    pub fn to_entries(&self) -> Vec<DepthChartEntry> {
        self.depth_chart
            .iter()
            .flat_map(|(position, ranked)| {
                ranked.iter().map(move |r| DepthChartEntry {
                    position: *position,
                    jersey_number: r.jersey_number.clone(),
                    rank: r.rank,
                })
            })
            .collect()
    }
}
