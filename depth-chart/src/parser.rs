//! Coercion of loosely typed roster service payloads into typed values.
//!
//! The roster service sends numbers as strings about as often as it sends
//! them as numbers, and leaves fields out freely. Only a payload with the
//! wrong overall shape is an error; bad records are skipped and bad numeric
//! fields are coerced.

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

use crate::chart::{DepthChartEntry, Player, Position};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected a JSON object for {0}")]
    NotAnObject(&'static str),
    #[error("expected a JSON array for {0}")]
    NotAnArray(&'static str),
    #[error("missing field '{0}'")]
    MissingField(&'static str),
}

/// Reads a string or number field as trimmed text. Empty strings count as absent.
fn parse_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(n) => match n.as_u64() {
            Some(whole) => Some(whole.to_string()),
            None => n.as_f64().map(|f| {
                if f.fract() == 0.0 {
                    format!("{}", f as i64)
                } else {
                    f.to_string()
                }
            }),
        },
        _ => None,
    }
}

/// Reads a number or numeric string, returning None if neither
fn parse_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Allocation share clamped into 0..=1; anything unparseable is 0
pub fn parse_allocation(value: Option<&Value>) -> f64 {
    match parse_number(value) {
        Some(share) if share.is_finite() => share.clamp(0.0, 1.0),
        _ => 0.0,
    }
}

/// Rank must be a whole number >= 1
fn parse_rank(value: Option<&Value>) -> Option<u32> {
    let rank = parse_number(value)?;
    if rank >= 1.0 && rank.fract() == 0.0 && rank <= u32::MAX as f64 {
        Some(rank as u32)
    } else {
        None
    }
}

fn parse_position(value: Option<&Value>) -> Option<Position> {
    parse_text(value)?.parse().ok()
}

fn field<'a>(record: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|name| record.get(*name).filter(|v| !v.is_null()))
}

/// Parses one roster record. Returns None for records that cannot be
/// depth-charted (not an object, no jersey number).
pub fn parse_player(index: usize, value: &Value) -> Option<Player> {
    let Some(record) = value.as_object() else {
        warn!(index, "skipping roster record that is not an object");
        return None;
    };

    let Some(jersey_number) = parse_text(field(record, &["jersey_number", "jersey"])) else {
        warn!(index, "skipping roster record without a jersey number");
        return None;
    };

    let id = parse_text(field(record, &["player_id", "id"])).unwrap_or_else(|| jersey_number.clone());
    let first_name = parse_text(field(record, &["first_name"])).unwrap_or_default();
    let last_name = parse_text(field(record, &["last_name"])).unwrap_or_default();

    let mut player = Player::new(id, jersey_number).with_name(first_name, last_name);

    for slot in 1..=Player::MAX_SLOTS {
        let position_key = format!("position{}", slot);
        let allocation_key = format!("position{}_allocation", slot);

        let raw_position = record.get(&position_key);
        let Some(position) = parse_position(raw_position) else {
            if parse_text(raw_position).is_some() {
                warn!(index, slot, value = ?raw_position, "ignoring unknown position");
            }
            continue;
        };
        player = player.with_slot(position, parse_allocation(record.get(&allocation_key)));
    }

    Some(player)
}

/// Parses the body of `GET /teams/{id}/roster`: `{ "roster": [...] }`
pub fn parse_roster(body: &Value) -> Result<Vec<Player>, ParseError> {
    let object = body.as_object().ok_or(ParseError::NotAnObject("roster response"))?;
    let records = object.get("roster").ok_or(ParseError::MissingField("roster"))?;
    let records = records.as_array().ok_or(ParseError::NotAnArray("roster"))?;

    Ok(records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| parse_player(index, record))
        .collect())
}

/// Parses the body of `GET /teams/{id}/depth_chart`: an array of
/// `{team_id, position, jersey_number, player_rank}`. Unusable entries are skipped.
pub fn parse_depth_chart(body: &Value) -> Result<Vec<DepthChartEntry>, ParseError> {
    let records = body.as_array().ok_or(ParseError::NotAnArray("depth chart"))?;

    let entries = records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let record = record.as_object()?;
            let position = parse_position(record.get("position"));
            let jersey_number = parse_text(field(record, &["jersey_number", "jersey"]));
            let rank = parse_rank(record.get("player_rank"));
            match (position, jersey_number, rank) {
                (Some(position), Some(jersey_number), Some(rank)) => Some(DepthChartEntry {
                    position,
                    jersey_number,
                    rank,
                }),
                _ => {
                    warn!(index, "skipping unusable depth chart entry");
                    None
                }
            }
        })
        .collect();

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_mixed_string_and_number_fields() {
        let body = json!({
            "roster": [{
                "player_id": 17,
                "first_name": "Ada",
                "last_name": "Baker",
                "jersey_number": 5,
                "position1": "P",
                "position1_allocation": "0.6",
                "position2": "1b",
                "position2_allocation": 0.4
            }]
        });
        let roster = parse_roster(&body).unwrap();

        assert_eq!(roster.len(), 1);
        let player = &roster[0];
        assert_eq!(player.id, "17");
        assert_eq!(player.jersey_number, "5");
        assert_eq!(player.full_name(), "Ada Baker");
        assert_eq!(player.slot_for(Position::Pitcher), Some((0, 0.6)));
        assert_eq!(player.slot_for(Position::FirstBase), Some((1, 0.4)));
    }

    #[test]
    fn bad_allocations_coerce_to_zero_or_clamp() {
        assert_eq!(parse_allocation(Some(&json!("lots"))), 0.0);
        assert_eq!(parse_allocation(Some(&json!(null))), 0.0);
        assert_eq!(parse_allocation(None), 0.0);
        assert_eq!(parse_allocation(Some(&json!(-0.2))), 0.0);
        assert_eq!(parse_allocation(Some(&json!("1.5"))), 1.0);
    }

    #[test]
    fn skips_records_without_jersey() {
        let body = json!({
            "roster": [
                {"player_id": 1, "position1": "C", "position1_allocation": 1},
                {"player_id": 2, "jersey_number": "", "position1": "C", "position1_allocation": 1},
                "garbage",
                {"player_id": 3, "jersey_number": "12", "position1": "C", "position1_allocation": 1}
            ]
        });
        let roster = parse_roster(&body).unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].jersey_number, "12");
    }

    #[test]
    fn unknown_position_drops_only_that_slot() {
        let body = json!({
            "roster": [{
                "jersey_number": "8",
                "position1": "DH",
                "position1_allocation": 1,
                "position2": "LF",
                "position2_allocation": 0.5
            }]
        });
        let player = &parse_roster(&body).unwrap()[0];
        assert_eq!(player.slots.len(), 1);
        assert_eq!(player.slot_for(Position::LeftField), Some((0, 0.5)));
    }

    #[test]
    fn missing_id_falls_back_to_jersey() {
        let player = parse_player(0, &json!({"jersey_number": "44"})).unwrap();
        assert_eq!(player.id, "44");
        assert!(player.slots.is_empty());
    }

    #[test]
    fn wrong_roster_shape_is_an_error() {
        assert_eq!(parse_roster(&json!([])), Err(ParseError::NotAnObject("roster response")));
        assert_eq!(parse_roster(&json!({})), Err(ParseError::MissingField("roster")));
        assert_eq!(parse_roster(&json!({"roster": {}})), Err(ParseError::NotAnArray("roster")));
    }

    #[test]
    fn parses_depth_chart_entries() {
        let body = json!([
            {"team_id": 3, "position": "SS", "jersey_number": 9, "player_rank": 1},
            {"team_id": 3, "position": "SS", "jersey_number": "11", "player_rank": "2"},
            {"team_id": 3, "position": "XX", "jersey_number": "1", "player_rank": 1},
            {"team_id": 3, "position": "SS", "jersey_number": "2", "player_rank": 0},
            {"team_id": 3, "position": "SS", "player_rank": 3}
        ]);
        let entries = parse_depth_chart(&body).unwrap();
        assert_eq!(
            entries,
            vec![
                DepthChartEntry { position: Position::Shortstop, jersey_number: "9".into(), rank: 1 },
                DepthChartEntry { position: Position::Shortstop, jersey_number: "11".into(), rank: 2 },
            ]
        );
    }

    #[test]
    fn depth_chart_must_be_an_array() {
        assert_eq!(parse_depth_chart(&json!({"error": "none"})), Err(ParseError::NotAnArray("depth chart")));
    }
}
