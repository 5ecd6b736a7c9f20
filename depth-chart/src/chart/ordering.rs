use std::cmp::Ordering;
use super::types::{Player, Position};

/// Significant digits of an all-digit jersey number ("007" -> "7", "00" -> ""),
/// or None if it is not a number
pub fn jersey_sort_key(jersey_number: &str) -> Option<&str> {
    let trimmed = jersey_number.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(trimmed.trim_start_matches('0'))
}

/// Compares jersey numbers numerically, at any length. Non-numeric jerseys
/// sort after every numeric one and compare equal to each other.
pub fn compare_jersey_numbers(a: &str, b: &str) -> Ordering {
    match (jersey_sort_key(a), jersey_sort_key(b)) {
        (Some(a), Some(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Default depth chart order for one position
///
/// Keeps players with a positive allocation at `position`, then sorts by
/// allocation (highest first), slot priority (first slot first) and jersey
/// number. The sort is stable, so full ties keep roster order.
pub fn players_for_position(roster: &[Player], position: Position) -> Vec<Player> {
    let mut eligible: Vec<(usize, f64, &Player)> = roster
        .iter()
        .filter_map(|player| {
            player
                .slot_for(position)
                .filter(|(_, allocation)| *allocation > 0.0)
                .map(|(slot, allocation)| (slot, allocation, player))
        })
        .collect();

    eligible.sort_by(|a, b| {
        b.1.total_cmp(&a.1)
            .then(a.0.cmp(&b.0))
            .then_with(|| compare_jersey_numbers(&a.2.jersey_number, &b.2.jersey_number))
    });

    eligible.into_iter().map(|(_, _, player)| player.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jerseys(players: &[Player]) -> Vec<&str> {
        players.iter().map(|p| p.jersey_number.as_str()).collect()
    }

    #[test]
    fn allocation_tie_falls_back_to_jersey_number() {
        let roster = vec![
            Player::new("a", "23").with_slot(Position::Pitcher, 0.6),
            Player::new("b", "5").with_slot(Position::Pitcher, 0.6),
        ];
        assert_eq!(jerseys(&players_for_position(&roster, Position::Pitcher)), vec!["5", "23"]);
    }

    #[test]
    fn higher_allocation_ranks_first() {
        let roster = vec![
            Player::new("a", "1").with_slot(Position::Catcher, 0.25),
            Player::new("b", "2").with_slot(Position::Catcher, 0.75),
        ];
        assert_eq!(jerseys(&players_for_position(&roster, Position::Catcher)), vec!["2", "1"]);
    }

    #[test]
    fn earlier_slot_beats_later_slot() {
        let roster = vec![
            Player::new("a", "1")
                .with_slot(Position::Pitcher, 0.5)
                .with_slot(Position::Shortstop, 0.5),
            Player::new("b", "2").with_slot(Position::Shortstop, 0.5),
        ];
        assert_eq!(jerseys(&players_for_position(&roster, Position::Shortstop)), vec!["2", "1"]);
    }

    #[test]
    fn jersey_numbers_compare_numerically() {
        let roster = vec![
            Player::new("a", "10").with_slot(Position::LeftField, 0.5),
            Player::new("b", "9").with_slot(Position::LeftField, 0.5),
            Player::new("c", "00").with_slot(Position::LeftField, 0.5),
        ];
        assert_eq!(
            jerseys(&players_for_position(&roster, Position::LeftField)),
            vec!["00", "9", "10"]
        );
    }

    #[test]
    fn long_digit_jerseys_still_compare_numerically() {
        let roster = vec![
            Player::new("a", "123456789012").with_slot(Position::CenterField, 0.5),
            Player::new("b", "99999999999").with_slot(Position::CenterField, 0.5),
            Player::new("c", "X").with_slot(Position::CenterField, 0.5),
            Player::new("d", "3").with_slot(Position::CenterField, 0.5),
        ];
        assert_eq!(
            jerseys(&players_for_position(&roster, Position::CenterField)),
            vec!["3", "99999999999", "123456789012", "X"]
        );
    }

    #[test]
    fn compare_handles_padding_and_signs() {
        assert_eq!(compare_jersey_numbers("00", "0"), Ordering::Equal);
        assert_eq!(compare_jersey_numbers("07", "10"), Ordering::Less);
        assert_eq!(compare_jersey_numbers("+5", "5"), Ordering::Greater);
    }

    #[test]
    fn non_numeric_jerseys_sort_last_in_roster_order() {
        let roster = vec![
            Player::new("a", "X").with_slot(Position::RightField, 0.5),
            Player::new("b", "88").with_slot(Position::RightField, 0.5),
            Player::new("c", "").with_slot(Position::RightField, 0.5),
        ];
        assert_eq!(
            jerseys(&players_for_position(&roster, Position::RightField)),
            vec!["88", "X", ""]
        );
    }

    #[test]
    fn zero_allocation_is_not_eligible() {
        let roster = vec![
            Player::new("a", "1").with_slot(Position::FirstBase, 0.0),
            Player::new("b", "2").with_slot(Position::SecondBase, 1.0),
        ];
        assert!(players_for_position(&roster, Position::FirstBase).is_empty());
        assert!(players_for_position(&roster, Position::Catcher).is_empty());
    }
}
