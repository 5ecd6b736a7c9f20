use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use crate::chart::{Position, PositionCoverage, PositionLists};
use crate::error::Result;

/// Formats a player as `#jersey name`
pub fn format_player_name(jersey_number: &str, name: &str) -> String {
    if name.is_empty() {
        format!("#{}", jersey_number)
    } else {
        format!("#{} {}", jersey_number, name)
    }
}

fn format_allocation(allocation: f64) -> String {
    format!("{:.0}%", allocation * 100.0)
}

/// Renders the depth chart as text, one block per position
pub fn render_depth_chart(title: &str, lists: &PositionLists) -> String {
    let mut out = format!("** {} **\n", title);
    for (position, players) in lists.iter() {
        out.push_str(&format!("{}:\n", position));
        if players.is_empty() {
            out.push_str("  [EMPTY]\n");
            continue;
        }
        for (index, player) in players.iter().enumerate() {
            out.push_str(&format!(
                "  {}. {} ({})\n",
                index + 1,
                format_player_name(&player.jersey_number, &player.full_name()),
                format_allocation(player.allocation_for(position)),
            ));
        }
    }
    out
}

/// Writes a depth chart to a file
pub fn write_depth_chart_to_file(title: &str, lists: &PositionLists, filename: &str) -> Result<()> {
    let mut file = File::create(filename)?;
    file.write_all(render_depth_chart(title, lists).as_bytes())?;
    Ok(())
}

pub fn print_depth_chart(title: &str, lists: &PositionLists) {
    print!("{}", render_depth_chart(title, lists));
}

/// Prints player counts and total allocation per position
pub fn print_coverage(coverage: &BTreeMap<Position, PositionCoverage>) {
    println!("\n=== Position Coverage ===");
    for (position, stats) in coverage {
        let marker = if stats.total_allocation < 1.0 { "  ⚠️  under-covered" } else { "" };
        println!(
            "  {:<3} {} player(s), {} total{}",
            position.to_string(),
            stats.players,
            format_allocation(stats.total_allocation),
            marker
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{compute_position_lists, Player};

    #[test]
    fn formats_names() {
        assert_eq!(format_player_name("5", "Ada Baker"), "#5 Ada Baker");
        assert_eq!(format_player_name("5", ""), "#5");
    }

    #[test]
    fn renders_every_position() {
        let roster = vec![
            Player::new("a", "5").with_name("Ada", "Baker").with_slot(Position::Pitcher, 0.6),
        ];
        let text = render_depth_chart("Team 1", &compute_position_lists(&roster, &[]));

        assert!(text.starts_with("** Team 1 **\nP:\n  1. #5 Ada Baker (60%)\n"));
        assert!(text.contains("RF:\n  [EMPTY]\n"));
        assert_eq!(text.matches("[EMPTY]").count(), 8);
    }

    #[test]
    fn writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.txt");
        let lists = PositionLists::empty();
        write_depth_chart_to_file("Empty", &lists, path.to_str().unwrap()).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render_depth_chart("Empty", &lists));
    }
}
