use std::path::Path;
use csv::Writer;
use crate::chart::PositionLists;
use crate::error::Result;

pub const CSV_HEADER: [&str; 5] = ["position", "rank", "jersey_number", "name", "allocation"];

/// Exports the depth chart as CSV, one row per (position, player)
///
/// Positions without players produce no rows. Allocation is the fractional
/// share for that row's position.
pub fn export_depth_chart_to_csv(lists: &PositionLists, csv_path: &Path) -> Result<()> {
    let mut wtr = Writer::from_path(csv_path)?;
    wtr.write_record(CSV_HEADER)?;

    for (position, players) in lists.iter() {
        let position_code = position.to_string();
        for (index, player) in players.iter().enumerate() {
            let rank = (index + 1).to_string();
            let name = player.full_name();
            let allocation = player.allocation_for(position).to_string();
            wtr.write_record([
                position_code.as_str(),
                rank.as_str(),
                player.jersey_number.as_str(),
                name.as_str(),
                allocation.as_str(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
