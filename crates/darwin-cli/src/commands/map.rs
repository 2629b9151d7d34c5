//! Print the island's location table.

use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use darwin_core::Island;

/// Render and print the location table.
pub fn run(world: Option<&Path>) -> miette::Result<()> {
    let island = super::load_island(world)?;
    println!("{}", table(&island));
    println!();
    println!("  {} locations on {}", island.grid().len(), island.meta().name);
    Ok(())
}

pub(crate) fn table(island: &Island) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "X", "Y", "Terrain"]);

    for summary in island.grid().summaries() {
        table.add_row(vec![
            summary.id.to_string(),
            summary.name,
            summary.x.to_string(),
            summary.y.to_string(),
            summary.terrain.label().to_string(),
        ]);
    }

    table
}
