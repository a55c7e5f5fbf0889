//! Mirrors command - List the built-in mirrors

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};

use crate::config::{Mirror, SOURCE_PREFIX};

/// Render the mirror table
pub fn execute() -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Name"),
        Cell::new("Rewrites"),
        Cell::new("To"),
    ]);

    for mirror in Mirror::ALL {
        let name = if mirror == Mirror::default() {
            format!("{} (default)", mirror)
        } else {
            mirror.to_string()
        };
        table.add_row(vec![
            Cell::new(name),
            Cell::new(SOURCE_PREFIX),
            Cell::new(mirror.target_prefix()),
        ]);
    }

    let mut output = table.to_string();
    output.push_str(&format!("\n\n{} mirrors available", Mirror::ALL.len()));
    output
}
