use comfy_table::{presets::NOTHING, ContentArrangement, Table};

/// Render rows of cells as left-aligned, space-separated columns without any borders.
///
/// Every line is indented by two spaces and trailing whitespace is removed,
/// so the output is stable regardless of the terminal it's printed to.
pub fn columns<R, C>(rows: R) -> String
where
    R: IntoIterator<Item = Vec<C>>,
    C: Into<comfy_table::Cell>,
{
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Disabled);

    for row in rows {
        table.add_row(row);
    }

    // The preset doesn't draw any borders, only the default padding of one space on each side
    // of a cell remains.
    table
        .to_string()
        .lines()
        .map(|line| format!(" {}", line.trim_end()))
        .collect::<Vec<String>>()
        .join("\n")
}
