/// Width of the date column.
pub const DATE_WIDTH: usize = 10;
/// Width of the description column; longer text is truncated.
pub const DESCRIPTION_WIDTH: usize = 25;
/// Width of the amount column in data rows.
pub const DATA_CHANGE_WIDTH: usize = 13;

const COLUMN_SEPARATOR: &str = " | ";
const ELLIPSIS: &str = "...";

/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Pads `text` with spaces up to `width` characters. Text that is already
/// wider is returned untouched.
pub fn render_cell(text: &str, width: usize, alignment: Alignment) -> String {
    let remaining = width.saturating_sub(text.chars().count());
    let mut cell = String::with_capacity(text.len() + remaining);
    if alignment == Alignment::Right {
        cell.push_str(&" ".repeat(remaining));
    }
    cell.push_str(text);
    if alignment == Alignment::Left {
        cell.push_str(&" ".repeat(remaining));
    }
    cell
}

/// Shortens a description to at most [`DESCRIPTION_WIDTH`] characters,
/// ending in `...` when anything was cut.
pub fn truncate_description(description: &str) -> String {
    if description.chars().count() <= DESCRIPTION_WIDTH {
        return description.to_string();
    }
    let keep = DESCRIPTION_WIDTH - ELLIPSIS.len();
    let mut truncated: String = description.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Lays out one report line, newline included.
pub fn format_row(date: &str, description: &str, change: &str, change_width: usize) -> String {
    let mut row = String::new();
    row.push_str(&render_cell(date, DATE_WIDTH, Alignment::Left));
    row.push_str(COLUMN_SEPARATOR);
    row.push_str(&render_cell(
        &truncate_description(description),
        DESCRIPTION_WIDTH,
        Alignment::Left,
    ));
    row.push_str(COLUMN_SEPARATOR);
    row.push_str(&render_cell(change, change_width, Alignment::Right));
    row.push('\n');
    row
}
