use crate::error::Result;
use crate::math::{Matrix, Vector};

/// Field width used by the text renderers: a 24 character number plus two
/// spaces of separation.
pub const DEFAULT_COLUMN_WIDTH: usize = 26;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub column_width: usize,
    /// Digits after the decimal point. `None` prints the shortest
    /// representation that round-trips.
    pub precision: Option<usize>,
    pub scientific: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            column_width: DEFAULT_COLUMN_WIDTH,
            precision: None,
            scientific: false,
        }
    }
}

fn format_entry(value: f64, options: &RenderOptions) -> String {
    match (options.precision, options.scientific) {
        (Some(p), true) => format!("{:.*e}", p, value),
        (Some(p), false) => format!("{:.*}", p, value),
        (None, true) => format!("{:e}", value),
        (None, false) => format!("{}", value),
    }
}

/// Lay out the entries of `row` left-aligned in fixed-width fields.
pub fn render_row(row: &Vector, options: &RenderOptions) -> String {
    let mut line = String::new();
    for value in row.iter() {
        let entry = format_entry(*value, options);
        // always keep at least one space between entries
        let width = options.column_width.max(entry.len() + 1);
        line.push_str(&format!("{:<width$}", entry, width = width));
    }
    line.trim_end().to_string()
}

/// One line per matrix row, columns aligned.
pub fn render_matrix(matrix: &Matrix, options: &RenderOptions) -> Result<String> {
    let mut out = String::new();
    for i in 0..matrix.row_count() {
        out.push_str(&render_row(&matrix.row_at(i)?, options));
        out.push('\n');
    }
    Ok(out)
}

pub fn print_matrix(matrix: &Matrix, options: &RenderOptions) -> Result<()> {
    print!("{}", render_matrix(matrix, options)?);
    Ok(())
}
