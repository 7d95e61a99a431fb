//! Rendering the menu grid as a plain-text table on stdout.

use crate::menu::{Grid, visible_width};

const HEADER_STYLE: &str = "\x1b[1;34m";
const RESET_STYLE: &str = "\x1b[0m";

/// Width of the terminal the menu renders into, in character cells. Falls
/// back to 80 columns when the probe fails (e.g. output is not a tty).
pub fn terminal_width() -> usize {
    match crossterm::terminal::size() {
        Ok((width, _)) => width as usize,
        Err(_) => 80,
    }
}

/// The grid as one printable string. Cells pad to the grid's column width;
/// absent cells pad blank so the segments stay aligned within each band.
pub fn render_grid(grid: &Grid, color: bool) -> String {
    let mut out = String::new();

    for (band_pos, band) in grid.bands.iter().enumerate() {
        if band_pos > 0 {
            out.push('\n');
        }

        let mut header_line = String::new();
        for (col, header) in band.headers.iter().enumerate() {
            if col > 0 {
                header_line.push_str("  ");
            }
            let styled = if color {
                format!("{}{}{}", HEADER_STYLE, header, RESET_STYLE)
            } else {
                header.clone()
            };
            header_line.push_str(&pad(&styled, grid.col_width));
        }
        out.push_str(header_line.trim_end());
        out.push('\n');

        for row in &band.rows {
            let mut line = String::new();
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    line.push_str("  ");
                }
                match cell {
                    Some(cell) => line.push_str(&pad(&cell.text, grid.col_width)),
                    None => line.push_str(&" ".repeat(grid.col_width)),
                }
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }

    out
}

/// Pads to `width` printable columns; styling is excluded from the measure.
fn pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(visible_width(text));
    format!("{}{}", text, " ".repeat(padding))
}

#[cfg(test)]
#[path = "../test/ui/menu_view.rs"]
mod tests;
