//! Arranging the flattened menu into a multi-column grid.
//!
//! Every group renders as one single-column segment; segments sit side by
//! side up to the column count and wrap into further bands below. The grid
//! is plain data: rendering it to the terminal lives in `ui::menu_view`.

use super::flatten::{Flattened, IndexedEntry};
use crate::config::{ColumnMode, Entry};
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_width::UnicodeWidthStr;

/// ANSI SGR sequences; styling never counts toward a cell's width.
static ANSI_ESCAPE: Lazy<Regex> = Lazy::new(|| Regex::new("\x1b\\[[0-9;]*m").unwrap());

const TAG_STYLE: &str = "\x1b[36m";
const RESET_STYLE: &str = "\x1b[0m";

/// Width of the text as printed: styling stripped, then terminal cell width.
pub fn visible_width(text: &str) -> usize {
    UnicodeWidthStr::width(ANSI_ESCAPE.replace_all(text, "").as_ref())
}

/// One populated grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Global index of the entry this cell displays.
    pub index: u32,
    pub text: String,
}

/// One wrapped row of group segments: up to `columns` groups side by side,
/// shorter segments padded with blank cells to the tallest one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Band {
    pub headers: Vec<String>,
    /// Row-major cells; every row has exactly `headers.len()` slots.
    pub rows: Vec<Vec<Option<Cell>>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Column count the bands were wrapped to.
    pub columns: usize,
    /// Width every cell pads to when rendered.
    pub col_width: usize,
    pub bands: Vec<Band>,
}

impl Grid {
    pub fn is_empty(&self) -> bool {
        self.bands.iter().all(|band| band.rows.is_empty())
    }
}

/// Lays the flattened menu out as a grid. `ColumnMode::Auto` derives the
/// column count from the terminal width and the widest cell, never less
/// than one column; degenerate empty input also lays out as one column.
pub fn layout(flattened: &Flattened, terminal_width: usize, mode: ColumnMode, color: bool) -> Grid {
    let mut segments: Vec<(String, Vec<Cell>)> = flattened
        .labels
        .iter()
        .map(|label| (label.to_string(), Vec::new()))
        .collect();
    for indexed in &flattened.entries {
        segments[indexed.group].1.push(Cell {
            index: indexed.index,
            text: display_text(indexed, color),
        });
    }

    let max_label_width = segments
        .iter()
        .flat_map(|(_, cells)| cells.iter())
        .map(|cell| visible_width(&cell.text))
        .max()
        .unwrap_or(0);

    let columns = match mode {
        ColumnMode::Fixed(n) => n.max(1),
        ColumnMode::Auto if max_label_width == 0 => 1,
        ColumnMode::Auto => (terminal_width / max_label_width).max(1),
    };

    let bands = segments
        .chunks(columns)
        .map(|chunk| {
            let height = chunk.iter().map(|(_, cells)| cells.len()).max().unwrap_or(0);
            let rows = (0..height)
                .map(|row| chunk.iter().map(|(_, cells)| cells.get(row).cloned()).collect())
                .collect();
            Band {
                headers: chunk.iter().map(|(label, _)| label.clone()).collect(),
                rows,
            }
        })
        .collect();

    Grid {
        columns,
        col_width: max_label_width,
        bands,
    }
}

/// Menu line for one entry: zero-padded index, display name, and the
/// capability tag over {lftp, mount} (ssh is implied and never tagged).
fn display_text(indexed: &IndexedEntry, color: bool) -> String {
    match capability_tag(indexed.entry) {
        Some(tag) if color => {
            format!("{:02} {} {}({}){}", indexed.index, indexed.entry.name, TAG_STYLE, tag, RESET_STYLE)
        }
        Some(tag) => format!("{:02} {} ({})", indexed.index, indexed.entry.name, tag),
        None => format!("{:02} {}", indexed.index, indexed.entry.name),
    }
}

fn capability_tag(entry: &Entry) -> Option<String> {
    let mut tags = Vec::new();
    if entry.transfer_user.is_some() {
        tags.push("lftp");
    }
    if entry.mount.is_some() {
        tags.push("mount");
    }
    if tags.is_empty() { None } else { Some(tags.join(",")) }
}

#[cfg(test)]
#[path = "../test/menu/layout.rs"]
mod tests;
