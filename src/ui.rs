//! Terminal-facing input and output for the menu.

mod menu_view;
mod prompt;

pub use menu_view::{render_grid, terminal_width};
pub use prompt::{print_mode_menu, read_line, read_line_timeout};
