//! Display helpers
//!
//! Colorized rendering of listing lines. Directories render blue, anything
//! with a write flag green, everything else yellow. Colors are presentation
//! only; no command reads them back.

use colored::{Color, ColoredString, Colorize};

/// Picks the display color for a permission string.
pub fn permission_color(permission: &str) -> Color {
    if permission.starts_with('d') {
        Color::Blue
    } else if permission.contains('w') {
        Color::Green
    } else {
        Color::Yellow
    }
}

/// Formats one listing line, `permission` and `name` two spaces apart.
pub fn entry_line(permission: &str, name: &str) -> ColoredString {
    format!("{}  {}", permission, name).color(permission_color(permission))
}
