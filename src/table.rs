// SPDX-License-Identifier: Apache-2.0

//! The color table as a printable comfy-table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};

use crate::types::{ANSI_RESET, Color};

/// Creates a new table with the crate's border style.
pub fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.apply_modifier(UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// One row per color: name, ANSI escape (escaped for display), CSS value and
/// a sample. Samples carry raw escapes only when `ansi_samples` is set.
pub fn palette_table(ansi_samples: bool) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Color", "ANSI", "CSS", "Sample"]);
    for color in Color::ALL {
        let sample = if ansi_samples {
            format!("{}{}{}", color.ansi(), color.name(), ANSI_RESET)
        } else {
            color.name().to_string()
        };
        table.add_row(vec![
            color.name().to_string(),
            color.ansi().escape_default().to_string(),
            color.css().to_string(),
            sample,
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_lists_every_color() {
        let rendered = palette_table(false).to_string();
        for color in Color::ALL {
            assert!(rendered.contains(color.name()));
        }
        assert!(rendered.contains("\\u{1b}[31m"));
        assert!(!rendered.contains('\x1b'));
    }
}
