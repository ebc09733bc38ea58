//! Centralized theme configuration for all UI components.
//!
//! Render files use `theme::module::CONSTANT` instead of hardcoding
//! `Color::*` values.

use ratatui::style::Color;

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const YELLOW: Color = Color::Rgb(255, 217, 61);
    pub const GREEN: Color = Color::Rgb(107, 203, 119);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);
}

/// Checkbox group styles
pub mod multi_check {
    use super::*;

    pub const LABEL: Color = palette::PURPLE;
    pub const BORDER: Color = palette::TEXT_DIM;

    pub const CHECKED: Color = palette::GREEN;
    pub const UNCHECKED: Color = palette::TEXT_MUTED;
    pub const OPTION_TEXT: Color = palette::TEXT;
    // Select All stands apart from regular options
    pub const AGGREGATE_TEXT: Color = palette::CYAN;

    pub const CURSOR_BG: Color = palette::BG_HIGHLIGHT;
}

/// Footer line with key hints and selection count
pub mod footer {
    use super::*;

    pub const KEY: Color = Color::Rgb(130, 133, 158);
    pub const DESCRIPTION: Color = Color::Rgb(90, 92, 119);
    pub const SEPARATOR: Color = Color::Rgb(90, 92, 119);
    pub const COUNT: Color = palette::GREEN;
    pub const WARNING: Color = palette::YELLOW;
}
