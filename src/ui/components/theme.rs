//! Shared UI color constants.

use ratatui::style::Color;

pub const ACCENT_PRIMARY: Color = Color::Rgb(121, 134, 203);
pub const ACCENT_ERROR: Color = Color::Rgb(229, 115, 115);
pub const ACCENT_SUCCESS: Color = Color::Rgb(129, 199, 132);

pub const TEXT_BRIGHT: Color = Color::Rgb(240, 240, 240);
pub const TEXT_PRIMARY: Color = Color::Rgb(210, 210, 210);
pub const TEXT_SECONDARY: Color = Color::Rgb(170, 170, 170);
pub const TEXT_MUTED: Color = Color::Rgb(120, 120, 120);
pub const TEXT_FAINT: Color = Color::Rgb(80, 80, 80);

pub const BORDER_DEFAULT: Color = Color::Rgb(70, 70, 70);
pub const BORDER_FOCUSED: Color = ACCENT_PRIMARY;

pub const SELECTED_BG: Color = Color::Rgb(40, 60, 80);
pub const HEADER_BG: Color = Color::Rgb(35, 35, 35);
pub const FOOTER_BG: Color = Color::Rgb(25, 25, 25);
pub const KEY_HINT_BG: Color = Color::Rgb(60, 60, 60);
