use colored::Color;

pub const PRIMARY: Color = Color::Cyan;
pub const ACCENT: Color = Color::Green;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
