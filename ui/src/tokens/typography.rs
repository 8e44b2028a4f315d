// Typography Token System

use zoon::*;

pub const FONT_FAMILY_SANS: &str = "'Inter', 'system-ui', 'Segoe UI', 'Arial', sans-serif";
pub const FONT_FAMILY_MONO: &str = "'FiraCode', 'Menlo', 'Monaco', 'Consolas', monospace";

pub const FONT_SIZE_12: u32 = 12;
pub const FONT_SIZE_14: u32 = 14;
pub const FONT_SIZE_16: u32 = 16;
pub const FONT_SIZE_20: u32 = 20;
pub const FONT_SIZE_30: u32 = 30;

pub fn font_sans() -> impl Style<'static> {
    Font::new().family([FontFamily::new(FONT_FAMILY_SANS)])
}

pub fn font_mono() -> impl Style<'static> {
    Font::new().family([FontFamily::new(FONT_FAMILY_MONO)])
}
