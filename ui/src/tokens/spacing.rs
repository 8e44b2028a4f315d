// Spacing Token System

/// 4px spacing
pub const SPACING_4: u32 = 4;

/// 8px spacing
pub const SPACING_8: u32 = 8;

/// 12px spacing
pub const SPACING_12: u32 = 12;

/// 16px spacing
pub const SPACING_16: u32 = 16;

/// 24px spacing
pub const SPACING_24: u32 = 24;

/// 32px spacing
pub const SPACING_32: u32 = 32;
