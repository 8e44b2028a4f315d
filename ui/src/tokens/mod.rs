// Design Token System
// Tailwind class tokens plus the pixel scales zoon styles need

pub mod animation;
pub mod spacing;
pub mod theme;
pub mod typography;
pub use animation::*;
pub use spacing::*;
pub use theme::*;
pub use typography::*;
