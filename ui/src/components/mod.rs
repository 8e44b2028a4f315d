// Component Library

pub mod button;
pub mod card;
pub mod icon;

pub use button::*;
pub use card::*;
pub use icon::*;
