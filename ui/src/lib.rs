//! # SiteWatch UI
//!
//! Presentational components for the SiteWatch dashboard, styled through
//! a static set of Tailwind class tokens.
//!
//! ```rust,ignore
//! use sitewatch_ui::*;
//! use zoon::*;
//!
//! fn save_panel() -> impl Element {
//!     card("Settings", "Site notification preferences")
//!         .child_element(|| {
//!             loading_button("Save")
//!                 .button_type(ButtonType::Submit)
//!                 .on_click(|| zoon::println!("saved"))
//!                 .build()
//!                 .unify()
//!         })
//!         .build()
//! }
//! ```
//!
//! ## Components
//!
//! - **Card**: titled container with a header and a body
//! - **LoadingButton**: button with variants and a built-in loading state
//! - **Icon**: inline SVG icons
//!
//! ## Design Tokens
//!
//! - **Theme**: `colors`, `background`, `text`, `border` and `gradients`
//!   class strings, see [`tokens::THEME`]
//! - **Spacing / Typography**: pixel constants for zoon styles
//! - **Animation**: spinner and transitions

pub mod components;
pub mod tokens;

pub use components::*;
pub use tokens::*;

pub use zoon;
