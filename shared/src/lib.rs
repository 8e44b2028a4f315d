//! Domain types shared by the SiteWatch frontend and backend.

pub mod alert;
pub mod env_config;
pub mod metrics;
pub mod validation;

pub use alert::*;
pub use env_config::*;
pub use metrics::*;
pub use validation::*;
