//! Configuration types
//!
//! Board-agnostic UI tuning. Boards that keep their settings in flash can
//! enable the `serde` feature and store `UiConfig` directly.

pub mod types;

pub use types::*;
