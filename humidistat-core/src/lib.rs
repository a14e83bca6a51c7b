//! Board-agnostic core logic for the humidistat controller UI
//!
//! This crate contains the user interface of the humidity controller
//! without any dependency on a specific LCD, keypad or sensor:
//!
//! - Collaborator traits (character display, buttons, setpoint store,
//!   temperature sensors, millisecond clock)
//! - `ControllerUI`: display refresh, setpoint blinking, debounced
//!   setpoint adjustment and the one-shot splash/info screens
//! - UI tuning configuration

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod traits;
pub mod ui;

pub use config::{ConfigError, UiConfig};
pub use ui::ControllerUI;
