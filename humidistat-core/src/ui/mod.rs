//! Controller user interface
//!
//! One row of live values (humidity, setpoint, temperatures) on a
//! character LCD, with the setpoint adjusted from the keypad:
//!
//! - UP/DOWN: fine adjustment (±1 %)
//! - LEFT/RIGHT: coarse adjustment (± `adjust_step`)
//!
//! The setpoint blinks while the measured humidity is outside the
//! tolerance band around it.

pub mod adjust;
pub mod blink;
pub mod controller;
pub mod render;
pub mod screens;

pub use adjust::{adjust_value, apply_button};
pub use blink::{deviation_exceeds, field_visible};
pub use controller::ControllerUI;
pub use screens::{OneShot, ScreenKind};
