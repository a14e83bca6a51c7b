//! Character screen for the humidistat UI
//!
//! This crate provides [`Screen`], a text-mode character grid that
//! implements the `CharDisplay` trait from `humidistat-core`.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────┐  write_at   ┌────────────┐  flush   ┌──────────┐
//! │  ControllerUI  │ ──────────► │   Screen   │ ───────► │ HD44780  │
//! └────────────────┘             └────────────┘  (dirty) └──────────┘
//! ```
//!
//! The UI draws into the screen; a board task copies dirty screens to the
//! LCD over its parallel or I2C bus. On the host, the screen doubles as a
//! test display that records what the UI painted.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod screen;

pub use screen::{Lcd1602, Lcd2004, Screen};
