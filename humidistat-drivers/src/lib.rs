//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in humidistat-core:
//!
//! - Keypads (LCD shield resistive ladder, discrete GPIO buttons)
//! - Temperature sensors (NTC thermistor)
//! - In-memory setpoint store

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod keypad;
pub mod sensor;
pub mod store;

pub use keypad::{GpioButtons, KeypadLadder};
pub use sensor::Ntc10kSensor;
pub use store::MemoryHumidistat;
