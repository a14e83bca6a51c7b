//! Humidistat Hardware Abstraction Layer
//!
//! This crate defines the small set of hardware traits the humidistat
//! drivers are written against, so the keypad and thermistor drivers can
//! run on any board (and on the host in tests).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Board crate (main loop, LCD, ADC init) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  humidistat-drivers (keypad, NTC)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  humidistat-hal (this crate - traits)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`adc::AdcChannel`] - One-shot analog conversion
//! - [`gpio::InputPin`] - Digital input

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use adc::{AdcChannel, AdcError};
pub use gpio::{EhInputPin, InputPin};
