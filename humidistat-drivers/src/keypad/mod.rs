//! Keypad implementations

pub mod gpio;
pub mod ladder;

pub use gpio::GpioButtons;
pub use ladder::KeypadLadder;
