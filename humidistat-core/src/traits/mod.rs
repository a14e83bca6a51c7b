//! Collaborator traits
//!
//! These traits define the interface between the controller UI and the
//! board: the LCD, the keypad, the humidistat and the thermometers.
//!
//! Every trait is also implemented for `&mut T` (`&T` for [`Clock`]), so a
//! board can lend its peripherals to the UI and keep ownership of them.

pub mod clock;
pub mod display;
pub mod humidistat;
pub mod input;
pub mod sensor;

pub use clock::Clock;
pub use display::{CharDisplay, DisplayError};
pub use humidistat::SetpointStore;
pub use input::{Button, ButtonSource};
pub use sensor::{SensorError, TemperatureSensor, MAX_TEMPERATURE_SOURCES};
