//! Setpoint store trait

/// The humidistat as seen by the UI
///
/// Owns the humidity setpoint and the latest measured humidity. The UI
/// adjusts the setpoint in place; it never replaces the store.
pub trait SetpointStore {
    /// Latest relative humidity reading in percent
    ///
    /// May be NaN if the humidity sensor has no valid reading.
    fn process_variable(&self) -> f32;

    /// Current setpoint in percent
    fn setpoint(&self) -> u8;

    /// Mutable access to the setpoint
    fn setpoint_mut(&mut self) -> &mut u8;
}

impl<T: SetpointStore + ?Sized> SetpointStore for &mut T {
    fn process_variable(&self) -> f32 {
        T::process_variable(self)
    }

    fn setpoint(&self) -> u8 {
        T::setpoint(self)
    }

    fn setpoint_mut(&mut self) -> &mut u8 {
        T::setpoint_mut(self)
    }
}
