//! Millisecond time source

/// Monotonic millisecond clock
///
/// The value is allowed to wrap around at `u32::MAX`; all interval checks
/// in the UI use wrapping subtraction.
pub trait Clock {
    /// Milliseconds since an arbitrary epoch (usually boot)
    fn now_ms(&self) -> u32;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_ms(&self) -> u32 {
        T::now_ms(self)
    }
}
