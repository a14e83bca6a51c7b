//! One-shot startup screens
//!
//! Each screen moves `Pending -> Drawn -> Expired` once. Expired screens
//! stay expired until the caller re-arms them.

use core::fmt::Write;

use heapless::String;

/// Name shown on the startup screens
pub const PRODUCT_NAME: &str = "Humidistat";

/// Welcome message, one entry per row
pub const SPLASH_LINES: [&str; 2] = ["   Humidistat", "    Welcome!"];

/// One line of a startup screen
pub type Line = String<20>;

/// Which one-shot screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenKind {
    Splash,
    Info,
}

/// Life cycle of a one-shot screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OneShot {
    /// Not painted yet
    #[default]
    Pending,
    /// On screen since `since_ms`
    Drawn { since_ms: u32 },
    /// Dwell time over, display handed back
    Expired,
}

impl OneShot {
    /// Whether the screen has been painted in this activation
    pub fn is_drawn(self) -> bool {
        !matches!(self, OneShot::Pending)
    }

    /// Whether the screen has finished
    pub fn is_expired(self) -> bool {
        matches!(self, OneShot::Expired)
    }

    /// Whether the dwell time is over at `now_ms`
    pub fn dwell_elapsed(self, now_ms: u32, duration_ms: u32) -> bool {
        match self {
            OneShot::Pending => false,
            OneShot::Drawn { since_ms } => now_ms.wrapping_sub(since_ms) >= duration_ms,
            OneShot::Expired => true,
        }
    }
}

/// Device information: name, version, sensor count and tolerance
pub fn info_lines(sensor_count: usize, tolerance: u8) -> [Line; 2] {
    let mut title = Line::new();
    let _ = write!(title, "{} {}", PRODUCT_NAME, env!("CARGO_PKG_VERSION"));

    let mut detail = Line::new();
    let _ = write!(detail, "Temp:{} Tol:{}%", sensor_count, tolerance);

    [title, detail]
}
