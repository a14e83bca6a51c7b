//! Controller UI state machine
//!
//! Drives one refresh/input cycle per call to [`ControllerUI::update`]:
//!
//! - redraws the status row every `refresh_interval_ms`
//! - polls the keypad, accepting at most one press per `input_interval_ms`
//!
//! Startup screens are shown with [`ControllerUI::splash`] and
//! [`ControllerUI::info`] before entering the update loop:
//!
//! ```ignore
//! while ui.splash()? {}
//! while ui.info()? {}
//! loop {
//!     ui.update()?;
//! }
//! ```

use crate::config::{ConfigError, UiConfig};
use crate::traits::{
    ButtonSource, CharDisplay, Clock, DisplayError, SetpointStore, TemperatureSensor,
    MAX_TEMPERATURE_SOURCES,
};

use super::adjust::adjust_value;
use super::blink::{deviation_exceeds, field_visible};
use super::render::{
    blank_field, percent_field, round_percent, temperature_col, temperature_field,
    HUMIDITY_COL, PERCENT_WIDTH, SETPOINT_COL, STATUS_ROW,
};
use super::screens::{info_lines, OneShot, ScreenKind, SPLASH_LINES};

/// User interface for the humidistat on a character LCD with a keypad
///
/// Generic over its collaborators:
/// - `D`: character display
/// - `B`: keypad
/// - `H`: humidistat (setpoint store)
/// - `T`: temperature sensors, `N` of them (at most four)
/// - `C`: millisecond clock
///
/// Pass `&mut` references to keep ownership of the peripherals outside
/// the UI. Mixed sensor types can be passed as `&mut dyn TemperatureSensor`.
pub struct ControllerUI<D, B, H, T, C, const N: usize> {
    display: D,
    buttons: B,
    humidistat: H,
    sensors: [T; N],
    clock: C,
    config: UiConfig,
    /// Last display redraw (ms)
    last_refreshed: u32,
    /// Last accepted button press (ms)
    last_pressed: u32,
    splash: OneShot,
    info: OneShot,
    /// Display is blank, next one-shot screen can skip its clear
    screen_cleared: bool,
}

impl<D, B, H, T, C, const N: usize> ControllerUI<D, B, H, T, C, N>
where
    D: CharDisplay,
    B: ButtonSource,
    H: SetpointStore,
    T: TemperatureSensor,
    C: Clock,
{
    const SENSOR_COUNT_OK: () = assert!(
        N <= MAX_TEMPERATURE_SOURCES,
        "at most four temperature sources"
    );

    /// Create a new controller UI
    ///
    /// # Arguments
    /// - `display`: LCD to draw on
    /// - `buttons`: Keypad
    /// - `humidistat`: Setpoint store, adjusted in place
    /// - `sensors`: Temperature sources, rendered left to right
    /// - `clock`: Millisecond time source
    /// - `config`: UI tuning, rejected if invalid
    pub fn new(
        display: D,
        buttons: B,
        humidistat: H,
        sensors: [T; N],
        clock: C,
        config: UiConfig,
    ) -> Result<Self, ConfigError> {
        #[allow(clippy::let_unit_value)]
        let () = Self::SENSOR_COUNT_OK;
        config.validate()?;

        Ok(Self {
            display,
            buttons,
            humidistat,
            sensors,
            clock,
            config,
            last_refreshed: 0,
            last_pressed: 0,
            splash: OneShot::Pending,
            info: OneShot::Pending,
            screen_cleared: false,
        })
    }

    /// Run one main-loop tick
    ///
    /// Redraws the display and handles input when their intervals have
    /// elapsed. Input is still handled when the redraw fails; the display
    /// error is returned afterwards.
    pub fn update(&mut self) -> Result<(), DisplayError> {
        let now = self.clock.now_ms();

        let refreshed = if now.wrapping_sub(self.last_refreshed) >= self.config.refresh_interval_ms
        {
            self.update_display(now)
        } else {
            Ok(())
        };

        if now.wrapping_sub(self.last_pressed) >= self.config.input_interval_ms {
            self.input(now);
        }

        refreshed
    }

    /// Show the welcome screen
    ///
    /// Paints on the first call and returns `true` while the screen is up.
    /// The first call after `splash_duration_ms` blanks the display and
    /// returns `false`, as does every call after that.
    pub fn splash(&mut self) -> Result<bool, DisplayError> {
        self.show_once(ScreenKind::Splash)
    }

    /// Show the device information screen
    ///
    /// Same life cycle as [`splash`](Self::splash), timed by
    /// `info_duration_ms`.
    pub fn info(&mut self) -> Result<bool, DisplayError> {
        self.show_once(ScreenKind::Info)
    }

    /// Make both one-shot screens show again on their next call
    pub fn rearm_screens(&mut self) {
        self.splash = OneShot::Pending;
        self.info = OneShot::Pending;
    }

    /// State of a one-shot screen
    pub fn screen_state(&self, screen: ScreenKind) -> OneShot {
        match screen {
            ScreenKind::Splash => self.splash,
            ScreenKind::Info => self.info,
        }
    }

    /// Whether the status row is blinking the setpoint right now
    pub fn is_blinking(&self) -> bool {
        deviation_exceeds(
            self.humidistat.process_variable(),
            self.humidistat.setpoint(),
            self.config.tolerance,
        )
    }

    /// Get the UI configuration
    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    /// Get access to the display
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Get access to the humidistat
    pub fn humidistat(&self) -> &H {
        &self.humidistat
    }

    /// Redraw the status row
    fn update_display(&mut self, now: u32) -> Result<(), DisplayError> {
        self.last_refreshed = now;
        self.screen_cleared = false;

        let pv = self.humidistat.process_variable();
        let setpoint = self.humidistat.setpoint();

        self.display
            .write_at(HUMIDITY_COL, STATUS_ROW, &percent_field(round_percent(pv)))?;

        let blinking = deviation_exceeds(pv, setpoint, self.config.tolerance);
        let setpoint_field = if field_visible(now, self.config.blink_interval_ms, blinking) {
            percent_field(i32::from(setpoint))
        } else {
            blank_field(PERCENT_WIDTH)
        };
        self.display
            .write_at(SETPOINT_COL, STATUS_ROW, &setpoint_field)?;

        for (index, sensor) in self.sensors.iter_mut().enumerate() {
            let field = temperature_field(sensor.read_celsius());
            self.display
                .write_at(temperature_col(index), STATUS_ROW, &field)?;
        }

        Ok(())
    }

    /// Poll the keypad and adjust the setpoint
    fn input(&mut self, now: u32) {
        let UiConfig {
            setpoint_min,
            setpoint_max,
            adjust_step,
            ..
        } = self.config;

        #[cfg(feature = "defmt")]
        let before = self.humidistat.setpoint();

        let pressed = adjust_value(
            &mut self.buttons,
            self.humidistat.setpoint_mut(),
            setpoint_min,
            setpoint_max,
            adjust_step,
        );

        // Presses at a bound still restart the interval
        if pressed {
            self.last_pressed = now;

            #[cfg(feature = "defmt")]
            defmt::debug!(
                "Setpoint: {} -> {}",
                before,
                self.humidistat.setpoint()
            );
        }
    }

    fn show_once(&mut self, screen: ScreenKind) -> Result<bool, DisplayError> {
        let now = self.clock.now_ms();
        let duration = match screen {
            ScreenKind::Splash => self.config.splash_duration_ms,
            ScreenKind::Info => self.config.info_duration_ms,
        };

        match self.screen_state(screen) {
            OneShot::Pending => {
                self.set_screen_state(screen, OneShot::Drawn { since_ms: now });
                self.paint(screen)?;
                Ok(true)
            }
            state @ OneShot::Drawn { .. } if !state.dwell_elapsed(now, duration) => Ok(true),
            OneShot::Drawn { .. } => {
                self.set_screen_state(screen, OneShot::Expired);

                #[cfg(feature = "defmt")]
                defmt::info!("Screen {} done", screen);

                self.blank()?;
                Ok(false)
            }
            OneShot::Expired => Ok(false),
        }
    }

    fn set_screen_state(&mut self, screen: ScreenKind, state: OneShot) {
        match screen {
            ScreenKind::Splash => self.splash = state,
            ScreenKind::Info => self.info = state,
        }
    }

    fn paint(&mut self, screen: ScreenKind) -> Result<(), DisplayError> {
        if !self.screen_cleared {
            self.display.clear()?;
        }
        self.screen_cleared = false;

        let rows = self.display.dimensions().1;
        match screen {
            ScreenKind::Splash => {
                for (row, line) in (0..rows).zip(SPLASH_LINES) {
                    self.display.write_at(0, row, line)?;
                }
            }
            ScreenKind::Info => {
                let lines = info_lines(N, self.config.tolerance);
                for (row, line) in (0..rows).zip(lines.iter()) {
                    self.display.write_at(0, row, line)?;
                }
            }
        }

        Ok(())
    }

    fn blank(&mut self) -> Result<(), DisplayError> {
        self.display.clear()?;
        self.screen_cleared = true;
        Ok(())
    }
}
