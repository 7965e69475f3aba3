//! Tower configuration
//!
//! Pin assignment and servo calibration used when a controller binds to
//! hardware.  [`ConfigStore`] holds the application-wide value; controllers
//! copy it at construction, so later edits never reach a bound tower.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pins;

/// GPIO numbers for the three outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinAssignment {
    pub base_pin: u8,
    pub top_pin: u8,
    pub laser_pin: u8,
}

impl Default for PinAssignment {
    fn default() -> Self {
        Self {
            base_pin: pins::BASE_SERVO_GPIO,
            top_pin: pins::TOP_SERVO_GPIO,
            laser_pin: pins::LASER_GPIO,
        }
    }
}

/// Servo pulse timing shared by both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServoCalibration {
    /// Pulse width at 0 degrees (µs)
    pub min_pulse_us: u16,
    /// Pulse width at full travel (µs)
    pub max_pulse_us: u16,
    /// PWM period (µs)
    pub frame_us: u16,
}

impl Default for ServoCalibration {
    fn default() -> Self {
        Self {
            min_pulse_us: pins::SERVO_MIN_PULSE_US,
            max_pulse_us: pins::SERVO_MAX_PULSE_US,
            frame_us: pins::SERVO_FRAME_US,
        }
    }
}

impl ServoCalibration {
    pub fn validate(&self) -> Result<()> {
        if self.min_pulse_us == 0 {
            return Err(Error::Config("min_pulse_us must be positive"));
        }
        if self.min_pulse_us >= self.max_pulse_us {
            return Err(Error::Config("min_pulse_us must be below max_pulse_us"));
        }
        if self.max_pulse_us > self.frame_us {
            return Err(Error::Config("max_pulse_us must fit inside frame_us"));
        }
        Ok(())
    }
}

/// Partial pin update.  `None` keeps the current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PinOverrides {
    pub base_pin: Option<u8>,
    pub top_pin: Option<u8>,
    pub laser_pin: Option<u8>,
}

/// Everything a [`LaserTower`](crate::app::tower::LaserTower) needs to bind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TowerConfig {
    pub pins: PinAssignment,
    pub servo: ServoCalibration,
}

impl TowerConfig {
    /// Copy of `self` with the given pins replaced.
    #[must_use]
    pub fn with_overrides(mut self, overrides: PinOverrides) -> Self {
        if let Some(pin) = overrides.base_pin {
            self.pins.base_pin = pin;
        }
        if let Some(pin) = overrides.top_pin {
            self.pins.top_pin = pin;
        }
        if let Some(pin) = overrides.laser_pin {
            self.pins.laser_pin = pin;
        }
        self
    }

    /// Pin legality is left to the GPIO driver; only the calibration is
    /// checked here.
    pub fn validate(&self) -> Result<()> {
        self.servo.validate()
    }

    /// Parse and validate a JSON document.  Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|_| Error::Config("malformed JSON"))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|_| Error::Config("serialisation failed"))
    }
}

/// Holder for the configuration that subsequently built towers bind with.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    current: TowerConfig,
}

impl ConfigStore {
    /// Update any subset of the three pins.  Towers that already exist
    /// keep the pins they bound with.
    pub fn set_config(&mut self, overrides: PinOverrides) {
        self.current = self.current.with_overrides(overrides);
        log::debug!("config: pins now {:?}", self.current.pins);
    }

    /// Replace the servo calibration used by towers built from now on.
    pub fn set_calibration(&mut self, servo: ServoCalibration) {
        self.current.servo = servo;
        log::debug!("config: servo calibration now {:?}", self.current.servo);
    }

    pub fn current(&self) -> &TowerConfig {
        &self.current
    }

    /// Restore the built-in defaults.
    pub fn reset(&mut self) {
        self.current = TowerConfig::default();
    }
}
