//! Hobby servo driver (SG90 / MG90S class).
//!
//! Position is commanded by the width of a pulse repeated every PWM frame.
//! The full travel of the axis maps linearly onto the calibrated pulse
//! window, so a 360° base and a 180° top servo share the same timing.
//!
//! ## Range contract
//!
//! Angles outside `0..=range` (including NaN) are rejected, never clamped,
//! and leave the servo at its previous position.

use embedded_hal::pwm::{Error as _, SetDutyCycle};
use log::{debug, warn};

use crate::config::ServoCalibration;
use crate::error::{Axis, DriverError, RangeError, Result};

pub struct ServoDriver<P> {
    pwm: P,
    axis: Axis,
    range_deg: f32,
    calibration: ServoCalibration,
    position: Option<f32>,
}

impl<P: SetDutyCycle> ServoDriver<P> {
    /// Wrap a bound PWM channel.  No pulse is emitted until the first
    /// command.
    pub fn new(pwm: P, axis: Axis, range_deg: f32, calibration: ServoCalibration) -> Self {
        Self {
            pwm,
            axis,
            range_deg,
            calibration,
            position: None,
        }
    }

    pub fn set_angle(&mut self, degrees: f32) -> Result<()> {
        if !(0.0..=self.range_deg).contains(&degrees) {
            warn!("{} servo: rejected angle {}", self.axis, degrees);
            return Err(RangeError {
                axis: self.axis,
                degrees,
                max: self.range_deg,
            }
            .into());
        }

        let duty = self.duty_for(degrees);
        self.pwm
            .set_duty_cycle(duty)
            .map_err(|e| DriverError::Pwm(e.kind()))?;

        debug!("{} servo: {}° (duty {})", self.axis, degrees, duty);
        self.position = Some(degrees);
        Ok(())
    }

    /// Move to the middle of travel.
    pub fn center(&mut self) -> Result<()> {
        self.set_angle(self.range_deg / 2.0)
    }

    /// Stop emitting pulses.  The servo goes limp and the last position is
    /// forgotten.
    pub fn detach(&mut self) -> Result<()> {
        self.pwm
            .set_duty_cycle_fully_off()
            .map_err(|e| DriverError::Pwm(e.kind()))?;
        self.position = None;
        Ok(())
    }

    /// Pulse width for an in-range angle.
    pub fn pulse_us_for(&self, degrees: f32) -> f32 {
        let min = f32::from(self.calibration.min_pulse_us);
        let max = f32::from(self.calibration.max_pulse_us);
        min + (degrees / self.range_deg) * (max - min)
    }

    fn duty_for(&self, degrees: f32) -> u16 {
        let max_duty = self.pwm.max_duty_cycle();
        let fraction = self.pulse_us_for(degrees) / f32::from(self.calibration.frame_us);
        let duty = (fraction * f32::from(max_duty)).round();
        (duty as u16).min(max_duty)
    }

    /// Last successfully commanded angle.
    pub fn position(&self) -> Option<f32> {
        self.position
    }
}
