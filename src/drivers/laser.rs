//! Laser diode driver.
//!
//! A single digital output (active HIGH) switching the laser module's
//! supply through a transistor.  Starts off.

use embedded_hal::digital::{Error as _, OutputPin};
use log::debug;

use crate::error::{DriverError, Result};

pub struct LaserDriver<O: OutputPin> {
    pin: O,
    on: bool,
}

impl<O: OutputPin> LaserDriver<O> {
    /// Take ownership of the pin and drive it low.
    pub fn new(mut pin: O) -> Result<Self> {
        pin.set_low().map_err(|e| DriverError::Digital(e.kind()))?;
        Ok(Self { pin, on: false })
    }

    pub fn on(&mut self) -> Result<()> {
        self.pin
            .set_high()
            .map_err(|e| DriverError::Digital(e.kind()))?;
        if !self.on {
            debug!("laser: on");
        }
        self.on = true;
        Ok(())
    }

    pub fn off(&mut self) -> Result<()> {
        self.pin
            .set_low()
            .map_err(|e| DriverError::Digital(e.kind()))?;
        if self.on {
            debug!("laser: off");
        }
        self.on = false;
        Ok(())
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

impl<O: OutputPin> Drop for LaserDriver<O> {
    fn drop(&mut self) {
        // Never leave the beam on behind a released pin.
        if self.pin.set_low().is_err() {
            log::warn!("laser: failed to switch off on drop");
        }
    }
}
