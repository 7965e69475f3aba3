//! Raspberry Pi GPIO backend (`rpi` feature).
//!
//! Servo lines use `rppal`'s software PWM on ordinary GPIO pins, so any
//! header pin can carry a servo signal.  `rppal` resets a pin to its
//! previous mode when the handle drops, which is what releases the claim.

use core::convert::Infallible;
use std::time::Duration;

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::{ErrorKind, SetDutyCycle};
use log::{info, warn};
use rppal::gpio::{self, Gpio};

use crate::app::ports::GpioPort;
use crate::error::BindFailure;

pub struct RpiGpio {
    gpio: Gpio,
}

impl RpiGpio {
    /// Open `/dev/gpiomem`.
    pub fn new() -> Result<Self, gpio::Error> {
        let gpio = Gpio::new()?;
        info!("rpi: GPIO peripheral opened");
        Ok(Self { gpio })
    }

    fn output_low(&self, pin: u8) -> Result<gpio::OutputPin, BindFailure> {
        let pin = self.gpio.get(pin).map_err(bind_failure)?;
        Ok(pin.into_output_low())
    }
}

fn bind_failure(e: gpio::Error) -> BindFailure {
    match e {
        gpio::Error::PinUsed(_) => BindFailure::AlreadyClaimed,
        gpio::Error::PinNotAvailable(_) => BindFailure::InvalidPin,
        gpio::Error::PermissionDenied(_) => BindFailure::PermissionDenied,
        other => {
            warn!("rpi: GPIO error: {}", other);
            BindFailure::Unavailable
        }
    }
}

impl GpioPort for RpiGpio {
    type Pwm = RpiPwm;
    type Output = RpiOutput;

    fn claim_pwm(&mut self, pin: u8, frame_us: u16) -> Result<RpiPwm, BindFailure> {
        Ok(RpiPwm {
            pin: self.output_low(pin)?,
            frame_us,
        })
    }

    fn claim_output(&mut self, pin: u8) -> Result<RpiOutput, BindFailure> {
        Ok(RpiOutput(self.output_low(pin)?))
    }
}

// ── Software PWM ──────────────────────────────────────────────

/// Opaque software-PWM failure; the cause is logged where it happens.
#[derive(Debug, Clone, Copy)]
pub struct SoftPwmFault;

impl embedded_hal::pwm::Error for SoftPwmFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Servo signal on a plain GPIO.  One duty step per microsecond of frame.
pub struct RpiPwm {
    pin: gpio::OutputPin,
    frame_us: u16,
}

impl embedded_hal::pwm::ErrorType for RpiPwm {
    type Error = SoftPwmFault;
}

impl SetDutyCycle for RpiPwm {
    fn max_duty_cycle(&self) -> u16 {
        self.frame_us
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), SoftPwmFault> {
        let result = if duty == 0 {
            self.pin.clear_pwm().map(|()| self.pin.set_low())
        } else {
            let period = Duration::from_micros(u64::from(self.frame_us));
            let pulse = Duration::from_micros(u64::from(duty.min(self.frame_us)));
            self.pin.set_pwm(period, pulse)
        };
        result.map_err(|e| {
            warn!("rpi: GPIO{} PWM update failed: {}", self.pin.pin(), e);
            SoftPwmFault
        })
    }
}

// ── Digital output ────────────────────────────────────────────

pub struct RpiOutput(gpio::OutputPin);

impl embedded_hal::digital::ErrorType for RpiOutput {
    type Error = Infallible;
}

impl OutputPin for RpiOutput {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.0.set_low();
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.0.set_high();
        Ok(())
    }
}
