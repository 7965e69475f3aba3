//! Port trait: the boundary between the tower and a GPIO backend.
//!
//! ```text
//!   LaserTower ──▶ GpioPort ──▶ backend (SimBoard, RpiGpio, test mock)
//! ```
//!
//! A backend hands out owned handles for individual pins.  A handle holds
//! its pin for as long as it lives; dropping it makes the pin claimable
//! again.

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

use crate::error::BindFailure;

/// Pin-claiming side of a GPIO driver.
pub trait GpioPort {
    /// PWM channel driving a servo signal line.
    type Pwm: SetDutyCycle;
    /// Push-pull digital output.
    type Output: OutputPin;

    /// Claim `pin` as a PWM output repeating every `frame_us` microseconds.
    /// The returned channel starts fully off.
    fn claim_pwm(&mut self, pin: u8, frame_us: u16) -> Result<Self::Pwm, BindFailure>;

    /// Claim `pin` as a digital output, initially low.
    fn claim_output(&mut self, pin: u8) -> Result<Self::Output, BindFailure>;
}
