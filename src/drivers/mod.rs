//! Actuator drivers built on the embedded-hal PWM and digital traits.

pub mod laser;
pub mod servo;
