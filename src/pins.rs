//! Default GPIO assignments and servo PWM timing for the laser tower.
//!
//! Single source of truth: the configuration defaults reference this
//! module rather than hard-coding pin numbers.  Pin numbers are BCM GPIO
//! numbers (the Raspberry Pi header layout), not physical header positions.

// ---------------------------------------------------------------------------
// Servos (SG90 / MG90S class hobby servos)
// ---------------------------------------------------------------------------

/// PWM output for the base (pan) servo.
pub const BASE_SERVO_GPIO: u8 = 23;
/// PWM output for the top (tilt) servo.
pub const TOP_SERVO_GPIO: u8 = 24;

// ---------------------------------------------------------------------------
// Laser diode / LED
// ---------------------------------------------------------------------------

/// Digital output: HIGH = laser on.
pub const LASER_GPIO: u8 = 17;

// ---------------------------------------------------------------------------
// Travel limits
// ---------------------------------------------------------------------------

/// Full travel of the base servo in degrees.
pub const BASE_RANGE_DEG: f32 = 360.0;
/// Full travel of the top servo in degrees.
pub const TOP_RANGE_DEG: f32 = 180.0;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// Pulse width commanding the lower end of travel.
pub const SERVO_MIN_PULSE_US: u16 = 500;
/// Pulse width commanding the upper end of travel.
pub const SERVO_MAX_PULSE_US: u16 = 2_500;
/// PWM frame length (20 ms → 50 Hz, the hobby-servo standard).
pub const SERVO_FRAME_US: u16 = 20_000;

/// Highest BCM GPIO number exposed on the 40-pin header.
pub const MAX_HEADER_GPIO: u8 = 27;
