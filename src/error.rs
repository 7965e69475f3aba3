//! Unified error types for the laser tower.
//!
//! A single `Error` enum that every fallible operation funnels into.  All
//! variants are `Copy` so callers can match and retry without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// A pin could not be claimed while constructing a controller.
    Bind(BindError),
    /// An angle argument fell outside the actuator's travel.
    Range(RangeError),
    /// The underlying driver rejected a command on an already-bound handle.
    Driver(DriverError),
    /// Configuration is invalid or could not be parsed.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bind(e) => write!(f, "bind: {e}"),
            Self::Range(e) => write!(f, "range: {e}"),
            Self::Driver(e) => write!(f, "driver: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Binding errors
// ---------------------------------------------------------------------------

/// What a pin is being claimed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinRole {
    BaseServo,
    TopServo,
    Laser,
}

impl fmt::Display for PinRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BaseServo => write!(f, "base servo"),
            Self::TopServo => write!(f, "top servo"),
            Self::Laser => write!(f, "laser"),
        }
    }
}

/// Why the driver refused to hand out a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindFailure {
    /// Another handle currently owns the pin.
    AlreadyClaimed,
    /// The pin number does not exist on this board.
    InvalidPin,
    /// The process may not access the GPIO peripheral or this pin.
    PermissionDenied,
    /// Any other driver-side failure (peripheral missing, I/O error).
    Unavailable,
}

impl fmt::Display for BindFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyClaimed => write!(f, "already claimed"),
            Self::InvalidPin => write!(f, "invalid pin"),
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::Unavailable => write!(f, "GPIO unavailable"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindError {
    pub pin: u8,
    pub role: PinRole,
    pub cause: BindFailure,
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GPIO{} ({}): {}", self.pin, self.role, self.cause)
    }
}

impl From<BindError> for Error {
    fn from(e: BindError) -> Self {
        Self::Bind(e)
    }
}

// ---------------------------------------------------------------------------
// Range errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Base,
    Top,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => write!(f, "base"),
            Self::Top => write!(f, "top"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeError {
    pub axis: Axis,
    pub degrees: f32,
    /// Inclusive upper bound; the lower bound is always 0.
    pub max: f32,
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} angle must be between 0 and {} degrees, got {}",
            self.axis, self.max, self.degrees
        )
    }
}

impl From<RangeError> for Error {
    fn from(e: RangeError) -> Self {
        Self::Range(e)
    }
}

// ---------------------------------------------------------------------------
// Driver errors
// ---------------------------------------------------------------------------

/// Pass-through of a driver fault, reduced to the embedded-hal error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverError {
    Pwm(embedded_hal::pwm::ErrorKind),
    Digital(embedded_hal::digital::ErrorKind),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pwm(kind) => write!(f, "PWM write failed ({kind:?})"),
            Self::Digital(kind) => write!(f, "GPIO write failed ({kind:?})"),
        }
    }
}

impl From<DriverError> for Error {
    fn from(e: DriverError) -> Self {
        Self::Driver(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
