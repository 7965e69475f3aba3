//! Application layer: the tower façade and the port it binds through.
//!
//! - [`ports`] — `GpioPort`, the seam between the tower and a GPIO backend
//! - [`tower`] — `LaserTower`, two servos and a laser behind four commands

pub mod ports;
pub mod tower;
