//! Adapters: concrete implementations of the [`GpioPort`](crate::app::ports::GpioPort) trait.
//!
//! | Adapter | Connects to                               |
//! |---------|-------------------------------------------|
//! | `sim`   | In-memory board (host builds, tests)      |
//! | `rpi`   | Raspberry Pi GPIO via `rppal` (`rpi` feature) |

#[cfg(feature = "rpi")]
pub mod rpi;
pub mod sim;
