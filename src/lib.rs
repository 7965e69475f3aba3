//! Laser tower controller library.
//!
//! Two hobby servos (base pan 0–360°, top tilt 0–180°) and a laser diode,
//! driven through the embedded-hal traits.  Hardware access is confined to
//! the `adapters` module; the Raspberry Pi backend sits behind the `rpi`
//! feature and everything else builds and tests on any host.
//!
//! ```
//! use laser_tower::{ConfigStore, LaserTower, PinOverrides, SimBoard};
//!
//! let mut store = ConfigStore::default();
//! store.set_config(PinOverrides { top_pin: Some(6), ..Default::default() });
//!
//! let mut board = SimBoard::new();
//! let mut tower = LaserTower::new(&mut board, store.current()).unwrap();
//! tower.set_top_angle(45.0).unwrap();
//! tower.laser_on().unwrap();
//! ```

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod pins;

pub use adapters::sim::SimBoard;
pub use app::ports::GpioPort;
pub use app::tower::LaserTower;
pub use config::{ConfigStore, PinAssignment, PinOverrides, ServoCalibration, TowerConfig};
pub use error::{Error, Result};

/// Crate version, as published.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
