//! Laser tower demo: binds a tower, sweeps both axes and blinks the laser.
//!
//! Built with `--features rpi` it drives real Raspberry Pi GPIO; without it
//! the simulated board stands in, which is handy for checking a config file.
//!
//! ```text
//! LASER_TOWER_CONFIG=tower.json RUST_LOG=debug laser-tower
//! ```

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use log::{info, warn};
use tracing_subscriber::EnvFilter;

use laser_tower::{GpioPort, LaserTower, TowerConfig};

const CONFIG_ENV: &str = "LASER_TOWER_CONFIG";
const STEP_DELAY: Duration = Duration::from_millis(20);

fn main() -> Result<()> {
    // ── 1. Logging ────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    info!("Laser tower v{}", laser_tower::VERSION);

    // ── 2. Config from file (or defaults) ─────────────────────
    let config = load_config();
    info!("Pins: {:?}", config.pins);

    // ── 3. Backend ────────────────────────────────────────────
    #[cfg(feature = "rpi")]
    let mut gpio = laser_tower::adapters::rpi::RpiGpio::new().context("opening GPIO")?;
    #[cfg(not(feature = "rpi"))]
    let mut gpio = {
        info!("Built without `rpi` feature, using simulated board");
        laser_tower::SimBoard::new()
    };

    run(&mut gpio, &config)
}

fn load_config() -> TowerConfig {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return TowerConfig::default();
    };
    match std::fs::read_to_string(&path)
        .context("reading config")
        .and_then(|json| TowerConfig::from_json(&json).context("parsing config"))
    {
        Ok(cfg) => {
            info!("Config loaded from {}", path);
            cfg
        }
        Err(e) => {
            warn!("Config {} unusable ({:#}), using defaults", path, e);
            TowerConfig::default()
        }
    }
}

fn run<G: GpioPort>(gpio: &mut G, config: &TowerConfig) -> Result<()> {
    let mut tower = LaserTower::new(gpio, config).context("binding tower")?;

    tower.laser_on()?;
    for deg in (0..=360).step_by(5) {
        tower.set_base_angle(deg as f32)?;
        thread::sleep(STEP_DELAY);
    }
    for deg in (0..=180).step_by(5) {
        tower.set_top_angle(deg as f32)?;
        thread::sleep(STEP_DELAY);
    }
    tower.laser_off()?;

    tower.set_base_angle(180.0)?;
    tower.set_top_angle(90.0)?;
    thread::sleep(Duration::from_millis(500));

    tower.close()?;
    info!("Sweep complete");
    Ok(())
}
