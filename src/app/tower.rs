//! Laser tower: the façade over two servos and a laser.
//!
//! [`LaserTower`] binds its three pins when constructed and keeps them for
//! its whole life.  Pins come from the [`TowerConfig`] passed in; the
//! tower copies it, so editing a [`ConfigStore`](crate::config::ConfigStore)
//! afterwards has no effect on a tower that already exists.
//!
//! ```text
//!   TowerConfig ──▶ LaserTower::new ──▶ GpioPort::claim_*
//!                        │
//!        set_base_angle ─┼─▶ ServoDriver (base, 0–360°)
//!        set_top_angle  ─┼─▶ ServoDriver (top, 0–180°)
//!        laser_on/off   ─┴─▶ LaserDriver
//! ```

use log::{info, warn};

use crate::config::{PinAssignment, TowerConfig};
use crate::drivers::laser::LaserDriver;
use crate::drivers::servo::ServoDriver;
use crate::error::{Axis, BindError, BindFailure, Error, PinRole, Result};
use crate::pins;

use super::ports::GpioPort;

pub struct LaserTower<G: GpioPort> {
    config: TowerConfig,
    base: ServoDriver<G::Pwm>,
    top: ServoDriver<G::Pwm>,
    laser: LaserDriver<G::Output>,
}

impl<G: GpioPort> LaserTower<G> {
    /// Claim base, top and laser pins (in that order), centre both servos
    /// and switch the laser off.
    ///
    /// If any pin cannot be claimed, the ones already taken are released
    /// before the [`Error::Bind`] is returned.
    pub fn new(gpio: &mut G, config: &TowerConfig) -> Result<Self> {
        config.validate()?;
        let config = *config;
        let assigned = config.pins;
        let frame_us = config.servo.frame_us;

        let base_pwm = gpio
            .claim_pwm(assigned.base_pin, frame_us)
            .map_err(|cause| bind_failed(assigned.base_pin, PinRole::BaseServo, cause))?;
        let top_pwm = gpio
            .claim_pwm(assigned.top_pin, frame_us)
            .map_err(|cause| bind_failed(assigned.top_pin, PinRole::TopServo, cause))?;
        let laser_pin = gpio
            .claim_output(assigned.laser_pin)
            .map_err(|cause| bind_failed(assigned.laser_pin, PinRole::Laser, cause))?;

        let mut base = ServoDriver::new(base_pwm, Axis::Base, pins::BASE_RANGE_DEG, config.servo);
        let mut top = ServoDriver::new(top_pwm, Axis::Top, pins::TOP_RANGE_DEG, config.servo);
        let laser = LaserDriver::new(laser_pin)?;

        base.center()?;
        top.center()?;

        info!(
            "LaserTower bound: base=GPIO{} top=GPIO{} laser=GPIO{}",
            assigned.base_pin, assigned.top_pin, assigned.laser_pin
        );

        Ok(Self {
            config,
            base,
            top,
            laser,
        })
    }

    // ── Commands ──────────────────────────────────────────────

    /// Pan to `degrees` (0–360).
    pub fn set_base_angle(&mut self, degrees: f32) -> Result<()> {
        self.base.set_angle(degrees)
    }

    /// Tilt to `degrees` (0–180).
    pub fn set_top_angle(&mut self, degrees: f32) -> Result<()> {
        self.top.set_angle(degrees)
    }

    pub fn laser_on(&mut self) -> Result<()> {
        self.laser.on()
    }

    pub fn laser_off(&mut self) -> Result<()> {
        self.laser.off()
    }

    /// Switch the laser off, stop servo pulses and release every pin.
    pub fn close(mut self) -> Result<()> {
        self.laser.off()?;
        self.base.detach()?;
        self.top.detach()?;
        info!("LaserTower closed");
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn base_angle(&self) -> Option<f32> {
        self.base.position()
    }

    pub fn top_angle(&self) -> Option<f32> {
        self.top.position()
    }

    pub fn is_laser_on(&self) -> bool {
        self.laser.is_on()
    }

    pub fn pins(&self) -> PinAssignment {
        self.config.pins
    }
}

fn bind_failed(pin: u8, role: PinRole, cause: BindFailure) -> Error {
    warn!("LaserTower: cannot claim GPIO{} for {}: {}", pin, role, cause);
    BindError { pin, role, cause }.into()
}
