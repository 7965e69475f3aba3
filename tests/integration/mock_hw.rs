//! Mock GPIO backend for integration tests.
//!
//! Records every claim, write and release so tests can assert on the full
//! command history, and injects claim refusals and write faults.

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::digital::{self, OutputPin};
use embedded_hal::pwm::{self, SetDutyCycle};
use laser_tower::GpioPort;
use laser_tower::error::BindFailure;

// ── Call record ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum GpioCall {
    ClaimPwm { pin: u8, frame_us: u16 },
    ClaimOutput { pin: u8 },
    SetDuty { pin: u8, duty: u16 },
    SetLevel { pin: u8, high: bool },
    Release { pin: u8 },
}

#[derive(Default)]
struct Faults {
    refused: Vec<(u8, BindFailure)>,
    fail_pwm: bool,
    fail_digital: bool,
}

#[derive(Clone, Default)]
struct Shared {
    calls: Rc<RefCell<Vec<GpioCall>>>,
    faults: Rc<RefCell<Faults>>,
}

impl Shared {
    fn push(&self, call: GpioCall) {
        self.calls.borrow_mut().push(call);
    }
}

// ── MockGpio ──────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockGpio {
    shared: Shared,
}

#[allow(dead_code)]
impl MockGpio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<GpioCall> {
        self.shared.calls.borrow().clone()
    }

    pub fn clear(&self) {
        self.shared.calls.borrow_mut().clear();
    }

    pub fn refuse(&self, pin: u8, cause: BindFailure) {
        self.shared.faults.borrow_mut().refused.push((pin, cause));
    }

    pub fn fail_pwm_writes(&self, fail: bool) {
        self.shared.faults.borrow_mut().fail_pwm = fail;
    }

    pub fn fail_digital_writes(&self, fail: bool) {
        self.shared.faults.borrow_mut().fail_digital = fail;
    }

    fn check_refused(&self, pin: u8) -> Result<(), BindFailure> {
        let faults = self.shared.faults.borrow();
        match faults.refused.iter().find(|(p, _)| *p == pin) {
            Some((_, cause)) => Err(*cause),
            None => Ok(()),
        }
    }
}

impl GpioPort for MockGpio {
    type Pwm = MockPwm;
    type Output = MockOutput;

    fn claim_pwm(&mut self, pin: u8, frame_us: u16) -> Result<MockPwm, BindFailure> {
        self.check_refused(pin)?;
        self.shared.push(GpioCall::ClaimPwm { pin, frame_us });
        Ok(MockPwm {
            pin,
            max_duty: frame_us,
            shared: self.shared.clone(),
        })
    }

    fn claim_output(&mut self, pin: u8) -> Result<MockOutput, BindFailure> {
        self.check_refused(pin)?;
        self.shared.push(GpioCall::ClaimOutput { pin });
        Ok(MockOutput {
            pin,
            shared: self.shared.clone(),
        })
    }
}

// ── Handles ───────────────────────────────────────────────────

pub struct MockPwm {
    pin: u8,
    max_duty: u16,
    shared: Shared,
}

impl pwm::ErrorType for MockPwm {
    type Error = pwm::ErrorKind;
}

impl SetDutyCycle for MockPwm {
    fn max_duty_cycle(&self) -> u16 {
        self.max_duty
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), pwm::ErrorKind> {
        if self.shared.faults.borrow().fail_pwm {
            return Err(pwm::ErrorKind::Other);
        }
        self.shared.push(GpioCall::SetDuty {
            pin: self.pin,
            duty,
        });
        Ok(())
    }
}

impl Drop for MockPwm {
    fn drop(&mut self) {
        self.shared.push(GpioCall::Release { pin: self.pin });
    }
}

pub struct MockOutput {
    pin: u8,
    shared: Shared,
}

impl MockOutput {
    fn write(&mut self, high: bool) -> Result<(), digital::ErrorKind> {
        if self.shared.faults.borrow().fail_digital {
            return Err(digital::ErrorKind::Other);
        }
        self.shared.push(GpioCall::SetLevel {
            pin: self.pin,
            high,
        });
        Ok(())
    }
}

impl digital::ErrorType for MockOutput {
    type Error = digital::ErrorKind;
}

impl OutputPin for MockOutput {
    fn set_low(&mut self) -> Result<(), digital::ErrorKind> {
        self.write(false)
    }

    fn set_high(&mut self) -> Result<(), digital::ErrorKind> {
        self.write(true)
    }
}

impl Drop for MockOutput {
    fn drop(&mut self) {
        self.shared.push(GpioCall::Release { pin: self.pin });
    }
}
