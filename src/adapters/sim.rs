//! Simulated GPIO board.
//!
//! Tracks which pins are claimed and the last level or duty written to
//! each, so host builds and tests can observe what a tower commands.
//! Claiming follows the same rules as real hardware: one owner per pin,
//! pins outside the header are invalid, and a handle frees its pin when
//! dropped.
//!
//! Single-threaded: the board and its handles share state through
//! `Rc<RefCell<_>>`.

use core::cell::RefCell;
use core::convert::Infallible;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

use crate::app::ports::GpioPort;
use crate::error::BindFailure;
use crate::pins;

/// Observable state of a claimed pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinState {
    Pwm { duty: u16, max_duty: u16 },
    Output { high: bool },
}

#[derive(Debug, Default)]
struct BoardState {
    claimed: BTreeMap<u8, PinState>,
    reserved: BTreeSet<u8>,
}

type Shared = Rc<RefCell<BoardState>>;

#[derive(Debug, Clone, Default)]
pub struct SimBoard {
    state: Shared,
}

impl SimBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `pin` refuse every claim with `PermissionDenied`, as a pin
    /// owned by a kernel driver would.
    pub fn reserve(&self, pin: u8) {
        self.state.borrow_mut().reserved.insert(pin);
    }

    /// State of `pin`, or `None` while nobody holds it.
    pub fn pin(&self, pin: u8) -> Option<PinState> {
        self.state.borrow().claimed.get(&pin).copied()
    }

    pub fn is_claimed(&self, pin: u8) -> bool {
        self.state.borrow().claimed.contains_key(&pin)
    }

    pub fn claimed_count(&self) -> usize {
        self.state.borrow().claimed.len()
    }

    fn claim(&self, pin: u8, initial: PinState) -> Result<(), BindFailure> {
        let mut state = self.state.borrow_mut();
        if pin > pins::MAX_HEADER_GPIO {
            return Err(BindFailure::InvalidPin);
        }
        if state.reserved.contains(&pin) {
            return Err(BindFailure::PermissionDenied);
        }
        if state.claimed.contains_key(&pin) {
            return Err(BindFailure::AlreadyClaimed);
        }
        state.claimed.insert(pin, initial);
        log::debug!("sim: GPIO{} claimed as {:?}", pin, initial);
        Ok(())
    }
}

impl GpioPort for SimBoard {
    type Pwm = SimPwm;
    type Output = SimOutput;

    fn claim_pwm(&mut self, pin: u8, frame_us: u16) -> Result<SimPwm, BindFailure> {
        // One duty step per microsecond of the frame.
        let max_duty = frame_us;
        self.claim(pin, PinState::Pwm { duty: 0, max_duty })?;
        Ok(SimPwm {
            pin,
            max_duty,
            board: Rc::clone(&self.state),
        })
    }

    fn claim_output(&mut self, pin: u8) -> Result<SimOutput, BindFailure> {
        self.claim(pin, PinState::Output { high: false })?;
        Ok(SimOutput {
            pin,
            board: Rc::clone(&self.state),
        })
    }
}

// ── Handles ───────────────────────────────────────────────────

fn release(board: &Shared, pin: u8) {
    board.borrow_mut().claimed.remove(&pin);
    log::debug!("sim: GPIO{} released", pin);
}

pub struct SimPwm {
    pin: u8,
    max_duty: u16,
    board: Shared,
}

impl embedded_hal::pwm::ErrorType for SimPwm {
    type Error = Infallible;
}

impl SetDutyCycle for SimPwm {
    fn max_duty_cycle(&self) -> u16 {
        self.max_duty
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Infallible> {
        let state = PinState::Pwm {
            duty: duty.min(self.max_duty),
            max_duty: self.max_duty,
        };
        self.board.borrow_mut().claimed.insert(self.pin, state);
        Ok(())
    }
}

impl Drop for SimPwm {
    fn drop(&mut self) {
        release(&self.board, self.pin);
    }
}

pub struct SimOutput {
    pin: u8,
    board: Shared,
}

impl SimOutput {
    fn write(&mut self, high: bool) {
        self.board
            .borrow_mut()
            .claimed
            .insert(self.pin, PinState::Output { high });
    }
}

impl embedded_hal::digital::ErrorType for SimOutput {
    type Error = Infallible;
}

impl OutputPin for SimOutput {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.write(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.write(true);
        Ok(())
    }
}

impl Drop for SimOutput {
    fn drop(&mut self) {
        release(&self.board, self.pin);
    }
}
