//! Integration tests: LaserTower → drivers → GpioPort command history.

use embedded_hal::{digital, pwm};
use laser_tower::error::{BindError, BindFailure, DriverError, Error, PinRole};
use laser_tower::{LaserTower, TowerConfig};

use super::mock_hw::{GpioCall, MockGpio};

fn bind(gpio: &MockGpio) -> LaserTower<MockGpio> {
    let mut port = gpio.clone();
    LaserTower::new(&mut port, &TowerConfig::default()).unwrap()
}

#[test]
fn construction_claims_in_order_then_parks_outputs() {
    let gpio = MockGpio::new();
    let _tower = bind(&gpio);

    assert_eq!(
        gpio.calls(),
        vec![
            GpioCall::ClaimPwm { pin: 23, frame_us: 20_000 },
            GpioCall::ClaimPwm { pin: 24, frame_us: 20_000 },
            GpioCall::ClaimOutput { pin: 17 },
            GpioCall::SetLevel { pin: 17, high: false },
            GpioCall::SetDuty { pin: 23, duty: 1_500 },
            GpioCall::SetDuty { pin: 24, duty: 1_500 },
        ]
    );
}

#[test]
fn angle_commands_become_pulse_widths() {
    let gpio = MockGpio::new();
    let mut tower = bind(&gpio);
    gpio.clear();

    tower.set_base_angle(0.0).unwrap();
    tower.set_base_angle(360.0).unwrap();
    tower.set_top_angle(45.0).unwrap();

    assert_eq!(
        gpio.calls(),
        vec![
            GpioCall::SetDuty { pin: 23, duty: 500 },
            GpioCall::SetDuty { pin: 23, duty: 2_500 },
            GpioCall::SetDuty { pin: 24, duty: 1_000 },
        ]
    );
}

#[test]
fn rejected_angle_writes_nothing() {
    let gpio = MockGpio::new();
    let mut tower = bind(&gpio);
    gpio.clear();

    assert!(matches!(tower.set_top_angle(181.0), Err(Error::Range(_))));
    assert!(matches!(tower.set_base_angle(-5.0), Err(Error::Range(_))));
    assert!(gpio.calls().is_empty());
}

#[test]
fn laser_commands_drive_the_output() {
    let gpio = MockGpio::new();
    let mut tower = bind(&gpio);
    gpio.clear();

    tower.laser_on().unwrap();
    tower.laser_off().unwrap();

    assert_eq!(
        gpio.calls(),
        vec![
            GpioCall::SetLevel { pin: 17, high: true },
            GpioCall::SetLevel { pin: 17, high: false },
        ]
    );
}

#[test]
fn refused_laser_pin_releases_servo_pins() {
    let gpio = MockGpio::new();
    gpio.refuse(17, BindFailure::PermissionDenied);

    let mut port = gpio.clone();
    let err = LaserTower::new(&mut port, &TowerConfig::default()).err().unwrap();

    assert_eq!(
        err,
        Error::Bind(BindError {
            pin: 17,
            role: PinRole::Laser,
            cause: BindFailure::PermissionDenied,
        })
    );
    let calls = gpio.calls();
    assert!(calls.contains(&GpioCall::Release { pin: 23 }));
    assert!(calls.contains(&GpioCall::Release { pin: 24 }));
    assert!(!calls.contains(&GpioCall::ClaimOutput { pin: 17 }));
}

#[test]
fn pwm_fault_passes_through_and_keeps_position() {
    let gpio = MockGpio::new();
    let mut tower = bind(&gpio);
    tower.set_top_angle(30.0).unwrap();

    gpio.fail_pwm_writes(true);
    assert_eq!(
        tower.set_top_angle(60.0),
        Err(Error::Driver(DriverError::Pwm(pwm::ErrorKind::Other)))
    );
    assert_eq!(tower.top_angle(), Some(30.0));

    gpio.fail_pwm_writes(false);
    tower.set_top_angle(60.0).unwrap();
    assert_eq!(tower.top_angle(), Some(60.0));
}

#[test]
fn digital_fault_passes_through_and_keeps_state() {
    let gpio = MockGpio::new();
    let mut tower = bind(&gpio);

    gpio.fail_digital_writes(true);
    assert_eq!(
        tower.laser_on(),
        Err(Error::Driver(DriverError::Digital(digital::ErrorKind::Other)))
    );
    assert!(!tower.is_laser_on());
}

#[test]
fn pwm_fault_during_construction_fails_the_bind() {
    let gpio = MockGpio::new();
    gpio.fail_pwm_writes(true);

    let mut port = gpio.clone();
    let result = LaserTower::new(&mut port, &TowerConfig::default());
    assert!(matches!(result, Err(Error::Driver(DriverError::Pwm(_)))));

    let released = gpio
        .calls()
        .iter()
        .filter(|c| matches!(c, GpioCall::Release { .. }))
        .count();
    assert_eq!(released, 3);
}

#[test]
fn dropping_a_lit_tower_switches_laser_off() {
    let gpio = MockGpio::new();
    let mut tower = bind(&gpio);
    tower.laser_on().unwrap();
    gpio.clear();

    drop(tower);

    let calls = gpio.calls();
    let off = calls
        .iter()
        .position(|c| *c == GpioCall::SetLevel { pin: 17, high: false })
        .expect("laser must be switched off");
    let released = calls
        .iter()
        .position(|c| *c == GpioCall::Release { pin: 17 })
        .expect("laser pin must be released");
    assert!(off < released);
    assert!(calls.contains(&GpioCall::Release { pin: 23 }));
    assert!(calls.contains(&GpioCall::Release { pin: 24 }));
}

#[test]
fn close_stops_pulses_before_release() {
    let gpio = MockGpio::new();
    let tower = bind(&gpio);
    gpio.clear();

    tower.close().unwrap();

    let calls = gpio.calls();
    assert_eq!(calls[0], GpioCall::SetLevel { pin: 17, high: false });
    assert_eq!(calls[1], GpioCall::SetDuty { pin: 23, duty: 0 });
    assert_eq!(calls[2], GpioCall::SetDuty { pin: 24, duty: 0 });
    assert!(calls.contains(&GpioCall::Release { pin: 17 }));
}
