//! Integration tests: ModeEngine → drivers → mock ports.

use std::time::Duration;

use servomode::app::events::AppEvent;
use servomode::app::ports::Level;
use servomode::app::service::ModeEngine;
use servomode::config::ControllerConfig;
use servomode::error::Error;
use servomode::control::sweep::{Direction, SweepState};
use servomode::fsm::Mode;
use servomode::fsm::context::MachineState;

use crate::mock_hw::{HwCall, MockDelay, MockHardware, RecordingSink};

fn make_engine() -> (ModeEngine, MockHardware, MockDelay, RecordingSink) {
    (
        ModeEngine::new(ControllerConfig::default()).unwrap(),
        MockHardware::new(),
        MockDelay::new(),
        RecordingSink::new(),
    )
}

fn bench() -> (MockHardware, MockDelay, RecordingSink) {
    (MockHardware::new(), MockDelay::new(), RecordingSink::new())
}

// ── Mode cycle ────────────────────────────────────────────────

#[test]
fn three_presses_cycle_back_to_idle() {
    let (mut engine, mut hw, mut delay, mut sink) = make_engine();
    assert_eq!(engine.mode(), Mode::Idle, "should start in Idle");

    // press, release, press, release, press
    hw.script(&[Level::Low, Level::High, Level::Low, Level::High, Level::Low]);

    engine.tick(&mut hw, &mut delay, &mut sink);
    assert_eq!(engine.mode(), Mode::Sweep);
    assert_eq!(sink.lines, vec!["[MODE] SWEEP"]);
    assert_eq!(delay.total_ms(), 400);

    engine.tick(&mut hw, &mut delay, &mut sink);
    engine.tick(&mut hw, &mut delay, &mut sink);
    assert_eq!(engine.mode(), Mode::Center);

    engine.tick(&mut hw, &mut delay, &mut sink);
    engine.tick(&mut hw, &mut delay, &mut sink);
    assert_eq!(engine.mode(), Mode::Idle);

    assert_eq!(
        sink.lines,
        vec!["[MODE] SWEEP", "[MODE] CENTER", "[MODE] IDLE"]
    );
    assert_eq!(delay.total_ms(), 1200, "three 400 ms acknowledgements");
}

#[test]
fn transition_logs_before_blinking() {
    let (mut engine, mut hw, mut delay, mut sink) = make_engine();
    hw.press();

    let report = engine.tick(&mut hw, &mut delay, &mut sink);

    assert!(report.mode_changed);
    assert_eq!(
        sink.events,
        vec![AppEvent::ModeChanged {
            from: Mode::Idle,
            to: Mode::Sweep
        }]
    );
    // on, off, on, off at 100 ms, then the Sweep output at 0°
    assert_eq!(
        hw.calls,
        vec![
            HwCall::WritePin { pin: 26, level: Level::High },
            HwCall::WritePin { pin: 26, level: Level::Low },
            HwCall::WritePin { pin: 26, level: Level::High },
            HwCall::WritePin { pin: 26, level: Level::Low },
            HwCall::SetPulse { channel: 0, micros: 1000 },
            HwCall::WritePin { pin: 26, level: Level::High },
        ]
    );
    assert_eq!(delay.calls, 4);
}

#[test]
fn button_is_read_from_configured_pin_every_tick() {
    let (mut engine, mut hw, mut delay, mut sink) = make_engine();
    for _ in 0..3 {
        engine.tick(&mut hw, &mut delay, &mut sink);
    }
    assert_eq!(hw.reads, vec![16, 16, 16]);
}

#[test]
fn release_edge_and_held_button_are_ignored() {
    let (mut engine, mut hw, mut delay, mut sink) = make_engine();
    hw.script(&[Level::Low, Level::Low, Level::Low, Level::High, Level::High]);
    for _ in 0..5 {
        engine.tick(&mut hw, &mut delay, &mut sink);
    }
    assert_eq!(engine.mode(), Mode::Sweep);
    assert_eq!(sink.events.len(), 1);
}

// ── Hold modes ────────────────────────────────────────────────

#[test]
fn idle_always_outputs_center_with_led_off() {
    let (mut engine, mut hw, mut delay, mut sink) = make_engine();
    for _ in 0..50 {
        let r = engine.tick(&mut hw, &mut delay, &mut sink);
        assert_eq!(r.mode, Mode::Idle);
        assert_eq!(r.pulse_us, 1500);
        assert!(!r.led_on);
        assert_eq!(r.min_tick, Duration::from_millis(200));
    }
    assert!(hw.pulses().iter().all(|&p| p == 1500));
    assert!(hw.led_writes().iter().all(|&l| l == Level::Low));
    assert_eq!(delay.total_ns, 0);
}

#[test]
fn center_outputs_center_with_led_on() {
    let (mut engine, mut hw, mut delay, mut sink) = make_engine();
    hw.script(&[Level::Low, Level::High, Level::Low]);
    for _ in 0..3 {
        engine.tick(&mut hw, &mut delay, &mut sink);
    }
    assert_eq!(engine.mode(), Mode::Center);

    hw.clear();
    let r = engine.tick(&mut hw, &mut delay, &mut sink);
    assert_eq!(r.pulse_us, 1500);
    assert!(r.led_on);
    assert_eq!(
        hw.calls,
        vec![
            HwCall::SetPulse { channel: 0, micros: 1500 },
            HwCall::WritePin { pin: 26, level: Level::High },
        ]
    );
}

// ── Sweep ─────────────────────────────────────────────────────

fn sweep_engine(angle: i16, direction: Direction) -> ModeEngine {
    let state = MachineState {
        mode: Mode::Sweep,
        sweep: SweepState::at(angle, direction),
        ..MachineState::new()
    };
    ModeEngine::with_state(ControllerConfig::default(), state).unwrap()
}

#[test]
fn sweep_from_175_turns_at_180() {
    let mut engine = sweep_engine(175, Direction::Increasing);
    let (mut hw, mut delay, mut sink) = bench();

    let r = engine.tick(&mut hw, &mut delay, &mut sink);
    assert_eq!(r.pulse_us, 1972);
    assert_eq!(r.min_tick, Duration::from_millis(100));
    assert_eq!(engine.sweep().angle(), 180);
    assert_eq!(engine.sweep().direction(), Direction::Decreasing);

    let r = engine.tick(&mut hw, &mut delay, &mut sink);
    assert_eq!(r.pulse_us, 2000);
    assert_eq!(engine.sweep().angle(), 175);
}

#[test]
fn sweep_pulse_never_leaves_servo_range() {
    let mut engine = sweep_engine(0, Direction::Increasing);
    let (mut hw, mut delay, mut sink) = bench();
    for _ in 0..200 {
        engine.tick(&mut hw, &mut delay, &mut sink);
    }
    let pulses = hw.pulses();
    assert_eq!(pulses.len(), 200);
    assert!(pulses.iter().all(|p| (1000..=2000).contains(p)));
    assert!(pulses.contains(&1000) && pulses.contains(&2000));
}

#[test]
fn sweep_led_flashes_with_angle() {
    let mut engine = sweep_engine(0, Direction::Increasing);
    let (mut hw, mut delay, mut sink) = bench();
    let leds: Vec<bool> = (0..8)
        .map(|_| engine.tick(&mut hw, &mut delay, &mut sink).led_on)
        .collect();
    // angles 0,5 on; 10,15 off; 20,25 on; 30,35 off
    assert_eq!(leds, vec![true, true, false, false, true, true, false, false]);
}

#[test]
fn sweep_resumes_after_leaving_and_reentering() {
    let (mut engine, mut hw, mut delay, mut sink) = make_engine();
    hw.press();
    for _ in 0..6 {
        engine.tick(&mut hw, &mut delay, &mut sink);
    }
    assert_eq!(engine.sweep().angle(), 30);

    // Sweep -> Center -> Idle -> Sweep
    hw.script(&[Level::Low, Level::High, Level::Low, Level::High, Level::Low]);
    for _ in 0..5 {
        engine.tick(&mut hw, &mut delay, &mut sink);
    }
    assert_eq!(engine.mode(), Mode::Sweep);
    // one Sweep tick after re-entry, continuing from 30°
    assert_eq!(engine.sweep().angle(), 35);
    assert_eq!(hw.pulses().last(), Some(&1166));
}

// ── Configuration ─────────────────────────────────────────────

#[test]
fn engine_refuses_config_that_fails_validation() {
    let bad = [
        ControllerConfig {
            servo_center_us: 2600,
            ..ControllerConfig::default()
        },
        ControllerConfig {
            sweep_led_period_deg: 0,
            ..ControllerConfig::default()
        },
        ControllerConfig {
            sweep_step_deg: i16::MAX,
            ..ControllerConfig::default()
        },
    ];
    for cfg in bad {
        assert!(
            matches!(ModeEngine::new(cfg.clone()), Err(Error::Config(_))),
            "accepted {cfg:?}"
        );
        let state = MachineState {
            mode: Mode::Sweep,
            ..MachineState::new()
        };
        assert!(ModeEngine::with_state(cfg, state).is_err());
    }
}

#[test]
fn sweep_tick_with_narrowest_valid_config_does_not_panic() {
    let cfg = ControllerConfig {
        sweep_step_deg: 180,
        sweep_led_period_deg: 1,
        sweep_led_on_deg: 0,
        ..ControllerConfig::default()
    };
    let state = MachineState {
        mode: Mode::Sweep,
        ..MachineState::new()
    };
    let mut engine = ModeEngine::with_state(cfg, state).unwrap();
    let (mut hw, mut delay, mut sink) = bench();

    let pulses: Vec<u16> = (0..4)
        .map(|_| engine.tick(&mut hw, &mut delay, &mut sink).pulse_us)
        .collect();
    assert_eq!(pulses, vec![1000, 2000, 1000, 2000]);
    assert!(hw.led_writes().iter().all(|&l| l == Level::Low));
}
