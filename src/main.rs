//! Servo mode controller: main entry point.
//!
//! Hexagonal architecture with a single cooperative control loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                    │
//! │                                                            │
//! │  RpiHardware       LogEventSink   StdDelay   DeadlinePacer │
//! │  (DigitalIo+Pwm)   (EventSink)    (DelayNs)  (TickPacer)   │
//! │                                                            │
//! │  ──────────────── Port Trait Boundary ────────────────     │
//! │                                                            │
//! │  ┌──────────────────────────────────────────────────────┐  │
//! │  │            ModeEngine (pure logic)                   │  │
//! │  │  button edge · mode FSM · sweep · clamp              │  │
//! │  └──────────────────────────────────────────────────────┘  │
//! │                                                            │
//! │  ControlLoop (tick → pace, forever)                        │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! The process takes no arguments. It exits with status 1 if GPIO or PWM
//! initialisation fails and otherwise never returns.

#![deny(unused_must_use)]

use std::convert::Infallible;

use anyhow::{Context, Result};
use log::{LevelFilter, error, info};

use servomode::adapters::hardware::rpi;
use servomode::adapters::log_sink::LogEventSink;
use servomode::adapters::time::{DeadlinePacer, StdDelay};
use servomode::app::control_loop::ControlLoop;
use servomode::app::service::ModeEngine;
use servomode::config::ControllerConfig;
use servomode::error::Error;

fn main() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("System start... (servomode v{})", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run() {
        error!("{:#}", e);
        let code = e.downcast_ref::<Error>().map_or(1, Error::exit_code);
        std::process::exit(code);
    }
}

fn run() -> Result<Infallible> {
    let config = ControllerConfig::default();
    let engine = ModeEngine::new(config.clone()).context("invalid controller configuration")?;

    // GPIO first; if PWM then fails, the claimed pins are released on drop.
    let pins = rpi::init_gpio(&config)?;
    let pwm = rpi::init_pwm(&config)?;
    let hw = rpi::build(&config, pins, pwm);

    let mut control = ControlLoop::new(
        engine,
        hw,
        StdDelay::new(),
        LogEventSink::new(),
        DeadlinePacer::new(),
    );
    control.run()
}
