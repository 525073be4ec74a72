//! Concrete mode output functions and table builder.
//!
//! Each mode is one plain `fn` pointer. Handlers compute their output
//! without blocking; pacing and actuation happen in the caller.
//!
//! ```text
//!  IDLE ──[press]──▶ SWEEP ──[press]──▶ CENTER
//!    ▲                                    │
//!    └───────────────[press]──────────────┘
//! ```
//!
//! | Mode   | LED                   | Servo              | Tick   |
//! |--------|-----------------------|--------------------|--------|
//! | Idle   | off                   | center             | 200 ms |
//! | Sweep  | on for 10° of each 20°| follows the angle  | 100 ms |
//! | Center | on                    | center             | 200 ms |

use core::time::Duration;

use super::context::{MachineState, ModeOutput};
use super::{Mode, ModeDescriptor};
use crate::config::ControllerConfig;
use crate::control::sweep::{sweep_led_with, sweep_pulse_between};

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the mode table. Order matches `Mode as usize`.
pub fn build_mode_table() -> [ModeDescriptor; Mode::COUNT] {
    [
        ModeDescriptor {
            name: "IDLE",
            output: idle_output,
        },
        ModeDescriptor {
            name: "SWEEP",
            output: sweep_output,
        },
        ModeDescriptor {
            name: "CENTER",
            output: center_output,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  Hold modes
// ═══════════════════════════════════════════════════════════════════════════

fn idle_output(_state: &mut MachineState, cfg: &ControllerConfig) -> ModeOutput {
    ModeOutput {
        pulse_us: i32::from(cfg.servo_center_us),
        led_on: false,
        min_tick: Duration::from_millis(u64::from(cfg.hold_tick_ms)),
    }
}

fn center_output(_state: &mut MachineState, cfg: &ControllerConfig) -> ModeOutput {
    ModeOutput {
        pulse_us: i32::from(cfg.servo_center_us),
        led_on: true,
        min_tick: Duration::from_millis(u64::from(cfg.hold_tick_ms)),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  SWEEP
// ═══════════════════════════════════════════════════════════════════════════

/// Output is taken from the current angle; the oscillator advances after.
fn sweep_output(state: &mut MachineState, cfg: &ControllerConfig) -> ModeOutput {
    let angle = state.sweep.angle();
    let out = ModeOutput {
        pulse_us: sweep_pulse_between(angle, cfg.servo_min_us, cfg.servo_max_us),
        led_on: sweep_led_with(angle, cfg.sweep_led_period_deg, cfg.sweep_led_on_deg),
        min_tick: Duration::from_millis(u64::from(cfg.sweep_tick_ms)),
    };
    state.sweep.advance(cfg.sweep_step_deg);
    out
}
