//! Function-pointer mode machine.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  ModeTable                                   │
//! │  ┌────────┬─────────┬─────────────────────┐  │
//! │  │ Mode   │ name    │ output              │  │
//! │  ├────────┼─────────┼─────────────────────┤  │
//! │  │ Idle   │ "IDLE"  │ fn(state, cfg)->Out │  │
//! │  │ Sweep  │ "SWEEP" │ fn(state, cfg)->Out │  │
//! │  │ Center │ "CENTER"│ fn(state, cfg)->Out │  │
//! │  └────────┴─────────┴─────────────────────┘  │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Transitions are driven from outside (a button press); the machine only
//! knows how to step to the next mode and how to produce the active mode's
//! output. All handlers receive `&mut MachineState`.

pub mod context;
pub mod states;

use core::fmt;

use context::{MachineState, ModeOutput};
use log::debug;

use crate::config::ControllerConfig;

// ---------------------------------------------------------------------------
// Mode identity
// ---------------------------------------------------------------------------

/// Operating modes, in button-cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Mode {
    Idle = 0,
    Sweep = 1,
    Center = 2,
}

impl Mode {
    /// Total number of modes, used to size the table array.
    pub const COUNT: usize = 3;

    pub const ALL: [Mode; Mode::COUNT] = [Mode::Idle, Mode::Sweep, Mode::Center];

    /// The mode one button press away. `Center` wraps to `Idle`.
    pub fn next(self) -> Self {
        match self {
            Self::Idle => Self::Sweep,
            Self::Sweep => Self::Center,
            Self::Center => Self::Idle,
        }
    }

    /// Upper-case label used in log lines.
    pub fn name(self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Sweep => "SWEEP",
            Self::Center => "CENTER",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Mode descriptor (one row in the table)
// ---------------------------------------------------------------------------

/// Per-tick output handler for a mode.
pub type ModeOutputFn = fn(&mut MachineState, &ControllerConfig) -> ModeOutput;

/// Static descriptor for a single mode.
pub struct ModeDescriptor {
    pub name: &'static str,
    pub output: ModeOutputFn,
}

// ---------------------------------------------------------------------------
// FSM engine
// ---------------------------------------------------------------------------

/// Owns the mode table and the [`MachineState`].
pub struct Fsm {
    table: [ModeDescriptor; Mode::COUNT],
    state: MachineState,
}

impl Fsm {
    pub fn new(table: [ModeDescriptor; Mode::COUNT], state: MachineState) -> Self {
        Self { table, state }
    }

    /// Advance to the next mode. Returns `(from, to)`.
    pub fn advance(&mut self) -> (Mode, Mode) {
        let from = self.state.mode;
        let to = from.next();
        debug!(
            "FSM transition: {} -> {}",
            self.table[from as usize].name, self.table[to as usize].name
        );
        self.state.mode = to;
        (from, to)
    }

    /// Run the active mode's output handler for this tick.
    pub fn output(&mut self, config: &ControllerConfig) -> ModeOutput {
        let handler = self.table[self.state.mode as usize].output;
        handler(&mut self.state, config)
    }

    pub fn current_mode(&self) -> Mode {
        self.state.mode
    }

    pub fn state(&self) -> &MachineState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut MachineState {
        &mut self.state
    }
}
