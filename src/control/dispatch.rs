//! Mode dispatcher.
//!
//! One-shot per tick: consumes a [`Reading`] snapshot, selects which
//! setpoint feeds the evaluator for each fan, and applies the per-mode
//! output polarity. Nothing persists between ticks — every dispatch
//! re-derives the full command set from the current snapshot.
//!
//! ```text
//!  Reading ──▶ Mode select ──▶ fan_logic::evaluate ──▶ polarity ──▶ [FanCommand; 3]
//! ```
//!
//! Mode 0 (Manual) and unrecognized mode values produce **no** commands:
//! the dispatcher must not override externally-set fan outputs in those
//! cases, and the absence of output is part of the contract.

use serde::{Deserialize, Serialize};

use super::fan_logic::{self, FanSpeed};
use crate::config::{ModePolarities, Polarity};

/// Number of fans driven by one controller.
pub const FAN_COUNT: usize = 3;

// ---------------------------------------------------------------------------
// Input snapshot
// ---------------------------------------------------------------------------

/// A point-in-time snapshot of every input channel, produced by the
/// acquisition collaborator. All six values reflect a single consistent
/// instant; the dispatcher treats the snapshot as immutable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Measured temperature (°C).
    pub temperature_c: f32,
    /// Raw operating-mode selector as received from the outside world.
    pub mode: i32,
    /// Per-fan setpoints for automatic mode (°C).
    pub sp1_c: f32,
    pub sp2_c: f32,
    pub sp3_c: f32,
    /// Shared economy-mode setpoint (°C).
    pub eco_sp_c: f32,
}

/// Operating mode, decoded from [`Reading::mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Mode {
    /// User controls fan outputs directly; the dispatcher stays silent.
    Manual = 0,
    /// Each fan follows its own setpoint against the shared temperature.
    Auto = 1,
    /// All fans follow the economy setpoint, inverted output polarity.
    EcoInverted = 2,
    /// All fans follow the economy setpoint, direct output polarity.
    EcoDirect = 3,
}

impl Mode {
    /// Decode a raw mode selector. Returns `None` for values outside the
    /// defined set — callers treat those as a warned no-override.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Manual),
            1 => Some(Self::Auto),
            2 => Some(Self::EcoInverted),
            3 => Some(Self::EcoDirect),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Output commands
// ---------------------------------------------------------------------------

/// Final per-fan command handed to the publishing collaborator.
///
/// `speed` is always verbatim from the evaluator; `state` may be the
/// negation of the raw active flag depending on the mode's polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FanCommand {
    pub state: bool,
    pub speed: FanSpeed,
}

/// Outcome of one dispatch call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Commands for all three fans, ready to publish.
    Commands([FanCommand; FAN_COUNT]),
    /// Manual mode: emit nothing, leave external outputs untouched.
    NoOverride,
    /// Mode selector outside the defined set; treated as no-override
    /// but surfaced so the caller can warn.
    UnknownMode(i32),
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Evaluate one snapshot and produce the per-fan command set.
///
/// Deterministic for well-formed input; malformed mode values fall
/// through to [`Dispatch::UnknownMode`] rather than erroring. The
/// per-mode state polarity comes from the caller-supplied table.
pub fn dispatch(reading: &Reading, polarities: &ModePolarities) -> Dispatch {
    let Some(mode) = Mode::from_raw(reading.mode) else {
        return Dispatch::UnknownMode(reading.mode);
    };

    match mode {
        Mode::Manual => Dispatch::NoOverride,
        Mode::Auto => {
            let setpoints = [reading.sp1_c, reading.sp2_c, reading.sp3_c];
            Dispatch::Commands(
                setpoints.map(|sp| command(reading.temperature_c, sp, polarities.auto)),
            )
        }
        Mode::EcoInverted => Dispatch::Commands(broadcast(
            reading.temperature_c,
            reading.eco_sp_c,
            polarities.eco_inverted,
        )),
        Mode::EcoDirect => Dispatch::Commands(broadcast(
            reading.temperature_c,
            reading.eco_sp_c,
            polarities.eco_direct,
        )),
    }
}

/// Evaluate one (temperature, setpoint) pair and apply output polarity.
fn command(temperature_c: f32, setpoint_c: f32, polarity: Polarity) -> FanCommand {
    let logic = fan_logic::evaluate(temperature_c, setpoint_c);
    FanCommand {
        state: polarity.apply(logic.active),
        speed: logic.speed,
    }
}

/// One shared evaluation, broadcast identically to every fan.
fn broadcast(temperature_c: f32, setpoint_c: f32, polarity: Polarity) -> [FanCommand; FAN_COUNT] {
    [command(temperature_c, setpoint_c, polarity); FAN_COUNT]
}
