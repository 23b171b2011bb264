//! Fan logic evaluator.
//!
//! Maps a (temperature, setpoint) pair to a quantized fan drive level.
//! The delta `temperature - setpoint` is split into four closed-open
//! bands, each with a fixed (speed, duty) pair — a staged threshold with
//! three active tiers and no hysteresis:
//!
//! ```text
//!  delta ≤ 0        →  Off     duty 0.0
//!  0 < delta < 5    →  Low     duty 0.3
//!  5 ≤ delta < 10   →  Medium  duty 0.6
//!  delta ≥ 10       →  High    duty 0.9
//! ```
//!
//! Band edges belong to the lower-adjacent tier: a delta of exactly 5
//! yields `Medium`, not `Low`.

use serde::{Deserialize, Serialize};

/// Delta (°C) at which the drive steps from Low to Medium.
pub const MEDIUM_BAND_DELTA_C: f32 = 5.0;

/// Delta (°C) at which the drive steps from Medium to High.
pub const HIGH_BAND_DELTA_C: f32 = 10.0;

// ---------------------------------------------------------------------------
// Fan speed tiers
// ---------------------------------------------------------------------------

/// Discrete fan speed tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum FanSpeed {
    Off = 0,
    Low = 1,
    Medium = 2,
    High = 3,
}

impl FanSpeed {
    /// Drive intensity fraction for this tier. Monotonically
    /// non-decreasing in tier.
    pub const fn duty(self) -> f32 {
        match self {
            Self::Off => 0.0,
            Self::Low => 0.3,
            Self::Medium => 0.6,
            Self::High => 0.9,
        }
    }

    /// `true` for every tier except `Off`.
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Off)
    }

    /// Numeric speed level (0–3) as transmitted downstream.
    pub const fn level(self) -> u8 {
        self as u8
    }
}

// ---------------------------------------------------------------------------
// Evaluator
// ---------------------------------------------------------------------------

/// Result of evaluating one (temperature, setpoint) pair.
///
/// Invariant: `active == (speed != FanSpeed::Off)`, and `duty` is the
/// tier's fixed drive fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FanLogicResult {
    pub active: bool,
    pub speed: FanSpeed,
    pub duty: f32,
}

/// Quantize the temperature delta into a fan drive level.
///
/// Total and side-effect-free. Inputs are not clamped; a NaN delta fails
/// every comparison in the chain and deterministically lands in the top
/// band, so callers needing NaN rejection must filter upstream.
pub fn evaluate(temperature_c: f32, setpoint_c: f32) -> FanLogicResult {
    let delta = temperature_c - setpoint_c;

    let speed = if delta <= 0.0 {
        FanSpeed::Off
    } else if delta < MEDIUM_BAND_DELTA_C {
        FanSpeed::Low
    } else if delta < HIGH_BAND_DELTA_C {
        FanSpeed::Medium
    } else {
        FanSpeed::High
    };

    FanLogicResult {
        active: speed.is_active(),
        speed,
        duty: speed.duty(),
    }
}
