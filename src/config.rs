//! Controller configuration parameters
//!
//! All tunable parameters for the ventilation controller. Values can be
//! overridden by the hosting environment at startup; the decision core
//! itself never mutates them.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Output polarity
// ---------------------------------------------------------------------------

/// Whether a mode's commanded "on" state equals the raw threshold-active
/// result or its logical negation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polarity {
    /// Fan runs exactly when the threshold condition is satisfied.
    Direct,
    /// Fan runs when the threshold condition is NOT satisfied.
    Inverted,
}

impl Polarity {
    /// Apply this polarity to a raw active flag.
    pub const fn apply(self, active: bool) -> bool {
        match self {
            Self::Direct => active,
            Self::Inverted => !active,
        }
    }
}

/// Per-mode state polarity table.
///
/// The polarity convention differs between deployments (field units exist
/// that invert in automatic mode as well), so it is an explicit table
/// rather than a hard-coded rule in the dispatcher. Defaults: automatic
/// and eco-direct run fans when hot; eco-inverted runs fans when at or
/// below the eco threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModePolarities {
    /// Mode 1 — independent automatic.
    pub auto: Polarity,
    /// Mode 2 — economy, inverted convention.
    pub eco_inverted: Polarity,
    /// Mode 3 — economy, direct convention.
    pub eco_direct: Polarity,
}

impl Default for ModePolarities {
    fn default() -> Self {
        Self {
            auto: Polarity::Direct,
            eco_inverted: Polarity::Inverted,
            eco_direct: Polarity::Direct,
        }
    }
}

// ---------------------------------------------------------------------------
// Controller configuration
// ---------------------------------------------------------------------------

/// Core controller configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Control loop interval (milliseconds) the hosting scheduler runs at.
    pub control_loop_interval_ms: u32,
    /// Emit a telemetry event every N ticks (1 = every tick).
    pub telemetry_every_ticks: u32,
    /// Per-mode output state polarity.
    pub polarities: ModePolarities,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            control_loop_interval_ms: 5000, // gateway timer cadence
            telemetry_every_ticks: 1,
            polarities: ModePolarities::default(),
        }
    }
}

impl ControllerConfig {
    /// Validate field ranges. Invalid values are rejected, not clamped,
    /// so a misconfigured host cannot silently run a degenerate loop.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.control_loop_interval_ms == 0 {
            return Err("control_loop_interval_ms must be non-zero");
        }
        if self.telemetry_every_ticks == 0 {
            return Err("telemetry_every_ticks must be non-zero");
        }
        Ok(())
    }
}
