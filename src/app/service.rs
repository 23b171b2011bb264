//! Control service — the hexagonal core.
//!
//! [`ControlService`] owns the configuration and runs one full control
//! cycle per tick. All I/O flows through port traits injected at call
//! sites, making the entire service testable with mock adapters.
//!
//! ```text
//!  AcquisitionPort ──▶ ┌─────────────────────────┐ ──▶ EventSink
//!                      │      ControlService      │
//!     PublishPort ◀────│  dispatch · polarity      │
//!                      └─────────────────────────┘
//! ```
//!
//! Nothing is persisted between ticks beyond a monotonic tick counter;
//! every cycle re-derives the command set from a fresh snapshot. The
//! hosting scheduler is responsible for periodic invocation and for
//! never running two ticks of one controller concurrently.

use log::{debug, error, info, warn};

use crate::config::ControllerConfig;
use crate::control::dispatch::{self, Dispatch};

use super::events::{AppEvent, TickTelemetry};
use super::ports::{AcquisitionPort, EventSink, PublishPort};

// ───────────────────────────────────────────────────────────────
// Tick outcome
// ───────────────────────────────────────────────────────────────

/// What one control cycle did, for callers that track loop health.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Commands were computed and delivered.
    Published,
    /// Manual mode: by contract nothing was computed or delivered.
    ManualNoOverride,
    /// Unrecognized mode selector; warned, nothing delivered.
    UnknownMode(i32),
    /// Acquisition failed; the whole tick was skipped.
    SkippedAcquisition,
    /// Commands were computed but delivery failed.
    PublishFailed,
}

// ───────────────────────────────────────────────────────────────
// ControlService
// ───────────────────────────────────────────────────────────────

/// Orchestrates acquire → dispatch → publish for one controller.
pub struct ControlService {
    config: ControllerConfig,
    tick_count: u64,
}

impl ControlService {
    /// Construct the service from configuration.
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            tick_count: 0,
        }
    }

    /// Emit the startup event. Call once before the first `tick()`.
    pub fn start(&self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started);
        info!(
            "ControlService started (interval {} ms)",
            self.config.control_loop_interval_ms
        );
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full control cycle: acquire snapshot → dispatch → publish.
    ///
    /// The `io` parameter satisfies **both** [`AcquisitionPort`] and
    /// [`PublishPort`] — this avoids a double mutable borrow while
    /// keeping the port boundary explicit.
    pub fn tick(
        &mut self,
        io: &mut (impl AcquisitionPort + PublishPort),
        sink: &mut impl EventSink,
    ) -> TickOutcome {
        self.tick_count += 1;

        // 1. Acquire the input snapshot. A failed read skips the whole
        //    tick — the core is never invoked with a partial Reading.
        let reading = match io.acquire() {
            Ok(r) => r,
            Err(e) => {
                warn!("tick {}: acquisition failed: {e}", self.tick_count);
                sink.emit(&AppEvent::AcquisitionFailed(e));
                return TickOutcome::SkippedAcquisition;
            }
        };

        // 2. Dispatch: mode selection + evaluation + polarity.
        let commands = match dispatch::dispatch(&reading, &self.config.polarities) {
            Dispatch::NoOverride => {
                debug!("tick {}: manual mode, no override", self.tick_count);
                return TickOutcome::ManualNoOverride;
            }
            Dispatch::UnknownMode(raw) => {
                warn!("tick {}: unrecognized mode {raw}, no override", self.tick_count);
                sink.emit(&AppEvent::UnrecognizedMode(raw));
                return TickOutcome::UnknownMode(raw);
            }
            Dispatch::Commands(c) => c,
        };

        // 3. Publish the computed command set.
        if let Err(e) = io.publish(&commands) {
            error!("tick {}: publish failed: {e}", self.tick_count);
            sink.emit(&AppEvent::PublishFailed(e));
            return TickOutcome::PublishFailed;
        }

        for (i, c) in commands.iter().enumerate() {
            debug!(
                "tick {}: fan{} state={} speed={}",
                self.tick_count,
                i + 1,
                c.state,
                c.speed.level()
            );
        }

        if self.tick_count % u64::from(self.config.telemetry_every_ticks) == 0 {
            sink.emit(&AppEvent::CommandsPublished(TickTelemetry {
                tick: self.tick_count,
                temperature_c: reading.temperature_c,
                mode: reading.mode,
                commands,
            }));
        }

        TickOutcome::Published
    }

    // ── Queries ───────────────────────────────────────────────

    /// Total control ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// The live configuration.
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }
}
