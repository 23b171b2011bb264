//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ControlService (domain)
//! ```
//!
//! Driven adapters (tag buses, message brokers, in-memory test doubles)
//! implement these traits. The [`ControlService`](super::service::ControlService)
//! consumes them via generics, so the decision core never touches a
//! transport directly.

use crate::control::dispatch::{FAN_COUNT, FanCommand, Reading};
use crate::error::{AcquisitionError, PublishError};

// ───────────────────────────────────────────────────────────────
// Acquisition port (driven adapter: inputs → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this once per tick to obtain an
/// atomically-read input snapshot.
///
/// Implementations MUST return a [`Reading`] whose six channels reflect a
/// single consistent instant, or an [`AcquisitionError`] — never a
/// partially-populated snapshot. On error the tick is skipped entirely.
pub trait AcquisitionPort {
    /// Read every input channel and return a unified snapshot.
    fn acquire(&mut self) -> Result<Reading, AcquisitionError>;
}

// ───────────────────────────────────────────────────────────────
// Publish port (driven adapter: domain → outputs)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to deliver the computed
/// per-fan commands. In Manual mode it is not called at all — absence of
/// a publish is part of the contract, not a publish of all-false.
pub trait PublishPort {
    /// Deliver one command per fan. Delivery failures are reported, not
    /// retried; the next tick recomputes independently.
    fn publish(&mut self, commands: &[FanCommand; FAN_COUNT]) -> Result<(), PublishError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide where they go (serial log, MQTT,
/// alerting pipeline, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
