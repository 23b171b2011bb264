//! Outbound application events.
//!
//! The [`ControlService`](super::service::ControlService) emits these
//! through the [`EventSink`](super::ports::EventSink) port. Adapters on
//! the other side decide what to do with them — log to serial, publish
//! over MQTT, feed an alerting pipeline, etc.

use crate::control::dispatch::{FAN_COUNT, FanCommand};
use crate::error::{AcquisitionError, PublishError};

/// Structured events emitted by the control core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The control service has started.
    Started,

    /// A command set was computed and delivered downstream.
    CommandsPublished(TickTelemetry),

    /// The acquisition collaborator failed; this tick was skipped.
    AcquisitionFailed(AcquisitionError),

    /// Commands were computed but could not be delivered.
    PublishFailed(PublishError),

    /// The mode selector held a value outside the defined set; no
    /// override was emitted.
    UnrecognizedMode(i32),
}

/// A point-in-time snapshot of one evaluated tick, suitable for logging
/// or transmission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickTelemetry {
    pub tick: u64,
    pub temperature_c: f32,
    pub mode: i32,
    pub commands: [FanCommand; FAN_COUNT],
}
