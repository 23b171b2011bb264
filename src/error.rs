//! Unified error types for the controller core.
//!
//! The decision logic itself is total and cannot fail; every failure mode
//! lives at the boundary with the acquisition and publishing
//! collaborators. One `Error` enum that both boundary types convert into
//! keeps the tick loop's error handling uniform. All variants are `Copy`
//! so they can be carried inside events without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible boundary operation funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The acquisition collaborator could not produce a complete snapshot.
    Acquisition(AcquisitionError),
    /// The publishing collaborator could not deliver the command set.
    Publish(PublishError),
    /// Configuration failed validation.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Acquisition(e) => write!(f, "acquisition: {e}"),
            Self::Publish(e) => write!(f, "publish: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Acquisition errors
// ---------------------------------------------------------------------------

/// The inbound snapshot could not be read. The tick is skipped entirely;
/// the next scheduled tick retries naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquisitionError {
    /// One or more input channels could not be read at all.
    ChannelUnavailable,
    /// Channels were read but do not reflect a single consistent instant.
    Inconsistent,
    /// A channel produced a value that failed to decode.
    Malformed,
    /// The read did not complete within the collaborator's deadline.
    Timeout,
}

impl fmt::Display for AcquisitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChannelUnavailable => write!(f, "input channel unavailable"),
            Self::Inconsistent => write!(f, "inconsistent snapshot"),
            Self::Malformed => write!(f, "malformed channel value"),
            Self::Timeout => write!(f, "read timed out"),
        }
    }
}

impl From<AcquisitionError> for Error {
    fn from(e: AcquisitionError) -> Self {
        Self::Acquisition(e)
    }
}

// ---------------------------------------------------------------------------
// Publish errors
// ---------------------------------------------------------------------------

/// The outbound command set could not be delivered. Never rolled back or
/// retried within the tick — the loop is level-triggered, so the next
/// successful tick self-corrects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishError {
    /// The output channel rejected the write.
    WriteRejected,
    /// The transport to the output channel is down.
    Disconnected,
    /// The write did not complete within the collaborator's deadline.
    Timeout,
}

impl fmt::Display for PublishError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WriteRejected => write!(f, "write rejected"),
            Self::Disconnected => write!(f, "output transport disconnected"),
            Self::Timeout => write!(f, "write timed out"),
        }
    }
}

impl From<PublishError> for Error {
    fn from(e: PublishError) -> Self {
        Self::Publish(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
