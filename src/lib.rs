//! Ventilation controller decision core.
//!
//! Pure per-tick logic that maps a measured temperature, an operating
//! mode, and up to four setpoints onto on/off state and discrete speed
//! commands for three fans. Acquisition of inputs, delivery of outputs,
//! and tick scheduling are supplied by the hosting environment through
//! the port traits in [`app::ports`].

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod control;
pub mod error;
