//! Application core — tick orchestration behind port traits.
//!
//! This module contains the per-tick control flow for the ventilation
//! controller: acquire a snapshot, run the mode dispatcher, publish the
//! resulting commands. All interaction with the outside world happens
//! through **port traits** defined in [`ports`], keeping this layer
//! fully testable without a real transport.

pub mod events;
pub mod ports;
pub mod service;
