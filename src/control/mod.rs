//! Pure decision logic — zero I/O.
//!
//! [`fan_logic`] quantizes a temperature delta into a drive tier;
//! [`dispatch`] runs the per-mode selection and polarity rules on top of
//! it. Both are total functions over a single input snapshot, so the
//! whole layer is testable without any adapter.

pub mod dispatch;
pub mod fan_logic;

pub use dispatch::{Dispatch, FAN_COUNT, FanCommand, Mode, Reading, dispatch};
pub use fan_logic::{FanLogicResult, FanSpeed, evaluate};
