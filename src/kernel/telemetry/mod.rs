//! Trial telemetry.
//!
//! # SAFETY INVARIANT
//! Telemetry is a READ-ONLY side-effect layer.
//! It must **NEVER** be read inside transition logic.
//!
//! # PRIVACY INVARIANT
//! Telemetry events must **NEVER** contain participant text.
//! Only playback positions, counts and enums are allowed.

pub mod event;
pub mod metrics;
pub mod recorder;
