//! Transfer-time estimation and streaming-readiness checks.
//!
//! `wirecalc-core` owns the calculation engine behind the wirecalc CLI.
//! It is pure and synchronous: no I/O, no global state, and the only
//! ambient input (the current time, for ETAs) comes in through the
//! [`Clock`] trait. Every request runs the same pipeline:
//!
//! validate → normalize to MB → compute seconds → classify → format
//!
//! - **[`TransferRequest`]** -- one transfer to estimate: size, unit,
//!   link speed, direction. [`TransferRequest::estimate`] validates and
//!   computes `size_mb × 8 / speed_mbps` seconds.
//! - **[`TransferReport`]** -- the full rendered result: duration
//!   breakdown and phrase, wall-clock ETA, recommendation tier.
//! - **[`Tier`]** -- six recommendation buckets keyed by half-open
//!   duration thresholds, with advisory copy and icon tags.
//! - **[`StreamingVerdict`]** -- upload-speed check against the fixed
//!   [`StreamingProfile`] bitrate table with 1.3× headroom.
//! - **[`LinkPreset`]** / **[`SizeUnit`]** -- the fixed link-speed
//!   shortcut table and binary byte-multiple units.
//!
//! Inputs are rejected up front with [`EngineError`]; a request that
//! validates cannot fail later in the pipeline.

pub mod classify;
pub mod clock;
pub mod error;
pub mod estimate;
pub mod format;
pub mod presets;
pub mod report;
pub mod streaming;
pub mod units;

// ── Primary re-exports ──────────────────────────────────────────────
pub use classify::Tier;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::EngineError;
pub use estimate::{Direction, Estimate, TransferRequest};
pub use format::DurationParts;
pub use presets::LinkPreset;
pub use report::TransferReport;
pub use streaming::{HEADROOM_MULTIPLIER, StreamingProfile, StreamingVerdict};
pub use units::{SizeUnit, parse_size_spec};
