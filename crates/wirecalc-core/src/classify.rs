// ── Recommendation tiers ──
//
// Buckets an estimated duration and picks the advisory copy shown with
// results. Boundaries are half-open: a duration equal to a threshold
// lands in the tier above it (60 s is Quick, 3600 s is Long).

use serde::Serialize;

/// How long a transfer will feel, bucketed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Instant,
    Quick,
    Moderate,
    Long,
    Overnight,
    Multiday,
}

impl Tier {
    /// Classify an estimated duration in seconds.
    pub fn classify(total_seconds: f64) -> Self {
        if total_seconds < 60.0 {
            Tier::Instant
        } else if total_seconds < 300.0 {
            Tier::Quick
        } else if total_seconds < 3_600.0 {
            Tier::Moderate
        } else if total_seconds < 28_800.0 {
            Tier::Long
        } else if total_seconds < 86_400.0 {
            Tier::Overnight
        } else {
            Tier::Multiday
        }
    }

    /// Advisory sentence shown alongside the estimate.
    pub fn message(self) -> &'static str {
        match self {
            Tier::Instant => "Lightning fast! Should be done in seconds.",
            Tier::Quick => "Quick transfer, just a few minutes.",
            Tier::Moderate => "Moderate wait. Perfect time for a coffee break!",
            Tier::Long => "This will take a few hours. Great time to start overnight.",
            Tier::Overnight => "Large file! Consider starting this before bed.",
            Tier::Multiday => {
                "Very large file. This may take several days. Consider upgrading your connection."
            }
        }
    }

    /// Compact icon tag rendered next to the message.
    pub fn icon(self) -> &'static str {
        match self {
            Tier::Instant => "!",
            Tier::Quick => "OK",
            Tier::Moderate => "TIME",
            Tier::Long => "NIGHT",
            Tier::Overnight => "ALARM",
            Tier::Multiday => "WARN",
        }
    }
}
