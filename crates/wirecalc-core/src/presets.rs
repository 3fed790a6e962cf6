// ── Link-speed presets ──
//
// Named shortcuts for common connection speeds. The table is fixed; user
// supplied speeds always win over presets at the CLI layer.

use serde::{Deserialize, Serialize};

/// Well-known connection speeds selectable by name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum LinkPreset {
    Dial,
    Broadband,
    Fast,
    VeryFast,
    Gigabit,
}

impl LinkPreset {
    /// Preset link speed in megabits per second.
    pub fn mbps(self) -> f64 {
        match self {
            LinkPreset::Dial => 0.056,
            LinkPreset::Broadband => 10.0,
            LinkPreset::Fast => 100.0,
            LinkPreset::VeryFast => 500.0,
            LinkPreset::Gigabit => 1000.0,
        }
    }

    /// Short human description for preset listings.
    pub fn label(self) -> &'static str {
        match self {
            LinkPreset::Dial => "Dial-up modem",
            LinkPreset::Broadband => "Basic broadband",
            LinkPreset::Fast => "Fast broadband",
            LinkPreset::VeryFast => "Very fast broadband",
            LinkPreset::Gigabit => "Gigabit fiber",
        }
    }
}
