//! Preset table command handlers.

use serde::Serialize;
use strum::IntoEnumIterator;
use tabled::Tabled;
use wirecalc_core::{LinkPreset, StreamingProfile};

use crate::cli::{GlobalOpts, PresetsArgs, PresetsCommand};
use crate::config::{self, Config};
use crate::output;

// ── Serializable entries + table rows ───────────────────────────────

#[derive(Serialize)]
struct SpeedEntry {
    preset: LinkPreset,
    mbps: f64,
    label: &'static str,
}

impl From<LinkPreset> for SpeedEntry {
    fn from(p: LinkPreset) -> Self {
        Self {
            preset: p,
            mbps: p.mbps(),
            label: p.label(),
        }
    }
}

#[derive(Tabled)]
struct SpeedRow {
    #[tabled(rename = "Preset")]
    preset: String,
    #[tabled(rename = "Speed (Mbps)")]
    mbps: String,
    #[tabled(rename = "Description")]
    label: String,
}

impl From<&SpeedEntry> for SpeedRow {
    fn from(e: &SpeedEntry) -> Self {
        Self {
            preset: e.preset.to_string(),
            mbps: e.mbps.to_string(),
            label: e.label.to_string(),
        }
    }
}

#[derive(Serialize)]
struct BitrateEntry {
    profile: StreamingProfile,
    target_mbps: f64,
    required_mbps: f64,
    label: &'static str,
}

impl From<StreamingProfile> for BitrateEntry {
    fn from(p: StreamingProfile) -> Self {
        Self {
            profile: p,
            target_mbps: p.target_bitrate_mbps(),
            required_mbps: p.required_speed_mbps(),
            label: p.label(),
        }
    }
}

#[derive(Tabled)]
struct BitrateRow {
    #[tabled(rename = "Profile")]
    profile: String,
    #[tabled(rename = "Target (Mbps)")]
    target: String,
    #[tabled(rename = "Recommended Upload (Mbps)")]
    required: String,
    #[tabled(rename = "Description")]
    label: String,
}

impl From<&BitrateEntry> for BitrateRow {
    fn from(e: &BitrateEntry) -> Self {
        Self {
            profile: e.profile.to_string(),
            target: e.target_mbps.to_string(),
            required: format!("{:.1}", e.required_mbps),
            label: e.label.to_string(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: &PresetsArgs, config: &Config, global: &GlobalOpts) {
    let format = config::resolved_output(global, config);

    let out = match args.command {
        PresetsCommand::Speeds => {
            let entries: Vec<SpeedEntry> = LinkPreset::iter().map(SpeedEntry::from).collect();
            output::render_list(
                &format,
                &entries,
                |e| SpeedRow::from(e),
                |e| e.preset.to_string(),
            )
        }

        PresetsCommand::Bitrates => {
            let entries: Vec<BitrateEntry> =
                StreamingProfile::iter().map(BitrateEntry::from).collect();
            output::render_list(
                &format,
                &entries,
                |e| BitrateRow::from(e),
                |e| e.profile.to_string(),
            )
        }
    };

    output::print_output(&out, global.quiet);
}
