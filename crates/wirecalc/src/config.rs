//! CLI-owned configuration: TOML defaults and saved connections.
//!
//! The engine never sees these types -- handlers resolve them into plain
//! numbers and enums before calling into `wirecalc_core`.

use std::collections::HashMap;
use std::path::PathBuf;

use clap::ValueEnum;
use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use wirecalc_core::{Direction, SizeUnit};

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── TOML config structs ──────────────────────────────────────────────

/// CLI-owned TOML configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Connection used when --connection is not specified.
    pub default_connection: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named connections.
    #[serde(default)]
    pub connections: HashMap<String, Connection>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    /// Unit assumed for bare size values.
    #[serde(default = "default_unit")]
    pub unit: String,

    #[serde(default = "default_direction")]
    pub direction: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            unit: default_unit(),
            direction: default_direction(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_unit() -> String {
    "MB".into()
}
fn default_direction() -> String {
    "download".into()
}

/// A saved link: measured speeds in Mbps for each direction.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Connection {
    /// Downstream speed in Mbps.
    pub download_mbps: Option<f64>,

    /// Upstream speed in Mbps.
    pub upload_mbps: Option<f64>,
}

// ── Config file path ─────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "wirecalc", "wirecalc")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        })
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("wirecalc");
    p
}

// ── Config loading / saving ──────────────────────────────────────────

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, CliError> {
    let path = config_path();

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(&path))
        .merge(Env::prefixed("WIRECALC_").split("_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Flag / config resolution ─────────────────────────────────────────

/// Resolve the active connection name from CLI flags and config.
///
/// `None` means no saved speeds are in play for this invocation.
pub fn active_connection_name(global: &GlobalOpts, config: &Config) -> Option<String> {
    global
        .connection
        .clone()
        .or_else(|| config.default_connection.clone())
}

/// Resolve the output format: flag / env > config default > table.
pub fn resolved_output(global: &GlobalOpts, config: &Config) -> OutputFormat {
    global.output.clone().unwrap_or_else(|| {
        OutputFormat::from_str(&config.defaults.output, true).unwrap_or(OutputFormat::Table)
    })
}

/// Resolve the color mode: flag > config default > auto.
pub fn resolved_color(global: &GlobalOpts, config: &Config) -> ColorMode {
    global.color.clone().unwrap_or_else(|| {
        ColorMode::from_str(&config.defaults.color, true).unwrap_or(ColorMode::Auto)
    })
}

/// Size unit assumed when neither an inline suffix nor --unit is given.
pub fn resolved_unit(config: &Config) -> SizeUnit {
    SizeUnit::from_symbol(&config.defaults.unit)
}

/// Transfer direction assumed when --direction is not given.
pub fn resolved_direction(config: &Config) -> Direction {
    config.defaults.direction.parse().unwrap_or_default()
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn bare_global() -> GlobalOpts {
        GlobalOpts {
            connection: None,
            output: None,
            color: None,
            verbose: 0,
            quiet: false,
            now: None,
        }
    }

    #[test]
    fn defaults_fill_in_sensible_values() {
        let d = Defaults::default();
        assert_eq!(d.output, "table");
        assert_eq!(d.color, "auto");
        assert_eq!(d.unit, "MB");
        assert_eq!(d.direction, "download");
    }

    #[test]
    fn connection_flag_beats_config_default() {
        let mut global = bare_global();
        global.connection = Some("office".into());
        let config = Config {
            default_connection: Some("home".into()),
            ..Config::default()
        };

        assert_eq!(
            active_connection_name(&global, &config).as_deref(),
            Some("office")
        );
    }

    #[test]
    fn config_default_connection_used_without_flag() {
        let config = Config {
            default_connection: Some("home".into()),
            ..Config::default()
        };

        assert_eq!(
            active_connection_name(&bare_global(), &config).as_deref(),
            Some("home")
        );
    }

    fn config_with_defaults(defaults: Defaults) -> Config {
        Config {
            defaults,
            ..Config::default()
        }
    }

    #[test]
    fn configured_output_applies_when_flag_absent() {
        let config = config_with_defaults(Defaults {
            output: "json".into(),
            ..Defaults::default()
        });

        assert!(matches!(
            resolved_output(&bare_global(), &config),
            OutputFormat::Json
        ));
    }

    #[test]
    fn unrecognized_configured_output_falls_back_to_table() {
        let config = config_with_defaults(Defaults {
            output: "teletype".into(),
            ..Defaults::default()
        });

        assert!(matches!(
            resolved_output(&bare_global(), &config),
            OutputFormat::Table
        ));
    }

    #[test]
    fn configured_unit_and_direction_map_to_engine_types() {
        let config = config_with_defaults(Defaults {
            unit: "gb".into(),
            direction: "upload".into(),
            ..Defaults::default()
        });

        assert_eq!(resolved_unit(&config), SizeUnit::Gigabytes);
        assert_eq!(resolved_direction(&config), Direction::Upload);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut config = Config {
            default_connection: Some("home".into()),
            ..Config::default()
        };
        config.connections.insert(
            "home".into(),
            Connection {
                download_mbps: Some(250.0),
                upload_mbps: Some(25.0),
            },
        );

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();

        assert_eq!(parsed.default_connection.as_deref(), Some("home"));
        let conn = &parsed.connections["home"];
        assert_eq!(conn.download_mbps, Some(250.0));
        assert_eq!(conn.upload_mbps, Some(25.0));
    }
}
