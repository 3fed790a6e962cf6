//! Config subcommand handlers.

use clap::ValueEnum;
use dialoguer::Input;

use wirecalc_core::{Direction, SizeUnit};

use crate::cli::{ColorMode, ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::config::{self, Config, Connection};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Helpers ─────────────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
fn save_config(cfg: &Config) -> Result<(), CliError> {
    let path = config::config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg).map_err(|e| CliError::Validation {
        field: "config".into(),
        reason: format!("failed to serialize config: {e}"),
    })?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

/// Format config for display as readable TOML-shaped text.
fn format_config(cfg: &Config) -> String {
    use std::fmt::Write;
    let mut out = String::new();

    if let Some(ref default) = cfg.default_connection {
        let _ = writeln!(out, "default_connection = \"{default}\"");
        let _ = writeln!(out);
    }
    let _ = writeln!(out, "[defaults]");
    let _ = writeln!(out, "output = \"{}\"", cfg.defaults.output);
    let _ = writeln!(out, "color = \"{}\"", cfg.defaults.color);
    let _ = writeln!(out, "unit = \"{}\"", cfg.defaults.unit);
    let _ = writeln!(out, "direction = \"{}\"", cfg.defaults.direction);

    let mut names: Vec<_> = cfg.connections.keys().collect();
    names.sort();
    for name in names {
        let conn = &cfg.connections[name];
        let _ = writeln!(out);
        let _ = writeln!(out, "[connections.{name}]");
        if let Some(down) = conn.download_mbps {
            let _ = writeln!(out, "download_mbps = {down}");
        }
        if let Some(up) = conn.upload_mbps {
            let _ = writeln!(out, "upload_mbps = {up}");
        }
    }

    out
}

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            let config_path = config::config_path();
            eprintln!("wirecalc configuration wizard");
            eprintln!("   Config path: {}\n", config_path.display());

            // 1. Connection name
            let name: String = Input::new()
                .with_prompt("Connection name")
                .default("home".into())
                .interact_text()
                .map_err(prompt_err)?;

            // 2. Measured speeds
            let download: f64 = Input::new()
                .with_prompt("Download speed (Mbps)")
                .default(100.0)
                .interact_text()
                .map_err(prompt_err)?;

            let upload: f64 = Input::new()
                .with_prompt("Upload speed (Mbps)")
                .default(10.0)
                .interact_text()
                .map_err(prompt_err)?;

            if download <= 0.0 || upload <= 0.0 {
                return Err(CliError::Validation {
                    field: "speed".into(),
                    reason: "speeds must be greater than zero".into(),
                });
            }

            // 3. Merge into existing config and persist
            let mut cfg = config::load_config_or_default();
            cfg.connections.insert(
                name.clone(),
                Connection {
                    download_mbps: Some(download),
                    upload_mbps: Some(upload),
                },
            );
            cfg.default_connection = Some(name.clone());
            save_config(&cfg)?;

            eprintln!("\n✓ Configuration written to {}", config_path.display());
            eprintln!("  Default connection: {name}");
            eprintln!("\n  Try it: wirecalc transfer 4.7GB");

            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = config::load_config_or_default();
            let format = config::resolved_output(global, &cfg);
            let out = output::render_single(&format, &cfg, format_config, |_| {
                config::config_path().display().to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Set <key> <value> ───────────────────────────────────────
        ConfigCommand::Set { key, value } => {
            let mut cfg = config::load_config_or_default();

            let location = match key.as_str() {
                "output" => {
                    OutputFormat::from_str(&value, true).map_err(|_| CliError::Validation {
                        field: "output".into(),
                        reason: "must be one of: table, json, json-compact, yaml, plain".into(),
                    })?;
                    cfg.defaults.output = value;
                    "defaults".to_string()
                }
                "color" => {
                    ColorMode::from_str(&value, true).map_err(|_| CliError::Validation {
                        field: "color".into(),
                        reason: "must be 'auto', 'always', or 'never'".into(),
                    })?;
                    cfg.defaults.color = value;
                    "defaults".to_string()
                }
                "unit" => {
                    value.parse::<SizeUnit>().map_err(|_| CliError::Validation {
                        field: "unit".into(),
                        reason: "must be MB, GB, or TB".into(),
                    })?;
                    cfg.defaults.unit = value;
                    "defaults".to_string()
                }
                "direction" => {
                    value
                        .parse::<Direction>()
                        .map_err(|_| CliError::Validation {
                            field: "direction".into(),
                            reason: "must be 'download' or 'upload'".into(),
                        })?;
                    cfg.defaults.direction = value;
                    "defaults".to_string()
                }
                "download_mbps" | "upload_mbps" => {
                    let mbps: f64 = value.parse().map_err(|_| CliError::Validation {
                        field: key.clone(),
                        reason: "must be a number (Mbps)".into(),
                    })?;
                    if mbps <= 0.0 {
                        return Err(CliError::Validation {
                            field: key.clone(),
                            reason: "must be greater than zero".into(),
                        });
                    }

                    let name = config::active_connection_name(global, &cfg)
                        .unwrap_or_else(|| "home".into());
                    let conn = cfg.connections.entry(name.clone()).or_default();
                    if key == "download_mbps" {
                        conn.download_mbps = Some(mbps);
                    } else {
                        conn.upload_mbps = Some(mbps);
                    }
                    if cfg.default_connection.is_none() {
                        cfg.default_connection = Some(name.clone());
                    }
                    format!("connection '{name}'")
                }
                other => {
                    return Err(CliError::Validation {
                        field: other.into(),
                        reason: format!(
                            "unknown config key '{other}'. Valid keys: output, color, unit, \
                             direction, download_mbps, upload_mbps"
                        ),
                    });
                }
            };

            save_config(&cfg)?;
            eprintln!("✓ Set {key} in {location}");
            Ok(())
        }

        // ── Connections ─────────────────────────────────────────────
        ConfigCommand::Connections => {
            let cfg = config::load_config_or_default();
            let default = cfg.default_connection.as_deref().unwrap_or("");
            if cfg.connections.is_empty() {
                eprintln!("No connections configured. Run: wirecalc config init");
            } else {
                let mut names: Vec<_> = cfg.connections.keys().collect();
                names.sort();
                for name in names {
                    let marker = if name == default { " *" } else { "" };
                    println!("{name}{marker}");
                }
            }
            Ok(())
        }

        // ── Use <name> ─────────────────────────────────────────────
        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config_or_default();

            if !cfg.connections.contains_key(&name) {
                return Err(CliError::ConnectionNotFound {
                    available: util::available_names(&cfg),
                    name,
                });
            }

            cfg.default_connection = Some(name.clone());
            save_config(&cfg)?;
            eprintln!("✓ Default connection set to '{name}'");
            Ok(())
        }
    }
}
