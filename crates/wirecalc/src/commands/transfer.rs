//! Transfer estimation command handler.

use owo_colors::OwoColorize;
use wirecalc_core::{
    Direction, LinkPreset, SizeUnit, TransferReport, TransferRequest, parse_size_spec,
};

use crate::cli::{GlobalOpts, TransferArgs};
use crate::config::{self, Config, Connection};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Speed resolution ────────────────────────────────────────────────

/// Pick the link speed: --speed > --preset > saved connection.
fn resolve_speed(
    speed: Option<f64>,
    preset: Option<LinkPreset>,
    direction: Direction,
    config: &Config,
    global: &GlobalOpts,
) -> Result<f64, CliError> {
    if let Some(mbps) = speed {
        return Ok(mbps);
    }
    if let Some(preset) = preset {
        return Ok(preset.mbps());
    }
    if let Some((name, conn)) = util::resolve_connection(global, config)? {
        return connection_speed(&name, conn, direction);
    }
    Err(CliError::MissingSpeed { kind: "link" })
}

/// Read the directional speed out of a saved connection.
fn connection_speed(name: &str, conn: &Connection, direction: Direction) -> Result<f64, CliError> {
    let (key, value) = match direction {
        Direction::Download => ("download_mbps", conn.download_mbps),
        Direction::Upload => ("upload_mbps", conn.upload_mbps),
    };
    value.ok_or_else(|| CliError::Validation {
        field: format!("connection '{name}'"),
        reason: format!("no {key} saved; set it with: wirecalc config set {key} <MBPS>"),
    })
}

// ── Detail view ─────────────────────────────────────────────────────

fn detail(report: &TransferReport, color: bool) -> String {
    let duration = if color {
        report.duration_text.bold().to_string()
    } else {
        report.duration_text.clone()
    };

    [
        format!("Direction:  {}", report.direction.label()),
        format!("Size:       {} MB", report.size_mb),
        format!("Speed:      {} Mbps", report.speed_mbps),
        format!("Duration:   {duration}"),
        report.completion_line(),
        format!("[{}] {}", report.icon, report.recommendation),
    ]
    .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: TransferArgs, config: &Config, global: &GlobalOpts) -> Result<(), CliError> {
    let TransferArgs {
        size,
        unit,
        speed,
        preset,
        direction,
    } = args;

    let (size_value, suffix) = parse_size_spec(&size)?;
    let direction =
        direction.map_or_else(|| config::resolved_direction(config), Direction::from);
    let size_unit = suffix
        .or_else(|| unit.map(SizeUnit::from))
        .unwrap_or_else(|| config::resolved_unit(config));
    let speed_mbps = resolve_speed(
        speed,
        preset.map(LinkPreset::from),
        direction,
        config,
        global,
    )?;

    let request = TransferRequest {
        size_value,
        size_unit,
        speed_mbps,
        direction,
    };
    let clock = util::resolve_clock(global)?;
    let report = TransferReport::build(&request, clock.as_ref())?;

    let color = output::should_color(&config::resolved_color(global, config));
    let format = config::resolved_output(global, config);
    let out = output::render_single(
        &format,
        &report,
        |r| detail(r, color),
        |r| r.total_seconds.to_string(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}

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

    fn config_with_home(download: Option<f64>, upload: Option<f64>) -> Config {
        let mut config = Config {
            default_connection: Some("home".into()),
            ..Config::default()
        };
        config.connections.insert(
            "home".into(),
            Connection {
                download_mbps: download,
                upload_mbps: upload,
            },
        );
        config
    }

    #[test]
    fn explicit_speed_wins_over_everything() {
        let config = config_with_home(Some(250.0), Some(25.0));
        let speed = resolve_speed(
            Some(42.0),
            Some(LinkPreset::Gigabit),
            Direction::Download,
            &config,
            &bare_global(),
        )
        .unwrap();
        assert_eq!(speed, 42.0);
    }

    #[test]
    fn preset_wins_over_connection() {
        let config = config_with_home(Some(250.0), Some(25.0));
        let speed = resolve_speed(
            None,
            Some(LinkPreset::Broadband),
            Direction::Download,
            &config,
            &bare_global(),
        )
        .unwrap();
        assert_eq!(speed, 10.0);
    }

    #[test]
    fn connection_supplies_directional_speed() {
        let config = config_with_home(Some(250.0), Some(25.0));

        let down = resolve_speed(None, None, Direction::Download, &config, &bare_global());
        let up = resolve_speed(None, None, Direction::Upload, &config, &bare_global());

        assert_eq!(down.unwrap(), 250.0);
        assert_eq!(up.unwrap(), 25.0);
    }

    #[test]
    fn connection_without_the_needed_field_errors() {
        let config = config_with_home(Some(250.0), None);
        let err =
            resolve_speed(None, None, Direction::Upload, &config, &bare_global()).unwrap_err();
        assert!(
            matches!(err, CliError::Validation { ref reason, .. } if reason.contains("upload_mbps"))
        );
    }

    #[test]
    fn nothing_to_go_on_is_a_missing_speed_error() {
        let config = Config::default();
        let err =
            resolve_speed(None, None, Direction::Download, &config, &bare_global()).unwrap_err();
        assert!(matches!(err, CliError::MissingSpeed { kind: "link" }));
    }

    #[test]
    fn detail_view_reads_top_to_bottom() {
        let request = TransferRequest {
            size_value: 1000.0,
            size_unit: SizeUnit::Megabytes,
            speed_mbps: 100.0,
            direction: Direction::Download,
        };
        let clock = wirecalc_core::FixedClock(
            chrono::DateTime::parse_from_rfc3339("2025-01-15T14:30:00+00:00")
                .unwrap()
                .with_timezone(&chrono::Local),
        );
        let report = TransferReport::build(&request, &clock).unwrap();

        let text = detail(&report, false);
        assert!(text.starts_with("Direction:  Download"));
        assert!(text.contains("Size:       1000 MB"));
        assert!(text.contains("Duration:   1 minute, 20 seconds"));
        assert!(text.contains("[OK] Quick transfer, just a few minutes."));
    }
}
