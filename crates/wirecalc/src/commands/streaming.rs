//! Streaming readiness command handler.

use owo_colors::OwoColorize;
use wirecalc_core::{StreamingProfile, StreamingVerdict};

use crate::cli::{GlobalOpts, StreamingArgs};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Upload resolution ───────────────────────────────────────────────

/// Pick the upload speed: positional value > saved connection.
fn resolve_upload(
    upload: Option<f64>,
    config: &Config,
    global: &GlobalOpts,
) -> Result<f64, CliError> {
    if let Some(mbps) = upload {
        return Ok(mbps);
    }
    if let Some((name, conn)) = util::resolve_connection(global, config)? {
        return conn.upload_mbps.ok_or_else(|| CliError::Validation {
            field: format!("connection '{name}'"),
            reason: "no upload_mbps saved; set it with: wirecalc config set upload_mbps <MBPS>"
                .into(),
        });
    }
    Err(CliError::MissingSpeed { kind: "upload" })
}

// ── Detail view ─────────────────────────────────────────────────────

fn detail(verdict: &StreamingVerdict, color: bool) -> String {
    let status = if color {
        if verdict.is_ready {
            verdict.status_label().green().bold().to_string()
        } else {
            verdict.status_label().red().bold().to_string()
        }
    } else {
        verdict.status_label().to_string()
    };

    [
        format!(
            "Profile:  {} ({})",
            verdict.profile,
            verdict.profile.label()
        ),
        format!("Status:   {status}"),
        verdict.detail_line(),
        verdict.advisory().to_string(),
    ]
    .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: StreamingArgs, config: &Config, global: &GlobalOpts) -> Result<(), CliError> {
    let StreamingArgs { upload, profile } = args;

    let profile = StreamingProfile::from(profile);
    let upload_mbps = resolve_upload(upload, config, global)?;
    let verdict = StreamingVerdict::evaluate(profile, upload_mbps)?;

    let color = output::should_color(&config::resolved_color(global, config));
    let format = config::resolved_output(global, config);
    let out = output::render_single(
        &format,
        &verdict,
        |v| detail(v, color),
        |v| {
            if v.is_ready {
                "ready".into()
            } else {
                "not-ready".into()
            }
        },
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
