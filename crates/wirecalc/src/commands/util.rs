//! Shared helpers for command handlers.

use wirecalc_core::{
    Clock, Direction, FixedClock, LinkPreset, SizeUnit, StreamingProfile, SystemClock,
};

use crate::cli::{DirectionArg, GlobalOpts, PresetArg, ProfileArg, UnitArg};
use crate::config::{self, Config, Connection};
use crate::error::CliError;

// ── CLI arg → engine type bridges ───────────────────────────────────

impl From<UnitArg> for SizeUnit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Megabytes => SizeUnit::Megabytes,
            UnitArg::Gigabytes => SizeUnit::Gigabytes,
            UnitArg::Terabytes => SizeUnit::Terabytes,
        }
    }
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Download => Direction::Download,
            DirectionArg::Upload => Direction::Upload,
        }
    }
}

impl From<PresetArg> for LinkPreset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Dial => LinkPreset::Dial,
            PresetArg::Broadband => LinkPreset::Broadband,
            PresetArg::Fast => LinkPreset::Fast,
            PresetArg::VeryFast => LinkPreset::VeryFast,
            PresetArg::Gigabit => LinkPreset::Gigabit,
        }
    }
}

impl From<ProfileArg> for StreamingProfile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::P720p30 => StreamingProfile::P720p30,
            ProfileArg::P720p60 => StreamingProfile::P720p60,
            ProfileArg::P1080p30 => StreamingProfile::P1080p30,
            ProfileArg::P1080p60 => StreamingProfile::P1080p60,
            ProfileArg::P1440p60 => StreamingProfile::P1440p60,
            ProfileArg::P4k30 => StreamingProfile::P4k30,
            ProfileArg::P4k60 => StreamingProfile::P4k60,
        }
    }
}

// ── Invocation-scoped helpers ───────────────────────────────────────

/// Build the clock for this invocation: fixed when --now is given.
pub fn resolve_clock(global: &GlobalOpts) -> Result<Box<dyn Clock>, CliError> {
    match global.now.as_deref() {
        Some(stamp) => {
            let fixed = chrono::DateTime::parse_from_rfc3339(stamp)
                .map_err(|e| CliError::Validation {
                    field: "--now".into(),
                    reason: format!("expected an RFC 3339 timestamp: {e}"),
                })?
                .with_timezone(&chrono::Local);
            Ok(Box::new(FixedClock(fixed)))
        }
        None => Ok(Box::new(SystemClock)),
    }
}

/// Look up the active connection, if one is named.
///
/// No name in play means `Ok(None)`. A name that resolves to nothing is an
/// error; when no config file exists at all the diagnostic points there
/// instead.
pub fn resolve_connection<'a>(
    global: &GlobalOpts,
    config: &'a Config,
) -> Result<Option<(String, &'a Connection)>, CliError> {
    let Some(name) = config::active_connection_name(global, config) else {
        return Ok(None);
    };

    if let Some(conn) = config.connections.get(&name) {
        return Ok(Some((name, conn)));
    }

    let path = config::config_path();
    if !path.exists() {
        return Err(CliError::NoConfig {
            path: path.display().to_string(),
        });
    }

    Err(CliError::ConnectionNotFound {
        name,
        available: available_names(config),
    })
}

/// Comma-joined connection names for error help, `(none)` when empty.
pub fn available_names(config: &Config) -> String {
    if config.connections.is_empty() {
        return "(none)".into();
    }
    let mut names: Vec<_> = config.connections.keys().cloned().collect();
    names.sort();
    names.join(", ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn arg_enums_map_onto_engine_enums() {
        assert_eq!(SizeUnit::from(UnitArg::Gigabytes), SizeUnit::Gigabytes);
        assert_eq!(Direction::from(DirectionArg::Upload), Direction::Upload);
        assert_eq!(LinkPreset::from(PresetArg::VeryFast), LinkPreset::VeryFast);
        assert_eq!(
            StreamingProfile::from(ProfileArg::P1080p60),
            StreamingProfile::P1080p60
        );
    }

    #[test]
    fn fixed_clock_parses_offsets() {
        let global = GlobalOpts {
            connection: None,
            output: None,
            color: None,
            verbose: 0,
            quiet: false,
            now: Some("2025-01-15T14:30:00+00:00".into()),
        };
        let clock = resolve_clock(&global).unwrap();
        assert_eq!(clock.now().timestamp(), 1_736_951_400);
    }

    #[test]
    fn malformed_now_is_a_usage_error() {
        let global = GlobalOpts {
            connection: None,
            output: None,
            color: None,
            verbose: 0,
            quiet: false,
            now: Some("yesterday-ish".into()),
        };
        // Map away the clock first: Box<dyn Clock> has no Debug impl.
        let err = resolve_clock(&global).map(|_| ()).unwrap_err();
        assert!(matches!(err, CliError::Validation { ref field, .. } if field == "--now"));
    }

    #[test]
    fn available_names_is_sorted_or_none() {
        let mut config = Config::default();
        assert_eq!(available_names(&config), "(none)");

        config.connections.insert("office".into(), Connection::default());
        config.connections.insert("home".into(), Connection::default());
        assert_eq!(available_names(&config), "home, office");
    }
}
