// ── File-size units ──
//
// Every estimate runs on megabytes; these conversions are the only place
// size units exist. Multipliers are binary: 1 GB = 1024 MB, 1 TB =
// 1024 × 1024 MB.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Byte-multiple units accepted for file sizes.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum SizeUnit {
    #[default]
    #[strum(serialize = "MB")]
    #[serde(rename = "MB")]
    Megabytes,
    #[strum(serialize = "GB")]
    #[serde(rename = "GB")]
    Gigabytes,
    #[strum(serialize = "TB")]
    #[serde(rename = "TB")]
    Terabytes,
}

impl SizeUnit {
    /// Multiplier from this unit to megabytes.
    pub fn mb_multiplier(self) -> f64 {
        match self {
            SizeUnit::Megabytes => 1.0,
            SizeUnit::Gigabytes => 1024.0,
            SizeUnit::Terabytes => 1024.0 * 1024.0,
        }
    }

    /// Convert a size expressed in this unit to megabytes.
    pub fn to_megabytes(self, value: f64) -> f64 {
        value * self.mb_multiplier()
    }

    /// Parse a unit symbol, treating anything unrecognized as megabytes.
    ///
    /// This is the permissive entry point for loosely-typed sources such
    /// as config values: an unknown symbol means "no scaling", not an
    /// error. Callers that want rejection use [`str::parse`] instead.
    pub fn from_symbol(symbol: &str) -> Self {
        symbol.trim().parse().unwrap_or_default()
    }
}

/// Split a size argument like `70`, `70GB`, or `1.5tb` into its numeric
/// value and optional unit suffix.
///
/// The numeric part must parse as a float; a present suffix must be one
/// of MB/GB/TB (any case). Positivity is not checked here -- that is the
/// estimator's validation step.
pub fn parse_size_spec(spec: &str) -> Result<(f64, Option<SizeUnit>), EngineError> {
    let trimmed = spec.trim();
    let split = trimmed
        .find(|c: char| c.is_ascii_alphabetic())
        .unwrap_or(trimmed.len());
    let (number, suffix) = trimmed.split_at(split);

    let value: f64 = number
        .trim()
        .parse()
        .map_err(|_| EngineError::invalid("file size", format!("`{spec}` is not a number")))?;

    let unit = match suffix.trim() {
        "" => None,
        s => Some(
            s.parse::<SizeUnit>()
                .map_err(|_| EngineError::invalid("file size", format!("unknown unit `{s}`")))?,
        ),
    };

    Ok((value, unit))
}
