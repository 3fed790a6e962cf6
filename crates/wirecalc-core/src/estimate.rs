// ── Transfer-time estimation ──
//
// The core computation: validate the request, normalize the size to
// megabytes, then total_seconds = size_mb × 8 / speed_mbps. Validation
// runs first, so the division can never see a zero or negative speed.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::EngineError;
use crate::units::SizeUnit;

/// Which way the bytes flow. Only affects labeling, never the math.
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
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Download,
    Upload,
}

impl Direction {
    /// Capitalized label for completion sentences ("Download will finish…").
    pub fn label(self) -> &'static str {
        match self {
            Direction::Download => "Download",
            Direction::Upload => "Upload",
        }
    }
}

/// One transfer to estimate. Values are taken as-is; [`estimate`]
/// validates them.
///
/// [`estimate`]: TransferRequest::estimate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferRequest {
    pub size_value: f64,
    pub size_unit: SizeUnit,
    pub speed_mbps: f64,
    pub direction: Direction,
}

/// Outcome of the size/speed arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate {
    /// Transfer size normalized to megabytes.
    pub size_mb: f64,
    /// Estimated wall time, fractional seconds.
    pub total_seconds: f64,
}

impl TransferRequest {
    /// Validate the request and compute its duration estimate.
    ///
    /// Size and speed must be finite and strictly positive; failures name
    /// the offending field.
    pub fn estimate(&self) -> Result<Estimate, EngineError> {
        require_positive(self.size_value, "file size")?;
        require_positive(self.speed_mbps, "internet speed")?;

        let size_mb = self.size_unit.to_megabytes(self.size_value);
        let total_seconds = (size_mb * 8.0) / self.speed_mbps;
        debug!(
            size_mb,
            speed_mbps = self.speed_mbps,
            total_seconds,
            "estimated transfer"
        );

        Ok(Estimate {
            size_mb,
            total_seconds,
        })
    }
}

pub(crate) fn require_positive(value: f64, field: &'static str) -> Result<(), EngineError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EngineError::invalid(field, "must be greater than zero"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn request(size: f64, unit: SizeUnit, speed: f64) -> TransferRequest {
        TransferRequest {
            size_value: size,
            size_unit: unit,
            speed_mbps: speed,
            direction: Direction::Download,
        }
    }

    #[test]
    fn megabytes_at_hundred_mbps() {
        // 1000 MB × 8 / 100 Mbps = 80 s
        let est = request(1000.0, SizeUnit::Megabytes, 100.0).estimate().unwrap();
        assert_eq!(est.size_mb, 1000.0);
        assert_eq!(est.total_seconds, 80.0);
    }

    #[test]
    fn terabyte_at_ten_mbps() {
        let est = request(1.0, SizeUnit::Terabytes, 10.0).estimate().unwrap();
        assert_eq!(est.size_mb, 1_048_576.0);
        assert_eq!(est.total_seconds, 838_860.8);
    }

    #[test]
    fn duration_scales_linearly_with_size_and_speed() {
        let base = request(500.0, SizeUnit::Megabytes, 50.0).estimate().unwrap();
        let doubled_size = request(1000.0, SizeUnit::Megabytes, 50.0).estimate().unwrap();
        let doubled_speed = request(500.0, SizeUnit::Megabytes, 100.0).estimate().unwrap();
        assert_eq!(doubled_size.total_seconds, base.total_seconds * 2.0);
        assert_eq!(doubled_speed.total_seconds, base.total_seconds / 2.0);
    }

    #[test]
    fn zero_size_is_rejected() {
        let err = request(0.0, SizeUnit::Megabytes, 100.0).estimate().unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidInput { field: "file size", .. }
        ));
    }

    #[test]
    fn negative_speed_is_rejected() {
        let err = request(10.0, SizeUnit::Megabytes, -5.0).estimate().unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidInput { field: "internet speed", .. }
        ));
    }

    #[test]
    fn nan_inputs_are_rejected() {
        assert!(request(f64::NAN, SizeUnit::Megabytes, 100.0).estimate().is_err());
        assert!(request(10.0, SizeUnit::Megabytes, f64::NAN).estimate().is_err());
        assert!(request(f64::INFINITY, SizeUnit::Megabytes, 100.0).estimate().is_err());
    }

    #[test]
    fn validation_error_names_the_field() {
        let err = request(10.0, SizeUnit::Megabytes, 0.0).estimate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid internet speed: must be greater than zero"
        );
    }

    #[test]
    fn direction_labels() {
        assert_eq!(Direction::Download.label(), "Download");
        assert_eq!(Direction::Upload.label(), "Upload");
    }
}
