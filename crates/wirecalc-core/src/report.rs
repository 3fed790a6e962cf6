// ── Transfer report assembly ──
//
// One call that runs the whole pipeline for a request: validate,
// normalize, compute, classify, format. Callers hand in a clock so the
// ETA is testable and scriptable.

use serde::Serialize;

use crate::classify::Tier;
use crate::clock::Clock;
use crate::error::EngineError;
use crate::estimate::{Direction, TransferRequest};
use crate::format::{self, DurationParts};

/// Fully rendered estimate for one transfer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferReport {
    pub direction: Direction,
    pub size_mb: f64,
    pub speed_mbps: f64,
    pub total_seconds: f64,
    pub duration: DurationParts,
    pub duration_text: String,
    pub eta: String,
    pub tier: Tier,
    pub recommendation: &'static str,
    pub icon: &'static str,
}

impl TransferReport {
    /// Run the full estimation pipeline for `request`.
    pub fn build(request: &TransferRequest, clock: &dyn Clock) -> Result<Self, EngineError> {
        let estimate = request.estimate()?;
        let duration = DurationParts::from_seconds(estimate.total_seconds);
        let tier = Tier::classify(estimate.total_seconds);

        Ok(Self {
            direction: request.direction,
            size_mb: estimate.size_mb,
            speed_mbps: request.speed_mbps,
            total_seconds: estimate.total_seconds,
            duration,
            duration_text: duration.phrase(),
            eta: format::eta(clock.now(), estimate.total_seconds),
            tier,
            recommendation: tier.message(),
            icon: tier.icon(),
        })
    }

    /// `Download will finish at approximately 02:31 PM`.
    pub fn completion_line(&self) -> String {
        format!(
            "{} will finish at approximately {}",
            self.direction.label(),
            self.eta
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{Local, TimeZone};
    use pretty_assertions::assert_eq;

    use crate::clock::FixedClock;
    use crate::units::SizeUnit;

    use super::*;

    fn afternoon_clock() -> FixedClock {
        FixedClock(Local.with_ymd_and_hms(2025, 1, 15, 14, 30, 0).unwrap())
    }

    #[test]
    fn gigabyte_download_on_fast_broadband() {
        // 1000 MB at 100 Mbps: 80 s, quick tier, ETA 80 s out
        let request = TransferRequest {
            size_value: 1000.0,
            size_unit: SizeUnit::Megabytes,
            speed_mbps: 100.0,
            direction: Direction::Download,
        };
        let report = TransferReport::build(&request, &afternoon_clock()).unwrap();

        assert_eq!(report.total_seconds, 80.0);
        assert_eq!(report.duration_text, "1 minute, 20 seconds");
        assert_eq!(report.eta, "02:31 PM");
        assert_eq!(report.tier, Tier::Quick);
        assert_eq!(report.recommendation, "Quick transfer, just a few minutes.");
        assert_eq!(report.icon, "OK");
        assert_eq!(
            report.completion_line(),
            "Download will finish at approximately 02:31 PM"
        );
    }

    #[test]
    fn terabyte_on_basic_broadband_is_multiday() {
        let request = TransferRequest {
            size_value: 1.0,
            size_unit: SizeUnit::Terabytes,
            speed_mbps: 10.0,
            direction: Direction::Download,
        };
        let report = TransferReport::build(&request, &afternoon_clock()).unwrap();

        assert_eq!(report.size_mb, 1_048_576.0);
        assert_eq!(report.total_seconds, 838_860.8);
        assert_eq!(report.tier, Tier::Multiday);
        assert_eq!(report.duration.days, 9);
    }

    #[test]
    fn upload_direction_flows_into_the_completion_line() {
        let request = TransferRequest {
            size_value: 500.0,
            size_unit: SizeUnit::Megabytes,
            speed_mbps: 20.0,
            direction: Direction::Upload,
        };
        let report = TransferReport::build(&request, &afternoon_clock()).unwrap();
        assert!(report.completion_line().starts_with("Upload will finish"));
    }

    #[test]
    fn invalid_request_never_reaches_the_clock() {
        let request = TransferRequest {
            size_value: -3.0,
            size_unit: SizeUnit::Megabytes,
            speed_mbps: 100.0,
            direction: Direction::Download,
        };
        assert!(TransferReport::build(&request, &afternoon_clock()).is_err());
    }

    #[test]
    fn report_serializes_for_machine_output() {
        let request = TransferRequest {
            size_value: 1000.0,
            size_unit: SizeUnit::Megabytes,
            speed_mbps: 100.0,
            direction: Direction::Download,
        };
        let report = TransferReport::build(&request, &afternoon_clock()).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["direction"], "download");
        assert_eq!(json["tier"], "quick");
        assert_eq!(json["duration"]["minutes"], 1);
        assert_eq!(json["eta"], "02:31 PM");
    }
}
