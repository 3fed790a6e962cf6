// ── Streaming readiness ──
//
// Compares an upload link against a stream profile's bitrate plus
// headroom. Encoders burst above their nominal target, so the bar is
// target × HEADROOM_MULTIPLIER, not the raw bitrate.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::EngineError;
use crate::estimate::require_positive;

/// Upload capacity required beyond the nominal bitrate.
pub const HEADROOM_MULTIPLIER: f64 = 1.3;

/// Stream quality profiles and their target video bitrates.
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
#[strum(ascii_case_insensitive)]
pub enum StreamingProfile {
    #[strum(serialize = "720p30")]
    #[serde(rename = "720p30")]
    P720p30,
    #[strum(serialize = "720p60")]
    #[serde(rename = "720p60")]
    P720p60,
    #[strum(serialize = "1080p30")]
    #[serde(rename = "1080p30")]
    P1080p30,
    #[strum(serialize = "1080p60")]
    #[serde(rename = "1080p60")]
    P1080p60,
    #[strum(serialize = "1440p60")]
    #[serde(rename = "1440p60")]
    P1440p60,
    #[strum(serialize = "4k30")]
    #[serde(rename = "4k30")]
    P4k30,
    #[strum(serialize = "4k60")]
    #[serde(rename = "4k60")]
    P4k60,
}

impl StreamingProfile {
    /// Target video bitrate in Mbps.
    pub fn target_bitrate_mbps(self) -> f64 {
        match self {
            StreamingProfile::P720p30 => 3.0,
            StreamingProfile::P720p60 => 4.5,
            StreamingProfile::P1080p30 => 5.0,
            StreamingProfile::P1080p60 => 8.0,
            StreamingProfile::P1440p60 => 12.0,
            StreamingProfile::P4k30 => 16.0,
            StreamingProfile::P4k60 => 25.0,
        }
    }

    /// Upload speed recommended for this profile (bitrate plus headroom).
    pub fn required_speed_mbps(self) -> f64 {
        self.target_bitrate_mbps() * HEADROOM_MULTIPLIER
    }

    /// Parse a profile key, with a distinct error for unknown names.
    pub fn from_key(key: &str) -> Result<Self, EngineError> {
        key.trim()
            .parse()
            .map_err(|_| EngineError::UnknownProfile { name: key.to_owned() })
    }

    /// Short human description for preset listings.
    pub fn label(self) -> &'static str {
        match self {
            StreamingProfile::P720p30 => "720p at 30 fps",
            StreamingProfile::P720p60 => "720p at 60 fps",
            StreamingProfile::P1080p30 => "1080p at 30 fps",
            StreamingProfile::P1080p60 => "1080p at 60 fps",
            StreamingProfile::P1440p60 => "1440p at 60 fps",
            StreamingProfile::P4k30 => "4K at 30 fps",
            StreamingProfile::P4k60 => "4K at 60 fps",
        }
    }
}

/// Outcome of checking an upload link against one profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StreamingVerdict {
    pub profile: StreamingProfile,
    pub upload_speed_mbps: f64,
    pub target_bitrate_mbps: f64,
    pub required_speed_mbps: f64,
    pub is_ready: bool,
}

impl StreamingVerdict {
    /// Evaluate whether `upload_speed_mbps` can carry `profile`.
    ///
    /// The upload speed must be finite and strictly positive. Readiness is
    /// `upload >= target × 1.3`; equality counts as ready.
    pub fn evaluate(profile: StreamingProfile, upload_speed_mbps: f64) -> Result<Self, EngineError> {
        require_positive(upload_speed_mbps, "upload speed")?;

        let target_bitrate_mbps = profile.target_bitrate_mbps();
        let required_speed_mbps = profile.required_speed_mbps();
        let is_ready = upload_speed_mbps >= required_speed_mbps;
        debug!(
            %profile,
            upload_speed_mbps,
            required_speed_mbps,
            is_ready,
            "evaluated streaming readiness"
        );

        Ok(Self {
            profile,
            upload_speed_mbps,
            target_bitrate_mbps,
            required_speed_mbps,
            is_ready,
        })
    }

    /// Headline status label.
    pub fn status_label(&self) -> &'static str {
        if self.is_ready {
            "Ready to Stream"
        } else {
            "Not Enough Upload"
        }
    }

    /// One-line numeric summary, one decimal per figure.
    pub fn detail_line(&self) -> String {
        format!(
            "Target: {:.1} Mbps • Recommended: {:.1} Mbps • Yours: {:.1} Mbps",
            self.target_bitrate_mbps, self.required_speed_mbps, self.upload_speed_mbps
        )
    }

    /// Advisory sentence for the verdict.
    pub fn advisory(&self) -> &'static str {
        if self.is_ready {
            "You have enough upload speed for this stream profile."
        } else {
            "Lower the resolution/FPS or upgrade your upload speed for smoother streaming."
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn bitrates_match_the_published_table() {
        assert_eq!(StreamingProfile::P720p30.target_bitrate_mbps(), 3.0);
        assert_eq!(StreamingProfile::P720p60.target_bitrate_mbps(), 4.5);
        assert_eq!(StreamingProfile::P1080p30.target_bitrate_mbps(), 5.0);
        assert_eq!(StreamingProfile::P1080p60.target_bitrate_mbps(), 8.0);
        assert_eq!(StreamingProfile::P1440p60.target_bitrate_mbps(), 12.0);
        assert_eq!(StreamingProfile::P4k30.target_bitrate_mbps(), 16.0);
        assert_eq!(StreamingProfile::P4k60.target_bitrate_mbps(), 25.0);
    }

    #[test]
    fn profile_keys_round_trip() {
        for profile in StreamingProfile::iter() {
            assert_eq!(StreamingProfile::from_key(&profile.to_string()).unwrap(), profile);
        }
    }

    #[test]
    fn unknown_profile_key_is_a_distinct_error() {
        let err = StreamingProfile::from_key("8k120").unwrap_err();
        assert!(matches!(err, EngineError::UnknownProfile { name } if name == "8k120"));
    }

    #[test]
    fn nine_mbps_cannot_carry_1080p60() {
        // required = 8 × 1.3 = 10.4
        let verdict = StreamingVerdict::evaluate(StreamingProfile::P1080p60, 9.0).unwrap();
        assert_eq!(verdict.required_speed_mbps, 8.0 * 1.3);
        assert!(!verdict.is_ready);
        assert_eq!(verdict.status_label(), "Not Enough Upload");
    }

    #[test]
    fn five_mbps_carries_720p30() {
        // required = 3 × 1.3 = 3.9
        let verdict = StreamingVerdict::evaluate(StreamingProfile::P720p30, 5.0).unwrap();
        assert!(verdict.is_ready);
        assert_eq!(verdict.status_label(), "Ready to Stream");
    }

    #[test]
    fn exact_required_speed_counts_as_ready() {
        let required = StreamingProfile::P1080p30.required_speed_mbps();
        let verdict = StreamingVerdict::evaluate(StreamingProfile::P1080p30, required).unwrap();
        assert!(verdict.is_ready);
    }

    #[test]
    fn detail_line_uses_one_decimal() {
        let verdict = StreamingVerdict::evaluate(StreamingProfile::P1080p60, 9.0).unwrap();
        insta::assert_snapshot!(
            verdict.detail_line(),
            @"Target: 8.0 Mbps • Recommended: 10.4 Mbps • Yours: 9.0 Mbps"
        );
    }

    #[test]
    fn non_positive_upload_speed_is_rejected() {
        assert!(StreamingVerdict::evaluate(StreamingProfile::P720p30, 0.0).is_err());
        assert!(StreamingVerdict::evaluate(StreamingProfile::P720p30, -1.0).is_err());
        assert!(StreamingVerdict::evaluate(StreamingProfile::P720p30, f64::NAN).is_err());
    }

    #[test]
    fn advisory_matches_verdict() {
        let ready = StreamingVerdict::evaluate(StreamingProfile::P720p30, 50.0).unwrap();
        assert_eq!(
            ready.advisory(),
            "You have enough upload speed for this stream profile."
        );
        let short = StreamingVerdict::evaluate(StreamingProfile::P4k60, 10.0).unwrap();
        assert_eq!(
            short.advisory(),
            "Lower the resolution/FPS or upgrade your upload speed for smoother streaming."
        );
    }
}
