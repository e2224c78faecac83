//! Broadcast framerate catalog.
//!
//! Every supported rate counts frames against an integer nominal divisor
//! (24, 25, 30, 50 or 60). The NTSC family runs 1.001 times slower than its
//! divisor suggests, which is why 29.97 and 59.94 carry a per-minute
//! drop-frame count.

use num_rational::Rational64;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

use crate::codec::FrameCodec;
use crate::error::TimecodeError;

/// Ratio of real to nominal time for integer rates.
const UNIT_RATIO: Rational64 = Rational64::new_raw(1, 1);

/// Ratio of real to nominal time for the NTSC family (1.001).
const NTSC_RATIO: Rational64 = Rational64::new_raw(1001, 1000);

/// One of the eight supported broadcast framerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Framerate {
    Fps24,
    Fps25,
    Fps30,
    Fps50,
    Fps60,
    /// 24000/1001, usually written 23.976 or 23.98
    Fps23_98,
    /// 30000/1001, NTSC
    Fps29_97,
    /// 60000/1001, NTSC high frame rate
    Fps59_94,
}

/// Immutable catalog entry for a framerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramerateInfo {
    /// Integer frames counted per timecode second.
    pub divisor: u32,
    /// Real time elapsed per nominal second (1 or 1001/1000).
    pub time_ratio: Rational64,
    /// Frame labels skipped at the start of each minute not divisible by ten.
    pub drop_per_minute: Option<u32>,
}

impl Framerate {
    /// Every catalog entry, integer rates first.
    pub const ALL: [Framerate; 8] = [
        Framerate::Fps24,
        Framerate::Fps25,
        Framerate::Fps30,
        Framerate::Fps50,
        Framerate::Fps60,
        Framerate::Fps23_98,
        Framerate::Fps29_97,
        Framerate::Fps59_94,
    ];

    /// Catalog lookup.
    pub const fn info(self) -> FramerateInfo {
        let (divisor, time_ratio, drop_per_minute) = match self {
            Self::Fps24 => (24, UNIT_RATIO, None),
            Self::Fps25 => (25, UNIT_RATIO, None),
            Self::Fps30 => (30, UNIT_RATIO, None),
            Self::Fps50 => (50, UNIT_RATIO, None),
            Self::Fps60 => (60, UNIT_RATIO, None),
            Self::Fps23_98 => (24, NTSC_RATIO, None),
            Self::Fps29_97 => (30, NTSC_RATIO, Some(2)),
            Self::Fps59_94 => (60, NTSC_RATIO, Some(4)),
        };
        FramerateInfo {
            divisor,
            time_ratio,
            drop_per_minute,
        }
    }

    /// Nominal integer divisor.
    #[inline]
    pub const fn divisor(self) -> u32 {
        self.info().divisor
    }

    /// Whether timecode at this rate may use drop-frame labels.
    #[inline]
    pub const fn supports_drop_frame(self) -> bool {
        self.info().drop_per_minute.is_some()
    }

    /// Exact frames per real second (e.g. 30000/1001).
    pub fn as_rational(self) -> Rational64 {
        let info = self.info();
        Rational64::from_integer(i64::from(info.divisor)) / info.time_ratio
    }

    /// Precise frames per real second as f64 (e.g. 29.97002997...).
    pub fn as_decimal(self) -> f64 {
        let rate = self.as_rational();
        *rate.numer() as f64 / *rate.denom() as f64
    }

    /// Number of distinct frame labels in a 24-hour day.
    pub fn frames_per_day(self, drop_frame: bool) -> i64 {
        FrameCodec::new(self, drop_frame).frames_per_day()
    }

    /// Resolve a decimal rate to a catalog entry.
    ///
    /// Integer rates must match exactly. Fractional rates match within a
    /// tolerance window so that both `23.976` and `23.98` resolve to the
    /// same entry:
    ///
    /// | input            | resolves to |
    /// |------------------|-------------|
    /// | `[23.97, 23.98]` | 23.98       |
    /// | `[29.97, 29.98)` | 29.97       |
    /// | `[59.94, 59.95)` | 59.94       |
    pub fn from_decimal(value: f64) -> Option<Self> {
        let resolved = match value {
            v if v == 24.0 => Self::Fps24,
            v if v == 25.0 => Self::Fps25,
            v if v == 30.0 => Self::Fps30,
            v if v == 50.0 => Self::Fps50,
            v if v == 60.0 => Self::Fps60,
            v if (23.97..=23.98).contains(&v) => Self::Fps23_98,
            v if (29.97..29.98).contains(&v) => Self::Fps29_97,
            v if (59.94..59.95).contains(&v) => Self::Fps59_94,
            _ => return None,
        };
        trace!(value, framerate = %resolved, "resolved decimal framerate");
        Some(resolved)
    }

    /// Parse decimal text and resolve it with [`Framerate::from_decimal`].
    pub fn from_decimal_str(text: &str) -> Option<Self> {
        text.trim()
            .parse::<f64>()
            .ok()
            .and_then(Self::from_decimal)
    }

    /// Canonical literal, as used in `@rate` suffixes.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fps24 => "24",
            Self::Fps25 => "25",
            Self::Fps30 => "30",
            Self::Fps50 => "50",
            Self::Fps60 => "60",
            Self::Fps23_98 => "23.98",
            Self::Fps29_97 => "29.97",
            Self::Fps59_94 => "59.94",
        }
    }
}

impl fmt::Display for Framerate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Framerate {
    type Err = TimecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal_str(s).ok_or_else(|| TimecodeError::UnknownFramerate(s.to_string()))
    }
}

impl From<Framerate> for String {
    fn from(rate: Framerate) -> Self {
        rate.as_str().to_string()
    }
}

impl TryFrom<String> for Framerate {
    type Error = TimecodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
