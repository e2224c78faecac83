//! Conversion between dense frame indices and SMPTE display fields.
//!
//! Drop-frame rates skip `drop_per_minute` labels at second zero of every
//! minute that is not a multiple of ten. The frame index never skips: it is
//! a gap-free, zero-based count of the labels that actually exist.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::framerate::Framerate;

/// Wall-clock display fields of a timecode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DisplayFields {
    /// Hours (0-23)
    pub hours: u32,
    /// Minutes (0-59)
    pub minutes: u32,
    /// Seconds (0-59)
    pub seconds: u32,
    /// Frames (0 to divisor-1)
    pub frames: u32,
    /// Whether the fields are drop-frame labels
    pub drop_frame: bool,
}

impl DisplayFields {
    pub const fn new(hours: u32, minutes: u32, seconds: u32, frames: u32, drop_frame: bool) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            frames,
            drop_frame,
        }
    }

    /// Separator between seconds and frames.
    #[inline]
    pub const fn frame_separator(&self) -> char {
        if self.drop_frame {
            ';'
        } else {
            ':'
        }
    }
}

impl fmt::Display for DisplayFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}{}{:02}",
            self.hours,
            self.minutes,
            self.seconds,
            self.frame_separator(),
            self.frames
        )
    }
}

/// Frame index codec for one framerate and drop-frame mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCodec {
    divisor: i64,
    drop_per_minute: i64,
    drop_frame: bool,
}

impl FrameCodec {
    /// Build a codec. A drop-frame flag on a rate without a drop count
    /// counts as non-drop; [`crate::Timecode`] rejects that combination
    /// before it ever reaches the codec.
    pub fn new(framerate: Framerate, drop_frame: bool) -> Self {
        let info = framerate.info();
        let drop_per_minute = match (drop_frame, info.drop_per_minute) {
            (true, Some(drop)) => i64::from(drop),
            _ => 0,
        };
        Self {
            divisor: i64::from(info.divisor),
            drop_per_minute,
            drop_frame: drop_per_minute > 0,
        }
    }

    #[inline]
    pub const fn divisor(&self) -> i64 {
        self.divisor
    }

    #[inline]
    pub const fn drop_per_minute(&self) -> i64 {
        self.drop_per_minute
    }

    /// Number of frame labels in one 24-hour day: 1440 minutes, of which
    /// the 144 multiples of ten keep all their labels.
    pub const fn frames_per_day(&self) -> i64 {
        self.divisor * 3600 * 24 - self.drop_per_minute * (1440 - 144)
    }

    /// Whether `fields` names a label skipped by drop-frame counting.
    pub fn is_dropped_label(&self, fields: &DisplayFields) -> bool {
        self.drop_per_minute > 0
            && fields.seconds == 0
            && fields.minutes % 10 != 0
            && i64::from(fields.frames) < self.drop_per_minute
    }

    /// Fields to frame index. Fields are assumed valid for this codec.
    pub fn encode(&self, fields: &DisplayFields) -> i64 {
        let hours = i64::from(fields.hours);
        let minutes = i64::from(fields.minutes);
        let total_minutes = 60 * hours + minutes;

        let raw_index = self.divisor * 3600 * hours
            + self.divisor * 60 * minutes
            + self.divisor * i64::from(fields.seconds)
            + i64::from(fields.frames);
        let dropped_so_far = self.drop_per_minute * (total_minutes - total_minutes / 10);

        raw_index - dropped_so_far
    }

    /// Frame index to fields. Any index is accepted; it is floor-reduced into
    /// a single day first, so negative indices count back from midnight.
    pub fn decode(&self, index: i64) -> DisplayFields {
        let index = index.rem_euclid(self.frames_per_day());
        let padded = index + self.dropped_before(index);

        DisplayFields {
            hours: ((padded / (self.divisor * 3600)) % 24) as u32,
            minutes: ((padded / (self.divisor * 60)) % 60) as u32,
            seconds: ((padded / self.divisor) % 60) as u32,
            frames: (padded % self.divisor) as u32,
            drop_frame: self.drop_frame,
        }
    }

    /// Labels skipped before a day-reduced frame index.
    fn dropped_before(&self, index: i64) -> i64 {
        if self.drop_per_minute == 0 {
            return 0;
        }
        let frames_per_minute_no_drop = self.divisor * 60;
        let frames_per_minute = frames_per_minute_no_drop - self.drop_per_minute;
        let frames_per_ten_minutes = 10 * frames_per_minute_no_drop - 9 * self.drop_per_minute;

        let ten_minute_groups = index / frames_per_ten_minutes;
        let remainder = index % frames_per_ten_minutes;

        // Minute 0 of a group keeps all its labels.
        let minute_within_group = if remainder < frames_per_minute_no_drop {
            0
        } else {
            1 + (remainder - frames_per_minute_no_drop) / frames_per_minute
        };

        self.drop_per_minute * 9 * ten_minute_groups + self.drop_per_minute * minute_within_group
    }
}
