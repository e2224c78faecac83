//! Timecode value type and arithmetic.
//!
//! A [`Timecode`] stores an unbounded, exact frame index. Arithmetic never
//! wraps; the 24-hour wraparound and drop-frame label mapping happen only
//! when the value is displayed, so chained additions stay exact.

use num_rational::Rational64;
use num_traits::{CheckedAdd, CheckedSub};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;
use tracing::debug;

use crate::codec::{DisplayFields, FrameCodec};
use crate::error::{Result, TimecodeError};
use crate::framerate::Framerate;

/// A signed frame offset, exact to any rational fraction of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FrameDelta(Rational64);

impl FrameDelta {
    /// Zero offset.
    pub const ZERO: Self = Self(Rational64::new_raw(0, 1));

    /// Exact offset, possibly a fraction of a frame.
    pub const fn new(frames: Rational64) -> Self {
        Self(frames)
    }

    /// Offset of `n` frames.
    pub fn frames(n: i64) -> Self {
        Self(Rational64::from_integer(n))
    }

    /// Offset of `n` timecode seconds, counted in nominal frames.
    pub fn seconds(n: i64, rate: Framerate) -> Result<Self> {
        Self::scaled_units(n, i64::from(rate.divisor()))
    }

    /// Offset of `n` timecode minutes, counted in nominal frames.
    pub fn minutes(n: i64, rate: Framerate) -> Result<Self> {
        Self::scaled_units(n, i64::from(rate.divisor()) * 60)
    }

    /// Offset of `n` timecode hours, counted in nominal frames.
    pub fn hours(n: i64, rate: Framerate) -> Result<Self> {
        Self::scaled_units(n, i64::from(rate.divisor()) * 3600)
    }

    fn scaled_units(n: i64, frames_per_unit: i64) -> Result<Self> {
        n.checked_mul(frames_per_unit)
            .map(Self::frames)
            .ok_or_else(|| overflow(format!("{} units of {} frames", n, frames_per_unit)))
    }

    /// Offset covering `seconds` of real elapsed time at the precise rate.
    pub fn from_real_seconds(seconds: Rational64, rate: Framerate) -> Self {
        Self(seconds * rate.as_rational())
    }

    /// Exact frame count.
    #[inline]
    pub fn value(self) -> Rational64 {
        self.0
    }

    /// Whole frames, rounded toward negative infinity.
    #[inline]
    pub fn whole_frames(self) -> i64 {
        self.0.floor().to_integer()
    }

    /// Sum of two offsets, failing instead of overflowing.
    pub fn checked_add(self, rhs: Self) -> Result<Self> {
        self.0
            .checked_add(&rhs.0)
            .map(Self)
            .ok_or_else(|| overflow(format!("{} + {} frames", self.0, rhs.0)))
    }
}

fn overflow(what: String) -> TimecodeError {
    debug!(%what, "frame offset overflow");
    TimecodeError::invalid(format!("frame offset overflows: {}", what))
}

impl Add for FrameDelta {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for FrameDelta {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for FrameDelta {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<Rational64> for FrameDelta {
    type Output = Self;
    fn mul(self, rhs: Rational64) -> Self {
        Self(self.0 * rhs)
    }
}

impl From<i64> for FrameDelta {
    fn from(frames: i64) -> Self {
        Self::frames(frames)
    }
}

/// SMPTE timecode at one of the catalog framerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TimecodeRepr")]
pub struct Timecode {
    frame_index: Rational64,
    framerate: Framerate,
    drop_frame: bool,
}

/// Unvalidated serialized form of [`Timecode`].
#[derive(Deserialize)]
struct TimecodeRepr {
    frame_index: Rational64,
    framerate: Framerate,
    drop_frame: bool,
}

impl TryFrom<TimecodeRepr> for Timecode {
    type Error = TimecodeError;

    fn try_from(repr: TimecodeRepr) -> Result<Self> {
        Self::new(repr.frame_index, repr.framerate, repr.drop_frame)
    }
}

impl Timecode {
    /// Create a timecode from a zero-based frame index.
    ///
    /// Fails with [`TimecodeError::DropFrameUnsupported`] when `drop_frame`
    /// is set on a rate without a drop count.
    pub fn new(frame_index: Rational64, framerate: Framerate, drop_frame: bool) -> Result<Self> {
        if drop_frame && !framerate.supports_drop_frame() {
            debug!(%framerate, "drop-frame requested on unsupported rate");
            return Err(TimecodeError::DropFrameUnsupported(framerate));
        }
        Ok(Self {
            frame_index: reduced(frame_index)?,
            framerate,
            drop_frame,
        })
    }

    /// Create a timecode from an integer frame number.
    pub fn from_frame_number(frame: i64, framerate: Framerate, drop_frame: bool) -> Result<Self> {
        Self::new(Rational64::from_integer(frame), framerate, drop_frame)
    }

    /// Create a timecode from display fields, validating every field.
    pub fn from_display(fields: DisplayFields, framerate: Framerate) -> Result<Self> {
        if fields.drop_frame && !framerate.supports_drop_frame() {
            debug!(%framerate, "drop-frame requested on unsupported rate");
            return Err(TimecodeError::DropFrameUnsupported(framerate));
        }

        let divisor = framerate.divisor();
        check_range("hours", fields.hours, 23)?;
        check_range("minutes", fields.minutes, 59)?;
        check_range("seconds", fields.seconds, 59)?;
        check_range("frames", fields.frames, divisor - 1)?;

        let codec = FrameCodec::new(framerate, fields.drop_frame);
        if codec.is_dropped_label(&fields) {
            debug!(%fields, %framerate, "rejected dropped frame label");
            return Err(TimecodeError::invalid(format!(
                "{} is a dropped frame label at {} fps",
                fields, framerate
            )));
        }

        Self::from_frame_number(codec.encode(&fields), framerate, fields.drop_frame)
    }

    /// Exact zero-based frame index, not reduced to a single day.
    #[inline]
    pub fn frame_index(&self) -> Rational64 {
        self.frame_index
    }

    /// Frame index rounded toward negative infinity.
    #[inline]
    pub fn frame_number(&self) -> i64 {
        self.frame_index.floor().to_integer()
    }

    #[inline]
    pub fn framerate(&self) -> Framerate {
        self.framerate
    }

    #[inline]
    pub fn is_drop_frame(&self) -> bool {
        self.drop_frame
    }

    fn codec(&self) -> FrameCodec {
        FrameCodec::new(self.framerate, self.drop_frame)
    }

    /// Real time elapsed since frame zero, in seconds.
    pub fn elapsed_seconds(&self) -> Rational64 {
        self.frame_index / self.framerate.as_rational()
    }

    /// Real time elapsed since frame zero, as f64 seconds.
    pub fn to_seconds_f64(&self) -> f64 {
        let seconds = self.elapsed_seconds();
        *seconds.numer() as f64 / *seconds.denom() as f64
    }

    /// Display fields after 24-hour wraparound.
    pub fn display(&self) -> DisplayFields {
        self.codec().decode(self.frame_number())
    }

    /// `hh:mm:ss:ff`, or `hh:mm:ss;ff` for drop-frame.
    pub fn format(&self) -> String {
        self.display().to_string()
    }

    /// [`Timecode::format`] followed by `@` and the canonical rate.
    pub fn full_format(&self) -> String {
        format!("{}@{}", self.display(), self.framerate)
    }

    /// Same timecode with the frame index reduced into a single day.
    pub fn normalized(&self) -> Self {
        let per_day = Rational64::from_integer(self.codec().frames_per_day());
        let days = (self.frame_index / per_day).floor();
        Self {
            frame_index: self.frame_index - days * per_day,
            ..*self
        }
    }

    /// New timecode moved by `delta` frames. No wraparound is applied.
    pub fn offset(&self, delta: FrameDelta) -> Self {
        Self {
            frame_index: self.frame_index + delta.value(),
            ..*self
        }
    }

    /// Move backward by `delta`.
    pub fn subtract(&self, delta: FrameDelta) -> Self {
        self.offset(-delta)
    }

    /// [`Timecode::offset`], failing instead of overflowing the frame index.
    pub fn checked_offset(&self, delta: FrameDelta) -> Result<Self> {
        let frame_index = self
            .frame_index
            .checked_add(&delta.value())
            .ok_or_else(|| overflow(format!("{} + {} frames", self.frame_index, delta.value())))?;
        Ok(Self {
            frame_index,
            ..*self
        })
    }

    /// [`Timecode::subtract`], failing instead of overflowing the frame index.
    pub fn checked_subtract(&self, delta: FrameDelta) -> Result<Self> {
        let frame_index = self
            .frame_index
            .checked_sub(&delta.value())
            .ok_or_else(|| overflow(format!("{} - {} frames", self.frame_index, delta.value())))?;
        Ok(Self {
            frame_index,
            ..*self
        })
    }

    /// Frames from `other` to `self`. Both must share a framerate.
    pub fn difference(&self, other: &Self) -> Result<FrameDelta> {
        if self.framerate != other.framerate {
            return Err(TimecodeError::FramerateMismatch {
                left: self.framerate,
                right: other.framerate,
            });
        }
        Ok(FrameDelta::new(self.frame_index - other.frame_index))
    }

    /// Same real elapsed time expressed at another framerate.
    ///
    /// The result may hold a fractional frame index; it displays as the
    /// frame in which that instant falls.
    pub fn convert_framerate(&self, framerate: Framerate, drop_frame: bool) -> Result<Self> {
        let frame_index = self.elapsed_seconds() * framerate.as_rational();
        Self::new(frame_index, framerate, drop_frame)
    }

    /// Parse text carrying an `@rate` suffix.
    pub fn parse(text: &str) -> Result<Self> {
        let parts = crate::parse::parse_parts(text)?;
        let framerate = parts
            .framerate
            .ok_or_else(|| TimecodeError::invalid(format!("missing @rate suffix in {:?}", text)))?;
        Self::from_display(parts.fields, framerate)
    }

    /// Parse text, falling back to `framerate` when it has no suffix.
    pub fn parse_with_rate(text: &str, framerate: Framerate) -> Result<Self> {
        let parts = crate::parse::parse_parts(text)?;
        Self::from_display(parts.fields, parts.framerate.unwrap_or(framerate))
    }
}

/// Lowest-terms form with a positive denominator. Deserialized ratios
/// skip num-rational's reduction, so `new` cannot assume it.
fn reduced(frame_index: Rational64) -> Result<Rational64> {
    let (numer, denom) = (*frame_index.numer(), *frame_index.denom());
    if denom == 0 || numer == i64::MIN || denom == i64::MIN {
        return Err(TimecodeError::invalid(format!(
            "frame index {}/{} is not a finite ratio",
            numer, denom
        )));
    }
    Ok(Rational64::new(numer, denom))
}

fn check_range(name: &str, value: u32, max: u32) -> Result<()> {
    if value > max {
        debug!(field = name, value, max, "timecode field out of range");
        return Err(TimecodeError::invalid(format!(
            "{} out of range: {} (max {})",
            name, value, max
        )));
    }
    Ok(())
}

impl Add<FrameDelta> for Timecode {
    type Output = Self;
    fn add(self, rhs: FrameDelta) -> Self {
        self.offset(rhs)
    }
}

impl Sub<FrameDelta> for Timecode {
    type Output = Self;
    fn sub(self, rhs: FrameDelta) -> Self {
        self.offset(-rhs)
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl FromStr for Timecode {
    type Err = TimecodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
