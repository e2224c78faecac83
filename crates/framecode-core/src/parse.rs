//! Text grammar for timecode literals.
//!
//! Accepts `HH:MM:SS:FF` (non-drop) and `HH:MM:SS;FF` or `HH:MM:SS.FF`
//! (drop-frame), optionally followed by `@<rate>`. Only the shape is checked
//! here; field ranges are validated by [`crate::Timecode::from_display`].

use tracing::debug;

use crate::codec::DisplayFields;
use crate::error::{Result, TimecodeError};
use crate::framerate::Framerate;

/// Fields recognized in a timecode literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimecodeParts {
    pub fields: DisplayFields,
    /// Rate named by an `@rate` suffix, if any.
    pub framerate: Option<Framerate>,
}

/// Split a timecode literal into display fields and an optional rate.
pub fn parse_parts(text: &str) -> Result<TimecodeParts> {
    let text = text.trim();
    let (body, rate) = match text.split_once('@') {
        Some((body, rate)) => (body, Some(rate)),
        None => (text, None),
    };

    let fields = parse_fields(body).ok_or_else(|| {
        debug!(text, "timecode literal does not match HH:MM:SS:FF");
        TimecodeError::invalid(format!("expected HH:MM:SS:FF, got {:?}", text))
    })?;

    let framerate = rate
        .map(|rate| rate.parse::<Framerate>())
        .transpose()?;

    Ok(TimecodeParts { fields, framerate })
}

fn parse_fields(body: &str) -> Option<DisplayFields> {
    let bytes = body.as_bytes();
    if bytes.len() != 11 || bytes[2] != b':' || bytes[5] != b':' {
        return None;
    }
    let drop_frame = match bytes[8] {
        b':' => false,
        b';' | b'.' => true,
        _ => return None,
    };

    Some(DisplayFields {
        hours: two_digits(&bytes[0..2])?,
        minutes: two_digits(&bytes[3..5])?,
        seconds: two_digits(&bytes[6..8])?,
        frames: two_digits(&bytes[9..11])?,
        drop_frame,
    })
}

fn two_digits(pair: &[u8]) -> Option<u32> {
    match pair {
        [tens @ b'0'..=b'9', ones @ b'0'..=b'9'] => {
            Some(u32::from(tens - b'0') * 10 + u32::from(ones - b'0'))
        }
        _ => None,
    }
}
