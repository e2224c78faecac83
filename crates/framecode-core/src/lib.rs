//! Framecode Core - SMPTE timecode for broadcast framerates
//!
//! This crate converts between absolute frame counts and SMPTE timecode:
//! - Framerate catalog and decimal rate resolution (Framerate)
//! - Drop-frame aware frame index codec (FrameCodec, DisplayFields)
//! - Timecode values with deferred 24-hour wraparound (Timecode, FrameDelta)
//! - Text parsing and formatting (`hh:mm:ss:ff`, `hh:mm:ss;ff@29.97`)
//!
//! Frame indices are zero-based: frame 0 is `00:00:00:00`.

pub mod codec;
pub mod error;
pub mod framerate;
pub mod parse;
pub mod timecode;

pub use codec::{DisplayFields, FrameCodec};
pub use error::{Result, TimecodeError};
pub use framerate::{Framerate, FramerateInfo};
pub use parse::{parse_parts, TimecodeParts};
pub use timecode::{FrameDelta, Timecode};

pub use num_rational::Rational64;
