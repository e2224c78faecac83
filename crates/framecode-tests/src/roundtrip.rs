//! Text to value to text scenarios.

use framecode_core::{DisplayFields, FrameCodec, Framerate, Timecode, TimecodeError};

// ── Helpers ────────────────────────────────────────────────────

fn parse(text: &str) -> Timecode {
    Timecode::parse(text).unwrap()
}

// ── Canonical forms ────────────────────────────────────────────

#[test]
fn full_format_round_trips_for_every_rate() {
    for rate in Framerate::ALL {
        let text = format!("12:34:56:12@{}", rate);
        assert_eq!(parse(&text).full_format(), text);
    }
}

#[test]
fn drop_frame_text_round_trips() {
    for text in ["00:01:00;02@29.97", "23:59:59;59@59.94", "10:10:00;00@29.97"] {
        assert_eq!(parse(text).full_format(), text);
    }
}

#[test]
fn dot_separator_normalizes_to_semicolon() {
    assert_eq!(parse("01:00:00.00@29.97").full_format(), "01:00:00;00@29.97");
}

#[test]
fn near_identical_rates_share_frame_index() {
    let a = parse("04:01:45:23@23.976");
    let b = parse("04:01:45:23@23.98");
    assert_eq!(a.framerate(), b.framerate());
    assert_eq!(a.frame_index(), b.frame_index());
    assert_eq!(a.full_format(), "04:01:45:23@23.98");
}

// ── Frame numbers ──────────────────────────────────────────────

#[test]
fn frame_number_convention_is_zero_based() {
    let zero = Timecode::from_frame_number(0, Framerate::Fps25, false).unwrap();
    assert_eq!(zero.format(), "00:00:00:00");

    let value = Timecode::from_frame_number(17982, Framerate::Fps29_97, true).unwrap();
    assert_eq!(value.full_format(), "00:10:00;00@29.97");
    assert_eq!(parse("00:09:59;28@29.97").frame_number(), 17980);
}

#[test]
fn last_drop_frame_label_of_day() {
    let value = parse("23:59:59;29@29.97");
    assert_eq!(value.frame_number(), 2_589_407);
    assert_eq!(
        value.frame_number() + 1,
        Framerate::Fps29_97.frames_per_day(true)
    );
}

#[test]
fn one_hour_drop_frame_tracks_wall_clock() {
    let value = parse("01:00:00;00@29.97");
    assert_eq!(value.frame_number(), 107_892);
    // 107892 frames at 30000/1001 fps is 3599.9964 seconds.
    assert!((value.to_seconds_f64() - 3600.0).abs() < 0.01);
}

// ── Rejection ──────────────────────────────────────────────────

#[test]
fn out_of_range_fields_are_invalid() {
    for text in ["25:00:00:00@25", "00:60:00:00@25", "00:00:60:00@25", "00:00:00:25@25"] {
        assert!(
            matches!(Timecode::parse(text), Err(TimecodeError::InvalidTimecode(_))),
            "{} should be rejected",
            text
        );
    }
}

#[test]
fn drop_frame_at_integer_rate_is_unsupported() {
    assert_eq!(
        Timecode::parse("00:00:00;00@25"),
        Err(TimecodeError::DropFrameUnsupported(Framerate::Fps25))
    );
    assert_eq!(
        Timecode::from_display(DisplayFields::new(1, 0, 0, 0, true), Framerate::Fps23_98),
        Err(TimecodeError::DropFrameUnsupported(Framerate::Fps23_98))
    );
}

#[test]
fn dropped_labels_are_invalid() {
    for text in ["00:01:00;00@29.97", "00:01:00;01@29.97", "00:59:00;03@59.94"] {
        assert!(matches!(
            Timecode::parse(text),
            Err(TimecodeError::InvalidTimecode(_))
        ));
    }
}

#[test]
fn unknown_rate_suffix() {
    assert_eq!(
        Timecode::parse("00:00:00:00@48"),
        Err(TimecodeError::UnknownFramerate("48".to_string()))
    );
}

// ── Exhaustive day scans ───────────────────────────────────────

#[test]
fn every_drop_frame_index_in_a_day_round_trips() {
    for rate in [Framerate::Fps29_97, Framerate::Fps59_94] {
        let codec = FrameCodec::new(rate, true);
        let per_day = codec.frames_per_day();
        for index in 0..per_day {
            let fields = codec.decode(index);
            assert!(!codec.is_dropped_label(&fields), "{} decoded to {}", index, fields);
            assert_eq!(codec.encode(&fields), index, "{} via {}", index, fields);
        }
    }
}

// ── Serialization ──────────────────────────────────────────────

#[test]
fn timecode_json_round_trip() {
    let value = parse("13:37:42;17@29.97");
    let json = serde_json::to_string(&value).unwrap();
    assert!(json.contains(r#""framerate":"29.97""#));
    let decoded: Timecode = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, value);
}
