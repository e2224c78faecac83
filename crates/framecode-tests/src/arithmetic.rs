//! Offset and wraparound scenarios.

use framecode_core::{FrameDelta, Framerate, Rational64, Timecode};

fn parse(text: &str) -> Timecode {
    Timecode::parse(text).unwrap()
}

#[test]
fn adding_a_day_returns_the_same_timecode() {
    for rate in Framerate::ALL {
        for drop_frame in [false, rate.supports_drop_frame()] {
            let value = Timecode::from_frame_number(1_234_567, rate, drop_frame).unwrap();
            let day = FrameDelta::frames(rate.frames_per_day(drop_frame));
            assert_eq!((value + day).format(), value.format());
            assert_eq!(value.subtract(day).format(), value.format());
        }
    }
}

#[test]
fn non_drop_wraps_past_midnight() {
    let value = parse("23:59:59:23@24") + FrameDelta::frames(1);
    assert_eq!(value.full_format(), "00:00:00:00@24");

    let value = parse("23:00:00:00@24") + FrameDelta::hours(3, Framerate::Fps24).unwrap();
    assert_eq!(value.full_format(), "02:00:00:00@24");
}

#[test]
fn large_offsets_wrap_by_whole_days() {
    // 159,840,001 frames is 77 days, 2 hours and one frame at 24 fps.
    let value = parse("23:59:59:23@24") + FrameDelta::frames(159_840_001);
    assert_eq!(value.full_format(), "02:00:00:00@24");
    assert_eq!(value.frame_number(), 161_913_600);
}

#[test]
fn drop_frame_wraps_past_midnight() {
    let value = parse("23:59:59;29@29.97") + FrameDelta::frames(1);
    assert_eq!(value.full_format(), "00:00:00;00@29.97");
}

#[test]
fn storage_is_not_wrapped() {
    let value = parse("23:59:59:24@25") + FrameDelta::frames(1);
    assert_eq!(value.frame_number(), 2_160_000);
    assert_eq!(value.normalized().frame_number(), 0);
}

#[test]
fn drop_frame_skips_labels_across_minute() {
    let value = parse("00:00:59;29@29.97") + FrameDelta::frames(1);
    assert_eq!(value.format(), "00:01:00;02");

    let value = parse("00:09:59;59@59.94") + FrameDelta::frames(1);
    assert_eq!(value.format(), "00:10:00;00");

    let value = parse("00:01:00;02@29.97").subtract(FrameDelta::frames(1));
    assert_eq!(value.format(), "00:00:59;29");
}

#[test]
fn ten_minutes_of_drop_frame_labels() {
    // Ten drop-frame minutes hold 17982 labels; the nominal 18000-frame
    // offset lands 18 labels past 00:10:00;00.
    let start = parse("00:00:00;00@29.97");
    let ten_minutes = FrameDelta::minutes(10, Framerate::Fps29_97).unwrap();
    assert_eq!((start + ten_minutes).format(), "00:10:00;18");
    assert_eq!((start + FrameDelta::frames(17982)).format(), "00:10:00;00");
}

#[test]
fn mixed_unit_offsets_sum_exactly() {
    let rate = Framerate::Fps25;
    let delta = FrameDelta::hours(1, rate).unwrap()
        + FrameDelta::minutes(2, rate).unwrap()
        + FrameDelta::seconds(3, rate).unwrap()
        + FrameDelta::frames(4);
    let value = parse("00:00:00:00@25") + delta;
    assert_eq!(value.format(), "01:02:03:04");
    assert_eq!(value.difference(&parse("00:00:00:00@25")).unwrap(), delta);
}

#[test]
fn fractional_offsets_do_not_drift() {
    let third = FrameDelta::new(Rational64::new(1, 3));
    let mut value = parse("00:00:00:00@30");
    for _ in 0..3000 {
        value = value + third;
    }
    assert_eq!(value.frame_index(), Rational64::from_integer(1000));
    assert_eq!(value.format(), "00:00:33:10");
}

#[test]
fn real_time_offsets_use_precise_rate() {
    // One real hour at 29.97 is 107892.1 frames; the display lands on the
    // drop-frame label for one hour.
    let start = parse("00:00:00;00@29.97");
    let hour = FrameDelta::from_real_seconds(Rational64::from_integer(3600), Framerate::Fps29_97);
    assert_eq!((start + hour).format(), "01:00:00;00");
}

#[test]
fn convert_between_rate_families() {
    let value = parse("01:00:00;00@29.97");
    let converted = value.convert_framerate(Framerate::Fps59_94, true).unwrap();
    assert_eq!(converted.full_format(), "01:00:00;00@59.94");
    assert_eq!(converted.frame_number(), 2 * value.frame_number());
}
