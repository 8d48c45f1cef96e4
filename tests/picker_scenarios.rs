use avpick::{Picker, Profile, Quality, Variant};

fn numbered(mut variants: Vec<Variant>) -> Vec<Variant> {
    for (id, v) in variants.iter_mut().enumerate() {
        v.id = id;
    }
    variants
}

fn ids(picked: Vec<&Variant>) -> Vec<usize> {
    picked.iter().map(|v| v.id).collect()
}

#[test]
fn test_single_uhd_video_fills_every_tier() {
    let variants = numbered(vec![Variant::video(2160)]);
    let picker = Picker::new(&variants);

    for quality in Quality::TIERS {
        assert_eq!(ids(picker.get(quality)), vec![0], "tier {}", quality);
    }
}

#[test]
fn test_separate_streams_pair_up_at_medium() {
    let variants = numbered(vec![Variant::audio(128), Variant::video(720)]);
    let picker = Picker::new(&variants);

    assert_eq!(ids(picker.medium()), vec![0, 1]);
}

#[test]
fn test_heavier_pair_beats_muxed_variant_at_best() {
    let variants = numbered(vec![
        Variant::muxed(1080, 196),
        Variant::audio(316),
        Variant::video(4320),
    ]);
    let picker = Picker::new(&variants);

    assert_eq!(ids(picker.best()), vec![1, 2]);
    // the pair is pulled up from Best and still outweighs the muxed variant
    assert_eq!(ids(picker.high()), vec![1, 2]);
}

#[test]
fn test_empty_input() {
    let variants: Vec<Variant> = Vec::new();
    let picker = Picker::new(&variants);

    assert!(picker.best().is_empty());
    assert!(picker.high().is_empty());
    assert!(picker.medium().is_empty());
    assert!(picker.low().is_empty());
}

#[test]
fn test_rebuilding_gives_identical_results() {
    let variants = numbered(vec![
        Variant::muxed(1080, 196),
        Variant::video(4320),
        Variant::video(2160),
        Variant::video(720),
        Variant::audio(48),
        Variant::audio(316),
        Variant::audio(128),
    ]);

    let first = Picker::with_profile(&variants, Profile::default());
    let second = Picker::with_profile(&variants, Profile::default());
    assert_eq!(first.summary(), second.summary());
}

#[test]
fn test_picks_come_from_input_unchanged() {
    let variants = numbered(vec![
        Variant {
            resolution: 1080,
            video_codec: "h265".to_string(),
            video_hdr: true,
            audio_bitrate: 256,
            audio_channels: 6,
            audio_codec: "opus".to_string(),
            ..Variant::default()
        },
        Variant::audio(96),
        Variant::video(480),
        Variant::default(),
    ]);
    let before = variants.clone();
    let picker = Picker::new(&variants);

    for quality in Quality::TIERS {
        for picked in picker.get(quality) {
            assert!(variants.iter().any(|v| std::ptr::eq(v, picked)));
        }
    }
    assert_eq!(variants, before);
}

#[test]
fn test_low_tier_with_custom_profile() {
    let profile = Profile {
        high: Variant::muxed(2160, 320),
        medium: Variant::muxed(1080, 192),
        low: Variant::muxed(480, 96),
    };
    let variants = numbered(vec![
        Variant::muxed(360, 64),
        Variant::muxed(720, 128),
        Variant::muxed(1440, 256),
    ]);
    let picker = Picker::with_profile(&variants, profile);

    assert_eq!(ids(picker.low()), vec![0]);
    assert_eq!(ids(picker.medium()), vec![1]);
    assert_eq!(ids(picker.high()), vec![2]);
    // nothing above high: fall down to the heaviest high variant
    assert_eq!(ids(picker.best()), vec![2]);
}
