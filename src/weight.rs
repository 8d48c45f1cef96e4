//! Desirability scores for variants. Higher is better.

use crate::variant::Variant;

const HDR_BONUS: u64 = 1000;
const HFR_BONUS: u64 = 1000;
const VBR_BONUS: u64 = 40;

/// Score for a codec name, 0 when unknown
pub fn codec_score(codec: &str) -> u64 {
    match codec {
        // video
        "h264-baseline" => 20,
        "h264-main" => 25,
        "h264" => 30,
        "h264-high" => 40,
        "h265" => 45,
        "vp8" => 25,
        "vp9" => 45,
        "av1" => 50,
        // audio
        "mp3" => 20,
        "vorbis" => 25,
        "aac-he" => 25,
        "aac" => 30,
        "aac-lc" => 35,
        "opus" => 40,
        _ => 0,
    }
}

/// Score for an audio channel count, 0 when unknown
pub fn channel_score(channels: u32) -> u64 {
    match channels {
        2 => 20,
        6 => 30,
        8 => 40,
        _ => 0,
    }
}

pub fn video_weight(v: &Variant) -> u64 {
    let mut w = u64::from(v.resolution) * 10
        + u64::from(v.video_bitrate)
        + 100 * codec_score(&v.video_codec);
    if v.video_hdr {
        w += HDR_BONUS;
    }
    if v.video_hfr {
        w += HFR_BONUS;
    }
    w
}

pub fn audio_weight(v: &Variant) -> u64 {
    let mut w = u64::from(v.audio_bitrate)
        + channel_score(v.audio_channels)
        + codec_score(&v.audio_codec);
    if v.audio_vbr {
        w += VBR_BONUS;
    }
    w
}

pub fn weight(v: &Variant) -> u64 {
    video_weight(v) + audio_weight(v)
}
