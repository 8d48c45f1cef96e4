use serde::{Deserialize, Serialize};

/// One encoded media option with optional video and/or audio attributes.
///
/// Zero, empty and `false` all mean "absent".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Variant {
    pub id: usize,
    /// Vertical resolution, e.g. 1080
    pub resolution: u32,
    /// Video bitrate in kbps
    pub video_bitrate: u32,
    pub video_codec: String,
    pub video_hfr: bool,
    pub video_hdr: bool,
    /// Audio bitrate in kbps
    pub audio_bitrate: u32,
    pub audio_channels: u32,
    pub audio_codec: String,
    pub audio_vbr: bool,
}

impl Variant {
    /// Video-only variant with just a resolution
    pub fn video(resolution: u32) -> Self {
        Self {
            resolution,
            ..Self::default()
        }
    }

    /// Audio-only variant with just a bitrate
    pub fn audio(audio_bitrate: u32) -> Self {
        Self {
            audio_bitrate,
            ..Self::default()
        }
    }

    /// Muxed variant with a resolution and an audio bitrate
    pub fn muxed(resolution: u32, audio_bitrate: u32) -> Self {
        Self {
            resolution,
            audio_bitrate,
            ..Self::default()
        }
    }

    /// Check if any video attribute is populated
    pub fn has_video(&self) -> bool {
        self.resolution != 0
            || self.video_bitrate != 0
            || !self.video_codec.is_empty()
            || self.video_hfr
            || self.video_hdr
    }

    /// Check if any audio attribute is populated
    pub fn has_audio(&self) -> bool {
        self.audio_bitrate != 0
            || self.audio_channels != 0
            || !self.audio_codec.is_empty()
            || self.audio_vbr
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.has_audio(), self.has_video()) {
            (true, true) => write!(
                f,
                "ID:{}, Resolution:{}p, AudioBitrate:{}Kbps",
                self.id, self.resolution, self.audio_bitrate
            ),
            (true, false) => write!(f, "ID:{}, AudioBitrate:{}Kbps", self.id, self.audio_bitrate),
            _ => write!(f, "ID:{}, Resolution:{}p", self.id, self.resolution),
        }
    }
}
