use super::{Entry, Tiers};
use crate::profile::Profile;
use crate::variant::Variant;
use tracing::trace;

/// Partition a weight-sorted bucket into Best, High, Medium and Low.
///
/// Each tier is matched independently, so the bucket order is kept inside
/// every tier and a variant matching no tier is left out.
pub(crate) fn match_tiers<'a>(bucket: &[Entry<'a>], profile: &Profile) -> Tiers<'a> {
    let mut tiers: Tiers<'a> = Default::default();

    for (slot, (current, next)) in profile.boundaries().iter().enumerate() {
        tiers[slot] = bucket
            .iter()
            .filter(|e| matches(current, next, e.variant))
            .copied()
            .collect();
    }

    tiers
}

/// Whether `candidate` fits between the `current` tier ceiling and the
/// `next` lower tier's ceiling.
///
/// A field absent on the reference or on the candidate does not constrain,
/// except for flags, which the reference can always require.
pub(crate) fn matches(current: &Variant, next: &Variant, candidate: &Variant) -> bool {
    if !current.video_codec.is_empty()
        && !candidate.video_codec.is_empty()
        && candidate.video_codec != current.video_codec
    {
        trace!(id = candidate.id, "video codec mismatch");
        return false;
    }

    if current.resolution != 0
        && candidate.resolution != 0
        && !(next.resolution..=current.resolution).contains(&candidate.resolution)
    {
        trace!(id = candidate.id, resolution = candidate.resolution, "resolution out of range");
        return false;
    }

    if current.video_bitrate != 0
        && candidate.video_bitrate != 0
        && candidate.video_bitrate > current.video_bitrate
    {
        trace!(id = candidate.id, "video bitrate above ceiling");
        return false;
    }

    if current.video_hfr && !candidate.video_hfr {
        return false;
    }

    if current.video_hdr && !candidate.video_hdr {
        return false;
    }

    if current.audio_bitrate != 0
        && candidate.audio_bitrate != 0
        && !(next.audio_bitrate..=current.audio_bitrate).contains(&candidate.audio_bitrate)
    {
        trace!(
            id = candidate.id,
            audio_bitrate = candidate.audio_bitrate,
            "audio bitrate out of range"
        );
        return false;
    }

    if current.audio_channels != 0
        && candidate.audio_channels != 0
        && candidate.audio_channels != current.audio_channels
    {
        trace!(id = candidate.id, "audio channel mismatch");
        return false;
    }

    if !current.audio_codec.is_empty()
        && !candidate.audio_codec.is_empty()
        && candidate.audio_codec != current.audio_codec
    {
        trace!(id = candidate.id, "audio codec mismatch");
        return false;
    }

    if current.audio_vbr && !candidate.audio_vbr {
        return false;
    }

    true
}
