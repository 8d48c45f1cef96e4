use super::{Entry, Tiers};
use crate::weight::weight;

/// Pick the final answer for the tier at `slot` from the three tiered buckets.
///
/// The result is a single variant, an audio-only + video-only pair (audio
/// first), or empty when no bucket has anything to offer.
pub(crate) fn select<'a>(
    slot: usize,
    combined: &Tiers<'a>,
    audio_only: &Tiers<'a>,
    video_only: &Tiers<'a>,
) -> Vec<Entry<'a>> {
    let c = representative(slot, combined);
    let a = representative(slot, audio_only);
    let v = representative(slot, video_only);

    match (c, a, v) {
        (Some(c), Some(a), Some(v)) => {
            if weight(c.variant) < weight(a.variant) + weight(v.variant) {
                vec![a, v]
            } else {
                vec![c]
            }
        }
        (Some(c), _, _) => vec![c],
        (None, Some(a), Some(v)) => vec![a, v],
        (None, None, Some(v)) => vec![v],
        (None, Some(a), None) => vec![a],
        (None, None, None) => Vec::new(),
    }
}

/// Walk down from `slot` taking the heaviest entry of the first non-empty
/// tier; failing that, walk up from the tier above taking the lightest.
fn representative<'a>(slot: usize, tiers: &Tiers<'a>) -> Option<Entry<'a>> {
    tiers[slot..]
        .iter()
        .find_map(|t| t.last())
        .or_else(|| tiers[..slot].iter().rev().find_map(|t| t.first()))
        .copied()
}
