use super::Entry;
use crate::variant::Variant;
use crate::weight::weight;

/// Variants partitioned by the kind of streams they carry
#[derive(Debug, Default)]
pub(crate) struct Buckets<'a> {
    pub combined: Vec<Entry<'a>>,
    pub audio_only: Vec<Entry<'a>>,
    pub video_only: Vec<Entry<'a>>,
}

impl Buckets<'_> {
    /// Sort every bucket ascending by weight, ties kept in input order
    pub fn sort_by_weight(&mut self) {
        for bucket in [&mut self.combined, &mut self.audio_only, &mut self.video_only] {
            bucket.sort_by_key(|e| weight(e.variant));
        }
    }
}

/// Split variants into combined, audio-only and video-only buckets.
/// Variants with neither audio nor video are dropped.
pub(crate) fn segregate(variants: &[Variant]) -> Buckets<'_> {
    let mut buckets = Buckets::default();

    for (index, variant) in variants.iter().enumerate() {
        let entry = Entry { index, variant };
        match (variant.has_audio(), variant.has_video()) {
            (true, true) => buckets.combined.push(entry),
            (true, false) => buckets.audio_only.push(entry),
            (false, true) => buckets.video_only.push(entry),
            (false, false) => {}
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(bucket: &[Entry<'_>]) -> Vec<usize> {
        bucket.iter().map(|e| e.index).collect()
    }

    #[test]
    fn test_segregate_by_type() {
        let variants = vec![
            Variant::muxed(1080, 196),
            Variant::video(4320),
            Variant::default(),
            Variant::audio(48),
            Variant::video(720),
        ];
        let buckets = segregate(&variants);
        assert_eq!(indices(&buckets.combined), vec![0]);
        assert_eq!(indices(&buckets.audio_only), vec![3]);
        assert_eq!(indices(&buckets.video_only), vec![1, 4]);
    }

    #[test]
    fn test_sort_is_ascending_and_stable() {
        let variants = vec![
            Variant::video(2160),
            Variant::video(720),
            Variant::video(1080),
            Variant::video(720),
            Variant::video(360),
        ];
        let mut buckets = segregate(&variants);
        buckets.sort_by_weight();
        assert_eq!(indices(&buckets.video_only), vec![4, 1, 3, 2, 0]);

        let weights: Vec<u64> = buckets.video_only.iter().map(|e| weight(e.variant)).collect();
        assert!(weights.windows(2).all(|w| w[0] <= w[1]));
    }
}
