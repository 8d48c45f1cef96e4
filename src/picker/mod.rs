//! Audio/video picker
//!
//! Classifies a collection of variants into Best, High, Medium and Low
//! against a [`Profile`] and keeps, for every tier, one variant or one
//! audio-only + video-only pair.

mod matcher;
mod segregate;
mod selector;

use crate::profile::Profile;
use crate::quality::Quality;
use crate::variant::Variant;
use serde::Serialize;
use std::borrow::Cow;
use tracing::debug;

/// A variant together with its position in the picker's collection
#[derive(Debug, Clone, Copy)]
pub(crate) struct Entry<'a> {
    pub index: usize,
    pub variant: &'a Variant,
}

/// One weight-ascending sequence per tier slot
pub(crate) type Tiers<'a> = [Vec<Entry<'a>>; 4];

/// Anything that can hand out variants by index, e.g. a site-specific
/// format list.
pub trait VariantSource {
    /// Number of available variants
    fn count(&self) -> usize;

    /// Variant at a zero-based index below [`VariantSource::count`]
    fn variant_at(&self, index: usize) -> Variant;
}

impl VariantSource for [Variant] {
    fn count(&self) -> usize {
        self.len()
    }

    fn variant_at(&self, index: usize) -> Variant {
        self[index].clone()
    }
}

/// Picked variants per tier, built once and never updated
#[derive(Debug, Clone)]
pub struct Picker<'a> {
    variants: Cow<'a, [Variant]>,
    profile: Profile,
    /// Indices into `variants`, per tier slot
    tiers: [Vec<usize>; 4],
}

impl<'a> Picker<'a> {
    /// Build a picker with the default profile
    pub fn new(variants: &'a [Variant]) -> Self {
        Self::with_profile(variants, Profile::default())
    }

    pub fn with_profile(variants: &'a [Variant], profile: Profile) -> Self {
        Self::build(Cow::Borrowed(variants), profile)
    }

    /// Build a picker from an adapter. Ids are reassigned to `0..count`.
    pub fn from_source<S>(source: &S, profile: Profile) -> Picker<'static>
    where
        S: VariantSource + ?Sized,
    {
        let variants: Vec<Variant> = (0..source.count())
            .map(|id| Variant {
                id,
                ..source.variant_at(id)
            })
            .collect();

        Picker::build(Cow::Owned(variants), profile)
    }

    fn build(variants: Cow<'a, [Variant]>, profile: Profile) -> Self {
        let tiers = classify(&variants, &profile);
        Self {
            variants,
            profile,
            tiers,
        }
    }

    /// Variants picked for a tier. `Quality::None` is always empty.
    pub fn get(&self, quality: Quality) -> Vec<&Variant> {
        quality
            .slot()
            .map(|slot| self.tiers[slot].iter().map(|&i| &self.variants[i]).collect())
            .unwrap_or_default()
    }

    /// Variants above the `high` profile
    pub fn best(&self) -> Vec<&Variant> {
        self.get(Quality::Best)
    }

    /// Variants within the `high` profile and above `medium`
    pub fn high(&self) -> Vec<&Variant> {
        self.get(Quality::High)
    }

    /// Variants within the `medium` profile and above `low`
    pub fn medium(&self) -> Vec<&Variant> {
        self.get(Quality::Medium)
    }

    /// Variants within the `low` profile
    pub fn low(&self) -> Vec<&Variant> {
        self.get(Quality::Low)
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Owned snapshot of the picked positions in [`Picker::variants`] per
    /// tier. Positions equal ids for pickers built with `from_source`.
    pub fn summary(&self) -> Summary {
        let [best, high, medium, low] = self.tiers.clone();
        Summary {
            best,
            high,
            medium,
            low,
        }
    }
}

/// Picked variant positions per tier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub best: Vec<usize>,
    pub high: Vec<usize>,
    pub medium: Vec<usize>,
    pub low: Vec<usize>,
}

/// Run segregation, sorting, matching and selection over `variants`
fn classify(variants: &[Variant], profile: &Profile) -> [Vec<usize>; 4] {
    let mut buckets = segregate::segregate(variants);
    buckets.sort_by_weight();

    debug!(
        total = variants.len(),
        combined = buckets.combined.len(),
        audio_only = buckets.audio_only.len(),
        video_only = buckets.video_only.len(),
        "Segregated variants"
    );

    let combined = matcher::match_tiers(&buckets.combined, profile);
    let audio_only = matcher::match_tiers(&buckets.audio_only, profile);
    let video_only = matcher::match_tiers(&buckets.video_only, profile);

    Quality::TIERS.map(|quality| {
        let slot = quality.slot().unwrap_or_default();
        let picked: Vec<usize> = selector::select(slot, &combined, &audio_only, &video_only)
            .iter()
            .map(|e| e.index)
            .collect();
        debug!(%quality, picked = ?picked, "Selected tier");
        picked
    })
}
