use crate::variant::Variant;
use serde::{Deserialize, Serialize};

/// Selection standards: each reference variant's populated fields are the
/// upper boundary of its tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub high: Variant,
    pub medium: Variant,
    pub low: Variant,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            high: Variant::muxed(1080, 256),
            medium: Variant::muxed(720, 192),
            low: Variant::muxed(360, 128),
        }
    }
}

impl Profile {
    /// Reference above `high`, unbounded for the range fields
    pub(crate) fn ceiling() -> Variant {
        Variant::muxed(u32::MAX, u32::MAX)
    }

    /// (current upper reference, next lower reference) for Best, High, Medium, Low
    pub(crate) fn boundaries(&self) -> [(Variant, Variant); 4] {
        [
            (Self::ceiling(), self.high.clone()),
            (self.high.clone(), self.medium.clone()),
            (self.medium.clone(), self.low.clone()),
            (self.low.clone(), Variant::default()),
        ]
    }
}
