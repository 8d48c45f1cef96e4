use crate::error::AppError;
use crate::picker::VariantSource;
use crate::variant::Variant;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// A downloadable format as listed by a site, e.g.
/// `{"url": "https://...", "resolution": 1080, "audio_bitrate": 128}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub url: String,
    #[serde(flatten)]
    pub variant: Variant,
}

/// Ordered list of catalog entries, adapted into variants by position
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    pub entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Load a catalog from a JSON array of entries
    pub fn load_from_file(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        info!("Loaded {} catalog entries from {}", catalog.entries.len(), path.display());
        Ok(catalog)
    }

    pub fn from_json(content: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(content)?)
    }

    /// URL of the entry a picked variant came from
    pub fn url_for(&self, id: usize) -> Option<&str> {
        self.entries.get(id).map(|e| e.url.as_str())
    }
}

impl VariantSource for Catalog {
    fn count(&self) -> usize {
        self.entries.len()
    }

    fn variant_at(&self, index: usize) -> Variant {
        self.entries[index].variant.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::Picker;
    use crate::profile::Profile;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {"url": "a", "resolution": 1080, "audio_bitrate": 196},
        {"url": "b", "resolution": 4320},
        {"url": "c", "audio_bitrate": 320},
        {"url": "d", "resolution": 2340, "audio_bitrate": 231},
        {"url": "e", "resolution": 720, "audio_bitrate": 128}
    ]"#;

    #[test]
    fn test_parse_flattened_entries() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.count(), 5);
        assert_eq!(catalog.entries[1].variant.resolution, 4320);
        assert_eq!(catalog.entries[2].variant.audio_bitrate, 320);
        assert_eq!(catalog.url_for(4), Some("e"));
        assert_eq!(catalog.url_for(5), None);
    }

    #[test]
    fn test_best_from_catalog() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        let picker = Picker::from_source(&catalog, Profile::default());

        // audio 320 + video 4320 outweigh the heaviest muxed entry in range
        let best: Vec<&str> = picker
            .best()
            .iter()
            .filter_map(|v| catalog.url_for(v.id))
            .collect();
        assert_eq!(best, vec!["c", "b"]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let catalog = Catalog::load_from_file(file.path()).unwrap();
        assert_eq!(catalog.entries.len(), 5);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(Catalog::from_json("{"), Err(AppError::Json(_))));
    }
}
