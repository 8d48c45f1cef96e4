//! avpick - sort audio/video variants into quality tiers and pick the best
//! fit for each tier.

pub mod catalog;
pub mod config;
pub mod error;
pub mod picker;
pub mod profile;
pub mod quality;
pub mod utils;
pub mod variant;
pub mod weight;

pub use catalog::{Catalog, CatalogEntry};
pub use error::AppError;
pub use picker::{Picker, Summary, VariantSource};
pub use profile::Profile;
pub use quality::Quality;
pub use variant::Variant;
