//! Core data model definitions shared across Reelex crates.
#![allow(missing_docs)]

pub mod error;
pub mod image;
pub mod movie;
pub mod sort;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use image::{PLACEHOLDER_POSTER, PosterSize, poster_url};
pub use movie::MovieRecord;
pub use sort::{SortField, SortKey, SortOrder};
