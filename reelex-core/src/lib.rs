//! # Reelex Core
//!
//! Core library for the Reelex movie catalog. It owns the one piece of real
//! logic in the system: the fetch-aggregate-filter-sort-paginate pipeline.
//!
//! - [`providers`]: the upstream listing endpoint behind a mockable trait,
//!   with a reqwest-based TMDB implementation
//! - [`catalog`]: aggregation of the fetched pages, the pure filter/sort
//!   transformation, pagination arithmetic, and the session state object
//!
//! Presentation is out of scope here; `reelex-tui` renders whatever
//! [`catalog::CatalogState`] exposes.

pub mod catalog;
pub mod providers;

pub use catalog::{
    CatalogState, DEFAULT_FETCH_PAGES, LoadPhase, MOVIES_PER_PAGE,
    apply_filters_and_sort, fetch_all_pages, page_slice, total_pages,
};
pub use providers::{MovieListingProvider, ProviderError, TmdbProvider};
