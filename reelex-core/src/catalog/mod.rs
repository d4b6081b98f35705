//! Catalog pipeline: aggregation, filter/sort, pagination, session state.

mod aggregate;
mod filter_sort;
mod pagination;
mod state;

pub use aggregate::{DEFAULT_FETCH_PAGES, fetch_all_pages};
pub use filter_sort::apply_filters_and_sort;
pub use pagination::{MOVIES_PER_PAGE, page_slice, total_pages};
pub use state::{CatalogState, LoadPhase};
