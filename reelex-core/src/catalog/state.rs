use reelex_model::{MovieRecord, SortKey};

use crate::catalog::aggregate::fetch_all_pages;
use crate::catalog::filter_sort::apply_filters_and_sort;
use crate::catalog::pagination::{page_slice, total_pages};
use crate::providers::{MovieListingProvider, ProviderError};

/// Session lifecycle: `Loading` settles into `Ready` or `Failed` exactly
/// once; filter/sort/paginate interactions never change the phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// Explicit session state owned by the front-end event loop.
///
/// `filtered` is always a pure function of `(all_movies, search_term,
/// sort_key)` and is recomputed wholesale whenever any of those change;
/// every recompute resets the current page to 1.
#[derive(Debug, Clone)]
pub struct CatalogState {
    all_movies: Vec<MovieRecord>,
    filtered: Vec<MovieRecord>,
    current_page: usize,
    search_term: String,
    sort_key: SortKey,
    phase: LoadPhase,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            all_movies: Vec::new(),
            filtered: Vec::new(),
            current_page: 1,
            search_term: String::new(),
            sort_key: SortKey::None,
            phase: LoadPhase::Loading,
        }
    }

    /// Run the startup aggregation and settle the phase.
    pub async fn load(
        &mut self,
        provider: &dyn MovieListingProvider,
        pages: u32,
    ) {
        let result = fetch_all_pages(provider, pages).await;
        self.finish_load(result);
    }

    /// Settle the phase from an aggregation outcome.
    ///
    /// Split out of [`load`](Self::load) so a front-end that runs the fetch
    /// on a background task can hand the result over when it arrives.
    pub fn finish_load(
        &mut self,
        result: Result<Vec<MovieRecord>, ProviderError>,
    ) {
        match result {
            Ok(movies) => {
                self.all_movies = movies;
                self.recompute();
                self.phase = LoadPhase::Ready;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load movies");
                self.phase = LoadPhase::Failed;
            }
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.recompute();
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.filtered = apply_filters_and_sort(
            &self.all_movies,
            &self.search_term,
            self.sort_key,
        );
        self.current_page = 1;
    }

    /// Advance one page, saturating at the last page.
    pub fn next_page(&mut self) {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
        }
    }

    /// Go back one page, saturating at page 1.
    pub fn prev_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    pub fn has_prev_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// The slice of the filtered collection shown on the current page.
    pub fn visible(&self) -> &[MovieRecord] {
        page_slice(&self.filtered, self.current_page)
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.len())
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn filtered(&self) -> &[MovieRecord] {
        &self.filtered
    }

    pub fn all_movies(&self) -> &[MovieRecord] {
        &self.all_movies
    }
}
