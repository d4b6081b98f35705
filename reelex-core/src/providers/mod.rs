//! Upstream movie-listing providers.

mod tmdb;

pub use tmdb::TmdbProvider;

use async_trait::async_trait;
use reelex_model::MovieRecord;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// A paginated "popular movies" listing endpoint.
///
/// The catalog aggregation only ever asks for one thing: the result array
/// of a given 1-based page. Keeping the surface this narrow lets tests
/// drive the aggregation with a mocked provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieListingProvider: Send + Sync {
    /// Fetch one page of the popular listing.
    async fn popular_page(
        &self,
        page: u32,
    ) -> Result<Vec<MovieRecord>, ProviderError>;

    /// Provider name, for logging.
    fn name(&self) -> &'static str;
}
