use futures::future::try_join_all;

use reelex_model::MovieRecord;

use crate::providers::{MovieListingProvider, ProviderError};

/// How many listing pages the startup fetch aggregates by default.
pub const DEFAULT_FETCH_PAGES: u32 = 10;

/// Fetch pages `1..=pages` of the popular listing concurrently and
/// concatenate their results in page order.
///
/// All-or-nothing: the first page that fails fails the whole aggregation
/// and drops the remaining in-flight requests. No partial collection is
/// ever returned.
pub async fn fetch_all_pages(
    provider: &dyn MovieListingProvider,
    pages: u32,
) -> Result<Vec<MovieRecord>, ProviderError> {
    let requests = (1..=pages).map(|page| provider.popular_page(page));
    let batches = try_join_all(requests).await?;

    let movies: Vec<MovieRecord> =
        batches.into_iter().flatten().collect();
    tracing::info!(
        provider = provider.name(),
        pages,
        count = movies.len(),
        "aggregated popular listing"
    );

    Ok(movies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::MockMovieListingProvider;

    fn movie(id: u64, title: &str) -> MovieRecord {
        MovieRecord {
            id,
            title: title.to_string(),
            release_date: None,
            poster_path: None,
            vote_average: None,
        }
    }

    #[tokio::test]
    async fn concatenates_pages_in_page_order() {
        let mut provider = MockMovieListingProvider::new();
        provider
            .expect_popular_page()
            .returning(|page| {
                Ok(vec![
                    movie(u64::from(page) * 100, "A"),
                    movie(u64::from(page) * 100 + 1, "B"),
                ])
            });
        provider.expect_name().return_const("mock");

        let movies = fetch_all_pages(&provider, 3).await.unwrap();
        let ids: Vec<u64> = movies.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![100, 101, 200, 201, 300, 301]);
    }

    #[tokio::test]
    async fn single_failed_page_fails_the_whole_aggregation() {
        let mut provider = MockMovieListingProvider::new();
        provider.expect_popular_page().returning(|page| {
            if page == 7 {
                Err(ProviderError::ApiError(
                    "TMDB API returned status: 500".to_string(),
                ))
            } else {
                Ok(vec![movie(u64::from(page), "ok")])
            }
        });
        provider.expect_name().return_const("mock");

        let result = fetch_all_pages(&provider, 10).await;
        assert!(matches!(result, Err(ProviderError::ApiError(_))));
    }

    #[tokio::test]
    async fn zero_pages_yields_empty_collection() {
        let mut provider = MockMovieListingProvider::new();
        provider.expect_popular_page().never();
        provider.expect_name().return_const("mock");

        let movies = fetch_all_pages(&provider, 0).await.unwrap();
        assert!(movies.is_empty());
    }
}
