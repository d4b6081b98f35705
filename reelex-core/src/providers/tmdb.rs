use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use reelex_model::MovieRecord;

use super::{MovieListingProvider, ProviderError};

const TMDB_API_BASE: &str = "https://api.themoviedb.org/3";

/// Reqwest-backed TMDB listing provider.
///
/// Authenticates with a v4 read token sent as a bearer header on every
/// request; credential provisioning is the caller's concern.
#[derive(Debug, Clone)]
pub struct TmdbProvider {
    client: Client,
    api_base: String,
    bearer_token: String,
}

#[derive(Debug, Deserialize)]
struct PopularMoviesPage {
    results: Vec<MovieRecord>,
}

impl TmdbProvider {
    pub fn new(bearer_token: String) -> Self {
        Self::with_api_base(TMDB_API_BASE.to_string(), bearer_token)
    }

    /// Point the provider at a non-default API base (test servers, proxies).
    pub fn with_api_base(api_base: String, bearer_token: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_base,
            bearer_token,
        }
    }
}

#[async_trait]
impl MovieListingProvider for TmdbProvider {
    async fn popular_page(
        &self,
        page: u32,
    ) -> Result<Vec<MovieRecord>, ProviderError> {
        let url = format!("{}/movie/popular", self.api_base);
        tracing::debug!(url = %url, page, "requesting popular movies page");

        let page_param = page.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[("language", "en-US"), ("page", page_param.as_str())])
            .header("accept", "application/json")
            .header(
                "Authorization",
                format!("Bearer {}", self.bearer_token),
            )
            .send()
            .await?;

        if response.status() == 401 {
            return Err(ProviderError::InvalidApiKey);
        }

        if response.status() == 429 {
            return Err(ProviderError::RateLimited);
        }

        if !response.status().is_success() {
            return Err(ProviderError::ApiError(format!(
                "TMDB API returned status: {}",
                response.status()
            )));
        }

        let listing: PopularMoviesPage = response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        tracing::debug!(
            page,
            count = listing.results.len(),
            "popular movies page fetched"
        );

        Ok(listing.results)
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_listing_page_shape() {
        let body = r#"{
            "page": 1,
            "results": [
                {
                    "id": 414906,
                    "title": "The Batman",
                    "release_date": "2022-03-01",
                    "poster_path": "/74xTEgt7R36Fpooo50r9T25onhq.jpg",
                    "vote_average": 7.7,
                    "popularity": 123.4
                },
                {
                    "id": 99999,
                    "release_date": "",
                    "poster_path": null
                }
            ],
            "total_pages": 52587,
            "total_results": 1051733
        }"#;

        let page: PopularMoviesPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].title, "The Batman");
        assert_eq!(page.results[0].vote_average, Some(7.7));

        // Unknown fields and missing title/rating must not abort the page.
        assert_eq!(page.results[1].title, "");
        assert_eq!(page.results[1].release_date.as_deref(), Some(""));
        assert_eq!(page.results[1].vote_average, None);
    }
}
