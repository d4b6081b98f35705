use std::cmp::Ordering;

use chrono::NaiveDate;

use reelex_model::{MovieRecord, SortField, SortKey, SortOrder};

/// Derive the displayed subset from the source collection.
///
/// Pure transformation: filter by case-insensitive title substring, then
/// apply the sort key with a stable comparator. With `SortKey::None` the
/// output preserves source order after filtering. Page-reset bookkeeping
/// lives in [`CatalogState`](crate::catalog::CatalogState), not here.
pub fn apply_filters_and_sort(
    source: &[MovieRecord],
    search_term: &str,
    sort_key: SortKey,
) -> Vec<MovieRecord> {
    let mut movies: Vec<MovieRecord> = if search_term.is_empty() {
        source.to_vec()
    } else {
        let needle = search_term.to_lowercase();
        source
            .iter()
            .filter(|movie| movie.title.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    };

    if let Some(field) = sort_key.field() {
        let reverse = sort_key.order() == SortOrder::Descending;
        movies.sort_by(|a, b| compare_by_field(a, b, field, reverse));
    }

    movies
}

fn compare_by_field(
    a: &MovieRecord,
    b: &MovieRecord,
    field: SortField,
    reverse: bool,
) -> Ordering {
    match field {
        SortField::ReleaseDate => {
            compare_optional(release_date(a), release_date(b), reverse)
        }
        SortField::Rating => compare_optional_partial(
            a.vote_average,
            b.vote_average,
            reverse,
        ),
    }
}

fn release_date(movie: &MovieRecord) -> Option<NaiveDate> {
    movie
        .release_date
        .as_deref()
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

// Records missing the compared value order after every record that has it,
// in both directions. The stable sort keeps their relative order intact.
fn compare_optional<T: Ord>(
    a: Option<T>,
    b: Option<T>,
    reverse: bool,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            if reverse {
                b.cmp(&a)
            } else {
                a.cmp(&b)
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_optional_partial<T: PartialOrd>(
    a: Option<T>,
    b: Option<T>,
    reverse: bool,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
            if reverse { ord.reverse() } else { ord }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(
        id: u64,
        title: &str,
        release_date: Option<&str>,
        vote_average: Option<f32>,
    ) -> MovieRecord {
        MovieRecord {
            id,
            title: title.to_string(),
            release_date: release_date.map(str::to_string),
            poster_path: None,
            vote_average,
        }
    }

    fn titles(movies: &[MovieRecord]) -> Vec<&str> {
        movies.iter().map(|m| m.title.as_str()).collect()
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let source = vec![
            movie(1, "The Batman", Some("2022-03-01"), Some(7.7)),
            movie(2, "Superman", Some("2025-07-11"), Some(7.5)),
        ];

        let filtered = apply_filters_and_sort(&source, "BatMan", SortKey::None);
        assert_eq!(titles(&filtered), vec!["The Batman"]);
    }

    #[test]
    fn filtered_titles_always_contain_the_term() {
        let source = vec![
            movie(1, "Alien", None, None),
            movie(2, "Aliens", None, None),
            movie(3, "Alien: Romulus", None, None),
            movie(4, "Predator", None, None),
            movie(5, "", None, None),
        ];

        let filtered = apply_filters_and_sort(&source, "alien", SortKey::None);
        assert_eq!(filtered.len(), 3);
        for record in &filtered {
            assert!(record.title.to_lowercase().contains("alien"));
        }
    }

    #[test]
    fn empty_term_returns_full_source_in_order() {
        let source = vec![
            movie(3, "C", None, None),
            movie(1, "A", None, None),
            movie(2, "B", None, None),
        ];

        let filtered = apply_filters_and_sort(&source, "", SortKey::None);
        assert_eq!(filtered, source);
    }

    #[test]
    fn none_key_preserves_source_order_after_filtering() {
        let source = vec![
            movie(1, "Dune: Part Two", None, None),
            movie(2, "Oppenheimer", None, None),
            movie(3, "Dune", None, None),
        ];

        let filtered = apply_filters_and_sort(&source, "dune", SortKey::None);
        assert_eq!(titles(&filtered), vec!["Dune: Part Two", "Dune"]);
    }

    #[test]
    fn rating_desc_places_unrated_last() {
        let source = vec![
            movie(1, "a", None, Some(7.2)),
            movie(2, "b", None, Some(9.1)),
            movie(3, "c", None, None),
            movie(4, "d", None, Some(5.0)),
        ];

        let sorted =
            apply_filters_and_sort(&source, "", SortKey::RatingDesc);
        let ratings: Vec<Option<f32>> =
            sorted.iter().map(|m| m.vote_average).collect();
        assert_eq!(ratings, vec![Some(9.1), Some(7.2), Some(5.0), None]);
    }

    #[test]
    fn rating_asc_also_places_unrated_last() {
        let source = vec![
            movie(1, "a", None, None),
            movie(2, "b", None, Some(9.1)),
            movie(3, "c", None, Some(5.0)),
        ];

        let sorted = apply_filters_and_sort(&source, "", SortKey::RatingAsc);
        let ratings: Vec<Option<f32>> =
            sorted.iter().map(|m| m.vote_average).collect();
        assert_eq!(ratings, vec![Some(5.0), Some(9.1), None]);
    }

    #[test]
    fn release_date_sort_handles_malformed_dates() {
        let source = vec![
            movie(1, "new", Some("2024-06-01"), None),
            movie(2, "garbage", Some("not-a-date"), None),
            movie(3, "old", Some("1999-01-20"), None),
            movie(4, "blank", Some(""), None),
            movie(5, "absent", None, None),
        ];

        let sorted =
            apply_filters_and_sort(&source, "", SortKey::ReleaseDateAsc);
        assert_eq!(
            titles(&sorted),
            vec!["old", "new", "garbage", "blank", "absent"]
        );

        let sorted =
            apply_filters_and_sort(&source, "", SortKey::ReleaseDateDesc);
        assert_eq!(
            titles(&sorted),
            vec!["new", "old", "garbage", "blank", "absent"]
        );
    }

    #[test]
    fn sorting_is_idempotent_and_size_preserving() {
        let source = vec![
            movie(1, "a", Some("2020-01-01"), Some(3.0)),
            movie(2, "b", None, Some(8.0)),
            movie(3, "c", Some("2010-05-05"), None),
            movie(4, "d", Some("2015-09-09"), Some(6.5)),
        ];

        for key in SortKey::all() {
            let once = apply_filters_and_sort(&source, "", *key);
            let twice = apply_filters_and_sort(&once, "", *key);
            assert_eq!(once.len(), source.len());
            assert_eq!(once, twice, "sort key {key} is not idempotent");
        }
    }
}
