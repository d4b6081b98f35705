use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Field a sort key compares on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    ReleaseDate,
    Rating,
}

/// Direction of a sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// User-selectable ordering of the filtered collection.
///
/// `None` preserves fetch order; the other keys pair a [`SortField`] with a
/// [`SortOrder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SortKey {
    #[default]
    None,
    ReleaseDateAsc,
    ReleaseDateDesc,
    RatingAsc,
    RatingDesc,
}

impl SortKey {
    pub fn all() -> &'static [SortKey] {
        use SortKey::*;
        &[None, ReleaseDateAsc, ReleaseDateDesc, RatingAsc, RatingDesc]
    }

    /// The compared field, or `Option::None` for the order-preserving key.
    pub fn field(&self) -> Option<SortField> {
        match self {
            SortKey::None => Option::None,
            SortKey::ReleaseDateAsc | SortKey::ReleaseDateDesc => {
                Some(SortField::ReleaseDate)
            }
            SortKey::RatingAsc | SortKey::RatingDesc => Some(SortField::Rating),
        }
    }

    pub fn order(&self) -> SortOrder {
        match self {
            SortKey::ReleaseDateDesc | SortKey::RatingDesc => {
                SortOrder::Descending
            }
            _ => SortOrder::Ascending,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::None => "Sort By",
            SortKey::ReleaseDateAsc => "Release Date (Asc)",
            SortKey::ReleaseDateDesc => "Release Date (Desc)",
            SortKey::RatingAsc => "Rating (Asc)",
            SortKey::RatingDesc => "Rating (Desc)",
        }
    }

    pub fn api_name(&self) -> &'static str {
        match self {
            SortKey::None => "none",
            SortKey::ReleaseDateAsc => "release_date_asc",
            SortKey::ReleaseDateDesc => "release_date_desc",
            SortKey::RatingAsc => "rating_asc",
            SortKey::RatingDesc => "rating_desc",
        }
    }

    /// The key after `self` in selector order, wrapping around.
    pub fn next(self) -> SortKey {
        let all = Self::all();
        let idx = all.iter().position(|key| *key == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// The key before `self` in selector order, wrapping around.
    pub fn prev(self) -> SortKey {
        let all = Self::all();
        let idx = all.iter().position(|key| *key == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_name())
    }
}

impl FromStr for SortKey {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "none" => Ok(SortKey::None),
            "release_date_asc" => Ok(SortKey::ReleaseDateAsc),
            "release_date_desc" => Ok(SortKey::ReleaseDateDesc),
            "rating_asc" => Ok(SortKey::RatingAsc),
            "rating_desc" => Ok(SortKey::RatingDesc),
            other => Err(ModelError::UnknownSortKey(other.to_string())),
        }
    }
}
