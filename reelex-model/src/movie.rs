/// Lightweight movie record as returned by the upstream listing endpoint.
///
/// Every field except `id` may be absent or malformed upstream; the record
/// stays usable either way. `release_date` is kept as raw text and only
/// parsed when a date-based sort asks for it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovieRecord {
    pub id: u64,
    /// Title text; a record missing its title deserializes to the empty
    /// string and never matches a non-empty search term.
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub release_date: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub poster_path: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub vote_average: Option<f32>,
}

impl MovieRecord {
    /// Rating formatted for display: one decimal place, `N/A` when unrated.
    pub fn rating_label(&self) -> String {
        match self.vote_average {
            Some(rating) => format!("{rating:.1}"),
            None => "N/A".to_string(),
        }
    }
}
