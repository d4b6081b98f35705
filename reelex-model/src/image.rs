/// Local asset shown when a record carries no poster reference.
pub const PLACEHOLDER_POSTER: &str = "placeholder.jpg";

/// Upstream poster rendition widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosterSize {
    W92,
    W154,
    W185,
    W342,
    W500,
    W780,
    Original,
}

impl PosterSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            PosterSize::W92 => "w92",
            PosterSize::W154 => "w154",
            PosterSize::W185 => "w185",
            PosterSize::W342 => "w342",
            PosterSize::W500 => "w500",
            PosterSize::W780 => "w780",
            PosterSize::Original => "original",
        }
    }
}

/// Build a poster URL from the hosting base and a record's poster path.
///
/// Falls back to [`PLACEHOLDER_POSTER`] when the path is absent or empty.
pub fn poster_url(
    image_base: &str,
    size: PosterSize,
    poster_path: Option<&str>,
) -> String {
    match poster_path {
        Some(path) if !path.is_empty() => {
            format!("{}/{}{}", image_base, size.as_str(), path)
        }
        _ => PLACEHOLDER_POSTER.to_string(),
    }
}
