use lazy_static::lazy_static;

use crate::constants::*;

lazy_static! {
    pub static ref POSTER_PLACEHOLDER: String = placeholder_data_url(500, 750, "No Poster");
    pub static ref BACKDROP_PLACEHOLDER: String =
        placeholder_data_url(1280, 720, "No Backdrop Image");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Poster,
    Backdrop,
}

impl ImageKind {
    /// Anything other than `backdrop` is a poster
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("backdrop") => Self::Backdrop,
            _ => Self::Poster,
        }
    }

    pub fn default_size(&self) -> &'static str {
        match self {
            Self::Poster => DEFAULT_POSTER_SIZE,
            Self::Backdrop => DEFAULT_BACKDROP_SIZE,
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Poster => POSTER_PLACEHOLDER.as_str(),
            Self::Backdrop => BACKDROP_PLACEHOLDER.as_str(),
        }
    }
}

/// Percent encoded svg data url with a grey box and a centered caption
pub fn placeholder_data_url(width: u32, height: u32, text: &str) -> String {
    format!(
        "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='{width}' height='{height}' \
         viewBox='0 0 {width} {height}'%3E%3Crect width='{width}' height='{height}' fill='%23e5e5e5'/%3E\
         %3Ctext x='50%25' y='50%25' font-family='Arial, sans-serif' font-size='24' text-anchor='middle' \
         alignment-baseline='middle' fill='%23999999'%3E{text}%3C/text%3E%3C/svg%3E"
    )
}

/// Builds fully qualified catalog image urls
#[derive(Debug, Clone)]
pub struct ImageResolver {
    base_url: String,
}

impl ImageResolver {
    /// Reads the image host from `TMDB_IMAGE_BASE_URL`
    pub fn new() -> Self {
        let base_url =
            std::env::var("TMDB_IMAGE_BASE_URL").unwrap_or(TMDB_IMAGE_BASE_URL.to_owned());
        Self::with_base_url(&base_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub fn resolve(&self, path: Option<&str>, kind: ImageKind, size: Option<&str>) -> String {
        let Some(path) = path.filter(|p| !p.is_empty()) else {
            return kind.placeholder().to_owned();
        };
        let size = size.filter(|s| !s.is_empty()).unwrap_or(kind.default_size());
        let separator = if path.starts_with('/') { "" } else { "/" };
        format!("{}/{size}{separator}{path}", self.base_url)
    }
}

impl Default for ImageResolver {
    fn default() -> Self {
        Self::new()
    }
}
