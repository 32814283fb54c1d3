use axum::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

#[cfg(test)]
use mockall::automock;

use crate::{
    constants::*,
    models::{MovieCategory, MoviePage, MovieVideo},
    pagination::{Listing, PageSource},
    type_validation::parse_movie_page,
};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("catalog responded with status {0}")]
    Status(StatusCode),
    #[error("catalog response is malformed: {0}")]
    Malformed(String),
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status(StatusCode::NOT_FOUND))
    }
}

/// Thin client for the external movie catalog (TMDB v3).
/// Every call is a single GET; nothing is cached or retried.
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[cfg_attr(test, automock)]
impl CatalogClient {
    /// Reads `TMDB_API_KEY` (required) and `TMDB_BASE_URL`
    pub fn new() -> anyhow::Result<Self> {
        let api_key = std::env::var("TMDB_API_KEY")
            .map_err(|_| anyhow::anyhow!("TMDB_API_KEY not found in .env file"))?;
        let base_url = std::env::var("TMDB_BASE_URL").unwrap_or(TMDB_BASE_URL.to_owned());
        Ok(Self::with_config(&base_url, &api_key))
    }

    pub fn with_config(base_url: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key: api_key.to_owned(),
        }
    }

    pub async fn fetch_movies(
        &self,
        category: MovieCategory,
        page: u32,
    ) -> Result<Value, CatalogError> {
        let path = format!("/movie/{}", category.as_str());
        self.get_json(&path, &[("page", page.to_string())]).await
    }

    pub async fn fetch_details(&self, id: i64) -> Result<Value, CatalogError> {
        self.get_json(&format!("/movie/{id}"), &[]).await
    }

    pub async fn fetch_videos(&self, id: i64) -> Result<Value, CatalogError> {
        self.get_json(&format!("/movie/{id}/videos"), &[]).await
    }

    pub async fn fetch_similar(&self, id: i64) -> Result<Value, CatalogError> {
        let params = [
            ("language", TMDB_LANGUAGE.to_owned()),
            ("page", "1".to_owned()),
        ];
        self.get_json(&format!("/movie/{id}/similar"), &params).await
    }

    pub async fn search(&self, query: &str, page: u32) -> Result<Value, CatalogError> {
        let params = [("query", query.to_owned()), ("page", page.to_string())];
        self.get_json("/search/movie", &params).await
    }
}

impl CatalogClient {
    async fn get_json(&self, path: &str, params: &[(&str, String)]) -> Result<Value, CatalogError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("Catalog request: GET {url}");
        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }
        response
            .json::<Value>()
            .await
            .map_err(|err| CatalogError::Malformed(err.to_string()))
    }
}

#[async_trait]
impl PageSource for CatalogClient {
    async fn fetch_page(&self, listing: &Listing, page: u32) -> anyhow::Result<MoviePage> {
        let value = match listing {
            Listing::Category(category) => self.fetch_movies(*category, page).await?,
            Listing::Search(query) => self.search(query, page).await?,
        };
        let data = parse_movie_page(&value)
            .ok_or_else(|| CatalogError::Malformed("unexpected listing shape".into()))?;
        Ok(data)
    }
}

/// First YouTube trailer in list order
pub fn select_trailer(videos: &[MovieVideo]) -> Option<&MovieVideo> {
    videos
        .iter()
        .find(|video| video.video_type == TRAILER_VIDEO_TYPE && video.site == TRAILER_VIDEO_SITE)
}

pub fn trailer_watch_url(video: &MovieVideo) -> String {
    format!("{YOUTUBE_WATCH_URL}{}", video.key)
}
