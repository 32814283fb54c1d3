use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Listing buckets served by the movie catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MovieCategory {
    Popular,
    TopRated,
    Upcoming,
}

impl MovieCategory {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "popular" => Some(Self::Popular),
            "top_rated" => Some(Self::TopRated),
            "upcoming" => Some(Self::Upcoming),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::TopRated => "top_rated",
            Self::Upcoming => "upcoming",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub release_date: String,
    pub vote_average: f64,
    pub vote_count: u64,
    #[serde(default)]
    pub genre_ids: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductionCompany {
    pub id: i64,
    pub name: String,
    pub logo_path: Option<String>,
}

/// Movie with the extra fields only the detail endpoint returns.
/// Unknown numbers are 0 and unknown strings are empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MovieDetails {
    #[serde(flatten)]
    pub movie: Movie,
    #[serde(default, deserialize_with = "null_as_default")]
    pub runtime: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tagline: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub budget: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub revenue: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub homepage: String,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub production_companies: Vec<ProductionCompany>,
}

impl MovieDetails {
    /// The detail payload lists `genres` rather than `genre_ids`
    pub fn fill_genre_ids(&mut self) {
        if self.movie.genre_ids.is_empty() {
            self.movie.genre_ids = self.genres.iter().map(|genre| genre.id).collect();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MovieVideo {
    pub id: String,
    pub key: String,
    pub name: String,
    pub site: String,
    #[serde(rename = "type")]
    pub video_type: String,
    pub official: bool,
}

/// One page of a catalog listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MoviePage {
    pub page: u32,
    pub results: Vec<Movie>,
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let val = Option::<T>::deserialize(deserializer)?;
    Ok(val.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_movie_category_parse() {
        assert_eq!(MovieCategory::parse("popular"), Some(MovieCategory::Popular));
        assert_eq!(MovieCategory::parse("top_rated"), Some(MovieCategory::TopRated));
        assert_eq!(MovieCategory::parse("upcoming"), Some(MovieCategory::Upcoming));
        assert_eq!(MovieCategory::parse("top-rated"), None);
        assert_eq!(MovieCategory::TopRated.as_str(), "top_rated");
    }

    #[test]
    fn test_movie_details_nulls_become_defaults() {
        let value = json!({
            "id": 550,
            "title": "Fight Club",
            "overview": "An insomniac office worker...",
            "poster_path": null,
            "backdrop_path": "/bg.jpg",
            "release_date": "1999-10-15",
            "vote_average": 8,
            "vote_count": 26280,
            "genres": [{"id": 18, "name": "Drama"}],
            "runtime": null,
            "tagline": null,
            "status": "Released",
            "budget": 63000000,
            "revenue": 100853753,
            "homepage": null,
            "production_companies": []
        });
        let mut details: MovieDetails = serde_json::from_value(value).unwrap();
        details.fill_genre_ids();
        assert_eq!(details.runtime, 0);
        assert_eq!(details.tagline, "");
        assert_eq!(details.homepage, "");
        assert_eq!(details.movie.vote_average, 8.0);
        assert_eq!(details.movie.genre_ids, vec![18]);
        assert_eq!(details.movie.poster_path, None);
    }

    #[test]
    fn test_movie_video_type_field() {
        let value = json!({
            "id": "v1", "key": "abc", "name": "Official Trailer",
            "site": "YouTube", "type": "Trailer", "official": true
        });
        let video: MovieVideo = serde_json::from_value(value).unwrap();
        assert_eq!(video.video_type, "Trailer");
        let value = serde_json::to_value(&video).unwrap();
        assert_eq!(value["type"], "Trailer");
    }
}
