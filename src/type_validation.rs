//! Structural checks for catalog responses.
//!
//! Nothing coming back from the catalog is trusted until it passes one of
//! these predicates. Collections drop the entries that fail; a single
//! required object that fails makes the whole response unusable.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::models::{MovieDetails, MoviePage, MovieVideo};

fn is_str(obj: &Map<String, Value>, key: &str) -> bool {
    obj.get(key).map_or(false, Value::is_string)
}

fn is_nullable_str(obj: &Map<String, Value>, key: &str) -> bool {
    obj.get(key)
        .map_or(false, |v| v.is_string() || v.is_null())
}

fn is_int(obj: &Map<String, Value>, key: &str) -> bool {
    obj.get(key).map_or(false, |v| v.is_i64() || v.is_u64())
}

fn is_uint(obj: &Map<String, Value>, key: &str) -> bool {
    obj.get(key).map_or(false, Value::is_u64)
}

fn is_nullable_uint(obj: &Map<String, Value>, key: &str) -> bool {
    obj.get(key).map_or(false, |v| v.is_u64() || v.is_null())
}

fn is_number(obj: &Map<String, Value>, key: &str) -> bool {
    obj.get(key).map_or(false, Value::is_number)
}

fn is_int_array(obj: &Map<String, Value>, key: &str) -> bool {
    match obj.get(key) {
        Some(Value::Array(items)) => items.iter().all(|v| v.is_i64() || v.is_u64()),
        _ => false,
    }
}

// every element is an object carrying an integer id and a string name
fn is_named_array(obj: &Map<String, Value>, key: &str) -> bool {
    match obj.get(key) {
        Some(Value::Array(items)) => items.iter().all(|item| {
            item.as_object()
                .map_or(false, |item| is_int(item, "id") && is_str(item, "name"))
        }),
        _ => false,
    }
}

// fields shared by listing entries and detail payloads
fn has_movie_fields(obj: &Map<String, Value>) -> bool {
    is_int(obj, "id")
        && is_str(obj, "title")
        && is_str(obj, "overview")
        && is_nullable_str(obj, "poster_path")
        && is_nullable_str(obj, "backdrop_path")
        && is_nullable_str(obj, "release_date")
        && is_number(obj, "vote_average")
        && is_uint(obj, "vote_count")
}

pub fn is_movie(value: &Value) -> bool {
    value
        .as_object()
        .map_or(false, |obj| has_movie_fields(obj) && is_int_array(obj, "genre_ids"))
}

/// Details carry `genres` objects instead of `genre_ids`, either is accepted
pub fn is_movie_details(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };
    has_movie_fields(obj)
        && (is_int_array(obj, "genre_ids") || is_named_array(obj, "genres"))
        && is_nullable_uint(obj, "runtime")
        && is_nullable_str(obj, "tagline")
        && is_str(obj, "status")
        && is_uint(obj, "budget")
        && is_uint(obj, "revenue")
        && is_nullable_str(obj, "homepage")
        && is_named_array(obj, "production_companies")
}

pub fn is_movie_video(value: &Value) -> bool {
    value.as_object().map_or(false, |obj| {
        is_str(obj, "id")
            && is_str(obj, "key")
            && is_str(obj, "name")
            && is_str(obj, "site")
            && is_str(obj, "type")
            && obj.get("official").map_or(false, Value::is_boolean)
    })
}

// keep the entries passing the check and decode them
fn filter_valid<T: DeserializeOwned>(items: &[Value], check: fn(&Value) -> bool) -> Vec<T> {
    let data = items
        .iter()
        .filter(|item| check(item))
        .filter_map(|item| serde_json::from_value::<T>(item.clone()).ok())
        .collect::<Vec<_>>();
    if data.len() != items.len() {
        tracing::debug!("Dropped {} invalid entries", items.len() - data.len());
    }
    data
}

/// Decode a listing envelope, dropping invalid movies.
/// `None` when the envelope itself is malformed.
pub fn parse_movie_page(value: &Value) -> Option<MoviePage> {
    let obj = value.as_object()?;
    if !(is_uint(obj, "page") && is_uint(obj, "total_pages")) {
        return None;
    }
    let results = obj.get("results")?.as_array()?;
    let page = MoviePage {
        page: u32::try_from(obj.get("page")?.as_u64()?).ok()?,
        results: filter_valid(results, is_movie),
        total_pages: u32::try_from(obj.get("total_pages")?.as_u64()?).ok()?,
        total_results: obj
            .get("total_results")
            .and_then(Value::as_u64)
            .unwrap_or_default(),
    };
    Some(page)
}

pub fn parse_movie_details(value: &Value) -> Option<MovieDetails> {
    if !is_movie_details(value) {
        return None;
    }
    let mut details = serde_json::from_value::<MovieDetails>(value.clone()).ok()?;
    details.fill_genre_ids();
    Some(details)
}

/// Videos are read from the `results` list of the upstream payload
pub fn parse_movie_videos(value: &Value) -> Option<Vec<MovieVideo>> {
    let results = value.get("results")?.as_array()?;
    Some(filter_valid(results, is_movie_video))
}
