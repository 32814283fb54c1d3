use std::{
    collections::HashMap,
    net::TcpListener,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

pub const TEST_API_KEY: &str = "test-api-key";
pub const MISSING_MOVIE_ID: i64 = 404;

/// Stand-in for the remote movie catalog, counting every request it serves
#[derive(Clone)]
pub struct FakeCatalog {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl FakeCatalog {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

type Params = Query<HashMap<String, String>>;

pub fn spawn_fake_catalog() -> FakeCatalog {
    let hits = Arc::new(AtomicUsize::new(0));
    let router = Router::new()
        .route("/movie/:id", get(movie_handler))
        .route("/movie/:id/videos", get(videos_handler))
        .route("/movie/:id/similar", get(similar_handler))
        .route("/search/movie", get(search_handler))
        .with_state(hits.clone());
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let server = axum::Server::from_tcp(listener)
        .unwrap()
        .serve(router.into_make_service());
    tokio::spawn(server);
    FakeCatalog {
        base_url: format!("http://{addr}"),
        hits,
    }
}

// counts the hit and rejects calls without the api key
fn authorize(hits: &AtomicUsize, params: &HashMap<String, String>) -> Result<(), Response> {
    hits.fetch_add(1, Ordering::SeqCst);
    match params.get("api_key").map(String::as_str) {
        Some(TEST_API_KEY) => Ok(()),
        _ => Err(StatusCode::UNAUTHORIZED.into_response()),
    }
}

pub fn movie_json(id: u64) -> Value {
    json!({
        "id": id,
        "title": format!("Movie {id}"),
        "overview": "Overview",
        "poster_path": format!("/poster-{id}.jpg"),
        "backdrop_path": null,
        "release_date": "2023-11-02",
        "vote_average": 6.5,
        "vote_count": 87,
        "genre_ids": [35]
    })
}

fn listing(page: u64, total_pages: u64) -> Value {
    let first = (page - 1) * 20 + 1;
    let results = (first..first + 20).map(movie_json).collect::<Vec<_>>();
    json!({
        "page": page,
        "results": results,
        "total_pages": total_pages,
        "total_results": total_pages * 20
    })
}

fn page_param(params: &HashMap<String, String>) -> u64 {
    params
        .get("page")
        .and_then(|page| page.parse().ok())
        .unwrap_or(1)
}

async fn movie_handler(
    State(hits): State<Arc<AtomicUsize>>,
    Path(id): Path<String>,
    Query(params): Params,
) -> Response {
    if let Err(res) = authorize(&hits, &params) {
        return res;
    }
    if ["popular", "top_rated", "upcoming"].contains(&id.as_str()) {
        return Json(listing(page_param(&params), 1000)).into_response();
    }
    let Ok(id) = id.parse::<i64>() else {
        return StatusCode::NOT_FOUND.into_response();
    };
    if id == MISSING_MOVIE_ID {
        let body = json!({"status_code": 34, "status_message": "The resource could not be found."});
        return (StatusCode::NOT_FOUND, Json(body)).into_response();
    }
    Json(json!({
        "id": id,
        "title": "Arrival",
        "overview": "Linguist meets heptapods.",
        "poster_path": null,
        "backdrop_path": "/arrival.jpg",
        "release_date": "2016-11-10",
        "vote_average": 7.6,
        "vote_count": 18000,
        "genres": [{"id": 18, "name": "Drama"}, {"id": 878, "name": "Science Fiction"}],
        "runtime": 116,
        "tagline": null,
        "status": "Released",
        "budget": 47000000,
        "revenue": 203388186,
        "homepage": null,
        "production_companies": []
    }))
    .into_response()
}

async fn videos_handler(
    State(hits): State<Arc<AtomicUsize>>,
    Path(id): Path<i64>,
    Query(params): Params,
) -> Response {
    if let Err(res) = authorize(&hits, &params) {
        return res;
    }
    Json(json!({
        "id": id,
        "results": [
            {"id": "a", "key": "featurette", "name": "Making of", "site": "YouTube", "type": "Featurette", "official": true},
            {"id": "b", "key": "vimeo-trailer", "name": "Trailer", "site": "Vimeo", "type": "Trailer", "official": true},
            {"id": "c", "key": "yt-trailer", "name": "Official Trailer", "site": "YouTube", "type": "Trailer", "official": true}
        ]
    }))
    .into_response()
}

async fn similar_handler(
    State(hits): State<Arc<AtomicUsize>>,
    Path(id): Path<i64>,
    Query(params): Params,
) -> Response {
    if let Err(res) = authorize(&hits, &params) {
        return res;
    }
    // echo what was asked for so callers can check the query
    Json(json!({
        "page": 1,
        "results": [movie_json(id as u64 + 1)],
        "total_pages": 1,
        "total_results": 1,
        "echo": params
    }))
    .into_response()
}

async fn search_handler(State(hits): State<Arc<AtomicUsize>>, Query(params): Params) -> Response {
    if let Err(res) = authorize(&hits, &params) {
        return res;
    }
    let query = params.get("query").cloned().unwrap_or_default();
    let mut body = listing(page_param(&params), 3);
    body["query"] = json!(query);
    Json(body).into_response()
}
