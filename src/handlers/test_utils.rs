use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt; // for `oneshot` and `ready`

/// Run a request through the router, returning status and JSON body
pub async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let res = app.oneshot(req).await.unwrap();
    let status = res.status();
    let body = hyper::body::to_bytes(res.into_body()).await.unwrap();
    let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, value)
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

pub fn movie_json(id: i64) -> Value {
    json!({
        "id": id,
        "title": format!("Movie {id}"),
        "overview": "Overview",
        "poster_path": format!("/poster-{id}.jpg"),
        "backdrop_path": null,
        "release_date": "2024-05-01",
        "vote_average": 7.1,
        "vote_count": 320,
        "genre_ids": [28]
    })
}

pub fn listing_json(page: u32, count: i64, total_pages: u32) -> Value {
    let results = (1..=count).map(movie_json).collect::<Vec<_>>();
    json!({
        "page": page,
        "results": results,
        "total_pages": total_pages,
        "total_results": total_pages * 20
    })
}

pub fn details_json(id: i64) -> Value {
    json!({
        "id": id,
        "title": "Fight Club",
        "overview": "An insomniac office worker...",
        "poster_path": "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg",
        "backdrop_path": "/hZkgoQYus5vegHoetLkCJzb17zJ.jpg",
        "release_date": "1999-10-15",
        "vote_average": 8.4,
        "vote_count": 26280,
        "genres": [{"id": 18, "name": "Drama"}],
        "runtime": 139,
        "tagline": "Mischief. Mayhem. Soap.",
        "status": "Released",
        "budget": 63000000,
        "revenue": 100853753,
        "homepage": "http://www.foxmovies.com/movies/fight-club",
        "production_companies": [{"id": 508, "name": "Regency Enterprises", "logo_path": null}]
    })
}

pub fn videos_json() -> Value {
    json!({
        "id": 550,
        "results": [
            {"id": "v1", "key": "teaser-key", "name": "Teaser", "site": "YouTube", "type": "Teaser", "official": true},
            {"id": "v2", "key": "trailer-key", "name": "Trailer", "site": "YouTube", "type": "Trailer", "official": false},
            {"id": "v3", "name": "Broken"}
        ]
    })
}
