use std::{net::SocketAddr, sync::Arc};

use dotenvy::dotenv;
use mockall_double::double;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::AppState;
use images::ImageResolver;

#[double]
use catalog::CatalogClient;
#[double]
use database::AppDatabase;

pub mod app;
pub mod catalog;
pub mod constants;
pub mod database;
pub mod handlers;
pub mod images;
pub mod models;
pub mod pagination;
pub mod swagger;
pub mod type_validation;
pub mod utils;

pub async fn start_web_server() {
    // import .env file
    dotenv().ok();
    initialize_logging();
    // create database client
    let db_client = AppDatabase::new()
        .await
        .expect("Unable to accquire database client");
    handlers::ensure_indexes(&db_client)
        .await
        .expect("Unable to create review indexes");
    let catalog = CatalogClient::new().expect("Unable to configure the movie catalog");
    let state = AppState {
        db: Arc::new(db_client),
        catalog: Arc::new(catalog),
        images: Arc::new(ImageResolver::new()),
    };
    start_server(state).await;
}

fn initialize_logging() {
    // create default env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or("review_room=debug,tower_http=debug".into());

    // initialize tracing subscriber for logging
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

async fn start_server(state: AppState) {
    // read the port number from env variable
    let port = std::env::var("PORT").unwrap_or_default();
    let port = port.parse::<u16>().unwrap_or(3000);
    // build the socket address
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    // create the app instance
    let app = app::build_app(state);
    tracing::debug!("Starting the app in: {addr}");
    // start serving the app in the socket address
    axum::Server::bind(&addr).serve(app).await.unwrap();
}
