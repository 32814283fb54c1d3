#[tokio::main]
async fn main() {
    review_room::start_web_server().await;
}
