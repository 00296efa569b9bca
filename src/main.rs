use tracing::info;

use standin::config::{StandinConfig, StandinOptions};
use standin::router::build_router;
use standin::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = StandinConfig::from_env();

    let users_json =
        std::fs::read_to_string(&config.users_file).expect("failed to read USERS_FILE");

    let state = StandinOptions::new()
        .users_from_json(&users_json)
        .expect("invalid USERS_FILE contents")
        .sign_in_uri(config.sign_in_uri)
        .sign_out_uri(config.sign_out_uri)
        .build()
        .expect("invalid user configuration");

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("standin listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
