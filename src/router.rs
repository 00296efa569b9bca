use axum::{
    Router,
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::handlers::health::{healthz, readyz};
use crate::handlers::signin::{sign_in, sign_out};
use crate::handlers::whoami::whoami;
use crate::middleware::{bearer_auth, request_id_layer};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let sign_in_uri = state.sign_in_uri.clone();
    let sign_out_uri = state.sign_out_uri.clone();

    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Identity echo (the demo protected surface)
        .route("/whoami", get(whoami))
        // Session flow
        .route(&sign_in_uri, get(sign_in).post(sign_in))
        .route(&sign_out_uri, get(sign_out).post(sign_out))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            bearer_auth,
        ))
        .layer(request_id_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
