// src/routes/mod.rs
pub mod auth;
pub mod chat;
pub mod status;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use auth::{login_handler, signup_handler};
use chat::chat_handler;
use status::status_handler;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(status_handler))
        .route("/signup", post(signup_handler))
        .route("/login", post(login_handler))
        .route("/chat", post(chat_handler))
        .layer(TraceLayer::new_for_http())
}
