use axum::{
    extract::State,
    Json,
};
use crate::{
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

// Always 200: model failures turn into fallback replies inside the dispatcher.
pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Json<ChatResponse> {
    Json(state.dispatcher.dispatch(&payload.message).await)
}
