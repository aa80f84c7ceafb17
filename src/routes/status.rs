use axum::Json;

use crate::message::StatusResponse;

pub async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".to_string(),
        message: "Dr. Chatbot API is running".to_string(),
    })
}
