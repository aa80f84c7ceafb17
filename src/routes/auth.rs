use axum::Json;

use crate::{
    error::AppResult,
    message::{LoginRequest, LoginResponse, SignupRequest, SignupResponse},
    services::auth,
};

/// `POST /login`
pub async fn login_handler(Json(body): Json<LoginRequest>) -> AppResult<Json<LoginResponse>> {
    Ok(Json(auth::login(&body)?))
}

/// `POST /signup`
pub async fn signup_handler(Json(body): Json<SignupRequest>) -> AppResult<Json<SignupResponse>> {
    Ok(Json(auth::signup(body)?))
}
