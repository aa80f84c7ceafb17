//! Mock authentication. Nothing is stored and the tokens are fixed strings.

use crate::error::{AppError, AppResult};
use crate::message::{LoginRequest, LoginResponse, SignupRequest, SignupResponse, SignupUser};

pub const LOGIN_TOKEN: &str = "mock_token_123";
pub const SIGNUP_TOKEN: &str = "mock_token_signup_123";

pub fn login(req: &LoginRequest) -> AppResult<LoginResponse> {
    if req.email.is_empty() || req.password.is_empty() {
        return Err(AppError::InvalidCredentials);
    }

    Ok(LoginResponse {
        token: LOGIN_TOKEN.to_string(),
        message: "Login successful".to_string(),
    })
}

pub fn signup(req: SignupRequest) -> AppResult<SignupResponse> {
    if req.name.is_empty() || req.email.is_empty() || req.password.is_empty() {
        return Err(AppError::InvalidSignupData);
    }

    Ok(SignupResponse {
        token: SIGNUP_TOKEN.to_string(),
        message: "Signup successful".to_string(),
        user: SignupUser {
            name: req.name,
            email: req.email,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login_req(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn signup_req(name: &str, email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn login_accepts_any_non_empty_pair() {
        let resp = login(&login_req("a@b.c", "x")).unwrap();
        assert_eq!(resp.token, LOGIN_TOKEN);
        assert_eq!(resp.message, "Login successful");
    }

    #[test]
    fn login_rejects_empty_fields() {
        assert_eq!(login(&login_req("", "x")).unwrap_err(), AppError::InvalidCredentials);
        assert_eq!(login(&login_req("a@b.c", "")).unwrap_err(), AppError::InvalidCredentials);
    }

    #[test]
    fn whitespace_is_not_empty() {
        assert!(login(&login_req(" ", " ")).is_ok());
    }

    #[test]
    fn signup_echoes_user() {
        let resp = signup(signup_req("Ada", "ada@example.com", "pw")).unwrap();
        assert_eq!(resp.token, SIGNUP_TOKEN);
        assert_eq!(resp.user.name, "Ada");
        assert_eq!(resp.user.email, "ada@example.com");
    }

    #[test]
    fn signup_rejects_any_empty_field() {
        for (n, e, p) in [("", "e", "p"), ("n", "", "p"), ("n", "e", "")] {
            assert_eq!(signup(signup_req(n, e, p)).unwrap_err(), AppError::InvalidSignupData);
        }
    }
}
