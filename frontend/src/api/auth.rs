use crate::api::api_url;
use crate::api::utils::error_from_response;
use gloo_net::http::Request;
use log::debug;
use shared::{LoginRequest, LoginResponse, SharedError};
use validator::Validate;

pub async fn login(email: &str, password: &str) -> shared::Result<LoginResponse> {
    debug!("Attempting login for user: {}", email);

    let login_request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    login_request.validate()?;

    let response = Request::post(&api_url("/login"))
        .json(&login_request)
        .map_err(|e| SharedError::Conversion(format!("Failed to serialize login request: {}", e)))?
        .send()
        .await
        .map_err(|e| SharedError::Network(format!("Failed to send login request: {}", e)))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    let login_response = response
        .json::<LoginResponse>()
        .await
        .map_err(|e| SharedError::Conversion(format!("Failed to parse login response: {}", e)))?;

    debug!("Successfully logged in user: {}", email);
    Ok(login_response)
}
