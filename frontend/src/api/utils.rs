use crate::session::{LocalStorageSession, SessionProvider};
use gloo_net::http::{Request, RequestBuilder, Response};
use shared::{ErrorResponse, SharedError};

/// Creates a request with the Authorization header from localStorage
pub fn authenticated_request(method: &str, url: &str) -> RequestBuilder {
    let mut req = match method.to_uppercase().as_str() {
        "GET" => Request::get(url),
        "POST" => Request::post(url),
        "PUT" => Request::put(url),
        "DELETE" => Request::delete(url),
        _ => Request::get(url), // Default to GET
    };

    if let Some(token) = LocalStorageSession.token() {
        req = req.header("Authorization", &format!("Bearer {}", token));
    }

    req
}

/// Creates a GET request with authentication
pub fn authenticated_get(url: &str) -> RequestBuilder {
    authenticated_request("GET", url)
}

/// Creates a POST request with authentication
pub fn authenticated_post(url: &str) -> RequestBuilder {
    authenticated_request("POST", url)
}

/// Creates a PUT request with authentication
pub fn authenticated_put(url: &str) -> RequestBuilder {
    authenticated_request("PUT", url)
}

/// Creates a DELETE request with authentication
pub fn authenticated_delete(url: &str) -> RequestBuilder {
    authenticated_request("DELETE", url)
}

/// Turns a non-2xx response into an error, preferring the server's message
pub async fn error_from_response(response: Response) -> SharedError {
    let status = response.status();
    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.message,
        Err(_) => response.status_text(),
    };
    SharedError::Http { status, message }
}
