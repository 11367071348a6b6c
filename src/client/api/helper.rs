use crate::{client::model::error::ApiError, model::api::ErrorDto};
use reqwasm::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Helper function to parse API responses with consistent error handling
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::new(500, format!("Failed to parse response: {}", e)))
    } else {
        Err(parse_error(status, response).await)
    }
}

/// Helper function to parse empty success responses (204 No Content, etc.)
pub async fn parse_empty_response(response: Response) -> Result<(), ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(parse_error(status, response).await)
    }
}

/// Reads an `ErrorDto` body, keeping field messages and the fresh row version
async fn parse_error(status: u64, response: Response) -> ApiError {
    match response.json::<ErrorDto>().await {
        Ok(error_dto) => ApiError::from_dto(status, error_dto),
        Err(_) => ApiError::new(
            status,
            response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string()),
        ),
    }
}

/// Create a GET request
pub fn get(url: &str) -> Request {
    Request::get(url)
}

/// Create a POST request with JSON content type
pub fn post(url: &str) -> Request {
    Request::post(url).header("Content-Type", "application/json")
}

/// Create a PUT request with JSON content type
pub fn put(url: &str) -> Request {
    Request::put(url).header("Content-Type", "application/json")
}

/// Create a DELETE request
pub fn delete(url: &str) -> Request {
    Request::delete(url)
}

/// Send a request and handle common errors
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request
        .send()
        .await
        .map_err(|e| ApiError::new(500, format!("Failed to send request: {}", e)))
}

/// Serialize a payload to JSON string
pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload)
        .map_err(|e| ApiError::new(500, format!("Failed to serialize request: {}", e)))
}
