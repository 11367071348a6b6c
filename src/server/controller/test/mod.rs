use axum::{body::to_bytes, response::Response};

use crate::model::api::ErrorDto;

mod course;

/// Reads a JSON `ErrorDto` from a handler response body.
async fn error_body(response: Response) -> ErrorDto {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
