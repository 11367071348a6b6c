use crate::{client::model::error::ApiError, model::department::DepartmentDto};

use super::helper::{get, parse_response, send_request};

/// Get all departments ordered by name
pub async fn get_departments() -> Result<Vec<DepartmentDto>, ApiError> {
    let response = send_request(get("/api/departments")).await?;
    parse_response(response).await
}
