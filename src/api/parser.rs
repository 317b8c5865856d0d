// src/api/parser.rs
//! Turns raw HTTP responses into typed results or typed errors.

use super::client::ApiResponse;
use super::responses::{ErrorBody, ResultEnvelope};
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, SmartsheetErrorCode};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// Parse any Smartsheet API response body.
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: DeserializeOwned,
{
    if result.status.is_success() {
        parse_success(&result.data, &result.url)
    } else {
        Err(parse_error(&result.data, result.status, &result.url))
    }
}

/// Parse a write-operation response and unwrap its `result`.
pub fn parse_envelope<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: DeserializeOwned,
{
    let url = result.url.clone();
    let envelope: ResultEnvelope<T> = parse_api_response(result)?;
    if !envelope.is_success() {
        log::warn!(
            "{} answered with result code {} ({})",
            url,
            envelope.result_code,
            envelope.message
        );
    }
    Ok(envelope.result)
}

fn parse_success<T>(body: &str, url: &str) -> Result<T, AppError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);
        AppError::MalformedResponse(format!("{} (body: {})", e, preview(body)))
    })
}

/// Builds the error for a non-2xx response.
pub fn parse_error(body: &str, status: StatusCode, url: &str) -> AppError {
    if let Ok(error) = serde_json::from_str::<ErrorBody>(body) {
        return AppError::SmartsheetService {
            code: SmartsheetErrorCode::from_api_code(error.error_code),
            message: error.message,
            status,
            ref_id: error.ref_id,
        };
    }

    // Fallback to generic error with HTTP status code
    AppError::SmartsheetService {
        code: SmartsheetErrorCode::from_http_status(status.as_u16()),
        message: format!("HTTP {} from {}: {}", status, url, preview(body)),
        status,
        ref_id: None,
    }
}

fn preview(body: &str) -> String {
    if body.chars().count() > ERROR_BODY_PREVIEW_LENGTH {
        let cut: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}...", cut)
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Page;
    use crate::model::Folder;

    fn response(status: StatusCode, body: &str) -> ApiResponse<String> {
        ApiResponse {
            data: body.to_string(),
            status,
            url: "https://api.smartsheet.com/2.0/test".to_string(),
        }
    }

    #[test]
    fn test_parse_folder_page() {
        let page: Page<Folder> = parse_api_response(response(
            StatusCode::OK,
            r#"{"pageNumber":1,"pageSize":100,"totalPages":1,"totalCount":1,"data":[{"id":3,"name":"Ops"}]}"#,
        ))
        .unwrap();
        assert_eq!(page.data[0].name, "Ops");
    }

    #[test]
    fn test_error_parsing() {
        let err = parse_api_response::<Folder>(response(
            StatusCode::NOT_FOUND,
            r#"{"errorCode":1006,"message":"Not Found","refId":"abc"}"#,
        ))
        .unwrap_err();

        match err {
            AppError::SmartsheetService { code, ref_id, status, .. } => {
                assert_eq!(code, SmartsheetErrorCode::NotFound);
                assert_eq!(ref_id.as_deref(), Some("abc"));
                assert_eq!(status, StatusCode::NOT_FOUND);
            }
            other => panic!("Expected SmartsheetService, got {:?}", other),
        }
    }

    #[test]
    fn test_unparseable_error_falls_back_to_status() {
        let err = parse_api_response::<Folder>(response(StatusCode::BAD_GATEWAY, "<html>")).unwrap_err();
        assert_eq!(err.service_code(), Some(&SmartsheetErrorCode::HttpStatus(502)));
        assert!(err.is_remote_fetch_failure());
    }

    #[test]
    fn test_malformed_success_body() {
        let err = parse_api_response::<Folder>(response(StatusCode::OK, "{not json")).unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn test_envelope_unwraps_result() {
        let ids: Vec<u64> = parse_envelope(response(
            StatusCode::OK,
            r#"{"message":"SUCCESS","resultCode":0,"result":[11,12]}"#,
        ))
        .unwrap();
        assert_eq!(ids, vec![11, 12]);
    }
}
