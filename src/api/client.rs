// src/api/client.rs
//! Blocking HTTP client for the Smartsheet API.
//!
//! Handles authentication, query shaping and request tracing. Parsing is
//! delegated to `parser`; business logic lives in `resources`.

use super::parser::{parse_api_response, parse_envelope, parse_error};
use super::types::{Page, PageRequest, PaginationRequest, SheetQuery};
use super::{AttachmentTarget, SmartsheetApi};
use crate::config::ClientConfig;
use crate::error::AppError;
use crate::model::{
    join_params, Attachment, Column, ContainerDestination, Folder, ObjectExclusion, Row, Sheet,
    SheetCopyInclusion, SheetInclusion, Workspace,
};
use crate::types::{AccessToken, AttachmentId, BaseUrl, FolderId, RowId, SheetId};
use reqwest::blocking::{Body, Client, RequestBuilder, Response};
use reqwest::{header, Method};
use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

type Query = Vec<(&'static str, String)>;

/// A thin wrapper around a blocking reqwest Client for Smartsheet requests.
#[derive(Clone)]
pub struct SmartsheetHttpClient {
    client: Client,
    download_client: Client,
    base_url: BaseUrl,
    pagination: PaginationRequest,
    trace: bool,
    trace_pretty: bool,
}

impl SmartsheetHttpClient {
    /// Creates a new HTTP client from an explicit configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(&config.access_token)?)
            .build()?;
        // Attachment URLs are pre-signed; they must not carry our bearer token.
        let download_client = Client::builder().build()?;
        Ok(Self {
            client,
            download_client,
            base_url: config.base_url.clone(),
            pagination: config.pagination(),
            trace: config.trace,
            trace_pretty: config.trace_pretty,
        })
    }

    /// Creates the default headers for Smartsheet API requests.
    fn create_headers(token: &AccessToken) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", token.as_str());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid access token format: {}", e))
            })?,
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    fn request(&self, method: Method, endpoint: &str, query: &Query) -> RequestBuilder {
        let url = self.base_url.endpoint(endpoint);
        log::debug!("{} {}", method, url);
        self.client.request(method, url).query(query)
    }

    /// Makes a GET request to the specified endpoint.
    pub fn get(&self, endpoint: &str, query: &Query) -> Result<ApiResponse<String>, AppError> {
        let response = self.request(Method::GET, endpoint, query).send()?;
        self.extract(response)
    }

    /// Sends a JSON body with the given method.
    pub fn send_json<T: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        query: &Query,
        body: &T,
    ) -> Result<ApiResponse<String>, AppError> {
        self.trace_body("request", &serde_json::to_value(body)?);
        let response = self.request(method, endpoint, query).json(body).send()?;
        self.extract(response)
    }

    /// Makes a DELETE request to the specified endpoint.
    pub fn delete(&self, endpoint: &str, query: &Query) -> Result<ApiResponse<String>, AppError> {
        let response = self.request(Method::DELETE, endpoint, query).send()?;
        self.extract(response)
    }

    fn extract(&self, response: Response) -> Result<ApiResponse<String>, AppError> {
        let result = extract_response_text(response)?;
        if self.trace {
            log::debug!("{} -> {}", result.url, result.status);
            match serde_json::from_str::<serde_json::Value>(&result.data) {
                Ok(value) => self.trace_body("response", &value),
                Err(_) => log::debug!("response body: {}", result.data),
            }
        }
        Ok(result)
    }

    fn trace_body(&self, label: &str, body: &serde_json::Value) {
        if !self.trace {
            return;
        }
        let rendered = if self.trace_pretty {
            serde_json::to_string_pretty(body)
        } else {
            serde_json::to_string(body)
        };
        log::debug!(
            "{} body: {}",
            label,
            rendered.unwrap_or_else(|_| "Failed to serialize".to_string())
        );
    }

    fn list<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        mut query: Query,
        request: PageRequest,
    ) -> Result<Page<T>, AppError> {
        query.extend(request.query_pairs());
        parse_api_response(self.get(endpoint, &query)?)
    }
}

impl SmartsheetApi for SmartsheetHttpClient {
    fn pagination(&self) -> PaginationRequest {
        self.pagination.clone()
    }

    fn list_folders(&self, request: PageRequest) -> Result<Page<Folder>, AppError> {
        self.list("home/folders", Vec::new(), request)
    }

    fn list_workspaces(&self, request: PageRequest) -> Result<Page<Workspace>, AppError> {
        self.list("workspaces", Vec::new(), request)
    }

    fn list_sheets(&self, request: PageRequest) -> Result<Page<Sheet>, AppError> {
        self.list("sheets", vec![("include", "source".to_string())], request)
    }

    fn list_columns(&self, sheet_id: SheetId, request: PageRequest) -> Result<Page<Column>, AppError> {
        self.list(&format!("sheets/{}/columns", sheet_id), Vec::new(), request)
    }

    fn list_attachments(
        &self,
        sheet_id: SheetId,
        request: PageRequest,
    ) -> Result<Page<Attachment>, AppError> {
        self.list(&format!("sheets/{}/attachments", sheet_id), Vec::new(), request)
    }

    fn get_folder(&self, folder_id: FolderId) -> Result<Folder, AppError> {
        let query = vec![("include", "source".to_string())];
        parse_api_response(self.get(&format!("folders/{}", folder_id), &query)?)
    }

    fn get_sheet(&self, sheet_id: SheetId, query: &SheetQuery) -> Result<Sheet, AppError> {
        parse_api_response(self.get(&format!("sheets/{}", sheet_id), &sheet_query_pairs(query))?)
    }

    fn get_attachment(
        &self,
        sheet_id: SheetId,
        attachment_id: AttachmentId,
    ) -> Result<Attachment, AppError> {
        let endpoint = format!("sheets/{}/attachments/{}", sheet_id, attachment_id);
        parse_api_response(self.get(&endpoint, &Vec::new())?)
    }

    fn add_rows(&self, sheet_id: SheetId, rows: &[Row]) -> Result<Vec<Row>, AppError> {
        let endpoint = format!("sheets/{}/rows", sheet_id);
        parse_envelope(self.send_json(Method::POST, &endpoint, &Vec::new(), rows)?)
    }

    fn update_rows(&self, sheet_id: SheetId, rows: &[Row]) -> Result<Vec<Row>, AppError> {
        let endpoint = format!("sheets/{}/rows", sheet_id);
        parse_envelope(self.send_json(Method::PUT, &endpoint, &Vec::new(), rows)?)
    }

    fn delete_rows(
        &self,
        sheet_id: SheetId,
        row_ids: &[RowId],
        ignore_rows_not_found: bool,
    ) -> Result<Vec<RowId>, AppError> {
        let ids = row_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let query = vec![
            ("ids", ids),
            ("ignoreRowsNotFound", ignore_rows_not_found.to_string()),
        ];
        parse_envelope(self.delete(&format!("sheets/{}/rows", sheet_id), &query)?)
    }

    fn copy_sheet(
        &self,
        sheet_id: SheetId,
        destination: &ContainerDestination,
        include: &[SheetCopyInclusion],
    ) -> Result<Sheet, AppError> {
        let mut query = Vec::new();
        if !include.is_empty() {
            query.push(("include", join_params(include, SheetCopyInclusion::as_param)));
        }
        let endpoint = format!("sheets/{}/copy", sheet_id);
        parse_envelope(self.send_json(Method::POST, &endpoint, &query, destination)?)
    }

    fn attach_file(
        &self,
        target: AttachmentTarget,
        name: &str,
        path: &Path,
    ) -> Result<Attachment, AppError> {
        let endpoint = match target {
            AttachmentTarget::Sheet(sheet_id) => format!("sheets/{}/attachments", sheet_id),
            AttachmentTarget::Row(sheet_id, row_id) => {
                format!("sheets/{}/rows/{}/attachments", sheet_id, row_id)
            }
        };
        let (body, length) = upload_body(path)?;
        log::debug!("Uploading {} ({} bytes) as '{}'", path.display(), length, name);

        let response = self
            .request(Method::POST, &endpoint, &Vec::new())
            .header(header::CONTENT_TYPE, "application/octet-stream")
            .header(
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", name.replace('"', "'")),
            )
            .body(body)
            .send()?;
        parse_envelope(self.extract(response)?)
    }

    fn open_download(&self, url: &str) -> Result<Box<dyn Read + Send>, AppError> {
        log::debug!("GET {}", url);
        let response = self.download_client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(parse_error(&body, status, url));
        }
        Ok(Box::new(response))
    }
}

/// A streaming request body over the file, sized from its metadata.
fn upload_body(path: &Path) -> Result<(Body, u64), AppError> {
    let file = File::open(path)?;
    let length = file.metadata()?.len();
    Ok((Body::sized(file, length), length))
}

/// Query parameters for a single-sheet fetch.
fn sheet_query_pairs(query: &SheetQuery) -> Query {
    fn join_ids<T: std::fmt::Display>(ids: &[T]) -> String {
        ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(",")
    }

    let mut pairs = Vec::new();
    if !query.include.is_empty() {
        pairs.push(("include", join_params(&query.include, SheetInclusion::as_param)));
    }
    if !query.exclude.is_empty() {
        pairs.push(("exclude", join_params(&query.exclude, ObjectExclusion::as_param)));
    }
    if query.excludes_rows() {
        // An empty id list is not accepted; a filter that matches nothing is.
        pairs.push(("rowNumbers", "0".to_string()));
    } else {
        if let Some(ids) = query.row_ids.as_deref().filter(|ids| !ids.is_empty()) {
            pairs.push(("rowIds", join_ids(ids)));
        }
        if let Some(numbers) = query.row_numbers.as_deref().filter(|n| !n.is_empty()) {
            pairs.push(("rowNumbers", join_ids(numbers)));
        }
    }
    if let Some(ids) = query.column_ids.as_deref().filter(|ids| !ids.is_empty()) {
        pairs.push(("columnIds", join_ids(ids)));
    }
    if let Some(page_size) = query.page_size {
        pairs.push(("pageSize", page_size.to_string()));
    }
    if let Some(page) = query.page {
        pairs.push(("page", page.to_string()));
    }
    pairs
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text with metadata.
pub fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text()?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ColumnId, RowId};

    #[test]
    fn test_upload_body_streams_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        std::fs::write(&path, b"a,b\n1,2\n").unwrap();

        let (body, length) = upload_body(&path).unwrap();

        assert_eq!(length, 8);
        // A reader-backed body, not a buffered one.
        assert!(body.as_bytes().is_none());
    }

    #[test]
    fn test_upload_body_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = upload_body(&dir.path().join("absent.pdf")).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn test_no_rows_query() {
        let query = SheetQuery {
            include: vec![SheetInclusion::OwnerInfo, SheetInclusion::Source],
            exclude: vec![ObjectExclusion::NonexistentCells],
            row_ids: Some(Vec::new()),
            row_numbers: Some(Vec::new()),
            ..SheetQuery::default()
        };
        let pairs = sheet_query_pairs(&query);
        assert_eq!(
            pairs,
            vec![
                ("include", "ownerInfo,source".to_string()),
                ("exclude", "nonexistentCells".to_string()),
                ("rowNumbers", "0".to_string()),
            ]
        );
    }

    #[test]
    fn test_filtered_query() {
        let query = SheetQuery {
            row_ids: Some(vec![RowId::new(1), RowId::new(2)]),
            column_ids: Some(vec![ColumnId::new(9)]),
            page_size: Some(50),
            ..SheetQuery::default()
        };
        let pairs = sheet_query_pairs(&query);
        assert_eq!(
            pairs,
            vec![
                ("rowIds", "1,2".to_string()),
                ("columnIds", "9".to_string()),
                ("pageSize", "50".to_string()),
            ]
        );
    }

    #[test]
    fn test_client_builds_from_config() {
        let config = ClientConfig::new(AccessToken::new("test-token-123").unwrap());
        let client = SmartsheetHttpClient::new(&config).unwrap();
        assert_eq!(client.base_url().as_str(), "https://api.smartsheet.com/2.0");
    }
}
