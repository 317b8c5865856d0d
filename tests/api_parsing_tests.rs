// tests/api_parsing_tests.rs
//! Parsing of recorded API payloads.

use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use smartsheet_helpers::api::client::ApiResponse;
use smartsheet_helpers::api::parser::{parse_api_response, parse_envelope};
use smartsheet_helpers::api::types::Page;
use smartsheet_helpers::resources::{attachment_map_for_sheet, cell_values_by_name, column_by_name_map};
use smartsheet_helpers::{
    AppError, CellValue, ColumnId, Folder, Row, Sheet, SmartsheetErrorCode, SmartsheetHttpClient,
};

fn response(status: StatusCode, body: &str) -> ApiResponse<String> {
    ApiResponse {
        data: body.to_string(),
        status,
        url: "https://api.smartsheet.com/2.0/fixture".to_string(),
    }
}

fn budget_sheet() -> Sheet {
    let json = include_str!("fixtures/api_responses/sheet_budget.json");
    parse_api_response(response(StatusCode::OK, json)).expect("Failed to parse sheet fixture")
}

#[test]
fn test_sheet_fixture_parses() {
    let sheet = budget_sheet();

    assert_eq!(sheet.name, "Q3 Budget");
    assert_eq!(sheet.columns.len(), 3);
    assert_eq!(sheet.rows.len(), 2);
    assert_eq!(sheet.rows[1].cells[1].value, None);
    assert_eq!(sheet.source.as_ref().map(|s| s.to_string()).as_deref(), Some("template(55)"));
}

#[test]
fn test_sheet_fixture_values_by_column_title() {
    let sheet = budget_sheet();

    let columns = column_by_name_map(&sheet);
    assert_eq!(columns["Approved"].column_type.as_deref(), Some("CHECKBOX"));
    assert!(columns.duplicates().is_empty());

    let values = cell_values_by_name(&sheet);
    assert_eq!(values[0]["Cost"], Some(CellValue::Number(1200.0)));
    assert_eq!(values[0]["Approved"], Some(CellValue::Bool(true)));
    assert_eq!(values[1]["Cost"], None);
}

#[test]
fn test_embedded_attachments_need_no_client() {
    let sheet = budget_sheet();
    let config = smartsheet_helpers::ClientConfig::new(
        smartsheet_helpers::AccessToken::new("unused-token").unwrap(),
    );
    // Never contacted: the sheet already carries its attachments.
    let client = SmartsheetHttpClient::new(&config).unwrap();

    let map = attachment_map_for_sheet(&client, &sheet, |a| a.name.clone()).unwrap();

    assert_eq!(map.len(), 1);
    assert_eq!(map["quote.pdf"].size_in_kb, Some(84));
}

#[test]
fn test_folder_page_fixture() {
    let json = include_str!("fixtures/api_responses/home_folders_page.json");
    let page: Page<Folder> = parse_api_response(response(StatusCode::OK, json)).unwrap();

    assert_eq!(page.total_count, Some(2));
    assert_eq!(page.data[1].favorite, Some(true));
    assert!(page.data.iter().all(|f| !f.is_populated()));
}

#[test]
fn test_update_rows_envelope() {
    let json = include_str!("fixtures/api_responses/update_rows_result.json");
    let rows: Vec<Row> = parse_envelope(response(StatusCode::OK, json)).unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].cells[0].column_id, Some(ColumnId::new(102)));
}

#[test]
fn test_error_fixture() {
    let json = include_str!("fixtures/api_responses/error_not_found.json");
    let err = parse_api_response::<Sheet>(response(StatusCode::NOT_FOUND, json)).unwrap_err();

    match err {
        AppError::SmartsheetService { code, ref_id, .. } => {
            assert_eq!(code, SmartsheetErrorCode::NotFound);
            assert_eq!(ref_id.as_deref(), Some("1ugr2xqxk9z2l"));
        }
        other => panic!("Expected SmartsheetService, got {:?}", other),
    }
}
