//! Router integration tests

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use ismr_sheets::{XlsxReader, OUTPUT_FILE_NAME, XLSX_MIME_TYPE};
use ismr_sheets_web::state::AppState;

const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

fn test_app() -> Router {
    ismr_sheets_web::app(AppState::new(), 32)
}

fn multipart_body(files: &[(&str, &str)], use_header: bool) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, content) in files {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"files\"; \
                 filename=\"{name}\"\r\nContent-Type: text/plain\r\n\r\n{content}\r\n"
            )
            .as_bytes(),
        );
    }
    if use_header {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"use_header\"\r\n\r\non\r\n"
            )
            .as_bytes(),
        );
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn multipart_request(uri: &str, files: &[(&str, &str)], use_header: bool) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(files, use_header)))
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

async fn body_string(response: axum::response::Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

fn extract_download_path(html: &str) -> String {
    let start = html.find("/download/").expect("no download link in page");
    let rest = &html[start..];
    let end = rest.find('"').expect("unterminated link");
    rest[..end].to_string()
}

#[tokio::test]
async fn form_page_serves() {
    let response = test_app()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page = body_string(response).await;
    assert!(page.contains("accept=\".ismr,.txt\""));
    assert!(page.contains("use_header"));
}

#[tokio::test]
async fn health_endpoint() {
    let response = test_app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn convert_then_one_shot_download() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(multipart_request(
            "/convert",
            &[("day001.ismr", "# log\na,b,c\nd,e\n"), ("skip.ismr", "# only\n")],
            false,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page = body_string(response).await;
    assert!(page.contains("day001.ismr: 2 row(s)"));
    assert!(page.contains("skip.ismr: empty or only comments"));

    let download_path = extract_download_path(&page);
    let response = app
        .clone()
        .oneshot(Request::get(&download_path).body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        XLSX_MIME_TYPE
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        format!("attachment; filename=\"{}\"", OUTPUT_FILE_NAME)
    );

    let bytes = body_bytes(response).await;
    let workbook = XlsxReader::read(std::io::Cursor::new(bytes)).unwrap();
    assert_eq!(workbook.sheet_count(), 1);
    assert_eq!(workbook.sheet(0).unwrap().name(), "day001");
    assert_eq!(workbook.sheet(0).unwrap().cell(1, 2), Some(""));

    // The store is one-shot: a second fetch must miss
    let response = app
        .oneshot(Request::get(&download_path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn convert_with_header_marks_frozen_row() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(multipart_request(
            "/convert",
            &[("data.ismr", "name,value\nGPS,1\n")],
            true,
        ))
        .await
        .unwrap();

    let page = body_string(response).await;
    let download_path = extract_download_path(&page);

    let response = app
        .oneshot(Request::get(&download_path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let bytes = body_bytes(response).await;
    let workbook = XlsxReader::read(std::io::Cursor::new(bytes)).unwrap();

    let sheet = workbook.sheet(0).unwrap();
    assert!(sheet.header_row());
    // Header styling changes presentation only; both rows are data
    assert_eq!(sheet.row_count(), 2);
}

#[tokio::test]
async fn api_convert_returns_ordered_statuses() {
    let response = test_app()
        .oneshot(multipart_request(
            "/api/convert",
            &[("b.ismr", "1,2\n"), ("a.ismr", "# nope\n")],
            false,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value =
        serde_json::from_slice(&body_bytes(response).await).unwrap();

    let statuses = json["statuses"].as_array().unwrap();
    assert_eq!(statuses.len(), 2);
    assert_eq!(statuses[0]["file_name"], "b.ismr");
    assert_eq!(statuses[0]["outcome"]["Success"]["rows"], 1);
    assert_eq!(statuses[1]["file_name"], "a.ismr");
    assert!(statuses[1]["outcome"]["Warning"].is_string());

    assert!(json["download"].as_str().unwrap().starts_with("/download/"));
}

#[tokio::test]
async fn api_convert_without_sheets_has_no_download() {
    let response = test_app()
        .oneshot(multipart_request(
            "/api/convert",
            &[("empty.ismr", "# comments only\n")],
            false,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value =
        serde_json::from_slice(&body_bytes(response).await).unwrap();

    assert!(json["download"].is_null());
    assert_eq!(json["statuses"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn convert_without_files_is_bad_request() {
    let response = test_app()
        .oneshot(multipart_request("/convert", &[], false))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = test_app()
        .oneshot(multipart_request("/api/convert", &[], false))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_download_is_not_found() {
    let response = test_app()
        .oneshot(
            Request::get("/download/00000000-0000-0000-0000-000000000000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
