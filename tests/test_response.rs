use std::fs;

use jella::http::resolver::{Resource, Site};
use jella::http::response::{FALLBACK_NOT_FOUND_PAGE, Response, StatusCode};
use jella::http::writer::{ResponseWriter, serialize_response};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
}

#[test]
fn test_response_ok_helper() {
    let response = Response::ok("text/plain", b"test content".to_vec());

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.content_type, "text/plain");
    assert_eq!(response.body, b"test content".to_vec());
}

#[test]
fn test_response_not_found_is_html() {
    let response = Response::not_found("gone");

    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(response.content_type, "text/html");
}

#[test]
fn test_serialized_shape() {
    for response in [Response::ok("image/png", vec![0u8, 1, 2]), Response::not_found("x")] {
        let bytes = serialize_response(&response);
        let text = String::from_utf8_lossy(&bytes);

        assert!(
            text.starts_with("HTTP/1.1 200 OK\r\n") || text.starts_with("HTTP/1.1 404 Not Found\r\n")
        );
        assert_eq!(text.matches("Content-Type: ").count(), 1);
        assert!(!text.contains("Content-Length"));

        let head_end = text.find("\r\n\r\n").unwrap();
        assert_eq!(&bytes[head_end + 4..], &response.body[..]);
    }
}

#[tokio::test]
async fn test_writer_sends_serialized_bytes() {
    let response = Response::ok("text/plain", "hi");
    let mut sink = Vec::new();

    ResponseWriter::new(&response).write_to_stream(&mut sink).await.unwrap();

    assert_eq!(sink, b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\nhi".to_vec());
}

#[tokio::test]
async fn test_found_file_is_typed_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("style.css"), "body{}").unwrap();
    let site = Site::new(dir.path());

    let resource = site.resolve("/style.css").await;
    let response = Response::for_resource(&site, &resource).await;

    assert_eq!(response, Response::ok("text/css", "body{}"));
}

#[tokio::test]
async fn test_unknown_extension_is_octet_stream() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("data.xyz"), [1u8, 2, 3]).unwrap();
    let site = Site::new(dir.path());

    let resource = site.resolve("/data.xyz").await;
    let response = Response::for_resource(&site, &resource).await;

    assert_eq!(response.content_type, "application/octet-stream");
    assert_eq!(response.body, vec![1u8, 2, 3]);
}

#[tokio::test]
async fn test_rewritten_paths_report_default_type() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "Hello").unwrap();
    fs::write(dir.path().join("about.html"), "About").unwrap();
    let site = Site::new(dir.path());

    for (path, body) in [("/", "Hello"), ("/about", "About")] {
        let response = Response::for_resource(&site, &site.resolve(path).await).await;

        assert_eq!(response, Response::ok("application/octet-stream", body), "path {path}");
    }

    let direct = Response::for_resource(&site, &site.resolve("/about.html").await).await;
    assert_eq!(direct.content_type, "text/html");
}

#[tokio::test]
async fn test_custom_not_found_page() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("404.html"), "<h1>custom</h1>").unwrap();
    let site = Site::new(dir.path());

    let response = Response::for_resource(&site, &Resource::NotFound).await;

    assert_eq!(response, Response::not_found("<h1>custom</h1>"));
}

#[tokio::test]
async fn test_fallback_not_found_page() {
    let dir = tempfile::tempdir().unwrap();
    let site = Site::new(dir.path());

    let response = Response::for_resource(&site, &Resource::NotFound).await;

    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(response.body, FALLBACK_NOT_FOUND_PAGE.as_bytes());
}

#[tokio::test]
async fn test_vanished_file_becomes_not_found() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("tmp.txt"), "x").unwrap();
    let site = Site::new(dir.path());

    let resource = site.resolve("/tmp.txt").await;
    fs::remove_file(dir.path().join("tmp.txt")).unwrap();
    let response = Response::for_resource(&site, &resource).await;

    assert_eq!(response.status, StatusCode::NotFound);
}
