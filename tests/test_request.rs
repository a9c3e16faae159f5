use jella::http::request::Request;

fn request(path: &str) -> Request {
    Request {
        raw: format!("GET {path} HTTP/1.1\r\n\r\n").into_bytes(),
        path: path.to_string(),
    }
}

#[test]
fn test_request_parent_segment_may_escape() {
    assert!(request("/../secret").may_escape_root());
    assert!(request("/a/../../b").may_escape_root());
    assert!(request("/..").may_escape_root());
    assert!(request("/a\\..\\b").may_escape_root());
}

#[test]
fn test_request_without_leading_slash_may_escape() {
    assert!(request("").may_escape_root());
    assert!(request("index.html").may_escape_root());
    assert!(request(".html").may_escape_root());
}

#[test]
fn test_request_ordinary_paths_stay_inside() {
    assert!(!request("/").may_escape_root());
    assert!(!request("/index.html").may_escape_root());
    assert!(!request("/archive..tar").may_escape_root());
    assert!(!request("/...").may_escape_root());
}
