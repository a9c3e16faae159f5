use crate::http::request::Request;

/// Extracts the request target from a raw request.
///
/// Takes the text after the first space, cut at the next space: the second
/// token of `METHOD URL VERSION`. Nothing is validated. Input without any
/// space yields the whole text, and a missing version simply leaves the rest
/// of the line (CRLF included) in the path.
///
/// Bytes after the first NUL are ignored and invalid UTF-8 is replaced.
pub fn extract_path(buf: &[u8]) -> String {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    let decoded = String::from_utf8_lossy(&buf[..end]);
    let text: &str = &decoded;

    let rest = match text.split_once(' ') {
        Some((_, rest)) => rest,
        None => text,
    };

    match rest.split_once(' ') {
        Some((path, _)) => path.to_string(),
        None => rest.to_string(),
    }
}

pub fn parse_http_request(buf: &[u8]) -> Request {
    Request {
        path: extract_path(buf),
        raw: buf.to_vec(),
    }
}
