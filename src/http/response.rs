use tokio::fs;

use crate::http::mime;
use crate::http::resolver::{NOT_FOUND_DOCUMENT, Resource, Site};

/// HTTP status codes the server can answer with.
///
/// - `Ok` (200): the requested file was found
/// - `NotFound` (404): anything else
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use jella::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// Content type of every 404 response.
pub const NOT_FOUND_CONTENT_TYPE: &str = "text/html";

/// Served as the 404 body when the content root has no `404.html`.
pub const FALLBACK_NOT_FOUND_PAGE: &str = r#"<html><body style="background-color: black; margin: 0; display: flex; justify-content: center; align-items: center; height: 100vh;"><div style="text-align: center;"><h1 style="font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; color: white;">404</h1><p style="font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; color: white;">Page Not Found</p></div><p style="position: absolute; bottom: 0; left: 50%; transform: translateX(-50%); padding: 10px; font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; color: white;">Powered by Jella Web Server</p></body></html>"#;

/// A complete response: status line, a single `Content-Type` header, body.
///
/// There is deliberately no `Content-Length`; the body ends when the
/// connection closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl Response {
    /// Creates a 200 OK response.
    pub fn ok(content_type: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type: content_type.into(),
            body: body.into(),
        }
    }

    /// Creates a 404 Not Found response with an HTML body.
    pub fn not_found(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: StatusCode::NotFound,
            content_type: NOT_FOUND_CONTENT_TYPE.to_string(),
            body: body.into(),
        }
    }

    /// Builds the response for a resolved resource.
    ///
    /// A found file is read whole and typed by its extension. Otherwise the
    /// site's `404.html` is used, or [`FALLBACK_NOT_FOUND_PAGE`] without one.
    pub async fn for_resource(site: &Site, resource: &Resource) -> Self {
        if let Resource::Found {
            file_path,
            extension,
        } = resource
        {
            match fs::read(file_path).await {
                Ok(body) => return Self::ok(mime::content_type(extension), body),
                Err(e) => {
                    tracing::warn!(
                        file = %file_path.display(),
                        error = %e,
                        "Resolved file could not be read"
                    );
                }
            }
        }

        Self::site_not_found(site).await
    }

    async fn site_not_found(site: &Site) -> Self {
        match fs::read(site.concat(NOT_FOUND_DOCUMENT)).await {
            Ok(page) => Self::not_found(page),
            Err(_) => Self::not_found(FALLBACK_NOT_FOUND_PAGE),
        }
    }
}
