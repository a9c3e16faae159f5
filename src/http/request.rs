/// A request as read from one connection.
///
/// Only the request target is derived; headers and body are never parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The bytes received in the single read (at most [`MAX_REQUEST_SIZE`]).
    pub raw: Vec<u8>,
    /// Second token of the request line (e.g. "/index.html")
    pub path: String,
}

/// Upper bound on how much of a request is read.
pub const MAX_REQUEST_SIZE: usize = 1024;

impl Request {
    /// Whether the path can name something outside the content root: it has
    /// a `..` segment, or it does not start with `/` (so `""` lands on
    /// `<root>.html` beside the root).
    ///
    /// Such paths are still resolved by plain concatenation onto the content
    /// root; this only lets callers report them.
    pub fn may_escape_root(&self) -> bool {
        !self.path.starts_with('/') || self.path.split(['/', '\\']).any(|segment| segment == "..")
    }
}
