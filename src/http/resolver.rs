//! Maps request paths onto files under the content root.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tokio::fs;

/// Default content root, relative to the working directory.
pub const DEFAULT_ROOT: &str = "www";

/// Document served for `/`.
pub const INDEX_DOCUMENT: &str = "/index.html";

/// Custom error page, looked up under the content root.
pub const NOT_FOUND_DOCUMENT: &str = "/404.html";

const HTML_SUFFIX: &str = ".html";

/// Outcome of resolving a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    Found {
        file_path: PathBuf,
        /// Extension of the path as requested, before any rewrite.
        /// Empty when the request had none (including `/`).
        extension: String,
    },
    NotFound,
}

/// The directory files are served from.
#[derive(Debug, Clone)]
pub struct Site {
    root: PathBuf,
}

impl Default for Site {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT)
    }
}

impl Site {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Appends `path` to the root as text. This is not `Path::join`: a
    /// leading `/` does not replace the root and `..` is not normalized.
    pub fn concat(&self, path: &str) -> PathBuf {
        let mut full = OsString::from(self.root.as_os_str());
        full.push(path);
        PathBuf::from(full)
    }

    /// Resolves a raw request path.
    ///
    /// Rules, in order:
    /// 1. `/` becomes `/index.html`.
    /// 2. A path not ending in `.html` gets `.html` appended when the root is
    ///    a directory and `<root><path>.html` is a regular file.
    /// 3. `<root><path>` must open as a regular file, else [`Resource::NotFound`].
    pub async fn resolve(&self, raw_path: &str) -> Resource {
        let extension = extension_of(raw_path);

        let mut path = if raw_path == "/" {
            INDEX_DOCUMENT.to_string()
        } else {
            raw_path.to_string()
        };

        if !path.ends_with(HTML_SUFFIX) && is_dir(&self.root).await {
            let candidate = format!("{path}{HTML_SUFFIX}");
            if is_file(&self.concat(&candidate)).await {
                path = candidate;
            }
        }

        let file_path = self.concat(&path);
        let opened = match fs::File::open(&file_path).await {
            Ok(file) => file.metadata().await.map(|m| m.is_file()).unwrap_or(false),
            Err(_) => false,
        };

        if !opened {
            tracing::debug!(path = %raw_path, "No file for request path");
            return Resource::NotFound;
        }

        tracing::debug!(path = %raw_path, file = %file_path.display(), "Resolved");
        Resource::Found {
            file_path,
            extension,
        }
    }
}

fn extension_of(path: &str) -> String {
    Path::new(path)
        .extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default()
}

async fn is_dir(path: &Path) -> bool {
    fs::metadata(path).await.map(|m| m.is_dir()).unwrap_or(false)
}

async fn is_file(path: &Path) -> bool {
    fs::metadata(path).await.map(|m| m.is_file()).unwrap_or(false)
}
