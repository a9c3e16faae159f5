use std::fmt;

/// Fatal errors raised before the server starts accepting.
///
/// Carried inside `anyhow::Error`; the binary downcasts to pick an exit code.
#[derive(Debug)]
pub enum StartupError {
    /// Port outside 0..=65535
    InvalidPort(i64),
    /// Socket creation, bind or listen failed
    Bind { port: u16, source: std::io::Error },
    /// TLS context, certificate or key could not be set up
    Tls(anyhow::Error),
}

impl StartupError {
    pub fn exit_code(&self) -> u8 {
        match self {
            StartupError::Bind { .. } => 1,
            StartupError::InvalidPort(_) => 2,
            StartupError::Tls(_) => 3,
        }
    }
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::InvalidPort(port) => write!(
                f,
                "invalid port number {port}, use a port between 0 and 65535"
            ),
            StartupError::Bind { port, source } => {
                write!(f, "bind to port {port} failed: {source}")
            }
            StartupError::Tls(e) => write!(f, "TLS setup failed: {e:#}"),
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StartupError::Bind { source, .. } => Some(source),
            StartupError::Tls(e) => Some(&**e),
            StartupError::InvalidPort(_) => None,
        }
    }
}

/// Exit code for an error returned by startup; 1 when it is not a [`StartupError`].
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<StartupError>()
        .map(StartupError::exit_code)
        .unwrap_or(1)
}
