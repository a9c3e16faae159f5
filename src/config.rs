//! Server configuration.
//!
//! Values come from three layers, later ones winning: built-in defaults, a
//! YAML file (`config.yaml` unless `--config` says otherwise), and
//! command-line flags.
//!
//! ```yaml
//! port: 8443
//! https: true
//! cert: server.crt
//! key: server.key
//! root: www
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use clap::Parser;
use clap::builder::BoolishValueParser;
use serde::Deserialize;

use crate::http::resolver::{DEFAULT_ROOT, Site};

pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";
pub const DEFAULT_PORT: i64 = 80;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Kept signed and unchecked here; the listener rejects values outside
    /// 0..=65535 at startup.
    pub port: i64,
    pub https: bool,
    pub cert: PathBuf,
    pub key: PathBuf,
    /// Content root.
    pub root: PathBuf,
    /// Handle each connection in its own task instead of one at a time.
    pub concurrent: bool,
    /// Exit cleanly once standard input reaches end of file.
    pub stop_on_stdin_eof: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            https: false,
            cert: PathBuf::from("server.crt"),
            key: PathBuf::from("server.key"),
            root: PathBuf::from(DEFAULT_ROOT),
            concurrent: false,
            stop_on_stdin_eof: false,
        }
    }
}

/// Command line flags.
#[derive(Debug, Clone, Parser)]
#[command(name = "jella")]
#[command(about = "Minimal static file server over HTTP or HTTPS")]
#[command(version)]
pub struct Cli {
    /// YAML configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Port to listen on, on all interfaces
    #[arg(short, long, allow_negative_numbers = true, env = "JELLA_PORT")]
    pub port: Option<i64>,

    /// Serve over TLS (true/false, 1/0, yes/no)
    #[arg(short = 's', long, value_parser = BoolishValueParser::new())]
    pub https: Option<bool>,

    /// PEM certificate chain
    #[arg(long)]
    pub cert: Option<PathBuf>,

    /// PEM private key
    #[arg(short, long)]
    pub key: Option<PathBuf>,

    /// Directory files are served from
    #[arg(long, env = "JELLA_ROOT")]
    pub root: Option<PathBuf>,

    #[arg(long)]
    pub concurrent: bool,

    #[arg(long)]
    pub stop_on_stdin_eof: bool,
}

impl Config {
    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_yaml::from_str(text)?)
    }

    /// Reads `path`, falling back to defaults when it is missing or invalid.
    pub fn load(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(
                    path = %path.display(),
                    "Configuration file not found, continuing with default settings"
                );
                return Self::default();
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Could not read configuration file");
                return Self::default();
            }
        };

        match Self::from_yaml(&text) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Error parsing configuration file");
                Self::default()
            }
        }
    }

    /// Loads the file named by `cli` and applies the flags on top.
    pub fn from_cli(cli: &Cli) -> Self {
        let mut cfg = Self::load(&cli.config);
        cli.apply(&mut cfg);
        cfg
    }

    pub fn site(&self) -> Site {
        Site::new(&self.root)
    }
}

impl Cli {
    pub fn apply(&self, cfg: &mut Config) {
        if let Some(port) = self.port {
            cfg.port = port;
        }
        if let Some(https) = self.https {
            cfg.https = https;
        }
        if let Some(cert) = &self.cert {
            cfg.cert = cert.clone();
        }
        if let Some(key) = &self.key {
            cfg.key = key.clone();
        }
        if let Some(root) = &self.root {
            cfg.root = root.clone();
        }
        cfg.concurrent |= self.concurrent;
        cfg.stop_on_stdin_eof |= self.stop_on_stdin_eof;
    }
}
