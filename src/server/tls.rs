//! TLS termination setup.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use rustls::ServerConfig;
use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use tokio_rustls::TlsAcceptor;

/// Builds an acceptor from a PEM certificate chain and a PEM private key.
///
/// Fails if either file is unreadable or empty of the expected item, or if
/// the key does not belong to the first certificate of the chain.
pub async fn load_acceptor(cert_path: &Path, key_path: &Path) -> anyhow::Result<TlsAcceptor> {
    let certs = load_certs(cert_path).await?;
    let key = load_private_key(key_path).await?;

    let provider = Arc::new(rustls::crypto::ring::default_provider());
    let config = ServerConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()
        .context("failed to build TLS context")?
        .with_no_client_auth()
        .with_single_cert(certs, key)
        .with_context(|| {
            format!(
                "private key {} cannot be used with certificate {}",
                key_path.display(),
                cert_path.display()
            )
        })?;

    Ok(TlsAcceptor::from(Arc::new(config)))
}

async fn load_certs(path: &Path) -> anyhow::Result<Vec<CertificateDer<'static>>> {
    let pem = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read certificate {}", path.display()))?;

    let certs = rustls_pemfile::certs(&mut pem.as_slice())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("invalid certificate PEM in {}", path.display()))?;

    if certs.is_empty() {
        anyhow::bail!("no certificate found in {}", path.display());
    }

    Ok(certs)
}

async fn load_private_key(path: &Path) -> anyhow::Result<PrivateKeyDer<'static>> {
    let pem = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read private key {}", path.display()))?;

    rustls_pemfile::private_key(&mut pem.as_slice())
        .with_context(|| format!("invalid private key PEM in {}", path.display()))?
        .with_context(|| format!("no private key found in {}", path.display()))
}
