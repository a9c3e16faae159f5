use anyhow::Context;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::parser::parse_http_request;
use crate::http::request::{MAX_REQUEST_SIZE, Request};
use crate::http::resolver::Site;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// One request/response exchange over a client stream.
///
/// Generic over the stream so the same handler serves plain TCP, TLS, and
/// in-memory pipes.
pub struct Connection<S> {
    stream: S,
    site: Site,
    state: ConnectionState,
}

#[derive(Debug)]
pub enum ConnectionState {
    Reading,
    Responding(Request),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, site: Site) -> Self {
        Self {
            stream,
            site,
            state: ConnectionState::Reading,
        }
    }

    /// Reads one request, answers it, then shuts the stream down.
    ///
    /// The stream is shut down and dropped on every path, including a failed
    /// read or write. The returned error is the one that ended the exchange.
    pub async fn run(mut self) -> anyhow::Result<()> {
        let result = self.exchange().await;

        if let Err(e) = self.stream.shutdown().await {
            tracing::debug!(error = %e, "Stream shutdown failed");
        }

        result
    }

    async fn exchange(&mut self) -> anyhow::Result<()> {
        loop {
            // Any early return below leaves the state at Closed.
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    let request = self.read_request().await?;
                    self.state = ConnectionState::Responding(request);
                }

                ConnectionState::Responding(request) => {
                    let response = Self::handle_request(&self.site, &request).await;

                    ResponseWriter::new(&response)
                        .write_to_stream(&mut self.stream)
                        .await
                        .context("failed to send response")?;
                }

                ConnectionState::Closed => return Ok(()),
            }
        }
    }

    /// Performs a single read of at most [`MAX_REQUEST_SIZE`] bytes.
    ///
    /// No retry: a request split across reads is answered from the first part.
    pub async fn read_request(&mut self) -> anyhow::Result<Request> {
        let mut buf = [0u8; MAX_REQUEST_SIZE];
        let n = self
            .stream
            .read(&mut buf)
            .await
            .context("failed to receive data from client")?;

        if n == 0 {
            anyhow::bail!("failed to receive data from client: connection closed");
        }

        let request = parse_http_request(&buf[..n]);
        tracing::debug!(path = %request.path, bytes = n, "Extracted URL");

        Ok(request)
    }

    async fn handle_request(site: &Site, request: &Request) -> Response {
        if request.may_escape_root() {
            tracing::warn!(
                path = %request.path,
                "Request path may leave the content root; it is resolved without normalization"
            );
        }

        let resource = site.resolve(&request.path).await;
        let response = Response::for_resource(site, &resource).await;

        tracing::info!(
            path = %request.path,
            status = response.status.as_u16(),
            "Request served"
        );

        response
    }
}
