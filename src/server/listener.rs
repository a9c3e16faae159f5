use std::io;
use std::net::{Ipv4Addr, SocketAddr};
use std::ops::RangeInclusive;

use tokio::net::{TcpListener, TcpSocket, TcpStream};
use tokio_rustls::TlsAcceptor;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::StartupError;
use crate::http::connection::Connection;
use crate::http::resolver::Site;
use crate::server::stream::ClientStream;
use crate::server::tls;

/// Same backlog tokio's `TcpListener::bind` uses.
pub const LISTEN_BACKLOG: u32 = 1024;

/// Dynamic/private ports, normally handed out to outgoing client sockets.
pub const EPHEMERAL_PORTS: RangeInclusive<i64> = 49152..=65535;

/// A bound listener, ready to serve.
///
/// Dropping it closes the listening socket and releases the TLS context.
pub struct Server {
    listener: TcpListener,
    tls: Option<TlsAcceptor>,
    site: Site,
    concurrent: bool,
}

impl Server {
    /// Validates the port, prepares TLS if enabled, then binds `0.0.0.0:<port>`.
    pub async fn bind(cfg: &Config) -> anyhow::Result<Self> {
        let port = u16::try_from(cfg.port).map_err(|_| StartupError::InvalidPort(cfg.port))?;

        if EPHEMERAL_PORTS.contains(&cfg.port) {
            warn!(
                port,
                "Port is in the dynamic/private range used by client applications for outgoing connections"
            );
        }

        let tls = if cfg.https {
            let acceptor = tls::load_acceptor(&cfg.cert, &cfg.key)
                .await
                .map_err(StartupError::Tls)?;
            Some(acceptor)
        } else {
            None
        };

        let listener = bind_listener(port).map_err(|source| StartupError::Bind { port, source })?;

        info!(
            addr = %listener.local_addr()?,
            tls = cfg.https,
            root = %cfg.root.display(),
            "Server is listening"
        );

        Ok(Self {
            listener,
            tls,
            site: cfg.site(),
            concurrent: cfg.concurrent,
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accepts and answers connections until the process ends.
    ///
    /// Failures are per connection: a failed accept, handshake, read or
    /// write is logged and the loop carries on.
    pub async fn serve(self) {
        loop {
            let (socket, peer) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    warn!(error = %e, "Accepting client failed");
                    continue;
                }
            };
            info!(peer = %peer, "Client connected");

            if self.concurrent {
                let tls = self.tls.clone();
                let site = self.site.clone();
                tokio::spawn(async move {
                    handle_client(socket, peer, tls.as_ref(), site).await;
                });
            } else {
                handle_client(socket, peer, self.tls.as_ref(), self.site.clone()).await;
            }
        }
    }
}

fn bind_listener(port: u16) -> io::Result<TcpListener> {
    let socket = TcpSocket::new_v4()?;
    socket.set_reuseaddr(true)?;
    socket.bind(SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)))?;
    socket.listen(LISTEN_BACKLOG)
}

async fn handle_client(socket: TcpStream, peer: SocketAddr, tls: Option<&TlsAcceptor>, site: Site) {
    let stream = match tls {
        Some(acceptor) => match acceptor.accept(socket).await {
            Ok(stream) => ClientStream::Tls(Box::new(stream)),
            Err(e) => {
                warn!(peer = %peer, error = %e, "TLS handshake failed");
                return;
            }
        },
        None => ClientStream::Plain(socket),
    };

    if let Err(e) = Connection::new(stream, site).run().await {
        warn!(peer = %peer, error = %format!("{e:#}"), "Connection error");
    }
}
