//! TCP listener, optional TLS termination and the accept loop.

pub mod listener;
pub mod stream;
pub mod tls;

pub use listener::Server;
pub use stream::ClientStream;
