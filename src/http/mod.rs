//! HTTP protocol handling.
//!
//! This module answers exactly one request per connection with a file from
//! the content root.
//!
//! # Architecture
//!
//! - **`connection`**: Per-connection handler implementing the read/respond/close state machine
//! - **`parser`**: Extracts the request target from raw request bytes
//! - **`request`**: The per-connection request
//! - **`resolver`**: Maps a request path to a file under the content root
//! - **`response`**: Response representation, 200 and 404 construction
//! - **`writer`**: Serializes and writes responses to the client
//! - **`mime`**: MIME type lookup based on file extensions
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Single read of up to 1024 bytes
//!        └──────┬──────┘
//!               │ Request received (read failure → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │   Responding     │ ← Resolve, build and write the response
//!        └──────┬───────────┘
//!               │
//!               ▼
//!        ┌──────────────────┐
//!        │     Closed       │ ← Stream shut down on every path
//!        └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use jella::http::connection::Connection;
//! use jella::http::resolver::Site;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         if let Err(e) = Connection::new(socket, Site::default()).run().await {
//!             eprintln!("Connection error: {}", e);
//!         }
//!     }
//! }
//! ```

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
pub mod mime;
pub mod resolver;
