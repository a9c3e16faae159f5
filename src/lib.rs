//! Jella - minimal static file server
//!
//! Answers one request per connection with a file from the content root,
//! over plain TCP or TLS.

pub mod config;
pub mod error;
pub mod http;
pub mod server;
