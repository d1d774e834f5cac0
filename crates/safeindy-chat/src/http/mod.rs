//! HTTP transport for the SafeIndy chat endpoint.
//!
//! POSTs a JSON `ChatRequest` and expects a JSON `ChatReply` back. Any
//! network error, non-2xx status, or undecodable body becomes a
//! `TransportError`.

mod api;
mod client;
mod config;

pub use client::HttpTransport;
pub use config::HttpConfig;
