//! Requests to the external simulation server.

pub mod client;
pub mod requests;

pub use client::dispatch;
pub use requests::ServerRequest;
