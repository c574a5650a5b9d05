//! # Userdir Upstream
//!
//! Client for the upstream users/posts source. One network round trip per
//! call, fixed connect and response timeouts, no retries — retry policy
//! belongs to the caller.

pub mod client;
pub mod http;

pub use client::UpstreamClient;
pub use http::HttpUpstreamClient;
