//! Adapter implementations of the core ports
//!
//! - `http` - blocking reqwest client for the attendance REST backend
//! - `session` - TOML file session store (identity provider)
//! - `capture` - local image sources

pub mod capture;
pub mod http;
pub mod session;
