//! Networking modules for the external budget API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls and normalizes failures, `http` defines the
//! transport seam (browser `gloo-net` or a test double), `error` holds the
//! tagged failure kinds, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod http;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
