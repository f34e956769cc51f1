//! HTTP middleware components.
//!
//! Middleware runs before route handlers and can reject a request before
//! any report query is issued.

/// API key authentication middleware
pub mod auth;
