//! HTTP request handlers (route handlers).
//!
//! Each handler extracts request data, calls into the services, and returns
//! a JSON response.

/// Service health endpoint
pub mod health;
/// Report chart endpoints
pub mod reports;
