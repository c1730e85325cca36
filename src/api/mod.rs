//! HTTP layer translating requests into link operations.
//!
//! - [`dto`] - Request/response bodies
//! - [`handlers`] - Redirect, creation and not-found handlers
//! - [`middleware`] - Request logging and security headers

pub mod dto;
pub mod handlers;
pub mod middleware;
