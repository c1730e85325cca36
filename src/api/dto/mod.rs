//! Data Transfer Objects for API requests and responses.

pub mod link;

pub use link::{CreateLinkRequest, LinkResponse};
