//! Business logic services for the application layer.

pub mod link_service;
pub mod slug_resolver;

pub use link_service::LinkService;
pub use slug_resolver::resolve_slug;
