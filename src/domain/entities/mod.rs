//! Core domain entities.
//!
//! - [`Link`] - A persisted slug to URL mapping
//! - [`NewLink`] - Input for creating a link
//! - [`Slug`] - Validated, normalized slug value

pub mod link;
pub mod slug;

pub use link::{Link, NewLink};
pub use slug::{GENERATED_SLUG_LENGTH, Slug, SlugError};
