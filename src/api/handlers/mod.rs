//! HTTP request handlers.

pub mod create_link;
pub mod not_found;
pub mod redirect;

pub use create_link::create_link_handler;
pub use not_found::{not_found_handler, not_found_page};
pub use redirect::redirect_handler;
