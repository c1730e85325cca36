//! Helpers shared across layers.
//!
//! - [`url_validator`] - Target URL validation
//! - [`db_error`] - Classification of database errors

pub mod db_error;
pub mod url_validator;
