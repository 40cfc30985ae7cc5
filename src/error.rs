//! Card binding error types.

use thiserror::Error;

/// Errors that can occur while binding a card view.
///
/// Binder updates themselves are infallible: missing slots skip writes and
/// out-of-range labels truncate. The only fallible surface is reading the
/// card configuration off a root element.
#[derive(Error, Debug)]
pub enum CardError {
    /// A required attribute is missing from the card root element.
    #[error("Missing required attribute on card root: {0}")]
    MissingAttribute(&'static str),
}
