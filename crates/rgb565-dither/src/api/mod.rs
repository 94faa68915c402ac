//! Public error surface for the rgb565-dither crate.
//!
//! [`DitherError`] wraps every error the crate can produce.

mod error;

pub use error::DitherError;
