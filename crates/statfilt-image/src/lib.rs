#![deny(missing_docs)]
//! Grayscale image types and intensity utilities

/// image representation for filtering purposes.
pub mod image;

/// Error types for the image module.
pub mod error;

/// image shape and intensity helpers.
pub mod ops;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageDtype, ImageSize};
