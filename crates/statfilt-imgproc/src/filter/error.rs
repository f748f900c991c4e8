use statfilt_image::{ImageError, ImageSize};

/// An error type for the filter module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FilterError {
    /// The window length is even or smaller than 3.
    #[error("Window length must be an odd number not less than 3. Given {0}")]
    InvalidWindowLength(usize),

    /// An image side is shorter than `window_len - 1`.
    #[error("Window length {window_len} is too large to mirror inside {size}")]
    WindowExceedsImage {
        /// The requested window length.
        window_len: usize,
        /// The size of the image.
        size: ImageSize,
    },

    /// The aggregate of a window was not finite, e.g. a zero denominator.
    #[error("Division by zero while filtering pixel ({row}, {col})")]
    DivisionByZero {
        /// Row of the output pixel.
        row: usize,
        /// Column of the output pixel.
        col: usize,
    },

    /// The filter name is not known.
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    /// The image is invalid.
    #[error(transparent)]
    Image(#[from] ImageError),
}
