/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the image has no rows or no columns.
    #[error("Image is empty")]
    EmptyImage,

    /// Error when the rows of a nested grid have different lengths.
    #[error("Row {row} has {found} columns, expected {expected}")]
    NonRectangular {
        /// Index of the offending row.
        row: usize,
        /// Number of columns of the first row.
        expected: usize,
        /// Number of columns of the offending row.
        found: usize,
    },

    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidImageShape(usize, usize),

    /// Error when two images are expected to have the same size.
    #[error("Image size ({0}x{1}) does not match ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the number of histogram bins is not valid.
    #[error("Invalid number of bins ({0}), expected 1..=256")]
    InvalidHistogramBins(usize),
}
