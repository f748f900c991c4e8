use crate::{ImageError, ImageSize};

/// Compute the size of an image given as a nested grid of rows.
///
/// # Arguments
///
/// * `rows` - The image rows, each holding one value per column.
///
/// # Returns
///
/// The image size, with `height` the number of rows and `width` the
/// number of columns.
///
/// # Errors
///
/// Returns [`ImageError::EmptyImage`] if there are no rows or the first row
/// is empty, and [`ImageError::NonRectangular`] if any row length differs
/// from the first one.
///
/// Example:
///
/// ```
/// use statfilt_image::ops::shape;
///
/// let size = shape(&[vec![0u8; 4], vec![0u8; 4]]).unwrap();
///
/// assert_eq!(size.height, 2);
/// assert_eq!(size.width, 4);
/// ```
pub fn shape<T>(rows: &[Vec<T>]) -> Result<ImageSize, ImageError> {
    let width = match rows.first() {
        Some(first) if !first.is_empty() => first.len(),
        _ => return Err(ImageError::EmptyImage),
    };

    if let Some((row, found)) = rows
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != width)
    {
        return Err(ImageError::NonRectangular {
            row,
            expected: width,
            found,
        });
    }

    Ok(ImageSize {
        width,
        height: rows.len(),
    })
}

/// Distance below which a value is snapped to the nearest integer before
/// truncation, absorbing floating point noise such as `2.9999999999999996`.
pub const QUANTIZATION_TOLERANCE: f64 = 1e-9;

/// Quantize a real valued intensity into an 8-bit pixel value.
///
/// The value is clamped to `[0, 255]` and then truncated toward zero, so
/// `12.9` becomes `12`. Values within [`QUANTIZATION_TOLERANCE`] of an integer
/// take that integer. NaN maps to `0`.
///
/// Example:
///
/// ```
/// use statfilt_image::ops::quantize_intensity;
///
/// assert_eq!(quantize_intensity(2.571), 2);
/// assert_eq!(quantize_intensity(-3.0), 0);
/// assert_eq!(quantize_intensity(1e6), 255);
/// ```
pub fn quantize_intensity(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    let value = value.clamp(0.0, 255.0);
    let nearest = value.round();
    if (value - nearest).abs() < QUANTIZATION_TOLERANCE {
        nearest as u8
    } else {
        value.trunc() as u8
    }
}
