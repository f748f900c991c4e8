use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use statfilt_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Trait for image data types.
///
/// Aggregations run in `f64`; `from_f64` brings the result back into the
/// pixel type.
pub trait ImageDtype: Copy + Default + PartialOrd + Into<f64> {
    /// Convert a f64 value to the image data type.
    fn from_f64(x: f64) -> Self;
}

impl ImageDtype for u8 {
    /// Clamps to `[0, 255]` and truncates toward zero. NaN maps to 0.
    fn from_f64(x: f64) -> Self {
        crate::ops::quantize_intensity(x)
    }
}

impl ImageDtype for f32 {
    fn from_f64(x: f64) -> Self {
        x as f32
    }
}

impl ImageDtype for f64 {
    fn from_f64(x: f64) -> Self {
        x
    }
}

/// Represents a single channel image with pixel data.
///
/// The pixels are stored contiguously in row-major order, `height` rows of
/// `width` values each.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T> {
    size: ImageSize,
    data: Vec<T>,
}

impl<T> Image<T> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image in row-major order.
    ///
    /// # Errors
    ///
    /// If the image has a zero dimension or the length of the pixel data does
    /// not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use statfilt_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8>::new(
    ///    ImageSize {
    ///       width: 10,
    ///       height: 20,
    ///    },
    ///    vec![0u8; 10 * 20],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        if size.width == 0 || size.height == 0 {
            return Err(ImageError::EmptyImage);
        }

        if data.len() != size.width * size.height {
            return Err(ImageError::InvalidImageShape(
                data.len(),
                size.width * size.height,
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size and a constant pixel value.
    ///
    /// # Errors
    ///
    /// If the image has a zero dimension, an error is returned.
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        Image::new(size, vec![val; size.width * size.height])
    }

    /// Create a new image from a nested grid of rows.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::EmptyImage`] for an empty grid and
    /// [`ImageError::NonRectangular`] when rows differ in length.
    ///
    /// # Examples
    ///
    /// ```
    /// use statfilt_image::Image;
    ///
    /// let image = Image::from_rows(vec![vec![1u8, 2, 3], vec![4, 5, 6]]).unwrap();
    ///
    /// assert_eq!(image.shape(), (2, 3));
    /// assert_eq!(image.get([1, 2]), Some(&6));
    /// ```
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, ImageError> {
        let size = crate::ops::shape(&rows)?;
        let data = rows.into_iter().flatten().collect();
        Image::new(size, data)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the `(height, width)` of the image.
    pub fn shape(&self) -> (usize, usize) {
        (self.size.height, self.size.width)
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the pixel at `[row, col]`, or `None` if out of bounds.
    pub fn get(&self, index: [usize; 2]) -> Option<&T> {
        let [row, col] = index;
        if row >= self.height() || col >= self.width() {
            return None;
        }
        self.data.get(row * self.width() + col)
    }

    /// Get the pixel data of the image as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the pixel data of the image as a mutable slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Copy the pixel data into a nested grid of rows.
    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.data
            .chunks_exact(self.width())
            .map(|row| row.to_vec())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::image::{Image, ImageDtype, ImageError, ImageSize};

    #[test]
    fn image_size() {
        let image_size: ImageSize = [10, 20].into();
        assert_eq!(image_size.width, 10);
        assert_eq!(image_size.height, 20);
        assert_eq!(
            image_size.to_string(),
            "ImageSize { width: 10, height: 20 }"
        );
    }

    #[test]
    fn image_smoke() -> Result<(), ImageError> {
        let image = Image::<u8>::new(
            ImageSize {
                width: 10,
                height: 20,
            },
            vec![0u8; 10 * 20],
        )?;
        assert_eq!(image.size().width, 10);
        assert_eq!(image.size().height, 20);
        assert_eq!(image.shape(), (20, 10));

        Ok(())
    }

    #[test]
    fn image_invalid_data_len() {
        let res = Image::<u8>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0u8; 3],
        );
        assert_eq!(res, Err(ImageError::InvalidImageShape(3, 4)));
    }

    #[test]
    fn image_empty() {
        let res = Image::<u8>::new(
            ImageSize {
                width: 0,
                height: 4,
            },
            vec![],
        );
        assert_eq!(res, Err(ImageError::EmptyImage));
        assert_eq!(
            Image::<u8>::from_rows(vec![]),
            Err(ImageError::EmptyImage)
        );
    }

    #[test]
    fn image_from_rows() -> Result<(), ImageError> {
        let rows = vec![vec![0u8, 1], vec![2, 3], vec![4, 5]];
        let image = Image::from_rows(rows.clone())?;
        assert_eq!(image.shape(), (3, 2));
        assert_eq!(image.as_slice(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(image.get([2, 1]), Some(&5));
        assert_eq!(image.get([3, 0]), None);
        assert_eq!(image.get([0, 2]), None);
        assert_eq!(image.to_rows(), rows);

        Ok(())
    }

    #[test]
    fn image_from_ragged_rows() {
        let res = Image::from_rows(vec![vec![0u8, 1], vec![2]]);
        assert_eq!(
            res,
            Err(ImageError::NonRectangular {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn dtype_from_f64() {
        assert_eq!(u8::from_f64(12.9), 12);
        assert_eq!(u8::from_f64(300.0), 255);
        assert_eq!(f32::from_f64(12.5), 12.5f32);
    }
}
