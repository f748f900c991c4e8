use statfilt_image::{Image, ImageDtype, ImageError};

use super::{Aggregator, FilterError, MirrorIndex};

/// A grid of pixel values gathered around an output pixel.
///
/// Values are stored row-major as `f64`. Windows produced by
/// [`WindowFilter`] are square with side `window_len`; a window built from a
/// plain vector is a single row.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    values: Vec<f64>,
    cols: usize,
}

impl Window {
    /// Create a square window of side `side` with all values set to zero.
    pub fn square(side: usize) -> Self {
        Self {
            values: vec![0.0; side * side],
            cols: side,
        }
    }

    /// The window values in row-major order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The number of values in the window.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the window holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The number of columns of the window.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Iterate over the rows of the window.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.cols.max(1))
    }

    /// Get the value at `(row, col)` of the window.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if col >= self.cols {
            return None;
        }
        self.values.get(row * self.cols + col).copied()
    }
}

impl From<Vec<f64>> for Window {
    fn from(values: Vec<f64>) -> Self {
        let cols = values.len();
        Self { values, cols }
    }
}

/// Check that the window length is odd and not less than 3.
pub fn validate_window_len(window_len: usize) -> Result<(), FilterError> {
    if window_len % 2 == 0 || window_len < 3 {
        return Err(FilterError::InvalidWindowLength(window_len));
    }
    Ok(())
}

fn mirror_indices<T>(
    image: &Image<T>,
    window_len: usize,
) -> Result<(MirrorIndex, MirrorIndex), FilterError> {
    let exceeds = || FilterError::WindowExceedsImage {
        window_len,
        size: image.size(),
    };
    let row_mirror = MirrorIndex::new(image.height(), window_len).ok_or_else(exceeds)?;
    let col_mirror = MirrorIndex::new(image.width(), window_len).ok_or_else(exceeds)?;
    Ok((row_mirror, col_mirror))
}

/// Applies an [`Aggregator`] over a sliding square window of an image.
///
/// Pixels outside the image are read through mirrored indices, reflecting by
/// `window_len - 1` positions across the border (see [`MirrorIndex`]). The
/// mirror tables are built when the filter is created and rebuilt when a
/// differently sized image is bound with [`WindowFilter::set_image`].
///
/// Every output pixel depends only on the source image, so the result does
/// not depend on evaluation order.
///
/// # Example
///
/// ```
/// use statfilt_image::Image;
/// use statfilt_imgproc::filter::{Median, WindowFilter};
///
/// let image = Image::from_rows(vec![
///     vec![10u8, 10, 10, 10],
///     vec![10, 255, 10, 10],
///     vec![10, 10, 10, 10],
///     vec![10, 10, 10, 0],
/// ])
/// .unwrap();
///
/// let filter = WindowFilter::new(&image, 3, Median).unwrap();
/// let filtered = filter.filtered_image().unwrap();
///
/// assert!(filtered.as_slice().iter().all(|&v| v == 10));
/// ```
#[derive(Debug, Clone)]
pub struct WindowFilter<'a, T, A> {
    image: &'a Image<T>,
    window_len: usize,
    offset: usize,
    row_mirror: MirrorIndex,
    col_mirror: MirrorIndex,
    aggregator: A,
}

impl<'a, T, A> WindowFilter<'a, T, A>
where
    T: ImageDtype,
    A: Aggregator,
{
    /// Create a filter bound to `image`.
    ///
    /// # Arguments
    ///
    /// * `image` - The source image.
    /// * `window_len` - The side of the square window, odd and at least 3.
    /// * `aggregator` - The policy reducing each window to one value.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidWindowLength`] for an even or too small
    /// window, and [`FilterError::WindowExceedsImage`] if an image side is
    /// shorter than `window_len - 1`.
    pub fn new(image: &'a Image<T>, window_len: usize, aggregator: A) -> Result<Self, FilterError> {
        validate_window_len(window_len)?;
        let (row_mirror, col_mirror) = mirror_indices(image, window_len)?;

        log::debug!(
            "window filter: window_len={} image={}",
            window_len,
            image.size()
        );

        Ok(Self {
            image,
            window_len,
            offset: window_len / 2,
            row_mirror,
            col_mirror,
            aggregator,
        })
    }

    /// The side of the square window.
    pub fn window_len(&self) -> usize {
        self.window_len
    }

    /// The number of pixels the window extends on each side of its center.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The image the filter is bound to.
    pub fn image(&self) -> &'a Image<T> {
        self.image
    }

    /// The aggregation policy.
    pub fn aggregator(&self) -> &A {
        &self.aggregator
    }

    /// Bind the filter to another image.
    ///
    /// The mirror tables are rebuilt if the new image has a different size.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::WindowExceedsImage`] if an image side is shorter
    /// than `window_len - 1`. The filter keeps its previous image on error.
    pub fn set_image(&mut self, image: &'a Image<T>) -> Result<(), FilterError> {
        if image.size() != self.image.size() {
            let (row_mirror, col_mirror) = mirror_indices(image, self.window_len)?;
            log::debug!(
                "window filter: rebuilding mirror tables {} -> {}",
                self.image.size(),
                image.size()
            );
            self.row_mirror = row_mirror;
            self.col_mirror = col_mirror;
        }
        self.image = image;
        Ok(())
    }

    /// Get the source pixel at `(row, col)`, mirroring out-of-bounds indices.
    ///
    /// PRECONDITION: `row` and `col` are at most `offset` positions outside
    /// the image.
    ///
    /// # Panics
    ///
    /// Panics if the precondition is violated.
    #[inline]
    pub fn get_pixel(&self, row: isize, col: isize) -> T {
        let r = self.row_mirror.map(row);
        let c = self.col_mirror.map(col);
        self.image.as_slice()[r * self.image.width() + c]
    }

    /// Get the window centered at the output pixel `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the image.
    pub fn get_window(&self, row: usize, col: usize) -> Window {
        let mut window = Window::square(self.window_len);
        self.fill_window(row, col, &mut window);
        window
    }

    fn fill_window(&self, row: usize, col: usize, window: &mut Window) {
        let offset = self.offset as isize;
        let (row, col) = (row as isize, col as isize);
        let mut values = window.values.iter_mut();
        for r in row - offset..=row + offset {
            for c in col - offset..=col + offset {
                if let Some(v) = values.next() {
                    *v = self.get_pixel(r, c).into();
                }
            }
        }
    }

    /// Filter the bound image into `dst`.
    ///
    /// PRECONDITION: `dst` has the same size as the bound image.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidImageSize`] if the sizes differ and
    /// [`FilterError::DivisionByZero`] if an aggregate is not finite. `dst` is
    /// only written when the whole pass succeeds.
    pub fn filter_into(&self, dst: &mut Image<T>) -> Result<(), FilterError> {
        if dst.size() != self.image.size() {
            return Err(ImageError::InvalidImageSize(
                self.image.cols(),
                self.image.rows(),
                dst.cols(),
                dst.rows(),
            )
            .into());
        }

        let data = self.filter_pixels()?;
        dst.as_slice_mut().copy_from_slice(&data);

        Ok(())
    }

    /// Filter the bound image into a new image of the same size.
    ///
    /// The bound image is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::DivisionByZero`] if an aggregate is not finite.
    pub fn filtered_image(&self) -> Result<Image<T>, FilterError> {
        Ok(Image::new(self.image.size(), self.filter_pixels()?)?)
    }

    // row-major pass, aborting at the first non-finite aggregate
    fn filter_pixels(&self) -> Result<Vec<T>, FilterError> {
        let (rows, cols) = self.image.shape();
        let mut window = Window::square(self.window_len);
        let mut data = Vec::with_capacity(rows * cols);

        for r in 0..rows {
            for c in 0..cols {
                self.fill_window(r, c, &mut window);
                let value = self.aggregator.aggregate(&window);
                if !value.is_finite() {
                    return Err(FilterError::DivisionByZero { row: r, col: c });
                }
                data.push(T::from_f64(value));
            }
        }

        Ok(data)
    }
}
