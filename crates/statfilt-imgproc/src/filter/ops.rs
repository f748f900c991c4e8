use std::{fmt, str::FromStr};

use statfilt_image::{Image, ImageDtype};

use super::{
    Aggregator, ArithmeticMean, ContraharmonicMean, FilterError, GeometricMean, HarmonicMean,
    Maximum, Median, Midpoint, Minimum, WindowFilter,
};

fn window_filter<T: ImageDtype, A: Aggregator>(
    src: &Image<T>,
    dst: &mut Image<T>,
    window_len: usize,
    aggregator: A,
) -> Result<(), FilterError> {
    WindowFilter::new(src, window_len, aggregator)?.filter_into(dst)
}

/// Smooth an image with an arithmetic mean filter
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W).
/// * `dst` - The destination image with shape (H, W).
/// * `window_len` - The side of the square window, odd and at least 3.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn arithmetic_mean<T: ImageDtype>(
    src: &Image<T>,
    dst: &mut Image<T>,
    window_len: usize,
) -> Result<(), FilterError> {
    window_filter(src, dst, window_len, ArithmeticMean)
}

/// Denoise an image with a contraharmonic mean filter of order `q`
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W).
/// * `dst` - The destination image with shape (H, W).
/// * `window_len` - The side of the square window, odd and at least 3.
/// * `q` - The order of the filter. Positive values remove pepper noise,
///   negative values remove salt noise.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn contraharmonic_mean<T: ImageDtype>(
    src: &Image<T>,
    dst: &mut Image<T>,
    window_len: usize,
    q: f64,
) -> Result<(), FilterError> {
    window_filter(src, dst, window_len, ContraharmonicMean::new(q))
}

/// Smooth an image with a geometric mean filter
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W).
/// * `dst` - The destination image with shape (H, W).
/// * `window_len` - The side of the square window, odd and at least 3.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn geometric_mean<T: ImageDtype>(
    src: &Image<T>,
    dst: &mut Image<T>,
    window_len: usize,
) -> Result<(), FilterError> {
    window_filter(src, dst, window_len, GeometricMean)
}

/// Denoise an image with a harmonic mean filter
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W).
/// * `dst` - The destination image with shape (H, W).
/// * `window_len` - The side of the square window, odd and at least 3.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn harmonic_mean<T: ImageDtype>(
    src: &Image<T>,
    dst: &mut Image<T>,
    window_len: usize,
) -> Result<(), FilterError> {
    window_filter(src, dst, window_len, HarmonicMean)
}

/// Replace every pixel with the maximum of its window
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W).
/// * `dst` - The destination image with shape (H, W).
/// * `window_len` - The side of the square window, odd and at least 3.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn maximum<T: ImageDtype>(
    src: &Image<T>,
    dst: &mut Image<T>,
    window_len: usize,
) -> Result<(), FilterError> {
    window_filter(src, dst, window_len, Maximum)
}

/// Replace every pixel with the median of its window
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W).
/// * `dst` - The destination image with shape (H, W).
/// * `window_len` - The side of the square window, odd and at least 3.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
///
/// # Example
///
/// ```
/// use statfilt_image::{Image, ImageSize};
/// use statfilt_imgproc::filter::median;
///
/// let size = ImageSize { width: 3, height: 3 };
/// let src = Image::new(size, vec![0u8, 0, 0, 0, 255, 0, 0, 0, 0]).unwrap();
/// let mut dst = Image::from_size_val(size, 0u8).unwrap();
///
/// median(&src, &mut dst, 3).unwrap();
///
/// assert_eq!(dst.as_slice(), &[0; 9]);
/// ```
pub fn median<T: ImageDtype>(
    src: &Image<T>,
    dst: &mut Image<T>,
    window_len: usize,
) -> Result<(), FilterError> {
    window_filter(src, dst, window_len, Median)
}

/// Replace every pixel with the midpoint of the extremes of its window
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W).
/// * `dst` - The destination image with shape (H, W).
/// * `window_len` - The side of the square window, odd and at least 3.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn midpoint<T: ImageDtype>(
    src: &Image<T>,
    dst: &mut Image<T>,
    window_len: usize,
) -> Result<(), FilterError> {
    window_filter(src, dst, window_len, Midpoint)
}

/// Replace every pixel with the minimum of its window
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W).
/// * `dst` - The destination image with shape (H, W).
/// * `window_len` - The side of the square window, odd and at least 3.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn minimum<T: ImageDtype>(
    src: &Image<T>,
    dst: &mut Image<T>,
    window_len: usize,
) -> Result<(), FilterError> {
    window_filter(src, dst, window_len, Minimum)
}

/// The statistical filters available by name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterKind {
    /// Arithmetic mean filter.
    ArithmeticMean,
    /// Contraharmonic mean filter of order `q`.
    ContraharmonicMean {
        /// The order of the filter.
        q: f64,
    },
    /// Geometric mean filter.
    GeometricMean,
    /// Harmonic mean filter.
    HarmonicMean,
    /// Maximum filter.
    Maximum,
    /// Median filter.
    Median,
    /// Midpoint filter.
    Midpoint,
    /// Minimum filter.
    Minimum,
}

impl FilterKind {
    /// All the filters, with the contraharmonic filter of order 2.
    pub const ALL: [FilterKind; 8] = [
        FilterKind::ArithmeticMean,
        FilterKind::ContraharmonicMean { q: 2.0 },
        FilterKind::GeometricMean,
        FilterKind::HarmonicMean,
        FilterKind::Maximum,
        FilterKind::Median,
        FilterKind::Midpoint,
        FilterKind::Minimum,
    ];

    /// Filter `src` into a new image of the same size.
    ///
    /// # Arguments
    ///
    /// * `src` - The source image with shape (H, W).
    /// * `window_len` - The side of the square window, odd and at least 3.
    ///
    /// # Example
    ///
    /// ```
    /// use statfilt_image::Image;
    /// use statfilt_imgproc::filter::FilterKind;
    ///
    /// let src = Image::from_rows(vec![vec![10u8, 20, 30], vec![40, 50, 60]]).unwrap();
    /// let dst = "max".parse::<FilterKind>().unwrap().apply(&src, 3).unwrap();
    ///
    /// assert_eq!(dst.to_rows(), vec![vec![50, 60, 60], vec![50, 60, 60]]);
    /// ```
    pub fn apply<T: ImageDtype>(
        &self,
        src: &Image<T>,
        window_len: usize,
    ) -> Result<Image<T>, FilterError> {
        match *self {
            FilterKind::ArithmeticMean => {
                WindowFilter::new(src, window_len, ArithmeticMean)?.filtered_image()
            }
            FilterKind::ContraharmonicMean { q } => {
                WindowFilter::new(src, window_len, ContraharmonicMean::new(q))?.filtered_image()
            }
            FilterKind::GeometricMean => {
                WindowFilter::new(src, window_len, GeometricMean)?.filtered_image()
            }
            FilterKind::HarmonicMean => {
                WindowFilter::new(src, window_len, HarmonicMean)?.filtered_image()
            }
            FilterKind::Maximum => WindowFilter::new(src, window_len, Maximum)?.filtered_image(),
            FilterKind::Median => WindowFilter::new(src, window_len, Median)?.filtered_image(),
            FilterKind::Midpoint => WindowFilter::new(src, window_len, Midpoint)?.filtered_image(),
            FilterKind::Minimum => WindowFilter::new(src, window_len, Minimum)?.filtered_image(),
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterKind::ArithmeticMean => write!(f, "arithmetic"),
            FilterKind::ContraharmonicMean { q } => write!(f, "contraharmonic(q={q})"),
            FilterKind::GeometricMean => write!(f, "geometric"),
            FilterKind::HarmonicMean => write!(f, "harmonic"),
            FilterKind::Maximum => write!(f, "max"),
            FilterKind::Median => write!(f, "median"),
            FilterKind::Midpoint => write!(f, "midpoint"),
            FilterKind::Minimum => write!(f, "min"),
        }
    }
}

impl FromStr for FilterKind {
    type Err = FilterError;

    /// Parse a filter name. The contraharmonic filter gets order 2.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], " ").trim() {
            "arithmetic" | "arithmetic mean" | "mean" => Ok(FilterKind::ArithmeticMean),
            "contraharmonic" | "contraharmonic mean" => {
                Ok(FilterKind::ContraharmonicMean { q: 2.0 })
            }
            "geometric" | "geometric mean" => Ok(FilterKind::GeometricMean),
            "harmonic" | "harmonic mean" => Ok(FilterKind::HarmonicMean),
            "max" | "maximum" => Ok(FilterKind::Maximum),
            "median" => Ok(FilterKind::Median),
            "midpoint" => Ok(FilterKind::Midpoint),
            "min" | "minimum" => Ok(FilterKind::Minimum),
            _ => Err(FilterError::UnknownFilter(s.to_string())),
        }
    }
}
