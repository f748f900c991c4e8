//! Statistical spatial filters for grayscale image denoising.
//!
//! ```
//! use statfilt::image::Image;
//! use statfilt::imgproc::filter::{HarmonicMean, WindowFilter};
//!
//! let noisy = Image::from_rows(vec![
//!     vec![50u8, 50, 50],
//!     vec![50, 255, 50],
//!     vec![50, 50, 50],
//! ])
//! .unwrap();
//!
//! let filter = WindowFilter::new(&noisy, 3, HarmonicMean).unwrap();
//! let denoised = filter.filtered_image().unwrap();
//!
//! assert!(denoised.as_slice().iter().all(|&v| v < 100));
//! ```

#[doc(inline)]
pub use statfilt_image as image;

#[doc(inline)]
pub use statfilt_imgproc as imgproc;

#[doc(inline)]
pub use statfilt_io as io;
