//! Filter operations
//!
//! This module provides statistical window filters for image denoising. A
//! [`WindowFilter`] gathers the neighbourhood of every pixel, mirrored at the
//! image border, and reduces it with an [`Aggregator`] policy.

/// Aggregation policies
mod aggregate;
pub use aggregate::*;

/// Mirrored border indexing
mod border;
pub use border::MirrorIndex;

/// Filter errors
mod error;
pub use error::FilterError;

/// Filter operations
mod ops;
pub use ops::*;

/// Window extraction engine
mod window;
pub use window::{validate_window_len, Window, WindowFilter};

/// Arithmetic mean filter.
pub type ArithmeticMeanFilter<'a, T> = WindowFilter<'a, T, ArithmeticMean>;

/// Contraharmonic mean filter.
pub type ContraharmonicMeanFilter<'a, T> = WindowFilter<'a, T, ContraharmonicMean>;

/// Geometric mean filter.
pub type GeometricMeanFilter<'a, T> = WindowFilter<'a, T, GeometricMean>;

/// Harmonic mean filter.
pub type HarmonicMeanFilter<'a, T> = WindowFilter<'a, T, HarmonicMean>;

/// Maximum filter.
pub type MaximumFilter<'a, T> = WindowFilter<'a, T, Maximum>;

/// Median filter.
pub type MedianFilter<'a, T> = WindowFilter<'a, T, Median>;

/// Midpoint filter.
pub type MidpointFilter<'a, T> = WindowFilter<'a, T, Midpoint>;

/// Minimum filter.
pub type MinimumFilter<'a, T> = WindowFilter<'a, T, Minimum>;
