use super::Window;

/// Reduces a window of pixel values to a single replacement value.
///
/// Implementations are pure: the result depends only on the window and the
/// aggregator configuration. A non-finite result is reported by the engine as
/// [`FilterError::DivisionByZero`](super::FilterError::DivisionByZero).
///
/// Any `Fn(&Window) -> f64` is an aggregator.
///
/// # Example
///
/// ```
/// use statfilt_imgproc::filter::{Aggregator, Window};
///
/// let range = |w: &Window| {
///     let max = w.values().iter().copied().fold(f64::MIN, f64::max);
///     let min = w.values().iter().copied().fold(f64::MAX, f64::min);
///     max - min
/// };
///
/// assert_eq!(range.aggregate(&Window::from(vec![3.0, 9.0, 4.0])), 6.0);
/// ```
pub trait Aggregator {
    /// Compute the aggregate of the window values.
    fn aggregate(&self, window: &Window) -> f64;
}

impl<F> Aggregator for F
where
    F: Fn(&Window) -> f64,
{
    fn aggregate(&self, window: &Window) -> f64 {
        self(window)
    }
}

/// Arithmetic mean: `sum(v) / n`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ArithmeticMean;

impl Aggregator for ArithmeticMean {
    fn aggregate(&self, window: &Window) -> f64 {
        window.values().iter().sum::<f64>() / window.len() as f64
    }
}

/// Contraharmonic mean of order `q`: `sum(v^(q+1)) / sum(v^q)`.
///
/// Positive `q` removes pepper noise, negative `q` removes salt noise.
///
/// A window of zeros yields 0 for any `q >= 0`. For `q < 0` any zero in the
/// window yields 0, like [`HarmonicMean`] which is the `q = -1` case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContraharmonicMean {
    /// The order of the mean.
    pub q: f64,
}

impl ContraharmonicMean {
    /// Create a contraharmonic mean of order `q`.
    pub fn new(q: f64) -> Self {
        Self { q }
    }
}

impl Default for ContraharmonicMean {
    fn default() -> Self {
        Self { q: 2.0 }
    }
}

impl Aggregator for ContraharmonicMean {
    fn aggregate(&self, window: &Window) -> f64 {
        let values = window.values();
        if self.q < 0.0 && values.contains(&0.0) {
            return 0.0;
        }

        // scale by the magnitude that dominates the powers so the largest
        // term is one and neither sum leaves the f64 range
        let magnitudes = values.iter().map(|v| v.abs());
        let scale = if self.q < 0.0 {
            magnitudes.fold(f64::INFINITY, f64::min)
        } else {
            magnitudes.fold(0.0, f64::max)
        };

        if scale == 0.0 {
            return 0.0;
        }

        let (num, den) = values.iter().fold((0.0, 0.0), |(num, den), &v| {
            let x = v / scale;
            let xq = x.powf(self.q);
            (num + xq * x, den + xq)
        });

        scale * num / den
    }
}

/// Geometric mean: `exp(mean(ln(v)))`.
///
/// Returns 0 if any value is zero or negative.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeometricMean;

impl Aggregator for GeometricMean {
    fn aggregate(&self, window: &Window) -> f64 {
        let values = window.values();
        if values.iter().any(|&v| v <= 0.0) {
            return 0.0;
        }
        let log_sum = values.iter().map(|v| v.ln()).sum::<f64>();
        (log_sum / values.len() as f64).exp()
    }
}

/// Harmonic mean: `n / sum(1 / v)`.
///
/// Returns 0 if any value is exactly zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HarmonicMean;

impl Aggregator for HarmonicMean {
    fn aggregate(&self, window: &Window) -> f64 {
        let values = window.values();
        if values.contains(&0.0) {
            return 0.0;
        }
        values.len() as f64 / values.iter().map(|v| v.recip()).sum::<f64>()
    }
}

/// Largest value of the window.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Maximum;

impl Aggregator for Maximum {
    fn aggregate(&self, window: &Window) -> f64 {
        window
            .values()
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Median of the window. Even sized windows take the mean of the two middle
/// values.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Median;

impl Aggregator for Median {
    fn aggregate(&self, window: &Window) -> f64 {
        let mut values = window.values().to_vec();
        if values.is_empty() {
            return f64::NAN;
        }

        let mid = values.len() / 2;
        let (lower, upper, _) = values.select_nth_unstable_by(mid, f64::total_cmp);
        let upper = *upper;

        if window.len() % 2 == 1 {
            upper
        } else {
            let lower = lower.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            (lower + upper) / 2.0
        }
    }
}

/// Midpoint: `(trunc(max) + trunc(min)) / 2`.
///
/// The extremes are truncated to integers before averaging, so the result
/// may carry a `.5` fraction.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Midpoint;

impl Aggregator for Midpoint {
    fn aggregate(&self, window: &Window) -> f64 {
        let max = Maximum.aggregate(window).trunc();
        let min = Minimum.aggregate(window).trunc();
        (max + min) / 2.0
    }
}

/// Smallest value of the window.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Minimum;

impl Aggregator for Minimum {
    fn aggregate(&self, window: &Window) -> f64 {
        window
            .values()
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min)
    }
}
