use statfilt_image::{Image, ImageError};

/// Compute the pixel intensity histogram of an image.
///
/// NOTE: this is limited to 8-bit images.
///
/// # Arguments
///
/// * `src` - The input image to compute the histogram.
/// * `hist` - The output histogram, accumulated into.
/// * `num_bins` - The number of bins to use for the histogram.
///
/// # Errors
///
/// Returns an error if the number of bins is not in `1..=256` or does not
/// match the length of `hist`.
///
/// # Example
///
/// ```
/// use statfilt_image::{Image, ImageSize};
/// use statfilt_imgproc::histogram::compute_histogram;
///
/// let image = Image::<u8>::new(
///   ImageSize {
///     width: 3,
///     height: 3,
///   },
///   vec![0, 2, 4, 128, 130, 132, 254, 255, 255],
/// ).unwrap();
///
/// let mut histogram = vec![0; 3];
///
/// compute_histogram(&image, &mut histogram, 3).unwrap();
/// assert_eq!(histogram, vec![3, 3, 3]);
/// ```
pub fn compute_histogram(
    src: &Image<u8>,
    hist: &mut [usize],
    num_bins: usize,
) -> Result<(), ImageError> {
    if num_bins == 0 || num_bins > 256 || hist.len() != num_bins {
        return Err(ImageError::InvalidHistogramBins(num_bins));
    }

    let mut bin_lut = [0usize; 256];
    for (i, bin) in bin_lut.iter_mut().enumerate() {
        *bin = (i * num_bins) >> 8;
    }

    for &px in src.as_slice() {
        hist[bin_lut[px as usize]] += 1;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use statfilt_image::{Image, ImageError, ImageSize};

    #[test]
    fn test_compute_histogram() -> Result<(), ImageError> {
        let image = Image::new(
            ImageSize {
                width: 3,
                height: 3,
            },
            vec![0, 2, 4, 128, 130, 132, 254, 255, 255],
        )?;

        let mut histogram = vec![0; 3];

        super::compute_histogram(&image, &mut histogram, 3)?;
        assert_eq!(histogram, vec![3, 3, 3]);

        Ok(())
    }

    #[test]
    fn test_compute_histogram_full_range() -> Result<(), ImageError> {
        let image = Image::new(
            ImageSize {
                width: 4,
                height: 1,
            },
            vec![0, 7, 7, 255],
        )?;

        let mut histogram = vec![0; 256];
        super::compute_histogram(&image, &mut histogram, 256)?;
        assert_eq!(histogram[0], 1);
        assert_eq!(histogram[7], 2);
        assert_eq!(histogram[255], 1);
        assert_eq!(histogram.iter().sum::<usize>(), 4);

        Ok(())
    }

    #[test]
    fn test_compute_histogram_invalid_bins() -> Result<(), ImageError> {
        let image = Image::from_size_val([2, 2].into(), 0u8)?;

        let mut histogram = vec![0; 257];
        assert_eq!(
            super::compute_histogram(&image, &mut histogram, 257),
            Err(ImageError::InvalidHistogramBins(257))
        );
        let mut histogram = vec![0; 4];
        assert_eq!(
            super::compute_histogram(&image, &mut histogram, 3),
            Err(ImageError::InvalidHistogramBins(3))
        );

        Ok(())
    }
}
