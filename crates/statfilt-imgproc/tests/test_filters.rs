use rand::{Rng, SeedableRng};

use statfilt_image::{ops::quantize_intensity, Image, ImageSize};
use statfilt_imgproc::filter::{
    Aggregator, ContraharmonicMean, FilterError, FilterKind, HarmonicMean, HarmonicMeanFilter,
    Maximum, MaximumFilter, Minimum, Window, WindowFilter,
};

fn random_image(height: usize, width: usize, seed: u64) -> Result<Image<u8>, FilterError> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let data = (0..width * height).map(|_| rng.random::<u8>()).collect();
    Ok(Image::new(ImageSize { width, height }, data)?)
}

// straightforward reference for the border reflection
fn mirror(i: isize, len: usize, window_len: usize) -> usize {
    let displacement = window_len as isize - 1;
    if i < 0 {
        (i + displacement) as usize
    } else if i >= len as isize {
        (i - displacement) as usize
    } else {
        i as usize
    }
}

#[test]
fn test_output_shape_matches_input() -> Result<(), FilterError> {
    let shapes = [(2, 2, 3), (4, 7, 3), (4, 7, 5), (13, 5, 5), (9, 11, 7)];
    for (seed, &(height, width, window_len)) in shapes.iter().enumerate() {
        let image = random_image(height, width, seed as u64)?;
        for kind in FilterKind::ALL {
            let filtered = kind.apply(&image, window_len)?;
            assert_eq!(filtered.size(), image.size(), "{kind} {height}x{width}");
        }
    }
    Ok(())
}

#[test]
fn test_uniform_image_is_fixed_point() -> Result<(), FilterError> {
    let size = ImageSize {
        width: 6,
        height: 5,
    };
    let kinds = FilterKind::ALL.into_iter().chain([
        FilterKind::ContraharmonicMean { q: -1.5 },
        FilterKind::ContraharmonicMean { q: 0.0 },
        FilterKind::ContraharmonicMean { q: 1.0 },
    ]);

    for kind in kinds {
        for k in [0u8, 1, 3, 7, 100, 254, 255] {
            let image = Image::from_size_val(size, k)?;
            for window_len in [3, 5] {
                let filtered = kind.apply(&image, window_len)?;
                assert!(
                    filtered.as_slice().iter().all(|&v| v == k),
                    "{kind} k={k} window_len={window_len}"
                );
            }
        }
    }
    Ok(())
}

#[test]
fn test_matches_reference_maximum() -> Result<(), FilterError> {
    let (height, width) = (8, 10);
    let image = random_image(height, width, 42)?;

    for window_len in [3, 5, 7] {
        let filtered = MaximumFilter::new(&image, window_len, Maximum)?.filtered_image()?;
        let offset = (window_len / 2) as isize;

        for r in 0..height {
            for c in 0..width {
                let mut expected = 0u8;
                for dr in -offset..=offset {
                    for dc in -offset..=offset {
                        let rr = mirror(r as isize + dr, height, window_len);
                        let cc = mirror(c as isize + dc, width, window_len);
                        expected = expected.max(image.as_slice()[rr * width + cc]);
                    }
                }
                assert_eq!(filtered.get([r, c]), Some(&expected), "({r}, {c})");
            }
        }
    }
    Ok(())
}

#[test]
fn test_extremes_ignore_traversal_order() -> Result<(), FilterError> {
    let image = random_image(6, 6, 7)?;

    let reversed_min = |w: &Window| {
        let mut values = w.values().to_vec();
        values.reverse();
        Minimum.aggregate(&Window::from(values))
    };
    let reversed_max = |w: &Window| {
        let mut values = w.values().to_vec();
        values.reverse();
        Maximum.aggregate(&Window::from(values))
    };

    assert_eq!(
        WindowFilter::new(&image, 3, reversed_min)?.filtered_image()?,
        WindowFilter::new(&image, 3, Minimum)?.filtered_image()?
    );
    assert_eq!(
        WindowFilter::new(&image, 3, reversed_max)?.filtered_image()?,
        WindowFilter::new(&image, 3, Maximum)?.filtered_image()?
    );
    Ok(())
}

#[test]
fn test_source_is_not_modified() -> Result<(), FilterError> {
    let image = random_image(5, 5, 3)?;
    let before = image.clone();
    let filter = HarmonicMeanFilter::new(&image, 3, HarmonicMean)?;
    let first = filter.filtered_image()?;
    let second = filter.filtered_image()?;
    assert_eq!(image, before);
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_rebind_to_other_shapes() -> Result<(), FilterError> {
    let small = random_image(4, 4, 11)?;
    let tall = random_image(12, 5, 12)?;
    let wide = random_image(5, 12, 13)?;

    let mut filter = WindowFilter::new(&small, 5, Maximum)?;
    for image in [&tall, &wide, &small] {
        filter.set_image(image)?;
        let filtered = filter.filtered_image()?;
        assert_eq!(filtered.size(), image.size());
        assert_eq!(
            filtered,
            WindowFilter::new(image, 5, Maximum)?.filtered_image()?
        );
    }
    Ok(())
}

#[test]
fn test_contraharmonic_quantization() -> Result<(), FilterError> {
    let value = ContraharmonicMean::default().aggregate(&Window::from(vec![1.0, 2.0, 3.0]));
    approx::assert_relative_eq!(value, 36.0 / 14.0, epsilon = 1e-12);
    assert_eq!(quantize_intensity(value), 2);
    Ok(())
}

#[test]
fn test_contraharmonic_extreme_orders_keep_uniform_images() -> Result<(), FilterError> {
    let size = ImageSize {
        width: 5,
        height: 5,
    };
    for k in [1u8, 128, 255] {
        let image = Image::from_size_val(size, k)?;
        for q in [-150.0, 150.0] {
            let filtered = FilterKind::ContraharmonicMean { q }.apply(&image, 3)?;
            assert!(
                filtered.as_slice().iter().all(|&v| v == k),
                "k={k} q={q}"
            );
        }
    }
    Ok(())
}

#[test]
fn test_harmonic_division_by_zero() -> Result<(), FilterError> {
    // the (0, 0) window holds a 4 four times, each -8 twice and -2 once
    let image = Image::from_rows(vec![vec![-2.0f32, -8.0], vec![-8.0, 4.0]])?;
    assert_eq!(
        FilterKind::HarmonicMean.apply(&image, 3),
        Err(FilterError::DivisionByZero { row: 0, col: 0 })
    );
    Ok(())
}

#[test]
fn test_contraharmonic_division_by_zero() -> Result<(), FilterError> {
    let image = Image::from_rows(vec![vec![0.0f32, -1.0], vec![-1.0, 1.0]])?;
    assert_eq!(
        FilterKind::ContraharmonicMean { q: 1.0 }.apply(&image, 3),
        Err(FilterError::DivisionByZero { row: 0, col: 0 })
    );
    Ok(())
}

#[test]
fn test_float_images_are_not_quantized() -> Result<(), FilterError> {
    let image = Image::from_rows(vec![vec![0.5f32, 1.0, 1.5], vec![2.0, 2.5, 3.0]])?;
    let filtered = FilterKind::Midpoint.apply(&image, 3)?;
    // the (0, 1) window spans the whole image: (trunc(3.0) + trunc(0.5)) / 2
    assert_eq!(filtered.get([0, 1]), Some(&1.5f32));
    Ok(())
}
