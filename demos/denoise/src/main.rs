use argh::FromArgs;
use std::{path::PathBuf, time::Instant};

use statfilt::{
    image::Image,
    imgproc::{filter::FilterKind, histogram::compute_histogram},
    io::functional as F,
};

#[derive(FromArgs)]
/// Denoise a grayscale image with a statistical window filter
struct Args {
    /// path to the input image
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// path to write the filtered image
    #[argh(option, short = 'o')]
    output: PathBuf,

    /// the filter to apply: arithmetic, contraharmonic, geometric, harmonic,
    /// max, median, midpoint or min
    #[argh(option, default = "FilterKind::HarmonicMean")]
    filter: FilterKind,

    /// the side of the square window, odd and at least 3
    #[argh(option, default = "3")]
    window_len: usize,

    /// the order of the contraharmonic filter
    #[argh(option, default = "2.0")]
    q: f64,

    /// the number of histogram bins to report
    #[argh(option, default = "16")]
    bins: usize,
}

fn log_histogram(
    title: &str,
    image: &Image<u8>,
    num_bins: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut hist = vec![0; num_bins];
    compute_histogram(image, &mut hist, num_bins)?;

    let peak = hist.iter().copied().max().unwrap_or(0).max(1);

    log::info!("{title}");
    for (i, &count) in hist.iter().enumerate() {
        let lo = (i * 256).div_ceil(num_bins);
        let hi = ((i + 1) * 256).div_ceil(num_bins) - 1;
        log::info!("{lo:>3}-{hi:>3} {count:>8} {}", "#".repeat(count * 40 / peak));
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    // read the image as grayscale
    let image = F::read_image_gray8(&args.input)?;
    log::info!("read {} ({})", args.input.display(), image.size());

    log_histogram(
        &format!("{} before", args.input.display()),
        &image,
        args.bins,
    )?;

    let kind = match args.filter {
        FilterKind::ContraharmonicMean { .. } => FilterKind::ContraharmonicMean { q: args.q },
        kind => kind,
    };

    let start = Instant::now();
    let filtered = kind.apply(&image, args.window_len)?;
    log::info!(
        "{kind} filter with window {} took {:?}",
        args.window_len,
        start.elapsed()
    );

    log_histogram(
        &format!("{} after", args.input.display()),
        &filtered,
        args.bins,
    )?;

    F::write_image_gray8(&args.output, &filtered)?;
    log::info!("wrote {}", args.output.display());

    Ok(())
}
