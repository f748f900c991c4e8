use std::path::Path;

use statfilt_image::{Image, ImageSize};

use crate::error::IoError;

/// Reads an image from the given file path as 8-bit grayscale.
///
/// The format is guessed from the file extension. Color images are
/// converted to luma.
///
/// # Arguments
///
/// * `file_path` - The path to the image.
///
/// # Returns
///
/// A single channel image with the decoded intensities.
pub fn read_image_gray8(file_path: impl AsRef<Path>) -> Result<Image<u8>, IoError> {
    let file_path = file_path.as_ref().to_owned();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path));
    }

    let img = image::open(&file_path)?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    Ok(Image::new(size, img.into_luma8().into_raw())?)
}

/// Writes the given 8-bit grayscale image to the given file path.
///
/// The format is chosen from the file extension.
///
/// # Arguments
///
/// * `file_path` - The path to the image.
/// * `image` - The image to encode.
pub fn write_image_gray8(file_path: impl AsRef<Path>, image: &Image<u8>) -> Result<(), IoError> {
    let (width, height) = (image.width(), image.height());
    let (Ok(w), Ok(h)) = (u32::try_from(width), u32::try_from(height)) else {
        return Err(IoError::ImageBufferError(width, height));
    };

    let buf = image::GrayImage::from_raw(w, h, image.as_slice().to_vec())
        .ok_or(IoError::ImageBufferError(width, height))?;

    buf.save(file_path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{read_image_gray8, write_image_gray8};
    use crate::error::IoError;
    use statfilt_image::Image;

    #[test]
    fn read_missing_file() {
        let res = read_image_gray8("does/not/exist.png");
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn write_read_png() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("gray.png");

        let image = Image::from_rows(vec![vec![0u8, 64, 128], vec![192, 255, 7]])?;
        write_image_gray8(&file_path, &image)?;

        let image_read = read_image_gray8(&file_path)?;
        assert_eq!(image_read, image);

        Ok(())
    }
}
