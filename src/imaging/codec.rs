use image::{DynamicImage, ImageFormat, ImageReader};
use std::borrow::Cow;
use std::fmt::Display;
use std::io::Cursor;
use std::path::Path;

use crate::error::{Error, Result};

/// File name endings (lower-case) that mark a file as a signature image
pub const IMAGE_SUFFIXES: [&str; 3] = [".png", ".jpg", ".jpeg"];

/// Check whether a file name looks like a signature image.
/// The comparison is case-insensitive, so `Scan.JPG` matches.
pub fn has_image_suffix(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    IMAGE_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix))
}

/// Decode an image file.
///
/// The format is sniffed from the file contents; the extension is only a
/// fallback hint. A PNG saved under a `.jpg` name still decodes.
pub fn decode_file(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path)
        .map_err(|e| decode_error(path, e))?
        .with_guessed_format()
        .map_err(|e| decode_error(path, e))?;

    reader.decode().map_err(|e| decode_error(path, e))
}

/// Encode an image as PNG into memory.
///
/// PNG has no float samples, so 32-bit float images are stored as 16-bit
/// RGB(A). 8 and 16-bit images are written unchanged.
pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>> {
    let encodable: Cow<'_, DynamicImage> = match image {
        DynamicImage::ImageRgb32F(_) => Cow::Owned(DynamicImage::ImageRgb16(image.to_rgb16())),
        DynamicImage::ImageRgba32F(_) => Cow::Owned(DynamicImage::ImageRgba16(image.to_rgba16())),
        _ => Cow::Borrowed(image),
    };

    let mut buffer = Vec::new();
    encodable
        .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .map_err(Error::Encode)?;
    Ok(buffer)
}

fn decode_error(path: &Path, err: impl Display) -> Error {
    Error::Decode {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_suffix_matching() {
        assert!(has_image_suffix("sig.png"));
        assert!(has_image_suffix("Scan.JPG"));
        assert!(has_image_suffix("photo.Jpeg"));
        assert!(!has_image_suffix("notes.txt"));
        assert!(!has_image_suffix("png"));
        assert!(!has_image_suffix("archive.png.zip"));
    }

    #[test]
    fn test_decode_sniffs_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("actually-png.jpg");

        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(3, 2, Rgba([1, 2, 3, 255])));
        std::fs::write(&path, encode_png(&img).unwrap()).unwrap();

        let decoded = decode_file(&path).unwrap();
        assert_eq!(decoded.to_rgba8(), img.to_rgba8());
    }

    #[test]
    fn test_encode_float_images_as_16_bit() {
        let rgba = DynamicImage::ImageRgba32F(image::Rgba32FImage::from_pixel(
            2,
            2,
            Rgba([1.0, 0.5, 0.0, 1.0]),
        ));
        let rgb = DynamicImage::ImageRgb32F(image::Rgb32FImage::from_pixel(
            2,
            1,
            image::Rgb([0.25, 0.75, 1.0]),
        ));

        let decoded = image::load_from_memory_with_format(&encode_png(&rgba).unwrap(), ImageFormat::Png).unwrap();
        assert_eq!(decoded, DynamicImage::ImageRgba16(rgba.to_rgba16()));

        let decoded = image::load_from_memory_with_format(&encode_png(&rgb).unwrap(), ImageFormat::Png).unwrap();
        assert_eq!(decoded, DynamicImage::ImageRgb16(rgb.to_rgb16()));
    }

    #[test]
    fn test_decode_garbage_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.jpg");
        std::fs::write(&path, b"definitely not a jpeg").unwrap();

        match decode_file(&path) {
            Err(Error::Decode { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected decode error, got {:?}", other.map(|_| ())),
        }
    }
}
