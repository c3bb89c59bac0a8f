// SPDX-License-Identifier: MPL-2.0
//! Image decoding into GPU-ready handles.

use crate::error::{Error, Result};
use crate::media::hue;
use iced::widget::image;
use image_rs::{GenericImageView, RgbaImage};
use std::fs;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    /// Original RGBA bytes, kept for pixel transforms.
    /// Stored in Arc to avoid expensive cloning.
    rgba_bytes: Arc<Vec<u8>>,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    ///
    /// The pixels are stored in an Arc for shared ownership, and a copy is
    /// made for the Handle.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let rgba_bytes = Arc::new(pixels);
        let handle = image::Handle::from_rgba(width, height, rgba_bytes.to_vec());
        Self {
            handle,
            width,
            height,
            rgba_bytes,
        }
    }

    #[must_use]
    pub fn from_image(img: RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self::from_rgba(width, height, img.into_vec())
    }

    /// Returns a reference to the original RGBA bytes.
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Creates a copy with every pixel's hue rotated by `degrees`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Image`] if the stored bytes do not match the
    /// recorded dimensions.
    pub fn hue_rotated(&self, degrees: f32) -> Result<Self> {
        let mut img = RgbaImage::from_raw(self.width, self.height, self.rgba_bytes.to_vec())
            .ok_or_else(|| Error::image("<memory>", "RGBA buffer does not match dimensions"))?;
        hue::rotate_hue(&mut img, degrees);
        Ok(Self::from_image(img))
    }
}

/// Load an image from the given path and return its data.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, or [`Error::Image`]
/// if its contents cannot be decoded.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let name = path.display().to_string();

    let img_bytes = fs::read(path)?;
    let img = image_rs::load_from_memory(&img_bytes).map_err(|e| Error::image(&name, e))?;

    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::image(name, "image has empty dimensions"));
    }

    Ok(ImageData::from_rgba(width, height, img.to_rgba8().into_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::Rgba;
    use tempfile::tempdir;

    #[test]
    fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = load_image(&image_path).expect("png should load successfully");
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
        assert_eq!(data.rgba_bytes().len(), 4 * 2 * 4);
    }

    #[test]
    fn load_missing_image_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing_path = temp_dir.path().join("does_not_exist.png");

        match load_image(&missing_path) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_png_bytes_returns_image_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("invalid.png");
        fs::write(&bad_path, b"not a png").expect("failed to write invalid data");

        match load_image(&bad_path) {
            Err(Error::Image { name, message }) => {
                assert!(name.ends_with("invalid.png"));
                assert!(!message.is_empty());
            }
            other => panic!("expected Image error for invalid png, got {other:?}"),
        }
    }

    #[test]
    fn hue_rotated_keeps_dimensions() {
        let data = ImageData::from_image(RgbaImage::from_pixel(3, 5, Rgba([200, 40, 40, 128])));
        let rotated = data.hue_rotated(180.0).expect("valid buffer");

        assert_eq!((rotated.width, rotated.height), (3, 5));
        assert_ne!(rotated.rgba_bytes(), data.rgba_bytes());
        assert!(rotated.rgba_bytes().chunks(4).all(|px| px[3] == 128));
    }

    #[test]
    fn hue_rotated_rejects_mismatched_buffer() {
        let data = ImageData::from_rgba(4, 4, vec![0; 3]);
        assert!(matches!(data.hue_rotated(90.0), Err(Error::Image { .. })));
    }
}
