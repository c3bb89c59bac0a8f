// SPDX-License-Identifier: MPL-2.0
//! The five gallery images.
//!
//! Each asset is looked up by file stem in the assets directory. A file that
//! is missing or cannot be decoded is replaced by a generated placeholder so
//! the gallery always has something to show.

use crate::error::{Error, Result};
use crate::media::image::{load_image, ImageData};
use image_rs::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

/// Extensions tried, in order, for every asset stem.
pub const ASSET_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// Edge length of generated placeholder images, in pixels.
pub const PLACEHOLDER_SIZE: u32 = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GalleryAsset {
    Bag,
    Chair,
    Sink,
    Daido,
    Wanderer,
}

impl GalleryAsset {
    pub const ALL: [GalleryAsset; 5] = [
        GalleryAsset::Bag,
        GalleryAsset::Chair,
        GalleryAsset::Sink,
        GalleryAsset::Daido,
        GalleryAsset::Wanderer,
    ];

    /// File stem looked up in the assets directory.
    #[must_use]
    pub fn stem(self) -> &'static str {
        match self {
            GalleryAsset::Bag => "bag",
            GalleryAsset::Chair => "chair",
            GalleryAsset::Sink => "sink",
            GalleryAsset::Daido => "daido",
            GalleryAsset::Wanderer => "wanderer",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    fn placeholder_tint(self) -> [u8; 3] {
        match self {
            GalleryAsset::Bag => [196, 120, 64],
            GalleryAsset::Chair => [72, 140, 96],
            GalleryAsset::Sink => [80, 120, 200],
            GalleryAsset::Daido => [150, 150, 150],
            GalleryAsset::Wanderer => [200, 72, 88],
        }
    }
}

/// Decoded gallery images, plus the precomputed hue-shifted variant used by
/// the long-press panel.
#[derive(Debug, Clone)]
pub struct GalleryImages {
    images: [ImageData; 5],
    hue_shifted: ImageData,
}

impl GalleryImages {
    #[must_use]
    pub fn get(&self, asset: GalleryAsset) -> &ImageData {
        &self.images[asset.index()]
    }

    #[must_use]
    pub fn hue_shifted(&self) -> &ImageData {
        &self.hue_shifted
    }
}

/// Finds the file for `asset` in `dir`, trying each known extension.
#[must_use]
pub fn find_asset(dir: &Path, asset: GalleryAsset) -> Option<PathBuf> {
    ASSET_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}.{ext}", asset.stem())))
        .find(|path| path.is_file())
}

/// Loads a single asset from `dir`.
///
/// # Errors
///
/// Returns [`Error::Asset`] if no file matches the asset's stem, or the
/// decoding error from [`load_image`].
pub fn load_asset(dir: &Path, asset: GalleryAsset) -> Result<ImageData> {
    let path = find_asset(dir, asset).ok_or_else(|| {
        Error::Asset(format!(
            "no '{}' image in {} (tried {})",
            asset.stem(),
            dir.display(),
            ASSET_EXTENSIONS.join(", ")
        ))
    })?;
    debug!(asset = asset.stem(), path = %path.display(), "loading gallery image");
    load_image(&path)
}

/// Diagonal gradient in the asset's tint with a light band across the
/// middle, so rotation and offset remain visible.
#[must_use]
pub fn placeholder(asset: GalleryAsset) -> ImageData {
    let [r, g, b] = asset.placeholder_tint();
    let size = PLACEHOLDER_SIZE;
    let band = size / 8;

    let img = RgbaImage::from_fn(size, size, |x, y| {
        let y_in_band = y.abs_diff(size / 2) < band / 2;
        if y_in_band && x < size * 3 / 4 {
            return Rgba([245, 245, 245, 255]);
        }
        let shade = 0.55 + 0.45 * ((x + y) as f32 / (2 * size) as f32);
        let scale = |c: u8| (f32::from(c) * shade).round() as u8;
        Rgba([scale(r), scale(g), scale(b), 255])
    });
    ImageData::from_image(img)
}

/// Loads every gallery image from `dir`, substituting placeholders for
/// failures, and precomputes the wanderer image rotated by `hue_degrees`.
#[must_use]
pub fn load_gallery(dir: &Path, hue_degrees: f32) -> GalleryImages {
    let images = GalleryAsset::ALL.map(|asset| {
        load_asset(dir, asset).unwrap_or_else(|err| {
            warn!(asset = asset.stem(), error = %err, "using placeholder image");
            placeholder(asset)
        })
    });

    let wanderer = &images[GalleryAsset::Wanderer.index()];
    let hue_shifted = wanderer.hue_rotated(hue_degrees).unwrap_or_else(|err| {
        warn!(error = %err, "hue rotation failed, showing unshifted image");
        wanderer.clone()
    });

    GalleryImages {
        images,
        hue_shifted,
    }
}

/// Gallery made only of placeholders, used when loading cannot run at all.
#[must_use]
pub fn placeholder_gallery() -> GalleryImages {
    let images = GalleryAsset::ALL.map(placeholder);
    let hue_shifted = images[GalleryAsset::Wanderer.index()].clone();
    GalleryImages {
        images,
        hue_shifted,
    }
}

/// Decodes the gallery on the blocking pool, for use with `Task::perform`.
pub async fn load_gallery_async(dir: PathBuf, hue_degrees: f32) -> GalleryImages {
    tokio::task::spawn_blocking(move || load_gallery(&dir, hue_degrees))
        .await
        .unwrap_or_else(|err| {
            error!(error = %err, "gallery loading task failed");
            placeholder_gallery()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgb, RgbImage};
    use tempfile::tempdir;

    #[test]
    fn stems_are_unique() {
        let mut stems: Vec<_> = GalleryAsset::ALL.iter().map(|a| a.stem()).collect();
        stems.sort_unstable();
        stems.dedup();
        assert_eq!(stems.len(), GalleryAsset::ALL.len());
    }

    #[test]
    fn find_asset_tries_every_extension() {
        let dir = tempdir().expect("temp dir");
        assert!(find_asset(dir.path(), GalleryAsset::Chair).is_none());

        // JPEG has no alpha channel.
        RgbImage::from_pixel(2, 2, Rgb([0, 0, 0]))
            .save(dir.path().join("chair.jpg"))
            .expect("write jpg");

        let found = find_asset(dir.path(), GalleryAsset::Chair).expect("chair.jpg");
        assert_eq!(found.file_name().and_then(|n| n.to_str()), Some("chair.jpg"));
    }

    #[test]
    fn missing_asset_is_reported() {
        let dir = tempdir().expect("temp dir");
        match load_asset(dir.path(), GalleryAsset::Bag) {
            Err(Error::Asset(message)) => assert!(message.contains("bag")),
            other => panic!("expected Asset error, got {other:?}"),
        }
    }

    #[test]
    fn gallery_falls_back_to_placeholders() {
        let dir = tempdir().expect("temp dir");
        RgbaImage::from_pixel(6, 3, Rgba([10, 200, 10, 255]))
            .save(dir.path().join("sink.png"))
            .expect("write png");

        let gallery = load_gallery(dir.path(), 180.0);

        let sink = gallery.get(GalleryAsset::Sink);
        assert_eq!((sink.width, sink.height), (6, 3));

        let bag = gallery.get(GalleryAsset::Bag);
        assert_eq!((bag.width, bag.height), (PLACEHOLDER_SIZE, PLACEHOLDER_SIZE));
    }

    #[tokio::test]
    async fn async_loading_uses_blocking_pool() {
        let dir = tempdir().expect("temp dir");
        RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 255]))
            .save(dir.path().join("daido.png"))
            .expect("write png");

        let gallery = load_gallery_async(dir.path().to_path_buf(), 0.0).await;
        let daido = gallery.get(GalleryAsset::Daido);
        assert_eq!((daido.width, daido.height), (4, 4));
    }

    #[test]
    fn placeholder_gallery_is_complete() {
        let gallery = placeholder_gallery();
        for asset in GalleryAsset::ALL {
            assert_eq!(gallery.get(asset).width, PLACEHOLDER_SIZE);
        }
        assert_eq!(gallery.hue_shifted().height, PLACEHOLDER_SIZE);
    }

    #[test]
    fn hue_variant_matches_wanderer_dimensions() {
        let dir = tempdir().expect("temp dir");
        RgbaImage::from_pixel(5, 7, Rgba([220, 30, 30, 255]))
            .save(dir.path().join("wanderer.png"))
            .expect("write png");

        let gallery = load_gallery(dir.path(), 180.0);
        let original = gallery.get(GalleryAsset::Wanderer);
        let shifted = gallery.hue_shifted();

        assert_eq!((shifted.width, shifted.height), (5, 7));
        assert_ne!(shifted.rgba_bytes(), original.rgba_bytes());
    }
}
