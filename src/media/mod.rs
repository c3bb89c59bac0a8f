// SPDX-License-Identifier: MPL-2.0
//! Image loading and pixel transforms for the gallery.

pub mod assets;
pub mod hue;
pub mod image;

pub use assets::{load_gallery, load_gallery_async, GalleryAsset, GalleryImages};
pub use image::{load_image, ImageData};
