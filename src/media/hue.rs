// SPDX-License-Identifier: MPL-2.0
//! Hue rotation of RGBA pixels.
//!
//! Uses the luminance-preserving `hueRotate` color matrix from the SVG
//! `feColorMatrix` filter, the same transform browsers and compositors
//! apply for a hue-rotation effect. Alpha is left untouched.

use image_rs::RgbaImage;

/// 3×3 matrix applied to the RGB channels of each pixel.
pub type HueMatrix = [[f32; 3]; 3];

/// Builds the hue-rotation matrix for `degrees`.
#[must_use]
pub fn hue_matrix(degrees: f32) -> HueMatrix {
    let (sin, cos) = degrees.to_radians().sin_cos();
    [
        [
            0.213 + cos * 0.787 - sin * 0.213,
            0.715 - cos * 0.715 - sin * 0.715,
            0.072 - cos * 0.072 + sin * 0.928,
        ],
        [
            0.213 - cos * 0.213 + sin * 0.143,
            0.715 + cos * 0.285 + sin * 0.140,
            0.072 - cos * 0.072 - sin * 0.283,
        ],
        [
            0.213 - cos * 0.213 - sin * 0.787,
            0.715 - cos * 0.715 + sin * 0.715,
            0.072 + cos * 0.928 + sin * 0.072,
        ],
    ]
}

/// Rotates the hue of every pixel in place.
pub fn rotate_hue(img: &mut RgbaImage, degrees: f32) {
    let matrix = hue_matrix(degrees);
    for pixel in img.pixels_mut() {
        let [r, g, b, _] = pixel.0;
        let rgb = [f32::from(r), f32::from(g), f32::from(b)];
        for (channel, row) in pixel.0.iter_mut().take(3).zip(matrix.iter()) {
            let value = row[0] * rgb[0] + row[1] * rgb[1] + row[2] * rgb[2];
            *channel = value.round().clamp(0.0, 255.0) as u8;
        }
    }
}
