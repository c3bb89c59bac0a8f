// SPDX-License-Identifier: MPL-2.0
//! Error types for the ambient layers (configuration and gallery assets).
//!
//! Gesture handling itself is total and never produces an [`Error`]; these
//! variants only describe failures while reading settings or image files,
//! and callers recover from them with defaults or placeholders.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Image Error ({name}): {message}")]
    Image { name: String, message: String },

    #[error("Asset Error: {0}")]
    Asset(String),
}

impl Error {
    /// Builds an [`Error::Image`] for the named gallery asset.
    pub fn image(name: impl Into<String>, message: impl ToString) -> Self {
        Error::Image {
            name: name.into(),
            message: message.to_string(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::image("<decoder>", err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
