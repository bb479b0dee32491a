#![deny(missing_docs)]
//! Raster image containers for geodesic morphology.
//!
//! Provides a statically-channeled [`Image`] type for processing pipelines and
//! a runtime-banded [`MultiBandImage`] type for remote-sensing rasters whose
//! band count is only known when the file is opened.

/// statically-channeled image representation.
pub mod image;

/// runtime-banded raster representation.
pub mod multiband;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
pub use crate::multiband::MultiBandImage;
