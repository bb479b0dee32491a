#![deny(missing_docs)]
//! Flat grayscale morphology and geodesic reconstruction.
//!
//! This crate provides the morphological engine used by the geodesic filter
//! application:
//!
//! - Structuring elements (ball, cross) for defining operation neighborhoods
//! - Border handling (constant, replicate, reflect padding)
//! - Flat grayscale erosion, dilation, opening and closing
//! - Geodesic dilation/erosion and reconstruction to a fixed point
//! - Opening- and closing-by-reconstruction

/// Error types used for morphological operations.
pub mod error;
pub use error::MorphError;

/// Kernel (structuring element) utilities.
pub mod kernel;
pub use kernel::{ball_kernel, box_kernel, cross_kernel, Connectivity, Kernel, KernelShape};

/// Spatial padding utilities for border handling.
pub mod padding;
pub use padding::{spatial_padding, Padding2D, PaddingMode};

/// Flat grayscale morphology operations.
pub mod ops;
pub use ops::{close, dilate, erode, open, MorphPixel};

/// Geodesic reconstruction operations.
pub mod reconstruction;
pub use reconstruction::{
    closing_by_reconstruction, geodesic_dilate, geodesic_erode, opening_by_reconstruction,
    reconstruct_by_dilation, reconstruct_by_erosion,
};
