#![deny(missing_docs)]
//! Geodesic grayscale morphology for multi-band rasters.
//!
//! Re-exports the member crates under stable module names.

#[doc(inline)]
pub use geomorph_image as image;

#[doc(inline)]
pub use geomorph_morph as morph;

#[doc(inline)]
pub use geomorph_apps as apps;
