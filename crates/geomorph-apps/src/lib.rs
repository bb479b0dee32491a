#![deny(missing_docs)]
//! Raster filtering applications built on the geomorph crates.
//!
//! Each application is a thin orchestration unit: it declares a parameter
//! schema for a hosting layer, validates its configuration against the input
//! raster, wires the library filters together and returns the result. All
//! state is per-invocation; nothing persists between runs.

/// Parameter schema declarations for hosting layers.
pub mod params;

/// The geodesic morphology filtering application.
pub mod geodesic;

/// Error types for the application layer.
pub mod error;

pub use crate::error::AppError;
pub use crate::geodesic::{
    GeodesicFilterConfig, GeodesicFiltersApp, MorphologicalOperation, StructuringElement,
};
pub use crate::params::{ChoiceVariant, ParameterDescriptor, ParameterKind, PixelType};
