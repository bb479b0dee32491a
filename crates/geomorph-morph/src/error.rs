/// An error type for morphological operations.
#[derive(thiserror::Error, Debug)]
pub enum MorphError {
    /// Error when two images disagree on their size.
    #[error("Image size ({0}, {1}) does not match the expected size ({2}, {3})")]
    SizeMismatch(usize, usize, usize, usize),

    /// Error when a geodesic marker is not bounded by its mask.
    #[error("The marker image must be pointwise {0} the mask image")]
    MarkerNotBounded(&'static str),

    /// Error when a kernel has no active elements.
    #[error("The structuring element has no active elements")]
    EmptyKernel,

    /// Error from the underlying image container.
    #[error(transparent)]
    Image(#[from] geomorph_image::ImageError),
}
