/// An error type for the application layer.
///
/// Every invalid parameter combination is an explicit error; an application
/// never completes without either producing an output or reporting why not.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Error when the requested channel index is zero.
    ///
    /// Channel indices are 1-based, matching the convention of remote-sensing
    /// band selectors.
    #[error("The channel index is 1-based; 0 is not a valid channel")]
    InvalidChannel,

    /// Error when the requested channel exceeds the raster's band count.
    #[error("The specified channel index is invalid: channel {channel} requested, but the input has {num_bands} band(s)")]
    ChannelOutOfRange {
        /// The 1-based channel index requested.
        channel: usize,
        /// The number of bands in the input raster.
        num_bands: usize,
    },

    /// Error when the selected structuring element has no dispatch path.
    #[error("Unsupported structuring element: {0}")]
    UnsupportedStructuringElement(&'static str),

    /// Error from the image container layer.
    #[error(transparent)]
    Image(#[from] geomorph_image::ImageError),

    /// Error from the morphology layer.
    #[error(transparent)]
    Morph(#[from] geomorph_morph::MorphError),
}
