/// An error type for the image module.
#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the image size is not valid.
    #[error("Image size ({0}, {1}) does not match the expected size ({2}, {3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the band index is out of bounds.
    #[error("Band index {0} is out of bounds for a raster with {1} bands")]
    BandIndexOutOfBounds(usize, usize),

    /// Error when the channel index is out of bounds.
    #[error("Channel index {0} is out of bounds ({1})")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when the pixel index is out of bounds.
    #[error("Pixel index ({0}, {1}) is out of bounds ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when the cast operation fails.
    #[error("Failed to cast image data to {0}")]
    CastError(String),

    /// Error when a raster is constructed with zero bands.
    #[error("A raster must carry at least one band")]
    ZeroBands,

    /// Error when an image is constructed with a zero dimension.
    #[error("Image dimensions must be non-zero, got ({0}, {1})")]
    ZeroSizedImage(usize, usize),
}
