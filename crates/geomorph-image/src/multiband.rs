use crate::error::ImageError;
use crate::image::{Image, ImageSize};

/// A raster whose band count is only known at runtime.
///
/// Remote-sensing products carry arbitrary band counts, so the input side of a
/// processing pipeline cannot fix the channel count at compile time. The pixel
/// data is stored band-interleaved (H, W, B), matching [`Image`].
#[derive(Clone, Debug, PartialEq)]
pub struct MultiBandImage<T> {
    size: ImageSize,
    num_bands: usize,
    data: Vec<T>,
}

impl<T> MultiBandImage<T> {
    /// Create a new raster from band-interleaved pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The spatial extent of the raster in pixels.
    /// * `num_bands` - The number of bands, at least one.
    /// * `data` - The band-interleaved pixel data.
    ///
    /// # Errors
    ///
    /// Fails if `num_bands` is zero or the data length does not match
    /// `width * height * num_bands`.
    ///
    /// # Examples
    ///
    /// ```
    /// use geomorph_image::{ImageSize, MultiBandImage};
    ///
    /// let raster = MultiBandImage::<f32>::new(
    ///     ImageSize { width: 4, height: 2 },
    ///     3,
    ///     vec![0f32; 4 * 2 * 3],
    /// ).unwrap();
    ///
    /// assert_eq!(raster.num_bands(), 3);
    /// ```
    pub fn new(size: ImageSize, num_bands: usize, data: Vec<T>) -> Result<Self, ImageError> {
        if num_bands == 0 {
            return Err(ImageError::ZeroBands);
        }

        if size.width == 0 || size.height == 0 {
            return Err(ImageError::ZeroSizedImage(size.width, size.height));
        }

        if data.len() != size.width * size.height * num_bands {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.width * size.height * num_bands,
            ));
        }

        Ok(Self {
            size,
            num_bands,
            data,
        })
    }

    /// Assemble a raster from a list of single-band images of equal size.
    ///
    /// # Errors
    ///
    /// Fails if the list is empty or the bands disagree on their size.
    pub fn from_bands(bands: &[Image<T, 1>]) -> Result<Self, ImageError>
    where
        T: Copy,
    {
        let first = bands.first().ok_or(ImageError::ZeroBands)?;
        let size = first.size();

        for band in bands.iter().skip(1) {
            if band.size() != size {
                return Err(ImageError::InvalidImageSize(
                    band.width(),
                    band.height(),
                    size.width,
                    size.height,
                ));
            }
        }

        let mut data = Vec::with_capacity(size.width * size.height * bands.len());
        for px in 0..size.width * size.height {
            for band in bands {
                data.push(band.as_slice()[px]);
            }
        }

        Self::new(size, bands.len(), data)
    }

    /// Get the spatial extent of the raster in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the width of the raster in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the raster in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of bands in the raster.
    pub fn num_bands(&self) -> usize {
        self.num_bands
    }

    /// Get the pixel data as a flat band-interleaved slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Extract a band over the full spatial extent into a single-band image.
    ///
    /// # Arguments
    ///
    /// * `band` - The 0-based band index.
    ///
    /// # Errors
    ///
    /// If the band index is out of bounds, an error is returned.
    pub fn band(&self, band: usize) -> Result<Image<T, 1>, ImageError>
    where
        T: Copy,
    {
        if band >= self.num_bands {
            return Err(ImageError::BandIndexOutOfBounds(band, self.num_bands));
        }

        let band_data = self
            .data
            .chunks_exact(self.num_bands)
            .map(|pixel| pixel[band])
            .collect();

        Image::new(self.size, band_data)
    }

    /// Split the raster into its bands.
    pub fn split_bands(&self) -> Result<Vec<Image<T, 1>>, ImageError>
    where
        T: Copy,
    {
        (0..self.num_bands).map(|b| self.band(b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::MultiBandImage;
    use crate::error::ImageError;
    use crate::image::{Image, ImageSize};

    #[test]
    fn multiband_smoke() -> Result<(), ImageError> {
        let raster = MultiBandImage::<f32>::new(
            ImageSize {
                width: 3,
                height: 2,
            },
            4,
            vec![0f32; 3 * 2 * 4],
        )?;
        assert_eq!(raster.width(), 3);
        assert_eq!(raster.height(), 2);
        assert_eq!(raster.num_bands(), 4);

        Ok(())
    }

    #[test]
    fn multiband_zero_bands() {
        let raster = MultiBandImage::<f32>::new(
            ImageSize {
                width: 3,
                height: 2,
            },
            0,
            vec![],
        );
        assert!(matches!(raster, Err(ImageError::ZeroBands)));
    }

    #[test]
    fn multiband_zero_size_rejected() {
        let raster = MultiBandImage::<f32>::new(
            ImageSize {
                width: 0,
                height: 0,
            },
            1,
            vec![],
        );
        assert!(matches!(raster, Err(ImageError::ZeroSizedImage(0, 0))));
    }

    #[test]
    fn multiband_band_extraction() -> Result<(), ImageError> {
        // 1x2 raster with 3 bands: pixel 0 = (0,1,2), pixel 1 = (3,4,5)
        let raster = MultiBandImage::<f32>::new(
            ImageSize {
                width: 1,
                height: 2,
            },
            3,
            vec![0., 1., 2., 3., 4., 5.],
        )?;

        let band = raster.band(1)?;
        assert_eq!(band.as_slice(), &[1.0, 4.0]);
        assert!(raster.band(3).is_err());

        Ok(())
    }

    #[test]
    fn multiband_from_bands_roundtrip() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 2,
            height: 2,
        };
        let b0 = Image::<f32, 1>::new(size, vec![0., 1., 2., 3.])?;
        let b1 = Image::<f32, 1>::new(size, vec![4., 5., 6., 7.])?;

        let raster = MultiBandImage::from_bands(&[b0.clone(), b1.clone()])?;
        assert_eq!(raster.num_bands(), 2);
        assert_eq!(raster.band(0)?, b0);
        assert_eq!(raster.band(1)?, b1);

        Ok(())
    }

    #[test]
    fn multiband_from_bands_size_mismatch() -> Result<(), ImageError> {
        let b0 = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![0., 1.],
        )?;
        let b1 = Image::<f32, 1>::new(
            ImageSize {
                width: 1,
                height: 2,
            },
            vec![0., 1.],
        )?;

        assert!(MultiBandImage::from_bands(&[b0, b1]).is_err());

        Ok(())
    }
}
