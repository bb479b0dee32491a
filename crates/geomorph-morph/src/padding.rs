use geomorph_image::{Image, ImageError};
use rayon::prelude::*;

/// A border type for the spatial padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingMode {
    /// Fills the border with a single, constant value.
    ///
    /// Example: ...d c b a | 0 0 0 0...
    Constant,

    /// Repeats the outermost row or column of pixels into the padded region.
    ///
    /// Example: ...d c b a | a a a a...
    Replicate,

    /// Reflects the pixel values at the boundary, starting with the edge pixel itself.
    ///
    /// Example: ...d c b a | a b c d...
    Reflect,
}

impl PaddingMode {
    #[inline]
    fn reflect(i: isize, len: usize) -> usize {
        if len == 1 {
            return 0;
        }
        let len = len as isize;
        let mut i = i;
        while i < 0 || i >= len {
            if i < 0 {
                i = -i - 1;
            } else {
                i = 2 * len - i - 1;
            }
        }
        i as usize
    }

    /// Maps index `i` to a valid index within `[0, len)` according to the padding mode.
    ///
    /// - `Replicate`: clamp to edge
    /// - `Reflect`: mirror including edge
    /// - `Constant`: returns `None` for out-of-range indices
    #[inline]
    pub fn map_index(&self, i: isize, len: usize) -> Option<usize> {
        if (0..len as isize).contains(&i) {
            return Some(i as usize);
        }
        match self {
            PaddingMode::Constant => None,
            PaddingMode::Replicate => Some(i.clamp(0, len as isize - 1) as usize),
            PaddingMode::Reflect => Some(Self::reflect(i, len)),
        }
    }
}

/// Represents 2D padding with top, bottom, left, and right values (in pixels).
#[derive(Debug, Clone, Copy)]
pub struct Padding2D {
    /// Amount of padding to add on the top side.
    pub top: usize,
    /// Amount of padding to add on the bottom side.
    pub bottom: usize,
    /// Amount of padding to add on the left side.
    pub left: usize,
    /// Amount of padding to add on the right side.
    pub right: usize,
}

impl Padding2D {
    /// Symmetric padding from (vertical, horizontal) half-extents.
    pub fn symmetric(vertical: usize, horizontal: usize) -> Self {
        Self {
            top: vertical,
            bottom: vertical,
            left: horizontal,
            right: horizontal,
        }
    }

    /// Validates that a padded image size matches the expected dimensions.
    pub fn validate_size(
        &self,
        old_size: geomorph_image::ImageSize,
        new_size: geomorph_image::ImageSize,
    ) -> bool {
        new_size.width == old_size.width + self.left + self.right
            && new_size.height == old_size.height + self.top + self.bottom
    }
}

/// Creates a padded copy of `src` in `dst`, centering the original image and
/// filling the borders according to the padding mode.
///
/// # Arguments
///
/// * `src` - The source image to pad.
/// * `dst` - The destination image, sized `src` plus the padding extents.
/// * `padding` - The padding extents for all four sides.
/// * `padding_mode` - The border handling mode.
/// * `constant_value` - The fill value used by [`PaddingMode::Constant`].
///
/// # Errors
///
/// Returns an error if the size of `dst` does not match the size of `src`
/// plus the requested padding.
pub fn spatial_padding<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    padding: Padding2D,
    padding_mode: PaddingMode,
    constant_value: [T; C],
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync,
{
    if !padding.validate_size(src.size(), dst.size()) {
        return Err(ImageError::InvalidImageSize(
            dst.width(),
            dst.height(),
            src.width() + padding.left + padding.right,
            src.height() + padding.top + padding.bottom,
        ));
    }

    let old_width = src.width();
    let old_height = src.height();
    let new_width = dst.width();

    let old_data = src.as_slice();
    let new_data = dst.as_slice_mut();

    new_data
        .par_chunks_exact_mut(new_width * C)
        .enumerate()
        .for_each(|(y, dst_row)| {
            let src_y = padding_mode.map_index(y as isize - padding.top as isize, old_height);
            for x in 0..new_width {
                let src_x = padding_mode.map_index(x as isize - padding.left as isize, old_width);
                let dst_px = &mut dst_row[x * C..(x + 1) * C];
                match (src_y, src_x) {
                    (Some(sy), Some(sx)) => {
                        let src_idx = (sy * old_width + sx) * C;
                        dst_px.copy_from_slice(&old_data[src_idx..src_idx + C]);
                    }
                    _ => dst_px.copy_from_slice(&constant_value),
                }
            }
        });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use geomorph_image::{Image, ImageSize};

    fn image_2x2() -> Image<u8, 1> {
        Image::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![1, 2, 3, 4],
        )
        .unwrap()
    }

    #[test]
    fn test_constant_padding() -> Result<(), ImageError> {
        let src = image_2x2();
        let mut dst = Image::from_size_val(
            ImageSize {
                width: 4,
                height: 4,
            },
            0u8,
        )?;

        spatial_padding(
            &src,
            &mut dst,
            Padding2D::symmetric(1, 1),
            PaddingMode::Constant,
            [9u8],
        )?;

        #[rustfmt::skip]
        assert_eq!(
            dst.as_slice(),
            &[
                9, 9, 9, 9,
                9, 1, 2, 9,
                9, 3, 4, 9,
                9, 9, 9, 9,
            ]
        );

        Ok(())
    }

    #[test]
    fn test_replicate_padding() -> Result<(), ImageError> {
        let src = image_2x2();
        let mut dst = Image::from_size_val(
            ImageSize {
                width: 4,
                height: 4,
            },
            0u8,
        )?;

        spatial_padding(
            &src,
            &mut dst,
            Padding2D::symmetric(1, 1),
            PaddingMode::Replicate,
            [0u8],
        )?;

        #[rustfmt::skip]
        assert_eq!(
            dst.as_slice(),
            &[
                1, 1, 2, 2,
                1, 1, 2, 2,
                3, 3, 4, 4,
                3, 3, 4, 4,
            ]
        );

        Ok(())
    }

    #[test]
    fn test_reflect_padding() -> Result<(), ImageError> {
        let src = Image::<u8, 1>::new(
            ImageSize {
                width: 4,
                height: 1,
            },
            vec![1, 2, 3, 4],
        )?;
        let mut dst = Image::from_size_val(
            ImageSize {
                width: 8,
                height: 1,
            },
            0u8,
        )?;

        spatial_padding(
            &src,
            &mut dst,
            Padding2D {
                top: 0,
                bottom: 0,
                left: 2,
                right: 2,
            },
            PaddingMode::Reflect,
            [0u8],
        )?;

        assert_eq!(dst.as_slice(), &[2, 1, 1, 2, 3, 4, 4, 3]);

        Ok(())
    }

    #[test]
    fn test_size_validation() -> Result<(), ImageError> {
        let src = image_2x2();
        let mut dst = Image::from_size_val(
            ImageSize {
                width: 3,
                height: 4,
            },
            0u8,
        )?;

        let result = spatial_padding(
            &src,
            &mut dst,
            Padding2D::symmetric(1, 1),
            PaddingMode::Constant,
            [0u8],
        );
        assert!(result.is_err());

        Ok(())
    }
}
