use crate::error::MorphError;
use crate::kernel::Kernel;
use crate::padding::{spatial_padding, Padding2D, PaddingMode};
use geomorph_image::Image;
use rayon::prelude::*;

/// Pixel types usable by flat grayscale morphology.
///
/// Float rasters do not implement `Ord`, so the neighborhood extrema are
/// computed through `PartialOrd` with explicit bounds from
/// [`num_traits::Bounded`]. NaN values are not meaningful inputs for
/// morphology and compare as neither smaller nor larger.
pub trait MorphPixel:
    Copy + Default + Send + Sync + PartialOrd + num_traits::Bounded
{
    /// The smaller of two pixel values.
    #[inline]
    fn pixel_min(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }

    /// The larger of two pixel values.
    #[inline]
    fn pixel_max(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }
}

impl MorphPixel for u8 {}
impl MorphPixel for u16 {}
impl MorphPixel for f32 {}
impl MorphPixel for f64 {}

/// Whether the sweep takes the neighborhood maximum or minimum.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Extremum {
    Max,
    Min,
}

fn morph_sweep<T: MorphPixel, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel: &Kernel,
    padding_mode: PaddingMode,
    constant_value: [T; C],
    extremum: Extremum,
) -> Result<(), MorphError> {
    if src.size() != dst.size() {
        return Err(MorphError::SizeMismatch(
            dst.width(),
            dst.height(),
            src.width(),
            src.height(),
        ));
    }

    if kernel.num_active() == 0 {
        return Err(MorphError::EmptyKernel);
    }

    let width = src.width();
    let (pad_h, pad_w) = kernel.pad();
    let k_height = kernel.height();
    let k_width = kernel.width();
    let k_data = kernel.data();

    let padded_size = geomorph_image::ImageSize {
        width: width + 2 * pad_w,
        height: src.height() + 2 * pad_h,
    };
    let mut padded = Image::<T, C>::from_size_val(padded_size, T::default())?;
    spatial_padding(
        src,
        &mut padded,
        Padding2D::symmetric(pad_h, pad_w),
        padding_mode,
        constant_value,
    )?;
    let padded_data = padded.as_slice();

    dst.as_slice_mut()
        .par_chunks_exact_mut(width * C)
        .enumerate()
        .for_each(|(h, row_chunk)| {
            for w in 0..width {
                for c in 0..C {
                    let mut val = match extremum {
                        Extremum::Max => T::min_value(),
                        Extremum::Min => T::max_value(),
                    };

                    for kh in 0..k_height {
                        for kw in 0..k_width {
                            if k_data[kh * k_width + kw] == 1 {
                                let px = w + kw;
                                let py = h + kh;
                                let pixel = padded_data[(py * padded_size.width + px) * C + c];
                                val = match extremum {
                                    Extremum::Max => val.pixel_max(pixel),
                                    Extremum::Min => val.pixel_min(pixel),
                                };
                            }
                        }
                    }

                    row_chunk[w * C + c] = val;
                }
            }
        });

    Ok(())
}

/// Dilate an image using a [`Kernel`].
///
/// Each pixel is replaced by the maximum value in the neighborhood defined by
/// the kernel mask.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image (will be overwritten).
/// * `kernel` - The morphological structuring element.
/// * `padding_mode` - The border handling mode.
/// * `constant_value` - The fill value for constant padding.
///
/// # Errors
///
/// Fails if the shapes do not match or the kernel has no active elements.
pub fn dilate<T: MorphPixel, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel: &Kernel,
    padding_mode: PaddingMode,
    constant_value: [T; C],
) -> Result<(), MorphError> {
    morph_sweep(src, dst, kernel, padding_mode, constant_value, Extremum::Max)
}

/// Erode an image using a [`Kernel`].
///
/// Each pixel is replaced by the minimum value in the neighborhood defined by
/// the kernel mask.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image (will be overwritten).
/// * `kernel` - The morphological structuring element.
/// * `padding_mode` - The border handling mode.
/// * `constant_value` - The fill value for constant padding.
///
/// # Errors
///
/// Fails if the shapes do not match or the kernel has no active elements.
pub fn erode<T: MorphPixel, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel: &Kernel,
    padding_mode: PaddingMode,
    constant_value: [T; C],
) -> Result<(), MorphError> {
    morph_sweep(src, dst, kernel, padding_mode, constant_value, Extremum::Min)
}

/// Opening: erosion followed by dilation.
///
/// Removes bright features smaller than the structuring element.
pub fn open<T: MorphPixel, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel: &Kernel,
    padding_mode: PaddingMode,
    constant_value: [T; C],
) -> Result<(), MorphError> {
    let mut temp = src.clone();
    erode(src, &mut temp, kernel, padding_mode, constant_value)?;
    dilate(&temp, dst, kernel, padding_mode, constant_value)?;
    Ok(())
}

/// Closing: dilation followed by erosion.
///
/// Fills dark features smaller than the structuring element.
pub fn close<T: MorphPixel, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel: &Kernel,
    padding_mode: PaddingMode,
    constant_value: [T; C],
) -> Result<(), MorphError> {
    let mut temp = src.clone();
    dilate(src, &mut temp, kernel, padding_mode, constant_value)?;
    erode(&temp, dst, kernel, padding_mode, constant_value)?;
    Ok(())
}
