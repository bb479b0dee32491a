//! Geodesic reconstruction operations.
//!
//! Reconstruction propagates a marker image under a mask image until the
//! result no longer changes: each sweep applies one elementary dilation (or
//! erosion) and clips the result against the mask. The fixed point is the
//! morphological reconstruction of the marker, which preserves the mask's
//! structures touched by the marker and flattens everything else.
//!
//! Opening- and closing-by-reconstruction derive the marker from the input
//! itself (an erosion or dilation by the user's structuring element) and use
//! the input as the mask, so the output modifies the image's extrema while
//! staying bounded by the original.

use crate::error::MorphError;
use crate::kernel::{Connectivity, Kernel};
use crate::ops::{dilate, erode, MorphPixel};
use crate::padding::PaddingMode;
use geomorph_image::Image;

fn check_same_size<T: MorphPixel, const C: usize>(
    a: &Image<T, C>,
    b: &Image<T, C>,
) -> Result<(), MorphError> {
    if a.size() != b.size() {
        return Err(MorphError::SizeMismatch(
            b.width(),
            b.height(),
            a.width(),
            a.height(),
        ));
    }
    Ok(())
}

fn check_marker_below_mask<T: MorphPixel, const C: usize>(
    marker: &Image<T, C>,
    mask: &Image<T, C>,
) -> Result<(), MorphError> {
    let bounded = marker
        .as_slice()
        .iter()
        .zip(mask.as_slice().iter())
        .all(|(&m, &k)| m <= k);
    if !bounded {
        return Err(MorphError::MarkerNotBounded("less than or equal to"));
    }
    Ok(())
}

fn check_marker_above_mask<T: MorphPixel, const C: usize>(
    marker: &Image<T, C>,
    mask: &Image<T, C>,
) -> Result<(), MorphError> {
    let bounded = marker
        .as_slice()
        .iter()
        .zip(mask.as_slice().iter())
        .all(|(&m, &k)| m >= k);
    if !bounded {
        return Err(MorphError::MarkerNotBounded("greater than or equal to"));
    }
    Ok(())
}

/// One geodesic dilation sweep: an elementary dilation of the marker clipped
/// from above by the mask.
///
/// # Arguments
///
/// * `marker` - The marker image, pointwise `<=` the mask.
/// * `mask` - The mask image bounding the propagation.
/// * `dst` - The destination image (will be overwritten).
/// * `connectivity` - The propagation neighborhood.
///
/// # Errors
///
/// Fails if the images disagree on their size or the marker exceeds the mask.
pub fn geodesic_dilate<T: MorphPixel, const C: usize>(
    marker: &Image<T, C>,
    mask: &Image<T, C>,
    dst: &mut Image<T, C>,
    connectivity: Connectivity,
) -> Result<(), MorphError> {
    check_same_size(marker, mask)?;
    check_same_size(marker, dst)?;
    check_marker_below_mask(marker, mask)?;

    dilate(
        marker,
        dst,
        &connectivity.elementary_kernel(),
        PaddingMode::Replicate,
        [T::default(); C],
    )?;

    dst.as_slice_mut()
        .iter_mut()
        .zip(mask.as_slice().iter())
        .for_each(|(d, &k)| *d = d.pixel_min(k));

    Ok(())
}

/// One geodesic erosion sweep: an elementary erosion of the marker clipped
/// from below by the mask.
///
/// The dual of [`geodesic_dilate`]; the marker must be pointwise `>=` the mask.
pub fn geodesic_erode<T: MorphPixel, const C: usize>(
    marker: &Image<T, C>,
    mask: &Image<T, C>,
    dst: &mut Image<T, C>,
    connectivity: Connectivity,
) -> Result<(), MorphError> {
    check_same_size(marker, mask)?;
    check_same_size(marker, dst)?;
    check_marker_above_mask(marker, mask)?;

    erode(
        marker,
        dst,
        &connectivity.elementary_kernel(),
        PaddingMode::Replicate,
        [T::default(); C],
    )?;

    dst.as_slice_mut()
        .iter_mut()
        .zip(mask.as_slice().iter())
        .for_each(|(d, &k)| *d = d.pixel_max(k));

    Ok(())
}

/// Reconstruction by dilation: iterate [`geodesic_dilate`] until idempotence.
///
/// Each sweep is monotone non-decreasing and bounded above by the mask, and
/// the extrema only ever take values already present in the input, so the
/// iteration reaches a fixed point in finitely many sweeps.
///
/// # Errors
///
/// Fails if the images disagree on their size or the marker exceeds the mask.
pub fn reconstruct_by_dilation<T: MorphPixel, const C: usize>(
    marker: &Image<T, C>,
    mask: &Image<T, C>,
    dst: &mut Image<T, C>,
    connectivity: Connectivity,
) -> Result<(), MorphError> {
    check_same_size(marker, dst)?;

    let mut current = marker.clone();
    loop {
        geodesic_dilate(&current, mask, dst, connectivity)?;
        if dst.as_slice() == current.as_slice() {
            return Ok(());
        }
        std::mem::swap(&mut current, dst);
    }
}

/// Reconstruction by erosion: iterate [`geodesic_erode`] until idempotence.
///
/// The dual of [`reconstruct_by_dilation`].
pub fn reconstruct_by_erosion<T: MorphPixel, const C: usize>(
    marker: &Image<T, C>,
    mask: &Image<T, C>,
    dst: &mut Image<T, C>,
    connectivity: Connectivity,
) -> Result<(), MorphError> {
    check_same_size(marker, dst)?;

    let mut current = marker.clone();
    loop {
        geodesic_erode(&current, mask, dst, connectivity)?;
        if dst.as_slice() == current.as_slice() {
            return Ok(());
        }
        std::mem::swap(&mut current, dst);
    }
}

/// Opening-by-reconstruction of an image.
///
/// Erodes the input by the structuring element and reconstructs the eroded
/// marker under the input by geodesic dilation. Bright features the
/// structuring element cannot contain are removed while the surviving
/// structures keep their exact original shape.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image (will be overwritten).
/// * `kernel` - The structuring element deriving the marker.
/// * `connectivity` - The propagation neighborhood of the reconstruction.
///
/// # Errors
///
/// Fails if the shapes do not match or the kernel has no active elements.
pub fn opening_by_reconstruction<T: MorphPixel, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel: &Kernel,
    connectivity: Connectivity,
) -> Result<(), MorphError> {
    let mut marker = src.clone();
    erode(
        src,
        &mut marker,
        kernel,
        PaddingMode::Replicate,
        [T::default(); C],
    )?;
    reconstruct_by_dilation(&marker, src, dst, connectivity)
}

/// Closing-by-reconstruction of an image.
///
/// Dilates the input by the structuring element and reconstructs the dilated
/// marker over the input by geodesic erosion. Dark features the structuring
/// element cannot contain are filled while the surviving structures keep
/// their exact original shape.
///
/// The dual of [`opening_by_reconstruction`]; see there for arguments and
/// errors.
pub fn closing_by_reconstruction<T: MorphPixel, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel: &Kernel,
    connectivity: Connectivity,
) -> Result<(), MorphError> {
    let mut marker = src.clone();
    dilate(
        src,
        &mut marker,
        kernel,
        PaddingMode::Replicate,
        [T::default(); C],
    )?;
    reconstruct_by_erosion(&marker, src, dst, connectivity)
}
