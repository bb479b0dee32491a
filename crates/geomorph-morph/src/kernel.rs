/// Shapes of morphological [`Kernel`]s.
///
/// Defines the geometry of the structuring element used in morphological
/// operations. All kernels are centered at their geometric center. Sizes are
/// expressed as half-extents (radii), so a kernel with radii `(rx, ry)` spans
/// `(2 * rx + 1) x (2 * ry + 1)` pixels and always contains its center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelShape {
    /// An elliptical (disc) structuring element.
    ///
    /// A pixel at offset `(dx, dy)` from the center is included when
    /// `(dx / rx)^2 + (dy / ry)^2 <= 1`. A radius of zero collapses that axis
    /// to the center line.
    Ball {
        /// Half-extent along the x axis.
        x_radius: usize,
        /// Half-extent along the y axis.
        y_radius: usize,
    },

    /// A cross (plus) shaped structuring element.
    ///
    /// Only the center row and center column are included.
    Cross {
        /// Half-extent along the x axis.
        x_radius: usize,
        /// Half-extent along the y axis.
        y_radius: usize,
    },

    /// A rectangular box structuring element covering the full extent.
    Box {
        /// Half-extent along the x axis.
        x_radius: usize,
        /// Half-extent along the y axis.
        y_radius: usize,
    },
}

/// A morphological structuring element.
///
/// The kernel defines the neighborhood used in morphological operations. It
/// stores a binary mask where 1 marks pixels included in the operation.
///
/// # Example
///
/// ```rust
/// use geomorph_morph::{Kernel, KernelShape};
///
/// let kernel = Kernel::new(KernelShape::Ball { x_radius: 5, y_radius: 5 });
/// assert_eq!(kernel.width(), 11);
/// assert_eq!(kernel.height(), 11);
/// assert_eq!(kernel.pad(), (5, 5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kernel {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl Kernel {
    /// Create a morphological kernel from a shape.
    pub fn new(shape: KernelShape) -> Self {
        match shape {
            KernelShape::Ball { x_radius, y_radius } => ball_kernel(x_radius, y_radius),
            KernelShape::Cross { x_radius, y_radius } => cross_kernel(x_radius, y_radius),
            KernelShape::Box { x_radius, y_radius } => box_kernel(x_radius, y_radius),
        }
    }

    /// Get a reference to the kernel data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the width of the kernel.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height of the kernel.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the padding for the kernel as (vertical, horizontal) half-extents.
    pub fn pad(&self) -> (usize, usize) {
        (self.height / 2, self.width / 2)
    }

    /// Count the active elements of the kernel.
    pub fn num_active(&self) -> usize {
        self.data.iter().filter(|&&x| x == 1).count()
    }
}

/// Create a ball (elliptical disc) structuring element from its radii.
///
/// The mask is filled by the ellipse equation in integer arithmetic, which
/// degrades gracefully for zero radii: `ball_kernel(0, 0)` is the 1x1 identity
/// neighborhood and `ball_kernel(r, 0)` a horizontal line.
pub fn ball_kernel(x_radius: usize, y_radius: usize) -> Kernel {
    let width = 2 * x_radius + 1;
    let height = 2 * y_radius + 1;
    let mut data = vec![0u8; width * height];

    let rx2 = (x_radius * x_radius) as i64;
    let ry2 = (y_radius * y_radius) as i64;

    for i in 0..height {
        for j in 0..width {
            let dx = j as i64 - x_radius as i64;
            let dy = i as i64 - y_radius as i64;
            // dx^2/rx^2 + dy^2/ry^2 <= 1, cleared of denominators
            if dx * dx * ry2 + dy * dy * rx2 <= rx2 * ry2 {
                data[i * width + j] = 1;
            }
        }
    }

    Kernel {
        data,
        width,
        height,
    }
}

/// Create a cross structuring element from its radii.
///
/// Only the center row and center column are active.
pub fn cross_kernel(x_radius: usize, y_radius: usize) -> Kernel {
    let width = 2 * x_radius + 1;
    let height = 2 * y_radius + 1;
    let mut data = vec![0u8; width * height];

    for j in 0..width {
        data[y_radius * width + j] = 1;
    }
    for i in 0..height {
        data[i * width + x_radius] = 1;
    }

    Kernel {
        data,
        width,
        height,
    }
}

/// Create a fully-active box structuring element from its radii.
pub fn box_kernel(x_radius: usize, y_radius: usize) -> Kernel {
    let width = 2 * x_radius + 1;
    let height = 2 * y_radius + 1;
    Kernel {
        data: vec![1u8; width * height],
        width,
        height,
    }
}

/// Pixel connectivity used by the geodesic propagation step.
///
/// The connectivity is lowered to the 3x3 elementary structuring element that
/// drives each geodesic sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Connectivity {
    /// Edge-connected neighbors only (the 3x3 plus sign).
    #[default]
    Four,
    /// Edge- and corner-connected neighbors (the full 3x3 box).
    Eight,
}

impl Connectivity {
    /// The elementary kernel for one geodesic sweep.
    pub fn elementary_kernel(self) -> Kernel {
        match self {
            Connectivity::Four => cross_kernel(1, 1),
            Connectivity::Eight => box_kernel(1, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_kernel_radii() {
        let kernel = ball_kernel(5, 5);
        assert_eq!(kernel.width(), 11);
        assert_eq!(kernel.height(), 11);
        // center and axis endpoints are active, corners are not
        assert_eq!(kernel.data()[5 * 11 + 5], 1);
        assert_eq!(kernel.data()[5 * 11], 1);
        assert_eq!(kernel.data()[0], 0);
    }

    #[test]
    fn test_ball_kernel_unit() {
        // radii (1, 1) is the 4-connected plus sign
        let kernel = ball_kernel(1, 1);
        assert_eq!(kernel.data(), &[0, 1, 0, 1, 1, 1, 0, 1, 0]);
    }

    #[test]
    fn test_ball_kernel_degenerate() {
        let kernel = ball_kernel(0, 0);
        assert_eq!(kernel.data(), &[1]);

        let line = ball_kernel(2, 0);
        assert_eq!(line.data(), &[1, 1, 1, 1, 1]);
    }

    #[test]
    fn test_cross_kernel() {
        let kernel = cross_kernel(1, 1);
        let data = kernel.data();
        // center row
        assert_eq!(&data[3..6], &[1, 1, 1]);
        // center column
        assert_eq!(data[1], 1);
        assert_eq!(data[7], 1);
        // corners
        assert_eq!(data[0], 0);
        assert_eq!(data[8], 0);
    }

    #[test]
    fn test_cross_kernel_asymmetric() {
        let kernel = cross_kernel(2, 1);
        assert_eq!(kernel.width(), 5);
        assert_eq!(kernel.height(), 3);
        assert_eq!(kernel.num_active(), 5 + 3 - 1);
    }

    #[test]
    fn test_box_kernel() {
        let kernel = box_kernel(1, 1);
        assert!(kernel.data().iter().all(|&x| x == 1));
        assert_eq!(kernel.pad(), (1, 1));
    }

    #[test]
    fn test_connectivity_kernels() {
        assert_eq!(
            Connectivity::Four.elementary_kernel().num_active(),
            5
        );
        assert_eq!(Connectivity::Eight.elementary_kernel().num_active(), 9);
        assert_eq!(Connectivity::default(), Connectivity::Four);
    }
}
