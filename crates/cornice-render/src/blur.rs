//! Box-blur approximation of Gaussian blur for 8-bit alpha planes.
//!
//! Shadow lobes are blurred with three successive box-blur passes per
//! axis, which converges on a Gaussian falloff while staying in exact
//! integer arithmetic. The radius/σ correspondences follow the CSS
//! `box-shadow` and SVG `feGaussianBlur` definitions, so a lobe's falloff
//! fully attenuates within [`blur_extent`] pixels of its box.

use crate::types::IntSize;

/// Standard deviation for a CSS shadow blur radius (σ = radius / 2).
#[inline]
pub fn blur_std_dev(radius: i32) -> f32 {
    radius as f32 * 0.5
}

/// Box-blur radius that approximates a Gaussian with the given σ.
///
/// Uses the SVG correspondence between a triple box blur and a true
/// Gaussian, widened by 1.5 so the tail fully fades out. Never less
/// than 2 so even tiny radii produce a visible penumbra.
#[inline]
pub fn blur_radius_for_std_dev(std_dev: f32) -> i32 {
    let gaussian_scale_factor = (3.0 * (2.0 * std::f32::consts::PI).sqrt() / 4.0) * 1.5;
    ((std_dev * gaussian_scale_factor + 0.5).floor() as i32).max(2)
}

/// Square pixel extent needed to contain the falloff of a blurred lobe.
#[inline]
pub fn blur_extent(radius: i32) -> IntSize {
    let blur_radius = blur_radius_for_std_dev(blur_std_dev(radius));
    IntSize::new(blur_radius, blur_radius)
}

/// Left/right sample reach of one box-blur pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoxLobes {
    left: i32,
    right: i32,
}

/// Split a blur radius into three per-pass lobes.
///
/// The lefts and the rights each sum to exactly `blur_radius`, so three
/// passes never spread a pixel further than the blur radius.
fn compute_lobes(blur_radius: i32) -> [BoxLobes; 3] {
    let z = blur_radius / 3;
    match blur_radius % 3 {
        0 => [
            BoxLobes { left: z, right: z },
            BoxLobes { left: z, right: z },
            BoxLobes { left: z, right: z },
        ],
        1 => [
            BoxLobes {
                left: z,
                right: z + 1,
            },
            BoxLobes {
                left: z + 1,
                right: z,
            },
            BoxLobes { left: z, right: z },
        ],
        _ => [
            BoxLobes {
                left: z,
                right: z + 1,
            },
            BoxLobes {
                left: z + 1,
                right: z,
            },
            BoxLobes {
                left: z + 1,
                right: z + 1,
            },
        ],
    }
}

/// One sliding-window box-blur pass over a single row.
///
/// Samples outside the row are transparent. `src` and `dst` must have
/// the same length.
fn box_blur_row(src: &[u8], dst: &mut [u8], lobes: BoxLobes) {
    debug_assert_eq!(src.len(), dst.len());
    let len = src.len() as i32;
    let window = (lobes.left + lobes.right + 1) as u32;

    let mut sum: u32 = 0;
    let prime_end = lobes.right.min(len - 1);
    for j in 0..=prime_end {
        sum += src[j as usize] as u32;
    }

    for i in 0..len {
        dst[i as usize] = (sum / window) as u8;
        let outgoing = i - lobes.left;
        if (0..len).contains(&outgoing) {
            sum -= src[outgoing as usize] as u32;
        }
        let incoming = i + lobes.right + 1;
        if incoming < len {
            sum += src[incoming as usize] as u32;
        }
    }
}

fn transpose(src: &[u8], dst: &mut [u8], width: usize, height: usize) {
    for y in 0..height {
        for x in 0..width {
            dst[x * height + y] = src[y * width + x];
        }
    }
}

fn blur_axis(front: &mut Vec<u8>, back: &mut Vec<u8>, width: usize, height: usize, lobes: &[BoxLobes; 3]) {
    for &lobe in lobes {
        for y in 0..height {
            let range = y * width..(y + 1) * width;
            box_blur_row(&front[range.clone()], &mut back[range], lobe);
        }
        std::mem::swap(front, back);
    }
}

/// Blur an alpha plane in place with a triple box blur per axis.
///
/// `plane` is a row-major `width * height` coverage buffer. A
/// non-positive `blur_radius` leaves the plane untouched. The result is
/// deterministic for identical inputs.
pub fn box_blur_alpha(plane: &mut [u8], width: usize, height: usize, blur_radius: i32) {
    debug_assert_eq!(plane.len(), width * height);
    if blur_radius <= 0 || width == 0 || height == 0 {
        return;
    }

    let lobes = compute_lobes(blur_radius);
    let mut front = plane.to_vec();
    let mut back = vec![0u8; plane.len()];

    // Horizontal passes, then the same passes down the columns via a
    // transpose so every pass walks contiguous rows.
    blur_axis(&mut front, &mut back, width, height, &lobes);
    transpose(&front, &mut back, width, height);
    std::mem::swap(&mut front, &mut back);
    blur_axis(&mut front, &mut back, height, width, &lobes);
    transpose(&front, &mut back, height, width);

    plane.copy_from_slice(&back);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lobes_sum_to_radius() {
        for radius in 1..32 {
            let lobes = compute_lobes(radius);
            let left: i32 = lobes.iter().map(|l| l.left).sum();
            let right: i32 = lobes.iter().map(|l| l.right).sum();
            assert_eq!(left, radius);
            assert_eq!(right, radius);
        }
    }

    #[test]
    fn test_blur_radius_minimum() {
        assert_eq!(blur_radius_for_std_dev(0.0), 2);
        assert!(blur_radius_for_std_dev(8.0) > 2);
    }

    #[test]
    fn test_blur_extent_is_square() {
        let extent = blur_extent(16);
        assert_eq!(extent.width, extent.height);
        assert!(extent.width > 0);
    }

    #[test]
    fn test_row_pass_uniform_interior() {
        let src = [200u8; 32];
        let mut dst = [0u8; 32];
        box_blur_row(&src, &mut dst, BoxLobes { left: 2, right: 2 });
        // Away from the edges the window is fully covered.
        for &v in &dst[2..30] {
            assert_eq!(v, 200);
        }
        // Edges fade because outside samples are transparent.
        assert!(dst[0] < 200);
    }

    #[test]
    fn test_impulse_stays_within_radius() {
        let width = 64;
        let height = 64;
        let blur_radius = 6;
        let mut plane = vec![0u8; width * height];
        plane[32 * width + 32] = 255;

        box_blur_alpha(&mut plane, width, height, blur_radius);

        for y in 0..height {
            for x in 0..width {
                if plane[y * width + x] > 0 {
                    assert!((x as i32 - 32).abs() <= blur_radius);
                    assert!((y as i32 - 32).abs() <= blur_radius);
                }
            }
        }
    }

    #[test]
    fn test_blur_is_deterministic() {
        let width = 48;
        let height = 40;
        let mut a = vec![0u8; width * height];
        for (i, v) in a.iter_mut().enumerate() {
            *v = ((i * 37) % 251) as u8;
        }
        let mut b = a.clone();

        box_blur_alpha(&mut a, width, height, 9);
        box_blur_alpha(&mut b, width, height, 9);
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_radius_is_identity() {
        let width = 8;
        let height = 8;
        let mut plane = vec![17u8; width * height];
        let original = plane.clone();
        box_blur_alpha(&mut plane, width, height, 0);
        assert_eq!(plane, original);
    }
}
