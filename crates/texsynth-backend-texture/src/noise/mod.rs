//! Gradient noise primitives.
//!
//! Pure Rust Perlin and simplex noise in two, three and four dimensions. Each
//! generator is built from a seed-shuffled permutation table, so output is
//! deterministic for a given seed. Raw output is roughly in [-1, 1].

mod perlin;
mod simplex;

pub use perlin::PerlinNoise;
pub use simplex::SimplexNoise;

/// Trait for 2D noise generators.
pub trait Noise2D {
    /// Sample the noise at a given 2D coordinate.
    fn sample2(&self, x: f64, y: f64) -> f64;
}

/// Trait for 3D noise generators.
pub trait Noise3D {
    /// Sample the noise at a given 3D coordinate.
    fn sample3(&self, x: f64, y: f64, z: f64) -> f64;
}

/// Trait for 4D noise generators.
///
/// Four dimensions are needed for seamless 2D tiling, where each image axis
/// is embedded as a circle.
pub trait Noise4D {
    /// Sample the noise at a given 4D coordinate.
    fn sample4(&self, x: f64, y: f64, z: f64, w: f64) -> f64;
}

/// Remap raw noise from [-1, 1] to [0, 1].
///
/// Raw output is not clamped, so rare peaks slightly past +-1 map a little
/// outside [0, 1]. Standard-range encoding clamps; extended-range output
/// keeps them.
#[inline]
pub fn to_unit(n: f64) -> f64 {
    (n + 1.0) * 0.5
}

/// Quintic interpolation (smoother than smoothstep).
#[inline]
pub fn quintic(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Lattice cell containing `x`: the cell origin and its permutation-table
/// index in `0..256`.
///
/// The index is reduced before leaving floating point, so any finite
/// coordinate stays in range.
#[inline]
pub(crate) fn lattice(x: f64) -> (f64, usize) {
    let origin = x.floor();
    (origin, origin.rem_euclid(256.0) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_unit() {
        assert_eq!(to_unit(-1.0), 0.0);
        assert_eq!(to_unit(0.0), 0.5);
        assert_eq!(to_unit(1.0), 1.0);
    }

    #[test]
    fn test_quintic_endpoints() {
        assert_eq!(quintic(0.0), 0.0);
        assert_eq!(quintic(1.0), 1.0);
        assert!((quintic(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_lattice() {
        assert_eq!(lattice(1.5), (1.0, 1));
        assert_eq!(lattice(-1.5), (-2.0, 254));
        assert_eq!(lattice(-2.0), (-2.0, 254));
        assert_eq!(lattice(0.0), (0.0, 0));
        assert_eq!(lattice(256.25), (256.0, 0));
    }

    #[test]
    fn test_lattice_far_from_origin() {
        assert_eq!(lattice(3.0e9), (3.0e9, 0));
        assert_eq!(lattice(-3.0e9 + 0.5), (-3.0e9, 0));
        assert_eq!(lattice(3.0e9 + 7.0), (3.0e9 + 7.0, 7));
        assert!(lattice(1.0e300).1 < 256);
        assert!(lattice(-1.0e300).1 < 256);
    }
}
