//! Perlin noise implementation.
//!
//! Pure Rust gradient noise in 2D, 3D and 4D for deterministic output. The 3D
//! and 4D variants use Ken Perlin's improved-noise gradient selection.

use super::{lattice, lerp, quintic, Noise2D, Noise3D, Noise4D};
use crate::rng::DeterministicRng;

/// Perlin noise generator.
#[derive(Clone)]
pub struct PerlinNoise {
    /// Permutation table (256 values, doubled for wrapping).
    perm: [u8; 512],
}

impl PerlinNoise {
    /// Gradient vectors for 2D.
    const GRAD2: [[f64; 2]; 8] = [
        [1.0, 0.0],
        [-1.0, 0.0],
        [0.0, 1.0],
        [0.0, -1.0],
        [1.0, 1.0],
        [-1.0, 1.0],
        [1.0, -1.0],
        [-1.0, -1.0],
    ];

    /// Brings raw 4D output back to about [-1, 1]; unscaled peaks reach +-1.07.
    const SCALE4: f64 = 0.94;

    /// Create a new Perlin noise generator with the given seed.
    pub fn new(seed: u32) -> Self {
        Self {
            perm: DeterministicRng::new(seed).permutation_table(),
        }
    }

    #[inline]
    fn p(&self, i: usize) -> usize {
        self.perm[i] as usize
    }

    #[inline]
    fn hash2(&self, x: usize, y: usize) -> usize {
        self.p((x & 255) + self.p(y & 255))
    }

    #[inline]
    fn hash3(&self, x: usize, y: usize, z: usize) -> usize {
        self.p((x & 255) + self.p((y & 255) + self.p(z & 255)))
    }

    #[inline]
    fn hash4(&self, x: usize, y: usize, z: usize, w: usize) -> usize {
        self.p((x & 255) + self.p((y & 255) + self.p((z & 255) + self.p(w & 255))))
    }

    #[inline]
    fn grad2(hash: usize, x: f64, y: f64) -> f64 {
        let g = &Self::GRAD2[hash & 7];
        g[0] * x + g[1] * y
    }

    /// Improved-noise gradient: one of the 12 cube edge directions.
    #[inline]
    fn grad3(hash: usize, x: f64, y: f64, z: f64) -> f64 {
        let h = hash & 15;
        let u = if h < 8 { x } else { y };
        let v = if h < 4 {
            y
        } else if h == 12 || h == 14 {
            x
        } else {
            z
        };
        (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
    }

    /// One of the 32 directions with a single zero component.
    #[inline]
    fn grad4(hash: usize, x: f64, y: f64, z: f64, w: f64) -> f64 {
        let h = hash & 31;
        let a = if h < 24 { x } else { y };
        let b = if h < 16 { y } else { z };
        let c = if h < 8 { z } else { w };
        (if h & 1 == 0 { a } else { -a })
            + (if h & 2 == 0 { b } else { -b })
            + (if h & 4 == 0 { c } else { -c })
    }
}

impl Noise2D for PerlinNoise {
    fn sample2(&self, x: f64, y: f64) -> f64 {
        // Grid cell coordinates
        let (x0, xi) = lattice(x);
        let (y0, yi) = lattice(y);

        // Fractional parts
        let fx = x - x0;
        let fy = y - y0;

        let u = quintic(fx);
        let v = quintic(fy);

        let n00 = Self::grad2(self.hash2(xi, yi), fx, fy);
        let n10 = Self::grad2(self.hash2(xi + 1, yi), fx - 1.0, fy);
        let n01 = Self::grad2(self.hash2(xi, yi + 1), fx, fy - 1.0);
        let n11 = Self::grad2(self.hash2(xi + 1, yi + 1), fx - 1.0, fy - 1.0);

        // Bilinear interpolation
        let nx0 = lerp(n00, n10, u);
        let nx1 = lerp(n01, n11, u);
        lerp(nx0, nx1, v)
    }
}

impl Noise3D for PerlinNoise {
    fn sample3(&self, x: f64, y: f64, z: f64) -> f64 {
        let (x0, xi) = lattice(x);
        let (y0, yi) = lattice(y);
        let (z0, zi) = lattice(z);

        let fx = x - x0;
        let fy = y - y0;
        let fz = z - z0;

        let u = quintic(fx);
        let v = quintic(fy);
        let w = quintic(fz);

        let corner = |dx: usize, dy: usize, dz: usize| {
            let h = self.hash3(xi + dx, yi + dy, zi + dz);
            Self::grad3(h, fx - dx as f64, fy - dy as f64, fz - dz as f64)
        };

        // Trilinear interpolation, x first
        let x00 = lerp(corner(0, 0, 0), corner(1, 0, 0), u);
        let x10 = lerp(corner(0, 1, 0), corner(1, 1, 0), u);
        let x01 = lerp(corner(0, 0, 1), corner(1, 0, 1), u);
        let x11 = lerp(corner(0, 1, 1), corner(1, 1, 1), u);

        let y0v = lerp(x00, x10, v);
        let y1v = lerp(x01, x11, v);
        lerp(y0v, y1v, w)
    }
}

impl Noise4D for PerlinNoise {
    fn sample4(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        let (x0, xi) = lattice(x);
        let (y0, yi) = lattice(y);
        let (z0, zi) = lattice(z);
        let (w0, wi) = lattice(w);

        let fx = x - x0;
        let fy = y - y0;
        let fz = z - z0;
        let fw = w - w0;

        let weights = [quintic(fx), quintic(fy), quintic(fz), quintic(fw)];

        // Corner index bits: 1 = x, 2 = y, 4 = z, 8 = w.
        let mut values = [0.0f64; 16];
        for (corner, value) in values.iter_mut().enumerate() {
            let dx = corner & 1;
            let dy = (corner >> 1) & 1;
            let dz = (corner >> 2) & 1;
            let dw = (corner >> 3) & 1;
            let h = self.hash4(xi + dx, yi + dy, zi + dz, wi + dw);
            *value = Self::grad4(
                h,
                fx - dx as f64,
                fy - dy as f64,
                fz - dz as f64,
                fw - dw as f64,
            );
        }

        // Collapse one axis at a time.
        let mut len = 16;
        for t in weights {
            len /= 2;
            for i in 0..len {
                values[i] = lerp(values[2 * i], values[2 * i + 1], t);
            }
        }
        values[0] * Self::SCALE4
    }
}
