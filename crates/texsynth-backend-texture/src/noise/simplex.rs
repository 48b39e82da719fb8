//! Simplex noise implementation.
//!
//! Pure Rust implementation of 2D, 3D and 4D simplex noise based on Stefan
//! Gustavson's reference implementation, adapted for deterministic output.

use super::{lattice, Noise2D, Noise3D, Noise4D};
use crate::rng::DeterministicRng;

/// Simplex noise generator.
#[derive(Clone)]
pub struct SimplexNoise {
    /// Permutation table (256 values, doubled for wrapping).
    perm: [u8; 512],
}

impl SimplexNoise {
    /// Skewing factor for 2D.
    const F2: f64 = 0.3660254037844386; // (sqrt(3) - 1) / 2
    /// Unskewing factor for 2D.
    const G2: f64 = 0.21132486540518713; // (3 - sqrt(3)) / 6

    const F3: f64 = 1.0 / 3.0;
    const G3: f64 = 1.0 / 6.0;

    const F4: f64 = 0.30901699437494745; // (sqrt(5) - 1) / 4
    const G4: f64 = 0.1381966011250105; // (5 - sqrt(5)) / 20

    /// Gradient vectors for 2D.
    const GRAD2: [[f64; 2]; 12] = [
        [1.0, 1.0],
        [-1.0, 1.0],
        [1.0, -1.0],
        [-1.0, -1.0],
        [1.0, 0.0],
        [-1.0, 0.0],
        [1.0, 0.0],
        [-1.0, 0.0],
        [0.0, 1.0],
        [0.0, -1.0],
        [0.0, 1.0],
        [0.0, -1.0],
    ];

    /// Cube edge midpoints.
    const GRAD3: [[f64; 3]; 12] = [
        [1.0, 1.0, 0.0],
        [-1.0, 1.0, 0.0],
        [1.0, -1.0, 0.0],
        [-1.0, -1.0, 0.0],
        [1.0, 0.0, 1.0],
        [-1.0, 0.0, 1.0],
        [1.0, 0.0, -1.0],
        [-1.0, 0.0, -1.0],
        [0.0, 1.0, 1.0],
        [0.0, -1.0, 1.0],
        [0.0, 1.0, -1.0],
        [0.0, -1.0, -1.0],
    ];

    /// Tesseract edge midpoints.
    const GRAD4: [[f64; 4]; 32] = [
        [0.0, 1.0, 1.0, 1.0],
        [0.0, 1.0, 1.0, -1.0],
        [0.0, 1.0, -1.0, 1.0],
        [0.0, 1.0, -1.0, -1.0],
        [0.0, -1.0, 1.0, 1.0],
        [0.0, -1.0, 1.0, -1.0],
        [0.0, -1.0, -1.0, 1.0],
        [0.0, -1.0, -1.0, -1.0],
        [1.0, 0.0, 1.0, 1.0],
        [1.0, 0.0, 1.0, -1.0],
        [1.0, 0.0, -1.0, 1.0],
        [1.0, 0.0, -1.0, -1.0],
        [-1.0, 0.0, 1.0, 1.0],
        [-1.0, 0.0, 1.0, -1.0],
        [-1.0, 0.0, -1.0, 1.0],
        [-1.0, 0.0, -1.0, -1.0],
        [1.0, 1.0, 0.0, 1.0],
        [1.0, 1.0, 0.0, -1.0],
        [1.0, -1.0, 0.0, 1.0],
        [1.0, -1.0, 0.0, -1.0],
        [-1.0, 1.0, 0.0, 1.0],
        [-1.0, 1.0, 0.0, -1.0],
        [-1.0, -1.0, 0.0, 1.0],
        [-1.0, -1.0, 0.0, -1.0],
        [1.0, 1.0, 1.0, 0.0],
        [1.0, 1.0, -1.0, 0.0],
        [1.0, -1.0, 1.0, 0.0],
        [1.0, -1.0, -1.0, 0.0],
        [-1.0, 1.0, 1.0, 0.0],
        [-1.0, 1.0, -1.0, 0.0],
        [-1.0, -1.0, 1.0, 0.0],
        [-1.0, -1.0, -1.0, 0.0],
    ];

    /// Create a new simplex noise generator with the given seed.
    pub fn new(seed: u32) -> Self {
        Self {
            perm: DeterministicRng::new(seed).permutation_table(),
        }
    }

    #[inline]
    fn p(&self, i: usize) -> usize {
        self.perm[i] as usize
    }

    /// Compute dot product of gradient and distance vector.
    #[inline]
    fn grad2(hash: usize, x: f64, y: f64) -> f64 {
        let g = &Self::GRAD2[hash % 12];
        g[0] * x + g[1] * y
    }

    #[inline]
    fn grad3(hash: usize, x: f64, y: f64, z: f64) -> f64 {
        let g = &Self::GRAD3[hash % 12];
        g[0] * x + g[1] * y + g[2] * z
    }

    #[inline]
    fn grad4(hash: usize, x: f64, y: f64, z: f64, w: f64) -> f64 {
        let g = &Self::GRAD4[hash % 32];
        g[0] * x + g[1] * y + g[2] * z + g[3] * w
    }

    /// Radial falloff contribution of one corner.
    #[inline]
    fn falloff(radius_sq: f64, dist_sq: f64, dot: f64) -> f64 {
        let t = radius_sq - dist_sq;
        if t < 0.0 {
            0.0
        } else {
            let t2 = t * t;
            t2 * t2 * dot
        }
    }
}

impl Noise2D for SimplexNoise {
    fn sample2(&self, x: f64, y: f64) -> f64 {
        // Skew the input space to determine which simplex cell we're in
        let s = (x + y) * Self::F2;
        let (i, ii) = lattice(x + s);
        let (j, jj) = lattice(y + s);

        // Unskew the cell origin back to (x, y) space
        let t = (i + j) * Self::G2;
        let x0 = x - (i - t);
        let y0 = y - (j - t);

        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f64 + Self::G2;
        let y1 = y0 - j1 as f64 + Self::G2;
        let x2 = x0 - 1.0 + 2.0 * Self::G2;
        let y2 = y0 - 1.0 + 2.0 * Self::G2;

        let gi0 = self.p(ii + self.p(jj));
        let gi1 = self.p(ii + i1 + self.p(jj + j1));
        let gi2 = self.p(ii + 1 + self.p(jj + 1));

        let n0 = Self::falloff(0.5, x0 * x0 + y0 * y0, Self::grad2(gi0, x0, y0));
        let n1 = Self::falloff(0.5, x1 * x1 + y1 * y1, Self::grad2(gi1, x1, y1));
        let n2 = Self::falloff(0.5, x2 * x2 + y2 * y2, Self::grad2(gi2, x2, y2));

        // Scale to return values in the interval [-1, 1]
        70.0 * (n0 + n1 + n2)
    }
}

impl Noise3D for SimplexNoise {
    fn sample3(&self, x: f64, y: f64, z: f64) -> f64 {
        let s = (x + y + z) * Self::F3;
        let (i, ii) = lattice(x + s);
        let (j, jj) = lattice(y + s);
        let (k, kk) = lattice(z + s);

        let t = (i + j + k) * Self::G3;
        let x0 = x - (i - t);
        let y0 = y - (j - t);
        let z0 = z - (k - t);

        // Offsets of the second and third corners, picked by coordinate order.
        let ((i1, j1, k1), (i2, j2, k2)) = if x0 >= y0 {
            if y0 >= z0 {
                ((1, 0, 0), (1, 1, 0))
            } else if x0 >= z0 {
                ((1, 0, 0), (1, 0, 1))
            } else {
                ((0, 0, 1), (1, 0, 1))
            }
        } else if y0 < z0 {
            ((0, 0, 1), (0, 1, 1))
        } else if x0 < z0 {
            ((0, 1, 0), (0, 1, 1))
        } else {
            ((0, 1, 0), (1, 1, 0))
        };

        let x1 = x0 - i1 as f64 + Self::G3;
        let y1 = y0 - j1 as f64 + Self::G3;
        let z1 = z0 - k1 as f64 + Self::G3;
        let x2 = x0 - i2 as f64 + 2.0 * Self::G3;
        let y2 = y0 - j2 as f64 + 2.0 * Self::G3;
        let z2 = z0 - k2 as f64 + 2.0 * Self::G3;
        let x3 = x0 - 1.0 + 3.0 * Self::G3;
        let y3 = y0 - 1.0 + 3.0 * Self::G3;
        let z3 = z0 - 1.0 + 3.0 * Self::G3;

        let gi0 = self.p(ii + self.p(jj + self.p(kk)));
        let gi1 = self.p(ii + i1 + self.p(jj + j1 + self.p(kk + k1)));
        let gi2 = self.p(ii + i2 + self.p(jj + j2 + self.p(kk + k2)));
        let gi3 = self.p(ii + 1 + self.p(jj + 1 + self.p(kk + 1)));

        let n0 = Self::falloff(
            0.6,
            x0 * x0 + y0 * y0 + z0 * z0,
            Self::grad3(gi0, x0, y0, z0),
        );
        let n1 = Self::falloff(
            0.6,
            x1 * x1 + y1 * y1 + z1 * z1,
            Self::grad3(gi1, x1, y1, z1),
        );
        let n2 = Self::falloff(
            0.6,
            x2 * x2 + y2 * y2 + z2 * z2,
            Self::grad3(gi2, x2, y2, z2),
        );
        let n3 = Self::falloff(
            0.6,
            x3 * x3 + y3 * y3 + z3 * z3,
            Self::grad3(gi3, x3, y3, z3),
        );

        32.0 * (n0 + n1 + n2 + n3)
    }
}

impl Noise4D for SimplexNoise {
    fn sample4(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        let s = (x + y + z + w) * Self::F4;
        let (i, ii) = lattice(x + s);
        let (j, jj) = lattice(y + s);
        let (k, kk) = lattice(z + s);
        let (l, ll) = lattice(w + s);

        let t = (i + j + k + l) * Self::G4;
        let d0 = [x - (i - t), y - (j - t), z - (k - t), w - (l - t)];

        // Rank each coordinate by magnitude to find the simplex traversal order.
        let mut rank = [0usize; 4];
        for a in 0..4 {
            for b in (a + 1)..4 {
                if d0[a] > d0[b] {
                    rank[a] += 1;
                } else {
                    rank[b] += 1;
                }
            }
        }

        let base = [ii, jj, kk, ll];

        let mut total = 0.0;
        // Corner c steps along every axis whose rank is at least 4 - c.
        for corner in 0..5usize {
            let step: [usize; 4] = std::array::from_fn(|axis| {
                if corner == 0 {
                    0
                } else {
                    usize::from(rank[axis] >= 4 - corner)
                }
            });
            let d: [f64; 4] = std::array::from_fn(|axis| {
                d0[axis] - step[axis] as f64 + corner as f64 * Self::G4
            });

            let gi = self.p(
                base[0]
                    + step[0]
                    + self.p(
                        base[1] + step[1] + self.p(base[2] + step[2] + self.p(base[3] + step[3])),
                    ),
            );
            let dist_sq = d.iter().map(|v| v * v).sum::<f64>();
            total += Self::falloff(0.6, dist_sq, Self::grad4(gi, d[0], d[1], d[2], d[3]));
        }

        27.0 * total
    }
}
