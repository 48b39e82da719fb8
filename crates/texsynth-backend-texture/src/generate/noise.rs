//! Noise field sampler.

use std::f64::consts::TAU;

use texsynth_spec::validation::validate_noise;
use texsynth_spec::{NoiseKind, NoiseSize, NoiseSpec};

use super::{check, GenerateError};
use crate::buffer::TextureBuffer;
use crate::color::Color;
use crate::noise::{to_unit, Noise2D, Noise3D, Noise4D, PerlinNoise, SimplexNoise};
use crate::rng::{resolve_seed, DeterministicRng};

/// Channel values used when a channel is not generated: RGB 0, alpha opaque.
const INACTIVE: [f64; 4] = [0.0, 0.0, 0.0, 1.0];

/// Scalar function behind every channel.
enum Field {
    Perlin(PerlinNoise),
    Simplex(SimplexNoise),
    Random(DeterministicRng),
}

impl Field {
    fn new(kind: NoiseKind, seed: u32) -> Self {
        match kind {
            NoiseKind::Perlin => Field::Perlin(PerlinNoise::new(
                DeterministicRng::derive_stream_seed(seed, "perlin"),
            )),
            NoiseKind::Simplex => Field::Simplex(SimplexNoise::new(
                DeterministicRng::derive_stream_seed(seed, "simplex"),
            )),
            NoiseKind::Random => Field::Random(DeterministicRng::new(seed)),
        }
    }

    fn sample2(&mut self, x: f64, y: f64) -> f64 {
        match self {
            Field::Perlin(n) => to_unit(n.sample2(x, y)),
            Field::Simplex(n) => to_unit(n.sample2(x, y)),
            Field::Random(rng) => rng.gen_f64(),
        }
    }

    fn sample3(&mut self, x: f64, y: f64, z: f64) -> f64 {
        match self {
            Field::Perlin(n) => to_unit(n.sample3(x, y, z)),
            Field::Simplex(n) => to_unit(n.sample3(x, y, z)),
            Field::Random(rng) => rng.gen_f64(),
        }
    }

    fn sample4(&mut self, p: [f64; 4]) -> f64 {
        match self {
            Field::Perlin(n) => to_unit(n.sample4(p[0], p[1], p[2], p[3])),
            Field::Simplex(n) => to_unit(n.sample4(p[0], p[1], p[2], p[3])),
            Field::Random(rng) => rng.gen_f64(),
        }
    }
}

/// Map a normalized texture coordinate onto two circles in 4D.
///
/// `s` and `t` are fractions of the texture width and height. Each circle has
/// circumference `scale`, so one trip across the texture covers the same
/// noise distance as `scale` lattice cells, and `s = 1` meets `s = 0`.
pub fn wrap_embedding(s: f64, t: f64, scale: f64) -> [f64; 4] {
    let radius = scale / TAU;
    let origin = -scale * 0.5;
    [
        origin + (s * TAU).cos() * radius,
        origin + (t * TAU).cos() * radius,
        origin + (s * TAU).sin() * radius,
        origin + (t * TAU).sin() * radius,
    ]
}

/// Samples a [`NoiseSpec`] one channel at a time.
///
/// Odd channels swap their coordinate axes so channels of the same field do
/// not look alike: `(x, y)` / `(y, x)` in 2D and `(x, y, z)` / `(z, y, x)` in 3D.
pub struct NoiseSampler {
    field: Field,
    seed: u32,
    size: NoiseSize,
    channels: usize,
    scale: [f64; 4],
    offset: [f64; 4],
    wrap: bool,
}

impl NoiseSampler {
    /// Validate `spec` and build its noise field.
    ///
    /// A missing seed is drawn at random; [`NoiseSampler::seed`] reports it.
    pub fn new(spec: &NoiseSpec) -> Result<Self, GenerateError> {
        check(validate_noise(spec))?;
        let seed = resolve_seed(spec.seed);
        Ok(Self {
            field: Field::new(spec.noise, seed),
            seed,
            size: spec.size,
            channels: spec.channels as usize,
            scale: spec.scale,
            offset: spec.offset,
            wrap: spec.wrap,
        })
    }

    /// The seed in use.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Value of `channel` at a 2D pixel coordinate.
    ///
    /// Coordinates are continuous, so a wrapping field can be sampled one
    /// pixel past the edge.
    pub fn sample_2d(&mut self, channel: usize, x: f64, y: f64) -> f64 {
        let (width, height, _) = self.size.extent();
        let (w, h) = (width as f64, height as f64);
        let swap = channel % 2 == 1;
        let (a, b) = if swap { (y, x) } else { (x, y) };
        let offset = self.offset[channel];
        let scale = self.scale[channel];

        if self.wrap {
            let (span_a, span_b) = if swap { (h, w) } else { (w, h) };
            let p = wrap_embedding((a + offset) / span_a, (b + offset) / span_b, scale);
            self.field.sample4(p)
        } else {
            let scaler = scale / w.max(h);
            self.field.sample2((a + offset) * scaler, (b + offset) * scaler)
        }
    }

    /// Value of `channel` at a 3D voxel coordinate.
    pub fn sample_3d(&mut self, channel: usize, x: f64, y: f64, z: f64) -> f64 {
        let (w, h, d) = self.size.extent();
        let max_dim = w.max(h).max(d) as f64;
        let (a, b, c) = if channel % 2 == 1 { (z, y, x) } else { (x, y, z) };
        let offset = self.offset[channel];
        let scaler = self.scale[channel] / max_dim;
        self.field
            .sample3((a + offset) * scaler, (b + offset) * scaler, (c + offset) * scaler)
    }

    /// Fill a buffer, visiting samples in `z`, `y`, `x` order with channels
    /// ascending.
    pub fn generate(mut self) -> TextureBuffer {
        let (w, h, d) = self.size.extent();
        let volume = matches!(self.size, NoiseSize::Volume(_));
        let mut buffer = if volume {
            TextureBuffer::new_volume(w, h, d, Color::black())
        } else {
            TextureBuffer::new(w, h, Color::black())
        };

        for z in 0..d {
            for y in 0..h {
                for x in 0..w {
                    let mut px = INACTIVE;
                    for (c, value) in px.iter_mut().enumerate().take(self.channels) {
                        *value = if volume {
                            self.sample_3d(c, x as f64, y as f64, z as f64)
                        } else {
                            self.sample_2d(c, x as f64, y as f64)
                        };
                    }
                    buffer.set3(x, y, z, Color::from_array(px));
                }
            }
        }

        log::debug!(
            "generated {}x{}x{} {} noise, {} channel(s), seed {}",
            w,
            h,
            d,
            match self.field {
                Field::Perlin(_) => "perlin",
                Field::Simplex(_) => "simplex",
                Field::Random(_) => "random",
            },
            self.channels,
            self.seed
        );
        buffer
    }
}

/// Generate a noise texture or volume.
pub fn generate_noise(spec: &NoiseSpec) -> Result<TextureBuffer, GenerateError> {
    Ok(NoiseSampler::new(spec)?.generate())
}
