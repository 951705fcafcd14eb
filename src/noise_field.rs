//! Value-noise synthesis with multi-octave turbulence.
//!
//! A field is built in two steps: a fresh grid of uniform random lattice
//! values, then a per-cell turbulence sum that samples that grid at
//! halving zoom levels through bilinear interpolation. Lattice lookups
//! wrap toroidally, so the field tiles seamlessly.

use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{GeneratorError, Result};
use crate::tilemap::Tilemap;

/// A synthesized noise field. Values lie in `[0, 256)` and cluster around 128.
pub type NoiseField = Tilemap<f64>;

/// Lattice values are drawn as integers in `0..=LATTICE_STEPS` and scaled into `[0, 1]`.
const LATTICE_STEPS: u32 = 1000;

/// Output scale applied after normalizing by the starting octave size.
const TURBULENCE_SCALE: f64 = 128.0;

/// Parameters for one noise field
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoiseParams {
    /// Lattice cells advanced per output cell before zooming
    pub frequency: f64,
    /// Starting zoom size; halved until it drops below 1
    pub octaves: f64,
}

impl NoiseParams {
    pub fn new(frequency: f64, octaves: f64) -> Self {
        Self { frequency, octaves }
    }

    pub fn validate(&self) -> Result<()> {
        let frequency_ok = self.frequency.is_finite() && self.frequency > 0.0;
        let octaves_ok = self.octaves.is_finite() && self.octaves >= 1.0;
        if frequency_ok && octaves_ok {
            Ok(())
        } else {
            Err(GeneratorError::InvalidNoiseParams {
                frequency: self.frequency,
                octaves: self.octaves,
            })
        }
    }
}

/// Uniform random lattice backing a single `generate_noise` call.
pub struct RawNoiseGrid {
    lattice: Tilemap<f64>,
}

impl RawNoiseGrid {
    /// Fill a `width` x `height` lattice with independent values in `[0, 1]`.
    pub fn random<R: Rng>(width: usize, height: usize, rng: &mut R) -> Self {
        let mut lattice = Tilemap::new_with(width, height, 0.0);
        for (_, _, v) in lattice.iter_mut() {
            *v = rng.gen_range(0..=LATTICE_STEPS) as f64 / LATTICE_STEPS as f64;
        }
        Self { lattice }
    }

    #[cfg(test)]
    fn from_lattice(lattice: Tilemap<f64>) -> Self {
        Self { lattice }
    }

    /// Bilinear interpolation between the four lattice points around `(x, y)`.
    ///
    /// Lattice indices wrap modulo the grid size in both axes, so any finite
    /// coordinate (including negative ones) is valid.
    pub fn smooth_noise(&self, x: f64, y: f64) -> f64 {
        let w = self.lattice.width as i64;
        let h = self.lattice.height as i64;

        let fx = x - x.floor();
        let fy = y - y.floor();

        let x0 = (x.floor() as i64).rem_euclid(w) as usize;
        let y0 = (y.floor() as i64).rem_euclid(h) as usize;
        let x1 = (x0 + 1) % w as usize;
        let y1 = (y0 + 1) % h as usize;

        let v00 = *self.lattice.get(x0, y0);
        let v10 = *self.lattice.get(x1, y0);
        let v01 = *self.lattice.get(x0, y1);
        let v11 = *self.lattice.get(x1, y1);

        let top = v00 * (1.0 - fx) + v10 * fx;
        let bottom = v01 * (1.0 - fx) + v11 * fx;
        top * (1.0 - fy) + bottom * fy
    }

    /// Sum `smooth_noise(x / size, y / size) * size` for `size` starting at
    /// `initial_size` and halving while it stays >= 1, then normalize.
    ///
    /// Coarse zoom levels dominate the sum; each finer level adds half the
    /// weight of the one before it.
    pub fn turbulence(&self, x: f64, y: f64, initial_size: f64) -> f64 {
        let mut value = 0.0;
        let mut size = initial_size;

        while size >= 1.0 {
            value += self.smooth_noise(x / size, y / size) * size;
            size /= 2.0;
        }

        TURBULENCE_SCALE * value / initial_size
    }
}

/// Generate a `width` x `height` turbulence field.
///
/// Each call builds and drops its own lattice, so two calls never share
/// noise even with identical parameters.
pub fn generate_noise<R: Rng>(
    width: usize,
    height: usize,
    params: &NoiseParams,
    rng: &mut R,
) -> Result<NoiseField> {
    let cells = match width.checked_mul(height) {
        Some(cells) if cells > 0 => cells,
        _ => return Err(GeneratorError::InvalidDimensions { width, height }),
    };
    params.validate()?;

    let raw = RawNoiseGrid::random(width, height, rng);
    let frequency = params.frequency;
    let octaves = params.octaves;

    // Lattice is filled up front, so the parallel pass is order-independent.
    let data: Vec<f64> = (0..cells)
        .into_par_iter()
        .map(|idx| {
            let x = (idx % width) as f64;
            let y = (idx / width) as f64;
            raw.turbulence(x * frequency, y * frequency, octaves)
        })
        .collect();

    let field = Tilemap::from_vec(width, height, data)
        .ok_or(GeneratorError::InvalidDimensions { width, height })?;

    let (min_v, max_v) = field.min_max();
    log::debug!(
        "Noise field {}x{} (frequency {}, octaves {}): range {:.2} to {:.2}",
        width, height, frequency, octaves, min_v, max_v
    );

    Ok(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_grid(width: usize, height: usize, seed: u64) -> RawNoiseGrid {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        RawNoiseGrid::random(width, height, &mut rng)
    }

    #[test]
    fn test_lattice_values_in_unit_range() {
        let grid = test_grid(16, 9, 1);
        for (_, _, &v) in grid.lattice.iter() {
            assert!((0.0..=1.0).contains(&v));
            // Resolution is 1/1000
            assert!((v * 1000.0 - (v * 1000.0).round()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_smooth_noise_hits_lattice_points() {
        let grid = test_grid(8, 8, 2);
        for (x, y, &v) in grid.lattice.iter() {
            assert!((grid.smooth_noise(x as f64, y as f64) - v).abs() < 1e-12);
        }
    }

    #[test]
    fn test_smooth_noise_bilinear_midpoint() {
        let mut lattice = Tilemap::new_with(2, 2, 0.0);
        lattice.set(1, 0, 1.0);
        lattice.set(0, 1, 0.5);
        lattice.set(1, 1, 0.5);
        let grid = RawNoiseGrid::from_lattice(lattice);
        // (0 + 1 + 0.5 + 0.5) / 4
        assert!((grid.smooth_noise(0.5, 0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_smooth_noise_wraps_toroidally() {
        let grid = test_grid(7, 5, 3);
        let eps = 1e-9;
        for i in 0..20 {
            let y = i as f64 * 0.37;
            let near_right = grid.smooth_noise(7.0 - eps, y);
            let near_left = grid.smooth_noise(-eps, y);
            assert!((near_right - near_left).abs() < 1e-6);

            let x = i as f64 * 0.41;
            let near_bottom = grid.smooth_noise(x, 5.0 - eps);
            let near_top = grid.smooth_noise(x, -eps);
            assert!((near_bottom - near_top).abs() < 1e-6);
        }
        // Crossing the seam is continuous too
        let before = grid.smooth_noise(7.0 - eps, 1.3);
        let after = grid.smooth_noise(7.0 + eps, 1.3);
        assert!((before - after).abs() < 1e-6);
    }

    #[test]
    fn test_turbulence_bounded_for_large_octaves() {
        let grid = test_grid(12, 12, 4);
        for &octaves in &[1.0, 2.0, 3.0, 66.0, 200.0, 1000.0] {
            for i in 0..12 {
                let v = grid.turbulence(i as f64 * 10.0, i as f64 * 7.0, octaves);
                assert!(v.is_finite());
                assert!(v >= 0.0 && v < 256.0, "turbulence {} out of range", v);
            }
        }
    }

    #[test]
    fn test_turbulence_single_octave_scales_noise() {
        let grid = test_grid(6, 6, 5);
        let v = grid.turbulence(2.0, 3.0, 1.0);
        assert!((v - 128.0 * *grid.lattice.get(2, 3)).abs() < 1e-9);
    }

    #[test]
    fn test_generate_noise_dimensions() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let field = generate_noise(13, 4, &NoiseParams::new(10.0, 200.0), &mut rng).unwrap();
        assert_eq!(field.width, 13);
        assert_eq!(field.height, 4);
        for (_, _, &v) in field.iter() {
            assert!(v.is_finite() && v >= 0.0 && v < 256.0);
        }
    }

    #[test]
    fn test_generate_noise_rejects_empty() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let params = NoiseParams::new(10.0, 200.0);
        assert!(matches!(
            generate_noise(0, 5, &params, &mut rng),
            Err(GeneratorError::InvalidDimensions { width: 0, height: 5 })
        ));
        assert!(generate_noise(5, 0, &params, &mut rng).is_err());
    }

    #[test]
    fn test_generate_noise_rejects_overflowing_size() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let params = NoiseParams::new(10.0, 200.0);
        assert!(matches!(
            generate_noise(usize::MAX, 2, &params, &mut rng),
            Err(GeneratorError::InvalidDimensions { height: 2, .. })
        ));
    }

    #[test]
    fn test_generate_noise_rejects_bad_params() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        assert!(generate_noise(4, 4, &NoiseParams::new(0.0, 10.0), &mut rng).is_err());
        assert!(generate_noise(4, 4, &NoiseParams::new(5.0, 0.5), &mut rng).is_err());
        assert!(generate_noise(4, 4, &NoiseParams::new(f64::NAN, 10.0), &mut rng).is_err());
    }

    #[test]
    fn test_consecutive_calls_are_independent() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let params = NoiseParams::new(5.0, 66.0);
        let a = generate_noise(16, 16, &params, &mut rng).unwrap();
        let b = generate_noise(16, 16, &params, &mut rng).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_same_rng_state_same_field() {
        let params = NoiseParams::new(10.0, 200.0);
        let a = generate_noise(9, 9, &params, &mut ChaCha8Rng::seed_from_u64(10)).unwrap();
        let b = generate_noise(9, 9, &params, &mut ChaCha8Rng::seed_from_u64(10)).unwrap();
        assert_eq!(a, b);
    }
}
