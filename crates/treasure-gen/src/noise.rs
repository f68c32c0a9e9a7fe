use fastnoise_lite::{FastNoiseLite, FractalType, NoiseType};
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NoiseKind {
    #[default]
    Perlin,
    OpenSimplex2,
    OpenSimplex2s,
    Value,
    ValueCubic,
}

impl NoiseKind {
    fn noise_type(self) -> NoiseType {
        match self {
            NoiseKind::Perlin => NoiseType::Perlin,
            NoiseKind::OpenSimplex2 => NoiseType::OpenSimplex2,
            NoiseKind::OpenSimplex2s => NoiseType::OpenSimplex2S,
            NoiseKind::Value => NoiseType::Value,
            NoiseKind::ValueCubic => NoiseType::ValueCubic,
        }
    }
}

/// Detail settings of the coherent noise. Defaults match a 5-octave field with 0.5 falloff.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseParams {
    pub kind: NoiseKind,
    pub octaves: u8,
    pub falloff: f32,
    pub lacunarity: f32,
    /// Stretch applied around 0.5 after remapping; FBm rarely reaches its bounds.
    pub contrast: f32,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            kind: NoiseKind::Perlin,
            octaves: 5,
            falloff: 0.5,
            lacunarity: 2.0,
            contrast: DEFAULT_CONTRAST,
        }
    }
}

/// Widens 5-octave FBm (about [0.2, 0.8] after remapping) to roughly [0.05, 0.95].
pub const DEFAULT_CONTRAST: f32 = 1.5;

/// Maps raw noise in [-1,1] to a height in [0,1].
#[inline]
pub fn remap(raw: f32, contrast: f32) -> f32 {
    (0.5 + raw * 0.5 * contrast).clamp(0.0, 1.0)
}

/// Anything that yields a height in [0,1] for already-scaled noise coordinates.
pub trait HeightSource {
    fn height(&self, x: f32, y: f32) -> f32;
}

impl<F: Fn(f32, f32) -> f32> HeightSource for F {
    fn height(&self, x: f32, y: f32) -> f32 {
        self(x, y)
    }
}

/// Seeded FastNoiseLite field remapped from [-1,1] to [0,1].
pub struct NoiseSampler {
    noise: FastNoiseLite,
    contrast: f32,
}

impl NoiseSampler {
    pub fn new(seed: i32, params: &NoiseParams) -> Self {
        let mut noise = FastNoiseLite::with_seed(seed);
        noise.set_noise_type(Some(params.kind.noise_type()));
        // Coordinates arrive pre-scaled.
        noise.set_frequency(Some(1.0));
        if params.octaves > 1 {
            noise.set_fractal_type(Some(FractalType::FBm));
            noise.set_fractal_octaves(Some(i32::from(params.octaves)));
            noise.set_fractal_gain(Some(params.falloff));
            noise.set_fractal_lacunarity(Some(params.lacunarity));
        } else {
            noise.set_fractal_type(Some(FractalType::None));
        }
        Self {
            noise,
            contrast: params.contrast,
        }
    }
}

impl HeightSource for NoiseSampler {
    #[inline]
    fn height(&self, x: f32, y: f32) -> f32 {
        remap(self.noise.get_noise_2d(x, y), self.contrast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remap_is_centered_and_clamped() {
        assert_eq!(remap(0.0, DEFAULT_CONTRAST), 0.5);
        assert_eq!(remap(-1.0, 1.0), 0.0);
        assert_eq!(remap(1.0, 1.0), 1.0);
        assert!((remap(-0.4, 1.5) - 0.2).abs() < 1e-6);
        assert_eq!(remap(0.9, 1.5), 1.0);
    }

    #[test]
    fn contrast_scales_distance_from_midpoint() {
        let flat = NoiseParams {
            contrast: 1.0,
            ..NoiseParams::default()
        };
        let a = NoiseSampler::new(7, &flat);
        let b = NoiseSampler::new(7, &NoiseParams::default());
        for i in 0..50 {
            let (x, y) = (i as f32 * 0.37, i as f32 * 0.11);
            let expected = (0.5 + (a.height(x, y) - 0.5) * DEFAULT_CONTRAST).clamp(0.0, 1.0);
            assert!((b.height(x, y) - expected).abs() < 1e-5);
        }
    }
}
