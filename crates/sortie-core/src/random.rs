//! Injectable randomness.
//!
//! Everything that draws random numbers takes a `RandomSource` so tests can
//! seed or script the draws. Any `rand::Rng` is a `RandomSource`; the
//! simulation defaults to a seeded `ChaCha8Rng`.

use rand::Rng;

pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn random(&mut self) -> f32;

    /// Uniform draw in `[min, max)`; returns `min` when the range is empty.
    fn between(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        min + (max - min) * self.random()
    }

    /// Uniform draw in `[min, max)` at `f64` range, for millisecond spans
    /// too wide for `f32`. Returns `min` when the range is empty.
    fn between_f64(&mut self, min: f64, max: f64) -> f64 {
        if max <= min {
            return min;
        }
        let drawn = min + (max - min) * f64::from(self.random());
        drawn.min(max)
    }

    /// Uniform integer draw in `[min, max]`; returns `min` when `max < min`.
    fn between_inclusive(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        let span = (max - min + 1) as f32;
        let offset = (self.random() * span) as u32;
        min + offset.min(max - min)
    }

    /// Uniform index into a collection of `len` items.
    fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let idx = (self.random() * len as f32) as usize;
        Some(idx.min(len - 1))
    }
}

impl<R: Rng> RandomSource for R {
    fn random(&mut self) -> f32 {
        self.gen::<f32>()
    }

    fn between(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        self.gen_range(min..max)
    }

    fn between_inclusive(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        self.gen_range(min..=max)
    }

    fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.gen_range(0..len))
    }
}
