//! Random shapes with replay tokens.
//!
//! Purpose
//! - Provide a small, deterministic shape sampler for randomized tests and
//!   benches. Draws are parameterizable, reproducible, and always satisfy
//!   the construction invariants (finite, non-negative dimensions).
//!
//! Model
//! - Each draw picks a variant uniformly, then dimensions uniformly from
//!   the configured range. Determinism uses a replay token `(seed, index)`
//!   mixed into a single RNG.
//!
//! Code cross-refs: `shape::Shape`

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::shape::{Shape, ShapeError};

/// Shape sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct ShapeCfg {
    /// Smallest dimension drawn. Clamped to >= 0.
    pub dim_min: f64,
    /// Largest dimension drawn. Clamped to >= `dim_min`.
    pub dim_max: f64,
}

impl Default for ShapeCfg {
    fn default() -> Self {
        Self {
            dim_min: 0.1,
            dim_max: 10.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random shape. The same `(cfg, tok)` pair always yields the same
/// shape; bump `tok.index` to stream independent draws under one seed.
pub fn draw_shape(cfg: ShapeCfg, tok: ReplayToken) -> Result<Shape, ShapeError> {
    let mut rng = tok.to_std_rng();
    let lo = cfg.dim_min.max(0.0);
    let hi = cfg.dim_max.max(lo);
    let dim = |rng: &mut StdRng| {
        if hi > lo {
            rng.gen_range(lo..hi)
        } else {
            lo
        }
    };
    if rng.gen::<bool>() {
        let radius = dim(&mut rng);
        Shape::circle(radius)
    } else {
        let width = dim(&mut rng);
        let height = dim(&mut rng);
        Shape::rectangle(width, height)
    }
}
