//! Core shape and container types.
//!
//! Two independent leaf components:
//! - [`shape`]: a closed set of planar shapes, each with an area. The
//!   variant set is sealed; `area` matches exhaustively with no default
//!   arm, so adding a variant is a compile-time-visible change.
//! - [`container`]: an append-only, insertion-ordered container over any
//!   totally ordered element type, exposing a maximum query.
//!
//! Supporting modules: [`rand`] draws reproducible random shapes for
//! tests and benches.

pub mod container;
pub mod rand;
pub mod shape;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use container::OrderedContainer;
pub use nalgebra::Vector2 as Vec2;
pub use shape::{Shape, ShapeError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::container::OrderedContainer;
    pub use crate::rand::{draw_shape, ReplayToken, ShapeCfg};
    pub use crate::shape::{Shape, ShapeError};
    pub use nalgebra::Vector2 as Vec2;
}

/// Euclidean distance between two points in R².
#[inline]
pub fn distance(a: Vec2<f64>, b: Vec2<f64>) -> f64 {
    (a - b).norm()
}

#[cfg(test)]
mod tests {
    use super::{distance, Vec2};
    use nalgebra::vector;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn distance_axis_aligned() {
        let a = vector![0.0, 0.0];
        let b = vector![3.0, 4.0];
        assert!((distance(a, b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn distance_randomized_seeded() {
        let mut rng = StdRng::seed_from_u64(42);
        let a: Vec2<f64> = Vec2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
        let b: Vec2<f64> = Vec2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
        let expected = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
        assert!((distance(a, b) - expected).abs() < 1e-12);
        // Symmetry and identity.
        assert!((distance(a, b) - distance(b, a)).abs() < 1e-12);
        assert!(distance(a, a).abs() < 1e-12);
    }
}
