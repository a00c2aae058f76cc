use crate::domain::GeoPoint;
use crate::sampler::vertex_count::{VERTEX_BOUNDS, vertex_count_for_bound};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Maps two uniform values in `[0, 1)` to a point that is uniform by area on the sphere.
///
/// Latitude goes through the inverse CDF of `cos(latitude)`, so bands near the poles get
/// proportionally fewer points than bands near the equator. Longitude is linear.
///
/// `u` is clamped so that `2u - 1` stays within the domain of `acos`.
pub fn point_from_unit(u: f64, v: f64) -> GeoPoint {
    let z = (2.0 * u - 1.0).clamp(-1.0, 1.0);
    let latitude = z.acos().to_degrees() - 90.0;
    let longitude = 360.0 * v.clamp(0.0, 1.0) - 180.0;

    GeoPoint::new(latitude, longitude)
}

/// Samples a point using the thread-local generator.
pub fn sample() -> GeoPoint {
    SphereSampler::new(rand::rng()).sample()
}

#[derive(Debug)]
pub struct SphereSampler<R = StdRng> {
    rng: R,
}

impl SphereSampler<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        SphereSampler::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        SphereSampler::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> SphereSampler<R> {
    pub fn new(rng: R) -> Self {
        SphereSampler { rng }
    }

    pub fn sample(&mut self) -> GeoPoint {
        let u: f64 = self.rng.random();
        let v: f64 = self.rng.random();
        point_from_unit(u, v)
    }

    pub fn sample_n(&mut self, count: usize) -> Vec<GeoPoint> {
        (0..count).map(|_| self.sample()).collect()
    }

    pub fn polygon_vertex_count(&mut self) -> usize {
        vertex_count_for_bound(self.rng.random_range(VERTEX_BOUNDS))
    }
}
