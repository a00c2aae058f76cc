mod sphere_sampler;
mod vertex_count;

pub use sphere_sampler::{SphereSampler, point_from_unit, sample};
