//! Engine-agnostic mesh-to-signed-distance-field pipeline: narrow-band
//! exact distances, intersection-parity sign, fast sweeping, and the
//! orchestrator that runs them in order over a regular voxel grid.

pub mod analyzer;
pub mod backend;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod mesh;
pub mod narrow_band;
pub mod orchestrator;
pub mod parity;
pub mod repair;
pub mod sign;
pub mod sweep;

#[cfg(test)]
mod test_fixtures;

pub use analyzer::{analyze, Analysis};
pub use backend::{is_gpu_available, Backend};
pub use error::{SdfError, Warning};
pub use geometry::{closest_point_on_triangle, orientation, point_triangle_distance, Aabb3};
pub use grid::{resolve, Fields, Grid, GridSpec};
pub use mesh::Mesh;
pub use orchestrator::{make_level_set, LevelSet, Options};
pub use repair::{fill_holes, weld, WeldResult};
