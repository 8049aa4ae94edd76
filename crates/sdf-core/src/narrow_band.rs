//! Exact narrow-band pass: for every triangle, visit the voxels within
//! its footprint and update distance/closest-triangle via
//! point-to-triangle queries.

use rayon::prelude::*;

use crate::error::Warning;
use crate::geometry::{point_triangle_distance, Aabb3};
use crate::grid::{Fields, Grid};
use crate::mesh::Mesh;

/// Per-worker scratch: a private phi/closest pair, initialized to
/// sentinels, reduced by per-voxel minimum across workers once every batch
/// has run. Each worker owns its own grid-sized buffer so no writer ever
/// touches another worker's cells.
struct Scratch {
  phi: Vec<f32>,
  closest: Vec<i32>,
}

impl Scratch {
  fn new(grid: &Grid) -> Self {
    Self {
      phi: vec![grid.sentinel(); grid.voxel_count()],
      closest: vec![-1; grid.voxel_count()],
    }
  }

  fn reduce_into(self, phi: &mut [f32], closest: &mut [i32]) {
    for i in 0..phi.len() {
      if self.closest[i] >= 0 && should_replace(phi[i], closest[i], self.phi[i], self.closest[i]) {
        phi[i] = self.phi[i];
        closest[i] = self.closest[i];
      }
    }
  }
}

/// Whether a candidate (`new_phi`, `new_tri`) should replace the current
/// (`cur_phi`, `cur_tri`) winner for a voxel: strictly smaller distance
/// wins outright; an exact tie is broken by the smaller triangle index, so
/// the result is independent of worker scheduling order.
#[inline]
fn should_replace(cur_phi: f32, cur_tri: i32, new_phi: f32, new_tri: i32) -> bool {
  new_phi < cur_phi || (new_phi == cur_phi && new_tri < cur_tri)
}

fn is_degenerate(a: glam::Vec3, b: glam::Vec3, c: glam::Vec3) -> bool {
  (b - a).cross(c - a).length_squared() <= f32::EPSILON
}

/// Footprint of triangle `t`'s grid-index-space bounding box expanded by
/// `band` cells and clamped to the grid, as `(min, max)` inclusive voxel
/// coordinates.
fn footprint(grid: &Grid, a: glam::Vec3, b: glam::Vec3, c: glam::Vec3, band: u32) -> Option<([u32; 3], [u32; 3])> {
  let ia = grid.to_index_space(a);
  let ib = grid.to_index_space(b);
  let ic = grid.to_index_space(c);
  let aabb = Aabb3::from_points(&[ia, ib, ic]).expanded(band as f32);

  let max_i = grid.nx.saturating_sub(1);
  let max_j = grid.ny.saturating_sub(1);
  let max_k = grid.nz.saturating_sub(1);

  let clamp_axis = |v: f32, max: u32| -> Option<u32> {
    if !v.is_finite() {
      return None;
    }
    Some((v.floor().max(0.0) as u32).min(max))
  };

  let min = (
    clamp_axis(aabb.min.x, max_i)?,
    clamp_axis(aabb.min.y, max_j)?,
    clamp_axis(aabb.min.z, max_k)?,
  );
  let max = (
    clamp_axis(aabb.max.x.ceil(), max_i)?,
    clamp_axis(aabb.max.y.ceil(), max_j)?,
    clamp_axis(aabb.max.z.ceil(), max_k)?,
  );

  Some(([min.0, min.1, min.2], [max.0, max.1, max.2]))
}

/// Run the exact narrow-band pass over every triangle, writing results
/// into `fields.phi`/`fields.closest`. Degenerate (zero-area) triangles
/// are skipped and reported as warnings.
pub fn run(mesh: &Mesh, grid: &Grid, band: u32, fields: &mut Fields, warnings: &mut Vec<Warning>) {
  let num_tris = mesh.triangles.len();
  if num_tris == 0 {
    return;
  }

  let degenerate: Vec<usize> = (0..num_tris)
    .into_par_iter()
    .filter(|&t| {
      let (a, b, c) = mesh.triangle_vertices(t);
      is_degenerate(a, b, c)
    })
    .collect();
  warnings.extend(degenerate.iter().map(|&t| Warning::DegenerateTriangle { triangle: t }));

  let num_workers = rayon::current_num_threads().max(1);
  let chunk_size = num_tris.div_ceil(num_workers).max(1);
  let chunk_count = num_tris.div_ceil(chunk_size);

  let reduced = (0..chunk_count)
    .into_par_iter()
    .map(|chunk_idx| {
      let start = chunk_idx * chunk_size;
      let end = (start + chunk_size).min(num_tris);
      let mut scratch = Scratch::new(grid);
      for t in start..end {
        let (a, b, c) = mesh.triangle_vertices(t);
        if is_degenerate(a, b, c) {
          continue;
        }
        let Some((min, max)) = footprint(grid, a, b, c, band) else {
          continue;
        };
        for k in min[2]..=max[2] {
          for j in min[1]..=max[1] {
            for i in min[0]..=max[0] {
              let idx = grid.index(i, j, k);
              let d = point_triangle_distance(grid.center(i, j, k), a, b, c);
              if d < scratch.phi[idx] {
                scratch.phi[idx] = d;
                scratch.closest[idx] = t as i32;
              }
            }
          }
        }
      }
      scratch
    })
    .reduce(
      || Scratch::new(grid),
      |mut acc, other| {
        other.reduce_into(&mut acc.phi, &mut acc.closest);
        acc
      },
    );

  reduced.reduce_into(&mut fields.phi, &mut fields.closest);
}

#[cfg(test)]
#[path = "narrow_band_test.rs"]
mod narrow_band_test;
