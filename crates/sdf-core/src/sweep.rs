//! Fast sweep propagation: extend exact narrow-band distances to the
//! whole grid via six directional sweeps, repeated for two full passes.

use crate::geometry::point_triangle_distance;
use crate::grid::{Fields, Grid};
use crate::mesh::Mesh;

/// Axis a single sweep iterates as its primary (outermost) dimension.
#[derive(Clone, Copy)]
enum Axis {
  I,
  J,
  K,
}

/// Run the fixed, deterministic six-sweep schedule twice; two full passes
/// of six sweeps each suffice to propagate distances to every voxel
/// reachable from the narrow band.
pub fn run(mesh: &Mesh, grid: &Grid, fields: &mut Fields) {
  for _pass in 0..2 {
    for &(axis, forward) in &[
      (Axis::I, true),
      (Axis::I, false),
      (Axis::J, true),
      (Axis::J, false),
      (Axis::K, true),
      (Axis::K, false),
    ] {
      sweep_once(mesh, grid, fields, axis, forward);
    }
  }
}

fn sweep_once(mesh: &Mesh, grid: &Grid, fields: &mut Fields, axis: Axis, forward: bool) {
  let primary_dim = match axis {
    Axis::I => grid.nx,
    Axis::J => grid.ny,
    Axis::K => grid.nz,
  };
  let order: Box<dyn Iterator<Item = u32>> = if forward {
    Box::new(0..primary_dim)
  } else {
    Box::new((0..primary_dim).rev())
  };

  for p in order {
    match axis {
      Axis::I => {
        for k in 0..grid.nz {
          for j in 0..grid.ny {
            update_voxel(mesh, grid, fields, p, j, k);
          }
        }
      }
      Axis::J => {
        for k in 0..grid.nz {
          for i in 0..grid.nx {
            update_voxel(mesh, grid, fields, i, p, k);
          }
        }
      }
      Axis::K => {
        for j in 0..grid.ny {
          for i in 0..grid.nx {
            update_voxel(mesh, grid, fields, i, j, p);
          }
        }
      }
    }
  }
}

/// Examine voxel `v`'s six face neighbors already in sweep-completed
/// positions (earlier in this pass, or converged from a previous sweep)
/// and adopt the candidate distance from any neighbor's closest triangle
/// if it improves on the voxel's current value.
fn update_voxel(mesh: &Mesh, grid: &Grid, fields: &mut Fields, i: u32, j: u32, k: u32) {
  let v_idx = grid.index(i, j, k);
  let center = grid.center(i, j, k);

  let mut neighbors: [Option<(u32, u32, u32)>; 6] = [None; 6];
  neighbors[0] = (i > 0).then(|| (i - 1, j, k));
  neighbors[1] = (i + 1 < grid.nx).then(|| (i + 1, j, k));
  neighbors[2] = (j > 0).then(|| (i, j - 1, k));
  neighbors[3] = (j + 1 < grid.ny).then(|| (i, j + 1, k));
  neighbors[4] = (k > 0).then(|| (i, j, k - 1));
  neighbors[5] = (k + 1 < grid.nz).then(|| (i, j, k + 1));

  for neighbor in neighbors.into_iter().flatten() {
    let n_idx = grid.index(neighbor.0, neighbor.1, neighbor.2);
    let ct = fields.closest[n_idx];
    if ct < 0 {
      continue;
    }
    let (a, b, c) = mesh.triangle_vertices(ct as usize);
    let d = point_triangle_distance(center, a, b, c);
    if d < fields.phi[v_idx] {
      fields.phi[v_idx] = d;
      fields.closest[v_idx] = ct;
    }
  }
}

#[cfg(test)]
#[path = "sweep_test.rs"]
mod sweep_test;
