//! Intersection parity pass: classify each voxel as inside or outside the
//! mesh by counting axis-aligned (k-axis) ray crossings.

use rayon::prelude::*;

use crate::geometry::orientation;
use crate::grid::Grid;
use crate::mesh::Mesh;

/// Whether `(x, y)` lies strictly inside the 2-D projection of triangle
/// `(a, b, c)` onto the xy plane, using the orientation predicate on each
/// edge. A point exactly on an edge or vertex satisfies none of the three
/// strict inequalities and is excluded — the owning triangle in that
/// configuration is whichever neighboring triangle's interior the ray
/// actually grazes, and this convention applies consistently for every
/// triangle.
fn contains_projected(p: glam::Vec3, a: glam::Vec3, b: glam::Vec3, c: glam::Vec3) -> bool {
  let o1 = orientation(p, a, b);
  let o2 = orientation(p, b, c);
  let o3 = orientation(p, c, a);
  (o1 > 0.0 && o2 > 0.0 && o3 > 0.0) || (o1 < 0.0 && o2 < 0.0 && o3 < 0.0)
}

/// Run the parity pass over every (i, j) column, returning a fresh
/// `inside` accumulator the orchestrator merges into its own.
///
/// Degenerate (zero-area) triangles never pass [`contains_projected`]
/// (their xy-projected area is zero, so no point lies strictly inside) and
/// so naturally contribute nothing: they count as zero area for parity.
pub fn run(mesh: &Mesh, grid: &Grid) -> Vec<i32> {
  let mut inside = vec![0i32; grid.voxel_count()];

  let columns: Vec<((u32, u32), Vec<i32>)> = (0..grid.ny)
    .into_par_iter()
    .flat_map(|j| {
      (0..grid.nx).into_par_iter().map(move |i| {
        let mut column = vec![0i32; grid.nz as usize];
        let center_xy = grid.center(i, j, 0);

        for tri in 0..mesh.triangles.len() {
          let (a, b, c) = mesh.triangle_vertices(tri);
          if !contains_projected(center_xy, a, b, c) {
            continue;
          }

          let signed_area = orientation(a, b, c);
          let normal_z = signed_area; // (b-a) x (c-a) dotted with z, up to factor 2.
          if normal_z == 0.0 {
            continue;
          }
          let nx_ = (b.y - a.y) * (c.z - a.z) - (c.y - a.y) * (b.z - a.z);
          let ny_ = (b.z - a.z) * (c.x - a.x) - (c.z - a.z) * (b.x - a.x);
          let crossing_z =
            a.z - (nx_ * (center_xy.x - a.x) + ny_ * (center_xy.y - a.y)) / normal_z;

          let sign = if signed_area > 0.0 { 1 } else { -1 };
          for k in 0..grid.nz {
            if grid.center(i, j, k).z > crossing_z {
              column[k as usize] += sign;
            }
          }
        }

        ((i, j), column)
      })
    })
    .collect();

  for ((i, j), column) in columns {
    for (k, value) in column.into_iter().enumerate() {
      inside[grid.index(i, j, k as u32)] += value;
    }
  }

  inside
}

/// Inside iff parity is odd.
#[inline]
pub fn is_inside(parity: i32) -> bool {
  parity % 2 != 0
}

#[cfg(test)]
#[path = "parity_test.rs"]
mod parity_test;
