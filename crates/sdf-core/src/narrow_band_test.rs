use glam::Vec3;

use super::*;
use crate::grid::Grid;
use crate::test_fixtures::cube_mesh;

#[test]
fn footprint_is_clamped_to_grid_bounds() {
  let grid = Grid::new(4, 4, 4, Vec3::ZERO, 1.0).unwrap();
  let a = Vec3::new(-5.0, -5.0, -5.0);
  let b = Vec3::new(0.5, 0.5, 0.5);
  let c = Vec3::new(1.0, 1.0, 1.0);
  let (min, max) = footprint(&grid, a, b, c, 1).unwrap();
  assert_eq!(min, [0, 0, 0]);
  assert!(max[0] < grid.nx && max[1] < grid.ny && max[2] < grid.nz);
}

#[test]
fn narrow_band_updates_voxels_near_triangle() {
  let grid = Grid::new(10, 10, 10, Vec3::splat(-1.0), 0.2).unwrap();
  let mut fields = Fields::new(&grid);
  let mesh = cube_mesh();
  let mut warnings = Vec::new();
  run(&mesh, &grid, 1, &mut fields, &mut warnings);
  assert!(warnings.is_empty());
  // At least some voxels were updated away from the sentinel.
  let sentinel = grid.sentinel();
  assert!(fields.phi.iter().any(|&p| p < sentinel));
  assert!(fields.closest.iter().any(|&c| c >= 0));
}

#[test]
fn degenerate_triangle_is_skipped_and_warned() {
  let grid = Grid::new(4, 4, 4, Vec3::ZERO, 1.0).unwrap();
  let mut fields = Fields::new(&grid);
  let mesh = Mesh::new(
    vec![Vec3::new(0.5, 0.5, 0.5), Vec3::new(0.5, 0.5, 0.5), Vec3::new(0.5, 0.5, 0.5)],
    vec![[0, 1, 2]],
  );
  let mut warnings = Vec::new();
  run(&mesh, &grid, 1, &mut fields, &mut warnings);
  assert_eq!(warnings.len(), 1);
  assert!(matches!(warnings[0], Warning::DegenerateTriangle { triangle: 0 }));
  let sentinel = grid.sentinel();
  assert!(fields.phi.iter().all(|&p| p == sentinel));
}

#[test]
fn phi_never_exceeds_true_point_triangle_distance_in_footprint() {
  // Before the sweep runs, phi[v] <= distance(v, t) + eps for every
  // voxel v in triangle t's footprint.
  let grid = Grid::new(12, 12, 12, Vec3::splat(-1.0), 0.2).unwrap();
  let mut fields = Fields::new(&grid);
  let mesh = cube_mesh();
  let mut warnings = Vec::new();
  run(&mesh, &grid, 1, &mut fields, &mut warnings);

  for k in 0..grid.nz {
    for j in 0..grid.ny {
      for i in 0..grid.nx {
        let idx = grid.index(i, j, k);
        let tri = fields.closest[idx];
        if tri < 0 {
          continue;
        }
        let (a, b, c) = mesh.triangle_vertices(tri as usize);
        let d = crate::geometry::point_triangle_distance(grid.center(i, j, k), a, b, c);
        assert!(fields.phi[idx] <= d + 1e-4);
      }
    }
  }
}
