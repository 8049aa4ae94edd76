use glam::Vec3;

use super::*;
use crate::test_fixtures::cube_mesh;

#[test]
fn sweep_fills_every_voxel_reachable_from_the_band() {
  let grid = Grid::new(15, 15, 15, Vec3::splat(-0.25), 0.1).unwrap();
  let mut fields = Fields::new(&grid);
  let mesh = cube_mesh();
  let mut warnings = Vec::new();
  crate::narrow_band::run(&mesh, &grid, 1, &mut fields, &mut warnings);
  run(&mesh, &grid, &mut fields);

  let sentinel = grid.sentinel();
  assert!(fields.phi.iter().all(|&p| p < sentinel));
  assert!(fields.closest.iter().all(|&c| c >= 0));
}

#[test]
fn eikonal_bound_holds_between_face_neighbors() {
  let grid = Grid::new(15, 15, 15, Vec3::splat(-0.25), 0.1).unwrap();
  let mut fields = Fields::new(&grid);
  let mesh = cube_mesh();
  let mut warnings = Vec::new();
  crate::narrow_band::run(&mesh, &grid, 1, &mut fields, &mut warnings);
  run(&mesh, &grid, &mut fields);

  let eps = grid.dx * 0.05;
  for k in 0..grid.nz {
    for j in 0..grid.ny {
      for i in 0..(grid.nx - 1) {
        let a = fields.phi[grid.index(i, j, k)];
        let b = fields.phi[grid.index(i + 1, j, k)];
        assert!((a - b).abs() <= grid.dx + eps, "a={a} b={b} dx={}", grid.dx);
      }
    }
  }
}
