//! Grid: shape, origin, cell size, and the three working arrays.

use glam::Vec3;

use crate::error::SdfError;

/// A regular voxel grid: `(nx, ny, nz)` cells, world-space `origin` at
/// voxel `(0,0,0)`'s corner, uniform cell size `dx`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
  pub nx: u32,
  pub ny: u32,
  pub nz: u32,
  pub origin: Vec3,
  pub dx: f32,
}

impl Grid {
  pub fn new(nx: u32, ny: u32, nz: u32, origin: Vec3, dx: f32) -> Result<Self, SdfError> {
    if nx == 0 || ny == 0 || nz == 0 {
      return Err(SdfError::InvalidGrid {
        reason: "grid dimensions must be > 0".to_string(),
      });
    }
    if !(dx > 0.0) {
      return Err(SdfError::InvalidGrid {
        reason: "dx must be > 0".to_string(),
      });
    }
    Ok(Self { nx, ny, nz, origin, dx })
  }

  #[inline]
  pub fn voxel_count(&self) -> usize {
    self.nx as usize * self.ny as usize * self.nz as usize
  }

  /// Row-major index with i fastest.
  #[inline]
  pub fn index(&self, i: u32, j: u32, k: u32) -> usize {
    (k as usize * self.ny as usize + j as usize) * self.nx as usize + i as usize
  }

  /// World-space center of voxel (i, j, k).
  #[inline]
  pub fn center(&self, i: u32, j: u32, k: u32) -> Vec3 {
    self.origin
      + Vec3::new(
        (i as f32 + 0.5) * self.dx,
        (j as f32 + 0.5) * self.dx,
        (k as f32 + 0.5) * self.dx,
      )
  }

  /// Grid-index-space coordinates of a world-space point (may be negative
  /// or exceed the grid bounds; callers clamp).
  #[inline]
  pub fn to_index_space(&self, p: Vec3) -> Vec3 {
    (p - self.origin) / self.dx
  }

  /// Length of the grid's space diagonal in world units.
  pub fn diagonal(&self) -> f32 {
    Vec3::new(self.nx as f32, self.ny as f32, self.nz as f32).length() * self.dx
  }

  /// Sentinel value `phi` is initialized to: at least three times the grid
  /// diagonal.
  pub fn sentinel(&self) -> f32 {
    3.0 * self.diagonal() + self.dx
  }
}

/// The two ways callers can specify a grid. Both are resolved to a
/// concrete [`Grid`] by [`resolve`] before the core ever sees them.
#[derive(Clone, Copy, Debug)]
pub enum GridSpec {
  /// User supplies a cell size; the grid size and origin are derived from
  /// the mesh bounding box plus `padding` cells of empty space.
  CellSize { dx: f32, padding: u32 },
  /// User supplies a grid cell count; `dx` is derived so the mesh (plus
  /// `padding` cells of border) fits, and the mesh is centered in the grid.
  GridCount { nx: u32, ny: u32, nz: u32, padding: u32 },
}

/// Resolve a [`GridSpec`] against a mesh bounding box into a concrete
/// [`Grid`]. Both modes reduce to the same core contract.
pub fn resolve(spec: GridSpec, bounds: crate::geometry::Aabb3) -> Result<Grid, SdfError> {
  let extent = bounds.max - bounds.min;
  match spec {
    GridSpec::CellSize { dx, padding } => {
      if !(dx > 0.0) {
        return Err(SdfError::InvalidGrid {
          reason: "dx must be > 0".to_string(),
        });
      }
      let pad = padding as f32 * dx;
      let origin = bounds.min - Vec3::splat(pad);
      let size = extent + Vec3::splat(2.0 * pad);
      let nx = (size.x / dx).ceil().max(1.0) as u32;
      let ny = (size.y / dx).ceil().max(1.0) as u32;
      let nz = (size.z / dx).ceil().max(1.0) as u32;
      Grid::new(nx, ny, nz, origin, dx)
    }
    GridSpec::GridCount { nx, ny, nz, padding } => {
      if nx == 0 || ny == 0 || nz == 0 {
        return Err(SdfError::InvalidGrid {
          reason: "grid dimensions must be > 0".to_string(),
        });
      }
      let interior = [
        (nx.saturating_sub(2 * padding)).max(1) as f32,
        (ny.saturating_sub(2 * padding)).max(1) as f32,
        (nz.saturating_sub(2 * padding)).max(1) as f32,
      ];
      let dx = (extent.x / interior[0])
        .max(extent.y / interior[1])
        .max(extent.z / interior[2])
        .max(f32::EPSILON);
      let size = Vec3::new(nx as f32, ny as f32, nz as f32) * dx;
      let center = (bounds.min + bounds.max) * 0.5;
      let origin = center - size * 0.5;
      Grid::new(nx, ny, nz, origin, dx)
    }
  }
}

/// The three working arrays the orchestrator owns for the duration of a
/// single job.
pub struct Fields {
  pub phi: Vec<f32>,
  pub closest: Vec<i32>,
  pub inside: Vec<i32>,
}

impl Fields {
  pub fn new(grid: &Grid) -> Self {
    let n = grid.voxel_count();
    Self {
      phi: vec![grid.sentinel(); n],
      closest: vec![-1; n],
      inside: vec![0; n],
    }
  }
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;
