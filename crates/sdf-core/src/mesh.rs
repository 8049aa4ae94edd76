//! Mesh data model: an ordered vertex list and an ordered triangle list.

use glam::Vec3;

/// A triangle mesh: vertices in world units, triangles as index triples into
/// `vertices`. Orientation follows input convention but is not required by
/// the core.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
  pub vertices: Vec<Vec3>,
  pub triangles: Vec<[u32; 3]>,
}

impl Mesh {
  pub fn new(vertices: Vec<Vec3>, triangles: Vec<[u32; 3]>) -> Self {
    Self { vertices, triangles }
  }

  pub fn is_empty(&self) -> bool {
    self.triangles.is_empty()
  }

  #[inline]
  pub fn triangle_vertices(&self, tri: usize) -> (Vec3, Vec3, Vec3) {
    let [i, j, k] = self.triangles[tri];
    (
      self.vertices[i as usize],
      self.vertices[j as usize],
      self.vertices[k as usize],
    )
  }

  /// Bounding box over all vertices referenced by at least one triangle.
  /// Empty if the mesh has no triangles.
  pub fn bounds(&self) -> Option<crate::geometry::Aabb3> {
    if self.triangles.is_empty() {
      return None;
    }
    let mut aabb = crate::geometry::Aabb3::empty();
    for v in &self.vertices {
      aabb.encapsulate(*v);
    }
    Some(aabb)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_mesh_has_no_bounds() {
    let mesh = Mesh::default();
    assert!(mesh.bounds().is_none());
    assert!(mesh.is_empty());
  }

  #[test]
  fn triangle_vertices_indexes_correctly() {
    let mesh = Mesh::new(
      vec![Vec3::ZERO, Vec3::X, Vec3::Y],
      vec![[0, 1, 2]],
    );
    let (a, b, c) = mesh.triangle_vertices(0);
    assert_eq!(a, Vec3::ZERO);
    assert_eq!(b, Vec3::X);
    assert_eq!(c, Vec3::Y);
  }
}
