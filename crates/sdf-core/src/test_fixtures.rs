//! Shared mesh fixtures for unit tests across this crate.

use glam::Vec3;

use crate::mesh::Mesh;

const CUBE_VERTS: [[f32; 3]; 8] = [
  [0.0, 0.0, 0.0], // 0
  [1.0, 0.0, 0.0], // 1
  [1.0, 1.0, 0.0], // 2
  [0.0, 1.0, 0.0], // 3
  [0.0, 0.0, 1.0], // 4
  [1.0, 0.0, 1.0], // 5
  [1.0, 1.0, 1.0], // 6
  [0.0, 1.0, 1.0], // 7
];

/// Quads for the six faces of the unit cube, each split into two triangles
/// along the (a, c) diagonal.
const CUBE_QUADS: [[u32; 4]; 6] = [
  [0, 1, 2, 3], // bottom (z=0)
  [7, 6, 5, 4], // top (z=1)
  [0, 1, 5, 4], // front (y=0)
  [3, 2, 6, 7], // back (y=1)
  [0, 3, 7, 4], // left (x=0)
  [1, 2, 6, 5], // right (x=1)
];

fn quads_to_triangles(quads: &[[u32; 4]]) -> Vec<[u32; 3]> {
  quads
    .iter()
    .flat_map(|&[a, b, c, d]| [[a, b, c], [a, c, d]])
    .collect()
}

/// The watertight unit cube: 8 vertices, 12 triangles, 18 edges.
pub fn cube_mesh() -> Mesh {
  let vertices = CUBE_VERTS.iter().map(|&v| Vec3::from(v)).collect();
  Mesh::new(vertices, quads_to_triangles(&CUBE_QUADS))
}

/// The unit cube with its top face removed: 10 triangles, 4 boundary edges,
/// 1 hole.
pub fn cube_mesh_missing_one_face() -> Mesh {
  let vertices = CUBE_VERTS.iter().map(|&v| Vec3::from(v)).collect();
  let quads = &CUBE_QUADS[..1].iter().chain(CUBE_QUADS[2..].iter()).copied().collect::<Vec<_>>();
  Mesh::new(vertices, quads_to_triangles(quads))
}

/// The same cube as [`cube_mesh`], but every triangle owns its own
/// unwelded copy of its three vertices (36 vertices, 12 triangles), as a
/// binary STL loader would hand it to the core before welding.
pub fn cube_mesh_stl_duplicated() -> Mesh {
  let mesh = cube_mesh();
  let mut vertices = Vec::with_capacity(mesh.triangles.len() * 3);
  let mut triangles = Vec::with_capacity(mesh.triangles.len());
  for &[a, b, c] in &mesh.triangles {
    let base = vertices.len() as u32;
    vertices.push(mesh.vertices[a as usize]);
    vertices.push(mesh.vertices[b as usize]);
    vertices.push(mesh.vertices[c as usize]);
    triangles.push([base, base + 1, base + 2]);
  }
  Mesh::new(vertices, triangles)
}

/// A UV-sphere approximation of radius `radius` centered at `center`, with
/// `rings` latitude bands and `segments` longitude bands.
pub fn sphere_mesh(center: Vec3, radius: f32, rings: u32, segments: u32) -> Mesh {
  let mut vertices = Vec::new();
  for ring in 0..=rings {
    let phi = std::f32::consts::PI * ring as f32 / rings as f32;
    for seg in 0..segments {
      let theta = 2.0 * std::f32::consts::PI * seg as f32 / segments as f32;
      let x = phi.sin() * theta.cos();
      let y = phi.cos();
      let z = phi.sin() * theta.sin();
      vertices.push(center + Vec3::new(x, y, z) * radius);
    }
  }

  let mut triangles = Vec::new();
  for ring in 0..rings {
    for seg in 0..segments {
      let next_seg = (seg + 1) % segments;
      let a = ring * segments + seg;
      let b = ring * segments + next_seg;
      let c = (ring + 1) * segments + next_seg;
      let d = (ring + 1) * segments + seg;
      if ring > 0 {
        triangles.push([a, b, c]);
      }
      if ring < rings - 1 {
        triangles.push([a, c, d]);
      }
    }
  }

  Mesh::new(vertices, triangles)
}
