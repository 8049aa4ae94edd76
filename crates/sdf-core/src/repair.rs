//! Mesh repair: vertex welding via spatial hash, and ear-clipping hole
//! fill.

use std::collections::HashMap;

use glam::{IVec3, Vec3};

use crate::analyzer::analyze;
use crate::error::Warning;
use crate::mesh::Mesh;

/// Result of welding: the welded mesh and how many vertices were merged.
pub struct WeldResult {
  pub mesh: Mesh,
  pub merged: usize,
}

#[inline]
fn bucket_of(v: Vec3, tolerance: f32) -> IVec3 {
  IVec3::new(
    (v.x / tolerance).floor() as i32,
    (v.y / tolerance).floor() as i32,
    (v.z / tolerance).floor() as i32,
  )
}

/// Weld vertices within `tolerance` of each other, using a spatial hash
/// keyed by integer bucket so lookups stay O(1) amortized regardless of
/// mesh size.
///
/// Vertices are processed in input order; the first occurrence in a
/// neighborhood wins, so the resulting vertex order is a prefix-stable
/// subsequence of the input (welding twice with the same tolerance is a
/// no-op the second time, since every remaining vertex is already alone in
/// its bucket neighborhood).
pub fn weld(mesh: &Mesh, tolerance: f32) -> WeldResult {
  // bucket -> indices into the *new* vertex list that fall in that bucket.
  let mut buckets: HashMap<IVec3, Vec<u32>> = HashMap::new();
  let mut new_vertices: Vec<Vec3> = Vec::new();
  // old index -> new index
  let mut remap: Vec<u32> = Vec::with_capacity(mesh.vertices.len());
  let mut merged = 0usize;

  for &v in &mesh.vertices {
    let center = bucket_of(v, tolerance);
    let mut found = None;
    'search: for dz in -1..=1 {
      for dy in -1..=1 {
        for dx in -1..=1 {
          let b = center + IVec3::new(dx, dy, dz);
          if let Some(candidates) = buckets.get(&b) {
            for &idx in candidates {
              if new_vertices[idx as usize].distance(v) < tolerance {
                found = Some(idx);
                break 'search;
              }
            }
          }
        }
      }
    }

    match found {
      Some(idx) => {
        remap.push(idx);
        merged += 1;
      }
      None => {
        let idx = new_vertices.len() as u32;
        new_vertices.push(v);
        buckets.entry(center).or_default().push(idx);
        remap.push(idx);
      }
    }
  }

  let mut new_triangles = Vec::with_capacity(mesh.triangles.len());
  for &[a, b, c] in &mesh.triangles {
    let (ra, rb, rc) = (remap[a as usize], remap[b as usize], remap[c as usize]);
    if ra == rb || rb == rc || rc == ra {
      continue; // degenerate after welding, drop
    }
    new_triangles.push([ra, rb, rc]);
  }

  WeldResult {
    mesh: Mesh::new(new_vertices, new_triangles),
    merged,
  }
}

/// Triangulate every boundary loop by ear clipping and append the result
/// to `mesh`'s triangle list. Returns the repaired mesh and any warnings
/// raised along the way.
pub fn fill_holes(mesh: &Mesh) -> (Mesh, Vec<Warning>) {
  let analysis = analyze(mesh);
  let mut triangles = mesh.triangles.clone();
  let mut warnings = Vec::new();

  for loop_verts in &analysis.boundary_loops {
    let (mut new_tris, warning) = ear_clip(loop_verts, &mesh.vertices);
    triangles.append(&mut new_tris);
    if let Some(w) = warning {
      warnings.push(w);
    }
  }

  (Mesh::new(mesh.vertices.clone(), triangles), warnings)
}

/// Ear-clip a single boundary loop. Winding follows the loop order and is
/// not verified against the rest of the mesh; correctness of the final
/// sign still relies on the intersection-parity pass.
fn ear_clip(loop_verts: &[u32], vertices: &[Vec3]) -> (Vec<[u32; 3]>, Option<Warning>) {
  let mut ring: Vec<u32> = loop_verts.to_vec();
  let mut triangles = Vec::new();
  let mut fallback_used = false;

  while ring.len() > 3 {
    let ear_idx = (0..ring.len()).find(|&i| is_non_degenerate_ear(&ring, i, vertices));
    match ear_idx {
      Some(i) => {
        let n = ring.len();
        let prev = ring[(i + n - 1) % n];
        let cur = ring[i];
        let next = ring[(i + 1) % n];
        triangles.push([prev, cur, next]);
        ring.remove(i);
      }
      None => {
        // No valid ear: fall back to (0,1,2), remove index 1.
        fallback_used = true;
        triangles.push([ring[0], ring[1], ring[2]]);
        ring.remove(1);
      }
    }
  }

  if ring.len() == 3 {
    triangles.push([ring[0], ring[1], ring[2]]);
  }

  let warning = if fallback_used {
    Some(Warning::HoleFillFallback { loop_len: loop_verts.len() })
  } else {
    None
  };
  (triangles, warning)
}

/// An ear at `i` is non-degenerate if the cross product of its two
/// incident edges has non-zero magnitude.
fn is_non_degenerate_ear(ring: &[u32], i: usize, vertices: &[Vec3]) -> bool {
  let n = ring.len();
  let prev = vertices[ring[(i + n - 1) % n] as usize];
  let cur = vertices[ring[i] as usize];
  let next = vertices[ring[(i + 1) % n] as usize];
  let e1 = cur - prev;
  let e2 = next - cur;
  e1.cross(e2).length_squared() > f32::EPSILON
}

#[cfg(test)]
#[path = "repair_test.rs"]
mod repair_test;
