//! Binary STL loader: 80-byte header, u32 triangle count, then 50 bytes
//! per triangle (normal + 3 vertices + 2 attribute bytes).

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt};
use glam::Vec3;
use sdf_core::Mesh;

use crate::error::LoadError;

const HEADER_LEN: u64 = 80;
const BYTES_PER_TRIANGLE: usize = 50;

/// Load a binary STL file, welding per-triangle duplicate vertices with
/// tolerance `1e-5` before returning.
pub fn load_stl(path: impl AsRef<Path>) -> Result<Mesh, LoadError> {
  let path = path.as_ref();
  let file = File::open(path).map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
  let mut reader = BufReader::new(file);

  let mut header = [0u8; HEADER_LEN as usize];
  reader.read_exact(&mut header).map_err(|_| LoadError::Truncated { path: path.to_path_buf() })?;

  let tri_count = reader
    .read_u32::<LittleEndian>()
    .map_err(|_| LoadError::Truncated { path: path.to_path_buf() })?;

  let mut vertices = Vec::with_capacity(tri_count as usize * 3);
  let mut triangles = Vec::with_capacity(tri_count as usize);

  for _ in 0..tri_count {
    let mut buf = [0u8; BYTES_PER_TRIANGLE];
    reader.read_exact(&mut buf).map_err(|_| LoadError::Truncated { path: path.to_path_buf() })?;
    // bytes 0..12 are the facet normal; discard.
    let base = vertices.len() as u32;
    for v in 0..3 {
      let off = 12 + v * 12;
      let x = f32::from_le_bytes(buf[off..off + 4].try_into().unwrap());
      let y = f32::from_le_bytes(buf[off + 4..off + 8].try_into().unwrap());
      let z = f32::from_le_bytes(buf[off + 8..off + 12].try_into().unwrap());
      vertices.push(Vec3::new(x, y, z));
    }
    // bytes 48..50 are the attribute byte count; discard.
    triangles.push([base, base + 1, base + 2]);
  }

  let mesh = Mesh::new(vertices, triangles);
  let welded = sdf_core::weld(&mesh, 1e-5);
  Ok(welded.mesh)
}
