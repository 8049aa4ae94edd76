//! Binary SDF field format: a 36-byte header (dimensions, origin, cell
//! size, 8 reserved bytes) followed by `nx*ny*nz` little-endian float32
//! phi values in i-fastest order.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use sdf_core::Grid;

use crate::error::IoError;

const HEADER_LEN: usize = 36;
const RESERVED: [u8; 8] = [0u8; 8];

/// Write `grid` and `phi` to `path` in the binary SDF format.
pub fn write_sdf(path: impl AsRef<Path>, grid: &Grid, phi: &[f32]) -> Result<(), IoError> {
  let path = path.as_ref();
  let to_err = |source| IoError::Io { path: path.to_path_buf(), source };
  let file = File::create(path).map_err(to_err)?;
  let mut w = BufWriter::new(file);

  w.write_i32::<LittleEndian>(grid.nx as i32).map_err(to_err)?;
  w.write_i32::<LittleEndian>(grid.ny as i32).map_err(to_err)?;
  w.write_i32::<LittleEndian>(grid.nz as i32).map_err(to_err)?;
  w.write_f32::<LittleEndian>(grid.origin.x).map_err(to_err)?;
  w.write_f32::<LittleEndian>(grid.origin.y).map_err(to_err)?;
  w.write_f32::<LittleEndian>(grid.origin.z).map_err(to_err)?;
  w.write_f32::<LittleEndian>(grid.dx).map_err(to_err)?;
  w.write_all(&RESERVED).map_err(to_err)?;

  for &v in phi {
    w.write_f32::<LittleEndian>(v).map_err(to_err)?;
  }
  w.flush().map_err(to_err)
}

/// Read a binary SDF field, returning the grid it was generated over and
/// the phi values.
pub fn read_sdf(path: impl AsRef<Path>) -> Result<(Grid, Vec<f32>), IoError> {
  let path = path.as_ref();
  let to_err = |source| IoError::Io { path: path.to_path_buf(), source };
  let file = File::open(path).map_err(to_err)?;
  let mut r = BufReader::new(file);

  let mut header = [0u8; HEADER_LEN];
  r.read_exact(&mut header).map_err(|_| IoError::TruncatedHeader { path: path.to_path_buf() })?;

  let nx = i32::from_le_bytes(header[0..4].try_into().unwrap()) as u32;
  let ny = i32::from_le_bytes(header[4..8].try_into().unwrap()) as u32;
  let nz = i32::from_le_bytes(header[8..12].try_into().unwrap()) as u32;
  let ox = f32::from_le_bytes(header[12..16].try_into().unwrap());
  let oy = f32::from_le_bytes(header[16..20].try_into().unwrap());
  let oz = f32::from_le_bytes(header[20..24].try_into().unwrap());
  let dx = f32::from_le_bytes(header[24..28].try_into().unwrap());

  let grid = Grid::new(nx, ny, nz, glam::Vec3::new(ox, oy, oz), dx)
    .map_err(|e| IoError::InvalidHeader { path: path.to_path_buf(), reason: e.to_string() })?;

  let expected = grid.voxel_count();
  let mut phi = Vec::with_capacity(expected);
  loop {
    match r.read_f32::<LittleEndian>() {
      Ok(v) => phi.push(v),
      Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => break,
      Err(source) => return Err(to_err(source)),
    }
  }

  if phi.len() != expected {
    return Err(IoError::PhiCountMismatch { path: path.to_path_buf(), expected, found: phi.len() });
  }

  Ok((grid, phi))
}
