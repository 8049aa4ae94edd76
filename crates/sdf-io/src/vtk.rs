//! Legacy ASCII VTK `STRUCTURED_POINTS` writer, so a field can be opened
//! directly in ParaView.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use sdf_core::Grid;

use crate::error::IoError;

/// Write `phi` over `grid` as a legacy ASCII VTK structured-points file.
pub fn write_vtk(path: impl AsRef<Path>, grid: &Grid, phi: &[f32]) -> Result<(), IoError> {
  let path = path.as_ref();
  let to_err = |source| IoError::Io { path: path.to_path_buf(), source };
  let file = File::create(path).map_err(to_err)?;
  let mut w = BufWriter::new(file);

  writeln!(w, "# vtk DataFile Version 3.0").map_err(to_err)?;
  writeln!(w, "signed distance field").map_err(to_err)?;
  writeln!(w, "ASCII").map_err(to_err)?;
  writeln!(w, "DATASET STRUCTURED_POINTS").map_err(to_err)?;
  writeln!(w, "DIMENSIONS {} {} {}", grid.nx, grid.ny, grid.nz).map_err(to_err)?;
  writeln!(w, "ORIGIN {} {} {}", grid.origin.x, grid.origin.y, grid.origin.z).map_err(to_err)?;
  writeln!(w, "SPACING {} {} {}", grid.dx, grid.dx, grid.dx).map_err(to_err)?;
  writeln!(w, "POINT_DATA {}", grid.voxel_count()).map_err(to_err)?;
  writeln!(w, "SCALARS phi float 1").map_err(to_err)?;
  writeln!(w, "LOOKUP_TABLE default").map_err(to_err)?;
  for &v in phi {
    writeln!(w, "{v}").map_err(to_err)?;
  }

  w.flush().map_err(to_err)
}
