//! ASCII OBJ loader: `v x y z` vertices in order, `f i j k ...` faces.

use std::fs;
use std::path::Path;

use glam::Vec3;
use sdf_core::Mesh;

use crate::error::LoadError;

/// Load a mesh from an OBJ file.
///
/// Faces are 1-indexed in the file and converted to 0-indexed here. A `//n`
/// or `/t/n` suffix on a face token (texture/normal indices) is stripped;
/// only the vertex index is kept. Faces with more than 3 vertices are
/// triangulated as a fan around the first vertex.
pub fn load_obj(path: impl AsRef<Path>) -> Result<Mesh, LoadError> {
  let path = path.as_ref();
  let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
    path: path.to_path_buf(),
    source,
  })?;

  let mut vertices = Vec::new();
  let mut triangles = Vec::new();

  for (line_no, line) in text.lines().enumerate() {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
      continue;
    }
    let mut tokens = line.split_whitespace();
    let Some(tag) = tokens.next() else { continue };

    match tag {
      "v" => {
        let parse_err = |reason: &str| LoadError::Parse {
          path: path.to_path_buf(),
          line: line_no + 1,
          reason: reason.to_string(),
        };
        let coords: Vec<f32> = tokens
          .take(3)
          .map(|t| t.parse::<f32>().map_err(|_| parse_err("expected a float coordinate")))
          .collect::<Result<_, _>>()?;
        if coords.len() != 3 {
          return Err(LoadError::Parse {
            path: path.to_path_buf(),
            line: line_no + 1,
            reason: "expected 3 coordinates after 'v'".to_string(),
          });
        }
        vertices.push(Vec3::new(coords[0], coords[1], coords[2]));
      }
      "f" => {
        let indices: Vec<u32> = tokens
          .map(|t| parse_face_index(t, path, line_no + 1))
          .collect::<Result<_, _>>()?;
        if indices.len() < 3 {
          return Err(LoadError::Parse {
            path: path.to_path_buf(),
            line: line_no + 1,
            reason: "face needs at least 3 vertices".to_string(),
          });
        }
        for i in 1..indices.len() - 1 {
          triangles.push([indices[0], indices[i], indices[i + 1]]);
        }
      }
      _ => continue,
    }
  }

  Ok(Mesh::new(vertices, triangles))
}

/// Parse a single face token (`i`, `i/t`, `i/t/n`, or `i//n`) into a
/// 0-indexed vertex index, discarding any texture/normal component.
fn parse_face_index(token: &str, path: &Path, line: usize) -> Result<u32, LoadError> {
  let vertex_part = token.split('/').next().unwrap_or(token);
  let one_indexed: i64 = vertex_part.parse().map_err(|_| LoadError::Parse {
    path: path.to_path_buf(),
    line,
    reason: format!("unparseable face index '{token}'"),
  })?;
  if one_indexed < 1 {
    return Err(LoadError::Parse {
      path: path.to_path_buf(),
      line,
      reason: "face index must be >= 1".to_string(),
    });
  }
  Ok((one_indexed - 1) as u32)
}
