//! Error and warning types for `sdf-core`.
//!
//! Only two conditions hard-abort a job: an invalid grid and (outside the
//! core) a malformed input file. Everything else — degenerate triangles,
//! non-manifold/non-watertight meshes, a hole-fill fallback — is advisory
//! and surfaces as a [`Warning`] alongside a successful result, never as
//! an `Err`.

use thiserror::Error;

/// Hard-abort errors raised by `sdf-core`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SdfError {
  #[error("invalid grid: {reason}")]
  InvalidGrid { reason: String },

  #[error("failed to build worker pool: {reason}")]
  ThreadPool { reason: String },
}

/// Advisory conditions the core detected but proceeded past.
#[derive(Clone, Debug, PartialEq)]
pub enum Warning {
  /// A mesh edge is shared by more than two triangles.
  NonManifold { non_manifold_edges: usize },
  /// The mesh has boundary edges (is not closed).
  NonWatertight { boundary_edges: usize },
  /// Ear clipping found no valid ear for a hole and fell back to a
  /// degenerate-safe triangle.
  HoleFillFallback { loop_len: usize },
  /// A triangle had (numerically) zero area and was skipped for distance
  /// but still contributes to parity as a zero-area crossing.
  DegenerateTriangle { triangle: usize },
}

impl std::fmt::Display for Warning {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Warning::NonManifold { non_manifold_edges } => {
        write!(f, "mesh is non-manifold: {non_manifold_edges} edge(s) shared by more than two triangles")
      }
      Warning::NonWatertight { boundary_edges } => {
        write!(f, "mesh is not watertight: {boundary_edges} boundary edge(s)")
      }
      Warning::HoleFillFallback { loop_len } => {
        write!(f, "hole fill found no valid ear in a loop of length {loop_len}, used fallback triangle")
      }
      Warning::DegenerateTriangle { triangle } => {
        write!(f, "triangle {triangle} is degenerate (zero area)")
      }
    }
  }
}
