//! Orchestrator: the single public entry point. Configures the grid, runs
//! the narrow-band, parity, sweep, and sign stages in order, and exposes
//! the result.

use crate::analyzer::analyze;
use crate::error::{SdfError, Warning};
use crate::grid::{Fields, Grid};
use crate::mesh::Mesh;
use crate::{narrow_band, parity, repair, sign, sweep};

/// Output of a single SDF generation job.
pub struct LevelSet {
  pub grid: Grid,
  pub phi: Vec<f32>,
  pub warnings: Vec<Warning>,
}

/// Configuration for a single `make_level_set` call.
#[derive(Clone, Copy, Debug)]
pub struct Options {
  /// Exact band half-width in cells (default 1, must be >= 1).
  pub exact_band: u32,
  /// Whether to run mesh repair (weld + fill holes) before gridding.
  pub repair: bool,
  /// Weld tolerance used when `repair` is set.
  pub weld_tolerance: f32,
  /// Number of worker threads for the parallel stages; 0 means let rayon
  /// choose.
  pub threads: usize,
}

impl Default for Options {
  fn default() -> Self {
    Self {
      exact_band: 1,
      repair: false,
      weld_tolerance: 1e-5,
      threads: 0,
    }
  }
}

/// Generate a signed distance field for `mesh` over `grid`.
///
/// Allocates the three working arrays, runs the exact narrow-band pass,
/// the intersection parity pass, the fast sweep, and sign application in
/// order, and returns `phi`. `closest` and `inside` are private
/// intermediates, dropped before returning.
///
/// An empty mesh (no triangles) is not an error: the returned field is
/// all-sentinel and positive.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "orchestrator::make_level_set"))]
pub fn make_level_set(mesh: &Mesh, grid: Grid, options: Options) -> Result<LevelSet, SdfError> {
  if options.exact_band == 0 {
    return Err(SdfError::InvalidGrid {
      reason: "exact_band must be >= 1".to_string(),
    });
  }

  let mut warnings = Vec::new();

  let repaired;
  let mesh = if options.repair {
    let welded = repair::weld(mesh, options.weld_tolerance);
    let (filled, fill_warnings) = repair::fill_holes(&welded.mesh);
    for w in &fill_warnings {
      #[cfg(feature = "tracing")]
      tracing::warn!("{w}");
    }
    warnings.extend(fill_warnings);
    repaired = filled;
    &repaired
  } else {
    mesh
  };

  let analysis = analyze(mesh);
  if !analysis.is_manifold {
    let w = Warning::NonManifold { non_manifold_edges: analysis.non_manifold_edge_count };
    #[cfg(feature = "tracing")]
    tracing::warn!("{w}");
    warnings.push(w);
  }
  if !analysis.is_watertight {
    let w = Warning::NonWatertight { boundary_edges: analysis.boundary_edge_count };
    #[cfg(feature = "tracing")]
    tracing::warn!("{w}");
    warnings.push(w);
  }

  let mut fields = Fields::new(&grid);

  if mesh.is_empty() {
    return Ok(LevelSet { grid, phi: fields.phi, warnings });
  }

  let pool = build_pool(options.threads)?;
  pool.install(|| {
    {
      #[cfg(feature = "tracing")]
      let _span = tracing::debug_span!("narrow_band", triangles = mesh.triangles.len()).entered();
      narrow_band::run(mesh, &grid, options.exact_band, &mut fields, &mut warnings);
    }
    {
      #[cfg(feature = "tracing")]
      let _span = tracing::debug_span!("parity", voxels = grid.voxel_count()).entered();
      fields.inside = parity::run(mesh, &grid);
    }
  });
  drop(pool); // joined on drop; the scoped pool does not outlive this call.

  {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("sweep").entered();
    sweep::run(mesh, &grid, &mut fields);
  }
  {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("sign").entered();
    sign::apply(&mut fields.phi, &fields.inside);
  }

  Ok(LevelSet { grid, phi: fields.phi, warnings })
}

fn build_pool(threads: usize) -> Result<rayon::ThreadPool, SdfError> {
  rayon::ThreadPoolBuilder::new()
    .num_threads(threads)
    .build()
    .map_err(|e| SdfError::ThreadPool { reason: e.to_string() })
}

#[cfg(test)]
#[path = "orchestrator_test.rs"]
mod orchestrator_test;
