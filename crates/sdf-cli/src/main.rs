//! Command-line front end for generating signed distance fields from
//! triangle meshes.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use sdf_core::GridSpec;
use tracing::info;

/// Generate a signed distance field from a triangle mesh.
#[derive(Parser, Debug)]
#[command(name = "sdfgen")]
#[command(about = "Generate a signed distance field from an OBJ/STL mesh")]
struct Args {
  /// Path to the input mesh (.obj or .stl).
  input: PathBuf,

  /// Grid shape: a single cell size for an OBJ mesh, or nx [ny nz] for an
  /// STL mesh.
  #[arg(num_args = 1..=3)]
  grid: Vec<f32>,

  /// Path to write the binary signed distance field to.
  #[arg(short = 'o', long)]
  output: PathBuf,

  /// Cells of empty space outside the mesh bounding box.
  #[arg(short = 'p', long, default_value_t = 1)]
  padding: u32,

  /// Force the CPU backend (the only backend this build implements).
  #[arg(long)]
  cpu: bool,

  /// Run mesh repair (weld + fill holes) before gridding.
  #[arg(long)]
  fix: bool,

  /// Worker thread count; 0 lets rayon choose.
  #[arg(short = 't', long, default_value_t = 0)]
  threads: usize,

  /// Also write a legacy ASCII VTK file alongside the binary output.
  #[arg(long)]
  vtk: Option<PathBuf>,

  /// Enable debug logging (equivalent to RUST_LOG=debug).
  #[arg(short = 'v', long)]
  verbose: bool,
}

/// Distinguishes the two failure classes the exit-code contract cares
/// about: argument/parse/load errors, and output-write failures.
enum CliError {
  Load(anyhow::Error),
  Write(anyhow::Error),
}

fn main() {
  let args = Args::try_parse().unwrap_or_else(|e| {
    use clap::error::ErrorKind;
    match e.kind() {
      // --help/--version are not argument errors; keep clap's own exit(0).
      ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
      _ => {
        eprint!("{e}");
        std::process::exit(1);
      }
    }
  });

  let filter = if args.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
    .init();

  match run(args) {
    Ok(()) => {}
    Err(CliError::Load(e)) => {
      eprintln!("error: {e:#}");
      std::process::exit(1);
    }
    Err(CliError::Write(e)) => {
      eprintln!("error: {e:#}");
      std::process::exit(-1);
    }
  }
}

fn run(args: Args) -> Result<(), CliError> {
  if args.cpu {
    info!("forcing CPU backend (requested explicitly, and the only one this build has)");
  }
  if !sdf_core::is_gpu_available() && !args.cpu {
    info!(backend = "cpu", "no GPU backend available, using CPU");
  }

  let mesh = load_mesh(&args.input).map_err(CliError::Load)?;
  info!(vertices = mesh.vertices.len(), triangles = mesh.triangles.len(), "loaded mesh");

  let spec = grid_spec(&args).map_err(CliError::Load)?;
  let bounds = mesh
    .bounds()
    .ok_or_else(|| CliError::Load(anyhow::anyhow!("mesh has no triangles, cannot derive a grid")))?;
  let grid = sdf_core::resolve(spec, bounds)
    .context("resolving grid from mesh bounds")
    .map_err(CliError::Load)?;
  info!(nx = grid.nx, ny = grid.ny, nz = grid.nz, dx = grid.dx, "resolved grid");

  let options = sdf_core::Options {
    repair: args.fix,
    threads: args.threads,
    ..sdf_core::Options::default()
  };
  let result = sdf_core::make_level_set(&mesh, grid, options)
    .context("generating level set")
    .map_err(CliError::Load)?;

  for warning in &result.warnings {
    tracing::warn!("{warning}");
  }

  sdf_io::write_sdf(&args.output, &result.grid, &result.phi)
    .with_context(|| format!("writing {}", args.output.display()))
    .map_err(CliError::Write)?;
  info!(path = %args.output.display(), "wrote signed distance field");

  if let Some(vtk_path) = &args.vtk {
    sdf_io::write_vtk(vtk_path, &result.grid, &result.phi)
      .with_context(|| format!("writing {}", vtk_path.display()))
      .map_err(CliError::Write)?;
    info!(path = %vtk_path.display(), "wrote VTK visualization");
  }

  Ok(())
}

fn load_mesh(path: &std::path::Path) -> Result<sdf_core::Mesh> {
  match path.extension().and_then(|e| e.to_str()).map(|e| e.to_ascii_lowercase()) {
    Some(ext) if ext == "obj" => sdf_io::load_obj(path).map_err(Into::into),
    Some(ext) if ext == "stl" => sdf_io::load_stl(path).map_err(Into::into),
    other => bail!("unsupported mesh extension: {other:?} (expected .obj or .stl)"),
  }
}

fn grid_spec(args: &Args) -> Result<GridSpec> {
  let is_obj = args
    .input
    .extension()
    .and_then(|e| e.to_str())
    .map(|e| e.eq_ignore_ascii_case("obj"))
    .unwrap_or(false);

  if is_obj {
    let &[dx] = &args.grid[..] else {
      bail!("an OBJ mesh takes a single cell-size value after the input path, got {}", args.grid.len());
    };
    Ok(GridSpec::CellSize { dx, padding: args.padding })
  } else {
    match &args.grid[..] {
      &[nx] => Ok(GridSpec::GridCount {
        nx: nx as u32,
        ny: nx as u32,
        nz: nx as u32,
        padding: args.padding,
      }),
      &[nx, ny, nz] => Ok(GridSpec::GridCount {
        nx: nx as u32,
        ny: ny as u32,
        nz: nz as u32,
        padding: args.padding,
      }),
      _ => bail!("an STL mesh takes either a single nx or nx ny nz after the input path, got {} values", args.grid.len()),
    }
  }
}
