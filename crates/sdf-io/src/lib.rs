//! Mesh loaders (OBJ, STL) and field writers (binary SDF, VTK) around the
//! engine-agnostic `sdf-core` pipeline.

pub mod error;
pub mod obj;
pub mod sdf_binary;
pub mod stl;
pub mod vtk;

pub use error::{IoError, LoadError};
pub use obj::load_obj;
pub use sdf_binary::{read_sdf, write_sdf};
pub use stl::load_stl;
pub use vtk::write_vtk;
