//! Sign application: merge the parity grid into the distance grid to
//! produce the final signed distance field.

use crate::parity::is_inside;

/// Negate every voxel whose parity is odd. Voxels untouched by the sweep
/// (still at the sentinel — should not occur for a non-empty mesh) keep
/// their positive sign.
pub fn apply(phi: &mut [f32], inside: &[i32]) {
  for (p, &parity) in phi.iter_mut().zip(inside) {
    if is_inside(parity) {
      *p = -p.abs();
    }
  }
}
