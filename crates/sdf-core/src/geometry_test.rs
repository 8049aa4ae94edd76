use super::*;

#[test]
fn distance_to_interior_is_perpendicular() {
  let a = Vec3::new(0.0, 0.0, 0.0);
  let b = Vec3::new(1.0, 0.0, 0.0);
  let c = Vec3::new(0.0, 1.0, 0.0);
  let p = Vec3::new(0.25, 0.25, 2.0);
  let d = point_triangle_distance(p, a, b, c);
  assert!((d - 2.0).abs() < 1e-5);
}

#[test]
fn distance_to_vertex_region() {
  let a = Vec3::new(0.0, 0.0, 0.0);
  let b = Vec3::new(1.0, 0.0, 0.0);
  let c = Vec3::new(0.0, 1.0, 0.0);
  let p = Vec3::new(-1.0, -1.0, 0.0);
  let d = point_triangle_distance(p, a, b, c);
  assert!((d - a.distance(p)).abs() < 1e-5);
}

#[test]
fn distance_to_edge_region() {
  let a = Vec3::new(0.0, 0.0, 0.0);
  let b = Vec3::new(2.0, 0.0, 0.0);
  let c = Vec3::new(0.0, 2.0, 0.0);
  let p = Vec3::new(1.0, -1.0, 0.0);
  let d = point_triangle_distance(p, a, b, c);
  assert!((d - 1.0).abs() < 1e-5);
}

#[test]
fn degenerate_zero_area_triangle_falls_back_to_segment() {
  // Collinear triangle collapses to the segment a-c.
  let a = Vec3::new(0.0, 0.0, 0.0);
  let b = Vec3::new(1.0, 0.0, 0.0);
  let c = Vec3::new(2.0, 0.0, 0.0);
  let p = Vec3::new(1.0, 1.0, 0.0);
  let d = point_triangle_distance(p, a, b, c);
  assert!(d.is_finite());
  assert!((d - 1.0).abs() < 1e-5);
}

#[test]
fn fully_collapsed_triangle_is_point_distance() {
  let a = Vec3::new(3.0, 3.0, 3.0);
  let p = Vec3::new(3.0, 3.0, 5.0);
  let d = point_triangle_distance(p, a, a, a);
  assert!(d.is_finite());
  assert!((d - 2.0).abs() < 1e-5);
}

#[test]
fn two_coincident_vertices_falls_back_to_segment_distance_without_nan() {
  // a and b coincide; the triangle collapses to the segment a-c. Without
  // the a == b short-circuit, this exact configuration drives the edge-ab
  // Voronoi test into a 0.0 / 0.0 division.
  let a = Vec3::new(0.0, 0.0, 0.0);
  let b = Vec3::new(0.0, 0.0, 0.0);
  let c = Vec3::new(1.0, 0.0, 0.0);
  let p = Vec3::new(0.5, 1.0, 0.0);
  let closest = closest_point_on_triangle(p, a, b, c);
  assert!(closest.is_finite());
  assert!((closest - Vec3::new(0.5, 0.0, 0.0)).length() < 1e-5);
  let d = point_triangle_distance(p, a, b, c);
  assert!(d.is_finite());
  assert!((d - 1.0).abs() < 1e-5);
}

#[test]
fn orientation_sign_matches_winding() {
  let p = Vec3::new(0.0, 0.0, 0.0);
  let p1 = Vec3::new(1.0, 0.0, 0.0);
  let p2 = Vec3::new(0.0, 1.0, 0.0);
  assert!(orientation(p, p1, p2) > 0.0);
  assert!(orientation(p, p2, p1) < 0.0);
}

#[test]
fn orientation_on_line_is_zero() {
  let p = Vec3::new(0.5, 0.0, 0.0);
  let p1 = Vec3::new(0.0, 0.0, 0.0);
  let p2 = Vec3::new(1.0, 0.0, 0.0);
  assert_eq!(orientation(p, p1, p2), 0.0);
}

#[test]
fn aabb_expanded_grows_on_all_axes() {
  let aabb = Aabb3::from_points(&[Vec3::ZERO, Vec3::ONE]).expanded(1.0);
  assert_eq!(aabb.min, Vec3::splat(-1.0));
  assert_eq!(aabb.max, Vec3::splat(2.0));
}
