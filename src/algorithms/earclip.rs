//! Ear-clipping triangulation of the stitched ring.

use crate::data::{PointLocation, Polygon, Ring, Triangle};
use crate::Error;

/// Decomposes a counter-clockwise ring into counter-clockwise triangles
/// whose interiors are pairwise disjoint and whose union is the ring.
///
/// The ring may repeat bridge vertices (it is only weakly simple), which is
/// why ears are validated three ways: the triple must turn counter-clockwise,
/// its diagonal must stay inside the remaining polygon, and no other vertex
/// may sit strictly inside it.
pub fn triangulate(ring: &Ring) -> Result<Vec<Triangle>, Error> {
  let mut points = ring.clone();
  let mut ears: Vec<Triangle> = Vec::new();
  while points.len() > 3 {
    let remaining = Polygon::new(points.points().to_vec())?;
    let n = points.len();
    let mut clipped: Option<usize> = None;
    for j in 0..n {
      let ear = Triangle::new(
        points.point_at(j as isize - 1).clone(),
        points.point_at(j as isize).clone(),
        points.point_at(j as isize + 1).clone(),
      );
      if !ear.path().is_ccw() {
        continue;
      }
      if !remaining.contains_segment(&ear.diagonal(), true) {
        continue;
      }
      let prev = (j + n - 1) % n;
      let next = (j + 1) % n;
      let blocked = (0..n).any(|k| {
        k != prev
          && k != j
          && k != next
          && ear.locate(points.point_at(k as isize)) == PointLocation::Inside
      });
      if blocked {
        continue;
      }
      ears.push(ear);
      clipped = Some(j);
      break;
    }
    match clipped {
      Some(j) => points = points.without(j),
      None => {
        return Err(Error::EarClippingFailure(format!(
          "no ear among {} remaining points",
          points.len()
        )))
      }
    }
  }
  if points.len() < 3 {
    return Err(Error::PolygonTooFewPoints);
  }
  // the residue is a single triangle, dropped if it has collapsed flat
  let a = points.point_at(0).clone();
  let b = points.point_at(1).clone();
  let c = points.point_at(2).clone();
  let last = Triangle::new(a, b, c);
  if !last.path().is_collinear() {
    ears.push(Triangle::new_ccw(last.left, last.center, last.right));
  }
  Ok(ears)
}
