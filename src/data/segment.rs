use std::fmt;
use std::hash::{Hash, Hasher};

use num_traits::ToPrimitive;

use super::bounds::Bounds;
use super::path::Orientation;
use super::point::Point;
use super::scalar::Scalar;
use Orientation::*;

/// A line segment between two points. Equality and hashing ignore the
/// direction: `a -- b` and `b -- a` are the same segment, which is what
/// lets segments key edge indices and visibility caches.
#[derive(Debug, Clone)]
pub struct Segment {
  pub start: Point,
  pub end: Point,
}

impl Segment {
  pub fn new(start: Point, end: Point) -> Segment {
    Segment { start, end }
  }

  #[must_use]
  pub fn reversed(&self) -> Segment {
    Segment::new(self.end.clone(), self.start.clone())
  }

  /// Endpoints ordered by `(x, y)`; the canonical form behind `Eq`/`Hash`.
  fn endpoints_ordered(&self) -> (&Point, &Point) {
    if self.start <= self.end {
      (&self.start, &self.end)
    } else {
      (&self.end, &self.start)
    }
  }

  pub fn bounds(&self) -> Bounds {
    Bounds::of_points([&self.start, &self.end])
      .expect("a segment always has two endpoints")
  }

  /// True iff the segments share at least one endpoint.
  pub fn connects(&self, other: &Segment) -> bool {
    self.start == other.start
      || self.start == other.end
      || self.end == other.start
      || self.end == other.end
  }

  /// True iff `p` lies on the segment's supporting line and within its
  /// bounding box (strictly within for `inclusive = false`).
  pub fn contains_point(&self, p: &Point, inclusive: bool) -> bool {
    Orientation::is_colinear(&self.start, &self.end, p)
      && self.bounds().contains_point(p, inclusive)
  }

  /// Classical four-orientation intersection test with collinear-overlap
  /// handling. Segments that share only an endpoint intersect when
  /// `inclusive` and do not when strict.
  pub fn intersects(&self, other: &Segment, inclusive: bool) -> bool {
    if !self.bounds().overlaps(&other.bounds(), inclusive) {
      return false;
    }
    let o1 = Orientation::new(&self.start, &self.end, &other.start);
    let o2 = Orientation::new(&self.start, &self.end, &other.end);
    let o3 = Orientation::new(&other.start, &other.end, &self.start);
    let o4 = Orientation::new(&other.start, &other.end, &self.end);
    if o1 != CoLinear && o1 == o2.reverse() && o3 != CoLinear && o3 == o4.reverse() {
      return true;
    }
    (o1 == CoLinear && self.contains_point(&other.start, inclusive))
      || (o2 == CoLinear && self.contains_point(&other.end, inclusive))
      || (o3 == CoLinear && other.contains_point(&self.start, inclusive))
      || (o4 == CoLinear && other.contains_point(&self.end, inclusive))
  }

  /// Exact squared length; the tie-break metric for bridge candidates.
  pub fn length_sq(&self) -> Scalar {
    let dx = self.end.x.clone() - self.start.x.clone();
    let dy = self.end.y.clone() - self.start.y.clone();
    dx.clone() * dx + dy.clone() * dy
  }

  /// Approximate length, for reporting only; never feeds a predicate.
  pub fn length(&self) -> f64 {
    self.length_sq().to_f64().map(f64::sqrt).unwrap_or(f64::NAN)
  }

  pub fn midpoint(&self) -> Point {
    let two = Scalar::from_integer(2.into());
    Point::new(
      (self.start.x.clone() + self.end.x.clone()) / two.clone(),
      (self.start.y.clone() + self.end.y.clone()) / two,
    )
  }
}

impl PartialEq for Segment {
  fn eq(&self, other: &Segment) -> bool {
    self.endpoints_ordered() == other.endpoints_ordered()
  }
}

impl Eq for Segment {}

impl Hash for Segment {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.endpoints_ordered().hash(state)
  }
}

impl fmt::Display for Segment {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} -- {}", self.start, self.end)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn seg(a: (i64, i64), b: (i64, i64)) -> Segment {
    Segment::new(a.into(), b.into())
  }

  //             P6
  //
  //         P5
  //
  // P4  P2
  //
  // P1  P3
  //
  const P1: (i64, i64) = (0, 0);
  const P2: (i64, i64) = (1, 1);
  const P3: (i64, i64) = (1, 0);
  const P4: (i64, i64) = (0, 1);
  const P5: (i64, i64) = (2, 2);
  const P6: (i64, i64) = (3, 3);

  #[test]
  fn equality_ignores_direction() {
    assert_eq!(seg(P1, P2), seg(P2, P1));
    assert_ne!(seg(P1, P2), seg(P1, P3));
  }

  #[test]
  fn proper_crossing() {
    assert!(seg(P1, P2).intersects(&seg(P3, P4), true));
    assert!(seg(P1, P2).intersects(&seg(P3, P4), false));
  }

  #[test]
  fn disjoint_segments() {
    assert!(!seg(P1, P3).intersects(&seg(P2, P4), true));
  }

  #[test]
  fn shared_endpoint_is_inclusive_only() {
    let a = seg(P1, P2);
    let b = seg(P2, P3);
    assert!(a.connects(&b));
    assert!(a.intersects(&b, true));
    assert!(!a.intersects(&b, false));
  }

  #[test]
  fn collinear_overlap() {
    assert!(seg(P1, P5).intersects(&seg(P2, P6), true));
    assert!(seg(P1, P5).intersects(&seg(P2, P6), false));
    // touching end to end on the same line
    assert!(seg(P1, P2).intersects(&seg(P2, P5), true));
    assert!(!seg(P1, P2).intersects(&seg(P2, P5), false));
  }

  #[test]
  fn contains_point_per_flag() {
    let diag = seg(P1, P5);
    assert!(diag.contains_point(&P2.into(), true));
    assert!(diag.contains_point(&P2.into(), false));
    assert!(diag.contains_point(&P1.into(), true));
    assert!(!diag.contains_point(&P1.into(), false));
    assert!(!diag.contains_point(&P3.into(), true));
  }

  #[test]
  fn length_is_reporting_only() {
    assert_eq!(seg(P1, (3, 4)).length_sq(), crate::data::scalar::scalar(25));
    assert!((seg(P1, (3, 4)).length() - 5.0).abs() < 1e-12);
  }

  use test_strategy::proptest;

  #[proptest]
  fn flip_intersects_prop(pts: [i8; 8]) {
    let [a, b, c, d, e, f, g, h] = pts;
    let l1 = seg((a as i64, b as i64), (c as i64, d as i64));
    let l2 = seg((e as i64, f as i64), (g as i64, h as i64));
    assert_eq!(l1.intersects(&l2, true), l2.intersects(&l1, true));
    assert_eq!(l1.intersects(&l2, false), l2.intersects(&l1, false));
  }
}
