use std::cmp::Ordering;

use super::point::Point;
use super::scalar::Scalar;

/// The turn made by three points, decided by the exact sign of
/// `(qx - px)(ry - py) - (qy - py)(rx - px)`. Every convexity, containment
/// and intersection decision in the crate reduces to this predicate; it is
/// never approximated through floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}

impl Orientation {
  pub fn new(p: &Point, q: &Point, r: &Point) -> Orientation {
    let lhs = (q.x.clone() - p.x.clone()) * (r.y.clone() - p.y.clone());
    let rhs = (q.y.clone() - p.y.clone()) * (r.x.clone() - p.x.clone());
    match lhs.cmp(&rhs) {
      Ordering::Less => Orientation::ClockWise,
      Ordering::Equal => Orientation::CoLinear,
      Ordering::Greater => Orientation::CounterClockWise,
    }
  }

  pub fn is_colinear(p: &Point, q: &Point, r: &Point) -> bool {
    Orientation::new(p, q, r) == Orientation::CoLinear
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}

/// An oriented triple of points. Only the sign of its doubled signed area is
/// ever consulted.
#[derive(Debug, Clone)]
pub struct Path {
  pub start: Point,
  pub center: Point,
  pub end: Point,
}

impl Path {
  pub fn new(start: Point, center: Point, end: Point) -> Path {
    Path { start, center, end }
  }

  pub fn orientation(&self) -> Orientation {
    Orientation::new(&self.start, &self.center, &self.end)
  }

  pub fn is_ccw(&self) -> bool {
    self.orientation() == Orientation::CounterClockWise
  }

  pub fn is_cw(&self) -> bool {
    self.orientation() == Orientation::ClockWise
  }

  pub fn is_collinear(&self) -> bool {
    self.orientation() == Orientation::CoLinear
  }

  /// Twice the signed area of the triangle `start`, `center`, `end`.
  pub fn signed_area_2x(&self) -> Scalar {
    let ux = self.center.x.clone() - self.start.x.clone();
    let uy = self.center.y.clone() - self.start.y.clone();
    let vx = self.end.x.clone() - self.start.x.clone();
    let vy = self.end.y.clone() - self.start.y.clone();
    ux * vy - uy * vx
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data::scalar::scalar;

  fn orient(p: (i64, i64), q: (i64, i64), r: (i64, i64)) -> Orientation {
    Orientation::new(&p.into(), &q.into(), &r.into())
  }

  #[test]
  fn turns() {
    assert_eq!(orient((0, 0), (1, 1), (2, 2)), Orientation::CoLinear);
    assert_eq!(orient((0, 0), (0, 1), (2, 2)), Orientation::ClockWise);
    assert_eq!(orient((0, 0), (0, 1), (-2, 2)), Orientation::CounterClockWise);
    assert_eq!(orient((0, 0), (0, 0), (0, 0)), Orientation::CoLinear);
  }

  #[test]
  fn path_signed_area() {
    let path = Path::new((0, 0).into(), (4, 0).into(), (0, 4).into());
    assert_eq!(path.signed_area_2x(), scalar(16));
    assert!(path.is_ccw());
  }

  use test_strategy::proptest;

  #[proptest]
  fn swapping_endpoints_flips_the_turn(pts: [i8; 6]) {
    let [a, b, c, d, e, f] = pts;
    let p: Point = (a as i64, b as i64).into();
    let q: Point = (c as i64, d as i64).into();
    let r: Point = (e as i64, f as i64).into();
    assert_eq!(Orientation::new(&p, &q, &r), Orientation::new(&r, &q, &p).reverse());
  }
}
