use claims::debug_assert_ok;

use std::fmt;

use super::path::{Orientation, Path};
use super::point::Point;
use super::polygon::Polygon;
use super::scalar::Scalar;
use super::segment::Segment;
use crate::Error;

/// Where a point falls relative to a triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}

/// An ear candidate: the ordered triple `(left, center, right)`. The triple
/// must run counter-clockwise to be used as an ear; the diagonal is the
/// chord `right -> left` that closes it.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
  pub left: Point,
  pub center: Point,
  pub right: Point,
}

impl Triangle {
  pub fn new(left: Point, center: Point, right: Point) -> Triangle {
    Triangle { left, center, right }
  }

  /// Reorders a non-collinear triple to run counter-clockwise.
  ///
  /// # Panics
  ///
  /// Panics if the points are collinear.
  pub fn new_ccw(left: Point, center: Point, right: Point) -> Triangle {
    match Orientation::new(&left, &center, &right) {
      Orientation::CounterClockWise => Triangle::new(left, center, right),
      Orientation::ClockWise => Triangle::new(right, center, left),
      Orientation::CoLinear => panic!("cannot orient collinear points"),
    }
  }

  pub fn path(&self) -> Path {
    Path::new(self.left.clone(), self.center.clone(), self.right.clone())
  }

  /// The chord closing the ear.
  pub fn diagonal(&self) -> Segment {
    self.right.to(&self.left)
  }

  pub fn signed_area_2x(&self) -> Scalar {
    self.path().signed_area_2x()
  }

  pub fn signed_area(&self) -> Scalar {
    self.signed_area_2x() / Scalar::from_integer(2.into())
  }

  pub fn centroid(&self) -> Point {
    let three = Scalar::from_integer(3.into());
    Point::new(
      (self.left.x.clone() + self.center.x.clone() + self.right.x.clone()) / three.clone(),
      (self.left.y.clone() + self.center.y.clone() + self.right.y.clone()) / three,
    )
  }

  pub fn polygon(&self) -> Result<Polygon, Error> {
    Polygon::new(vec![self.left.clone(), self.center.clone(), self.right.clone()])
  }

  pub fn validate(&self) -> Result<(), Error> {
    if self.path().is_ccw() {
      Ok(())
    } else {
      Err(Error::NotConvex)
    }
  }

  /// O(1) point location by three orientation tests. Requires a
  /// counter-clockwise triangle.
  pub fn locate(&self, p: &Point) -> PointLocation {
    use Orientation::*;
    debug_assert_ok!(self.validate());
    let ab = Orientation::new(&self.left, &self.center, p);
    let bc = Orientation::new(&self.center, &self.right, p);
    let ca = Orientation::new(&self.right, &self.left, p);
    if ab == ClockWise || bc == ClockWise || ca == ClockWise {
      PointLocation::Outside
    } else if ab == CoLinear || bc == CoLinear || ca == CoLinear {
      PointLocation::OnBoundary
    } else {
      PointLocation::Inside
    }
  }
}

impl fmt::Display for Triangle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Triangle({}, {}, {})", self.left, self.center, self.right)
  }
}
