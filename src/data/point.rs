use std::convert::TryFrom;
use std::fmt;

use super::scalar::{parse_scalar, Scalar};
use super::segment::Segment;
use crate::Error;

/// A point in the plane with exact rational coordinates.
///
/// Points are value-typed: equality is componentwise and the ordering is
/// lexicographic by `(x, y)`, so points can key ordered maps and sets.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
  pub x: Scalar,
  pub y: Scalar,
}

impl Point {
  pub fn new(x: Scalar, y: Scalar) -> Point {
    Point { x, y }
  }

  /// Parses a point from a pair of decimal strings, preserving the written
  /// precision.
  pub fn parse(x: &str, y: &str) -> Result<Point, Error> {
    Ok(Point::new(parse_scalar(x)?, parse_scalar(y)?))
  }

  /// The segment from `self` to `other`.
  pub fn to(&self, other: &Point) -> Segment {
    Segment::new(self.clone(), other.clone())
  }
}

impl From<(Scalar, Scalar)> for Point {
  fn from((x, y): (Scalar, Scalar)) -> Point {
    Point::new(x, y)
  }
}

impl From<(i64, i64)> for Point {
  fn from((x, y): (i64, i64)) -> Point {
    Point::new(Scalar::from_integer(x.into()), Scalar::from_integer(y.into()))
  }
}

impl TryFrom<(&str, &str)> for Point {
  type Error = Error;
  fn try_from((x, y): (&str, &str)) -> Result<Point, Error> {
    Point::parse(x, y)
  }
}

impl fmt::Display for Point {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::BTreeSet;

  #[test]
  fn equality_is_componentwise() {
    let a = Point::parse("2.0", "4.0").unwrap();
    let b: Point = (2, 4).into();
    assert_eq!(a, b);
    assert_ne!(b, (4, 2).into());
  }

  #[test]
  fn order_is_lexicographic() {
    let pts: BTreeSet<Point> = vec![(4, 0), (0, 4), (0, 0), (4, 4)]
      .into_iter()
      .map(Point::from)
      .collect();
    let sorted: Vec<Point> = pts.into_iter().collect();
    assert_eq!(
      sorted,
      vec![(0, 0).into(), (0, 4).into(), (4, 0).into(), (4, 4).into()]
    );
  }

  #[test]
  fn parse_rejects_bad_coordinates() {
    assert!(Point::parse("1.0", "abc").is_err());
  }
}
