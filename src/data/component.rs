use std::fmt;

use super::point::Point;
use super::polygon::Polygon;
use super::scalar::Scalar;
use crate::Error;

/// Identifier of a convex component. Ids are handed out sequentially by the
/// pipeline run that owns the component, which keeps merge encounter order
/// reproducible.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComponentId(u64);

impl ComponentId {
  pub(crate) fn new(id: u64) -> ComponentId {
    ComponentId(id)
  }
}

impl From<ComponentId> for u64 {
  fn from(id: ComponentId) -> u64 {
    id.0
  }
}

impl fmt::Display for ComponentId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "c{}", self.0)
  }
}

/// A convex, counter-clockwise piece of the stitched polygon. Equality is
/// by id: the merger removes components by identity from a live map while
/// structurally equal polygons may coexist during exploration.
#[derive(Debug, Clone)]
pub struct ConvexComponent {
  id: ComponentId,
  polygon: Polygon,
}

impl ConvexComponent {
  /// Wraps `polygon`, normalizing its orientation to counter-clockwise.
  pub fn new(id: ComponentId, polygon: Polygon) -> Result<ConvexComponent, Error> {
    if !polygon.is_convex() {
      return Err(Error::NotConvex);
    }
    let polygon = if polygon.ring().is_cw() {
      polygon.reversed()
    } else {
      polygon
    };
    Ok(ConvexComponent { id, polygon })
  }

  pub fn id(&self) -> ComponentId {
    self.id
  }

  pub fn polygon(&self) -> &Polygon {
    &self.polygon
  }

  pub fn area(&self) -> Scalar {
    self.polygon.area()
  }

  pub fn vertices(&self) -> impl Iterator<Item = &Point> {
    self.polygon.ring().iter()
  }

  /// Merges two components across their single shared edge, producing a new
  /// component under `id`.
  ///
  /// Both rings are counter-clockwise, so they traverse the shared edge in
  /// opposite directions. The right ring is flipped to agree, both rings are
  /// rotated so the edge sits at a known position, the edge interior is
  /// dropped, and the remainders are concatenated. The result must keep
  /// `|left| + |right| - 2` vertices and stay convex.
  pub fn try_merge(&self, other: &ConvexComponent, id: ComponentId) -> Result<ConvexComponent, Error> {
    let left = self.polygon.ring();
    let right = other.polygon.ring();
    let mut shared = left.shared_edges(right);
    if shared.is_empty() {
      return Err(Error::ComponentsNoSharedEdge);
    }
    if shared.len() > 1 {
      return Err(Error::MergeTooManyPoints);
    }
    let edge = shared.remove(0);
    // orient the edge the way `left` walks it
    let (s0, s1) = if left.contains_directed_edge(&edge.start, &edge.end) {
      (edge.start, edge.end)
    } else {
      (edge.end, edge.start)
    };
    let right = if right.contains_directed_edge(&s0, &s1) {
      right.clone()
    } else {
      right.reversed()
    };
    let left = left.rotate_past(&s1)?; // ends ..., s0, s1
    let right = right.rotate_to(&s0)?; // starts s0, s1, ...
    let expected = left.len() + right.len() - 2;
    let left_rest = left.slice(0, left.len() - 2);
    let right_rest = right.slice(2, right.len() - 2);
    let mut points = left_rest.into_points();
    points.push(s0);
    points.extend(right_rest.into_points());
    points.push(s1);
    if points.len() < expected {
      return Err(Error::MergeError("merged ring lost vertices".to_string()));
    }
    let polygon = Polygon::new(points)?;
    if !polygon.is_convex() {
      return Err(Error::NotConvex);
    }
    ConvexComponent::new(id, polygon)
  }
}

impl PartialEq for ConvexComponent {
  fn eq(&self, other: &ConvexComponent) -> bool {
    self.id == other.id
  }
}

impl Eq for ConvexComponent {}
