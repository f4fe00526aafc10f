use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::algorithms::{convex, earclip, guards, stitch};
use crate::data::{
  ComponentId, ConvexComponent, Guard, GuardId, Orientation, Point, Polygon, Ring, Scalar,
  Segment, Triangle, VisibilityMap,
};
use crate::Error;

/// A gallery floor plan: an outer polygon and zero or more polygonal holes.
///
/// Construction validates the region once. Everything derived from it (the
/// stitched ring, the triangulation, the convex components, the guard set,
/// the visibility map) is computed lazily on first access and cached for
/// the lifetime of the gallery, inputs untouched. Caches, including the
/// per-segment visibility memo, are owned by the gallery and never shared;
/// the gallery is single-threaded and needs no locks.
#[derive(Debug)]
pub struct Gallery {
  outer: Polygon,
  holes: Vec<Polygon>,
  stitched: RefCell<Option<Ring>>,
  ears: RefCell<Option<Vec<Triangle>>>,
  components: RefCell<Option<BTreeMap<ComponentId, ConvexComponent>>>,
  guards: RefCell<Option<BTreeMap<GuardId, Guard>>>,
  visibility: RefCell<Option<VisibilityMap<Point>>>,
  seen: RefCell<HashMap<Segment, bool>>,
}

impl Gallery {
  /// Builds a gallery from the boundary vertices and the vertex lists of
  /// its holes. Fails with `PolygonNotSimple` unless every hole is strictly
  /// inside the boundary, clear of it, and clear of every other hole.
  pub fn new(outer: Vec<Point>, holes: Vec<Vec<Point>>) -> Result<Gallery, Error> {
    let outer = Polygon::new(outer)?;
    let holes = holes
      .into_iter()
      .map(Polygon::new)
      .collect::<Result<Vec<_>, _>>()?;
    Gallery::validate(&outer, &holes)?;
    Ok(Gallery {
      outer,
      holes,
      stitched: RefCell::new(None),
      ears: RefCell::new(None),
      components: RefCell::new(None),
      guards: RefCell::new(None),
      visibility: RefCell::new(None),
      seen: RefCell::new(HashMap::new()),
    })
  }

  fn validate(outer: &Polygon, holes: &[Polygon]) -> Result<(), Error> {
    let boundary = outer.edges();
    for (i, hole) in holes.iter().enumerate() {
      if !hole.ring().iter().all(|p| outer.contains_point(p, false)) {
        return Err(Error::PolygonNotSimple(format!(
          "hole {} is not strictly inside the boundary",
          i
        )));
      }
      for edge in hole.edges() {
        for boundary_edge in &boundary {
          if edge.intersects(boundary_edge, true) && !edge.connects(boundary_edge) {
            return Err(Error::PolygonNotSimple(format!(
              "hole {} touches or crosses the boundary",
              i
            )));
          }
        }
      }
      for p in hole.ring().iter() {
        if boundary.iter().any(|edge| edge.contains_point(p, true)) {
          return Err(Error::PolygonNotSimple(format!(
            "hole {} has a vertex on the boundary",
            i
          )));
        }
      }
    }
    for i in 0..holes.len() {
      for other in &holes[i + 1..] {
        if holes[i].overlaps_polygon(other, true) {
          return Err(Error::PolygonNotSimple("holes intersect or touch".to_string()));
        }
      }
    }
    Ok(())
  }

  pub fn outer(&self) -> &Polygon {
    &self.outer
  }

  pub fn holes(&self) -> &[Polygon] {
    &self.holes
  }

  /// Boundary area minus the hole areas.
  pub fn signed_area(&self) -> Scalar {
    let mut area = self.outer.signed_area();
    for hole in &self.holes {
      area -= hole.area();
    }
    area
  }

  /// The stitched polygon: one counter-clockwise ring threading every hole
  /// onto the boundary with bridge edges.
  pub fn points(&self) -> Result<Ring, Error> {
    if let Some(ring) = self.stitched.borrow().as_ref() {
      return Ok(ring.clone());
    }
    let ring = stitch::stitch(&self.outer, &self.holes)?;
    *self.stitched.borrow_mut() = Some(ring.clone());
    Ok(ring)
  }

  /// The ear-clipping triangulation of the stitched polygon.
  pub fn ears(&self) -> Result<Vec<Triangle>, Error> {
    if let Some(ears) = self.ears.borrow().as_ref() {
      return Ok(ears.clone());
    }
    let ears = earclip::triangulate(&self.points()?)?;
    *self.ears.borrow_mut() = Some(ears.clone());
    Ok(ears)
  }

  /// The maximal convex components covering the stitched polygon.
  pub fn convex_components(&self) -> Result<BTreeMap<ComponentId, ConvexComponent>, Error> {
    if let Some(components) = self.components.borrow().as_ref() {
      return Ok(components.clone());
    }
    let components = convex::merge_components(&self.ears()?)?;
    *self.components.borrow_mut() = Some(components.clone());
    Ok(components)
  }

  /// The selected guards, after dominated-guard pruning.
  pub fn guards(&self) -> Result<BTreeMap<GuardId, Guard>, Error> {
    if let Some(guards) = self.guards.borrow().as_ref() {
      return Ok(guards.clone());
    }
    let guards = guards::select_guards(self, self.convex_components()?)?;
    *self.guards.borrow_mut() = Some(guards.clone());
    Ok(guards)
  }

  /// For each selected guard, the stitched vertices it sees.
  pub fn visibility(&self) -> Result<VisibilityMap<Point>, Error> {
    if let Some(map) = self.visibility.borrow().as_ref() {
      return Ok(map.clone());
    }
    let stitched = self.points()?;
    let mut map: VisibilityMap<Point> = VisibilityMap::new();
    for guard in self.guards()?.values() {
      let seen: BTreeSet<Point> = stitched
        .iter()
        .filter(|p| self.sees(guard.position(), p))
        .cloned()
        .collect();
      map.insert(guard.id(), seen);
    }
    *self.visibility.borrow_mut() = Some(map.clone());
    Ok(map)
  }

  /// Point-in-region. Any boundary contact (outer or hole) resolves to
  /// `inclusive`; otherwise the point must be inside the outer polygon and
  /// strictly outside every hole.
  pub fn contains_point(&self, p: &Point, inclusive: bool) -> bool {
    for edge in self.all_edges() {
      if edge.contains_point(p, true) {
        return inclusive;
      }
    }
    if !self.outer.contains_point(p, inclusive) {
      return false;
    }
    !self.holes.iter().any(|hole| hole.contains_point(p, false))
  }

  /// Segment-in-region: both endpoints and the midpoint must be in the
  /// region and no hole edge may properly cross the segment. Collinear
  /// grazing along a hole boundary is allowed; bridges do exactly that.
  pub fn contains_segment(&self, s: &Segment, inclusive: bool) -> bool {
    if !self.outer.contains_segment(s, inclusive) {
      return false;
    }
    if self
      .holes
      .iter()
      .any(|hole| hole.contains_point(&s.start, false) || hole.contains_point(&s.end, false))
    {
      return false;
    }
    if !self.contains_point(&s.midpoint(), inclusive) {
      return false;
    }
    for hole in &self.holes {
      for edge in hole.edges() {
        if edge.connects(s) {
          continue;
        }
        if !edge.intersects(s, false) {
          continue;
        }
        if Orientation::is_colinear(&edge.start, &edge.end, &s.start)
          || Orientation::is_colinear(&edge.start, &edge.end, &s.end)
        {
          continue;
        }
        return false;
      }
    }
    true
  }

  /// Polygon-in-region: every edge and every vertex is contained.
  pub fn contains_polygon(&self, polygon: &Polygon, inclusive: bool) -> bool {
    polygon
      .edges()
      .iter()
      .all(|edge| self.contains_segment(edge, inclusive))
      && polygon
        .ring()
        .iter()
        .all(|p| self.contains_point(p, inclusive))
  }

  /// The visibility primitive: can `source` see `target`? A point sees
  /// itself; otherwise the connecting segment must stay in the region and
  /// no non-incident edge may properly cross it, except collinearly
  /// (grazing along a wall does not block sight).
  ///
  /// Results are memoized per unordered segment for the gallery's lifetime.
  pub fn sees(&self, source: &Point, target: &Point) -> bool {
    if source == target {
      return true;
    }
    let segment = source.to(target);
    if let Some(&visible) = self.seen.borrow().get(&segment) {
      return visible;
    }
    let visible = self.compute_sees(&segment);
    self.seen.borrow_mut().insert(segment, visible);
    visible
  }

  /// A component is seen iff every one of its vertices is.
  pub fn sees_component(&self, source: &Point, component: &ConvexComponent) -> bool {
    component.vertices().all(|p| self.sees(source, p))
  }

  fn compute_sees(&self, segment: &Segment) -> bool {
    if !self.contains_segment(segment, true) {
      return false;
    }
    for edge in self.all_edges() {
      if edge.connects(segment) {
        continue;
      }
      if !edge.intersects(segment, false) {
        continue;
      }
      if Orientation::is_colinear(&edge.start, &edge.end, &segment.start)
        || Orientation::is_colinear(&edge.start, &edge.end, &segment.end)
      {
        continue;
      }
      return false;
    }
    true
  }

  fn all_edges(&self) -> impl Iterator<Item = Segment> + '_ {
    self
      .outer
      .edges()
      .into_iter()
      .chain(self.holes.iter().flat_map(|hole| hole.edges()))
  }
}
