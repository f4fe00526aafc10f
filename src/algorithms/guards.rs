//! Guard selection: greedy set cover over the convex components, followed
//! by dominated-guard pruning over the stitched vertices.

use std::collections::{BTreeMap, BTreeSet};

use crate::data::{ComponentId, ConvexComponent, Guard, GuardId, Point, VisibilityMap};
use crate::gallery::Gallery;
use crate::Error;

/// Chooses vertex guards for `gallery` over `components` (consumed: the
/// cover loop removes components as they are covered).
///
/// Candidates are every vertex appearing in any component, numbered in
/// ascending `(x, y)` order. A candidate covers a component iff it sees all
/// of the component's vertices. Each round takes the candidate covering the
/// most components, ties to the largest id; a best of zero coverage is a
/// `GuardCoverageFailure`. Afterwards, any guard whose seen vertices are
/// jointly seen by the others is dropped.
pub fn select_guards(
  gallery: &Gallery,
  mut components: BTreeMap<ComponentId, ConvexComponent>,
) -> Result<BTreeMap<GuardId, Guard>, Error> {
  let stitched = gallery.points()?;

  let vertices: BTreeSet<Point> = components
    .values()
    .flat_map(|c| c.vertices().cloned())
    .collect();
  let mut candidates: BTreeMap<GuardId, Guard> = BTreeMap::new();
  for (n, position) in vertices.into_iter().enumerate() {
    let id = GuardId::new(n as u64);
    candidates.insert(id, Guard::new(id, position));
  }

  let mut guards: BTreeMap<GuardId, Guard> = BTreeMap::new();
  while !components.is_empty() {
    let mut coverage: VisibilityMap<ComponentId> = VisibilityMap::new();
    for guard in candidates.values() {
      let seen: BTreeSet<ComponentId> = components
        .values()
        .filter(|c| gallery.sees_component(guard.position(), c))
        .map(ConvexComponent::id)
        .collect();
      coverage.insert(guard.id(), seen);
    }
    let best = coverage.best()?;
    let covered: BTreeSet<ComponentId> = coverage
      .get(&best)
      .cloned()
      .unwrap_or_default();
    let guard = candidates
      .remove(&best)
      .expect("the best guard is drawn from the candidates");
    for id in &covered {
      components.remove(id);
    }
    guards.insert(guard.id(), guard);
  }

  prune_dominated(gallery, &stitched.into_points(), &mut guards)?;
  Ok(guards)
}

/// Removes guards whose seen-vertex set is covered by the union of the
/// others, one at a time, re-checking total coverage after each removal.
fn prune_dominated(
  gallery: &Gallery,
  stitched: &[Point],
  guards: &mut BTreeMap<GuardId, Guard>,
) -> Result<(), Error> {
  loop {
    let mut visibility: VisibilityMap<Point> = VisibilityMap::new();
    for guard in guards.values() {
      let seen: BTreeSet<Point> = stitched
        .iter()
        .filter(|p| gallery.sees(guard.position(), p))
        .cloned()
        .collect();
      visibility.insert(guard.id(), seen);
    }
    for p in stitched {
      if visibility.seen_by(p).is_empty() {
        return Err(Error::GuardCoverageFailure(format!(
          "vertex {} is seen by no guard",
          p
        )));
      }
    }
    let mut dominated: Option<GuardId> = None;
    for guard in guards.values() {
      let own = match visibility.get(&guard.id()) {
        Some(own) => own,
        None => continue,
      };
      let others: BTreeSet<Point> = guards
        .values()
        .filter(|other| other.id() != guard.id())
        .flat_map(|other| {
          visibility
            .get(&other.id())
            .into_iter()
            .flat_map(|seen| seen.iter().cloned())
        })
        .collect();
      if own.is_subset(&others) {
        dominated = Some(guard.id());
        break;
      }
    }
    match dominated {
      Some(id) => {
        guards.remove(&id);
      }
      None => return Ok(()),
    }
  }
}
