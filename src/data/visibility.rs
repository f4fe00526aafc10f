use std::collections::{BTreeMap, BTreeSet};

use super::guard::GuardId;
use crate::Error;

/// Which guard sees what. `T` is a component id during set cover and a
/// stitched vertex during pruning; either way the map answers both
/// directions: what does guard `g` see, and who sees element `x`?
#[derive(Debug, Clone, Default)]
pub struct VisibilityMap<T> {
  data: BTreeMap<GuardId, BTreeSet<T>>,
}

impl<T: Ord + Clone> VisibilityMap<T> {
  pub fn new() -> VisibilityMap<T> {
    VisibilityMap { data: BTreeMap::new() }
  }

  pub fn insert(&mut self, guard: GuardId, seen: BTreeSet<T>) {
    self.data.insert(guard, seen);
  }

  pub fn get(&self, guard: &GuardId) -> Option<&BTreeSet<T>> {
    self.data.get(guard)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&GuardId, &BTreeSet<T>)> {
    self.data.iter()
  }

  pub fn len(&self) -> usize {
    self.data.len()
  }

  pub fn is_empty(&self) -> bool {
    self.data.is_empty()
  }

  /// The guards that see `x`.
  pub fn seen_by(&self, x: &T) -> BTreeSet<GuardId> {
    self
      .data
      .iter()
      .filter(|(_, seen)| seen.contains(x))
      .map(|(id, _)| *id)
      .collect()
  }

  /// The guard seeing the most elements, ties to the largest id. Fails when
  /// no guard sees anything, because the caller could never finish covering.
  pub fn best(&self) -> Result<GuardId, Error> {
    let (id, seen) = self
      .data
      .iter()
      .max_by_key(|&(id, seen)| (seen.len(), *id))
      .ok_or_else(|| {
        Error::GuardCoverageFailure("no guard can see any remaining component".to_string())
      })?;
    if seen.is_empty() {
      return Err(Error::GuardCoverageFailure(
        "no guard can see any remaining component".to_string(),
      ));
    }
    Ok(*id)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn set(xs: &[u32]) -> BTreeSet<u32> {
    xs.iter().copied().collect()
  }

  #[test]
  fn best_prefers_coverage_then_largest_id() {
    let mut vis: VisibilityMap<u32> = VisibilityMap::new();
    vis.insert(GuardId::new(0), set(&[1, 2]));
    vis.insert(GuardId::new(1), set(&[3]));
    vis.insert(GuardId::new(2), set(&[4, 5]));
    assert_eq!(vis.best().unwrap(), GuardId::new(2));
  }

  #[test]
  fn best_fails_when_nothing_is_seen() {
    let empty: VisibilityMap<u32> = VisibilityMap::new();
    assert!(matches!(empty.best(), Err(Error::GuardCoverageFailure(_))));

    let mut blind: VisibilityMap<u32> = VisibilityMap::new();
    blind.insert(GuardId::new(0), set(&[]));
    assert!(matches!(blind.best(), Err(Error::GuardCoverageFailure(_))));
  }

  #[test]
  fn seen_by_inverts_the_map() {
    let mut vis: VisibilityMap<u32> = VisibilityMap::new();
    vis.insert(GuardId::new(0), set(&[1, 2]));
    vis.insert(GuardId::new(1), set(&[2]));
    let expected: BTreeSet<GuardId> = vec![GuardId::new(0), GuardId::new(1)].into_iter().collect();
    assert_eq!(vis.seen_by(&2), expected);
    assert!(vis.seen_by(&9).is_empty());
  }
}
