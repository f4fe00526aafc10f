//! Greedy merging of ear triangles into maximal convex components.

use std::collections::{BTreeMap, HashMap};

use crate::data::{ComponentId, ConvexComponent, Segment, Triangle};
use crate::Error;

/// Wraps the ear triangles as single-triangle components, then repeatedly
/// applies the legal merge with the largest resulting area until no merge
/// remains. Termination is guaranteed: every round removes one component.
///
/// Candidate merges that fail (no shared edge, more than one shared edge, a
/// non-convex result) are skipped; only the failing pair is discarded.
pub fn merge_components(ears: &[Triangle]) -> Result<BTreeMap<ComponentId, ConvexComponent>, Error> {
  let mut next_id = 0u64;
  let mut components: BTreeMap<ComponentId, ConvexComponent> = BTreeMap::new();
  for ear in ears {
    let component = ConvexComponent::new(ComponentId::new(next_id), ear.polygon()?)?;
    next_id += 1;
    components.insert(component.id(), component);
  }

  loop {
    let mut by_edge: HashMap<Segment, Vec<ComponentId>> = HashMap::new();
    for component in components.values() {
      for edge in component.polygon().edges() {
        by_edge.entry(edge).or_insert_with(Vec::new).push(component.id());
      }
    }

    let mut best: Option<(ConvexComponent, ComponentId, ComponentId)> = None;
    for component in components.values() {
      let mut adjacent: Vec<ComponentId> = component
        .polygon()
        .edges()
        .iter()
        .flat_map(|edge| by_edge[edge].iter().copied())
        .filter(|id| *id != component.id())
        .collect();
      adjacent.sort();
      adjacent.dedup();
      for other_id in adjacent {
        let merged = match component.try_merge(&components[&other_id], ComponentId::new(next_id)) {
          Ok(merged) => merged,
          Err(_) => continue,
        };
        let better = match &best {
          None => true,
          Some((leader, _, _)) => merged.area() > leader.area(),
        };
        if better {
          best = Some((merged, component.id(), other_id));
        }
      }
    }

    match best {
      None => break,
      Some((merged, a, b)) => {
        next_id += 1;
        components.remove(&a);
        components.remove(&b);
        components.insert(merged.id(), merged);
      }
    }
  }
  Ok(components)
}
