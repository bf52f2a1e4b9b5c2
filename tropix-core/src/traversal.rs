//! Breadth-first traversal of Groebner fans and tropical varieties.
//!
//! Both traversals start from one cone and repeatedly add the neighbours of
//! every newly found cone until nothing new appears. Cones are deduplicated
//! by interior point.

use crate::config::TraversalConfig;
use crate::cone_set::GroebnerCones;
use crate::error::{Result, TropicalError};
use crate::groebner_cone::GroebnerCone;
use std::collections::VecDeque;

/// Statistics from a traversal.
#[derive(Debug, Clone, Default)]
pub struct TraversalStats {
    /// Cones whose neighbours were computed.
    pub cones_expanded: usize,
    /// Neighbours returned, counting repeats.
    pub neighbours_seen: usize,
}

/// Every cone of the Groebner fan reachable from `start`.
///
/// For a homogeneous ideal this is the whole Groebner fan.
pub fn groebner_fan<'a>(
    start: &GroebnerCone<'a>,
    config: &TraversalConfig,
) -> Result<GroebnerCones<'a>> {
    traverse(start, config, GroebnerCone::groebner_neighbours).map(|(cones, _)| cones)
}

/// Every cone reachable from `start` through facets in the tropical variety.
///
/// The start cone is always part of the result.
pub fn tropical_traversal<'a>(
    start: &GroebnerCone<'a>,
    config: &TraversalConfig,
) -> Result<GroebnerCones<'a>> {
    traverse(start, config, GroebnerCone::tropical_neighbours).map(|(cones, _)| cones)
}

/// [`groebner_fan`] with statistics.
pub fn groebner_fan_with_stats<'a>(
    start: &GroebnerCone<'a>,
    config: &TraversalConfig,
) -> Result<(GroebnerCones<'a>, TraversalStats)> {
    traverse(start, config, GroebnerCone::groebner_neighbours)
}

fn traverse<'a, F>(
    start: &GroebnerCone<'a>,
    config: &TraversalConfig,
    neighbours: F,
) -> Result<(GroebnerCones<'a>, TraversalStats)>
where
    F: Fn(&GroebnerCone<'a>) -> Result<GroebnerCones<'a>>,
{
    let mut stats = TraversalStats::default();
    let mut found = GroebnerCones::new();
    let mut queue = VecDeque::new();
    found.insert(start.clone());
    queue.push_back(start.clone());

    while let Some(cone) = queue.pop_front() {
        stats.cones_expanded += 1;
        for neighbour in neighbours(&cone)? {
            stats.neighbours_seen += 1;
            if found.contains(&neighbour) {
                continue;
            }
            found.insert(neighbour.clone());
            if let Some(limit) = config.max_cones
                && found.len() > limit
            {
                return Err(TropicalError::TraversalLimitExceeded(limit));
            }
            queue.push_back(neighbour);
        }
        tracing::debug!(
            found = found.len(),
            queued = queue.len(),
            expanded = stats.cones_expanded,
            "traversal step"
        );
    }
    Ok((found, stats))
}
