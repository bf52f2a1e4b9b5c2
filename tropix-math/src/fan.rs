//! Polyhedral fans as collections of cones.
//!
//! [`ZFan`] stores maximal cones only; faces are implicit. Cones are compared
//! as point sets, so inserting the same cone twice keeps one copy.

use crate::cone::ZCone;
use crate::error::{MathError, Result};
use crate::vector::ZVector;
use rustc_hash::FxHashMap;

/// A polyhedral fan in Z^n given by its maximal cones.
#[derive(Debug, Clone, Default)]
pub struct ZFan {
    ambient_dim: usize,
    cones: Vec<ZCone>,
    /// Relative interior points of `cones`, for duplicate detection.
    keys: FxHashMap<(ZVector, usize), usize>,
}

impl ZFan {
    /// An empty fan in R^n.
    pub fn new(ambient_dim: usize) -> Self {
        Self {
            ambient_dim,
            cones: Vec::new(),
            keys: FxHashMap::default(),
        }
    }

    /// Insert a cone. Returns false if the fan already holds it.
    pub fn insert(&mut self, cone: ZCone) -> Result<bool> {
        if cone.ambient_dimension() != self.ambient_dim {
            return Err(MathError::DimensionMismatch {
                expected: self.ambient_dim,
                found: cone.ambient_dimension(),
            });
        }
        let key = (cone.relative_interior_point(), cone.dimension());
        if self.keys.contains_key(&key) {
            return Ok(false);
        }
        self.keys.insert(key, self.cones.len());
        self.cones.push(cone);
        Ok(true)
    }

    /// Dimension of the ambient space.
    #[inline]
    pub fn ambient_dimension(&self) -> usize {
        self.ambient_dim
    }

    /// The cones in insertion order.
    #[inline]
    pub fn cones(&self) -> &[ZCone] {
        &self.cones
    }

    /// Number of cones.
    #[inline]
    pub fn len(&self) -> usize {
        self.cones.len()
    }

    /// Returns true if the fan has no cones.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cones.is_empty()
    }

    /// Largest cone dimension, or `None` for an empty fan.
    pub fn dimension(&self) -> Option<usize> {
        self.cones.iter().map(ZCone::dimension).max()
    }

    /// Smallest lineality dimension over all cones.
    pub fn lineality_dimension(&self) -> Option<usize> {
        self.cones.iter().map(ZCone::lineality_dimension).min()
    }

    /// Sorted, deduplicated extreme rays of all cones.
    pub fn rays(&self) -> Vec<ZVector> {
        let mut rays: Vec<ZVector> = self
            .cones
            .iter()
            .flat_map(|c| c.extreme_rays().iter().cloned())
            .collect();
        rays.sort();
        rays.dedup();
        rays
    }

    /// Indices of the cones containing `x`.
    pub fn cones_containing(&self, x: &ZVector) -> Vec<usize> {
        self.cones
            .iter()
            .enumerate()
            .filter(|(_, c)| c.contains(x))
            .map(|(i, _)| i)
            .collect()
    }

    /// Returns true if `x` lies in the support of the fan.
    pub fn contains(&self, x: &ZVector) -> bool {
        self.cones.iter().any(|c| c.contains(x))
    }

    /// Facet adjacency: for each cone, the sorted indices of the cones sharing
    /// one of its facets.
    ///
    /// Facets are matched by their canonical relative-interior point, which
    /// requires the cones to share a lineality space, as all cones of a
    /// complete fan do.
    pub fn adjacency_lists(&self) -> Vec<Vec<usize>> {
        let mut by_facet: FxHashMap<ZVector, Vec<usize>> = FxHashMap::default();
        for (i, cone) in self.cones.iter().enumerate() {
            for facet in cone.facets() {
                by_facet.entry(facet.interior_point).or_default().push(i);
            }
        }

        let mut adjacency = vec![Vec::new(); self.cones.len()];
        for owners in by_facet.values() {
            for &a in owners {
                for &b in owners {
                    if a != b {
                        adjacency[a].push(b);
                    }
                }
            }
        }
        for list in &mut adjacency {
            list.sort_unstable();
            list.dedup();
        }
        adjacency
    }
}
