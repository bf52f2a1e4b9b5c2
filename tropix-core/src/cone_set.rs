//! Sets of Groebner cones and fan assembly.

use crate::error::Result;
use crate::groebner_cone::GroebnerCone;
use std::collections::BTreeMap;
use std::collections::btree_map::{Entry, IntoValues, Values};
use tropix_math::{ZFan, ZVector};

/// An ordered set of Groebner cones keyed by interior point.
///
/// Inserting a cone whose interior point is already present keeps the cone
/// inserted first.
#[derive(Debug, Clone, Default)]
pub struct GroebnerCones<'a> {
    cones: BTreeMap<ZVector, GroebnerCone<'a>>,
}

impl<'a> GroebnerCones<'a> {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a cone. Returns false if its interior point was already present.
    pub fn insert(&mut self, cone: GroebnerCone<'a>) -> bool {
        match self.cones.entry(cone.interior_point().clone()) {
            Entry::Vacant(slot) => {
                slot.insert(cone);
                true
            }
            Entry::Occupied(slot) => {
                if slot.get().reduced_polynomial_ideal() != cone.reduced_polynomial_ideal() {
                    tracing::warn!(
                        interior_point = %cone.interior_point(),
                        "distinct reduced bases share an interior point, keeping the first"
                    );
                }
                false
            }
        }
    }

    /// Returns true if a cone with the same interior point is present.
    pub fn contains(&self, cone: &GroebnerCone<'_>) -> bool {
        self.cones.contains_key(cone.interior_point())
    }

    /// Returns true if a cone with interior point `point` is present.
    pub fn contains_point(&self, point: &ZVector) -> bool {
        self.cones.contains_key(point)
    }

    /// The cone with interior point `point`.
    pub fn get(&self, point: &ZVector) -> Option<&GroebnerCone<'a>> {
        self.cones.get(point)
    }

    /// Number of cones.
    #[inline]
    pub fn len(&self) -> usize {
        self.cones.len()
    }

    /// Returns true if the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cones.is_empty()
    }

    /// Cones in increasing order of interior point.
    pub fn iter(&self) -> Values<'_, ZVector, GroebnerCone<'a>> {
        self.cones.values()
    }

    /// Interior points in increasing order.
    pub fn interior_points(&self) -> impl Iterator<Item = &ZVector> {
        self.cones.keys()
    }

    /// Remove and return the cone with the smallest interior point.
    pub fn pop_first(&mut self) -> Option<GroebnerCone<'a>> {
        self.cones.pop_first().map(|(_, cone)| cone)
    }

    /// Returns true if every interior point of `self` occurs in `other`.
    pub fn is_subset(&self, other: &GroebnerCones<'_>) -> bool {
        self.cones.keys().all(|p| other.contains_point(p))
    }
}

impl<'a> FromIterator<GroebnerCone<'a>> for GroebnerCones<'a> {
    fn from_iter<I: IntoIterator<Item = GroebnerCone<'a>>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a> Extend<GroebnerCone<'a>> for GroebnerCones<'a> {
    fn extend<I: IntoIterator<Item = GroebnerCone<'a>>>(&mut self, iter: I) {
        for cone in iter {
            self.insert(cone);
        }
    }
}

impl<'a> IntoIterator for GroebnerCones<'a> {
    type Item = GroebnerCone<'a>;
    type IntoIter = IntoValues<ZVector, GroebnerCone<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cones.into_values()
    }
}

impl<'s, 'a> IntoIterator for &'s GroebnerCones<'a> {
    type Item = &'s GroebnerCone<'a>;
    type IntoIter = Values<'s, ZVector, GroebnerCone<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cones.values()
    }
}

/// The fan whose maximal cones are the polyhedral cones of `cones`.
///
/// An empty set gives the empty fan in the zero-dimensional space.
pub fn to_fan_star(cones: &GroebnerCones<'_>) -> Result<ZFan> {
    let ambient_dim = cones
        .iter()
        .next()
        .map_or(0, |c| c.polyhedral_cone().ambient_dimension());
    let mut fan = ZFan::new(ambient_dim);
    for cone in cones {
        fan.insert(cone.polyhedral_cone().clone())?;
    }
    tracing::debug!(cones = fan.len(), "fan assembled");
    Ok(fan)
}
