//! Polyhedral cones in exact integer arithmetic.
//!
//! A [`ZCone`] is given by an H-description `{x : A x >= 0, E x = 0}` in Z^n.
//! On construction it also computes its generators with the double description
//! method: a basis of the lineality space and the extreme rays modulo
//! lineality. Rays are stored as orthogonal-complement representatives, that
//! is projected onto the orthogonal complement of the lineality space and made
//! primitive. This makes them, and everything derived from them (relative
//! interior points, facet interior points), canonical functions of the cone as
//! a point set: two descriptions of the same cone yield identical vectors.
//!
//! ## Queries
//!
//! - containment and relative-interior containment of points
//! - dimension, lineality space, extreme rays
//! - facets with canonical inner normals and relative-interior points
//! - the face containing a point, intersection, the dual cone
//!
//! There is no floating point anywhere.

mod dd;

use crate::error::{MathError, Result};
use crate::linalg::{self, QVector};
use crate::vector::ZVector;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use rustc_hash::FxHashSet;

/// A facet of a [`ZCone`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facet {
    /// Primitive inner normal, projected into the span of the cone.
    pub inner_normal: ZVector,
    /// Canonical point in the relative interior of the facet.
    pub interior_point: ZVector,
    /// Indices into [`ZCone::extreme_rays`] of the rays on this facet.
    pub rays: Vec<usize>,
}

impl Facet {
    /// The outer normal: the negated inner normal.
    pub fn outer_normal(&self) -> ZVector {
        -&self.inner_normal
    }
}

/// A polyhedral cone `{x : A x >= 0, E x = 0}` with precomputed generators.
#[derive(Debug, Clone)]
pub struct ZCone {
    ambient_dim: usize,
    inequalities: Vec<ZVector>,
    equations: Vec<ZVector>,
    lineality: Vec<ZVector>,
    rays: Vec<ZVector>,
    /// For each ray, the sorted indices of inequalities vanishing on it.
    incidence: Vec<Vec<usize>>,
}

impl Default for ZCone {
    /// The cone in the zero-dimensional space.
    fn default() -> Self {
        Self::full_space(0)
    }
}

impl ZCone {
    /// Build a cone from inequalities `a·x >= 0` and equations `e·x = 0`.
    pub fn new(
        ambient_dim: usize,
        inequalities: Vec<ZVector>,
        equations: Vec<ZVector>,
    ) -> Result<Self> {
        if let Some(bad) = inequalities
            .iter()
            .chain(&equations)
            .find(|v| v.len() != ambient_dim)
        {
            return Err(MathError::DimensionMismatch {
                expected: ambient_dim,
                found: bad.len(),
            });
        }
        Ok(Self::from_checked(ambient_dim, inequalities, equations))
    }

    /// The whole space R^n.
    pub fn full_space(ambient_dim: usize) -> Self {
        Self::from_checked(ambient_dim, Vec::new(), Vec::new())
    }

    fn from_checked(ambient_dim: usize, inequalities: Vec<ZVector>, equations: Vec<ZVector>) -> Self {
        let out = dd::double_description(ambient_dim, &inequalities, &equations);
        let lineality = out.lines;
        let orthogonal = linalg::orthogonal_basis(&lineality);

        let mut rays: Vec<ZVector> = out
            .rays
            .iter()
            .map(|r| linalg::project_onto_complement(r, &orthogonal))
            .filter(|r| !r.is_zero())
            .collect();
        rays.sort();
        rays.dedup();

        let incidence = rays
            .iter()
            .map(|r| {
                inequalities
                    .iter()
                    .enumerate()
                    .filter(|(_, a)| a.dot(r).is_zero())
                    .map(|(i, _)| i)
                    .collect()
            })
            .collect();

        Self {
            ambient_dim,
            inequalities,
            equations,
            lineality,
            rays,
            incidence,
        }
    }

    /// Dimension of the ambient space.
    #[inline]
    pub fn ambient_dimension(&self) -> usize {
        self.ambient_dim
    }

    /// The defining inequalities, as given.
    #[inline]
    pub fn inequalities(&self) -> &[ZVector] {
        &self.inequalities
    }

    /// The defining equations, as given.
    #[inline]
    pub fn equations(&self) -> &[ZVector] {
        &self.equations
    }

    /// A basis of the lineality space.
    #[inline]
    pub fn lineality_space(&self) -> &[ZVector] {
        &self.lineality
    }

    /// Dimension of the lineality space.
    #[inline]
    pub fn lineality_dimension(&self) -> usize {
        self.lineality.len()
    }

    /// Extreme rays as sorted orthogonal-complement representatives.
    #[inline]
    pub fn extreme_rays(&self) -> &[ZVector] {
        &self.rays
    }

    /// Dimension of the cone.
    pub fn dimension(&self) -> usize {
        self.lineality.len() + linalg::rank(&self.rays)
    }

    /// Returns true if the cone spans the ambient space.
    pub fn is_full_dimensional(&self) -> bool {
        self.dimension() == self.ambient_dim
    }

    /// Indices of inequalities that hold with equality on the whole cone.
    pub fn implied_equations(&self) -> Vec<usize> {
        (0..self.inequalities.len())
            .filter(|&i| self.is_implied_equation(i))
            .collect()
    }

    fn is_implied_equation(&self, i: usize) -> bool {
        self.incidence.iter().all(|zeros| zeros.binary_search(&i).is_ok())
    }

    /// Point containment in the closed cone.
    pub fn contains(&self, x: &ZVector) -> bool {
        x.len() == self.ambient_dim
            && self.inequalities.iter().all(|a| !a.dot(x).is_negative())
            && self.equations.iter().all(|e| e.dot(x).is_zero())
    }

    /// Containment in the relative interior.
    pub fn contains_relatively(&self, x: &ZVector) -> bool {
        self.contains(x)
            && self
                .inequalities
                .iter()
                .enumerate()
                .all(|(i, a)| self.is_implied_equation(i) || a.dot(x).is_positive())
    }

    /// Canonical relative-interior point: the primitive sum of the extreme rays.
    ///
    /// A cone without rays is a linear space and gets the zero vector.
    pub fn relative_interior_point(&self) -> ZVector {
        sum_primitive(self.ambient_dim, self.rays.iter())
    }

    /// Returns true if `v` lies in the dual cone, i.e. `v·x >= 0` on the cone.
    pub fn dual_contains(&self, v: &ZVector) -> bool {
        v.len() == self.ambient_dim
            && self.rays.iter().all(|r| !v.dot(r).is_negative())
            && self.lineality.iter().all(|l| v.dot(l).is_zero())
    }

    /// The dual cone `{v : v·x >= 0 for all x in the cone}`.
    pub fn dual_cone(&self) -> ZCone {
        Self::from_checked(self.ambient_dim, self.rays.clone(), self.lineality.clone())
    }

    /// The smallest face containing `x`: every inequality tight at `x` becomes
    /// an equation.
    pub fn face_containing(&self, x: &ZVector) -> Result<ZCone> {
        if x.len() != self.ambient_dim {
            return Err(MathError::DimensionMismatch {
                expected: self.ambient_dim,
                found: x.len(),
            });
        }
        let mut inequalities = Vec::new();
        let mut equations = self.equations.clone();
        for a in &self.inequalities {
            if a.dot(x).is_zero() {
                equations.push(a.clone());
            } else {
                inequalities.push(a.clone());
            }
        }
        Ok(Self::from_checked(self.ambient_dim, inequalities, equations))
    }

    /// Intersection with another cone in the same ambient space.
    pub fn intersection(&self, other: &ZCone) -> Result<ZCone> {
        if other.ambient_dim != self.ambient_dim {
            return Err(MathError::DimensionMismatch {
                expected: self.ambient_dim,
                found: other.ambient_dim,
            });
        }
        let inequalities = self
            .inequalities
            .iter()
            .chain(&other.inequalities)
            .cloned()
            .collect();
        let equations = self
            .equations
            .iter()
            .chain(&other.equations)
            .cloned()
            .collect();
        Ok(Self::from_checked(self.ambient_dim, inequalities, equations))
    }

    /// All facets, each reported once.
    ///
    /// Redundant and implied inequalities are skipped. Facets are returned in
    /// the order of the first inequality defining them.
    pub fn facets(&self) -> Vec<Facet> {
        let dim = self.dimension();
        if dim == 0 || dim == self.lineality.len() {
            return Vec::new();
        }
        let span = self.span_basis();
        let mut seen: FxHashSet<Vec<usize>> = FxHashSet::default();
        let mut facets = Vec::new();

        for (i, a) in self.inequalities.iter().enumerate() {
            if self.is_implied_equation(i) {
                continue;
            }
            let on_face: Vec<usize> = self
                .incidence
                .iter()
                .enumerate()
                .filter(|(_, zeros)| zeros.binary_search(&i).is_ok())
                .map(|(r, _)| r)
                .collect();
            if seen.contains(&on_face) {
                continue;
            }
            let face_dim = self.lineality.len() + linalg::rank(on_face.iter().map(|&r| &self.rays[r]));
            if face_dim + 1 != dim {
                continue;
            }
            let inner_normal = match &span {
                Some(basis) => linalg::project_onto_span(a, basis),
                None => a.primitive(),
            };
            let interior_point =
                sum_primitive(self.ambient_dim, on_face.iter().map(|&r| &self.rays[r]));
            seen.insert(on_face.clone());
            facets.push(Facet {
                inner_normal,
                interior_point,
                rays: on_face,
            });
        }
        facets
    }

    /// Orthogonal basis of the linear span, or `None` for full-dimensional cones.
    fn span_basis(&self) -> Option<Vec<QVector>> {
        if self.is_full_dimensional() {
            return None;
        }
        Some(linalg::orthogonal_basis(
            self.lineality.iter().chain(&self.rays),
        ))
    }

    /// Returns true if every generator of `other` lies in this cone.
    pub fn contains_cone(&self, other: &ZCone) -> bool {
        other.rays.iter().all(|r| self.contains(r))
            && other
                .lineality
                .iter()
                .all(|l| self.contains(l) && self.contains(&-l))
    }
}

impl PartialEq for ZCone {
    /// Cones are equal as point sets.
    fn eq(&self, other: &Self) -> bool {
        self.ambient_dim == other.ambient_dim
            && self.lineality.len() == other.lineality.len()
            && self.contains_cone(other)
            && other.contains_cone(self)
    }
}

impl Eq for ZCone {}

fn sum_primitive<'a>(n: usize, vectors: impl Iterator<Item = &'a ZVector>) -> ZVector {
    let mut acc = vec![BigInt::zero(); n];
    for v in vectors {
        for (a, x) in acc.iter_mut().zip(v.iter()) {
            *a += x;
        }
    }
    ZVector::new(acc).primitive()
}
