//! Groebner cones and facet flips.
//!
//! A [`GroebnerCone`] is the closed set of weight vectors inducing the same
//! initial ideal as a given monomial order. It is read off the reduced
//! Groebner basis `G` of the ideal: for each `g` in `G` with leading monomial
//! `lm(g)` and every other monomial `m` of `g`, the cone satisfies
//! `(exp(lm(g)) - exp(m)) · w >= 0`.
//!
//! ## Flipping
//!
//! Crossing a facet with relative-interior point `p` and outer normal `v`
//! uses the classical lifting step:
//!
//! 1. take the initial forms `in_p(G)`,
//! 2. compute their reduced basis `H` for the order `(p, v, tie-break)`,
//! 3. lift every `h` to `h - NF_G(h)`,
//! 4. interreduce for `(p, v, tie-break)`.
//!
//! The perturbation `p + εv` is kept symbolic as the weight rows `(p, v)`.
//! A concrete weight in the new cone is found by an exact ratio test.

use crate::cone_set::GroebnerCones;
use crate::error::{FlipInputError, Result, TropicalError};
use crate::ideal::Ideal;
use crate::ring::PolynomialRing;
use crate::strategy::TropicalStrategy;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use tropix_math::grobner::{interreduce, normal_form};
use tropix_math::{Polynomial, ZCone, ZVector};

/// A Groebner cone of a polynomial ideal.
///
/// Cones are ordered and compared by their interior point alone.
#[derive(Clone)]
pub struct GroebnerCone<'a> {
    polynomial_ideal: Option<Ideal>,
    polynomial_ring: Option<PolynomialRing>,
    reduced_polynomial_ideal: Option<Ideal>,
    initial_polynomial_ideal: Option<Ideal>,
    polyhedral_cone: ZCone,
    interior_point: ZVector,
    current_strategy: Option<&'a dyn TropicalStrategy>,
}

impl Default for GroebnerCone<'_> {
    /// The empty placeholder: no ideals, no ring, zero-dimensional cone.
    fn default() -> Self {
        Self {
            polynomial_ideal: None,
            polynomial_ring: None,
            reduced_polynomial_ideal: None,
            initial_polynomial_ideal: None,
            polyhedral_cone: ZCone::default(),
            interior_point: ZVector::default(),
            current_strategy: None,
        }
    }
}

impl<'a> GroebnerCone<'a> {
    /// The Groebner cone of `ideal` for the order of `ring`.
    ///
    /// The initial ideal is taken at the interior point.
    pub fn new(
        ideal: &Ideal,
        ring: &PolynomialRing,
        strategy: &'a dyn TropicalStrategy,
    ) -> Result<Self> {
        strategy.validate(ideal, ring)?;
        let reduced = strategy.reduce(ideal, ring)?;
        let cone = cone_from_reduced(&reduced, ring.num_vars())?;
        let interior_point = cone.relative_interior_point();
        let initial = reduced.initial_ideal(&interior_point);
        tracing::debug!(
            generators = reduced.len(),
            interior_point = %interior_point,
            "groebner cone"
        );
        Ok(Self {
            polynomial_ideal: Some(ideal.clone()),
            polynomial_ring: Some(ring.clone()),
            reduced_polynomial_ideal: Some(reduced),
            initial_polynomial_ideal: Some(initial),
            polyhedral_cone: cone,
            interior_point,
            current_strategy: Some(strategy),
        })
    }

    /// The Groebner cone of `ideal` for the order `(w, tie-break)`.
    ///
    /// The initial ideal is taken at `w` itself.
    pub fn with_weight(
        ideal: &Ideal,
        ring: &PolynomialRing,
        w: &ZVector,
        strategy: &'a dyn TropicalStrategy,
    ) -> Result<Self> {
        strategy.validate(ideal, ring)?;
        let ring = ring.with_weights(vec![w.clone()]);
        let reduced = strategy.reduce(ideal, &ring)?;
        let cone = cone_from_reduced(&reduced, ring.num_vars())?;
        debug_assert!(cone.contains(w), "weight {w} outside its own Groebner cone");
        let interior_point = cone.relative_interior_point();
        let initial = reduced.initial_ideal(w);
        Ok(Self {
            polynomial_ideal: Some(ideal.clone()),
            polynomial_ring: Some(ring),
            reduced_polynomial_ideal: Some(reduced),
            initial_polynomial_ideal: Some(initial),
            polyhedral_cone: cone,
            interior_point,
            current_strategy: Some(strategy),
        })
    }

    /// The Groebner cone of `ideal` for the order `(u, w, tie-break)`.
    ///
    /// `u` lies in the closure of the cone and `w` breaks ties between terms
    /// of equal `u`-weight.
    pub fn with_perturbation(
        ideal: &Ideal,
        ring: &PolynomialRing,
        u: &ZVector,
        w: &ZVector,
        strategy: &'a dyn TropicalStrategy,
    ) -> Result<Self> {
        strategy.validate(ideal, ring)?;
        let ring = ring.with_weights(vec![u.clone(), w.clone()]);
        let reduced = strategy.reduce(ideal, &ring)?;
        let cone = cone_from_reduced(&reduced, ring.num_vars())?;
        let interior_point = cone.relative_interior_point();
        let initial = reduced.initial_ideal(&interior_point);
        Ok(Self {
            polynomial_ideal: Some(ideal.clone()),
            polynomial_ring: Some(ring),
            reduced_polynomial_ideal: Some(reduced),
            initial_polynomial_ideal: Some(initial),
            polyhedral_cone: cone,
            interior_point,
            current_strategy: Some(strategy),
        })
    }

    /// A cone from a reduced basis and the initial forms of its elements.
    ///
    /// `initial[i]` must be the initial form of `reduced[i]`. Terms kept in
    /// the initial form give equations, dropped terms give inequalities.
    pub fn with_initial_ideal(
        reduced: &Ideal,
        initial: &Ideal,
        ring: &PolynomialRing,
        strategy: &'a dyn TropicalStrategy,
    ) -> Result<Self> {
        debug_assert_eq!(reduced.len(), initial.len());
        let n = ring.num_vars();
        let mut inequalities = Vec::new();
        let mut equations = Vec::new();
        for (g, in_g) in reduced.iter().zip(initial) {
            let in_g = in_g.with_order(ring.order());
            let Some(lead) = in_g.leading_monomial() else {
                continue;
            };
            let lead = lead.exponent_vector(n);
            for term in g.terms() {
                let diff = &lead - &term.monomial.exponent_vector(n);
                if diff.is_zero() {
                    continue;
                }
                if in_g.terms().iter().any(|t| t.monomial == term.monomial) {
                    equations.push(diff);
                } else {
                    inequalities.push(diff);
                }
            }
        }
        let cone = ZCone::new(n, inequalities, equations)?;
        let interior_point = cone.relative_interior_point();
        Ok(Self {
            polynomial_ideal: Some(reduced.clone()),
            polynomial_ring: Some(ring.clone()),
            reduced_polynomial_ideal: Some(reduced.clone()),
            initial_polynomial_ideal: Some(initial.clone()),
            polyhedral_cone: cone,
            interior_point,
            current_strategy: Some(strategy),
        })
    }

    /// The generating ideal.
    ///
    /// For a cone built by [`GroebnerCone::flip_cone`] or
    /// [`GroebnerCone::with_initial_ideal`] this is the cone's own reduced
    /// basis, not the ideal the search started from.
    pub fn polynomial_ideal(&self) -> Option<&Ideal> {
        self.polynomial_ideal.as_ref()
    }

    /// The ring, carrying the order the reduced basis was computed for.
    pub fn polynomial_ring(&self) -> Option<&PolynomialRing> {
        self.polynomial_ring.as_ref()
    }

    /// The reduced Groebner basis.
    pub fn reduced_polynomial_ideal(&self) -> Option<&Ideal> {
        self.reduced_polynomial_ideal.as_ref()
    }

    /// The initial forms of the reduced basis.
    pub fn initial_polynomial_ideal(&self) -> Option<&Ideal> {
        self.initial_polynomial_ideal.as_ref()
    }

    /// The cone itself.
    #[inline]
    pub fn polyhedral_cone(&self) -> &ZCone {
        &self.polyhedral_cone
    }

    /// Canonical point in the relative interior of the cone.
    #[inline]
    pub fn interior_point(&self) -> &ZVector {
        &self.interior_point
    }

    /// The strategy, absent on a placeholder.
    pub fn tropical_strategy(&self) -> Option<&'a dyn TropicalStrategy> {
        self.current_strategy
    }

    fn parts(&self) -> Result<(&PolynomialRing, &Ideal, &'a dyn TropicalStrategy)> {
        match (
            &self.polynomial_ring,
            &self.reduced_polynomial_ideal,
            self.current_strategy,
        ) {
            (Some(ring), Some(reduced), Some(strategy)) => Ok((ring, reduced, strategy)),
            _ => Err(TropicalError::EmptyCone),
        }
    }

    /// An extreme ray whose initial ideal contains no monomial.
    ///
    /// Rays are orthogonal-complement representatives. Returns the empty
    /// vector when no ray qualifies.
    pub fn tropical_point(&self) -> Result<ZVector> {
        let (ring, reduced, strategy) = self.parts()?;
        let restrict = strategy.restrict_to_lower_half_space();
        for ray in self.polyhedral_cone.extreme_rays() {
            if restrict && ray[0].is_zero() {
                continue;
            }
            let initial = reduced.initial_ideal(ray);
            if strategy.is_in_tropical_variety(&initial, ring)? {
                return Ok(ray.clone());
            }
        }
        Ok(ZVector::default())
    }

    /// Check that `p` lies in the relative interior of a facet and that `v`
    /// is an outer normal of that facet.
    pub fn check_flip_cone_input(
        &self,
        p: &ZVector,
        v: &ZVector,
    ) -> std::result::Result<(), FlipInputError> {
        let cone = &self.polyhedral_cone;
        let n = cone.ambient_dimension();
        for x in [p, v] {
            if x.len() != n {
                return Err(FlipInputError::DimensionMismatch {
                    expected: n,
                    found: x.len(),
                });
            }
        }
        if !cone.contains(p) {
            return Err(FlipInputError::PointNotInCone);
        }
        if cone.contains_relatively(p) {
            return Err(FlipInputError::PointInRelativeInterior);
        }
        let face = cone
            .face_containing(p)
            .map_err(|_| FlipInputError::DimensionMismatch {
                expected: n,
                found: p.len(),
            })?;
        let (face_dimension, cone_dimension) = (face.dimension(), cone.dimension());
        if face_dimension + 1 != cone_dimension {
            return Err(FlipInputError::PointNotOnFacet {
                face_dimension,
                cone_dimension,
            });
        }
        let orthogonal = face
            .lineality_space()
            .iter()
            .chain(face.extreme_rays())
            .all(|x| v.dot(x).is_zero());
        if !orthogonal {
            return Err(FlipInputError::NormalNotOrthogonalToFacet);
        }
        if !self.points_outwards(v) {
            return Err(FlipInputError::NormalNotOutward);
        }
        Ok(())
    }

    /// Returns true if `v · x < 0` for some `x` in the cone.
    pub fn points_outwards(&self, v: &ZVector) -> bool {
        !self.polyhedral_cone.dual_contains(v)
    }

    /// The neighbouring Groebner cone across the facet through `p` with
    /// outer normal `v`.
    pub fn flip_cone(&self, p: &ZVector, v: &ZVector) -> Result<GroebnerCone<'a>> {
        let (ring, reduced, strategy) = self.parts()?;
        self.check_flip_cone_input(p, v)?;

        let initial = reduced.initial_ideal(p);
        let flip_ring = ring.with_weights(vec![p.clone(), v.clone()]);
        let h = strategy.reduce(&initial, &flip_ring)?;

        let lifted: Vec<Polynomial> = h
            .iter()
            .map(|h| h.sub(&normal_form(h, reduced.generators(), ring.order())))
            .collect();
        let neighbour_basis = Ideal::new(interreduce(&lifted, flip_ring.order()));
        let neighbour_cone = cone_from_reduced(&neighbour_basis, ring.num_vars())?;
        let w = perturbed_weight(&neighbour_cone, p, v);

        tracing::debug!(
            from = %self.interior_point,
            facet_point = %p,
            normal = %v,
            weight = %w,
            "flip"
        );
        GroebnerCone::with_perturbation(
            &neighbour_basis,
            &ring.with_weights(Vec::new()),
            p,
            &w,
            strategy,
        )
    }

    /// All neighbours in the Groebner fan, one per facet.
    pub fn groebner_neighbours(&self) -> Result<GroebnerCones<'a>> {
        let (_, _, strategy) = self.parts()?;
        let restrict = strategy.restrict_to_lower_half_space();
        let mut neighbours = GroebnerCones::new();
        for facet in self.polyhedral_cone.facets() {
            if restrict && facet.interior_point[0].is_zero() {
                continue;
            }
            neighbours.insert(self.flip_cone(&facet.interior_point, &facet.outer_normal())?);
        }
        tracing::trace!(
            cone = %self.interior_point,
            found = neighbours.len(),
            "groebner neighbours"
        );
        Ok(neighbours)
    }

    /// Neighbours across the facets lying in the tropical variety.
    pub fn tropical_neighbours(&self) -> Result<GroebnerCones<'a>> {
        let (ring, reduced, strategy) = self.parts()?;
        let restrict = strategy.restrict_to_lower_half_space();
        let mut neighbours = GroebnerCones::new();
        for facet in self.polyhedral_cone.facets() {
            let p = &facet.interior_point;
            if restrict && p[0].is_zero() {
                continue;
            }
            let initial = reduced.initial_ideal(p);
            if !strategy.is_in_tropical_variety(&initial, ring)? {
                continue;
            }
            neighbours.insert(self.flip_cone(p, &facet.outer_normal())?);
        }
        tracing::trace!(
            cone = %self.interior_point,
            found = neighbours.len(),
            "tropical neighbours"
        );
        Ok(neighbours)
    }
}

/// Compare two cones by interior point.
pub fn groebner_cone_compare(a: &GroebnerCone<'_>, b: &GroebnerCone<'_>) -> Ordering {
    debug_assert_eq!(
        a.interior_point.len(),
        b.interior_point.len(),
        "comparing cones in different spaces"
    );
    a.interior_point.cmp(&b.interior_point)
}

impl PartialEq for GroebnerCone<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.interior_point == other.interior_point
    }
}

impl Eq for GroebnerCone<'_> {}

impl PartialOrd for GroebnerCone<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GroebnerCone<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        groebner_cone_compare(self, other)
    }
}

impl fmt::Debug for GroebnerCone<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let basis = match (&self.polynomial_ring, &self.reduced_polynomial_ideal) {
            (Some(ring), Some(reduced)) => ring.format_ideal(reduced),
            _ => Vec::new(),
        };
        f.debug_struct("GroebnerCone")
            .field("interior_point", &self.interior_point)
            .field("reduced_basis", &basis)
            .field("dimension", &self.polyhedral_cone.dimension())
            .field("has_strategy", &self.current_strategy.is_some())
            .finish()
    }
}

/// The cone `{w : (exp(lm(g)) - exp(m)) · w >= 0}` of a reduced basis.
fn cone_from_reduced(reduced: &Ideal, n: usize) -> Result<ZCone> {
    let mut inequalities = Vec::new();
    for g in reduced {
        let Some(lead) = g.leading_monomial() else {
            continue;
        };
        let lead = lead.exponent_vector(n);
        for term in &g.terms()[1..] {
            inequalities.push(&lead - &term.monomial.exponent_vector(n));
        }
    }
    Ok(ZCone::new(n, inequalities, Vec::new())?)
}

/// A weight `p + εv` in the interior of `cone`, scaled to a primitive vector.
///
/// `ε` is half the largest step keeping every inequality satisfied, or one
/// when no inequality bounds the step.
fn perturbed_weight(cone: &ZCone, p: &ZVector, v: &ZVector) -> ZVector {
    let bound = cone
        .inequalities()
        .iter()
        .filter_map(|a| {
            let av = a.dot(v);
            av.is_negative().then(|| BigRational::new(a.dot(p), -av))
        })
        .min();
    let epsilon = match bound {
        Some(b) => b / BigRational::from_integer(BigInt::from(2)),
        None => BigRational::one(),
    };
    let w: Vec<BigRational> = p
        .iter()
        .zip(v.iter())
        .map(|(pi, vi)| {
            BigRational::from_integer(pi.clone()) + &epsilon * BigRational::from_integer(vi.clone())
        })
        .collect();
    ZVector::from_rationals(&w).primitive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::ConstantCoefficientStrategy;
    use tropix_math::Monomial;

    fn v(xs: &[i64]) -> ZVector {
        ZVector::from_i64s(xs)
    }

    fn linear_form<'a>(strategy: &'a ConstantCoefficientStrategy) -> GroebnerCone<'a> {
        let ring = PolynomialRing::new(["x", "y", "z"]).unwrap();
        let ideal = ring.parse_ideal(&["x + y + z"]).unwrap();
        GroebnerCone::new(&ideal, &ring, strategy).unwrap()
    }

    /// Ring (a, b, c, d) with `<b + c + d>`: every ray has first entry zero.
    fn shifted_linear_form<'a>(strategy: &'a dyn TropicalStrategy) -> GroebnerCone<'a> {
        let ring = PolynomialRing::new(["a", "b", "c", "d"]).unwrap();
        let ideal = ring.parse_ideal(&["b + c + d"]).unwrap();
        GroebnerCone::new(&ideal, &ring, strategy).unwrap()
    }

    struct LowerHalfSpace(ConstantCoefficientStrategy);

    impl TropicalStrategy for LowerHalfSpace {
        fn validate(&self, ideal: &Ideal, ring: &PolynomialRing) -> Result<()> {
            self.0.validate(ideal, ring)
        }

        fn reduce(&self, ideal: &Ideal, ring: &PolynomialRing) -> Result<Ideal> {
            self.0.reduce(ideal, ring)
        }

        fn check_initial_ideal_for_monomial(
            &self,
            ideal: &Ideal,
            ring: &PolynomialRing,
            w: Option<&ZVector>,
        ) -> Result<Option<Monomial>> {
            self.0.check_initial_ideal_for_monomial(ideal, ring, w)
        }

        fn restrict_to_lower_half_space(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_construction() {
        let strategy = ConstantCoefficientStrategy::new();
        let cone = linear_form(&strategy);
        assert_eq!(cone.polyhedral_cone().dimension(), 3);
        assert_eq!(cone.polyhedral_cone().lineality_dimension(), 1);
        assert_eq!(cone.interior_point(), &v(&[2, -1, -1]));
        let ring = cone.polynomial_ring().unwrap();
        assert_eq!(
            ring.format_ideal(cone.reduced_polynomial_ideal().unwrap()),
            vec!["x + y + z"]
        );
        assert_eq!(
            ring.format_ideal(cone.initial_polynomial_ideal().unwrap()),
            vec!["x"]
        );
    }

    #[test]
    fn test_with_weight() {
        let strategy = ConstantCoefficientStrategy::new();
        let ring = PolynomialRing::new(["x", "y", "z"]).unwrap();
        let ideal = ring.parse_ideal(&["x + y + z"]).unwrap();
        let cone = GroebnerCone::with_weight(&ideal, &ring, &v(&[0, 0, 1]), &strategy).unwrap();
        assert_eq!(cone.interior_point(), &v(&[-1, -1, 2]));
        let ring = cone.polynomial_ring().unwrap();
        assert_eq!(
            ring.format_ideal(cone.initial_polynomial_ideal().unwrap()),
            vec!["z"]
        );

        // On a facet the initial ideal keeps the tied terms.
        let tied = GroebnerCone::with_weight(&ideal, &ring.with_weights(vec![]), &v(&[1, 1, 0]), &strategy)
            .unwrap();
        let initial = tied.initial_polynomial_ideal().unwrap();
        assert_eq!(initial.generators()[0].num_terms(), 2);
    }

    #[test]
    fn test_with_initial_ideal() {
        let strategy = ConstantCoefficientStrategy::new();
        let ring = PolynomialRing::new(["x", "y", "z"]).unwrap();
        let reduced = ring.parse_ideal(&["x + y + z"]).unwrap();
        let initial = ring.parse_ideal(&["x + y"]).unwrap();
        let cone = GroebnerCone::with_initial_ideal(&reduced, &initial, &ring, &strategy).unwrap();
        // x = y >= z
        assert_eq!(cone.polyhedral_cone().dimension(), 2);
        assert_eq!(cone.interior_point(), &v(&[1, 1, -2]));
    }

    #[test]
    fn test_placeholder() {
        let cone = GroebnerCone::default();
        assert!(cone.polynomial_ring().is_none());
        assert_eq!(cone.polyhedral_cone().dimension(), 0);
        assert!(cone.interior_point().is_empty());
        assert_eq!(cone.tropical_point(), Err(TropicalError::EmptyCone));
        assert_eq!(
            cone.groebner_neighbours().err(),
            Some(TropicalError::EmptyCone)
        );
    }

    #[test]
    fn test_tropical_point() {
        let strategy = ConstantCoefficientStrategy::new();
        let cone = linear_form(&strategy);
        let point = cone.tropical_point().unwrap();
        assert!(point == v(&[1, 1, -2]) || point == v(&[1, -2, 1]));
        let ring = cone.polynomial_ring().unwrap();
        let initial = cone.reduced_polynomial_ideal().unwrap().initial_ideal(&point);
        assert!(strategy.is_in_tropical_variety(&initial, ring).unwrap());
    }

    #[test]
    fn test_tropical_point_absent() {
        let strategy = ConstantCoefficientStrategy::new();
        let ring = PolynomialRing::new(["x", "y"]).unwrap();
        let ideal = ring.parse_ideal(&["x"]).unwrap();
        let cone = GroebnerCone::new(&ideal, &ring, &strategy).unwrap();
        assert!(cone.tropical_point().unwrap().is_empty());
    }

    #[test]
    fn test_flip_linear_form() {
        let strategy = ConstantCoefficientStrategy::new();
        let cone = linear_form(&strategy);
        let p = v(&[1, 1, -2]);
        let normal = v(&[-1, 1, 0]);
        assert!(cone.points_outwards(&normal));
        let neighbour = cone.flip_cone(&p, &normal).unwrap();
        assert_eq!(neighbour.interior_point(), &v(&[-1, 2, -1]));
        let basis = neighbour.reduced_polynomial_ideal().unwrap();
        assert_eq!(
            basis.generators()[0].leading_monomial(),
            Some(&Monomial::from_var(1))
        );
        let flipped_ring = neighbour.polynomial_ring().unwrap();
        let generating = neighbour.polynomial_ideal().unwrap();
        assert_eq!(flipped_ring.format_ideal(generating), vec!["y + x + z"]);

        let back = neighbour.flip_cone(&p, &-&normal).unwrap();
        assert_eq!(back, cone);
        assert_eq!(back.reduced_polynomial_ideal(), cone.reduced_polynomial_ideal());
    }

    #[test]
    fn test_flip_input_errors() {
        let strategy = ConstantCoefficientStrategy::new();
        let cone = linear_form(&strategy);
        let normal = v(&[-1, 1, 0]);
        let facet = v(&[1, 1, -2]);
        let cases = [
            (
                v(&[1, 1]),
                normal.clone(),
                FlipInputError::DimensionMismatch {
                    expected: 3,
                    found: 2,
                },
            ),
            (v(&[0, 1, 0]), normal.clone(), FlipInputError::PointNotInCone),
            (
                v(&[2, -1, -1]),
                normal.clone(),
                FlipInputError::PointInRelativeInterior,
            ),
            (
                v(&[1, 1, 1]),
                normal.clone(),
                FlipInputError::PointNotOnFacet {
                    face_dimension: 1,
                    cone_dimension: 3,
                },
            ),
            (
                facet.clone(),
                v(&[0, 0, 1]),
                FlipInputError::NormalNotOrthogonalToFacet,
            ),
            (facet.clone(), v(&[1, -1, 0]), FlipInputError::NormalNotOutward),
        ];
        for (p, n, expected) in cases {
            assert_eq!(cone.check_flip_cone_input(&p, &n), Err(expected.clone()));
            assert_eq!(
                cone.flip_cone(&p, &n).err(),
                Some(TropicalError::FlipInput(expected))
            );
        }
        assert_eq!(cone.check_flip_cone_input(&facet, &normal), Ok(()));
    }

    #[test]
    fn test_groebner_neighbours() {
        let strategy = ConstantCoefficientStrategy::new();
        let cone = linear_form(&strategy);
        let neighbours = cone.groebner_neighbours().unwrap();
        let points: Vec<ZVector> = neighbours.interior_points().cloned().collect();
        assert_eq!(points, vec![v(&[-1, -1, 2]), v(&[-1, 2, -1])]);
        for neighbour in &neighbours {
            let shared = cone
                .polyhedral_cone()
                .intersection(neighbour.polyhedral_cone())
                .unwrap();
            assert_eq!(shared.dimension(), 2);
            assert!(!cone.polyhedral_cone().contains(neighbour.interior_point()));
        }
    }

    #[test]
    fn test_principal_ideal_every_facet_tropical() {
        let strategy = ConstantCoefficientStrategy::new();
        let cone = linear_form(&strategy);
        let groebner = cone.groebner_neighbours().unwrap();
        let tropical = cone.tropical_neighbours().unwrap();
        assert_eq!(tropical.len(), 2);
        assert!(tropical.is_subset(&groebner));
    }

    #[test]
    fn test_tropical_neighbours_empty() {
        let strategy = ConstantCoefficientStrategy::new();
        let ring = PolynomialRing::new(["x", "y"]).unwrap();
        for gens in [&["x"][..], &["x^2", "y^2"][..]] {
            let ideal = ring.parse_ideal(gens).unwrap();
            let cone = GroebnerCone::new(&ideal, &ring, &strategy).unwrap();
            assert!(cone.tropical_neighbours().unwrap().is_empty());
        }
    }

    #[test]
    fn test_tropical_filter_is_strict() {
        let strategy = ConstantCoefficientStrategy::new();
        let ring = PolynomialRing::new(["x", "y", "z", "w"]).unwrap();
        let ideal = ring.parse_ideal(&["x + y", "z + w"]).unwrap();
        let cone = GroebnerCone::new(&ideal, &ring, &strategy).unwrap();
        assert_eq!(cone.groebner_neighbours().unwrap().len(), 2);
        assert!(cone.tropical_neighbours().unwrap().is_empty());
    }

    #[test]
    fn test_facet_through_origin() {
        // The only facet of {y >= z} is the lineality space, so its point is zero.
        let strategy = ConstantCoefficientStrategy::new();
        let ring = PolynomialRing::new(["x", "y", "z"]).unwrap();
        let ideal = ring.parse_ideal(&["y + z"]).unwrap();
        let cone = GroebnerCone::new(&ideal, &ring, &strategy).unwrap();
        let facets = cone.polyhedral_cone().facets();
        assert_eq!(facets.len(), 1);
        assert!(facets[0].interior_point.is_zero());
        let neighbours = cone.groebner_neighbours().unwrap();
        assert_eq!(neighbours.len(), 1);
        let neighbour = neighbours.iter().next().unwrap();
        assert_eq!(neighbour.interior_point(), &-cone.interior_point());
    }

    #[test]
    fn test_lower_half_space_restriction() {
        let plain = ConstantCoefficientStrategy::new();
        let cone = shifted_linear_form(&plain);
        assert_eq!(cone.tropical_point().unwrap(), v(&[0, 1, -2, 1]));
        assert_eq!(cone.groebner_neighbours().unwrap().len(), 2);

        let restricted = LowerHalfSpace(ConstantCoefficientStrategy::new());
        let cone = shifted_linear_form(&restricted);
        assert!(cone.tropical_point().unwrap().is_empty());
        assert!(cone.groebner_neighbours().unwrap().is_empty());
        assert!(cone.tropical_neighbours().unwrap().is_empty());
    }

    #[test]
    fn test_ordering_by_interior_point() {
        let strategy = ConstantCoefficientStrategy::new();
        let cone = linear_form(&strategy);
        let neighbours: Vec<GroebnerCone<'_>> = cone.groebner_neighbours().unwrap().into_iter().collect();
        assert!(neighbours[0] < neighbours[1]);
        assert!(neighbours[1] < cone);
        assert_eq!(groebner_cone_compare(&cone, &cone.clone()), Ordering::Equal);
    }
}
