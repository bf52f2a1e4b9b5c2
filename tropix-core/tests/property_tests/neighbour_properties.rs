//! Property-based tests for facet flips and neighbour enumeration
//!
//! This module tests:
//! - Flipping back across a facet returns the original cone
//! - Neighbours meet the cone in exactly one common facet
//! - Tropical neighbours are the Groebner neighbours behind tropical facets

use proptest::prelude::*;
use tropix_core::{ConstantCoefficientStrategy, GroebnerCone, Ideal, PolynomialRing, TropicalStrategy};
use tropix_math::{Polynomial, ZVector};

/// The six monomials of degree two in three variables.
const QUADRICS: [[u32; 3]; 6] = [
    [2, 0, 0],
    [1, 1, 0],
    [1, 0, 1],
    [0, 2, 0],
    [0, 1, 1],
    [0, 0, 2],
];

fn ring() -> PolynomialRing {
    PolynomialRing::new(["x", "y", "z"]).unwrap()
}

/// Non-zero homogeneous quadrics with small integer coefficients.
fn quadric_strategy() -> impl Strategy<Value = Polynomial> {
    prop::collection::vec((prop_oneof![-3i64..=-1, 1i64..=3], 0usize..6), 1..4)
        .prop_map(|terms| {
            let powers: Vec<(i64, Vec<(u32, u32)>)> = terms
                .into_iter()
                .map(|(c, m)| {
                    let e = QUADRICS[m];
                    (c, (0..3u32).map(|v| (v, e[v as usize])).collect())
                })
                .collect();
            let refs: Vec<(i64, &[(u32, u32)])> =
                powers.iter().map(|(c, p)| (*c, p.as_slice())).collect();
            Polynomial::from_coeffs_int(&refs)
        })
        .prop_filter("needs a non-zero quadric", |p| !p.is_zero())
}

fn ideal_strategy() -> impl Strategy<Value = Ideal> {
    prop::collection::vec(quadric_strategy(), 1..3).prop_map(Ideal::new)
}

fn weight_strategy() -> impl Strategy<Value = ZVector> {
    prop::collection::vec(-3i64..=3, 3).prop_map(|xs| ZVector::from_i64s(&xs))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Flipping back across the shared facet returns the original cone
    #[test]
    fn flip_is_symmetric(ideal in ideal_strategy(), w in weight_strategy()) {
        let strategy = ConstantCoefficientStrategy::new();
        let cone = GroebnerCone::with_weight(&ideal, &ring(), &w, &strategy).unwrap();
        for facet in cone.polyhedral_cone().facets() {
            let v = facet.outer_normal();
            let neighbour = cone.flip_cone(&facet.interior_point, &v).unwrap();
            let back = neighbour.flip_cone(&facet.interior_point, &-&v).unwrap();
            prop_assert_eq!(back.interior_point(), cone.interior_point());
            prop_assert_eq!(back.reduced_polynomial_ideal(), cone.reduced_polynomial_ideal());
        }
    }

    /// Each neighbour shares exactly one facet with the cone
    #[test]
    fn neighbours_are_adjacent(ideal in ideal_strategy(), w in weight_strategy()) {
        let strategy = ConstantCoefficientStrategy::new();
        let cone = GroebnerCone::with_weight(&ideal, &ring(), &w, &strategy).unwrap();
        let polyhedral = cone.polyhedral_cone();
        let neighbours = cone.groebner_neighbours().unwrap();
        prop_assert_eq!(neighbours.len(), polyhedral.facets().len());
        for neighbour in &neighbours {
            let shared = polyhedral.intersection(neighbour.polyhedral_cone()).unwrap();
            prop_assert_eq!(shared.dimension() + 1, polyhedral.dimension());
            prop_assert!(!polyhedral.contains(neighbour.interior_point()));
            prop_assert!(!neighbour.polyhedral_cone().contains(cone.interior_point()));
        }
    }

    /// Tropical neighbours are exactly the flips across monomial-free facets
    #[test]
    fn tropical_filter_law(ideal in ideal_strategy(), w in weight_strategy()) {
        let strategy = ConstantCoefficientStrategy::new();
        let cone = GroebnerCone::with_weight(&ideal, &ring(), &w, &strategy).unwrap();
        let groebner = cone.groebner_neighbours().unwrap();
        let tropical = cone.tropical_neighbours().unwrap();
        prop_assert!(tropical.is_subset(&groebner));

        let ring = cone.polynomial_ring().unwrap();
        let reduced = cone.reduced_polynomial_ideal().unwrap();
        for facet in cone.polyhedral_cone().facets() {
            let neighbour = cone.flip_cone(&facet.interior_point, &facet.outer_normal()).unwrap();
            let initial = reduced.initial_ideal(&facet.interior_point);
            let monomial_free = strategy.is_in_tropical_variety(&initial, ring).unwrap();
            prop_assert_eq!(tropical.contains(&neighbour), monomial_free);
        }
    }

    /// Every facet of a hypersurface cone lies in the tropical variety
    #[test]
    fn hypersurface_facets_are_tropical(f in quadric_strategy(), w in weight_strategy()) {
        let strategy = ConstantCoefficientStrategy::new();
        let ideal = Ideal::new(vec![f]);
        let cone = GroebnerCone::with_weight(&ideal, &ring(), &w, &strategy).unwrap();
        let groebner = cone.groebner_neighbours().unwrap();
        let tropical = cone.tropical_neighbours().unwrap();
        prop_assert_eq!(tropical.len(), groebner.len());
    }
}
