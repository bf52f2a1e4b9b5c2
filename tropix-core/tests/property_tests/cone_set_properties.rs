//! Property-based tests for cone sets
//!
//! This module tests:
//! - Cones of arbitrary weights appear in the traversed fan
//! - Set order agrees with the cone comparator
//! - Re-inserting cones leaves the set unchanged

use proptest::prelude::*;
use std::cmp::Ordering;
use tropix_core::traversal::groebner_fan;
use tropix_core::{
    ConstantCoefficientStrategy, GroebnerCone, GroebnerCones, PolynomialRing, TraversalConfig,
    groebner_cone_compare,
};
use tropix_math::ZVector;

const GENERATORS: [&str; 2] = ["x^2 - y*z", "x*y - z^2"];

fn weight_strategy() -> impl Strategy<Value = ZVector> {
    prop::collection::vec(-5i64..=5, 3).prop_map(|xs| ZVector::from_i64s(&xs))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// The cone of any weight is one of the cones found by traversal
    #[test]
    fn weight_cone_in_fan(w in weight_strategy()) {
        let strategy = ConstantCoefficientStrategy::new();
        let ring = PolynomialRing::new(["x", "y", "z"]).unwrap();
        let ideal = ring.parse_ideal(&GENERATORS).unwrap();
        let start = GroebnerCone::new(&ideal, &ring, &strategy).unwrap();
        let fan = groebner_fan(&start, &TraversalConfig::default()).unwrap();

        let cone = GroebnerCone::with_weight(&ideal, &ring, &w, &strategy).unwrap();
        prop_assert!(cone.polyhedral_cone().contains(&w));
        prop_assert!(fan.contains(&cone));
        prop_assert!(fan.iter().filter(|c| c.polyhedral_cone().contains_relatively(&w)).count() <= 1);
    }

    /// Iteration order is the comparator order and re-insertion is idempotent
    #[test]
    fn set_order_and_idempotence(ws in prop::collection::vec(weight_strategy(), 1..6)) {
        let strategy = ConstantCoefficientStrategy::new();
        let ring = PolynomialRing::new(["x", "y", "z"]).unwrap();
        let ideal = ring.parse_ideal(&GENERATORS).unwrap();
        let cones: Vec<GroebnerCone<'_>> = ws
            .iter()
            .map(|w| GroebnerCone::with_weight(&ideal, &ring, w, &strategy).unwrap())
            .collect();

        let mut set: GroebnerCones<'_> = cones.iter().cloned().collect();
        let ordered: Vec<&GroebnerCone<'_>> = set.iter().collect();
        for pair in ordered.windows(2) {
            prop_assert_eq!(groebner_cone_compare(pair[0], pair[1]), Ordering::Less);
        }
        let size = set.len();
        for cone in cones {
            prop_assert!(!set.insert(cone));
        }
        prop_assert_eq!(set.len(), size);
    }
}
