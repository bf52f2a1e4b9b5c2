//! Property-based tests for polyhedral cones
//!
//! Random H-descriptions in dimension 3 are checked against:
//! - the canonical relative-interior point
//! - facet geometry
//! - independence from the order of the inequalities

use num_traits::Zero;
use proptest::prelude::*;
use tropix_math::{ZCone, ZVector};

fn vector_strategy() -> impl Strategy<Value = ZVector> {
    prop::collection::vec(-3i64..=3, 3).prop_map(|xs| ZVector::from_i64s(&xs))
}

fn inequalities_strategy() -> impl Strategy<Value = Vec<ZVector>> {
    prop::collection::vec(vector_strategy(), 1..5)
}

proptest! {
    /// The canonical interior point lies in the relative interior
    #[test]
    fn interior_point_is_relative_interior(ineqs in inequalities_strategy()) {
        let cone = ZCone::new(3, ineqs, vec![]).unwrap();
        let p = cone.relative_interior_point();
        prop_assert!(cone.contains_relatively(&p));
    }

    /// Extreme rays and lineality generators lie in the cone
    #[test]
    fn generators_lie_in_cone(ineqs in inequalities_strategy()) {
        let cone = ZCone::new(3, ineqs, vec![]).unwrap();
        for r in cone.extreme_rays() {
            prop_assert!(cone.contains(r));
        }
        for l in cone.lineality_space() {
            prop_assert!(cone.contains(l));
            prop_assert!(cone.contains(&-l));
        }
        prop_assert!(cone.dimension() <= 3);
    }

    /// Facet interior points sit on the boundary, in a face one dimension lower
    #[test]
    fn facets_have_codimension_one(ineqs in inequalities_strategy()) {
        let cone = ZCone::new(3, ineqs, vec![]).unwrap();
        let dim = cone.dimension();
        for facet in cone.facets() {
            prop_assert!(cone.contains(&facet.interior_point));
            prop_assert!(!cone.contains_relatively(&facet.interior_point));
            let face = cone.face_containing(&facet.interior_point).unwrap();
            prop_assert_eq!(face.dimension() + 1, dim);
            prop_assert!(cone.dual_contains(&facet.inner_normal));
            prop_assert!(facet.inner_normal.dot(&facet.interior_point).is_zero());
        }
    }

    /// Reordering the inequalities does not change canonical data
    #[test]
    fn description_order_is_irrelevant(ineqs in inequalities_strategy()) {
        let forward = ZCone::new(3, ineqs.clone(), vec![]).unwrap();
        let mut reversed_ineqs = ineqs;
        reversed_ineqs.reverse();
        let backward = ZCone::new(3, reversed_ineqs, vec![]).unwrap();
        prop_assert_eq!(forward.extreme_rays(), backward.extreme_rays());
        prop_assert_eq!(forward.relative_interior_point(), backward.relative_interior_point());
        prop_assert_eq!(forward.dimension(), backward.dimension());
        prop_assert_eq!(forward.facets().len(), backward.facets().len());
    }

    /// A cone and its dual have complementary lineality and span
    #[test]
    fn dual_dimensions(ineqs in inequalities_strategy()) {
        let cone = ZCone::new(3, ineqs, vec![]).unwrap();
        let dual = cone.dual_cone();
        prop_assert_eq!(dual.dimension() + cone.lineality_dimension(), 3);
        prop_assert_eq!(dual.lineality_dimension() + cone.dimension(), 3);
    }
}
