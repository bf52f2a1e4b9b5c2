//! String-level entry points for inspecting flips and neighbours.
//!
//! Each function builds a ring from variable names, parses the generators,
//! runs one operation with a [`ConstantCoefficientStrategy`], and returns
//! plain summaries that outlive the strategy.

use crate::error::Result;
use crate::groebner_cone::GroebnerCone;
use crate::ring::PolynomialRing;
use crate::strategy::ConstantCoefficientStrategy;
use tropix_math::ZVector;

/// A lifetime-free snapshot of a Groebner cone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConeSummary {
    /// Reduced Groebner basis, printed with the ring's variable names.
    pub reduced_basis: Vec<String>,
    /// Canonical relative-interior point.
    pub interior_point: ZVector,
    /// Extreme rays as orthogonal-complement representatives.
    pub extreme_rays: Vec<ZVector>,
    /// Dimension of the lineality space.
    pub lineality_dimension: usize,
    /// Number of facets.
    pub facet_count: usize,
}

impl ConeSummary {
    /// Summarize `cone`.
    pub fn of(cone: &GroebnerCone<'_>) -> Self {
        let reduced_basis = match (cone.polynomial_ring(), cone.reduced_polynomial_ideal()) {
            (Some(ring), Some(reduced)) => ring.format_ideal(reduced),
            _ => Vec::new(),
        };
        let polyhedral = cone.polyhedral_cone();
        Self {
            reduced_basis,
            interior_point: cone.interior_point().clone(),
            extreme_rays: polyhedral.extreme_rays().to_vec(),
            lineality_dimension: polyhedral.lineality_dimension(),
            facet_count: polyhedral.facets().len(),
        }
    }
}

fn with_start_cone<T>(
    vars: &[&str],
    gens: &[&str],
    run: impl FnOnce(&GroebnerCone<'_>) -> Result<T>,
) -> Result<T> {
    let strategy = ConstantCoefficientStrategy::new();
    let ring = PolynomialRing::new(vars.iter().copied())?;
    let ideal = ring.parse_ideal(gens)?;
    let cone = GroebnerCone::new(&ideal, &ring, &strategy)?;
    run(&cone)
}

/// Flip the cone of `gens` across the facet through `point` with outer
/// normal `normal`.
pub fn flip_cone_debug(
    vars: &[&str],
    gens: &[&str],
    point: &[i64],
    normal: &[i64],
) -> Result<ConeSummary> {
    let point = ZVector::from_i64s(point);
    let normal = ZVector::from_i64s(normal);
    with_start_cone(vars, gens, |cone| {
        let neighbour = cone.flip_cone(&point, &normal)?;
        Ok(ConeSummary::of(&neighbour))
    })
}

/// All Groebner-fan neighbours of the cone of `gens`.
pub fn groebner_neighbours_debug(vars: &[&str], gens: &[&str]) -> Result<Vec<ConeSummary>> {
    with_start_cone(vars, gens, |cone| {
        Ok(cone.groebner_neighbours()?.iter().map(ConeSummary::of).collect())
    })
}

/// All tropical neighbours of the cone of `gens`.
pub fn tropical_neighbours_debug(vars: &[&str], gens: &[&str]) -> Result<Vec<ConeSummary>> {
    with_start_cone(vars, gens, |cone| {
        Ok(cone.tropical_neighbours()?.iter().map(ConeSummary::of).collect())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FlipInputError, TropicalError};

    const VARS: [&str; 3] = ["x", "y", "z"];

    #[test]
    fn test_flip_cone_debug() {
        let summary = flip_cone_debug(&VARS, &["x + y + z"], &[1, 1, -2], &[-1, 1, 0]).unwrap();
        assert_eq!(summary.reduced_basis, vec!["y + x + z"]);
        assert_eq!(summary.interior_point, ZVector::from_i64s(&[-1, 2, -1]));
        assert_eq!(summary.lineality_dimension, 1);
        assert_eq!(summary.extreme_rays.len(), 2);
        assert_eq!(summary.facet_count, 2);

        assert_eq!(
            flip_cone_debug(&VARS, &["x + y + z"], &[2, -1, -1], &[-1, 1, 0]),
            Err(TropicalError::FlipInput(FlipInputError::PointInRelativeInterior))
        );
    }

    #[test]
    fn test_neighbours_debug() {
        let groebner = groebner_neighbours_debug(&["x", "y", "z", "w"], &["x + y", "z + w"]).unwrap();
        assert_eq!(groebner.len(), 2);
        assert!(groebner.iter().all(|s| s.facet_count == 2));
        let tropical = tropical_neighbours_debug(&["x", "y", "z", "w"], &["x + y", "z + w"]).unwrap();
        assert!(tropical.is_empty());
    }

    #[test]
    fn test_parse_errors_propagate() {
        assert!(matches!(
            groebner_neighbours_debug(&VARS, &["x + "]),
            Err(TropicalError::Parse { .. })
        ));
        assert!(matches!(
            tropical_neighbours_debug(&VARS, &["x + q"]),
            Err(TropicalError::UnknownVariable(name)) if name == "q"
        ));
    }
}
