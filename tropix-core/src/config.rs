//! Configuration for strategies and traversals.

use tropix_math::TieBreak;
use tropix_math::grobner::BuchbergerConfig;

/// Configuration for [`ConstantCoefficientStrategy`].
///
/// [`ConstantCoefficientStrategy`]: crate::strategy::ConstantCoefficientStrategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyConfig {
    /// Reject ideals with non-homogeneous generators.
    pub require_homogeneous: bool,
    /// Order for the auxiliary basis computed by the monomial test.
    pub monomial_test_order: TieBreak,
    /// Buchberger settings used for every reduction.
    pub buchberger: BuchbergerConfig,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            require_homogeneous: true,
            monomial_test_order: TieBreak::GRevLex,
            buchberger: BuchbergerConfig::default(),
        }
    }
}

/// Configuration for fan traversals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraversalConfig {
    /// Fail once more than this many cones have been found.
    pub max_cones: Option<usize>,
}
