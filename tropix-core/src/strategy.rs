//! Tropical strategies.
//!
//! A [`TropicalStrategy`] bundles the ideal-level decisions a Groebner cone
//! delegates: input validation, reduction to a reduced Groebner basis, and
//! the monomial test that decides membership in the tropical variety.
//!
//! [`ConstantCoefficientStrategy`] is the strategy for the trivial valuation
//! on Q, where the tropical variety of `I` is the set of weights `w` whose
//! initial ideal `in_w(I)` contains no monomial.

use crate::config::StrategyConfig;
use crate::error::{Result, TropicalError};
use crate::ideal::Ideal;
use crate::ring::PolynomialRing;
use num_rational::BigRational;
use num_traits::One;
use tropix_math::grobner::{Buchberger, normal_form, reduced_groebner_basis_with};
use tropix_math::{Monomial, MonomialOrder, Polynomial, Term, ZVector};

/// Ideal-level operations a Groebner cone delegates.
///
/// Cones hold a shared reference to their strategy and never mutate it.
pub trait TropicalStrategy: Send + Sync {
    /// Reject input the strategy cannot handle.
    fn validate(&self, ideal: &Ideal, ring: &PolynomialRing) -> Result<()>;

    /// The reduced Groebner basis of `ideal` for the order of `ring`.
    fn reduce(&self, ideal: &Ideal, ring: &PolynomialRing) -> Result<Ideal>;

    /// Find a monomial in `ideal`, or in `in_w(ideal)` if `w` is given.
    ///
    /// With `w`, the generators must be a Groebner basis for an order whose
    /// cone contains `w` in its closure.
    fn check_initial_ideal_for_monomial(
        &self,
        ideal: &Ideal,
        ring: &PolynomialRing,
        w: Option<&ZVector>,
    ) -> Result<Option<Monomial>>;

    /// Returns true if the initial ideal contains no monomial.
    fn is_in_tropical_variety(&self, initial_ideal: &Ideal, ring: &PolynomialRing) -> Result<bool> {
        Ok(self
            .check_initial_ideal_for_monomial(initial_ideal, ring, None)?
            .is_none())
    }

    /// Restrict neighbour searches to weights with non-zero first coordinate.
    fn restrict_to_lower_half_space(&self) -> bool {
        false
    }
}

/// Strategy for the trivial valuation on Q.
#[derive(Debug, Clone, Default)]
pub struct ConstantCoefficientStrategy {
    config: StrategyConfig,
}

impl ConstantCoefficientStrategy {
    /// Create with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with configuration.
    pub fn with_config(config: StrategyConfig) -> Self {
        Self { config }
    }

    /// The configuration.
    pub fn config(&self) -> &StrategyConfig {
        &self.config
    }

    /// Smallest power of the variable product lying in the ideal, if the
    /// saturation test says one exists.
    fn monomial_witness(&self, ideal: &Ideal, ring: &PolynomialRing) -> Result<Option<Monomial>> {
        let n = ring.num_vars();
        let order = MonomialOrder::plain(self.config.monomial_test_order);
        let product = ring.variable_product();

        // J + <t * x_0 * ... * x_{n-1} - 1> with t the variable of index n.
        let t_product = product.mul(&Monomial::from_var(n as u32));
        let mut generators: Vec<Polynomial> = ideal.generators().to_vec();
        generators.push(Polynomial::from_terms(
            [
                Term::new(BigRational::one(), t_product),
                Term::constant(-BigRational::one()),
            ],
            order.clone(),
        ));
        let saturated =
            reduced_groebner_basis_with(&generators, &order, &self.config.buchberger)?;
        let is_unit = saturated.len() == 1 && saturated[0].is_constant();
        if !is_unit {
            return Ok(None);
        }

        let mut buchberger = Buchberger::new(self.config.buchberger.clone());
        let basis = buchberger.compute_basis(ideal.generators(), &order)?;
        let mut power = product.clone();
        let mut k = 1u32;
        loop {
            let candidate = Polynomial::from_monomial(power.clone(), order.clone());
            if normal_form(&candidate, &basis, &order).is_zero() {
                tracing::trace!(k, "monomial found by saturation");
                return Ok(Some(power));
            }
            k += 1;
            power = power.mul(&product);
        }
    }
}

impl TropicalStrategy for ConstantCoefficientStrategy {
    fn validate(&self, ideal: &Ideal, ring: &PolynomialRing) -> Result<()> {
        if ideal.is_zero() {
            return Err(TropicalError::EmptyIdeal);
        }
        if ring.num_vars() == 0 {
            return Err(TropicalError::EmptyRing);
        }
        for g in ideal {
            if !ring.owns(g) {
                let stray = g
                    .terms()
                    .iter()
                    .flat_map(|t| t.monomial.vars().iter())
                    .find(|vp| (vp.var as usize) >= ring.num_vars())
                    .map_or(0, |vp| vp.var);
                return Err(TropicalError::UnknownVariable(format!("x{stray}")));
            }
            if self.config.require_homogeneous && !g.is_homogeneous() {
                return Err(TropicalError::NotHomogeneous(ring.format_polynomial(g)));
            }
        }
        Ok(())
    }

    fn reduce(&self, ideal: &Ideal, ring: &PolynomialRing) -> Result<Ideal> {
        let basis =
            reduced_groebner_basis_with(ideal.generators(), ring.order(), &self.config.buchberger)?;
        Ok(Ideal::new(basis))
    }

    fn check_initial_ideal_for_monomial(
        &self,
        ideal: &Ideal,
        ring: &PolynomialRing,
        w: Option<&ZVector>,
    ) -> Result<Option<Monomial>> {
        let initial = match w {
            Some(w) => ideal.initial_ideal(w),
            None => ideal.clone(),
        };
        let initial = Ideal::new(
            initial
                .generators()
                .iter()
                .filter(|g| !g.is_zero())
                .cloned()
                .collect(),
        );
        if initial.is_empty() {
            return Ok(None);
        }
        if let Some(m) = initial.monomial_generator() {
            return Ok(Some(m.clone()));
        }
        self.monomial_witness(&initial, ring)
    }
}
