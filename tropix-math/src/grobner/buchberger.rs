//! Buchberger's algorithm with pair criteria.
//!
//! - Product criterion: pairs with coprime leading monomials are never queued.
//! - Chain criterion: a pair `(i, j)` is dropped when some `k` has a leading
//!   monomial dividing `lcm(lm_i, lm_j)` and neither `(i, k)` nor `(j, k)` is
//!   still pending.
//! - Sugar selection: pairs are processed in order of increasing sugar degree.
//!
//! Every computation takes the [`MonomialOrder`] explicitly. Inputs are
//! re-sorted for that order first, so callers may mix polynomials built for
//! different orders.

use crate::error::{MathError, Result};
use crate::polynomial::{Monomial, MonomialOrder, Polynomial, Term};
use num_rational::BigRational;
use num_traits::One;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Critical pair for S-polynomial computation
#[derive(Debug, Clone)]
pub struct CriticalPair {
    /// First polynomial index
    pub i: usize,
    /// Second polynomial index
    pub j: usize,
    /// LCM of leading monomials
    pub lcm: Monomial,
    /// Sugar degree (for selection strategy)
    pub sugar: u32,
}

impl Ord for CriticalPair {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lower sugar first, then older pairs.
        other
            .sugar
            .cmp(&self.sugar)
            .then_with(|| other.lcm.total_degree().cmp(&self.lcm.total_degree()))
            .then_with(|| other.j.cmp(&self.j))
            .then_with(|| other.i.cmp(&self.i))
    }
}

impl PartialOrd for CriticalPair {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for CriticalPair {
    fn eq(&self, other: &Self) -> bool {
        self.i == other.i && self.j == other.j
    }
}

impl Eq for CriticalPair {}

/// Statistics for Buchberger algorithm
#[derive(Debug, Clone, Default)]
pub struct BuchbergerStats {
    /// S-polynomials formed
    pub s_polynomials_computed: u64,
    /// S-polynomials that reduced to zero
    pub zero_reductions: u64,
    /// Pairs dropped by the product criterion
    pub pairs_eliminated_product: u64,
    /// Pairs dropped by the chain criterion
    pub pairs_eliminated_chain: u64,
    /// Pairs over the degree bound
    pub pairs_skipped_degree: u64,
    /// Polynomials added beyond the input
    pub polynomials_added: u64,
    /// Single reduction steps
    pub reduction_steps: u64,
}

/// Configuration for Buchberger's algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuchbergerConfig {
    /// Enable product criterion
    pub use_product_criterion: bool,
    /// Enable chain criterion
    pub use_chain_criterion: bool,
    /// Select pairs by sugar degree instead of plain lcm degree
    pub use_sugar_strategy: bool,
    /// Skip pairs whose lcm exceeds this degree (truncated basis)
    pub max_degree: Option<u32>,
}

impl Default for BuchbergerConfig {
    fn default() -> Self {
        Self {
            use_product_criterion: true,
            use_chain_criterion: true,
            use_sugar_strategy: true,
            max_degree: None,
        }
    }
}

/// Buchberger's algorithm over Q.
pub struct Buchberger {
    config: BuchbergerConfig,
    stats: BuchbergerStats,
    order: MonomialOrder,
    basis: Vec<Polynomial>,
    pairs: BinaryHeap<CriticalPair>,
    /// Pairs queued and not yet processed, as `(min, max)` index pairs.
    pending: FxHashSet<(usize, usize)>,
    sugar_degrees: Vec<u32>,
}

impl Buchberger {
    /// Create a new Buchberger computer
    pub fn new(config: BuchbergerConfig) -> Self {
        Self {
            config,
            stats: BuchbergerStats::default(),
            order: MonomialOrder::default(),
            basis: Vec::new(),
            pairs: BinaryHeap::new(),
            pending: FxHashSet::default(),
            sugar_degrees: Vec::new(),
        }
    }

    /// Statistics of the last run.
    pub fn stats(&self) -> &BuchbergerStats {
        &self.stats
    }

    /// Compute a (non-reduced) Groebner basis of `generators` for `order`.
    ///
    /// Zero generators are ignored. Returns [`MathError::EmptyGeneratorSet`] if
    /// nothing non-zero is left.
    pub fn compute_basis(
        &mut self,
        generators: &[Polynomial],
        order: &MonomialOrder,
    ) -> Result<Vec<Polynomial>> {
        self.stats = BuchbergerStats::default();
        self.order = order.clone();
        self.basis.clear();
        self.pairs.clear();
        self.pending.clear();
        self.sugar_degrees.clear();

        for g in generators.iter().filter(|g| !g.is_zero()) {
            self.install(g.with_order(order).make_monic(), g.total_degree());
        }
        if self.basis.is_empty() {
            return Err(MathError::EmptyGeneratorSet);
        }

        while let Some(pair) = self.pairs.pop() {
            self.pending.remove(&(pair.i, pair.j));

            if self.config.use_chain_criterion && self.chain_criterion(&pair) {
                self.stats.pairs_eliminated_chain += 1;
                continue;
            }

            self.stats.s_polynomials_computed += 1;
            let s_poly = s_polynomial(&self.basis[pair.i], &self.basis[pair.j]);
            let reduced = reduce(
                &s_poly,
                &self.basis,
                &self.order,
                &mut self.stats.reduction_steps,
            );

            if reduced.is_zero() {
                self.stats.zero_reductions += 1;
                continue;
            }
            self.stats.polynomials_added += 1;
            self.install(reduced.make_monic(), pair.sugar);
        }

        tracing::debug!(
            order = ?self.order,
            size = self.basis.len(),
            s_polynomials = self.stats.s_polynomials_computed,
            zero_reductions = self.stats.zero_reductions,
            chain = self.stats.pairs_eliminated_chain,
            product = self.stats.pairs_eliminated_product,
            "buchberger finished"
        );

        Ok(std::mem::take(&mut self.basis))
    }

    /// Add a polynomial to the basis and queue its pairs.
    fn install(&mut self, poly: Polynomial, sugar: u32) {
        let new_idx = self.basis.len();
        self.basis.push(poly);
        self.sugar_degrees.push(sugar);
        for i in 0..new_idx {
            self.add_critical_pair(i, new_idx);
        }
    }

    fn add_critical_pair(&mut self, i: usize, j: usize) {
        let (Some(lm_i), Some(lm_j)) = (
            self.basis[i].leading_monomial(),
            self.basis[j].leading_monomial(),
        ) else {
            return;
        };
        let lcm = lm_i.lcm(lm_j);

        if self.config.use_product_criterion
            && lcm.total_degree() == lm_i.total_degree() + lm_j.total_degree()
        {
            self.stats.pairs_eliminated_product += 1;
            return;
        }
        if let Some(max) = self.config.max_degree
            && lcm.total_degree() > max
        {
            self.stats.pairs_skipped_degree += 1;
            return;
        }

        let sugar = if self.config.use_sugar_strategy {
            self.sugar_degree(i, lm_i, &lcm)
                .max(self.sugar_degree(j, lm_j, &lcm))
        } else {
            lcm.total_degree()
        };

        self.pending.insert((i, j));
        self.pairs.push(CriticalPair { i, j, lcm, sugar });
    }

    fn sugar_degree(&self, i: usize, lm: &Monomial, lcm: &Monomial) -> u32 {
        self.sugar_degrees[i] + lcm.total_degree() - lm.total_degree()
    }

    fn is_pending(&self, a: usize, b: usize) -> bool {
        self.pending.contains(&(a.min(b), a.max(b)))
    }

    /// Buchberger's second criterion.
    fn chain_criterion(&self, pair: &CriticalPair) -> bool {
        self.basis.iter().enumerate().any(|(k, g)| {
            k != pair.i
                && k != pair.j
                && !self.is_pending(pair.i, k)
                && !self.is_pending(pair.j, k)
                && g.leading_monomial().is_some_and(|lm| lm.divides(&pair.lcm))
        })
    }
}

/// S-polynomial of two polynomials, in the order of `f`.
pub fn s_polynomial(f: &Polynomial, g: &Polynomial) -> Polynomial {
    let g = g.with_order(f.order());
    let (Some(lt_f), Some(lt_g)) = (f.leading_term(), g.leading_term()) else {
        return Polynomial::zero_in(f.order().clone());
    };
    let lcm = lt_f.monomial.lcm(&lt_g.monomial);
    let (Some(cofactor_f), Some(cofactor_g)) = (lcm.div(&lt_f.monomial), lcm.div(&lt_g.monomial))
    else {
        return Polynomial::zero_in(f.order().clone());
    };
    let term_f = f
        .mul_monomial(&cofactor_f)
        .scale(&(BigRational::one() / &lt_f.coeff));
    let term_g = g
        .mul_monomial(&cofactor_g)
        .scale(&(BigRational::one() / &lt_g.coeff));
    term_f.sub(&term_g)
}

/// Full reduction of `f` modulo `basis`, everything sorted for `order`.
fn reduce(
    f: &Polynomial,
    basis: &[Polynomial],
    order: &MonomialOrder,
    steps: &mut u64,
) -> Polynomial {
    let mut current = f.with_order(order);
    let mut remainder: Vec<Term> = Vec::new();

    while let Some(lt) = current.leading_term().cloned() {
        let reducer = basis.iter().find_map(|g| {
            let lm = g.leading_monomial()?;
            lt.monomial.div(lm).map(|q| (g, q))
        });
        match reducer {
            Some((g, quotient)) => {
                let coeff = &lt.coeff / g.leading_coeff();
                let g = g.with_order(order);
                current = current.sub(&g.mul_monomial(&quotient).scale(&coeff));
                *steps += 1;
            }
            None => {
                remainder.push(lt);
                current = current.tail();
            }
        }
    }
    Polynomial::from_terms(remainder, order.clone())
}

/// Normal form of `f` modulo `basis` with respect to `order`.
///
/// No term of the result is divisible by a leading monomial of `basis`. The
/// result is unique when `basis` is a Groebner basis for `order`.
pub fn normal_form(f: &Polynomial, basis: &[Polynomial], order: &MonomialOrder) -> Polynomial {
    let basis: Vec<Polynomial> = basis
        .iter()
        .filter(|g| !g.is_zero())
        .map(|g| g.with_order(order))
        .collect();
    let mut steps = 0;
    reduce(f, &basis, order, &mut steps)
}

/// Turn a Groebner basis into the reduced Groebner basis.
///
/// Generators are made monic, redundant leading monomials are dropped and
/// every tail is reduced against the rest. The result is sorted by leading
/// monomial, largest first.
pub fn interreduce(polys: &[Polynomial], order: &MonomialOrder) -> Vec<Polynomial> {
    let polys: Vec<Polynomial> = polys
        .iter()
        .filter(|p| !p.is_zero())
        .map(|p| p.with_order(order).make_monic())
        .collect();

    let minimal: Vec<Polynomial> = polys
        .iter()
        .enumerate()
        .filter(|&(i, p)| {
            let Some(lm) = p.leading_monomial() else {
                return false;
            };
            !polys.iter().enumerate().any(|(j, q)| {
                j != i
                    && q.leading_monomial().is_some_and(|lq| {
                        lq.divides(lm) && (lq != lm || j < i)
                    })
            })
        })
        .map(|(_, p)| p.clone())
        .collect();

    let mut reduced: Vec<Polynomial> = (0..minimal.len())
        .map(|i| {
            let others: Vec<Polynomial> = minimal
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, q)| q.clone())
                .collect();
            normal_form(&minimal[i], &others, order).make_monic()
        })
        .collect();

    reduced.sort_by(|a, b| match (a.leading_monomial(), b.leading_monomial()) {
        (Some(x), Some(y)) => order.compare(y, x),
        _ => Ordering::Equal,
    });
    reduced
}

/// Reduced Groebner basis with the default configuration.
pub fn reduced_groebner_basis(
    generators: &[Polynomial],
    order: &MonomialOrder,
) -> Result<Vec<Polynomial>> {
    reduced_groebner_basis_with(generators, order, &BuchbergerConfig::default())
}

/// Reduced Groebner basis with an explicit configuration.
pub fn reduced_groebner_basis_with(
    generators: &[Polynomial],
    order: &MonomialOrder,
    config: &BuchbergerConfig,
) -> Result<Vec<Polynomial>> {
    let mut buchberger = Buchberger::new(config.clone());
    let basis = buchberger.compute_basis(generators, order)?;
    Ok(interreduce(&basis, order))
}

/// Returns true if every S-polynomial of `basis` reduces to zero.
pub fn is_groebner_basis(basis: &[Polynomial], order: &MonomialOrder) -> bool {
    let basis: Vec<Polynomial> = basis
        .iter()
        .filter(|g| !g.is_zero())
        .map(|g| g.with_order(order))
        .collect();
    (0..basis.len()).all(|i| {
        (i + 1..basis.len()).all(|j| {
            normal_form(&s_polynomial(&basis[i], &basis[j]), &basis, order).is_zero()
        })
    })
}
