//! Sparse multivariate polynomials over Q.
//!
//! Polynomials are sums of [`Term`]s kept in decreasing order for their
//! [`MonomialOrder`]. Monomial orders are weight orders: a list of integer weight
//! vectors compared in sequence, followed by a [`TieBreak`] order. Weights may
//! have negative entries, so an order is not required to be a well-order on all
//! monomials; it is one on the monomials of a homogeneous ideal of fixed degree,
//! which is all the Groebner machinery relies on.
//!
//! Variables are numbered from zero and `x0 > x1 > ... ` in every tie-break.

use crate::vector::ZVector;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};
use std::sync::Arc;

/// Variable identifier for polynomials.
pub type Var = u32;

/// Power of a variable (variable, exponent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarPower {
    /// The variable identifier.
    pub var: Var,
    /// The exponent of the variable.
    pub power: u32,
}

impl VarPower {
    /// Create a new variable power.
    #[inline]
    pub fn new(var: Var, power: u32) -> Self {
        Self { var, power }
    }
}

/// A monomial is a product of variables with exponents.
/// Represented as a sorted list of (variable, power) pairs.
/// The unit monomial (1) is represented as an empty list.
#[derive(Clone, PartialEq, Eq)]
pub struct Monomial {
    /// Variables with their exponents, sorted by variable index.
    vars: SmallVec<[VarPower; 4]>,
    /// Cached total degree.
    total_degree: u32,
    /// Cached hash value.
    hash: u64,
}

impl Monomial {
    fn from_sorted(vars: SmallVec<[VarPower; 4]>) -> Self {
        Self {
            total_degree: vars.iter().map(|vp| vp.power).sum(),
            hash: compute_monomial_hash(&vars),
            vars,
        }
    }

    /// Create the unit monomial (1).
    #[inline]
    pub fn unit() -> Self {
        Self {
            vars: SmallVec::new(),
            total_degree: 0,
            hash: 0,
        }
    }

    /// Create a monomial from a single variable with power 1.
    #[inline]
    pub fn from_var(var: Var) -> Self {
        Self::from_var_power(var, 1)
    }

    /// Create a monomial from a single variable with a given power.
    pub fn from_var_power(var: Var, power: u32) -> Self {
        if power == 0 {
            return Self::unit();
        }
        let mut vars = SmallVec::new();
        vars.push(VarPower::new(var, power));
        Self::from_sorted(vars)
    }

    /// Create a monomial from a list of (variable, power) pairs.
    /// The input doesn't need to be sorted or normalized.
    pub fn from_powers(powers: impl IntoIterator<Item = (Var, u32)>) -> Self {
        let mut var_powers: FxHashMap<Var, u32> = FxHashMap::default();
        for (var, power) in powers {
            if power > 0 {
                *var_powers.entry(var).or_insert(0) += power;
            }
        }

        let mut vars: SmallVec<[VarPower; 4]> = var_powers
            .into_iter()
            .map(|(v, p)| VarPower::new(v, p))
            .collect();
        vars.sort_by_key(|vp| vp.var);
        Self::from_sorted(vars)
    }

    /// Create a monomial from a dense exponent vector.
    pub fn from_exponents(exponents: &[u32]) -> Self {
        let vars = exponents
            .iter()
            .enumerate()
            .filter(|(_, e)| **e > 0)
            .map(|(i, &e)| VarPower::new(i as Var, e))
            .collect();
        Self::from_sorted(vars)
    }

    /// Returns true if this is the unit monomial.
    #[inline]
    pub fn is_unit(&self) -> bool {
        self.vars.is_empty()
    }

    /// Returns the total degree of the monomial.
    #[inline]
    pub fn total_degree(&self) -> u32 {
        self.total_degree
    }

    /// Returns the variables and their powers.
    #[inline]
    pub fn vars(&self) -> &[VarPower] {
        &self.vars
    }

    /// Exponent of `var`.
    pub fn degree(&self, var: Var) -> u32 {
        self.vars
            .binary_search_by_key(&var, |vp| vp.var)
            .map_or(0, |i| self.vars[i].power)
    }

    /// Multiply two monomials.
    pub fn mul(&self, other: &Monomial) -> Monomial {
        if self.is_unit() {
            return other.clone();
        }
        if other.is_unit() {
            return self.clone();
        }
        self.merge(other, |a, b| a + b)
    }

    /// [`Monomial::mul`], or `None` if the total degree would overflow.
    ///
    /// No exponent exceeds the total degree, so a representable degree
    /// means every exponent is representable too.
    pub fn checked_mul(&self, other: &Monomial) -> Option<Monomial> {
        self.total_degree.checked_add(other.total_degree)?;
        Some(self.mul(other))
    }

    /// Least common multiple.
    pub fn lcm(&self, other: &Monomial) -> Monomial {
        self.merge(other, u32::max)
    }

    /// Combine exponents variable by variable; missing exponents count as zero.
    fn merge(&self, other: &Monomial, f: impl Fn(u32, u32) -> u32) -> Monomial {
        let mut vars: SmallVec<[VarPower; 4]> = SmallVec::new();
        let mut i = 0;
        let mut j = 0;

        while i < self.vars.len() && j < other.vars.len() {
            match self.vars[i].var.cmp(&other.vars[j].var) {
                Ordering::Less => {
                    vars.push(self.vars[i]);
                    i += 1;
                }
                Ordering::Greater => {
                    vars.push(other.vars[j]);
                    j += 1;
                }
                Ordering::Equal => {
                    vars.push(VarPower::new(
                        self.vars[i].var,
                        f(self.vars[i].power, other.vars[j].power),
                    ));
                    i += 1;
                    j += 1;
                }
            }
        }
        vars.extend_from_slice(&self.vars[i..]);
        vars.extend_from_slice(&other.vars[j..]);
        Self::from_sorted(vars)
    }

    /// Check if other divides self. Returns the quotient if it does.
    pub fn div(&self, other: &Monomial) -> Option<Monomial> {
        if other.is_unit() {
            return Some(self.clone());
        }

        let mut vars: SmallVec<[VarPower; 4]> = SmallVec::new();
        let mut j = 0;

        for vp in &self.vars {
            if j < other.vars.len() && other.vars[j].var == vp.var {
                if vp.power < other.vars[j].power {
                    return None;
                }
                let new_power = vp.power - other.vars[j].power;
                if new_power > 0 {
                    vars.push(VarPower::new(vp.var, new_power));
                }
                j += 1;
            } else if j < other.vars.len() && other.vars[j].var < vp.var {
                return None;
            } else {
                vars.push(*vp);
            }
        }

        if j < other.vars.len() {
            return None;
        }
        Some(Self::from_sorted(vars))
    }

    /// Returns true if `self` divides `other`.
    pub fn divides(&self, other: &Monomial) -> bool {
        if self.total_degree > other.total_degree {
            return false;
        }
        self.vars.iter().all(|vp| other.degree(vp.var) >= vp.power)
    }

    /// Compute the GCD of two monomials.
    pub fn gcd(&self, other: &Monomial) -> Monomial {
        if self.is_unit() || other.is_unit() {
            return Monomial::unit();
        }
        let vars = self
            .vars
            .iter()
            .filter_map(|vp| {
                let p = vp.power.min(other.degree(vp.var));
                (p > 0).then(|| VarPower::new(vp.var, p))
            })
            .collect();
        Self::from_sorted(vars)
    }

    /// Raise monomial to a power.
    pub fn pow(&self, n: u32) -> Monomial {
        if n == 0 {
            return Monomial::unit();
        }
        if n == 1 {
            return self.clone();
        }
        let vars = self
            .vars
            .iter()
            .map(|vp| VarPower::new(vp.var, vp.power * n))
            .collect();
        Self::from_sorted(vars)
    }

    /// [`Monomial::pow`], or `None` if the total degree would overflow.
    pub fn checked_pow(&self, n: u32) -> Option<Monomial> {
        self.total_degree.checked_mul(n)?;
        Some(self.pow(n))
    }

    /// Inner product of the exponent vector with `w`. Missing weights count as zero.
    pub fn weighted_degree(&self, w: &ZVector) -> BigInt {
        self.vars
            .iter()
            .filter_map(|vp| {
                w.entries()
                    .get(vp.var as usize)
                    .map(|c| c * BigInt::from(vp.power))
            })
            .sum()
    }

    /// Dense exponent vector of length `n`.
    pub fn exponent_vector(&self, n: usize) -> ZVector {
        let mut v = vec![BigInt::zero(); n];
        for vp in &self.vars {
            if let Some(slot) = v.get_mut(vp.var as usize) {
                *slot = BigInt::from(vp.power);
            }
        }
        ZVector::new(v)
    }

    /// The first variable, scanning forwards or backwards, where the two
    /// exponents differ, as a pair `(self exponent, other exponent)`.
    fn first_difference(&self, other: &Monomial, from_back: bool) -> Option<(u32, u32)> {
        let (a, b) = (&self.vars, &other.vars);
        let (mut i, mut j) = (0, 0);
        while i < a.len() && j < b.len() {
            let (x, y) = if from_back {
                (a[a.len() - 1 - i], b[b.len() - 1 - j])
            } else {
                (a[i], b[j])
            };
            let ahead = if from_back {
                x.var.cmp(&y.var)
            } else {
                y.var.cmp(&x.var)
            };
            match ahead {
                Ordering::Greater => return Some((x.power, 0)),
                Ordering::Less => return Some((0, y.power)),
                Ordering::Equal if x.power != y.power => return Some((x.power, y.power)),
                Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
            }
        }
        if i < a.len() {
            let x = if from_back { a[a.len() - 1 - i] } else { a[i] };
            return Some((x.power, 0));
        }
        if j < b.len() {
            let y = if from_back { b[b.len() - 1 - j] } else { b[j] };
            return Some((0, y.power));
        }
        None
    }

    /// Lexicographic comparison with `x0 > x1 > ...`.
    pub fn lex_cmp(&self, other: &Monomial) -> Ordering {
        match self.first_difference(other, false) {
            Some((a, b)) => a.cmp(&b),
            None => Ordering::Equal,
        }
    }

    /// Graded lexicographic comparison.
    pub fn grlex_cmp(&self, other: &Monomial) -> Ordering {
        self.total_degree
            .cmp(&other.total_degree)
            .then_with(|| self.lex_cmp(other))
    }

    /// Graded reverse lexicographic comparison.
    ///
    /// Ties in total degree are broken by the last variable: the monomial with
    /// the smaller exponent there is larger.
    pub fn grevlex_cmp(&self, other: &Monomial) -> Ordering {
        self.total_degree
            .cmp(&other.total_degree)
            .then_with(|| match self.first_difference(other, true) {
                Some((a, b)) => b.cmp(&a),
                None => Ordering::Equal,
            })
    }
}

fn compute_monomial_hash(vars: &[VarPower]) -> u64 {
    use std::collections::hash_map::DefaultHasher;
    let mut hasher = DefaultHasher::new();
    for vp in vars {
        vp.hash(&mut hasher);
    }
    hasher.finish()
}

impl Hash for Monomial {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

impl fmt::Debug for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unit() {
            write!(f, "1")
        } else {
            for (i, vp) in self.vars.iter().enumerate() {
                if i > 0 {
                    write!(f, "*")?;
                }
                if vp.power == 1 {
                    write!(f, "x{}", vp.var)?;
                } else {
                    write!(f, "x{}^{}", vp.var, vp.power)?;
                }
            }
            Ok(())
        }
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A term is a coefficient multiplied by a monomial.
#[derive(Clone, PartialEq, Eq)]
pub struct Term {
    /// The coefficient of the term.
    pub coeff: BigRational,
    /// The monomial part of the term.
    pub monomial: Monomial,
}

impl Term {
    /// Create a new term.
    #[inline]
    pub fn new(coeff: BigRational, monomial: Monomial) -> Self {
        Self { coeff, monomial }
    }

    /// Create a constant term.
    #[inline]
    pub fn constant(c: BigRational) -> Self {
        Self::new(c, Monomial::unit())
    }

    /// Check if this term is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coeff.is_zero()
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.monomial.is_unit() {
            write!(f, "{}", self.coeff)
        } else if self.coeff.is_one() {
            write!(f, "{:?}", self.monomial)
        } else if self.coeff == -BigRational::one() {
            write!(f, "-{:?}", self.monomial)
        } else {
            write!(f, "{}*{:?}", self.coeff, self.monomial)
        }
    }
}

/// Order used after all weight vectors tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TieBreak {
    /// Lexicographic order.
    Lex,
    /// Graded lexicographic order.
    GrLex,
    /// Graded reverse lexicographic order.
    #[default]
    GRevLex,
}

impl TieBreak {
    /// Compare two monomials.
    pub fn compare(self, a: &Monomial, b: &Monomial) -> Ordering {
        match self {
            TieBreak::Lex => a.lex_cmp(b),
            TieBreak::GrLex => a.grlex_cmp(b),
            TieBreak::GRevLex => a.grevlex_cmp(b),
        }
    }
}

/// A weight order: weight vectors compared in sequence, then a tie-break.
///
/// Cloning is cheap; the weights are shared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct MonomialOrder {
    weights: Arc<[ZVector]>,
    tie_break: TieBreak,
}

impl MonomialOrder {
    /// An order with the given weight rows and tie-break.
    pub fn new(weights: Vec<ZVector>, tie_break: TieBreak) -> Self {
        Self {
            weights: weights.into(),
            tie_break,
        }
    }

    /// A plain tie-break order without weights.
    pub fn plain(tie_break: TieBreak) -> Self {
        Self::new(Vec::new(), tie_break)
    }

    /// Same tie-break, new weight rows.
    pub fn with_weights(&self, weights: Vec<ZVector>) -> Self {
        Self::new(weights, self.tie_break)
    }

    /// The weight rows.
    #[inline]
    pub fn weights(&self) -> &[ZVector] {
        &self.weights
    }

    /// The tie-break order.
    #[inline]
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Compare two monomials using this ordering.
    pub fn compare(&self, a: &Monomial, b: &Monomial) -> Ordering {
        for w in self.weights.iter() {
            match a.weighted_degree(w).cmp(&b.weighted_degree(w)) {
                Ordering::Equal => continue,
                other => return other,
            }
        }
        self.tie_break.compare(a, b)
    }
}

/// A multivariate polynomial over rationals.
/// Represented as a sum of terms, sorted by monomial order.
#[derive(Clone)]
pub struct Polynomial {
    /// Terms in decreasing order (according to monomial order).
    terms: Vec<Term>,
    /// The monomial ordering used.
    order: MonomialOrder,
}

impl Polynomial {
    /// Create the zero polynomial.
    #[inline]
    pub fn zero() -> Self {
        Self::zero_in(MonomialOrder::default())
    }

    /// The zero polynomial, carrying `order`.
    #[inline]
    pub fn zero_in(order: MonomialOrder) -> Self {
        Self {
            terms: Vec::new(),
            order,
        }
    }

    /// Create the one polynomial.
    #[inline]
    pub fn one() -> Self {
        Self::constant(BigRational::one())
    }

    /// Create a constant polynomial.
    pub fn constant(c: BigRational) -> Self {
        Self::from_terms([Term::constant(c)], MonomialOrder::default())
    }

    /// Create a polynomial from a single variable.
    pub fn from_var(var: Var) -> Self {
        Self::from_terms(
            [Term::new(BigRational::one(), Monomial::from_var(var))],
            MonomialOrder::default(),
        )
    }

    /// Create a polynomial consisting of one monomial with coefficient one.
    pub fn from_monomial(m: Monomial, order: MonomialOrder) -> Self {
        Self::from_terms([Term::new(BigRational::one(), m)], order)
    }

    /// Create a polynomial from terms. Normalizes and combines like terms.
    pub fn from_terms(terms: impl IntoIterator<Item = Term>, order: MonomialOrder) -> Self {
        let mut poly = Self {
            terms: terms.into_iter().filter(|t| !t.is_zero()).collect(),
            order,
        };
        poly.normalize();
        poly
    }

    /// Create a polynomial from integer coefficients.
    pub fn from_coeffs_int(coeffs: &[(i64, &[(Var, u32)])]) -> Self {
        let terms: Vec<Term> = coeffs
            .iter()
            .map(|(c, powers)| {
                Term::new(
                    BigRational::from_integer(BigInt::from(*c)),
                    Monomial::from_powers(powers.iter().copied()),
                )
            })
            .collect();
        Self::from_terms(terms, MonomialOrder::default())
    }

    /// Check if this is the zero polynomial.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Check if this is a non-zero constant.
    pub fn is_constant(&self) -> bool {
        self.terms.len() == 1 && self.terms[0].monomial.is_unit()
    }

    /// Check if this is a single term.
    pub fn is_monomial(&self) -> bool {
        self.terms.len() == 1
    }

    /// Number of terms.
    #[inline]
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// Terms in decreasing order.
    #[inline]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// The monomial order of this polynomial.
    #[inline]
    pub fn order(&self) -> &MonomialOrder {
        &self.order
    }

    /// Total degree; zero for the zero polynomial.
    pub fn total_degree(&self) -> u32 {
        self.terms
            .iter()
            .map(|t| t.monomial.total_degree())
            .max()
            .unwrap_or(0)
    }

    /// Returns true if every term has the same total degree.
    pub fn is_homogeneous(&self) -> bool {
        match self.terms.first() {
            None => true,
            Some(first) => {
                let d = first.monomial.total_degree();
                self.terms.iter().all(|t| t.monomial.total_degree() == d)
            }
        }
    }

    /// Get the leading term.
    #[inline]
    pub fn leading_term(&self) -> Option<&Term> {
        self.terms.first()
    }

    /// Get the leading coefficient; zero for the zero polynomial.
    pub fn leading_coeff(&self) -> BigRational {
        self.terms
            .first()
            .map_or_else(BigRational::zero, |t| t.coeff.clone())
    }

    /// Get the leading monomial.
    #[inline]
    pub fn leading_monomial(&self) -> Option<&Monomial> {
        self.terms.first().map(|t| &t.monomial)
    }

    /// Everything but the leading term.
    pub fn tail(&self) -> Polynomial {
        Polynomial {
            terms: self.terms.iter().skip(1).cloned().collect(),
            order: self.order.clone(),
        }
    }

    /// Normalize the polynomial (sort terms and combine like terms).
    fn normalize(&mut self) {
        if self.terms.is_empty() {
            return;
        }

        // Sort by monomial order (descending)
        let order = &self.order;
        self.terms
            .sort_by(|a, b| order.compare(&b.monomial, &a.monomial));

        let mut combined: Vec<Term> = Vec::with_capacity(self.terms.len());
        for term in self.terms.drain(..) {
            match combined.last_mut() {
                Some(last) if last.monomial == term.monomial => last.coeff += term.coeff,
                _ => combined.push(term),
            }
        }
        combined.retain(|t| !t.coeff.is_zero());
        self.terms = combined;
    }

    /// The same polynomial with its terms sorted for `order`.
    pub fn with_order(&self, order: &MonomialOrder) -> Polynomial {
        if &self.order == order {
            return self.clone();
        }
        let mut poly = Polynomial {
            terms: self.terms.clone(),
            order: order.clone(),
        };
        poly.normalize();
        poly
    }

    /// Initial form with respect to `w`: the terms of maximal `w`-weight.
    pub fn initial_form(&self, w: &ZVector) -> Polynomial {
        let Some(max) = self
            .terms
            .iter()
            .map(|t| t.monomial.weighted_degree(w))
            .max()
        else {
            return self.clone();
        };
        Polynomial {
            terms: self
                .terms
                .iter()
                .filter(|t| t.monomial.weighted_degree(w) == max)
                .cloned()
                .collect(),
            order: self.order.clone(),
        }
    }

    /// Negate the polynomial.
    pub fn neg(&self) -> Polynomial {
        Polynomial {
            terms: self
                .terms
                .iter()
                .map(|t| Term::new(-t.coeff.clone(), t.monomial.clone()))
                .collect(),
            order: self.order.clone(),
        }
    }

    /// Add two polynomials. The result uses the order of `self` unless `self` is zero.
    pub fn add(&self, other: &Polynomial) -> Polynomial {
        if self.is_zero() {
            return other.clone();
        }
        let mut terms: Vec<Term> = self.terms.clone();
        terms.extend(other.terms.iter().cloned());
        Polynomial::from_terms(terms, self.order.clone())
    }

    /// Subtract two polynomials.
    pub fn sub(&self, other: &Polynomial) -> Polynomial {
        self.add(&other.neg())
    }

    /// Multiply by a scalar.
    pub fn scale(&self, c: &BigRational) -> Polynomial {
        if c.is_zero() {
            return Polynomial::zero_in(self.order.clone());
        }
        if c.is_one() {
            return self.clone();
        }
        Polynomial {
            terms: self
                .terms
                .iter()
                .map(|t| Term::new(&t.coeff * c, t.monomial.clone()))
                .collect(),
            order: self.order.clone(),
        }
    }

    /// Multiply two polynomials.
    pub fn mul(&self, other: &Polynomial) -> Polynomial {
        if self.is_zero() || other.is_zero() {
            return Polynomial::zero_in(self.order.clone());
        }

        let mut terms: Vec<Term> = Vec::with_capacity(self.terms.len() * other.terms.len());
        for t1 in &self.terms {
            for t2 in &other.terms {
                terms.push(Term::new(
                    &t1.coeff * &t2.coeff,
                    t1.monomial.mul(&t2.monomial),
                ));
            }
        }
        Polynomial::from_terms(terms, self.order.clone())
    }

    /// Multiply by a monomial. Term order is preserved by monomial orders.
    pub fn mul_monomial(&self, m: &Monomial) -> Polynomial {
        if m.is_unit() {
            return self.clone();
        }
        Polynomial {
            terms: self
                .terms
                .iter()
                .map(|t| Term::new(t.coeff.clone(), t.monomial.mul(m)))
                .collect(),
            order: self.order.clone(),
        }
    }

    /// Compute p^k.
    pub fn pow(&self, k: u32) -> Polynomial {
        let mut result = Polynomial::from_terms(
            [Term::constant(BigRational::one())],
            self.order.clone(),
        );
        if k == 0 {
            return result;
        }

        // Binary exponentiation
        let mut base = self.clone();
        let mut exp = k;
        while exp > 0 {
            if exp & 1 == 1 {
                result = Polynomial::mul(&result, &base);
            }
            exp >>= 1;
            if exp > 0 {
                base = Polynomial::mul(&base, &base);
            }
        }
        result
    }

    /// [`Polynomial::mul`], or `None` if a product's degree would overflow.
    pub fn checked_mul(&self, other: &Polynomial) -> Option<Polynomial> {
        self.total_degree().checked_add(other.total_degree())?;
        Some(self.mul(other))
    }

    /// [`Polynomial::pow`], or `None` if the degree of p^k would overflow.
    ///
    /// Intermediate squares never exceed the degree of the result.
    pub fn checked_pow(&self, k: u32) -> Option<Polynomial> {
        self.total_degree().checked_mul(k)?;
        Some(self.pow(k))
    }

    /// Make the polynomial monic (leading coefficient = 1).
    pub fn make_monic(&self) -> Polynomial {
        if self.is_zero() {
            return self.clone();
        }
        let lc = self.leading_coeff();
        if lc.is_one() {
            return self.clone();
        }
        self.scale(&(BigRational::one() / lc))
    }
}

impl PartialEq for Polynomial {
    /// Equality of polynomials, independent of the term order.
    fn eq(&self, other: &Self) -> bool {
        if self.terms.len() != other.terms.len() {
            return false;
        }
        if self.order == other.order {
            return self.terms == other.terms;
        }
        let other = other.with_order(&self.order);
        self.terms == other.terms
    }
}

impl Eq for Polynomial {}

impl Default for Polynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            write!(f, "0")
        } else {
            for (i, term) in self.terms.iter().enumerate() {
                if i == 0 {
                    write!(f, "{:?}", term)?;
                } else if term.coeff.is_negative() {
                    write!(
                        f,
                        " - {:?}",
                        Term::new(-term.coeff.clone(), term.monomial.clone())
                    )?;
                } else {
                    write!(f, " + {:?}", term)?;
                }
            }
            Ok(())
        }
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Self::Output {
        Polynomial::neg(&self)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Self::Output {
        Polynomial::neg(self)
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Self::Output {
        Polynomial::add(&self, &rhs)
    }
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Self::Output {
        Polynomial::add(self, rhs)
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Self) -> Self::Output {
        Polynomial::sub(&self, &rhs)
    }
}

impl Sub<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Self::Output {
        Polynomial::sub(self, rhs)
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Self) -> Self::Output {
        Polynomial::mul(&self, &rhs)
    }
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Self::Output {
        Polynomial::mul(self, rhs)
    }
}
