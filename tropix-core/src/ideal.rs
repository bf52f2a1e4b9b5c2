//! Polynomial ideals given by generator lists.

use tropix_math::{Monomial, MonomialOrder, Polynomial, ZVector};

/// An ideal of a polynomial ring, given by generators.
///
/// Equality compares generator sets: the same generators in any order, each
/// compared independently of its term order.
#[derive(Debug, Clone, Default)]
pub struct Ideal {
    generators: Vec<Polynomial>,
}

impl Ideal {
    /// Ideal generated by `generators`.
    pub fn new(generators: Vec<Polynomial>) -> Self {
        Self { generators }
    }

    /// The generators.
    #[inline]
    pub fn generators(&self) -> &[Polynomial] {
        &self.generators
    }

    /// Number of generators.
    #[inline]
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// Returns true if there are no generators.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Iterate over the generators.
    pub fn iter(&self) -> std::slice::Iter<'_, Polynomial> {
        self.generators.iter()
    }

    /// Returns true if no generator is non-zero.
    pub fn is_zero(&self) -> bool {
        self.generators.iter().all(Polynomial::is_zero)
    }

    /// Returns true if every generator is homogeneous.
    pub fn is_homogeneous(&self) -> bool {
        self.generators.iter().all(Polynomial::is_homogeneous)
    }

    /// Initial forms of the generators with respect to `w`.
    ///
    /// This generates the initial ideal `in_w(I)` when the generators form a
    /// Groebner basis for an order whose cone contains `w` in its closure.
    pub fn initial_ideal(&self, w: &ZVector) -> Ideal {
        Ideal::new(self.generators.iter().map(|g| g.initial_form(w)).collect())
    }

    /// The generators re-sorted for `order`.
    pub fn with_order(&self, order: &MonomialOrder) -> Ideal {
        Ideal::new(self.generators.iter().map(|g| g.with_order(order)).collect())
    }

    /// The first generator that is a single term, as a monomial.
    pub fn monomial_generator(&self) -> Option<&Monomial> {
        self.generators
            .iter()
            .find(|g| g.is_monomial())
            .and_then(Polynomial::leading_monomial)
    }
}

impl PartialEq for Ideal {
    fn eq(&self, other: &Self) -> bool {
        self.generators.len() == other.generators.len()
            && self
                .generators
                .iter()
                .all(|g| other.generators.contains(g))
    }
}

impl Eq for Ideal {}

impl FromIterator<Polynomial> for Ideal {
    fn from_iter<I: IntoIterator<Item = Polynomial>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Ideal {
    type Item = &'a Polynomial;
    type IntoIter = std::slice::Iter<'a, Polynomial>;

    fn into_iter(self) -> Self::IntoIter {
        self.generators.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring::PolynomialRing;

    #[test]
    fn test_initial_ideal() {
        let ring = PolynomialRing::new(["x", "y", "z"]).unwrap();
        let ideal = ring.parse_ideal(&["x + y + z", "x*y - z^2"]).unwrap();
        let initial = ideal.initial_ideal(&ZVector::from_i64s(&[1, 1, -2]));
        assert_eq!(
            ring.format_ideal(&initial),
            vec!["x + y".to_string(), "x*y".to_string()]
        );
        assert_eq!(
            initial.monomial_generator(),
            Some(&tropix_math::Monomial::from_exponents(&[1, 1, 0]))
        );
        assert!(ideal.is_homogeneous());
    }

    #[test]
    fn test_equality_ignores_generator_order() {
        let ring = PolynomialRing::new(["x", "y"]).unwrap();
        let a = ring.parse_ideal(&["x", "y^2"]).unwrap();
        let b = ring.parse_ideal(&["y^2", "x"]).unwrap();
        let c = ring.parse_ideal(&["y^2", "x + y"]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(!a.is_zero());
        assert!(Ideal::default().is_zero());
    }
}
