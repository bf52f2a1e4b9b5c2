//! Property-based tests for polynomials and Groebner bases
//!
//! This module tests:
//! - Monomial orders are compatible with multiplication
//! - Polynomial arithmetic identities
//! - Reduced Groebner bases of random homogeneous ideals under weight orders

use proptest::prelude::*;
use std::cmp::Ordering;
use tropix_math::grobner::{interreduce, is_groebner_basis, normal_form, reduced_groebner_basis};
use tropix_math::{Monomial, MonomialOrder, Polynomial, TieBreak, ZVector};

/// The six monomials of degree two in three variables.
const QUADRICS: [[u32; 3]; 6] = [
    [2, 0, 0],
    [1, 1, 0],
    [1, 0, 1],
    [0, 2, 0],
    [0, 1, 1],
    [0, 0, 2],
];

fn monomial_strategy() -> impl Strategy<Value = Monomial> {
    prop::collection::vec(0u32..4, 3).prop_map(|e| Monomial::from_exponents(&e))
}

fn tie_break_strategy() -> impl Strategy<Value = TieBreak> {
    prop_oneof![
        Just(TieBreak::Lex),
        Just(TieBreak::GrLex),
        Just(TieBreak::GRevLex)
    ]
}

/// Homogeneous quadrics with small integer coefficients.
fn quadric_strategy() -> impl Strategy<Value = Polynomial> {
    prop::collection::vec((-3i64..=3, 0usize..6), 1..4).prop_map(|terms| {
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
}

fn ideal_strategy() -> impl Strategy<Value = Vec<Polynomial>> {
    prop::collection::vec(quadric_strategy(), 1..4)
        .prop_filter("needs a non-zero generator", |gens| gens.iter().any(|g| !g.is_zero()))
}

fn weight_strategy() -> impl Strategy<Value = ZVector> {
    prop::collection::vec(-4i64..=4, 3).prop_map(|xs| ZVector::from_i64s(&xs))
}

proptest! {
    /// Monomial orders are multiplicative: a < b implies a*c < b*c
    #[test]
    fn order_is_multiplicative(
        a in monomial_strategy(),
        b in monomial_strategy(),
        c in monomial_strategy(),
        w in weight_strategy(),
        tie in tie_break_strategy()
    ) {
        let order = MonomialOrder::new(vec![w], tie);
        let before = order.compare(&a, &b);
        let after = order.compare(&a.mul(&c), &b.mul(&c));
        prop_assert_eq!(before, after);
    }

    /// Monomial orders are antisymmetric and only tie on equal monomials
    #[test]
    fn order_is_total(a in monomial_strategy(), b in monomial_strategy(), tie in tie_break_strategy()) {
        let order = MonomialOrder::plain(tie);
        prop_assert_eq!(order.compare(&a, &b), order.compare(&b, &a).reverse());
        prop_assert_eq!(order.compare(&a, &b) == Ordering::Equal, a == b);
    }

    /// Multiplication distributes over addition
    #[test]
    fn mul_distributes(p in quadric_strategy(), q in quadric_strategy(), r in quadric_strategy()) {
        let lhs = &p * &(&q + &r);
        let rhs = &(&p * &q) + &(&p * &r);
        prop_assert_eq!(lhs, rhs);
    }

    /// Reduced bases are Groebner bases containing the generators
    #[test]
    fn reduced_basis_is_groebner(gens in ideal_strategy(), w in weight_strategy()) {
        let order = MonomialOrder::new(vec![w], TieBreak::GRevLex);
        let gb = reduced_groebner_basis(&gens, &order).unwrap();
        prop_assert!(is_groebner_basis(&gb, &order));
        for g in &gens {
            prop_assert!(normal_form(g, &gb, &order).is_zero());
        }
        for g in &gb {
            prop_assert!(g.is_homogeneous());
        }
    }

    /// Interreducing a reduced basis changes nothing
    #[test]
    fn interreduce_is_idempotent(gens in ideal_strategy(), w in weight_strategy()) {
        let order = MonomialOrder::new(vec![w], TieBreak::GRevLex);
        let gb = reduced_groebner_basis(&gens, &order).unwrap();
        prop_assert_eq!(interreduce(&gb, &order), gb);
    }

    /// The reduced basis does not depend on the order of the generators
    #[test]
    fn reduced_basis_is_unique(gens in ideal_strategy()) {
        let order = MonomialOrder::plain(TieBreak::GRevLex);
        let forward = reduced_groebner_basis(&gens, &order).unwrap();
        let mut reversed = gens;
        reversed.reverse();
        let backward = reduced_groebner_basis(&reversed, &order).unwrap();
        prop_assert_eq!(forward, backward);
    }
}
