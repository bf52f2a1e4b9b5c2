//! Gröbner Basis Computation
//!
//! Buchberger's algorithm with product and chain criteria, normal forms and
//! interreduction, all parameterized by an explicit [`MonomialOrder`].
//!
//! [`MonomialOrder`]: crate::polynomial::MonomialOrder

pub mod buchberger;

pub use buchberger::{
    Buchberger, BuchbergerConfig, BuchbergerStats, CriticalPair, interreduce, is_groebner_basis,
    normal_form, reduced_groebner_basis, reduced_groebner_basis_with, s_polynomial,
};
