//! Tropix Math - exact lattice geometry and Groebner bases
//!
//! This crate provides the exact arithmetic layer used by `tropix-core`:
//! - [`ZVector`] integer vectors and rational Gram–Schmidt helpers
//! - [`ZCone`] polyhedral cones with double-description generators
//! - [`ZFan`] collections of cones with facet adjacency
//! - [`Polynomial`] sparse polynomials over Q with weighted monomial orders
//! - Buchberger's algorithm, normal forms and interreduction
//!
//! No floating point is used anywhere.
//!
//! # Examples
//!
//! ## Cones
//!
//! ```
//! use tropix_math::{ZCone, ZVector};
//!
//! // {x : x0 >= x1, x0 >= x2}
//! let cone = ZCone::new(
//!     3,
//!     vec![ZVector::from_i64s(&[1, -1, 0]), ZVector::from_i64s(&[1, 0, -1])],
//!     vec![],
//! )
//! .unwrap();
//! assert_eq!(cone.dimension(), 3);
//! assert_eq!(cone.facets().len(), 2);
//! assert_eq!(cone.relative_interior_point(), ZVector::from_i64s(&[2, -1, -1]));
//! ```
//!
//! ## Groebner bases
//!
//! ```
//! use tropix_math::grobner::reduced_groebner_basis;
//! use tropix_math::{MonomialOrder, Polynomial, TieBreak};
//!
//! // x^2 - y, x*y - 1
//! let f = Polynomial::from_coeffs_int(&[(1, &[(0, 2)]), (-1, &[(1, 1)])]);
//! let g = Polynomial::from_coeffs_int(&[(1, &[(0, 1), (1, 1)]), (-1, &[])]);
//! let gb = reduced_groebner_basis(&[f, g], &MonomialOrder::plain(TieBreak::Lex)).unwrap();
//! assert!(gb.iter().all(|p| !p.is_zero()));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod cone;
pub mod error;
pub mod fan;
pub mod grobner;
pub mod linalg;
pub mod polynomial;
pub mod vector;

pub use cone::{Facet, ZCone};
pub use error::{MathError, Result};
pub use fan::ZFan;
pub use polynomial::{Monomial, MonomialOrder, Polynomial, Term, TieBreak, Var, VarPower};
pub use vector::ZVector;
