//! Property-based tests for tropix-math
//!
//! This module contains property tests for:
//! - Cone generators, relative interiors and facets
//! - Monomial orders, polynomial arithmetic and Groebner bases

mod cone_properties;
mod polynomial_properties;
