//! Tropix Core - Groebner cones, facet flips and tropical neighbours
//!
//! This crate navigates the Groebner fan of a polynomial ideal over Q and its
//! tropical variety, one facet at a time:
//! - [`PolynomialRing`] and [`Ideal`] with a textual polynomial parser
//! - [`TropicalStrategy`], the ideal-level operations a cone delegates, and
//!   [`ConstantCoefficientStrategy`] for the trivial valuation
//! - [`GroebnerCone`] with facet flips, Groebner-fan neighbours and tropical
//!   neighbours
//! - [`GroebnerCones`], an ordered cone set, and [`to_fan_star`]
//! - breadth-first traversals of whole fans
//!
//! All arithmetic is exact.
//!
//! # Examples
//!
//! ```
//! use tropix_core::{ConstantCoefficientStrategy, GroebnerCone, PolynomialRing, to_fan_star};
//! use tropix_core::traversal::groebner_fan;
//!
//! let strategy = ConstantCoefficientStrategy::new();
//! let ring = PolynomialRing::new(["x", "y", "z"]).unwrap();
//! let ideal = ring.parse_ideal(&["x + y + z"]).unwrap();
//! let cone = GroebnerCone::new(&ideal, &ring, &strategy).unwrap();
//!
//! assert_eq!(cone.groebner_neighbours().unwrap().len(), 2);
//! assert_eq!(cone.tropical_neighbours().unwrap().len(), 2);
//!
//! let fan = groebner_fan(&cone, &Default::default()).unwrap();
//! assert_eq!(to_fan_star(&fan).unwrap().len(), 3);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod cone_set;
pub mod config;
#[cfg(feature = "debug-entry-points")]
pub mod debug;
pub mod error;
pub mod groebner_cone;
pub mod ideal;
pub mod ring;
pub mod strategy;
pub mod traversal;

pub use cone_set::{GroebnerCones, to_fan_star};
pub use config::{StrategyConfig, TraversalConfig};
pub use error::{FlipInputError, Result, TropicalError};
pub use groebner_cone::{GroebnerCone, groebner_cone_compare};
pub use ideal::Ideal;
pub use ring::PolynomialRing;
pub use strategy::{ConstantCoefficientStrategy, TropicalStrategy};

// Re-export the arithmetic layer
pub use tropix_math;
