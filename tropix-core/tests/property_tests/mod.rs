//! Property-based tests for tropix-core
//!
//! This module contains property tests for:
//! - Facet flips: symmetry and adjacency of neighbours
//! - The tropical filter on neighbour sets
//! - Cone set ordering and deduplication

mod cone_set_properties;
mod neighbour_properties;
