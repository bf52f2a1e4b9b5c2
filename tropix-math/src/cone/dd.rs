//! Double description for polyhedral cones.
//!
//! Converts `{x : A x >= 0, E x = 0}` into generators: a basis of the lineality
//! space and one integer vector per extreme ray of the cone modulo lineality.
//! Constraints are added one at a time. While the running cone still has lines,
//! a line not orthogonal to the new constraint is used as a pivot and the
//! constraint is absorbed without any combinatorics. Once every line is
//! orthogonal, rays on either side of the hyperplane are combined pairwise, but
//! only for pairs that pass the combinatorial adjacency test.
//!
//! All arithmetic stays in Z: combinations are positive integer combinations
//! made primitive after each step.

use crate::vector::ZVector;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

#[derive(Debug, Clone)]
struct DdRay {
    vector: ZVector,
    /// Sorted indices of processed constraints vanishing on the ray.
    zeros: Vec<usize>,
}

/// Generators of a cone: lineality basis and extreme rays modulo lineality.
#[derive(Debug, Clone, Default)]
pub(crate) struct DdOutput {
    pub lines: Vec<ZVector>,
    pub rays: Vec<ZVector>,
}

fn intersect(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}

fn is_subset(small: &[usize], large: &[usize]) -> bool {
    let mut j = 0;
    for x in small {
        while j < large.len() && large[j] < *x {
            j += 1;
        }
        if j == large.len() || large[j] != *x {
            return false;
        }
        j += 1;
    }
    true
}

fn adjacent(rays: &[DdRay], p: usize, q: usize) -> bool {
    let common = intersect(&rays[p].zeros, &rays[q].zeros);
    !rays
        .iter()
        .enumerate()
        .any(|(r, ray)| r != p && r != q && is_subset(&common, &ray.zeros))
}

/// Run the double description method.
pub(crate) fn double_description(
    ambient_dim: usize,
    inequalities: &[ZVector],
    equations: &[ZVector],
) -> DdOutput {
    let mut lines: Vec<ZVector> = (0..ambient_dim)
        .map(|i| ZVector::unit(ambient_dim, i))
        .collect();
    let mut rays: Vec<DdRay> = Vec::new();

    let constraints = inequalities
        .iter()
        .map(|a| (a, false))
        .chain(equations.iter().map(|a| (a, true)));

    for (k, (a, is_equation)) in constraints.enumerate() {
        if a.is_zero() {
            for ray in &mut rays {
                ray.zeros.push(k);
            }
            continue;
        }

        if let Some(pos) = lines.iter().position(|l| !a.dot(l).is_zero()) {
            let pivot = lines.swap_remove(pos);
            let pivot_value = a.dot(&pivot);
            for line in &mut lines {
                let value = a.dot(line);
                if !value.is_zero() {
                    *line = (&line.scale(&pivot_value) - &pivot.scale(&value)).primitive();
                }
            }
            // Adding a multiple of a line keeps a ray inside the running cone.
            let magnitude = pivot_value.abs();
            let sign = pivot_value.signum();
            for ray in &mut rays {
                let value = a.dot(&ray.vector);
                if !value.is_zero() {
                    let shift: BigInt = &value * &sign;
                    ray.vector =
                        (&ray.vector.scale(&magnitude) - &pivot.scale(&shift)).primitive();
                }
                ray.zeros.push(k);
            }
            if !is_equation {
                let vector = if pivot_value.is_positive() {
                    pivot
                } else {
                    -pivot
                };
                rays.push(DdRay {
                    vector,
                    zeros: (0..k).collect(),
                });
            }
            continue;
        }

        let values: Vec<BigInt> = rays.iter().map(|r| a.dot(&r.vector)).collect();
        let positive: Vec<usize> = (0..rays.len())
            .filter(|&i| values[i].is_positive())
            .collect();
        let negative: Vec<usize> = (0..rays.len())
            .filter(|&i| values[i].is_negative())
            .collect();

        let mut next: Vec<DdRay> = Vec::with_capacity(rays.len());
        for &p in &positive {
            for &q in &negative {
                if !adjacent(&rays, p, q) {
                    continue;
                }
                let up = &values[p];
                let uq = -&values[q];
                let vector = (&rays[q].vector.scale(up) + &rays[p].vector.scale(&uq)).primitive();
                let mut zeros = intersect(&rays[p].zeros, &rays[q].zeros);
                zeros.push(k);
                next.push(DdRay { vector, zeros });
            }
        }
        for (i, mut ray) in rays.into_iter().enumerate() {
            if values[i].is_zero() {
                ray.zeros.push(k);
                next.push(ray);
            } else if values[i].is_positive() && !is_equation {
                next.push(ray);
            }
        }
        rays = next;
    }

    tracing::trace!(
        lines = lines.len(),
        rays = rays.len(),
        "double description finished"
    );

    DdOutput {
        lines,
        rays: rays.into_iter().map(|r| r.vector).collect(),
    }
}
