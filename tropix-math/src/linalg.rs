//! Exact linear algebra over Q on lattice vectors.
//!
//! Everything here works on rational Gram–Schmidt bases: ranks, orthogonal
//! projections and the orthogonal-complement representatives used to make
//! extreme rays canonical.

use crate::vector::ZVector;
use num_rational::BigRational;
use num_traits::Zero;

/// Rational vector used for intermediate results.
pub type QVector = Vec<BigRational>;

/// Inner product of two rational vectors.
pub fn dot_q(a: &[BigRational], b: &[BigRational]) -> BigRational {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .fold(BigRational::zero(), |acc, (x, y)| acc + x * y)
}

/// Gram–Schmidt orthogonal basis of the span of `vectors`.
///
/// Dependent vectors are dropped, so the length of the result is the rank.
pub fn orthogonal_basis<'a>(vectors: impl IntoIterator<Item = &'a ZVector>) -> Vec<QVector> {
    let mut basis: Vec<QVector> = Vec::new();
    let mut norms: Vec<BigRational> = Vec::new();
    for v in vectors {
        let mut u = v.to_rationals();
        for (b, norm) in basis.iter().zip(&norms) {
            let coeff = dot_q(&u, b) / norm;
            if coeff.is_zero() {
                continue;
            }
            for (ui, bi) in u.iter_mut().zip(b) {
                *ui -= &coeff * bi;
            }
        }
        if u.iter().all(Zero::is_zero) {
            continue;
        }
        norms.push(dot_q(&u, &u));
        basis.push(u);
    }
    basis
}

/// Rank of a set of integer vectors.
pub fn rank<'a>(vectors: impl IntoIterator<Item = &'a ZVector>) -> usize {
    orthogonal_basis(vectors).len()
}

fn projection(v: &ZVector, orthogonal: &[QVector]) -> QVector {
    let mut p = vec![BigRational::zero(); v.len()];
    for b in orthogonal {
        let coeff = v.dot_rational(b) / dot_q(b, b);
        if coeff.is_zero() {
            continue;
        }
        for (pi, bi) in p.iter_mut().zip(b) {
            *pi += &coeff * bi;
        }
    }
    p
}

/// Primitive integer representative of the projection of `v` onto the span of
/// an orthogonal basis.
pub fn project_onto_span(v: &ZVector, orthogonal: &[QVector]) -> ZVector {
    ZVector::from_rationals(&projection(v, orthogonal)).primitive()
}

/// Primitive integer representative of the projection of `v` onto the
/// orthogonal complement of the span of an orthogonal basis.
pub fn project_onto_complement(v: &ZVector, orthogonal: &[QVector]) -> ZVector {
    if orthogonal.is_empty() {
        return v.primitive();
    }
    let p = projection(v, orthogonal);
    let residual: QVector = v
        .to_rationals()
        .into_iter()
        .zip(p)
        .map(|(x, y)| x - y)
        .collect();
    ZVector::from_rationals(&residual).primitive()
}
