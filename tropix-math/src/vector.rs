//! Integer lattice vectors.
//!
//! [`ZVector`] is the weight-vector type used throughout the workspace: interior
//! points, facet normals, extreme rays and exponent differences are all integer
//! vectors. Rational intermediate results are cleared of denominators with
//! [`ZVector::from_rationals`].
//!
//! Vectors compare lexicographically. Comparing vectors of different lengths is
//! a logic error and trips a debug assertion.

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Index, Neg, Sub};

/// An integer vector in Z^n.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZVector {
    entries: Vec<BigInt>,
}

impl ZVector {
    /// Create a vector from its entries.
    #[inline]
    pub fn new(entries: Vec<BigInt>) -> Self {
        Self { entries }
    }

    /// The zero vector of length `n`.
    pub fn zeros(n: usize) -> Self {
        Self {
            entries: vec![BigInt::zero(); n],
        }
    }

    /// The `i`-th standard basis vector of length `n`.
    pub fn unit(n: usize, i: usize) -> Self {
        let mut v = Self::zeros(n);
        v.entries[i] = BigInt::one();
        v
    }

    /// Create a vector from machine integers.
    pub fn from_i64s(values: &[i64]) -> Self {
        Self {
            entries: values.iter().map(|&x| BigInt::from(x)).collect(),
        }
    }

    /// Clear denominators of a rational vector by a positive factor.
    ///
    /// The result is a positive multiple of the input, so it describes the same
    /// ray. It is not made primitive.
    pub fn from_rationals(values: &[BigRational]) -> Self {
        let lcm = values
            .iter()
            .fold(BigInt::one(), |acc, q| acc.lcm(q.denom()));
        Self {
            entries: values
                .iter()
                .map(|q| q.numer() * (&lcm / q.denom()))
                .collect(),
        }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true for the length-zero vector.
    ///
    /// Note that this is about the dimension, not the value: the zero vector of
    /// length three is not empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries as a slice.
    #[inline]
    pub fn entries(&self) -> &[BigInt] {
        &self.entries
    }

    /// Iterate over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, BigInt> {
        self.entries.iter()
    }

    /// Returns true if every entry is zero.
    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(Zero::is_zero)
    }

    /// Standard inner product.
    pub fn dot(&self, other: &ZVector) -> BigInt {
        debug_assert_eq!(self.len(), other.len());
        self.entries
            .iter()
            .zip(&other.entries)
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Inner product with a rational vector.
    pub fn dot_rational(&self, other: &[BigRational]) -> BigRational {
        debug_assert_eq!(self.len(), other.len());
        self.entries
            .iter()
            .zip(other)
            .fold(BigRational::zero(), |acc, (a, b)| {
                acc + b * BigRational::from_integer(a.clone())
            })
    }

    /// Multiply every entry by `c`.
    pub fn scale(&self, c: &BigInt) -> ZVector {
        Self {
            entries: self.entries.iter().map(|a| a * c).collect(),
        }
    }

    /// Non-negative gcd of the entries; zero for the zero vector.
    pub fn gcd(&self) -> BigInt {
        self.entries
            .iter()
            .fold(BigInt::zero(), |acc, a| acc.gcd(a))
    }

    /// Divide by the gcd of the entries. The zero vector is returned unchanged.
    pub fn primitive(&self) -> ZVector {
        let g = self.gcd();
        if g.is_zero() || g.is_one() {
            return self.clone();
        }
        Self {
            entries: self.entries.iter().map(|a| a / &g).collect(),
        }
    }

    /// Convert to a rational vector.
    pub fn to_rationals(&self) -> Vec<BigRational> {
        self.entries
            .iter()
            .map(|a| BigRational::from_integer(a.clone()))
            .collect()
    }

    /// Convert to machine integers if every entry fits.
    pub fn to_i64s(&self) -> Option<Vec<i64>> {
        self.entries.iter().map(ToPrimitive::to_i64).collect()
    }

    /// Sign of the first entry, or zero for an empty vector.
    pub fn first_sign(&self) -> i8 {
        match self.entries.first() {
            Some(a) if a.is_positive() => 1,
            Some(a) if a.is_negative() => -1,
            _ => 0,
        }
    }
}

impl PartialOrd for ZVector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ZVector {
    fn cmp(&self, other: &Self) -> Ordering {
        debug_assert_eq!(
            self.len(),
            other.len(),
            "comparing lattice vectors of different dimension"
        );
        self.entries.cmp(&other.entries)
    }
}

impl Index<usize> for ZVector {
    type Output = BigInt;

    fn index(&self, index: usize) -> &BigInt {
        &self.entries[index]
    }
}

impl FromIterator<BigInt> for ZVector {
    fn from_iter<I: IntoIterator<Item = BigInt>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<BigInt>> for ZVector {
    fn from(entries: Vec<BigInt>) -> Self {
        Self { entries }
    }
}

impl Add<&ZVector> for &ZVector {
    type Output = ZVector;

    fn add(self, rhs: &ZVector) -> ZVector {
        debug_assert_eq!(self.len(), rhs.len());
        self.entries
            .iter()
            .zip(&rhs.entries)
            .map(|(a, b)| a + b)
            .collect()
    }
}

impl Sub<&ZVector> for &ZVector {
    type Output = ZVector;

    fn sub(self, rhs: &ZVector) -> ZVector {
        debug_assert_eq!(self.len(), rhs.len());
        self.entries
            .iter()
            .zip(&rhs.entries)
            .map(|(a, b)| a - b)
            .collect()
    }
}

impl Neg for &ZVector {
    type Output = ZVector;

    fn neg(self) -> ZVector {
        self.entries.iter().map(|a| -a).collect()
    }
}

impl Neg for ZVector {
    type Output = ZVector;

    fn neg(self) -> ZVector {
        -&self
    }
}

impl fmt::Debug for ZVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for ZVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, a) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{a}")?;
        }
        write!(f, ")")
    }
}
