//! Polynomial rings over Q with named variables.
//!
//! A [`PolynomialRing`] fixes the variable names and the monomial order. It
//! parses polynomials written with those names and prints polynomials back.
//!
//! ## Syntax
//!
//! ```text
//! expr   := ['+' | '-'] term (('+' | '-') term)*
//! term   := factor (['*'] factor)*
//! factor := atom ['^' integer]
//! atom   := integer ['/' integer] | name | '(' expr ')'
//! ```
//!
//! Whitespace is ignored. Errors report the byte offset of the problem.

use crate::error::{Result, TropicalError};
use crate::ideal::Ideal;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::fmt::Write as _;
use tropix_math::{Monomial, MonomialOrder, Polynomial, Term, TieBreak, Var, ZVector};

/// A polynomial ring Q[x_0, ..., x_{n-1}] with a monomial order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolynomialRing {
    names: Vec<String>,
    order: MonomialOrder,
}

impl PolynomialRing {
    /// A ring with the given variable names and the default `GRevLex` order.
    ///
    /// Names must be non-empty, distinct identifiers.
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Result<Self> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(TropicalError::EmptyRing);
        }
        for (i, name) in names.iter().enumerate() {
            if !is_identifier(name) {
                return Err(TropicalError::Parse {
                    position: 0,
                    message: format!("invalid variable name `{name}`"),
                });
            }
            if names[..i].contains(name) {
                return Err(TropicalError::DuplicateVariable(name.clone()));
            }
        }
        Ok(Self {
            names,
            order: MonomialOrder::default(),
        })
    }

    /// Replace the order by a plain tie-break order.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.order = MonomialOrder::plain(tie_break);
        self
    }

    /// The same ring with weight rows in front of its tie-break.
    ///
    /// Existing weight rows are replaced.
    pub fn with_weights(&self, weights: Vec<ZVector>) -> Self {
        Self {
            names: self.names.clone(),
            order: self.order.with_weights(weights),
        }
    }

    /// Variable names.
    #[inline]
    pub fn variables(&self) -> &[String] {
        &self.names
    }

    /// Number of variables.
    #[inline]
    pub fn num_vars(&self) -> usize {
        self.names.len()
    }

    /// The monomial order.
    #[inline]
    pub fn order(&self) -> &MonomialOrder {
        &self.order
    }

    /// Index of a variable by name.
    pub fn variable_index(&self, name: &str) -> Option<Var> {
        self.names.iter().position(|n| n == name).map(|i| i as Var)
    }

    /// The polynomial consisting of one variable.
    pub fn variable(&self, name: &str) -> Result<Polynomial> {
        let var = self
            .variable_index(name)
            .ok_or_else(|| TropicalError::UnknownVariable(name.to_string()))?;
        Ok(Polynomial::from_monomial(
            Monomial::from_var(var),
            self.order.clone(),
        ))
    }

    /// The product of all variables.
    pub fn variable_product(&self) -> Monomial {
        Monomial::from_exponents(&vec![1; self.num_vars()])
    }

    /// Returns true if every variable index of `p` belongs to this ring.
    pub fn owns(&self, p: &Polynomial) -> bool {
        p.terms().iter().all(|t| {
            t.monomial
                .vars()
                .iter()
                .all(|vp| (vp.var as usize) < self.num_vars())
        })
    }

    /// Parse a polynomial, sorted for the ring order.
    pub fn parse_polynomial(&self, input: &str) -> Result<Polynomial> {
        let mut parser = Parser {
            ring: self,
            input,
            pos: 0,
        };
        let p = parser.expr()?;
        parser.skip_whitespace();
        if parser.pos < input.len() {
            return Err(parser.error("unexpected trailing input"));
        }
        Ok(p)
    }

    /// Parse a list of generators into an ideal.
    pub fn parse_ideal<S: AsRef<str>>(&self, generators: &[S]) -> Result<Ideal> {
        generators
            .iter()
            .map(|g| self.parse_polynomial(g.as_ref()))
            .collect::<Result<Vec<_>>>()
            .map(Ideal::new)
    }

    /// Print a monomial with the ring's variable names.
    pub fn format_monomial(&self, m: &Monomial) -> String {
        if m.is_unit() {
            return "1".to_string();
        }
        let mut out = String::new();
        for (i, vp) in m.vars().iter().enumerate() {
            if i > 0 {
                out.push('*');
            }
            match self.names.get(vp.var as usize) {
                Some(name) => out.push_str(name),
                None => {
                    let _ = write!(out, "x{}", vp.var);
                }
            }
            if vp.power != 1 {
                let _ = write!(out, "^{}", vp.power);
            }
        }
        out
    }

    /// Print a polynomial with the ring's variable names.
    pub fn format_polynomial(&self, p: &Polynomial) -> String {
        if p.is_zero() {
            return "0".to_string();
        }
        let mut out = String::new();
        for (i, term) in p.terms().iter().enumerate() {
            let negative = term.coeff.is_negative();
            match (i, negative) {
                (0, true) => out.push('-'),
                (0, false) => {}
                (_, true) => out.push_str(" - "),
                (_, false) => out.push_str(" + "),
            }
            let magnitude = term.coeff.abs();
            if term.monomial.is_unit() {
                let _ = write!(out, "{magnitude}");
            } else if magnitude.is_one() {
                out.push_str(&self.format_monomial(&term.monomial));
            } else {
                let _ = write!(out, "{magnitude}*{}", self.format_monomial(&term.monomial));
            }
        }
        out
    }

    /// Print every generator of an ideal.
    pub fn format_ideal(&self, ideal: &Ideal) -> Vec<String> {
        ideal
            .generators()
            .iter()
            .map(|g| self.format_polynomial(g))
            .collect()
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn degree_overflow(position: usize) -> TropicalError {
    TropicalError::Parse {
        position,
        message: "degree exceeds the exponent range".to_string(),
    }
}

struct Parser<'r, 's> {
    ring: &'r PolynomialRing,
    input: &'s str,
    pos: usize,
}

impl Parser<'_, '_> {
    fn error(&self, message: &str) -> TropicalError {
        TropicalError::Parse {
            position: self.pos,
            message: message.to_string(),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(b) = self.input.as_bytes().get(self.pos)
            && b.is_ascii_whitespace()
        {
            self.pos += 1;
        }
    }

    fn peek(&mut self) -> Option<u8> {
        self.skip_whitespace();
        self.input.as_bytes().get(self.pos).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn constant(&self, c: BigRational) -> Polynomial {
        Polynomial::from_terms([Term::constant(c)], self.ring.order.clone())
    }

    fn expr(&mut self) -> Result<Polynomial> {
        let negate = if self.eat(b'-') {
            true
        } else {
            self.eat(b'+');
            false
        };
        let first = self.term()?;
        let mut acc = if negate { first.neg() } else { first };
        loop {
            if self.eat(b'+') {
                acc = acc.add(&self.term()?);
            } else if self.eat(b'-') {
                acc = acc.sub(&self.term()?);
            } else {
                return Ok(acc.with_order(&self.ring.order));
            }
        }
    }

    fn term(&mut self) -> Result<Polynomial> {
        let mut acc = self.factor()?;
        loop {
            if !self.eat(b'*') {
                match self.peek() {
                    Some(b) if b.is_ascii_alphanumeric() || b == b'_' || b == b'(' => {}
                    _ => return Ok(acc),
                }
            }
            self.skip_whitespace();
            let start = self.pos;
            let rhs = self.factor()?;
            acc = acc.checked_mul(&rhs).ok_or_else(|| degree_overflow(start))?;
        }
    }

    fn factor(&mut self) -> Result<Polynomial> {
        let base = self.atom()?;
        if self.eat(b'^') {
            self.skip_whitespace();
            let start = self.pos;
            let digits = self.digits();
            let exponent: u32 = digits.parse().map_err(|_| TropicalError::Parse {
                position: start,
                message: "expected a non-negative exponent".to_string(),
            })?;
            return base.checked_pow(exponent).ok_or_else(|| degree_overflow(start));
        }
        Ok(base)
    }

    fn digits(&mut self) -> &str {
        let start = self.pos;
        while self
            .input
            .as_bytes()
            .get(self.pos)
            .is_some_and(u8::is_ascii_digit)
        {
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }

    fn integer(&mut self) -> Result<BigInt> {
        let start = self.pos;
        let digits = self.digits();
        digits.parse().map_err(|_| TropicalError::Parse {
            position: start,
            message: "expected an integer".to_string(),
        })
    }

    fn atom(&mut self) -> Result<Polynomial> {
        match self.peek() {
            Some(b'(') => {
                self.pos += 1;
                let inner = self.expr()?;
                if !self.eat(b')') {
                    return Err(self.error("expected `)`"));
                }
                Ok(inner)
            }
            Some(b) if b.is_ascii_digit() => {
                let numer = self.integer()?;
                let denom = if self.eat(b'/') {
                    self.skip_whitespace();
                    let position = self.pos;
                    let d = self.integer()?;
                    if d.is_zero() {
                        return Err(TropicalError::Parse {
                            position,
                            message: "division by zero".to_string(),
                        });
                    }
                    d
                } else {
                    BigInt::one()
                };
                Ok(self.constant(BigRational::new(numer, denom)))
            }
            Some(b) if b.is_ascii_alphabetic() || b == b'_' => {
                let start = self.pos;
                while self
                    .input
                    .as_bytes()
                    .get(self.pos)
                    .is_some_and(|c| c.is_ascii_alphanumeric() || *c == b'_')
                {
                    self.pos += 1;
                }
                self.ring.variable(&self.input[start..self.pos])
            }
            Some(_) => Err(self.error("unexpected character")),
            None => Err(self.error("unexpected end of input")),
        }
    }
}
