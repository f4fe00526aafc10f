use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::Error;

/// Exact coordinate type. Every predicate in the crate is evaluated over
/// this; floating point only appears in reporting helpers.
pub type Scalar = BigRational;

/// Shorthand for an integer-valued scalar.
pub fn scalar(n: i64) -> Scalar {
  Scalar::from_integer(BigInt::from(n))
}

/// Parses a plain decimal string (`"4"`, `"-2.5"`, `"12.75"`) into an exact
/// rational, preserving the written precision: `"12.75"` becomes `51/4`.
///
/// Scientific notation and rational literals are rejected; callers deal in
/// coordinates copied off floor plans, not formulas.
pub fn parse_scalar(input: &str) -> Result<Scalar, Error> {
  let bad = || Error::InvalidCoordinate(input.to_string());
  let trimmed = input.trim();
  let (negative, digits) = match trimmed.strip_prefix('-') {
    Some(rest) => (true, rest),
    None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
  };
  let mut parts = digits.splitn(2, '.');
  let int_part = parts.next().unwrap_or("");
  let frac_part = parts.next().unwrap_or("");
  if int_part.is_empty() && frac_part.is_empty() {
    return Err(bad());
  }
  if !int_part.chars().all(|c| c.is_ascii_digit()) {
    return Err(bad());
  }
  if !frac_part.chars().all(|c| c.is_ascii_digit()) {
    return Err(bad());
  }
  let mut numer = BigInt::zero();
  let mut denom = BigInt::one();
  for c in int_part.chars().chain(frac_part.chars()) {
    numer = numer * 10 + (c as u8 - b'0');
  }
  for _ in frac_part.chars() {
    denom *= 10;
  }
  if negative {
    numer = -numer;
  }
  Ok(Scalar::new(numer, denom))
}
