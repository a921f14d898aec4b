use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// An exact value of the form `coefficient * sqrt(radicand)`.
///
/// The coefficient is a signed arbitrary-precision rational and the radicand
/// is a non-negative square-free integer (`1` when the value is rational).
/// Keeping the root deferred like this means products of square roots can be
/// combined and simplified without ever leaving exact arithmetic.
///
/// Values are always stored in canonical form (perfect squares pulled out of
/// the radicand, zero stored as `0 * sqrt(1)`), so structural equality is
/// value equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqrtRational {
    coefficient: BigRational,
    radicand: BigInt,
}

impl SqrtRational {
    /// The exact zero value.
    pub fn zero() -> SqrtRational {
        return SqrtRational {
            coefficient: BigRational::zero(),
            radicand: BigInt::one(),
        };
    }

    /// Create an exact rational value (radicand `1`).
    pub fn from_rational(value: BigRational) -> SqrtRational {
        if value.is_zero() {
            return SqrtRational::zero();
        }
        return SqrtRational {
            coefficient: value,
            radicand: BigInt::one(),
        };
    }

    /// Create the square root of a non-negative rational, i.e. the exact
    /// value `sqrt(value)` with `sqrt(p/q)` stored as `sqrt(p * q) / q`.
    pub fn sqrt(value: BigRational) -> SqrtRational {
        debug_assert!(!value.is_negative());
        if value.is_zero() {
            return SqrtRational::zero();
        }

        let p = value.numer().clone();
        let q = value.denom().clone();
        let result = SqrtRational {
            coefficient: BigRational::new(BigInt::one(), q.clone()),
            radicand: p * q,
        };
        return result.simplified();
    }

    /// Extract the square part of the radicand into the coefficient,
    /// restoring the canonical square-free form.
    fn simplified(mut self) -> SqrtRational {
        if self.coefficient.is_zero() || self.radicand.is_zero() {
            return SqrtRational::zero();
        }

        let (root, square_free) = extract_square(&self.radicand);
        self.coefficient *= BigRational::from_integer(root);
        self.radicand = square_free;
        return self;
    }

    pub fn is_zero(&self) -> bool {
        return self.coefficient.is_zero();
    }

    /// Whether this value is rational, i.e. carries no square root.
    pub fn is_rational(&self) -> bool {
        return self.radicand.is_one();
    }

    pub fn coefficient(&self) -> &BigRational {
        return &self.coefficient;
    }

    pub fn radicand(&self) -> &BigInt {
        return &self.radicand;
    }

    /// The value as an exact rational, or `None` if a square root remains.
    pub fn as_rational(&self) -> Option<BigRational> {
        if self.is_rational() {
            return Some(self.coefficient.clone());
        }
        return None;
    }

    /// Get this value as a floating point number. This is a view for
    /// consumers only, nothing inside the crate computes with it.
    pub fn to_f64(&self) -> f64 {
        let coefficient = self.coefficient.to_f64().unwrap_or(f64::NAN);
        let radicand = self.radicand.to_f64().unwrap_or(f64::INFINITY);
        return coefficient * radicand.sqrt();
    }
}

impl std::ops::MulAssign<&BigRational> for SqrtRational {
    fn mul_assign(&mut self, rhs: &BigRational) {
        self.coefficient *= rhs;
        if self.coefficient.is_zero() {
            *self = SqrtRational::zero();
        }
    }
}

impl std::ops::Mul for SqrtRational {
    type Output = SqrtRational;

    // sqrt(a) * sqrt(b) = sqrt(a * b), then re-canonicalize
    fn mul(self, rhs: SqrtRational) -> SqrtRational {
        let result = SqrtRational {
            coefficient: self.coefficient * rhs.coefficient,
            radicand: self.radicand * rhs.radicand,
        };
        return result.simplified();
    }
}

impl fmt::Display for SqrtRational {
    /// Renders in the symbolic-library style used by the golden reference
    /// data: `0`, `-3/70`, `sqrt(1430)/2145`, `-2*sqrt(3)/7`, ...
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coefficient.is_zero() {
            return write!(f, "0");
        }
        if self.radicand.is_one() {
            return write!(f, "{}", self.coefficient);
        }

        if self.coefficient.is_negative() {
            write!(f, "-")?;
        }
        let numer = self.coefficient.numer().abs();
        if !numer.is_one() {
            write!(f, "{}*", numer)?;
        }
        write!(f, "sqrt({})", self.radicand)?;
        let denom = self.coefficient.denom();
        if !denom.is_one() {
            write!(f, "/{}", denom)?;
        }
        return Ok(());
    }
}

/// Decompose `n >= 0` as `n = root² * square_free`.
///
/// Plain trial division: every radicand in this crate divides a product of
/// factorials, so all its prime factors are small and the loop terminates
/// quickly even for integers with hundreds of digits.
fn extract_square(n: &BigInt) -> (BigInt, BigInt) {
    let two = BigInt::from(2);

    let mut rest = n.clone();
    let mut root = BigInt::one();
    let mut square_free = BigInt::one();

    let mut p = two.clone();
    while !rest.is_one() && &p * &p <= rest {
        let mut exponent = 0_u32;
        while (&rest % &p).is_zero() {
            rest /= &p;
            exponent += 1;
        }

        for _ in 0..(exponent / 2) {
            root *= &p;
        }
        if exponent % 2 == 1 {
            square_free *= &p;
        }

        if p == two {
            p = BigInt::from(3);
        } else {
            p += 2;
        }
    }

    // anything left is a prime with exponent one
    return (root, square_free * rest);
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_ulps_eq;

    fn rational(n: i64, d: i64) -> BigRational {
        return BigRational::new(BigInt::from(n), BigInt::from(d));
    }

    #[test]
    fn test_extract_square() {
        let (root, rest) = extract_square(&BigInt::from(1));
        assert_eq!(root, BigInt::from(1));
        assert_eq!(rest, BigInt::from(1));

        let (root, rest) = extract_square(&BigInt::from(12));
        assert_eq!(root, BigInt::from(2));
        assert_eq!(rest, BigInt::from(3));

        let (root, rest) = extract_square(&BigInt::from(576));
        assert_eq!(root, BigInt::from(24));
        assert_eq!(rest, BigInt::from(1));

        // 2^5 * 3^3 * 7 = 6048 = (2^2 * 3)^2 * 42
        let (root, rest) = extract_square(&BigInt::from(6048));
        assert_eq!(root, BigInt::from(12));
        assert_eq!(rest, BigInt::from(42));
    }

    #[test]
    fn test_sqrt_canonical_form() {
        // sqrt(1/24) = sqrt(6)/12
        let value = SqrtRational::sqrt(rational(1, 24));
        assert_eq!(*value.coefficient(), rational(1, 12));
        assert_eq!(*value.radicand(), BigInt::from(6));
        assert!(!value.is_rational());

        // sqrt(9/4) collapses to the rational 3/2
        let value = SqrtRational::sqrt(rational(9, 4));
        assert_eq!(value.as_rational(), Some(rational(3, 2)));

        assert!(SqrtRational::sqrt(rational(0, 1)).is_zero());
    }

    #[test]
    fn test_product_of_roots() {
        // sqrt(6) * sqrt(6) = 6
        let root_six = SqrtRational::sqrt(rational(6, 1));
        let product = root_six.clone() * root_six;
        assert_eq!(product.as_rational(), Some(rational(6, 1)));

        // sqrt(2) * sqrt(3) = sqrt(6) stays irrational
        let product = SqrtRational::sqrt(rational(2, 1)) * SqrtRational::sqrt(rational(3, 1));
        assert_eq!(*product.radicand(), BigInt::from(6));
    }

    #[test]
    fn test_scaling() {
        let mut value = SqrtRational::sqrt(rational(1, 24));
        value *= &rational(-4, 5);
        assert_eq!(*value.coefficient(), rational(-1, 15));
        assert_eq!(*value.radicand(), BigInt::from(6));

        value *= &rational(0, 1);
        assert_eq!(value, SqrtRational::zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(SqrtRational::zero().to_string(), "0");
        assert_eq!(SqrtRational::from_rational(rational(-3, 70)).to_string(), "-3/70");
        assert_eq!(SqrtRational::from_rational(rational(4, 1)).to_string(), "4");
        assert_eq!(SqrtRational::sqrt(rational(6, 144)).to_string(), "sqrt(6)/12");

        let mut value = SqrtRational::sqrt(rational(3, 1));
        value *= &rational(-2, 7);
        assert_eq!(value.to_string(), "-2*sqrt(3)/7");
    }

    #[test]
    fn test_to_f64() {
        let value = SqrtRational::sqrt(rational(1, 24));
        assert_ulps_eq!(value.to_f64(), (1.0_f64 / 24.0).sqrt());

        let mut value = SqrtRational::from_rational(rational(1, 6));
        value *= &rational(-1, 1);
        assert_ulps_eq!(value.to_f64(), -1.0 / 6.0);
    }
}
