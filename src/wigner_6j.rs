use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::factorial::factorial;
use crate::rational::SqrtRational;

// All spins are passed as twice their value, so that integer and
// half-integer angular momenta are both exact integers (j = 3/2 is passed
// as 3). Every factorial argument below is then an integer whenever the
// corresponding triple is admissible.

/// Check that three spins satisfy the triangle inequalities and that their
/// sum is an integer.
fn triangle_condition(two_a: i32, two_b: i32, two_c: i32) -> bool {
    return two_a + two_b >= two_c
        && two_a + two_c >= two_b
        && two_b + two_c >= two_a
        && (two_a + two_b + two_c) % 2 == 0;
}

/// The squared triangle coefficient `Δ²(a, b, c)` as an exact rational:
///
/// ```text
/// Δ²(a, b, c) = (a + b - c)! (a - b + c)! (-a + b + c)! / (a + b + c + 1)!
/// ```
///
/// Returns zero for any invalid triple (negative spin, triangle violation,
/// or non-integer perimeter). Working with `Δ²` keeps everything rational;
/// the square root is only taken once, on the final product.
fn triangle_coefficient_squared(two_a: i32, two_b: i32, two_c: i32) -> BigRational {
    if two_a < 0 || two_b < 0 || two_c < 0 {
        return BigRational::zero();
    }
    if !triangle_condition(two_a, two_b, two_c) {
        return BigRational::zero();
    }

    let numerator = factorial(((two_a + two_b - two_c) / 2) as u32)
        * factorial(((two_a - two_b + two_c) / 2) as u32)
        * factorial(((-two_a + two_b + two_c) / 2) as u32);
    let denominator = factorial(((two_a + two_b + two_c) / 2 + 1) as u32);

    return BigRational::new(numerator, denominator);
}

/// Compute the triangle coefficient `Δ(a, b, c)` for the given spins, passed
/// as twice their value.
///
/// Returns exact zero when a spin is negative or a triangle inequality is
/// violated, and the exact positive `sqrt(Δ²)` otherwise.
pub fn triangle_coefficient(two_a: i32, two_b: i32, two_c: i32) -> SqrtRational {
    return SqrtRational::sqrt(triangle_coefficient_squared(two_a, two_b, two_c));
}

/// Bounds `(k_min, k_max)` of the Racah sum index, together with the four
/// triple sums `t_i` and the three opposite-pair sums `q_j`.
///
/// `k_min = max(t_i)` and `k_max = min(q_j)`; whenever all four triples are
/// valid the doubled sums are even, so the division is exact and `k` steps
/// over plain integers.
fn summation_bounds(two_j: &[i32; 6]) -> (i32, i32, [i32; 4], [i32; 3]) {
    let t = [
        (two_j[0] + two_j[1] + two_j[2]) / 2,
        (two_j[0] + two_j[4] + two_j[5]) / 2,
        (two_j[3] + two_j[1] + two_j[5]) / 2,
        (two_j[3] + two_j[4] + two_j[2]) / 2,
    ];
    let q = [
        (two_j[0] + two_j[1] + two_j[3] + two_j[4]) / 2,
        (two_j[1] + two_j[2] + two_j[4] + two_j[5]) / 2,
        (two_j[0] + two_j[2] + two_j[3] + two_j[5]) / 2,
    ];

    let k_min = *t.iter().max().expect("t is not empty");
    let k_max = *q.iter().min().expect("q is not empty");

    return (k_min, k_max, t, q);
}

/// Evaluate the finite alternating sum of Racah's formula:
///
/// ```text
/// sum over k of (-1)^k (k + 1)! / [ prod (k - t_i)! * prod (q_j - k)! ]
/// ```
///
/// The bounds guarantee every factorial argument is a non-negative integer.
fn racah_sum(k_min: i32, k_max: i32, t: &[i32; 4], q: &[i32; 3]) -> BigRational {
    let mut total = BigRational::zero();

    for k in k_min..=k_max {
        let mut denominator = BigInt::one();
        for t_i in t {
            denominator *= factorial((k - t_i) as u32);
        }
        for q_j in q {
            denominator *= factorial((q_j - k) as u32);
        }

        let mut term = BigRational::new(factorial((k + 1) as u32), denominator);
        if k % 2 != 0 {
            term = -term;
        }
        total += term;
    }

    return total;
}

/// Compute the Wigner 6-j symbol for the given spins, passed as twice their
/// value:
///
/// ```text
/// { j1 j2 j3 }
/// { j4 j5 j6 }
/// ```
///
/// The symbol is evaluated with Racah's closed-form single sum, entirely in
/// exact arithmetic. The result is exact zero whenever one of the four
/// triples `(j1, j2, j3)`, `(j1, j5, j6)`, `(j4, j2, j6)`, `(j4, j5, j3)` is
/// not admissible or the summation range is empty; the function never panics
/// for any input sextuple.
pub fn closed_form_3nj(
    two_j1: i32,
    two_j2: i32,
    two_j3: i32,
    two_j4: i32,
    two_j5: i32,
    two_j6: i32,
) -> SqrtRational {
    let two_j = [two_j1, two_j2, two_j3, two_j4, two_j5, two_j6];

    let squares = [
        triangle_coefficient_squared(two_j1, two_j2, two_j3),
        triangle_coefficient_squared(two_j1, two_j5, two_j6),
        triangle_coefficient_squared(two_j4, two_j2, two_j6),
        triangle_coefficient_squared(two_j4, two_j5, two_j3),
    ];

    // any invalid triple zeroes the whole symbol, and skipping the sum also
    // keeps every factorial argument in range
    if squares.iter().any(|delta| delta.is_zero()) {
        return SqrtRational::zero();
    }

    let (k_min, k_max, t, q) = summation_bounds(&two_j);
    if k_min > k_max {
        return SqrtRational::zero();
    }

    let sum = racah_sum(k_min, k_max, &t, &q);
    if sum.is_zero() {
        return SqrtRational::zero();
    }

    let mut product = BigRational::one();
    for delta in &squares {
        product *= delta;
    }

    let mut result = SqrtRational::sqrt(product);
    result *= &sum;
    return result;
}
