use num_bigint::BigInt;
use num_traits::One;
use parking_lot::RwLock;

lazy_static::lazy_static!(
    // grow-only table of n! values; the same factorials recur across the four
    // triangle coefficients and every term of the Racah sum
    static ref FACTORIALS: RwLock<Vec<BigInt>> = RwLock::new(vec![BigInt::one()]);
);

/// Compute `n!` as an arbitrary-precision integer.
///
/// Values are memoized in a shared table, extended on demand up to the
/// largest argument requested so far.
pub fn factorial(n: u32) -> BigInt {
    let n = n as usize;

    {
        let table = FACTORIALS.read();
        if let Some(value) = table.get(n) {
            return value.clone();
        }
    }

    let mut table = FACTORIALS.write();
    while table.len() <= n {
        let last = table.last().expect("factorial table is never empty");
        let next = last * BigInt::from(table.len());
        table.push(next);
    }
    return table[n].clone();
}
