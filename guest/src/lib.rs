#![cfg_attr(all(feature = "guest", not(test)), no_std)]

extern crate alloc;

use alloc::{vec, vec::Vec};

/// Longest series whose terms all fit in a `u64` (F(0)..=F(93)).
pub const MAX_EXACT_TERMS: i64 = 94;

/// Whether every term of `fib_series(n)` is exact.
pub fn is_exact(n: i64) -> bool {
    n <= MAX_EXACT_TERMS
}

/// Returns the first `n` Fibonacci numbers, starting at F(0) = 0.
///
/// Counts of zero or less yield an empty series. Terms past F(93) wrap at
/// 64 bits; see [`MAX_EXACT_TERMS`].
pub fn fib_series(n: i64) -> Vec<u64> {
    match n {
        i64::MIN..=0 => Vec::new(),
        1 => vec![0],
        2 => vec![0, 1],
        _ => {
            let mut series = vec![0, 1];
            let mut a: u64 = 0;
            let mut b: u64 = 1;
            for _ in 2..n {
                // Naturally overflow at 64 bits
                let c: u64 = a.wrapping_add(b);
                a = b;
                b = c;
                series.push(c);
            }
            series
        }
    }
}
