//! Term generators for the supported integer sequences.
//!
//! Every generator unfolds its sequence from a fixed-size rolling state
//! (`std::iter::successors`), so searching never builds a growing list.
//! Iteration ends early if the next term would overflow `i64` or would
//! not be larger than the previous one.

use std::iter::successors;

/// Base terms of the Fibonacci-like sequence. `2` is a seed, not a sum.
pub const FIBONACCI_SEEDS: [i64; 3] = [0, 1, 2];

/// Terms derived from the seeds: 3, 5, 8, 13, ...
pub fn fibonacci_like_sums() -> impl Iterator<Item = i64> {
    let [_, second, third] = FIBONACCI_SEEDS;
    successors(Some((second, third)), |&(previous, last)| {
        previous.checked_add(last).map(|next| (last, next))
    })
    .skip(1)
    .map(|(_, last)| last)
}

/// Full Fibonacci-like sequence, seeds first: 0, 1, 2, 3, 5, 8, ...
pub fn fibonacci_like() -> impl Iterator<Item = i64> {
    FIBONACCI_SEEDS.into_iter().chain(fibonacci_like_sums())
}

/// Partial sums of 1, 2, 3, ...: 0, 1, 3, 6, 10, ...
pub fn triangular() -> impl Iterator<Item = i64> {
    successors(Some((0_i64, 1_i64)), |&(sum, step)| {
        sum.checked_add(step).map(|next| (next, step + 1))
    })
    .map(|(sum, _)| sum)
}

/// Powers of `base` starting at `base^0`: 1, base, base^2, ...
///
/// Only strictly increasing powers are produced, so bases below 2 yield
/// just `1`.
pub fn powers_of(base: i64) -> impl Iterator<Item = i64> {
    successors(Some(1_i64), move |&power| {
        power.checked_mul(base).filter(|&next| next > power)
    })
}

/// Fibonacci-like membership.
///
/// Seeds always match. Each derived term is compared with `n` and
/// generation halts after a term reaches either `n` or `bound`, so the
/// term that crosses the bound is still compared.
pub fn is_fibonacci_like(n: i64, bound: i64) -> bool {
    if FIBONACCI_SEEDS.contains(&n) {
        return true;
    }

    for term in fibonacci_like_sums() {
        if term == n {
            return true;
        }
        if term >= n || term >= bound {
            break;
        }
    }
    false
}

/// Triangular membership: sums are compared while `sum <= n` and `sum <= bound`.
pub fn is_triangular(n: i64, bound: i64) -> bool {
    within(triangular(), n, bound)
}

/// Power membership: powers are compared while `power <= n` and `power <= bound`.
pub fn is_power_of(base: i64, n: i64, bound: i64) -> bool {
    within(powers_of(base), n, bound)
}

fn within(terms: impl Iterator<Item = i64>, n: i64, bound: i64) -> bool {
    terms
        .take_while(|&term| term <= n && term <= bound)
        .any(|term| term == n)
}
