//! CPU benchmark behind `/benchmark`
//!
//! Counts primes below one million with plain trial division. The loop is
//! intentionally naive (no sieve, no caching) so that every call burns the
//! same amount of CPU.

use std::time::Instant;

use sysinfo::{Pid, System};

use crate::models::BenchmarkResult;

/// Upper bound (exclusive) of the prime search
pub const PRIME_LIMIT: u64 = 1_000_000;

/// Number of primes below [`PRIME_LIMIT`]
pub const EXPECTED_PRIMES: i32 = 78_498;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Trial division, stopping at the first divisor with `j * j <= n`
#[inline]
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut j = 2;
    while j * j <= n {
        if n % j == 0 {
            return false;
        }
        j += 1;
    }
    true
}

/// Count primes in `2..limit`
pub fn count_primes_below(limit: u64) -> u64 {
    (2..limit).filter(|&n| is_prime(n)).count() as u64
}

/// Resident memory of process `pid` in MiB, `None` if the OS does not report it
pub fn resident_memory_mb(pid: u32) -> Option<f64> {
    let pid = Pid::from_u32(pid);
    let mut sys = System::new();
    if !sys.refresh_process(pid) {
        return None;
    }
    sys.process(pid)
        .map(|process| process.memory() as f64 / BYTES_PER_MB)
}

/// Run the full benchmark and collect process statistics.
pub fn run() -> BenchmarkResult {
    let start = Instant::now();
    let primes_found = count_primes_below(PRIME_LIMIT);
    let elapsed = start.elapsed();

    let process_id = std::process::id();
    let working_set_mb = resident_memory_mb(process_id).unwrap_or_else(|| {
        tracing::warn!("[BENCH] resident memory unavailable for pid {}", process_id);
        0.0
    });

    let result = BenchmarkResult {
        execution_time_ms: elapsed.as_millis() as i64,
        primes_found: primes_found as i32,
        process_id,
        working_set_mb,
    };

    tracing::info!(
        elapsed_ms = result.execution_time_ms,
        primes = result.primes_found,
        rss_mb = result.working_set_mb,
        "[BENCH] trial division finished"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime_small_values() {
        let primes: Vec<u64> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, [2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_is_prime_squares_are_composite() {
        for p in [2u64, 3, 7, 31, 997] {
            assert!(!is_prime(p * p), "{} squared", p);
        }
        assert!(is_prime(999_983));
    }

    #[test]
    fn test_count_known_bounds() {
        assert_eq!(count_primes_below(0), 0);
        assert_eq!(count_primes_below(2), 0);
        assert_eq!(count_primes_below(3), 1);
        assert_eq!(count_primes_below(100), 25);
        assert_eq!(count_primes_below(10_000), 1229);
    }

    #[test]
    fn test_run_finds_expected_primes() {
        let result = run();
        assert_eq!(result.primes_found, EXPECTED_PRIMES);
        assert!(result.execution_time_ms >= 0);
        assert_eq!(result.process_id, std::process::id());
        assert!(result.working_set_mb >= 0.0);
    }

    #[test]
    fn test_resident_memory_for_self() {
        if let Some(mb) = resident_memory_mb(std::process::id()) {
            assert!(mb > 0.0);
        }
    }
}
