//! Ground-truth helpers shared by unit tests, integration tests and benches.

/// Trial-division primality test.
pub fn is_prime_by_trial_division(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut divisor = 5;
    while divisor <= n / divisor {
        if n % divisor == 0 || n % (divisor + 2) == 0 {
            return false;
        }
        divisor += 6;
    }
    true
}

/// Every prime in `[2, limit]`, ascending, by trial division.
pub fn primes_by_trial_division(limit: usize) -> Vec<usize> {
    (2..=limit)
        .filter(|&n| is_prime_by_trial_division(n))
        .collect()
}
