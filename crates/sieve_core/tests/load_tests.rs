//! Full-size run at the default limit.

use sieve_core::test_helpers::is_prime_by_trial_division;
use sieve_core::{run_sieve, SieveConfig};

#[test]
#[ignore] // Only run explicitly: cargo test --package sieve_core --test load_tests -- --ignored
fn default_limit_matches_known_totals() {
    let report = run_sieve(SieveConfig::default()).expect("sieve should run");

    println!("{}", report.render_text().trim_end());
    assert_eq!(report.summary.count, 5_761_455);
    assert_eq!(report.summary.sum, 279_209_790_387_276);

    let largest = &report.summary.largest;
    assert_eq!(largest.len(), 10);
    assert_eq!(largest.last(), Some(&99_999_989));
    assert!(largest.iter().all(|&p| is_prime_by_trial_division(p)));
}
