//! Consensus scoring over independent endpoint test results.

use ghostspeak_types::records::TestResult;

/// A stamp requires at least this many test results.
pub const MIN_TESTS_FOR_STAMP: usize = 3;
/// A stamp requires at least this consensus score.
pub const STAMP_CONSENSUS_THRESHOLD: u16 = 600;

/// Computes the 0-1000 consensus score for a set of test results.
///
/// Zero successful tests score zero. Otherwise the score is the sum of
/// three contributions, capped at 1000:
///
/// - `floor(mean(successful scores) * 7)`, up to 700 from quality,
/// - `floor(success_rate * 200)`, up to 200 from reliability,
/// - `min(100, n * 20)`, up to 100 from test-count confidence.
pub fn consensus_score(results: &[TestResult]) -> u16 {
    let successes = results.iter().filter(|r| r.success).count();
    if successes == 0 {
        return 0;
    }

    let success_score_total: u64 = results
        .iter()
        .filter(|r| r.success)
        .map(|r| u64::from(r.score))
        .sum();
    let avg_success_score = success_score_total as f64 / successes as f64;
    let success_rate = successes as f64 / results.len() as f64;

    let quality = (avg_success_score * 7.0).floor();
    let success_bonus = (success_rate * 200.0).floor();
    let count_bonus = (results.len() * 20).min(100) as f64;

    (quality + success_bonus + count_bonus).min(1000.0) as u16
}

/// Whether a result set qualifies for a validation stamp: at least
/// [`MIN_TESTS_FOR_STAMP`] results and a consensus of at least
/// [`STAMP_CONSENSUS_THRESHOLD`].
pub fn meets_stamp_requirement(results: &[TestResult]) -> bool {
    results.len() >= MIN_TESTS_FOR_STAMP
        && consensus_score(results) >= STAMP_CONSENSUS_THRESHOLD
}
