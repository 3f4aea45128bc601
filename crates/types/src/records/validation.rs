//! The validation registry's account records.

use crate::address::Address;
use serde::{Deserialize, Serialize};

/// Maximum endpoint URL length in bytes.
pub const MAX_ENDPOINT_URL_LEN: usize = 200;
/// Maximum number of test results per validation record.
pub const MAX_TEST_RESULTS: usize = 10;
/// Maximum model-name length in bytes.
pub const MAX_LLM_MODEL_LEN: usize = 50;

/// One LLM test run against a pay-per-call endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    /// Which model ran the test (e.g. "gpt-4", "claude-3"). At most 50 bytes.
    pub llm_model: String,
    /// Whether the test passed.
    pub success: bool,
    /// Response time in milliseconds.
    pub response_time: u64,
    /// Quality score 0-100.
    pub score: u8,
}

/// An endpoint's validation record, derived at
/// `["validation", sha256(endpoint_url)]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointValidation {
    /// SHA-256 of the endpoint URL (the derivation seed).
    pub endpoint_hash: [u8; 32],
    /// The endpoint URL itself. At most 200 bytes.
    pub endpoint_url: String,
    /// The providing agent's wallet address.
    pub provider_agent: Address,
    /// Up to 10 independent test results.
    pub test_results: Vec<TestResult>,
    /// Consensus score 0-1000, zero until calculated.
    pub consensus_score: u16,
    /// Whether a validation stamp has been issued.
    pub stamp_issued: bool,
    /// Submission timestamp.
    pub timestamp: i64,
    /// Derivation bump.
    pub bump: u8,
}

/// The validation registry's authority singleton, derived at `["authority"]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationAuthority {
    /// The wallet allowed to calculate consensus and issue stamps.
    pub authority: Address,
    /// Derivation bump.
    pub bump: u8,
}
