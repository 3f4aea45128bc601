//! Validation registry instruction payloads.

use ghostspeak_types::error::CodecError;
use ghostspeak_types::records::validation::{
    MAX_ENDPOINT_URL_LEN, MAX_LLM_MODEL_LEN, MAX_TEST_RESULTS,
};
use ghostspeak_types::records::TestResult;

use crate::discriminator::validation;
use crate::wire::WireWriter;

/// `initialize_authority()`, which takes no arguments.
pub fn initialize_authority() -> Vec<u8> {
    validation::INITIALIZE_AUTHORITY.to_vec()
}

/// `submit_validation(endpoint_url, endpoint_hash, test_results)`.
pub fn submit_validation(
    endpoint_url: &str,
    endpoint_hash: &[u8; 32],
    test_results: &[TestResult],
) -> Result<Vec<u8>, CodecError> {
    if endpoint_url.len() > MAX_ENDPOINT_URL_LEN {
        return Err(CodecError::FieldOutOfBounds {
            field: "endpoint_url",
            reason: format!("{} bytes exceeds maximum {MAX_ENDPOINT_URL_LEN}", endpoint_url.len()),
        });
    }
    if test_results.len() > MAX_TEST_RESULTS {
        return Err(CodecError::FieldOutOfBounds {
            field: "test_results",
            reason: format!("{} results exceeds maximum {MAX_TEST_RESULTS}", test_results.len()),
        });
    }
    for result in test_results {
        if result.llm_model.len() > MAX_LLM_MODEL_LEN {
            return Err(CodecError::FieldOutOfBounds {
                field: "llm_model",
                reason: format!(
                    "{} bytes exceeds maximum {MAX_LLM_MODEL_LEN}",
                    result.llm_model.len()
                ),
            });
        }
    }

    let mut writer = WireWriter::new();
    writer.write_bytes(&validation::SUBMIT_VALIDATION);
    writer.write_string(endpoint_url);
    writer.write_bytes(endpoint_hash);
    writer.write_u32(test_results.len() as u32);
    for result in test_results {
        writer.write_string(&result.llm_model);
        writer.write_bool(result.success);
        writer.write_u64(result.response_time);
        writer.write_u8(result.score);
    }
    Ok(writer.finish())
}

/// `query_validations()`, the log-only view instruction. No arguments.
pub fn query_validations() -> Vec<u8> {
    validation::QUERY_VALIDATIONS.to_vec()
}

/// `calculate_consensus()`, which takes no arguments.
pub fn calculate_consensus() -> Vec<u8> {
    validation::CALCULATE_CONSENSUS.to_vec()
}

/// `issue_validation_stamp()`, which takes no arguments.
pub fn issue_validation_stamp() -> Vec<u8> {
    validation::ISSUE_VALIDATION_STAMP.to_vec()
}
