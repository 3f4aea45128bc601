//! Validation registry account layouts.

use ghostspeak_types::error::CodecError;
use ghostspeak_types::records::{EndpointValidation, TestResult, ValidationAuthority};

use crate::discriminator::account;
use crate::wire::{WireReader, WireWriter};

use super::AccountRecord;

// Smallest possible TestResult on the wire: empty model name.
const TEST_RESULT_MIN_WIRE: usize = 4 + 1 + 8 + 1;

fn decode_test_result(reader: &mut WireReader<'_>) -> Result<TestResult, CodecError> {
    Ok(TestResult {
        llm_model: reader.read_string()?,
        success: reader.read_bool()?,
        response_time: reader.read_u64()?,
        score: reader.read_u8()?,
    })
}

fn encode_test_result(result: &TestResult, writer: &mut WireWriter) {
    writer.write_string(&result.llm_model);
    writer.write_bool(result.success);
    writer.write_u64(result.response_time);
    writer.write_u8(result.score);
}

impl AccountRecord for EndpointValidation {
    const DISCRIMINATOR: [u8; 8] = account::ENDPOINT_VALIDATION;

    // 8 + 32 + (4 + 200) + 32 + (4 + 10 * (4 + 50 + 1 + 8 + 1)) + 2 + 1 + 8 + 1
    const SPACE: usize = 932;

    fn decode_fields(reader: &mut WireReader<'_>) -> Result<Self, CodecError> {
        let endpoint_hash = reader.read_bytes32()?;
        let endpoint_url = reader.read_string()?;
        let provider_agent = reader.read_address()?;
        let count = reader.read_vec_len(TEST_RESULT_MIN_WIRE)?;
        let mut test_results = Vec::with_capacity(count);
        for _ in 0..count {
            test_results.push(decode_test_result(reader)?);
        }
        Ok(Self {
            endpoint_hash,
            endpoint_url,
            provider_agent,
            test_results,
            consensus_score: reader.read_u16()?,
            stamp_issued: reader.read_bool()?,
            timestamp: reader.read_i64()?,
            bump: reader.read_u8()?,
        })
    }

    fn encode_fields(&self, writer: &mut WireWriter) {
        writer.write_bytes(&self.endpoint_hash);
        writer.write_string(&self.endpoint_url);
        writer.write_address(&self.provider_agent);
        writer.write_u32(self.test_results.len() as u32);
        for result in &self.test_results {
            encode_test_result(result, writer);
        }
        writer.write_u16(self.consensus_score);
        writer.write_bool(self.stamp_issued);
        writer.write_i64(self.timestamp);
        writer.write_u8(self.bump);
    }
}

impl AccountRecord for ValidationAuthority {
    const DISCRIMINATOR: [u8; 8] = account::VALIDATION_AUTHORITY;

    // 8 + 32 + 1
    const SPACE: usize = 41;

    fn decode_fields(reader: &mut WireReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            authority: reader.read_address()?,
            bump: reader.read_u8()?,
        })
    }

    fn encode_fields(&self, writer: &mut WireWriter) {
        writer.write_address(&self.authority);
        writer.write_u8(self.bump);
    }
}
