//! Client for the validation registry.

use ghostspeak_codec::instructions::validation as payload;
use ghostspeak_codec::{AccountMeta, Instruction};
use ghostspeak_crypto::{pda, sha256};
use ghostspeak_scoring::{consensus_score, meets_stamp_requirement};
use ghostspeak_types::config::SYSTEM_PROGRAM;
use ghostspeak_types::error::{ClientError, RpcError};
use ghostspeak_types::records::{EndpointValidation, TestResult, ValidationAuthority};
use ghostspeak_types::{Address, ProgramRegistry};

use crate::fetch::{collapse, fetch_record, scan_records};
use crate::rpc::LedgerReader;

const COMPONENT: &str = "ValidationRegistry";

/// Builds validation-registry instructions and reads endpoint validations.
pub struct ValidationClient<R> {
    programs: ProgramRegistry,
    reader: R,
}

impl<R: LedgerReader> ValidationClient<R> {
    /// Creates a client over a program registry and a ledger reader.
    pub fn new(programs: ProgramRegistry, reader: R) -> Self {
        Self { programs, reader }
    }

    /// The derived validation address for an endpoint URL.
    pub fn validation_address(&self, endpoint_url: &str) -> Result<Address, ClientError> {
        Ok(pda::validation_address(&self.programs, endpoint_url)?.0)
    }

    /// Builds the one-time `initialize_authority`.
    pub fn build_initialize_authority(
        &self,
        authority: &Address,
        initializer: &Address,
    ) -> Result<Instruction, ClientError> {
        let (authority_account, _) = pda::validation_authority_address(&self.programs)?;
        Ok(Instruction {
            program_id: self.programs.validation,
            accounts: vec![
                AccountMeta::writable(authority_account),
                AccountMeta::readonly(*authority),
                AccountMeta::writable_signer(*initializer),
                AccountMeta::readonly(SYSTEM_PROGRAM),
            ],
            data: payload::initialize_authority(),
        })
    }

    /// Builds `submit_validation`. The endpoint hash seed is computed here,
    /// so callers pass the URL once.
    pub fn build_submit_validation(
        &self,
        endpoint_url: &str,
        provider_agent: &Address,
        payer: &Address,
        test_results: &[TestResult],
    ) -> Result<Instruction, ClientError> {
        let endpoint_hash = sha256(endpoint_url.as_bytes());
        let validation = self.validation_address(endpoint_url)?;
        Ok(Instruction {
            program_id: self.programs.validation,
            accounts: vec![
                AccountMeta::writable(validation),
                AccountMeta::readonly(*provider_agent),
                AccountMeta::writable_signer(*payer),
                AccountMeta::readonly(SYSTEM_PROGRAM),
            ],
            data: payload::submit_validation(endpoint_url, &endpoint_hash, test_results)?,
        })
    }

    /// Builds the log-only `query_validations` view instruction.
    pub fn build_query_validations(&self, endpoint_url: &str) -> Result<Instruction, ClientError> {
        let validation = self.validation_address(endpoint_url)?;
        Ok(Instruction {
            program_id: self.programs.validation,
            accounts: vec![AccountMeta::readonly(validation)],
            data: payload::query_validations(),
        })
    }

    /// Builds `calculate_consensus`, signed by the registry authority.
    pub fn build_calculate_consensus(
        &self,
        endpoint_url: &str,
        authority: &Address,
    ) -> Result<Instruction, ClientError> {
        let validation = self.validation_address(endpoint_url)?;
        let (authority_account, _) = pda::validation_authority_address(&self.programs)?;
        Ok(Instruction {
            program_id: self.programs.validation,
            accounts: vec![
                AccountMeta::writable(validation),
                AccountMeta::readonly(authority_account),
                AccountMeta::signer(*authority),
            ],
            data: payload::calculate_consensus(),
        })
    }

    /// Builds `issue_validation_stamp`, signed by the registry authority.
    pub fn build_issue_validation_stamp(
        &self,
        endpoint_url: &str,
        authority: &Address,
    ) -> Result<Instruction, ClientError> {
        let validation = self.validation_address(endpoint_url)?;
        let (authority_account, _) = pda::validation_authority_address(&self.programs)?;
        Ok(Instruction {
            program_id: self.programs.validation,
            accounts: vec![
                AccountMeta::writable(validation),
                AccountMeta::readonly(authority_account),
                AccountMeta::signer(*authority),
            ],
            data: payload::issue_validation_stamp(),
        })
    }

    /// Fetches an endpoint's validation record by URL.
    pub async fn validation(
        &self,
        endpoint_url: &str,
    ) -> Result<Option<EndpointValidation>, RpcError> {
        let Ok((address, _)) = pda::validation_address(&self.programs, endpoint_url) else {
            return Ok(None);
        };
        let fetched = fetch_record(&self.reader, &address).await?;
        Ok(collapse(COMPONENT, &address, fetched))
    }

    /// Fetches the registry authority singleton.
    pub async fn authority(&self) -> Result<Option<ValidationAuthority>, RpcError> {
        let Ok((address, _)) = pda::validation_authority_address(&self.programs) else {
            return Ok(None);
        };
        let fetched = fetch_record(&self.reader, &address).await?;
        Ok(collapse(COMPONENT, &address, fetched))
    }

    /// Scans every validation record under the program.
    pub async fn all_validations(
        &self,
    ) -> Result<Vec<(Address, EndpointValidation)>, RpcError> {
        scan_records(COMPONENT, &self.reader, &self.programs.validation, &[]).await
    }

    /// The consensus score this client would expect `calculate_consensus`
    /// to produce for a validation's current results.
    pub fn expected_consensus(validation: &EndpointValidation) -> u16 {
        consensus_score(&validation.test_results)
    }

    /// Whether a validation currently qualifies for a stamp.
    pub fn stamp_eligible(validation: &EndpointValidation) -> bool {
        meets_stamp_requirement(&validation.test_results)
    }
}
