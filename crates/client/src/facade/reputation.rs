//! Client for the reputation registry, including the multisig records it
//! hosts.

use ghostspeak_codec::instructions::reputation as payload;
use ghostspeak_codec::{AccountMeta, Instruction};
use ghostspeak_crypto::pda;
use ghostspeak_types::config::SYSTEM_PROGRAM;
use ghostspeak_types::error::{ClientError, RpcError};
use ghostspeak_types::records::{
    AgentReputation, ComponentScores, MultisigConfig, MultisigProposal, ReputationAuthority,
    ReputationStats,
};
use ghostspeak_types::{Address, ProgramRegistry};

use crate::fetch::{collapse, fetch_record, scan_records};
use crate::rpc::{LedgerReader, SimulationOutcome};

const COMPONENT: &str = "ReputationRegistry";

/// Builds reputation-registry instructions and reads reputation state.
pub struct ReputationClient<R> {
    programs: ProgramRegistry,
    reader: R,
}

impl<R: LedgerReader> ReputationClient<R> {
    /// Creates a client over a program registry and a ledger reader.
    pub fn new(programs: ProgramRegistry, reader: R) -> Self {
        Self { programs, reader }
    }

    /// The derived reputation address for an agent wallet.
    pub fn reputation_address(&self, agent: &Address) -> Result<Address, ClientError> {
        Ok(pda::reputation_address(&self.programs, agent)?.0)
    }

    /// Builds the one-time `initialize_authority`.
    pub fn build_initialize_authority(
        &self,
        authority: &Address,
        initializer: &Address,
    ) -> Result<Instruction, ClientError> {
        let (authority_account, _) = pda::reputation_authority_address(&self.programs)?;
        Ok(Instruction {
            program_id: self.programs.reputation,
            accounts: vec![
                AccountMeta::writable(authority_account),
                AccountMeta::readonly(*authority),
                AccountMeta::writable_signer(*initializer),
                AccountMeta::readonly(SYSTEM_PROGRAM),
            ],
            data: payload::initialize_authority(),
        })
    }

    /// Builds `initialize_reputation` for an agent.
    pub fn build_initialize_reputation(
        &self,
        agent: &Address,
        payer: &Address,
    ) -> Result<Instruction, ClientError> {
        let reputation = self.reputation_address(agent)?;
        Ok(Instruction {
            program_id: self.programs.reputation,
            accounts: vec![
                AccountMeta::writable(reputation),
                AccountMeta::readonly(*agent),
                AccountMeta::writable_signer(*payer),
                AccountMeta::readonly(SYSTEM_PROGRAM),
            ],
            data: payload::initialize_reputation(),
        })
    }

    /// Builds `update_reputation`, signed by the registry authority.
    pub fn build_update_reputation(
        &self,
        agent: &Address,
        authority: &Address,
        overall_score: u16,
        component_scores: &ComponentScores,
        stats: &ReputationStats,
        payment_proofs_merkle_root: &[u8; 32],
    ) -> Result<Instruction, ClientError> {
        let reputation = self.reputation_address(agent)?;
        let (authority_account, _) = pda::reputation_authority_address(&self.programs)?;
        Ok(Instruction {
            program_id: self.programs.reputation,
            accounts: vec![
                AccountMeta::writable(reputation),
                AccountMeta::readonly(authority_account),
                AccountMeta::readonly(*agent),
                AccountMeta::signer(*authority),
            ],
            data: payload::update_reputation(
                overall_score,
                component_scores,
                stats,
                payment_proofs_merkle_root,
            )?,
        })
    }

    /// Builds `record_payment_proof`, signed by the registry authority.
    pub fn build_record_payment_proof(
        &self,
        agent: &Address,
        authority: &Address,
        payment_signature: &str,
    ) -> Result<Instruction, ClientError> {
        let reputation = self.reputation_address(agent)?;
        Ok(Instruction {
            program_id: self.programs.reputation,
            accounts: vec![
                AccountMeta::writable(reputation),
                AccountMeta::readonly(*agent),
                AccountMeta::signer(*authority),
            ],
            data: payload::record_payment_proof(payment_signature)?,
        })
    }

    /// Builds the log-only `get_reputation` view instruction.
    pub fn build_get_reputation(&self, agent: &Address) -> Result<Instruction, ClientError> {
        let reputation = self.reputation_address(agent)?;
        Ok(Instruction {
            program_id: self.programs.reputation,
            accounts: vec![AccountMeta::readonly(reputation), AccountMeta::readonly(*agent)],
            data: payload::get_reputation(),
        })
    }

    /// Runs `get_reputation` through simulation, returning the program logs
    /// without submitting anything.
    pub async fn probe_reputation(
        &self,
        agent: &Address,
    ) -> Result<SimulationOutcome, RpcError> {
        let instruction = match self.build_get_reputation(agent) {
            Ok(instruction) => instruction,
            Err(error) => {
                return Err(RpcError::InvalidResponse(format!(
                    "could not build probe instruction: {error}"
                )))
            }
        };
        self.reader.simulate(&[instruction]).await
    }

    /// Fetches an agent's reputation record by wallet.
    pub async fn reputation(
        &self,
        agent: &Address,
    ) -> Result<Option<AgentReputation>, RpcError> {
        let Ok((address, _)) = pda::reputation_address(&self.programs, agent) else {
            return Ok(None);
        };
        let fetched = fetch_record(&self.reader, &address).await?;
        Ok(collapse(COMPONENT, &address, fetched))
    }

    /// Fetches the registry authority singleton.
    pub async fn authority(&self) -> Result<Option<ReputationAuthority>, RpcError> {
        let Ok((address, _)) = pda::reputation_authority_address(&self.programs) else {
            return Ok(None);
        };
        let fetched = fetch_record(&self.reader, &address).await?;
        Ok(collapse(COMPONENT, &address, fetched))
    }

    /// Fetches the multisig configuration singleton.
    pub async fn multisig_config(&self) -> Result<Option<MultisigConfig>, RpcError> {
        let Ok((address, _)) = pda::multisig_authority_address(&self.programs) else {
            return Ok(None);
        };
        let fetched = fetch_record(&self.reader, &address).await?;
        Ok(collapse(COMPONENT, &address, fetched))
    }

    /// Fetches a multisig proposal by id.
    pub async fn multisig_proposal(
        &self,
        proposal_id: u64,
    ) -> Result<Option<MultisigProposal>, RpcError> {
        let Ok((address, _)) = pda::multisig_proposal_address(&self.programs, proposal_id) else {
            return Ok(None);
        };
        let fetched = fetch_record(&self.reader, &address).await?;
        Ok(collapse(COMPONENT, &address, fetched))
    }

    /// Scans every reputation record under the program.
    pub async fn all_reputations(&self) -> Result<Vec<(Address, AgentReputation)>, RpcError> {
        scan_records(COMPONENT, &self.reader, &self.programs.reputation, &[]).await
    }
}
