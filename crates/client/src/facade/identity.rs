//! Client for the identity registry.

use ghostspeak_codec::instructions::identity as payload;
use ghostspeak_codec::{AccountMeta, Instruction};
use ghostspeak_crypto::pda;
use ghostspeak_types::config::SYSTEM_PROGRAM;
use ghostspeak_types::error::{ClientError, RpcError};
use ghostspeak_types::records::AgentIdentity;
use ghostspeak_types::{Address, ProgramRegistry};

use crate::fetch::{collapse, fetch_record, scan_records};
use crate::rpc::LedgerReader;

const COMPONENT: &str = "IdentityRegistry";

/// Builds identity-registry instructions and reads agent identities.
pub struct IdentityClient<R> {
    programs: ProgramRegistry,
    reader: R,
}

impl<R: LedgerReader> IdentityClient<R> {
    /// Creates a client over a program registry and a ledger reader.
    pub fn new(programs: ProgramRegistry, reader: R) -> Self {
        Self { programs, reader }
    }

    /// The derived identity address for an agent wallet.
    pub fn identity_address(&self, agent: &Address) -> Result<Address, ClientError> {
        Ok(pda::agent_identity_address(&self.programs, agent)?.0)
    }

    /// Builds `register_agent`. The agent wallet signs and pays.
    pub fn build_register_agent(
        &self,
        agent: &Address,
        asset_address: &Address,
        metadata_uri: &str,
    ) -> Result<Instruction, ClientError> {
        let identity = self.identity_address(agent)?;
        Ok(Instruction {
            program_id: self.programs.identity,
            accounts: vec![
                AccountMeta::writable(identity),
                AccountMeta::writable_signer(*agent),
                AccountMeta::readonly(SYSTEM_PROGRAM),
            ],
            data: payload::register_agent(asset_address, metadata_uri)?,
        })
    }

    /// Builds `update_identity`. Only the owning wallet may update.
    pub fn build_update_identity(
        &self,
        agent: &Address,
        metadata_uri: &str,
    ) -> Result<Instruction, ClientError> {
        let identity = self.identity_address(agent)?;
        Ok(Instruction {
            program_id: self.programs.identity,
            accounts: vec![
                AccountMeta::writable(identity),
                AccountMeta::writable_signer(*agent),
                AccountMeta::readonly(*agent),
            ],
            data: payload::update_identity(metadata_uri)?,
        })
    }

    /// Builds `verify_identity` for an agent.
    pub fn build_verify_identity(&self, agent: &Address) -> Result<Instruction, ClientError> {
        let identity = self.identity_address(agent)?;
        Ok(Instruction {
            program_id: self.programs.identity,
            accounts: vec![AccountMeta::readonly(identity), AccountMeta::readonly(*agent)],
            data: payload::verify_identity(),
        })
    }

    /// Builds `deactivate_agent`. Only the owning wallet may deactivate.
    pub fn build_deactivate_agent(&self, agent: &Address) -> Result<Instruction, ClientError> {
        let identity = self.identity_address(agent)?;
        Ok(Instruction {
            program_id: self.programs.identity,
            accounts: vec![
                AccountMeta::writable(identity),
                AccountMeta::writable_signer(*agent),
                AccountMeta::readonly(*agent),
            ],
            data: payload::deactivate_agent(),
        })
    }

    /// Fetches an agent's identity by wallet. `Ok(None)` covers both a
    /// never-registered agent and an undecodable account.
    pub async fn agent_identity(
        &self,
        agent: &Address,
    ) -> Result<Option<AgentIdentity>, RpcError> {
        let Ok((address, _)) = pda::agent_identity_address(&self.programs, agent) else {
            return Ok(None);
        };
        let fetched = fetch_record(&self.reader, &address).await?;
        Ok(collapse(COMPONENT, &address, fetched))
    }

    /// Scans every registered identity under the program.
    pub async fn all_agent_identities(
        &self,
    ) -> Result<Vec<(Address, AgentIdentity)>, RpcError> {
        scan_records(COMPONENT, &self.reader, &self.programs.identity, &[]).await
    }
}
