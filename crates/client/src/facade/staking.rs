//! Client for the token staking program.

use ghostspeak_codec::instructions::staking as payload;
use ghostspeak_codec::AccountRecord;
use ghostspeak_codec::{AccountMeta, Instruction};
use ghostspeak_crypto::pda;
use ghostspeak_scoring::trust_weight;
use ghostspeak_types::config::{RENT_SYSVAR, SYSTEM_PROGRAM, TOKEN_PROGRAM};
use ghostspeak_types::error::{ClientError, RpcError};
use ghostspeak_types::records::{StakeCategory, StakePosition, StakingVault};
use ghostspeak_types::{Address, ProgramRegistry};

use crate::fetch::{collapse, fetch_record, scan_records};
use crate::rpc::{AccountFilter, LedgerReader};

const COMPONENT: &str = "TokenStaking";

/// Builds staking instructions and reads vaults and stake positions.
pub struct StakingClient<R> {
    programs: ProgramRegistry,
    reader: R,
}

impl<R: LedgerReader> StakingClient<R> {
    /// Creates a client over a program registry and a ledger reader.
    pub fn new(programs: ProgramRegistry, reader: R) -> Self {
        Self { programs, reader }
    }

    /// The derived vault address for a (target agent, mint) pair.
    pub fn vault_address(
        &self,
        target_agent: &Address,
        token_mint: &Address,
    ) -> Result<Address, ClientError> {
        Ok(pda::staking_vault_address(&self.programs, target_agent, token_mint)?.0)
    }

    /// Builds `initialize_vault` for an agent's token.
    pub fn build_initialize_vault(
        &self,
        target_agent: &Address,
        token_mint: &Address,
        authority: &Address,
        min_stake_amount: u64,
        lock_period_seconds: i64,
        weight_multiplier: u16,
    ) -> Result<Instruction, ClientError> {
        let vault = self.vault_address(target_agent, token_mint)?;
        let (vault_token, _) = pda::vault_token_address(&self.programs, &vault)?;
        Ok(Instruction {
            program_id: self.programs.staking,
            accounts: vec![
                AccountMeta::writable(vault),
                AccountMeta::writable(vault_token),
                AccountMeta::readonly(*token_mint),
                AccountMeta::readonly(*target_agent),
                AccountMeta::writable_signer(*authority),
                AccountMeta::readonly(SYSTEM_PROGRAM),
                AccountMeta::readonly(TOKEN_PROGRAM),
                AccountMeta::readonly(RENT_SYSVAR),
            ],
            data: payload::initialize_vault(
                min_stake_amount,
                lock_period_seconds,
                weight_multiplier,
            ),
        })
    }

    /// Builds `stake_tokens` into an agent's vault.
    pub fn build_stake_tokens(
        &self,
        target_agent: &Address,
        token_mint: &Address,
        staker: &Address,
        staker_token_account: &Address,
        amount: u64,
        category: StakeCategory,
    ) -> Result<Instruction, ClientError> {
        let vault = self.vault_address(target_agent, token_mint)?;
        let (vault_token, _) = pda::vault_token_address(&self.programs, &vault)?;
        let (position, _) = pda::stake_position_address(&self.programs, &vault, staker)?;
        Ok(Instruction {
            program_id: self.programs.staking,
            accounts: vec![
                AccountMeta::writable(vault),
                AccountMeta::writable(vault_token),
                AccountMeta::writable(position),
                AccountMeta::writable(*staker_token_account),
                AccountMeta::writable_signer(*staker),
                AccountMeta::readonly(SYSTEM_PROGRAM),
                AccountMeta::readonly(TOKEN_PROGRAM),
            ],
            data: payload::stake_tokens(amount, category),
        })
    }

    /// Builds `unstake_tokens` after the lock period.
    pub fn build_unstake_tokens(
        &self,
        target_agent: &Address,
        token_mint: &Address,
        staker: &Address,
        staker_token_account: &Address,
        amount: u64,
    ) -> Result<Instruction, ClientError> {
        let vault = self.vault_address(target_agent, token_mint)?;
        let (vault_token, _) = pda::vault_token_address(&self.programs, &vault)?;
        let (position, _) = pda::stake_position_address(&self.programs, &vault, staker)?;
        Ok(Instruction {
            program_id: self.programs.staking,
            accounts: vec![
                AccountMeta::writable(vault),
                AccountMeta::writable(vault_token),
                AccountMeta::writable(position),
                AccountMeta::writable(*staker_token_account),
                AccountMeta::writable_signer(*staker),
                AccountMeta::readonly(TOKEN_PROGRAM),
            ],
            data: payload::unstake_tokens(amount),
        })
    }

    /// Builds `update_vault_config`, signed by the vault authority.
    pub fn build_update_vault_config(
        &self,
        target_agent: &Address,
        token_mint: &Address,
        authority: &Address,
        min_stake_amount: Option<u64>,
        lock_period_seconds: Option<i64>,
        weight_multiplier: Option<u16>,
    ) -> Result<Instruction, ClientError> {
        let vault = self.vault_address(target_agent, token_mint)?;
        Ok(Instruction {
            program_id: self.programs.staking,
            accounts: vec![AccountMeta::writable(vault), AccountMeta::signer(*authority)],
            data: payload::update_vault_config(
                min_stake_amount,
                lock_period_seconds,
                weight_multiplier,
            ),
        })
    }

    /// Fetches a vault by its (target agent, mint) pair.
    pub async fn staking_vault(
        &self,
        target_agent: &Address,
        token_mint: &Address,
    ) -> Result<Option<StakingVault>, RpcError> {
        let Ok((address, _)) =
            pda::staking_vault_address(&self.programs, target_agent, token_mint)
        else {
            return Ok(None);
        };
        let fetched = fetch_record(&self.reader, &address).await?;
        Ok(collapse(COMPONENT, &address, fetched))
    }

    /// Fetches one staker's position in a vault.
    pub async fn stake_position(
        &self,
        vault: &Address,
        staker: &Address,
    ) -> Result<Option<StakePosition>, RpcError> {
        let Ok((address, _)) = pda::stake_position_address(&self.programs, vault, staker) else {
            return Ok(None);
        };
        let fetched = fetch_record(&self.reader, &address).await?;
        Ok(collapse(COMPONENT, &address, fetched))
    }

    /// Scans every vault under the program.
    pub async fn all_vaults(&self) -> Result<Vec<(Address, StakingVault)>, RpcError> {
        scan_records(COMPONENT, &self.reader, &self.programs.staking, &[]).await
    }

    /// Scans the stake positions belonging to one vault. The vault address
    /// sits directly after the discriminator, so a byte-range filter narrows
    /// the scan server-side.
    pub async fn positions_for_vault(
        &self,
        vault: &Address,
    ) -> Result<Vec<(Address, StakePosition)>, RpcError> {
        let filter = AccountFilter::MemCmp {
            offset: 8,
            bytes: vault.as_ref().to_vec(),
        };
        scan_records(COMPONENT, &self.reader, &self.programs.staking, &[filter]).await
    }

    /// The trust weight a stake of `amount` would earn in this vault.
    pub fn expected_trust_weight(vault: &StakingVault, amount: u64) -> u64 {
        trust_weight(amount, vault.weight_multiplier)
    }

    /// Aggregate staking inputs for an agent's Ghost Score: total trust
    /// weight and the number of distinct active stakers across one vault's
    /// positions.
    pub fn vault_stake_totals(positions: &[(Address, StakePosition)]) -> (u64, u32) {
        let mut total_weight = 0u64;
        let mut stakers = 0u32;
        for (_, position) in positions {
            if position.is_active && !position.is_slashed {
                total_weight = total_weight.saturating_add(position.trust_weight);
                stakers = stakers.saturating_add(1);
            }
        }
        (total_weight, stakers)
    }
}

// StakePosition and StakingVault share a program; the size filter in
// scan_records is what separates the two record kinds.
const _: () = assert!(StakePosition::SPACE != StakingVault::SPACE);
