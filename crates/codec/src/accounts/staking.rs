//! Token staking account layouts.

use ghostspeak_types::error::CodecError;
use ghostspeak_types::records::{StakeCategory, StakePosition, StakingVault};

use crate::discriminator::account;
use crate::wire::{WireReader, WireWriter};

use super::AccountRecord;

impl AccountRecord for StakingVault {
    const DISCRIMINATOR: [u8; 8] = account::STAKING_VAULT;

    // 8 + 32 + 32 + 32 + 8 + 8 + 2 + 8 + 4 + 32 + 1 + 1 + 8 + 8 + 1 + 1
    const SPACE: usize = 186;

    fn decode_fields(reader: &mut WireReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            target_agent: reader.read_address()?,
            token_mint: reader.read_address()?,
            vault_token_account: reader.read_address()?,
            min_stake_amount: reader.read_u64()?,
            lock_period_seconds: reader.read_i64()?,
            weight_multiplier: reader.read_u16()?,
            total_staked: reader.read_u64()?,
            total_stakers: reader.read_u32()?,
            authority: reader.read_address()?,
            is_active: reader.read_bool()?,
            is_verified: reader.read_bool()?,
            created_at: reader.read_i64()?,
            updated_at: reader.read_i64()?,
            bump: reader.read_u8()?,
            vault_bump: reader.read_u8()?,
        })
    }

    fn encode_fields(&self, writer: &mut WireWriter) {
        writer.write_address(&self.target_agent);
        writer.write_address(&self.token_mint);
        writer.write_address(&self.vault_token_account);
        writer.write_u64(self.min_stake_amount);
        writer.write_i64(self.lock_period_seconds);
        writer.write_u16(self.weight_multiplier);
        writer.write_u64(self.total_staked);
        writer.write_u32(self.total_stakers);
        writer.write_address(&self.authority);
        writer.write_bool(self.is_active);
        writer.write_bool(self.is_verified);
        writer.write_i64(self.created_at);
        writer.write_i64(self.updated_at);
        writer.write_u8(self.bump);
        writer.write_u8(self.vault_bump);
    }
}

impl AccountRecord for StakePosition {
    const DISCRIMINATOR: [u8; 8] = account::STAKE_POSITION;

    // 8 + 32 + 32 + 32 + 32 + 8 + 1 + 8 + 8 + 8 + 8 + 1 + 1 + 1
    const SPACE: usize = 180;

    fn decode_fields(reader: &mut WireReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            vault: reader.read_address()?,
            staker: reader.read_address()?,
            target_agent: reader.read_address()?,
            token_mint: reader.read_address()?,
            amount: reader.read_u64()?,
            category: StakeCategory::from_wire(reader.read_u8()?),
            trust_weight: reader.read_u64()?,
            staked_at: reader.read_i64()?,
            locked_until: reader.read_i64()?,
            unstaked_at: reader.read_i64()?,
            is_active: reader.read_bool()?,
            is_slashed: reader.read_bool()?,
            bump: reader.read_u8()?,
        })
    }

    fn encode_fields(&self, writer: &mut WireWriter) {
        writer.write_address(&self.vault);
        writer.write_address(&self.staker);
        writer.write_address(&self.target_agent);
        writer.write_address(&self.token_mint);
        writer.write_u64(self.amount);
        writer.write_u8(self.category.to_wire());
        writer.write_u64(self.trust_weight);
        writer.write_i64(self.staked_at);
        writer.write_i64(self.locked_until);
        writer.write_i64(self.unstaked_at);
        writer.write_bool(self.is_active);
        writer.write_bool(self.is_slashed);
        writer.write_u8(self.bump);
    }
}
