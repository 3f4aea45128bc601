//! Multisig account layouts (stored under the reputation registry).

use ghostspeak_types::error::CodecError;
use ghostspeak_types::records::{MultisigConfig, MultisigProposal, ProposalStatus, ProposalType};

use crate::discriminator::account;
use crate::wire::{WireReader, WireWriter};

use super::reputation::{
    decode_component_scores, decode_reputation_stats, encode_component_scores,
    encode_reputation_stats,
};
use super::AccountRecord;

impl AccountRecord for MultisigConfig {
    const DISCRIMINATOR: [u8; 8] = account::MULTISIG_AUTHORITY;

    // 8 + (4 + 32 * 7) + 1 + 8 + 32 + 1 + 8 + 1
    const SPACE: usize = 287;

    fn decode_fields(reader: &mut WireReader<'_>) -> Result<Self, CodecError> {
        let count = reader.read_vec_len(32)?;
        let mut signers = Vec::with_capacity(count);
        for _ in 0..count {
            signers.push(reader.read_address()?);
        }
        Ok(Self {
            signers,
            threshold: reader.read_u8()?,
            proposal_count: reader.read_u64()?,
            admin: reader.read_address()?,
            is_active: reader.read_bool()?,
            created_at: reader.read_i64()?,
            bump: reader.read_u8()?,
        })
    }

    fn encode_fields(&self, writer: &mut WireWriter) {
        writer.write_u32(self.signers.len() as u32);
        for signer in &self.signers {
            writer.write_address(signer);
        }
        writer.write_u8(self.threshold);
        writer.write_u64(self.proposal_count);
        writer.write_address(&self.admin);
        writer.write_bool(self.is_active);
        writer.write_i64(self.created_at);
        writer.write_u8(self.bump);
    }
}

impl AccountRecord for MultisigProposal {
    const DISCRIMINATOR: [u8; 8] = account::MULTISIG_PROPOSAL;

    // 8 + 8 + 1 + 32 + 32 + 2 + 5 + 17 + 32 + 32 + 1 + 1 + 1 + 1 + 8 + 8 + 1
    const SPACE: usize = 190;

    fn decode_fields(reader: &mut WireReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            proposal_id: reader.read_u64()?,
            proposal_type: ProposalType::from_wire(reader.read_u8()?),
            proposer: reader.read_address()?,
            target_agent: reader.read_address()?,
            proposed_score: reader.read_u16()?,
            proposed_components: decode_component_scores(reader)?,
            proposed_stats: decode_reputation_stats(reader)?,
            proposed_merkle_root: reader.read_bytes32()?,
            target_signer: reader.read_address()?,
            new_threshold: reader.read_u8()?,
            approval_bitmap: reader.read_u8()?,
            approval_count: reader.read_u8()?,
            status: ProposalStatus::from_wire(reader.read_u8()?),
            created_at: reader.read_i64()?,
            executed_at: reader.read_i64()?,
            bump: reader.read_u8()?,
        })
    }

    fn encode_fields(&self, writer: &mut WireWriter) {
        writer.write_u64(self.proposal_id);
        writer.write_u8(self.proposal_type.to_wire());
        writer.write_address(&self.proposer);
        writer.write_address(&self.target_agent);
        writer.write_u16(self.proposed_score);
        encode_component_scores(&self.proposed_components, writer);
        encode_reputation_stats(&self.proposed_stats, writer);
        writer.write_bytes(&self.proposed_merkle_root);
        writer.write_address(&self.target_signer);
        writer.write_u8(self.new_threshold);
        writer.write_u8(self.approval_bitmap);
        writer.write_u8(self.approval_count);
        writer.write_u8(self.status.to_wire());
        writer.write_i64(self.created_at);
        writer.write_i64(self.executed_at);
        writer.write_u8(self.bump);
    }
}
