//! Identity registry account layout.

use ghostspeak_types::error::CodecError;
use ghostspeak_types::records::AgentIdentity;

use crate::discriminator::account;
use crate::wire::{WireReader, WireWriter};

use super::AccountRecord;

impl AccountRecord for AgentIdentity {
    const DISCRIMINATOR: [u8; 8] = account::AGENT_IDENTITY;

    // 8 + 32 + 32 + (4 + 200) + 8 + 8 + 8 + 1 + 8 + 8 + 4 + 8 + 1
    const SPACE: usize = 330;

    fn decode_fields(reader: &mut WireReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            agent_address: reader.read_address()?,
            asset_address: reader.read_address()?,
            metadata_uri: reader.read_string()?,
            registration_timestamp: reader.read_i64()?,
            last_active_timestamp: reader.read_i64()?,
            activity_count: reader.read_u64()?,
            is_active: reader.read_bool()?,
            staked_amount: reader.read_u64()?,
            stake_unlock_timestamp: reader.read_i64()?,
            slash_count: reader.read_u32()?,
            total_slashed: reader.read_u64()?,
            bump: reader.read_u8()?,
        })
    }

    fn encode_fields(&self, writer: &mut WireWriter) {
        writer.write_address(&self.agent_address);
        writer.write_address(&self.asset_address);
        writer.write_string(&self.metadata_uri);
        writer.write_i64(self.registration_timestamp);
        writer.write_i64(self.last_active_timestamp);
        writer.write_u64(self.activity_count);
        writer.write_bool(self.is_active);
        writer.write_u64(self.staked_amount);
        writer.write_i64(self.stake_unlock_timestamp);
        writer.write_u32(self.slash_count);
        writer.write_u64(self.total_slashed);
        writer.write_u8(self.bump);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghostspeak_types::Address;

    fn sample() -> AgentIdentity {
        AgentIdentity {
            agent_address: Address::new([0xAA; 32]),
            asset_address: Address::new([0xBB; 32]),
            metadata_uri: "https://arweave.net/abc123".into(),
            registration_timestamp: 1_718_000_000,
            last_active_timestamp: 1_719_000_000,
            activity_count: 42,
            is_active: true,
            staked_amount: 250_000_000,
            stake_unlock_timestamp: 1_720_000_000,
            slash_count: 1,
            total_slashed: 10_000_000,
            bump: 254,
        }
    }

    #[test]
    fn round_trip() {
        let record = sample();
        let bytes = record.encode();
        assert_eq!(bytes.len(), AgentIdentity::SPACE);
        assert_eq!(AgentIdentity::decode(&bytes).unwrap(), record);
    }

    #[test]
    fn round_trip_empty_uri() {
        let mut record = sample();
        record.metadata_uri = String::new();
        let bytes = record.encode();
        assert_eq!(bytes.len(), AgentIdentity::SPACE);
        assert_eq!(AgentIdentity::decode(&bytes).unwrap(), record);
    }

    #[test]
    fn wrong_discriminator_is_rejected() {
        let mut bytes = sample().encode();
        bytes[0] ^= 0xFF;
        assert_eq!(
            AgentIdentity::decode(&bytes).unwrap_err(),
            CodecError::BadDiscriminator
        );
    }

    #[test]
    fn truncation_at_every_field_boundary_errors() {
        let bytes = sample().encode();
        // Content ends well before SPACE because of URI padding; cut inside
        // the fixed fields.
        for cut in [0usize, 7, 8, 39, 71, 75, 90, 110, 120] {
            assert!(
                AgentIdentity::decode(&bytes[..cut]).is_err(),
                "cut at {cut} should fail"
            );
        }
    }
}
