//! Reputation registry account layouts.

use ghostspeak_types::error::CodecError;
use ghostspeak_types::records::{
    AgentReputation, ComponentScores, ReputationAuthority, ReputationStats,
};

use crate::discriminator::account;
use crate::wire::{WireReader, WireWriter};

use super::AccountRecord;

pub(crate) fn decode_component_scores(
    reader: &mut WireReader<'_>,
) -> Result<ComponentScores, CodecError> {
    Ok(ComponentScores {
        trust: reader.read_u8()?,
        quality: reader.read_u8()?,
        reliability: reader.read_u8()?,
        economic: reader.read_u8()?,
        social: reader.read_u8()?,
    })
}

pub(crate) fn encode_component_scores(scores: &ComponentScores, writer: &mut WireWriter) {
    writer.write_u8(scores.trust);
    writer.write_u8(scores.quality);
    writer.write_u8(scores.reliability);
    writer.write_u8(scores.economic);
    writer.write_u8(scores.social);
}

pub(crate) fn decode_reputation_stats(
    reader: &mut WireReader<'_>,
) -> Result<ReputationStats, CodecError> {
    Ok(ReputationStats {
        total_votes: reader.read_u32()?,
        positive_votes: reader.read_u32()?,
        negative_votes: reader.read_u32()?,
        total_reviews: reader.read_u32()?,
        avg_review_rating: reader.read_u8()?,
    })
}

pub(crate) fn encode_reputation_stats(stats: &ReputationStats, writer: &mut WireWriter) {
    writer.write_u32(stats.total_votes);
    writer.write_u32(stats.positive_votes);
    writer.write_u32(stats.negative_votes);
    writer.write_u32(stats.total_reviews);
    writer.write_u8(stats.avg_review_rating);
}

impl AccountRecord for AgentReputation {
    const DISCRIMINATOR: [u8; 8] = account::AGENT_REPUTATION;

    // 8 + 32 + 2 + 5 + 17 + 32 + 8 + 1 + 2 + 8 + 1 + 2
    const SPACE: usize = 118;

    fn decode_fields(reader: &mut WireReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            agent_address: reader.read_address()?,
            overall_score: reader.read_u16()?,
            component_scores: decode_component_scores(reader)?,
            stats: decode_reputation_stats(reader)?,
            payment_proofs_merkle_root: reader.read_bytes32()?,
            last_updated: reader.read_i64()?,
            bump: reader.read_u8()?,
            base_score: reader.read_u16()?,
            last_activity: reader.read_i64()?,
            decay_enabled: reader.read_bool()?,
            decay_rate_bps: reader.read_u16()?,
        })
    }

    fn encode_fields(&self, writer: &mut WireWriter) {
        writer.write_address(&self.agent_address);
        writer.write_u16(self.overall_score);
        encode_component_scores(&self.component_scores, writer);
        encode_reputation_stats(&self.stats, writer);
        writer.write_bytes(&self.payment_proofs_merkle_root);
        writer.write_i64(self.last_updated);
        writer.write_u8(self.bump);
        writer.write_u16(self.base_score);
        writer.write_i64(self.last_activity);
        writer.write_bool(self.decay_enabled);
        writer.write_u16(self.decay_rate_bps);
    }
}

impl AccountRecord for ReputationAuthority {
    const DISCRIMINATOR: [u8; 8] = account::REPUTATION_AUTHORITY;

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

#[cfg(test)]
mod tests {
    use super::*;
    use ghostspeak_types::Address;

    fn sample() -> AgentReputation {
        AgentReputation {
            agent_address: Address::new([0x11; 32]),
            overall_score: 850,
            component_scores: ComponentScores {
                trust: 90,
                quality: 85,
                reliability: 88,
                economic: 70,
                social: 75,
            },
            stats: ReputationStats {
                total_votes: 120,
                positive_votes: 100,
                negative_votes: 15,
                total_reviews: 40,
                avg_review_rating: 45,
            },
            payment_proofs_merkle_root: [0xCD; 32],
            last_updated: 1_719_500_000,
            bump: 253,
            base_score: 850,
            last_activity: 1_719_400_000,
            decay_enabled: true,
            decay_rate_bps: 10_000,
        }
    }

    #[test]
    fn round_trip() {
        let record = sample();
        let bytes = record.encode();
        assert_eq!(bytes.len(), AgentReputation::SPACE);
        assert_eq!(AgentReputation::decode(&bytes).unwrap(), record);
    }

    #[test]
    fn fixed_layout_offsets() {
        // overall_score sits directly after discriminator + agent address.
        let bytes = sample().encode();
        assert_eq!(u16::from_le_bytes([bytes[40], bytes[41]]), 850);
        // merkle root occupies [64, 96).
        assert!(bytes[64..96].iter().all(|&b| b == 0xCD));
    }

    #[test]
    fn authority_round_trip() {
        let record = ReputationAuthority {
            authority: Address::new([0x22; 32]),
            bump: 252,
        };
        let bytes = record.encode();
        assert_eq!(bytes.len(), ReputationAuthority::SPACE);
        assert_eq!(ReputationAuthority::decode(&bytes).unwrap(), record);
    }

    #[test]
    fn authority_discriminator_is_not_interchangeable() {
        // A validation authority buffer must not decode as a reputation one.
        let bytes = ReputationAuthority {
            authority: Address::new([0x22; 32]),
            bump: 252,
        }
        .encode();
        let mut forged = bytes.clone();
        forged[..8].copy_from_slice(&account::VALIDATION_AUTHORITY);
        assert!(ReputationAuthority::decode(&forged).is_err());
        assert!(ReputationAuthority::decode(&bytes).is_ok());
    }

    #[test]
    fn truncated_buffer_errors() {
        let bytes = sample().encode();
        assert!(AgentReputation::decode(&bytes[..50]).is_err());
        assert!(AgentReputation::decode(&[]).is_err());
    }
}
