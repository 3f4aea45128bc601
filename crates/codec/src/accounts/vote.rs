//! Vote registry account layouts.

use ghostspeak_types::error::CodecError;
use ghostspeak_types::records::{
    AgentEndorsement, ContentRating, ContentType, EndorsementCategory, PeerVote, QualityScores,
    TransactionReceipt, VoteType,
};

use crate::discriminator::account;
use crate::wire::{WireReader, WireWriter};

use super::AccountRecord;

fn decode_quality_scores(reader: &mut WireReader<'_>) -> Result<QualityScores, CodecError> {
    Ok(QualityScores {
        response_quality: reader.read_u8()?,
        response_speed: reader.read_u8()?,
        accuracy: reader.read_u8()?,
        professionalism: reader.read_u8()?,
    })
}

fn encode_quality_scores(scores: &QualityScores, writer: &mut WireWriter) {
    writer.write_u8(scores.response_quality);
    writer.write_u8(scores.response_speed);
    writer.write_u8(scores.accuracy);
    writer.write_u8(scores.professionalism);
}

impl AccountRecord for TransactionReceipt {
    const DISCRIMINATOR: [u8; 8] = account::TRANSACTION_RECEIPT;

    // 8 + (4 + 88) + 32 + 32 + 8 + 8 + 1 + 1 + 1
    const SPACE: usize = 183;

    fn decode_fields(reader: &mut WireReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            signature: reader.read_string()?,
            payer: reader.read_address()?,
            recipient: reader.read_address()?,
            amount: reader.read_u64()?,
            timestamp: reader.read_i64()?,
            content_type: ContentType::from_wire(reader.read_u8()?),
            vote_cast: reader.read_bool()?,
            bump: reader.read_u8()?,
        })
    }

    fn encode_fields(&self, writer: &mut WireWriter) {
        writer.write_string(&self.signature);
        writer.write_address(&self.payer);
        writer.write_address(&self.recipient);
        writer.write_u64(self.amount);
        writer.write_i64(self.timestamp);
        writer.write_u8(self.content_type.to_wire());
        writer.write_bool(self.vote_cast);
        writer.write_u8(self.bump);
    }
}

impl AccountRecord for PeerVote {
    const DISCRIMINATOR: [u8; 8] = account::PEER_VOTE;

    // 8 + 32 + 32 + 1 + 4 + 32 + 8 + 2 + 32 + 2 + 1
    const SPACE: usize = 154;

    fn decode_fields(reader: &mut WireReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            voter: reader.read_address()?,
            voted_agent: reader.read_address()?,
            vote_type: VoteType::from_wire(reader.read_u8()?),
            quality_scores: decode_quality_scores(reader)?,
            comment_hash: reader.read_bytes32()?,
            timestamp: reader.read_i64()?,
            voter_reputation_snapshot: reader.read_u16()?,
            transaction_receipt: reader.read_address()?,
            vote_weight: reader.read_u16()?,
            bump: reader.read_u8()?,
        })
    }

    fn encode_fields(&self, writer: &mut WireWriter) {
        writer.write_address(&self.voter);
        writer.write_address(&self.voted_agent);
        writer.write_u8(self.vote_type.to_wire());
        encode_quality_scores(&self.quality_scores, writer);
        writer.write_bytes(&self.comment_hash);
        writer.write_i64(self.timestamp);
        writer.write_u16(self.voter_reputation_snapshot);
        writer.write_address(&self.transaction_receipt);
        writer.write_u16(self.vote_weight);
        writer.write_u8(self.bump);
    }
}

impl AccountRecord for ContentRating {
    const DISCRIMINATOR: [u8; 8] = account::CONTENT_RATING;

    // 8 + 32 + 32 + (4 + 88) + 1 + 1 + 8 + 8 + 2 + 1
    const SPACE: usize = 185;

    fn decode_fields(reader: &mut WireReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            agent: reader.read_address()?,
            rater: reader.read_address()?,
            x402_signature: reader.read_string()?,
            quality_rating: reader.read_u8()?,
            content_type: ContentType::from_wire(reader.read_u8()?),
            amount_paid: reader.read_u64()?,
            timestamp: reader.read_i64()?,
            rater_reputation_snapshot: reader.read_u16()?,
            bump: reader.read_u8()?,
        })
    }

    fn encode_fields(&self, writer: &mut WireWriter) {
        writer.write_address(&self.agent);
        writer.write_address(&self.rater);
        writer.write_string(&self.x402_signature);
        writer.write_u8(self.quality_rating);
        writer.write_u8(self.content_type.to_wire());
        writer.write_u64(self.amount_paid);
        writer.write_i64(self.timestamp);
        writer.write_u16(self.rater_reputation_snapshot);
        writer.write_u8(self.bump);
    }
}

impl AccountRecord for AgentEndorsement {
    const DISCRIMINATOR: [u8; 8] = account::AGENT_ENDORSEMENT;

    // 8 + 32 + 32 + 1 + 1 + 8 + 2 + 8 + 1 + 1
    const SPACE: usize = 94;

    fn decode_fields(reader: &mut WireReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            endorser: reader.read_address()?,
            endorsed: reader.read_address()?,
            strength: reader.read_u8()?,
            category: EndorsementCategory::from_wire(reader.read_u8()?),
            timestamp: reader.read_i64()?,
            endorser_reputation_snapshot: reader.read_u16()?,
            stake_amount: reader.read_u64()?,
            is_active: reader.read_bool()?,
            bump: reader.read_u8()?,
        })
    }

    fn encode_fields(&self, writer: &mut WireWriter) {
        writer.write_address(&self.endorser);
        writer.write_address(&self.endorsed);
        writer.write_u8(self.strength);
        writer.write_u8(self.category.to_wire());
        writer.write_i64(self.timestamp);
        writer.write_u16(self.endorser_reputation_snapshot);
        writer.write_u64(self.stake_amount);
        writer.write_bool(self.is_active);
        writer.write_u8(self.bump);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghostspeak_types::Address;

    fn receipt() -> TransactionReceipt {
        TransactionReceipt {
            signature: "3AbCdEf".into(),
            payer: Address::new([0x01; 32]),
            recipient: Address::new([0x02; 32]),
            amount: 78_000_000,
            timestamp: 1_719_700_000,
            content_type: ContentType::ApiResponse,
            vote_cast: false,
            bump: 255,
        }
    }

    #[test]
    fn receipt_round_trip() {
        let record = receipt();
        let bytes = record.encode();
        assert_eq!(bytes.len(), TransactionReceipt::SPACE);
        assert_eq!(TransactionReceipt::decode(&bytes).unwrap(), record);
    }

    #[test]
    fn peer_vote_round_trip() {
        let record = PeerVote {
            voter: Address::new([0x01; 32]),
            voted_agent: Address::new([0x02; 32]),
            vote_type: VoteType::Upvote,
            quality_scores: QualityScores {
                response_quality: 90,
                response_speed: 95,
                accuracy: 88,
                professionalism: 100,
            },
            comment_hash: [0x77; 32],
            timestamp: 1_719_800_000,
            voter_reputation_snapshot: 640,
            transaction_receipt: Address::new([0x03; 32]),
            vote_weight: 150,
            bump: 255,
        };
        let bytes = record.encode();
        assert_eq!(bytes.len(), PeerVote::SPACE);
        assert_eq!(PeerVote::decode(&bytes).unwrap(), record);
    }

    #[test]
    fn unknown_vote_type_survives_round_trip() {
        let mut record = PeerVote {
            voter: Address::new([0x01; 32]),
            voted_agent: Address::new([0x02; 32]),
            vote_type: VoteType::Unknown(250),
            quality_scores: QualityScores::default(),
            comment_hash: [0; 32],
            timestamp: 0,
            voter_reputation_snapshot: 0,
            transaction_receipt: Address::new([0x03; 32]),
            vote_weight: 100,
            bump: 255,
        };
        let decoded = PeerVote::decode(&record.encode()).unwrap();
        assert_eq!(decoded.vote_type, VoteType::Unknown(250));
        // And a known tag still decodes as itself.
        record.vote_type = VoteType::Neutral;
        assert_eq!(
            PeerVote::decode(&record.encode()).unwrap().vote_type,
            VoteType::Neutral
        );
    }

    #[test]
    fn content_rating_round_trip() {
        let record = ContentRating {
            agent: Address::new([0x04; 32]),
            rater: Address::new([0x05; 32]),
            x402_signature: "x402sig".into(),
            quality_rating: 87,
            content_type: ContentType::GeneratedCode,
            amount_paid: 1_000,
            timestamp: 1_719_900_000,
            rater_reputation_snapshot: 300,
            bump: 253,
        };
        let bytes = record.encode();
        assert_eq!(bytes.len(), ContentRating::SPACE);
        assert_eq!(ContentRating::decode(&bytes).unwrap(), record);
    }

    #[test]
    fn endorsement_round_trip() {
        let record = AgentEndorsement {
            endorser: Address::new([0x06; 32]),
            endorsed: Address::new([0x07; 32]),
            strength: 80,
            category: EndorsementCategory::Trustworthy,
            timestamp: 1_720_000_000,
            endorser_reputation_snapshot: 720,
            stake_amount: 10_000_000,
            is_active: true,
            bump: 253,
        };
        let bytes = record.encode();
        assert_eq!(bytes.len(), AgentEndorsement::SPACE);
        assert_eq!(AgentEndorsement::decode(&bytes).unwrap(), record);
    }

    #[test]
    fn receipt_with_max_length_signature() {
        let mut record = receipt();
        record.signature = "5".repeat(88);
        let bytes = record.encode();
        assert_eq!(bytes.len(), TransactionReceipt::SPACE);
        assert_eq!(
            TransactionReceipt::decode(&bytes).unwrap().signature,
            record.signature
        );
    }

    #[test]
    fn truncated_receipt_errors() {
        let bytes = receipt().encode();
        assert!(TransactionReceipt::decode(&bytes[..40]).is_err());
    }
}
