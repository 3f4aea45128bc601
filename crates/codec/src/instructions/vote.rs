//! Vote registry instruction payloads.

use ghostspeak_types::error::CodecError;
use ghostspeak_types::records::vote::MAX_SIGNATURE_LEN;
use ghostspeak_types::records::{ContentType, EndorsementCategory, QualityScores, VoteType};
use ghostspeak_types::Address;

use crate::discriminator::vote;
use crate::wire::WireWriter;

fn check_signature(field: &'static str, signature: &str) -> Result<(), CodecError> {
    if signature.len() > MAX_SIGNATURE_LEN {
        return Err(CodecError::FieldOutOfBounds {
            field,
            reason: format!("{} bytes exceeds maximum {MAX_SIGNATURE_LEN}", signature.len()),
        });
    }
    Ok(())
}

fn check_score(field: &'static str, value: u8) -> Result<(), CodecError> {
    if value > 100 {
        return Err(CodecError::FieldOutOfBounds {
            field,
            reason: format!("{value} exceeds maximum 100"),
        });
    }
    Ok(())
}

/// `create_transaction_receipt(signature, signature_hash, amount, content_type)`.
pub fn create_transaction_receipt(
    signature: &str,
    signature_hash: &[u8; 32],
    amount: u64,
    content_type: ContentType,
) -> Result<Vec<u8>, CodecError> {
    check_signature("signature", signature)?;
    let mut writer = WireWriter::with_capacity(8 + 4 + signature.len() + 32 + 8 + 1);
    writer.write_bytes(&vote::CREATE_TRANSACTION_RECEIPT);
    writer.write_string(signature);
    writer.write_bytes(signature_hash);
    writer.write_u64(amount);
    writer.write_u8(content_type.to_wire());
    Ok(writer.finish())
}

/// `cast_peer_vote(voted_agent, vote_type, quality_scores, comment_hash)`.
pub fn cast_peer_vote(
    voted_agent: &Address,
    vote_type: VoteType,
    quality_scores: &QualityScores,
    comment_hash: &[u8; 32],
) -> Result<Vec<u8>, CodecError> {
    check_score("response_quality", quality_scores.response_quality)?;
    check_score("response_speed", quality_scores.response_speed)?;
    check_score("accuracy", quality_scores.accuracy)?;
    check_score("professionalism", quality_scores.professionalism)?;

    let mut writer = WireWriter::with_capacity(8 + 32 + 1 + 4 + 32);
    writer.write_bytes(&vote::CAST_PEER_VOTE);
    writer.write_address(voted_agent);
    writer.write_u8(vote_type.to_wire());
    writer.write_u8(quality_scores.response_quality);
    writer.write_u8(quality_scores.response_speed);
    writer.write_u8(quality_scores.accuracy);
    writer.write_u8(quality_scores.professionalism);
    writer.write_bytes(comment_hash);
    Ok(writer.finish())
}

/// `rate_content(x402_signature, quality_rating, content_type, amount_paid)`.
pub fn rate_content(
    x402_signature: &str,
    quality_rating: u8,
    content_type: ContentType,
    amount_paid: u64,
) -> Result<Vec<u8>, CodecError> {
    check_signature("x402_signature", x402_signature)?;
    check_score("quality_rating", quality_rating)?;
    let mut writer = WireWriter::with_capacity(8 + 4 + x402_signature.len() + 1 + 1 + 8);
    writer.write_bytes(&vote::RATE_CONTENT);
    writer.write_string(x402_signature);
    writer.write_u8(quality_rating);
    writer.write_u8(content_type.to_wire());
    writer.write_u64(amount_paid);
    Ok(writer.finish())
}

/// `endorse_agent(endorsed_agent, strength, category)`.
pub fn endorse_agent(
    endorsed_agent: &Address,
    strength: u8,
    category: EndorsementCategory,
) -> Result<Vec<u8>, CodecError> {
    check_score("strength", strength)?;
    let mut writer = WireWriter::with_capacity(8 + 32 + 1 + 1);
    writer.write_bytes(&vote::ENDORSE_AGENT);
    writer.write_address(endorsed_agent);
    writer.write_u8(strength);
    writer.write_u8(category.to_wire());
    Ok(writer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_receipt_layout() {
        let data =
            create_transaction_receipt("sig", &[0x22; 32], 5_000, ContentType::DataFeed).unwrap();
        assert_eq!(&data[..8], &vote::CREATE_TRANSACTION_RECEIPT);
        assert_eq!(u32::from_le_bytes(data[8..12].try_into().unwrap()), 3);
        assert_eq!(&data[12..15], b"sig");
        assert!(data[15..47].iter().all(|&b| b == 0x22));
        assert_eq!(u64::from_le_bytes(data[47..55].try_into().unwrap()), 5_000);
        assert_eq!(data[55], 4); // DataFeed tag
        assert_eq!(data.len(), 56);
    }

    #[test]
    fn cast_peer_vote_layout() {
        let agent = Address::new([0x0A; 32]);
        let data = cast_peer_vote(
            &agent,
            VoteType::Downvote,
            &QualityScores {
                response_quality: 10,
                response_speed: 20,
                accuracy: 30,
                professionalism: 40,
            },
            &[0x0B; 32],
        )
        .unwrap();
        assert_eq!(&data[..8], &vote::CAST_PEER_VOTE);
        assert_eq!(&data[8..40], agent.as_ref());
        assert_eq!(data[40], 1); // Downvote tag
        assert_eq!(&data[41..45], &[10, 20, 30, 40]);
        assert!(data[45..77].iter().all(|&b| b == 0x0B));
    }

    #[test]
    fn score_bounds_are_enforced() {
        assert!(cast_peer_vote(
            &Address::default(),
            VoteType::Upvote,
            &QualityScores {
                response_quality: 101,
                ..QualityScores::default()
            },
            &[0; 32],
        )
        .is_err());
        assert!(rate_content("sig", 101, ContentType::Other, 0).is_err());
        assert!(endorse_agent(&Address::default(), 101, EndorsementCategory::Quality).is_err());
    }

    #[test]
    fn long_signatures_are_rejected() {
        let long = "s".repeat(MAX_SIGNATURE_LEN + 1);
        assert!(create_transaction_receipt(&long, &[0; 32], 0, ContentType::Other).is_err());
        assert!(rate_content(&long, 50, ContentType::Other, 0).is_err());
    }
}
