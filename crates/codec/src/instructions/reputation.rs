//! Reputation registry instruction payloads.

use ghostspeak_types::error::CodecError;
use ghostspeak_types::records::{ComponentScores, ReputationStats};

use crate::discriminator::reputation;
use crate::wire::WireWriter;

/// Maximum payment-signature length accepted by the program.
pub const MAX_PAYMENT_SIGNATURE_LEN: usize = 88;

/// `initialize_authority()`, which takes no arguments.
pub fn initialize_authority() -> Vec<u8> {
    reputation::INITIALIZE_AUTHORITY.to_vec()
}

/// `initialize_reputation()`, which takes no arguments.
pub fn initialize_reputation() -> Vec<u8> {
    reputation::INITIALIZE_REPUTATION.to_vec()
}

/// `update_reputation(overall_score, component_scores, stats, merkle_root)`.
///
/// Bounds mirror the program's own checks so a rejected update never leaves
/// this process.
pub fn update_reputation(
    overall_score: u16,
    component_scores: &ComponentScores,
    stats: &ReputationStats,
    payment_proofs_merkle_root: &[u8; 32],
) -> Result<Vec<u8>, CodecError> {
    if overall_score > 1000 {
        return Err(CodecError::FieldOutOfBounds {
            field: "overall_score",
            reason: format!("{overall_score} exceeds maximum 1000"),
        });
    }
    let components = [
        component_scores.trust,
        component_scores.quality,
        component_scores.reliability,
        component_scores.economic,
        component_scores.social,
    ];
    if components.iter().any(|&c| c > 100) {
        return Err(CodecError::FieldOutOfBounds {
            field: "component_scores",
            reason: "component above 100".into(),
        });
    }
    if stats.avg_review_rating > 50 {
        return Err(CodecError::FieldOutOfBounds {
            field: "avg_review_rating",
            reason: format!("{} exceeds maximum 50", stats.avg_review_rating),
        });
    }

    let mut writer = WireWriter::with_capacity(8 + 2 + 5 + 17 + 32);
    writer.write_bytes(&reputation::UPDATE_REPUTATION);
    writer.write_u16(overall_score);
    for component in components {
        writer.write_u8(component);
    }
    writer.write_u32(stats.total_votes);
    writer.write_u32(stats.positive_votes);
    writer.write_u32(stats.negative_votes);
    writer.write_u32(stats.total_reviews);
    writer.write_u8(stats.avg_review_rating);
    writer.write_bytes(payment_proofs_merkle_root);
    Ok(writer.finish())
}

/// `record_payment_proof(payment_signature)`.
pub fn record_payment_proof(payment_signature: &str) -> Result<Vec<u8>, CodecError> {
    if payment_signature.len() > MAX_PAYMENT_SIGNATURE_LEN {
        return Err(CodecError::FieldOutOfBounds {
            field: "payment_signature",
            reason: format!(
                "{} bytes exceeds maximum {MAX_PAYMENT_SIGNATURE_LEN}",
                payment_signature.len()
            ),
        });
    }
    let mut writer = WireWriter::with_capacity(8 + 4 + payment_signature.len());
    writer.write_bytes(&reputation::RECORD_PAYMENT_PROOF);
    writer.write_string(payment_signature);
    Ok(writer.finish())
}

/// `get_reputation()`, the log-only view instruction. No arguments.
pub fn get_reputation() -> Vec<u8> {
    reputation::GET_REPUTATION.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_reputation_layout() {
        let data = update_reputation(
            930,
            &ComponentScores {
                trust: 1,
                quality: 2,
                reliability: 3,
                economic: 4,
                social: 5,
            },
            &ReputationStats {
                total_votes: 7,
                positive_votes: 6,
                negative_votes: 1,
                total_reviews: 2,
                avg_review_rating: 40,
            },
            &[0xEE; 32],
        )
        .unwrap();
        assert_eq!(data.len(), 8 + 2 + 5 + 17 + 32);
        assert_eq!(&data[..8], &reputation::UPDATE_REPUTATION);
        assert_eq!(u16::from_le_bytes([data[8], data[9]]), 930);
        assert_eq!(&data[10..15], &[1, 2, 3, 4, 5]);
        assert_eq!(u32::from_le_bytes(data[15..19].try_into().unwrap()), 7);
        assert_eq!(data[31], 40);
        assert!(data[32..].iter().all(|&b| b == 0xEE));
    }

    #[test]
    fn update_reputation_bounds() {
        let ok_components = ComponentScores::default();
        let ok_stats = ReputationStats::default();
        assert!(update_reputation(1001, &ok_components, &ok_stats, &[0; 32]).is_err());
        assert!(update_reputation(
            500,
            &ComponentScores {
                trust: 101,
                ..ok_components
            },
            &ok_stats,
            &[0; 32]
        )
        .is_err());
        assert!(update_reputation(
            500,
            &ok_components,
            &ReputationStats {
                avg_review_rating: 51,
                ..ok_stats
            },
            &[0; 32]
        )
        .is_err());
    }

    #[test]
    fn record_payment_proof_rejects_long_signature() {
        assert!(record_payment_proof(&"s".repeat(89)).is_err());
        assert!(record_payment_proof(&"s".repeat(88)).is_ok());
    }
}
