//! Merkle tree over verified payment proofs.
//!
//! The reputation registry stores a single 32-byte root summarizing every
//! payment proof recorded for an agent. Leaves are
//! `sha256(signature ":" amount)` with the amount in decimal; levels combine
//! pairwise with `sha256(left ‖ right)`, duplicating the last node when a
//! level has odd cardinality, until one root remains.

use crate::hash::sha256;

/// The root of an empty proof set.
pub const EMPTY_ROOT: [u8; 32] = [0u8; 32];

/// Leaf hash for one payment proof: `sha256(signature ++ ":" ++ amount)`.
pub fn hash_payment_proof(signature: &str, amount: u64) -> [u8; 32] {
    let mut preimage = Vec::with_capacity(signature.len() + 21);
    preimage.extend_from_slice(signature.as_bytes());
    preimage.push(b':');
    preimage.extend_from_slice(amount.to_string().as_bytes());
    sha256(&preimage)
}

/// Computes the merkle root of a leaf list. Order-sensitive and
/// deterministic; an empty list yields [`EMPTY_ROOT`].
pub fn merkle_root(leaves: &[[u8; 32]]) -> [u8; 32] {
    if leaves.is_empty() {
        return EMPTY_ROOT;
    }
    let mut level = leaves.to_vec();
    while level.len() > 1 {
        let mut next = Vec::with_capacity(level.len().div_ceil(2));
        let mut pairs = level.chunks(2);
        for pair in &mut pairs {
            let left = pair.first().copied().unwrap_or(EMPTY_ROOT);
            // Odd level: the last node pairs with itself.
            let right = pair.get(1).copied().unwrap_or(left);
            let mut combined = Vec::with_capacity(64);
            combined.extend_from_slice(&left);
            combined.extend_from_slice(&right);
            next.push(sha256(&combined));
        }
        level = next;
    }
    level.first().copied().unwrap_or(EMPTY_ROOT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(bytes: &[u8; 32]) -> String {
        hex::encode(bytes)
    }

    #[test]
    fn empty_root_is_all_zeroes() {
        assert_eq!(merkle_root(&[]), [0u8; 32]);
    }

    #[test]
    fn leaf_hash_vector() {
        let leaf = hash_payment_proof("5VERYsig1", 250_000);
        assert_eq!(
            hex(&leaf),
            "51a89ff7abc409d98328235539d1a2f0b80e23f4d64f7bd62fdff232793d7644"
        );
    }

    #[test]
    fn single_leaf_duplicates_itself() {
        let leaf = hash_payment_proof("5VERYsig1", 250_000);
        let root = merkle_root(&[leaf]);
        assert_eq!(
            hex(&root),
            "f57cce40544e2f066c755ec611b7cf4806d8c3fe8b12463463b1e38a52096d14"
        );
    }

    #[test]
    fn two_leaf_vector() {
        let a = hash_payment_proof("5VERYsig1", 250_000);
        let b = hash_payment_proof("5VERYsig2", 1_000_000);
        assert_eq!(
            hex(&merkle_root(&[a, b])),
            "c4d5639e32fa6916cb90670b60cc55dbba774cac581d17e1ec377f646eef9ba7"
        );
    }

    #[test]
    fn odd_count_duplicates_last_node() {
        let a = hash_payment_proof("5VERYsig1", 250_000);
        let b = hash_payment_proof("5VERYsig2", 1_000_000);
        let c = hash_payment_proof("5VERYsig3", 42);
        assert_eq!(
            hex(&merkle_root(&[a, b, c])),
            "abbd848ed8fcee0e90b3d6dd6668b16b2df98182c3b4d15638aa1feca8194d59"
        );
    }

    #[test]
    fn root_is_order_sensitive() {
        let a = hash_payment_proof("5VERYsig1", 250_000);
        let b = hash_payment_proof("5VERYsig2", 1_000_000);
        assert_ne!(merkle_root(&[a, b]), merkle_root(&[b, a]));
    }

    #[test]
    fn root_is_stable_across_calls() {
        let leaves = vec![
            hash_payment_proof("sig-a", 1),
            hash_payment_proof("sig-b", 2),
            hash_payment_proof("sig-c", 3),
            hash_payment_proof("sig-d", 4),
            hash_payment_proof("sig-e", 5),
        ];
        assert_eq!(merkle_root(&leaves), merkle_root(&leaves));
    }
}
