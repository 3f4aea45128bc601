//! Payment verification.
//!
//! This is the one place where financial fraud could slip through if the
//! logic is wrong, so every rejection is explicit and reason-coded; a
//! failed verification never degrades into a silent "not found". The
//! verifier proves four things about a claimed payment: the transaction
//! exists and succeeded, it actually moved tokens, the token accounts on
//! both ends belong to the claimed parties, and the amount meets the
//! caller's minimum.

use futures::future::join_all;
use ghostspeak_codec::token::TokenAccountState;
use ghostspeak_crypto::merkle;
use ghostspeak_types::config::{TOKEN_2022_PROGRAM, TOKEN_PROGRAM};
use ghostspeak_types::error::{RpcError, VerifyError};
use ghostspeak_types::Address;
use serde::{Deserialize, Serialize};

use crate::rpc::{LedgerReader, ParsedInstruction};

const COMPONENT: &str = "PaymentVerifier";

/// Evidence that a specific token transfer occurred between two parties for
/// at least a minimum amount. Produced only after full verification;
/// ephemeral; persistence belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentProof {
    /// The verified transaction signature.
    pub signature: String,
    /// The wallet that paid (owner of the source token account).
    pub payer: Address,
    /// The wallet that was paid (owner of the destination token account).
    pub recipient: Address,
    /// The amount actually transferred, not the requested minimum.
    pub amount: u64,
    /// The token mint the payment was denominated in.
    pub token_mint: Address,
    /// Block time of the transaction, zero when the node omitted it.
    pub timestamp: i64,
    /// Slot the transaction landed in.
    pub slot: u64,
}

impl PaymentProof {
    /// This proof's merkle leaf: `sha256(signature ":" amount)`.
    pub fn leaf_hash(&self) -> [u8; 32] {
        merkle::hash_payment_proof(&self.signature, self.amount)
    }
}

/// Computes the merkle root over an ordered list of proofs, as stored in
/// the agent's reputation record.
pub fn proofs_merkle_root(proofs: &[PaymentProof]) -> [u8; 32] {
    let leaves: Vec<[u8; 32]> = proofs.iter().map(PaymentProof::leaf_hash).collect();
    merkle::merkle_root(&leaves)
}

/// One entry of a batch verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyRequest {
    /// The claimed transaction signature.
    pub signature: String,
    /// The wallet expected to have paid.
    pub expected_payer: Address,
    /// The wallet expected to have been paid.
    pub expected_recipient: Address,
    /// The minimum acceptable amount.
    pub min_amount: u64,
    /// The token mint the payment must be denominated in.
    pub token_mint: Address,
}

fn is_token_program(program_id: &Address) -> bool {
    *program_id == TOKEN_PROGRAM || *program_id == TOKEN_2022_PROGRAM
}

/// Verifies claimed payments against the ledger.
pub struct PaymentVerifier<R> {
    reader: R,
}

impl<R: LedgerReader> PaymentVerifier<R> {
    /// Creates a verifier over a ledger reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Verifies that `signature` paid at least `min_amount` of `token_mint`
    /// from `expected_payer` to `expected_recipient`.
    ///
    /// Top-level instructions are scanned before inner ones; the first
    /// token transfer wins. A mint-checked transfer whose declared mint is
    /// not `token_mint` is skipped, not rejected, since the matching transfer may
    /// follow it.
    pub async fn verify(
        &self,
        signature: &str,
        expected_payer: &Address,
        expected_recipient: &Address,
        min_amount: u64,
        token_mint: &Address,
    ) -> Result<PaymentProof, VerifyError> {
        let transaction = self
            .reader
            .transaction(signature)
            .await?
            .ok_or(VerifyError::TransactionNotFound)?;

        if let Some(reason) = transaction.err {
            return Err(VerifyError::TransactionFailed(reason));
        }

        let (source, destination, amount) = transaction
            .instructions
            .iter()
            .chain(transaction.inner_instructions.iter())
            .find_map(|instruction| match instruction {
                ParsedInstruction::TokenTransfer {
                    program_id,
                    source,
                    destination,
                    amount,
                    ..
                } if is_token_program(program_id) => Some((*source, *destination, *amount)),
                ParsedInstruction::TokenTransferChecked {
                    program_id,
                    source,
                    destination,
                    mint,
                    amount,
                    ..
                } if is_token_program(program_id) && mint == token_mint => {
                    Some((*source, *destination, *amount))
                }
                _ => None,
            })
            .ok_or(VerifyError::NoTransferFound)?;

        let source_state = self.token_account_state(&source).await?;
        let destination_state = self.token_account_state(&destination).await?;

        if source_state.owner != *expected_payer {
            return Err(VerifyError::PayerMismatch {
                expected: *expected_payer,
                found: source_state.owner,
            });
        }
        if destination_state.owner != *expected_recipient {
            return Err(VerifyError::RecipientMismatch {
                expected: *expected_recipient,
                found: destination_state.owner,
            });
        }
        if amount < min_amount {
            return Err(VerifyError::AmountTooLow {
                required: min_amount,
                actual: amount,
            });
        }

        log::info!(
            "[{COMPONENT}] verified {} -> {}: {} of {}",
            source_state.owner,
            destination_state.owner,
            amount,
            token_mint
        );

        Ok(PaymentProof {
            signature: signature.to_owned(),
            payer: source_state.owner,
            recipient: destination_state.owner,
            amount,
            token_mint: *token_mint,
            timestamp: transaction.block_time.unwrap_or(0),
            slot: transaction.slot,
        })
    }

    /// Verifies a batch concurrently. The result list parallels the request
    /// list; one rejection never cancels the others.
    pub async fn verify_batch(
        &self,
        requests: &[VerifyRequest],
    ) -> Vec<Result<PaymentProof, VerifyError>> {
        join_all(requests.iter().map(|request| {
            self.verify(
                &request.signature,
                &request.expected_payer,
                &request.expected_recipient,
                request.min_amount,
                &request.token_mint,
            )
        }))
        .await
    }

    /// Resolves a token account referenced by a transfer instruction. A
    /// transfer whose token accounts cannot be fetched back is treated as a
    /// malformed ledger answer, not as any of the party-mismatch outcomes.
    async fn token_account_state(
        &self,
        address: &Address,
    ) -> Result<TokenAccountState, VerifyError> {
        let data = self.reader.account(address).await?.ok_or_else(|| {
            RpcError::InvalidResponse(format!("token account {address} not found"))
        })?;
        TokenAccountState::parse(&data).map_err(|reason| {
            RpcError::InvalidResponse(format!("token account {address} unparseable: {reason}"))
                .into()
        })
    }
}
