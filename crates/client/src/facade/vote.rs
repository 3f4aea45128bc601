//! Client for the vote registry: receipts, peer votes, content ratings,
//! and endorsements.

use ghostspeak_codec::instructions::vote as payload;
use ghostspeak_codec::{AccountMeta, Instruction};
use ghostspeak_crypto::pda;
use ghostspeak_scoring::vote_weight;
use ghostspeak_types::config::SYSTEM_PROGRAM;
use ghostspeak_types::error::{ClientError, RpcError};
use ghostspeak_types::records::{
    AgentEndorsement, ContentRating, ContentType, EndorsementCategory, PeerVote, QualityScores,
    TransactionReceipt, VoteType,
};
use ghostspeak_types::{Address, ProgramRegistry};

use crate::fetch::{collapse, fetch_record, scan_records};
use crate::recompute::{RecomputeQueue, RecomputeReason, RecomputeRequest};
use crate::rpc::LedgerReader;

const COMPONENT: &str = "VoteRegistry";

/// Builds vote-registry instructions and reads votes, ratings, receipts,
/// and endorsements.
pub struct VoteClient<R> {
    programs: ProgramRegistry,
    reader: R,
}

impl<R: LedgerReader> VoteClient<R> {
    /// Creates a client over a program registry and a ledger reader.
    pub fn new(programs: ProgramRegistry, reader: R) -> Self {
        Self { programs, reader }
    }

    /// The derived receipt address for a payment between two parties.
    pub fn receipt_address(
        &self,
        payer: &Address,
        recipient: &Address,
        signature: &str,
    ) -> Result<Address, ClientError> {
        Ok(pda::transaction_receipt_address(&self.programs, payer, recipient, signature)?.0)
    }

    /// Builds `create_transaction_receipt`. The creator must be a party to
    /// the payment and signs the instruction.
    pub fn build_create_transaction_receipt(
        &self,
        payer: &Address,
        recipient: &Address,
        creator: &Address,
        signature: &str,
        amount: u64,
        content_type: ContentType,
    ) -> Result<Instruction, ClientError> {
        let receipt = self.receipt_address(payer, recipient, signature)?;
        let signature_hash = ghostspeak_crypto::sha256(signature.as_bytes());
        Ok(Instruction {
            program_id: self.programs.vote,
            accounts: vec![
                AccountMeta::writable(receipt),
                AccountMeta::readonly(*payer),
                AccountMeta::readonly(*recipient),
                AccountMeta::writable_signer(*creator),
                AccountMeta::readonly(SYSTEM_PROGRAM),
            ],
            data: payload::create_transaction_receipt(
                signature,
                &signature_hash,
                amount,
                content_type,
            )?,
        })
    }

    /// Builds `cast_peer_vote` against an existing receipt. The voter's and
    /// the voted agent's identity/reputation records enter as derived
    /// read-only accounts; the program re-derives and checks all of them.
    pub fn build_cast_peer_vote(
        &self,
        voter: &Address,
        transaction_receipt: &Address,
        voted_agent: &Address,
        vote_type: VoteType,
        quality_scores: &QualityScores,
        comment_hash: &[u8; 32],
    ) -> Result<Instruction, ClientError> {
        let (peer_vote, _) = pda::peer_vote_address(&self.programs, transaction_receipt)?;
        let (voter_identity, _) = pda::agent_identity_address(&self.programs, voter)?;
        let (voter_reputation, _) = pda::reputation_address(&self.programs, voter)?;
        let (voted_identity, _) = pda::agent_identity_address(&self.programs, voted_agent)?;
        Ok(Instruction {
            program_id: self.programs.vote,
            accounts: vec![
                AccountMeta::writable(peer_vote),
                AccountMeta::writable(*transaction_receipt),
                AccountMeta::readonly(voter_identity),
                AccountMeta::readonly(voter_reputation),
                AccountMeta::readonly(voted_identity),
                AccountMeta::writable_signer(*voter),
                AccountMeta::readonly(self.programs.identity),
                AccountMeta::readonly(self.programs.reputation),
                AccountMeta::readonly(SYSTEM_PROGRAM),
            ],
            data: payload::cast_peer_vote(voted_agent, vote_type, quality_scores, comment_hash)?,
        })
    }

    /// Builds `rate_content` for a paid delivery.
    pub fn build_rate_content(
        &self,
        rater: &Address,
        rated_agent: &Address,
        x402_signature: &str,
        quality_rating: u8,
        content_type: ContentType,
        amount_paid: u64,
    ) -> Result<Instruction, ClientError> {
        let (content_rating, _) = pda::content_rating_address(&self.programs, x402_signature)?;
        let (rater_identity, _) = pda::agent_identity_address(&self.programs, rater)?;
        let (rater_reputation, _) = pda::reputation_address(&self.programs, rater)?;
        let (rated_identity, _) = pda::agent_identity_address(&self.programs, rated_agent)?;
        Ok(Instruction {
            program_id: self.programs.vote,
            accounts: vec![
                AccountMeta::writable(content_rating),
                AccountMeta::readonly(rater_identity),
                AccountMeta::readonly(rater_reputation),
                AccountMeta::readonly(rated_identity),
                AccountMeta::readonly(*rated_agent),
                AccountMeta::writable_signer(*rater),
                AccountMeta::readonly(self.programs.identity),
                AccountMeta::readonly(self.programs.reputation),
                AccountMeta::readonly(SYSTEM_PROGRAM),
            ],
            data: payload::rate_content(x402_signature, quality_rating, content_type, amount_paid)?,
        })
    }

    /// Builds `endorse_agent`, locking stake behind the endorsement.
    pub fn build_endorse_agent(
        &self,
        endorser: &Address,
        endorsed_agent: &Address,
        strength: u8,
        category: EndorsementCategory,
    ) -> Result<Instruction, ClientError> {
        let (endorsement, _) = pda::endorsement_address(&self.programs, endorser, endorsed_agent)?;
        let (endorser_identity, _) = pda::agent_identity_address(&self.programs, endorser)?;
        let (endorser_reputation, _) = pda::reputation_address(&self.programs, endorser)?;
        let (endorsed_identity, _) = pda::agent_identity_address(&self.programs, endorsed_agent)?;
        Ok(Instruction {
            program_id: self.programs.vote,
            accounts: vec![
                AccountMeta::writable(endorsement),
                AccountMeta::readonly(endorser_identity),
                AccountMeta::readonly(endorser_reputation),
                AccountMeta::readonly(endorsed_identity),
                AccountMeta::writable_signer(*endorser),
                AccountMeta::readonly(self.programs.identity),
                AccountMeta::readonly(self.programs.reputation),
                AccountMeta::readonly(SYSTEM_PROGRAM),
            ],
            data: payload::endorse_agent(endorsed_agent, strength, category)?,
        })
    }

    /// Fetches a receipt by the payment's parties and signature.
    pub async fn transaction_receipt(
        &self,
        payer: &Address,
        recipient: &Address,
        signature: &str,
    ) -> Result<Option<TransactionReceipt>, RpcError> {
        let Ok((address, _)) =
            pda::transaction_receipt_address(&self.programs, payer, recipient, signature)
        else {
            return Ok(None);
        };
        let fetched = fetch_record(&self.reader, &address).await?;
        Ok(collapse(COMPONENT, &address, fetched))
    }

    /// Fetches the peer vote cast against a receipt, if any.
    pub async fn peer_vote(
        &self,
        transaction_receipt: &Address,
    ) -> Result<Option<PeerVote>, RpcError> {
        let Ok((address, _)) = pda::peer_vote_address(&self.programs, transaction_receipt) else {
            return Ok(None);
        };
        let fetched = fetch_record(&self.reader, &address).await?;
        Ok(collapse(COMPONENT, &address, fetched))
    }

    /// Fetches a content rating by its x402 signature.
    pub async fn content_rating(
        &self,
        x402_signature: &str,
    ) -> Result<Option<ContentRating>, RpcError> {
        let Ok((address, _)) = pda::content_rating_address(&self.programs, x402_signature) else {
            return Ok(None);
        };
        let fetched = fetch_record(&self.reader, &address).await?;
        Ok(collapse(COMPONENT, &address, fetched))
    }

    /// Fetches an endorsement by its two parties.
    pub async fn endorsement(
        &self,
        endorser: &Address,
        endorsed: &Address,
    ) -> Result<Option<AgentEndorsement>, RpcError> {
        let Ok((address, _)) = pda::endorsement_address(&self.programs, endorser, endorsed) else {
            return Ok(None);
        };
        let fetched = fetch_record(&self.reader, &address).await?;
        Ok(collapse(COMPONENT, &address, fetched))
    }

    /// Scans every peer vote under the program.
    pub async fn all_peer_votes(&self) -> Result<Vec<(Address, PeerVote)>, RpcError> {
        scan_records(COMPONENT, &self.reader, &self.programs.vote, &[]).await
    }

    /// Scans every endorsement under the program.
    pub async fn all_endorsements(
        &self,
    ) -> Result<Vec<(Address, AgentEndorsement)>, RpcError> {
        scan_records(COMPONENT, &self.reader, &self.programs.vote, &[]).await
    }

    /// Whether `voter` could still cast a vote against `receipt` at `now`:
    /// a party to the payment, window open, no vote cast yet.
    pub fn can_vote(receipt: &TransactionReceipt, voter: &Address, now: i64) -> bool {
        !receipt.vote_cast
            && receipt.within_voting_window(now)
            && receipt.counterparty_of(voter).is_some()
    }

    /// The payment-scaled weight a vote against this receipt would carry.
    pub fn expected_vote_weight(receipt: &TransactionReceipt) -> u16 {
        vote_weight(receipt.amount)
    }

    /// Enqueues the score recomputation that follows a successful vote cast.
    /// Fire-and-forget from the caller's perspective, at-least-once on the
    /// queue side; the scoring consumer drains the queue independently.
    pub fn enqueue_recompute_after_vote(&self, queue: &RecomputeQueue, voted_agent: Address) {
        queue.enqueue(RecomputeRequest {
            agent: voted_agent,
            reason: RecomputeReason::VoteCast,
        });
    }
}
