//! The vote registry's account records: receipts, peer votes, content
//! ratings, and staked endorsements.

use crate::address::Address;
use serde::{Deserialize, Serialize};

/// Maximum transaction-signature length in bytes (base58 of 64 bytes).
pub const MAX_SIGNATURE_LEN: usize = 88;

/// How a peer experienced an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoteType {
    /// Positive experience.
    Upvote,
    /// Negative experience.
    Downvote,
    /// Mixed or neutral experience.
    Neutral,
    /// A tag byte outside the known range, preserved verbatim.
    Unknown(u8),
}

impl VoteType {
    /// Decodes a wire tag byte.
    pub fn from_wire(tag: u8) -> Self {
        match tag {
            0 => Self::Upvote,
            1 => Self::Downvote,
            2 => Self::Neutral,
            other => Self::Unknown(other),
        }
    }

    /// Encodes back to the wire tag byte. `Unknown` round-trips its raw byte.
    pub fn to_wire(self) -> u8 {
        match self {
            Self::Upvote => 0,
            Self::Downvote => 1,
            Self::Neutral => 2,
            Self::Unknown(raw) => raw,
        }
    }

    /// Whether this vote type counts as positive for relationship creation.
    pub fn is_positive(self) -> bool {
        matches!(self, Self::Upvote)
    }
}

/// The kind of content a payment bought.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    /// A plain API response.
    ApiResponse,
    /// Generated text.
    GeneratedText,
    /// A generated image.
    GeneratedImage,
    /// Generated code.
    GeneratedCode,
    /// A data feed.
    DataFeed,
    /// Anything else.
    Other,
    /// A tag byte outside the known range, preserved verbatim.
    Unknown(u8),
}

impl ContentType {
    /// Decodes a wire tag byte.
    pub fn from_wire(tag: u8) -> Self {
        match tag {
            0 => Self::ApiResponse,
            1 => Self::GeneratedText,
            2 => Self::GeneratedImage,
            3 => Self::GeneratedCode,
            4 => Self::DataFeed,
            5 => Self::Other,
            other => Self::Unknown(other),
        }
    }

    /// Encodes back to the wire tag byte. `Unknown` round-trips its raw byte.
    pub fn to_wire(self) -> u8 {
        match self {
            Self::ApiResponse => 0,
            Self::GeneratedText => 1,
            Self::GeneratedImage => 2,
            Self::GeneratedCode => 3,
            Self::DataFeed => 4,
            Self::Other => 5,
            Self::Unknown(raw) => raw,
        }
    }
}

/// What an endorsement vouches for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndorsementCategory {
    /// Technical expertise.
    Technical,
    /// Consistent uptime and availability.
    Reliability,
    /// High-quality outputs.
    Quality,
    /// Honest, ethical behavior.
    Trustworthy,
    /// Good to work with.
    Collaborative,
    /// A tag byte outside the known range, preserved verbatim.
    Unknown(u8),
}

impl EndorsementCategory {
    /// Decodes a wire tag byte.
    pub fn from_wire(tag: u8) -> Self {
        match tag {
            0 => Self::Technical,
            1 => Self::Reliability,
            2 => Self::Quality,
            3 => Self::Trustworthy,
            4 => Self::Collaborative,
            other => Self::Unknown(other),
        }
    }

    /// Encodes back to the wire tag byte. `Unknown` round-trips its raw byte.
    pub fn to_wire(self) -> u8 {
        match self {
            Self::Technical => 0,
            Self::Reliability => 1,
            Self::Quality => 2,
            Self::Trustworthy => 3,
            Self::Collaborative => 4,
            Self::Unknown(raw) => raw,
        }
    }
}

/// Per-dimension quality scores attached to a peer vote, each 0-100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityScores {
    /// How good was the output?
    pub response_quality: u8,
    /// How fast was the response?
    pub response_speed: u8,
    /// Was the output accurate?
    pub accuracy: u8,
    /// Professional behavior?
    pub professionalism: u8,
}

impl QualityScores {
    /// Integer mean of the four dimensions.
    pub fn average(&self) -> u8 {
        let sum = u16::from(self.response_quality)
            + u16::from(self.response_speed)
            + u16::from(self.accuracy)
            + u16::from(self.professionalism);
        (sum / 4) as u8
    }
}

/// Receipt for a verified x402 payment, derived at
/// `["tx_receipt", payer, recipient, sha256(signature)]`.
///
/// A receipt is the entry ticket to peer voting: only the two parties to the
/// payment may vote, exactly once, within the voting window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    /// The payment's transaction signature. At most 88 bytes.
    pub signature: String,
    /// The paying party.
    pub payer: Address,
    /// The receiving party (service provider).
    pub recipient: Address,
    /// Amount paid, in lamports.
    pub amount: u64,
    /// Payment timestamp.
    pub timestamp: i64,
    /// What the payment bought.
    pub content_type: ContentType,
    /// Whether a vote has already been cast against this receipt.
    pub vote_cast: bool,
    /// Derivation bump.
    pub bump: u8,
}

/// Votes may only be cast within 30 days of the underlying payment.
pub const VOTING_WINDOW_SECONDS: i64 = 30 * 24 * 60 * 60;

impl TransactionReceipt {
    /// Whether the voting window is still open at `now`.
    pub fn within_voting_window(&self, now: i64) -> bool {
        now.saturating_sub(self.timestamp) <= VOTING_WINDOW_SECONDS
    }

    /// The counterparty a given voter would be voting on, if the voter is a
    /// party to this receipt at all.
    pub fn counterparty_of(&self, voter: &Address) -> Option<Address> {
        if *voter == self.payer {
            Some(self.recipient)
        } else if *voter == self.recipient {
            Some(self.payer)
        } else {
            None
        }
    }
}

/// A payment-gated peer vote, derived at
/// `["peer_vote", transaction_receipt_address]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerVote {
    /// The voting agent.
    pub voter: Address,
    /// The agent being voted on.
    pub voted_agent: Address,
    /// The vote itself.
    pub vote_type: VoteType,
    /// Per-dimension quality scores.
    pub quality_scores: QualityScores,
    /// Hash of an off-chain comment (zeroes if none).
    pub comment_hash: [u8; 32],
    /// Vote timestamp.
    pub timestamp: i64,
    /// The voter's reputation at vote time, for weighting.
    pub voter_reputation_snapshot: u16,
    /// The receipt that proves the interaction.
    pub transaction_receipt: Address,
    /// Vote weight where 100 = 1.0x.
    pub vote_weight: u16,
    /// Derivation bump.
    pub bump: u8,
}

/// A paid content rating, derived at `["content_rating", x402_signature]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRating {
    /// The agent who produced the content.
    pub agent: Address,
    /// The rater (agent or human).
    pub rater: Address,
    /// The x402 payment signature. At most 88 bytes.
    pub x402_signature: String,
    /// Content quality rating 0-100.
    pub quality_rating: u8,
    /// What kind of content was rated.
    pub content_type: ContentType,
    /// Amount paid in the x402 transaction, in lamports.
    pub amount_paid: u64,
    /// Rating timestamp.
    pub timestamp: i64,
    /// The rater's reputation at rating time.
    pub rater_reputation_snapshot: u16,
    /// Derivation bump.
    pub bump: u8,
}

/// Minimum stake locked behind an endorsement: 0.01 SOL.
pub const MIN_ENDORSEMENT_STAKE: u64 = 10_000_000;

/// A token-staked endorsement, derived at
/// `["endorsement", endorser, endorsed]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentEndorsement {
    /// The endorsing agent.
    pub endorser: Address,
    /// The endorsed agent.
    pub endorsed: Address,
    /// Endorsement strength 0-100.
    pub strength: u8,
    /// What the endorsement vouches for.
    pub category: EndorsementCategory,
    /// Endorsement timestamp.
    pub timestamp: i64,
    /// The endorser's reputation at endorsement time.
    pub endorser_reputation_snapshot: u16,
    /// Stake locked behind this endorsement, in lamports.
    pub stake_amount: u64,
    /// Whether the endorsement is active.
    pub is_active: bool,
    /// Derivation bump.
    pub bump: u8,
}
