//! Per-record account decoders.
//!
//! Every record implements [`AccountRecord`]: a discriminator, the fixed
//! on-chain allocation size, and field-order decode/encode against the wire
//! cursor. One generic entry point ([`AccountRecord::decode`]) owns the
//! discriminator check and the totality guarantee; the per-record impls are
//! flat field lists that read exactly like the deployed layouts.
//!
//! `encode` is the reference encoding: it reproduces what the chain stores
//! (content then zero padding out to the allocation size). It exists for
//! fixtures, round-trip tests, and callers that need byte-identical copies
//! of chain state; this layer never writes account state anywhere.

use ghostspeak_types::error::CodecError;

use crate::wire::{WireReader, WireWriter};

mod identity;
mod multisig;
mod reputation;
mod staking;
mod validation;
mod vote;

/// A decodable on-chain account record.
pub trait AccountRecord: Sized {
    /// The 8-byte discriminator prefixing every buffer of this kind.
    const DISCRIMINATOR: [u8; 8];

    /// The fixed allocation size of this account on chain, including the
    /// discriminator. Used as the bulk-scan size filter; variable-width
    /// fields are allocated at their maximum and zero-padded.
    const SPACE: usize;

    /// Reads the fields in layout order, after the discriminator.
    fn decode_fields(reader: &mut WireReader<'_>) -> Result<Self, CodecError>;

    /// Writes the fields in layout order, after the discriminator.
    fn encode_fields(&self, writer: &mut WireWriter);

    /// Decodes a full account buffer, checking the discriminator first.
    fn decode(data: &[u8]) -> Result<Self, CodecError> {
        let mut reader = WireReader::new(data);
        let tag = reader.read_bytes(8)?;
        if tag != Self::DISCRIMINATOR {
            return Err(CodecError::BadDiscriminator);
        }
        Self::decode_fields(&mut reader)
    }

    /// Encodes the record as the chain stores it: discriminator, fields,
    /// zero padding out to [`Self::SPACE`].
    fn encode(&self) -> Vec<u8> {
        let mut writer = WireWriter::with_capacity(Self::SPACE);
        writer.write_bytes(&Self::DISCRIMINATOR);
        self.encode_fields(&mut writer);
        writer.pad_to(Self::SPACE);
        writer.finish()
    }
}
