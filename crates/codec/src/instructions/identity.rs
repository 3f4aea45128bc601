//! Identity registry instruction payloads.

use ghostspeak_types::error::CodecError;
use ghostspeak_types::Address;

use crate::discriminator::identity;
use crate::wire::WireWriter;

/// Maximum metadata URI length accepted by the program.
pub const MAX_METADATA_URI_LEN: usize = 200;

fn check_uri(metadata_uri: &str) -> Result<(), CodecError> {
    if metadata_uri.len() > MAX_METADATA_URI_LEN {
        return Err(CodecError::FieldOutOfBounds {
            field: "metadata_uri",
            reason: format!("{} bytes exceeds maximum {MAX_METADATA_URI_LEN}", metadata_uri.len()),
        });
    }
    Ok(())
}

/// `register_agent(asset_address, metadata_uri)`.
pub fn register_agent(
    asset_address: &Address,
    metadata_uri: &str,
) -> Result<Vec<u8>, CodecError> {
    check_uri(metadata_uri)?;
    let mut writer = WireWriter::with_capacity(8 + 32 + 4 + metadata_uri.len());
    writer.write_bytes(&identity::REGISTER_AGENT);
    writer.write_address(asset_address);
    writer.write_string(metadata_uri);
    Ok(writer.finish())
}

/// `update_identity(metadata_uri)`.
pub fn update_identity(metadata_uri: &str) -> Result<Vec<u8>, CodecError> {
    check_uri(metadata_uri)?;
    let mut writer = WireWriter::with_capacity(8 + 4 + metadata_uri.len());
    writer.write_bytes(&identity::UPDATE_IDENTITY);
    writer.write_string(metadata_uri);
    Ok(writer.finish())
}

/// `verify_identity()`, which takes no arguments.
pub fn verify_identity() -> Vec<u8> {
    identity::VERIFY_IDENTITY.to_vec()
}

/// `deactivate_agent()`, which takes no arguments.
pub fn deactivate_agent() -> Vec<u8> {
    identity::DEACTIVATE_AGENT.to_vec()
}
