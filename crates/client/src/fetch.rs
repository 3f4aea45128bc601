//! Internal fetch-and-decode helpers shared by the façades.
//!
//! The three-state [`Fetched`] result keeps "the account does not exist"
//! distinct from "the account exists but would not decode" inside this
//! crate. Only the façade boundary collapses the two into `None` (logging
//! the corrupt case), so the ambiguity external callers see is a conscious
//! choice rather than information lost on the way.

use ghostspeak_codec::AccountRecord;
use ghostspeak_types::error::{CodecError, RpcError};
use ghostspeak_types::Address;

use crate::rpc::{AccountFilter, LedgerReader};

/// Outcome of fetching and decoding one account.
pub(crate) enum Fetched<T> {
    /// The account exists and decoded cleanly.
    Present(T),
    /// No account at the address.
    Missing,
    /// The account exists but its bytes would not decode.
    Corrupt(CodecError),
}

/// Fetches `address` and decodes it as `T`. Transport errors propagate;
/// decode failures are captured, not raised.
pub(crate) async fn fetch_record<T, R>(
    reader: &R,
    address: &Address,
) -> Result<Fetched<T>, RpcError>
where
    T: AccountRecord,
    R: LedgerReader,
{
    match reader.account(address).await? {
        None => Ok(Fetched::Missing),
        Some(data) => match T::decode(&data) {
            Ok(record) => Ok(Fetched::Present(record)),
            Err(reason) => Ok(Fetched::Corrupt(reason)),
        },
    }
}

/// Collapses a [`Fetched`] into the façade-boundary `Option`, logging the
/// corrupt case so operators can tell the two absences apart after the fact.
pub(crate) fn collapse<T>(component: &str, address: &Address, fetched: Fetched<T>) -> Option<T> {
    match fetched {
        Fetched::Present(record) => Some(record),
        Fetched::Missing => None,
        Fetched::Corrupt(reason) => {
            log::warn!("[{component}] undecodable account {address}: {reason}");
            None
        }
    }
}

/// Bulk-scans `program_id` for records of type `T`: size filter plus
/// discriminator match, then per-account decode. Undecodable candidates are
/// dropped silently (counted in the log), matching the read contract that
/// scans only surface what parses.
pub(crate) async fn scan_records<T, R>(
    component: &str,
    reader: &R,
    program_id: &Address,
    extra_filters: &[AccountFilter],
) -> Result<Vec<(Address, T)>, RpcError>
where
    T: AccountRecord,
    R: LedgerReader,
{
    let mut filters = vec![
        AccountFilter::DataSize(T::SPACE as u64),
        AccountFilter::MemCmp {
            offset: 0,
            bytes: T::DISCRIMINATOR.to_vec(),
        },
    ];
    filters.extend_from_slice(extra_filters);

    let candidates = reader.program_accounts(program_id, &filters).await?;
    let total = candidates.len();
    let mut records = Vec::with_capacity(total);
    for (address, data) in candidates {
        if let Ok(record) = T::decode(&data) {
            records.push((address, record));
        }
    }
    let dropped = total - records.len();
    if dropped > 0 {
        log::warn!("[{component}] dropped {dropped}/{total} undecodable accounts in scan");
    }
    Ok(records)
}
