//! Network selection and the per-program configuration registry.
//!
//! The registry is built exactly once at process start and then passed by
//! reference to every component that needs a program identifier. Keeping it
//! an explicit value (rather than module-level statics read at load time)
//! means tests can construct registries freely and no hidden global state
//! exists anywhere in the client.

use crate::address::Address;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The cluster a process talks to, chosen at startup and immutable after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// The development cluster.
    Devnet,
    /// The production cluster.
    Mainnet,
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Devnet => f.write_str("devnet"),
            Network::Mainnet => f.write_str("mainnet"),
        }
    }
}

/// The identity registry program (`2pELseyWXsBRXWBEPZAMqXsyBsRKADAz6LhSgV8Szc2e`).
pub const IDENTITY_REGISTRY_PROGRAM: Address = Address::new([
    26, 245, 18, 79, 179, 165, 213, 146, 41, 173, 69, 3, 164, 26, 10, 182, 22, 132, 63, 187, 189,
    178, 101, 13, 49, 131, 1, 112, 22, 7, 114, 163,
]);

/// The reputation registry program (`A99rMj3Nu975ShFzyhPyae9raBPxDYQiwi8g6RPC73Mp`).
pub const REPUTATION_REGISTRY_PROGRAM: Address = Address::new([
    135, 207, 214, 46, 248, 129, 183, 202, 125, 190, 144, 203, 54, 249, 21, 205, 145, 233, 173,
    138, 14, 39, 14, 70, 112, 104, 248, 210, 231, 14, 50, 223,
]);

/// The validation registry program (`9wwukuFjurWGDXREvnyBLPyePP4wssP5HCuRd1FJsaKc`).
pub const VALIDATION_REGISTRY_PROGRAM: Address = Address::new([
    132, 240, 242, 17, 231, 232, 54, 126, 253, 52, 44, 142, 167, 222, 7, 248, 72, 101, 34, 138,
    96, 39, 67, 120, 70, 228, 126, 141, 253, 198, 228, 123,
]);

/// The vote registry program (`EKqkjsLHK8rFr7pdySSFKZjhQfnEWeVqPRdZekw1t1j6`).
pub const VOTE_REGISTRY_PROGRAM: Address = Address::new([
    197, 251, 130, 213, 88, 102, 126, 18, 121, 231, 93, 131, 68, 12, 219, 237, 91, 36, 117, 189,
    131, 200, 122, 155, 115, 99, 134, 25, 115, 95, 152, 129,
]);

/// The token staking program (`4JNxNBFEH3BD6VRjQoi2pNDpbEa8L46LKbHnUTrdAWeL`).
pub const TOKEN_STAKING_PROGRAM: Address = Address::new([
    49, 6, 194, 54, 157, 13, 165, 25, 112, 90, 208, 75, 200, 22, 164, 87, 238, 52, 209, 90, 143,
    117, 201, 236, 43, 202, 94, 25, 16, 55, 221, 209,
]);

/// The system program (`11111111111111111111111111111111`).
pub const SYSTEM_PROGRAM: Address = Address::new([0u8; 32]);

/// The SPL token program (`TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA`).
pub const TOKEN_PROGRAM: Address = Address::new([
    6, 221, 246, 225, 215, 101, 161, 147, 217, 203, 225, 70, 206, 235, 121, 172, 28, 180, 133,
    237, 95, 91, 55, 145, 58, 140, 245, 133, 126, 255, 0, 169,
]);

/// The token-2022 program (`TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb`).
pub const TOKEN_2022_PROGRAM: Address = Address::new([
    6, 221, 246, 225, 238, 117, 143, 222, 24, 66, 93, 188, 228, 108, 205, 218, 182, 26, 252, 77,
    131, 185, 13, 39, 254, 189, 249, 40, 216, 161, 139, 252,
]);

/// The associated token account program (`ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL`).
pub const ASSOCIATED_TOKEN_PROGRAM: Address = Address::new([
    140, 151, 37, 143, 78, 36, 137, 241, 187, 61, 16, 41, 20, 142, 13, 131, 11, 90, 19, 153, 218,
    255, 16, 132, 4, 142, 123, 216, 219, 233, 248, 89,
]);

/// The rent sysvar (`SysvarRent111111111111111111111111111111111`).
pub const RENT_SYSVAR: Address = Address::new([
    6, 167, 213, 23, 25, 44, 92, 81, 33, 140, 201, 76, 61, 74, 241, 127, 88, 218, 238, 8, 155,
    161, 253, 68, 227, 219, 217, 138, 0, 0, 0, 0,
]);

/// The five program identifiers for one network, plus the network itself.
///
/// Construct once via [`ProgramRegistry::for_network`] and share by
/// reference; every derivation helper and protocol client takes it as input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramRegistry {
    /// Which cluster these identifiers belong to.
    pub network: Network,
    /// The identity registry program.
    pub identity: Address,
    /// The reputation registry program.
    pub reputation: Address,
    /// The validation registry program.
    pub validation: Address,
    /// The vote registry program.
    pub vote: Address,
    /// The token staking program.
    pub staking: Address,
}

impl ProgramRegistry {
    /// Builds the registry for a network.
    ///
    /// The registries are currently deployed under the same identifiers on
    /// both clusters, so the tables coincide; the network is still recorded
    /// so callers can label persisted data and logs correctly.
    pub fn for_network(network: Network) -> Self {
        Self {
            network,
            identity: IDENTITY_REGISTRY_PROGRAM,
            reputation: REPUTATION_REGISTRY_PROGRAM,
            validation: VALIDATION_REGISTRY_PROGRAM,
            vote: VOTE_REGISTRY_PROGRAM,
            staking: TOKEN_STAKING_PROGRAM,
        }
    }
}
