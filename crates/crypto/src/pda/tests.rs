//! Exact-match derivation vectors.
//!
//! The expected addresses were produced with the host chain's derivation for
//! the deployed program ids, so any drift in hashing, seed ordering, or the
//! off-curve check shows up as a failed equality here rather than as a silent
//! mismatch against chain state.

use super::*;
use ghostspeak_types::Network;

fn registry() -> ProgramRegistry {
    ProgramRegistry::for_network(Network::Devnet)
}

fn test_address(label: &str) -> Address {
    Address::new(sha256(label.as_bytes()))
}

fn wallet() -> Address {
    test_address("ghostspeak:test:wallet-1")
}

#[test]
fn test_fixture_addresses_are_stable() {
    assert_eq!(
        wallet().to_string(),
        "5uhK7CLAkWJBRHRDBW1VdkNL7KwTupzyi1auBiwAsKgF"
    );
    assert_eq!(
        test_address("ghostspeak:test:payer-1").to_string(),
        "9fb5EbDMGqZKvVtGbVkT6YKvBT7mc2faV7mRMEBg7oA2"
    );
}

#[test]
fn derivation_is_deterministic() {
    let registry = registry();
    let first = agent_identity_address(&registry, &wallet()).unwrap();
    let second = agent_identity_address(&registry, &wallet()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn agent_identity_vector() {
    let (address, bump) = agent_identity_address(&registry(), &wallet()).unwrap();
    assert_eq!(address.to_string(), "NUKSqomotwYtA6nnH7khbzNMY32fvNgNET1s4jvAr66");
    assert_eq!(bump, 255);
}

#[test]
fn reputation_vectors() {
    let registry = registry();
    let (address, bump) = reputation_address(&registry, &wallet()).unwrap();
    assert_eq!(address.to_string(), "BRhxEdW75NdipdyMXuWvAGW87MGMt5BSaeBNCHqtou5d");
    assert_eq!(bump, 255);

    let (authority, bump) = reputation_authority_address(&registry).unwrap();
    assert_eq!(authority.to_string(), "2zZ92aPETNgPfKg24kGLietYePQHeuzjbRwbrAXzR9YJ");
    assert_eq!(bump, 252);
}

#[test]
fn validation_vectors() {
    let registry = registry();
    let (address, bump) =
        validation_address(&registry, "https://api.example.com/v1/chat").unwrap();
    assert_eq!(address.to_string(), "CDR7yVB7svRL1hjujvTCMB9vnYB1cjD3Pa7vfo3N25JT");
    assert_eq!(bump, 253);

    let (authority, bump) = validation_authority_address(&registry).unwrap();
    assert_eq!(authority.to_string(), "6TRDpzoXzWTDHSFPFyubm4tXYxoKJCHzkrSmT3gwHoeA");
    assert_eq!(bump, 252);
}

#[test]
fn same_seeds_different_program_differ() {
    let registry = registry();
    // Both authority singletons use the bare "authority" seed; the program id
    // must separate them.
    let rep = reputation_authority_address(&registry).unwrap().0;
    let val = validation_authority_address(&registry).unwrap().0;
    assert_ne!(rep, val);
}

#[test]
fn vote_registry_vectors() {
    let registry = registry();
    let payer = test_address("ghostspeak:test:payer-1");
    let recipient = test_address("ghostspeak:test:recipient-1");

    let (receipt, bump) =
        transaction_receipt_address(&registry, &payer, &recipient, "ghostsig-0001").unwrap();
    assert_eq!(receipt.to_string(), "BWxeEC62yyMHWBmmaJy2UHG4dmqHRkkvZz7odZy7rt5z");
    assert_eq!(bump, 255);

    let (vote, bump) = peer_vote_address(&registry, &receipt).unwrap();
    assert_eq!(vote.to_string(), "9GWWbn8F7PEVaSmmkkNYztftV8pgvH9gnbCEBGHLp7Eg");
    assert_eq!(bump, 255);

    let (rating, bump) = content_rating_address(&registry, "ghostsig-0001").unwrap();
    assert_eq!(rating.to_string(), "5auyBTujopsHEEmoQHngWzq78MFfTRBUBNQwty2zSchb");
    assert_eq!(bump, 253);

    let (endorsement, bump) = endorsement_address(&registry, &wallet(), &recipient).unwrap();
    assert_eq!(
        endorsement.to_string(),
        "5yN79968uacrfPVn53ikEeeK8AUu5dRm8Y6XHeMqMYe4"
    );
    assert_eq!(bump, 253);
}

#[test]
fn staking_vectors() {
    let registry = registry();
    let mint = test_address("ghostspeak:test:mint-1");
    let staker = test_address("ghostspeak:test:staker-1");

    let (vault, bump) = staking_vault_address(&registry, &wallet(), &mint).unwrap();
    assert_eq!(vault.to_string(), "A8csMsLog8RmsLHmkK5XcFjeZhZ4autvhuJj5hC3aTAe");
    assert_eq!(bump, 254);

    let (vault_token, bump) = vault_token_address(&registry, &vault).unwrap();
    assert_eq!(
        vault_token.to_string(),
        "3PDpZUXk9G5Y8yvDLvAuYYbQijB6HRkYBJXFMuJ1yYCx"
    );
    assert_eq!(bump, 253);

    let (position, bump) = stake_position_address(&registry, &vault, &staker).unwrap();
    assert_eq!(position.to_string(), "JB4cmJ5QiiK2jUaotYjTNzPfYLJ8HuYhVVc8YowRqrXs");
    assert_eq!(bump, 251);
}

#[test]
fn multisig_vectors() {
    let registry = registry();
    let (authority, bump) = multisig_authority_address(&registry).unwrap();
    assert_eq!(
        authority.to_string(),
        "HUTVZsxD26RgJEnKPRuyyk1ddrvg4GEViwH4eqsNc1CD"
    );
    assert_eq!(bump, 251);

    let (proposal, bump) = multisig_proposal_address(&registry, 7).unwrap();
    assert_eq!(proposal.to_string(), "6wTNLxeMdVb4zwM7vnaZvB9x1pJd1Dpab49SnG3wJkJM");
    assert_eq!(bump, 255);
}

#[test]
fn rejects_over_long_seed() {
    let err = derive_address(&registry().vote, &[&[0u8; 33]]).unwrap_err();
    assert!(matches!(err, DeriveError::SeedTooLong { index: 0, len: 33 }));
}

#[test]
fn rejects_too_many_seeds() {
    let seed: &[u8] = b"x";
    let seed_list = vec![seed; 17];
    let err = derive_address(&registry().vote, &seed_list).unwrap_err();
    assert!(matches!(err, DeriveError::TooManySeeds { count: 17 }));
}

#[test]
fn long_signature_fails_content_rating_derivation() {
    // Real base58 signatures run 87-88 characters, past the 32-byte seed
    // limit. The deployed program carries the same constraint.
    let long_signature = "5".repeat(88);
    assert!(content_rating_address(&registry(), &long_signature).is_err());
}

#[test]
fn derived_addresses_are_off_curve() {
    let (address, _) = agent_identity_address(&registry(), &wallet()).unwrap();
    assert!(!super::is_on_curve(&address.to_bytes()));
}
