//! Façade behavior against the in-memory ledger: derive → read → decode,
//! the absent/corrupt collapse, bulk scans, and instruction building.

mod common;

use common::MockLedger;
use ghostspeak_client::{
    IdentityClient, ReputationClient, StakingClient, ValidationClient, VoteClient,
};
use ghostspeak_codec::discriminator;
use ghostspeak_codec::AccountRecord;
use ghostspeak_crypto::pda;
use ghostspeak_crypto::sha256;
use ghostspeak_types::config::SYSTEM_PROGRAM;
use ghostspeak_types::records::{
    AgentIdentity, ContentType, EndpointValidation, QualityScores, StakeCategory, StakePosition,
    StakingVault, TestResult, TransactionReceipt, VoteType,
};
use ghostspeak_types::{Address, Network, ProgramRegistry};

fn registry() -> ProgramRegistry {
    ProgramRegistry::for_network(Network::Devnet)
}

fn wallet(label: &str) -> Address {
    Address::new(sha256(label.as_bytes()))
}

fn identity_record(agent: Address) -> AgentIdentity {
    AgentIdentity {
        agent_address: agent,
        asset_address: wallet("asset"),
        metadata_uri: "ipfs://meta".into(),
        registration_timestamp: 1_718_000_000,
        last_active_timestamp: 1_718_000_000,
        activity_count: 1,
        is_active: true,
        staked_amount: 0,
        stake_unlock_timestamp: 0,
        slash_count: 0,
        total_slashed: 0,
        bump: 255,
    }
}

#[tokio::test]
async fn fetches_a_registered_identity() {
    let registry = registry();
    let agent = wallet("agent-1");
    let (address, _) = pda::agent_identity_address(&registry, &agent).unwrap();
    let record = identity_record(agent);

    let ledger = MockLedger::new().with_account(registry.identity, address, record.encode());
    let client = IdentityClient::new(registry, ledger);

    let fetched = client.agent_identity(&agent).await.unwrap().unwrap();
    assert_eq!(fetched, record);
}

#[tokio::test]
async fn missing_and_corrupt_both_read_as_none() {
    let registry = registry();
    let agent = wallet("agent-2");
    let (address, _) = pda::agent_identity_address(&registry, &agent).unwrap();

    // Missing entirely.
    let client = IdentityClient::new(registry.clone(), MockLedger::new());
    assert!(client.agent_identity(&agent).await.unwrap().is_none());

    // Present but undecodable: right size and discriminator, hostile string
    // length inside.
    let mut corrupt = identity_record(agent).encode();
    corrupt[72..76].copy_from_slice(&u32::MAX.to_le_bytes());
    let ledger = MockLedger::new().with_account(registry.identity, address, corrupt);
    let client = IdentityClient::new(registry, ledger);
    assert!(client.agent_identity(&agent).await.unwrap().is_none());
}

#[tokio::test]
async fn transport_errors_propagate() {
    let registry = registry();
    let mut ledger = MockLedger::new();
    ledger.fail_transport = true;
    let client = IdentityClient::new(registry, ledger);
    assert!(client.agent_identity(&wallet("agent-3")).await.is_err());
}

#[tokio::test]
async fn bulk_scan_drops_undecodable_accounts() {
    let registry = registry();
    let good_a = identity_record(wallet("scan-a"));
    let good_b = identity_record(wallet("scan-b"));
    let (addr_a, _) = pda::agent_identity_address(&registry, &good_a.agent_address).unwrap();
    let (addr_b, _) = pda::agent_identity_address(&registry, &good_b.agent_address).unwrap();

    // Passes the size and discriminator filters, fails decode.
    let mut corrupt = good_a.encode();
    corrupt[72..76].copy_from_slice(&u32::MAX.to_le_bytes());

    let ledger = MockLedger::new()
        .with_account(registry.identity, addr_a, good_a.encode())
        .with_account(registry.identity, addr_b, good_b.encode())
        .with_account(registry.identity, wallet("corrupt-addr"), corrupt)
        // Wrong size entirely: filtered before decode.
        .with_account(registry.identity, wallet("tiny-addr"), vec![1, 2, 3]);

    let client = IdentityClient::new(registry, ledger);
    let all = client.all_agent_identities().await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.iter().any(|(a, _)| *a == addr_a));
    assert!(all.iter().any(|(a, _)| *a == addr_b));
}

#[test]
fn register_agent_instruction_shape() {
    let registry = registry();
    let agent = wallet("builder");
    let client = IdentityClient::new(registry.clone(), MockLedger::new());
    let instruction = client
        .build_register_agent(&agent, &wallet("asset"), "ipfs://meta")
        .unwrap();

    assert_eq!(instruction.program_id, registry.identity);
    let (identity_pda, _) = pda::agent_identity_address(&registry, &agent).unwrap();
    assert_eq!(instruction.accounts[0].address, identity_pda);
    assert!(instruction.accounts[0].is_writable);
    assert!(!instruction.accounts[0].is_signer);
    assert_eq!(instruction.accounts[1].address, agent);
    assert!(instruction.accounts[1].is_signer);
    assert!(instruction.accounts[1].is_writable);
    assert_eq!(instruction.accounts[2].address, SYSTEM_PROGRAM);
    assert_eq!(&instruction.data[..8], &discriminator::identity::REGISTER_AGENT);
}

#[test]
fn cast_peer_vote_instruction_shape() {
    let registry = registry();
    let voter = wallet("voter");
    let voted = wallet("voted");
    let receipt = wallet("receipt-address");
    let client = VoteClient::new(registry.clone(), MockLedger::new());

    let instruction = client
        .build_cast_peer_vote(
            &voter,
            &receipt,
            &voted,
            VoteType::Upvote,
            &QualityScores::default(),
            &[0u8; 32],
        )
        .unwrap();

    assert_eq!(instruction.program_id, registry.vote);
    assert_eq!(instruction.accounts.len(), 9);
    let (vote_pda, _) = pda::peer_vote_address(&registry, &receipt).unwrap();
    assert_eq!(instruction.accounts[0].address, vote_pda);
    assert_eq!(instruction.accounts[1].address, receipt);
    assert!(instruction.accounts[1].is_writable);
    assert_eq!(instruction.accounts[5].address, voter);
    assert!(instruction.accounts[5].is_signer);
    assert_eq!(instruction.accounts[6].address, registry.identity);
    assert_eq!(instruction.accounts[7].address, registry.reputation);
    assert_eq!(instruction.accounts[8].address, SYSTEM_PROGRAM);
    assert_eq!(&instruction.data[..8], &discriminator::vote::CAST_PEER_VOTE);
}

#[tokio::test]
async fn receipt_fetch_and_vote_gate() {
    let registry = registry();
    let payer = wallet("payer");
    let recipient = wallet("recipient");
    let signature = "receiptsig";
    let (address, _) =
        pda::transaction_receipt_address(&registry, &payer, &recipient, signature).unwrap();

    let record = TransactionReceipt {
        signature: signature.into(),
        payer,
        recipient,
        amount: 500_000_000,
        timestamp: 1_719_000_000,
        content_type: ContentType::ApiResponse,
        vote_cast: false,
        bump: 255,
    };
    let ledger = MockLedger::new().with_account(registry.vote, address, record.encode());
    let client = VoteClient::<MockLedger>::new(registry, ledger);

    let fetched = client
        .transaction_receipt(&payer, &recipient, signature)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched, record);

    // Both parties may vote inside the window; a stranger never may.
    let now = record.timestamp + 1;
    assert!(VoteClient::<MockLedger>::can_vote(&fetched, &payer, now));
    assert!(VoteClient::<MockLedger>::can_vote(&fetched, &recipient, now));
    assert!(!VoteClient::<MockLedger>::can_vote(&fetched, &wallet("stranger"), now));

    // Half a token buys a 1.5x vote.
    assert_eq!(VoteClient::<MockLedger>::expected_vote_weight(&fetched), 150);
}

#[tokio::test]
async fn positions_scan_filters_by_vault() {
    let registry = registry();
    let vault_a = wallet("vault-a");
    let vault_b = wallet("vault-b");

    let position = |vault: Address, staker: &str| StakePosition {
        vault,
        staker: wallet(staker),
        target_agent: wallet("target"),
        token_mint: wallet("mint"),
        amount: 5_000_000,
        category: StakeCategory::General,
        trust_weight: 22,
        staked_at: 0,
        locked_until: 0,
        unstaked_at: 0,
        is_active: true,
        is_slashed: false,
        bump: 250,
    };

    let ledger = MockLedger::new()
        .with_account(registry.staking, wallet("p1"), position(vault_a, "s1").encode())
        .with_account(registry.staking, wallet("p2"), position(vault_a, "s2").encode())
        .with_account(registry.staking, wallet("p3"), position(vault_b, "s3").encode());
    let client = StakingClient::new(registry, ledger);

    let for_a = client.positions_for_vault(&vault_a).await.unwrap();
    assert_eq!(for_a.len(), 2);
    assert!(for_a.iter().all(|(_, p)| p.vault == vault_a));

    let (total_weight, stakers) = StakingClient::<MockLedger>::vault_stake_totals(&for_a);
    assert_eq!(total_weight, 44);
    assert_eq!(stakers, 2);
}

#[test]
fn expected_trust_weight_uses_the_vault_multiplier() {
    let vault = StakingVault {
        target_agent: wallet("target"),
        token_mint: wallet("mint"),
        vault_token_account: wallet("vault-token"),
        min_stake_amount: 1_000_000,
        lock_period_seconds: 604_800,
        weight_multiplier: 200,
        total_staked: 0,
        total_stakers: 0,
        authority: wallet("authority"),
        is_active: true,
        is_verified: false,
        created_at: 0,
        updated_at: 0,
        bump: 254,
        vault_bump: 253,
    };
    // log2(2^20) * 200 / 100 = 40.
    assert_eq!(
        StakingClient::<MockLedger>::expected_trust_weight(&vault, (1 << 20) - 1),
        40
    );
}

#[tokio::test]
async fn validation_fetch_and_stamp_helpers() {
    let registry = registry();
    let url = "https://api.example.com/v1/chat";
    let (address, bump) = pda::validation_address(&registry, url).unwrap();

    let passing = TestResult {
        llm_model: "gpt-4".into(),
        success: true,
        response_time: 800,
        score: 90,
    };
    let record = EndpointValidation {
        endpoint_hash: sha256(url.as_bytes()),
        endpoint_url: url.into(),
        provider_agent: wallet("provider"),
        test_results: vec![passing.clone(), passing.clone(), passing],
        consensus_score: 0,
        stamp_issued: false,
        timestamp: 1_719_000_000,
        bump,
    };
    let ledger = MockLedger::new().with_account(registry.validation, address, record.encode());
    let client = ValidationClient::new(registry, ledger);

    let fetched = client.validation(url).await.unwrap().unwrap();
    // avg 90 -> 630, rate 1.0 -> 200, count 3 -> 60.
    assert_eq!(ValidationClient::<MockLedger>::expected_consensus(&fetched), 890);
    assert!(ValidationClient::<MockLedger>::stamp_eligible(&fetched));

    let mut two_tests = fetched.clone();
    two_tests.test_results.pop();
    assert!(!ValidationClient::<MockLedger>::stamp_eligible(&two_tests));
}

#[tokio::test]
async fn probe_reputation_runs_through_simulation() {
    let registry = registry();
    let client = ReputationClient::new(registry.clone(), MockLedger::new());
    let outcome = client.probe_reputation(&wallet("probed")).await.unwrap();
    assert!(outcome.err.is_none());
    assert_eq!(outcome.logs.len(), 1);
    assert!(outcome.logs[0].contains(&registry.reputation.to_string()));
}
