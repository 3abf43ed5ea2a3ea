use crate::{api::*, ctx::*, utils::*};
use crowdfunding_client::{
    config::{CAMPAIGN_SEED, MAX_NAME_LEN},
    derive_campaign_address, ClientError, ErrorKind, InterfaceDefinition, InvocationError,
    TransportError, WalletError,
};
use crowdfunding::state::Campaign;
use solana_sdk::{
    account::Account, commitment_config::CommitmentLevel, signature::Keypair, signer::Signer,
    system_program,
};

pub async fn test_campaign() {
    test_create_campaign().await;
    test_signature_rejected().await;
    test_duplicate_submission().await;
    test_unfunded_payer().await;
    test_rent_shortfall().await;
    test_rpc_failure().await;
    test_oversized_payload().await;
    test_commitment_is_forwarded().await;
    test_interface_mismatch().await;
    test_fetch_foreign_account().await;
}

async fn test_create_campaign() {
    let ctx = Ctx::new();
    ctx.airdrop();
    let user = &ctx.users[0];
    let connection = ctx.connection();
    let session = connected_session(user, Script::Approve).await;

    let campaign = create(&connection, &session, "Campaign Name", "Campaign Description")
        .await
        .unwrap();
    assert_eq!(
        campaign,
        derive_campaign_address(CAMPAIGN_SEED, &user.pubkey(), &crowdfunding::ID).unwrap()
    );

    let record = fetch(&connection, &session, &campaign.address).await.unwrap();
    assert_eq!(record.name, "Campaign Name");
    assert_eq!(record.description, "Campaign Description");
    assert_eq!(record.admin, user.pubkey());
    assert_eq!(record.bump, campaign.bump);
    assert_eq!(record.amount_donated, 0);

    assert_eq!(ctx.ledger.writes(), 1);
    assert_eq!(
        ctx.ledger.balance(&user.pubkey()),
        AIRDROP_LAMPORTS - CAMPAIGN_RENT
    );
}

async fn test_signature_rejected() {
    let ctx = Ctx::new();
    ctx.airdrop();
    let user = &ctx.users[0];
    let connection = ctx.connection();
    let session = connected_session(user, Script::RejectSignature).await;

    let err = create(&connection, &session, "Campaign Name", "Campaign Description")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ClientError::Invocation(InvocationError::SignatureRejected(
            WalletError::UserRejected
        ))
    );
    assert_eq!(err.kind(), ErrorKind::Invocation);

    let campaign = derive_campaign_address(CAMPAIGN_SEED, &user.pubkey(), &crowdfunding::ID).unwrap();
    assert_eq!(ctx.ledger.submitted(), 0);
    assert_eq!(ctx.ledger.writes(), 0);
    assert!(!ctx.ledger.contains(&campaign.address));
    assert_eq!(ctx.ledger.balance(&user.pubkey()), AIRDROP_LAMPORTS);
}

/// Submissions are not deduplicated: the first lands, the second is refused
/// by the program because the account already exists.
async fn test_duplicate_submission() {
    let ctx = Ctx::new();
    ctx.airdrop();
    let user = &ctx.users[1];
    let connection = ctx.connection();
    let session = connected_session(user, Script::Approve).await;

    let (first, second) = tokio::join!(
        create(&connection, &session, "first", "first submission"),
        create(&connection, &session, "second", "second submission"),
    );
    let campaign = derive_campaign_address(CAMPAIGN_SEED, &user.pubkey(), &crowdfunding::ID).unwrap();

    let results = [first, second];
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results.contains(&Ok(campaign)));
    assert!(results.contains(&Err(ClientError::Invocation(
        InvocationError::AccountAlreadyExists(campaign.address)
    ))));

    assert_eq!(ctx.ledger.submitted(), 2);
    assert_eq!(ctx.ledger.writes(), 1);
    let record = fetch(&connection, &session, &campaign.address).await.unwrap();
    assert!(record.name == "first" || record.name == "second");
}

/// A wallet that was never credited is stopped before the program runs.
async fn test_unfunded_payer() {
    let ctx = Ctx::new();
    let user = Keypair::new();
    let connection = ctx.connection();
    let session = connected_session(&user, Script::Approve).await;

    let err = create(&connection, &session, "Campaign Name", "Campaign Description")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ClientError::Invocation(InvocationError::InsufficientFunds)
    );
    assert_eq!(err.kind(), ErrorKind::Invocation);
    assert_eq!(ctx.ledger.submitted(), 1);
    assert_eq!(ctx.ledger.writes(), 0);
    let campaign = derive_campaign_address(CAMPAIGN_SEED, &user.pubkey(), &crowdfunding::ID).unwrap();
    assert!(fetch(&connection, &session, &campaign.address)
        .await
        .is_none());
}

async fn test_rent_shortfall() {
    let ctx = Ctx::new();
    let user = Keypair::new();
    ctx.ledger.fund(user.pubkey(), CAMPAIGN_RENT - 1);
    let connection = ctx.connection();
    let session = connected_session(&user, Script::Approve).await;

    assert_eq!(
        create(&connection, &session, "Campaign Name", "Campaign Description").await,
        Err(ClientError::Invocation(InvocationError::InsufficientFunds))
    );
    assert_eq!(ctx.ledger.writes(), 0);
    assert_eq!(ctx.ledger.balance(&user.pubkey()), CAMPAIGN_RENT - 1);
    let campaign = derive_campaign_address(CAMPAIGN_SEED, &user.pubkey(), &crowdfunding::ID).unwrap();
    assert!(!ctx.ledger.contains(&campaign.address));
}

async fn test_rpc_failure() {
    let ctx = Ctx::new();
    ctx.airdrop();
    let connection = ctx.connection();
    let session = connected_session(&ctx.users[0], Script::Approve).await;

    let timeout = TransportError::Rpc("request timed out".into());
    ctx.ledger.fail_next(timeout.clone());
    let err = create(&connection, &session, "Campaign Name", "Campaign Description")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ClientError::Invocation(InvocationError::Transport(timeout))
    );
    assert_eq!(err.kind(), ErrorKind::Invocation);
    assert_eq!(ctx.ledger.writes(), 0);

    // a fresh user action succeeds
    create(&connection, &session, "Campaign Name", "Campaign Description")
        .await
        .unwrap();
    assert_eq!(ctx.ledger.writes(), 1);
}

async fn test_oversized_payload() {
    let ctx = Ctx::new();
    ctx.airdrop();
    let connection = ctx.connection();
    let session = connected_session(&ctx.users[0], Script::Approve).await;

    let name = "n".repeat(MAX_NAME_LEN + 1);
    let err = create(&connection, &session, &name, "Campaign Description")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ClientError::Invocation(InvocationError::InvalidPayload(_))
    ));
    assert_eq!(ctx.ledger.submitted(), 0);
    assert!(ctx.ledger.commitments().is_empty());
}

async fn test_commitment_is_forwarded() {
    let ctx = Ctx::new();
    ctx.airdrop();
    let connection = ctx.connection_with(CommitmentLevel::Finalized);
    let session = connected_session(&ctx.users[2], Script::Approve).await;

    let campaign = create(&connection, &session, "Campaign Name", "Campaign Description")
        .await
        .unwrap();
    fetch(&connection, &session, &campaign.address).await.unwrap();

    let commitments = ctx.ledger.commitments();
    assert_eq!(commitments.len(), 3);
    assert!(commitments.iter().all(|c| *c == CommitmentLevel::Finalized));
}

async fn test_interface_mismatch() {
    let ctx = Ctx::new();
    ctx.airdrop();
    let connection = ctx.connection();
    let session = connected_session(&ctx.users[0], Script::Approve).await;

    let renamed = include_str!("../../idl/crowdfunding.json").replace("\"description\"", "\"details\"");
    let interface = InterfaceDefinition::from_json(&renamed).unwrap();
    let err = create_with(&interface, &connection, &session, "Campaign Name", "Campaign Description")
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Interface(_)));
    assert_eq!(err.kind(), ErrorKind::Invocation);
    assert_eq!(ctx.ledger.submitted(), 0);
    assert!(ctx.ledger.commitments().is_empty());
}

async fn test_fetch_foreign_account() {
    let ctx = Ctx::new();
    ctx.airdrop();
    let connection = ctx.connection();
    let session = connected_session(&ctx.users[0], Script::Approve).await;

    let foreign = Keypair::new().pubkey();
    ctx.ledger.insert_account(
        foreign,
        Account {
            lamports: CAMPAIGN_RENT,
            data: vec![0; 8 + Campaign::SPACE],
            owner: system_program::ID,
            executable: false,
            rent_epoch: 0,
        },
    );
    assert!(matches!(
        try_fetch(&connection, &session, &foreign).await,
        Err(TransportError::UnexpectedAccount(address, _)) if address == foreign
    ));

    // owned by the program but not a campaign
    let garbage = Keypair::new().pubkey();
    ctx.ledger.insert_account(
        garbage,
        Account {
            lamports: CAMPAIGN_RENT,
            data: vec![0xff; 16],
            owner: crowdfunding::ID,
            executable: false,
            rent_epoch: 0,
        },
    );
    assert!(matches!(
        try_fetch(&connection, &session, &garbage).await,
        Err(TransportError::UnexpectedAccount(address, _)) if address == garbage
    ));
}
