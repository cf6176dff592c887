//! End-to-end API tests. Require a running TEbucks server (default
//! http://localhost:8080) with sql/schema.sql applied:
//!
//! ```text
//! psql -f sql/schema.sql && cargo run
//! cargo test --test transfer_flow -- --ignored
//! ```

use rust_decimal::Decimal;
use std::str::FromStr;

use tebucks::client::services::{Services, Session};
use tebucks::transfer::{NewTransfer, TransferStatus, TransferType};

const BASE_URL: &str = "http://localhost:8080";

/// Register and log in a fresh user; return the session and account id.
async fn fresh_user(services: &Services, prefix: &str) -> (Session, i64) {
    let username = format!("{}_{}", prefix, chrono::Utc::now().timestamp_micros());
    services
        .auth
        .register(&username, "password123")
        .await
        .expect("register should succeed");
    let session = services
        .auth
        .login(&username, "password123")
        .await
        .expect("login should succeed");
    let account = services
        .accounts
        .get_account_by_user(&session, session.user_id)
        .await
        .expect("account should exist after registration");
    (session, account.account_id)
}

fn send(from: i64, to: i64, amount: &str) -> NewTransfer {
    NewTransfer {
        transfer_type_id: TransferType::Send.id(),
        transfer_status_id: TransferStatus::Approved.id(),
        account_from: from,
        account_to: to,
        amount: Decimal::from_str(amount).unwrap(),
    }
}

#[tokio::test]
#[ignore]
async fn send_settles_and_conserves_balances() {
    let services = Services::new(BASE_URL);
    let (alice, alice_account) = fresh_user(&services, "e2e_alice").await;
    let (_bob, bob_account) = fresh_user(&services, "e2e_bob").await;

    let transfer = services
        .transfers
        .create_transfer(&alice, &send(alice_account, bob_account, "50.00"))
        .await
        .expect("send should settle");
    assert_eq!(transfer.transfer_status_id, TransferStatus::Approved.id());

    let alice_balance = services
        .accounts
        .get_balance(&alice, alice_account)
        .await
        .expect("balance");
    let bob_balance = services
        .accounts
        .get_balance(&alice, bob_account)
        .await
        .expect("balance");
    assert_eq!(alice_balance, Decimal::from_str("950.00").unwrap());
    assert_eq!(bob_balance, Decimal::from_str("1050.00").unwrap());

    // Round trip with usernames resolved
    let detail = services
        .transfers
        .get_transfer_detail(&alice, transfer.transfer_id)
        .await
        .expect("detail");
    assert_eq!(detail.transfer.amount, transfer.amount);
    assert_eq!(detail.from_username, alice.username);

    // History shows the approved transfer, but not under pending
    let approved = services
        .transfers
        .list_transfers(&alice, alice_account, TransferStatus::Approved.id())
        .await
        .expect("history");
    assert!(approved.iter().any(|t| t.transfer_id == transfer.transfer_id));
    let pending = services
        .transfers
        .list_transfers(&alice, alice_account, TransferStatus::Pending.id())
        .await
        .expect("history");
    assert!(pending.iter().all(|t| t.transfer_id != transfer.transfer_id));
}

#[tokio::test]
#[ignore]
async fn server_rejects_invalid_transfers() {
    let services = Services::new(BASE_URL);
    let (alice, alice_account) = fresh_user(&services, "e2e_val_a").await;
    let (_bob, bob_account) = fresh_user(&services, "e2e_val_b").await;

    // Zero amount
    let result = services
        .transfers
        .create_transfer(&alice, &send(alice_account, bob_account, "0"))
        .await;
    assert!(result.is_err(), "zero amount must be rejected server-side");

    // Self transfer
    let result = services
        .transfers
        .create_transfer(&alice, &send(alice_account, alice_account, "10.00"))
        .await;
    assert!(result.is_err(), "self transfer must be rejected server-side");

    // Overdraft
    let result = services
        .transfers
        .create_transfer(&alice, &send(alice_account, bob_account, "1000.01"))
        .await;
    assert!(result.is_err(), "overdraft must be rejected server-side");

    // Nothing moved
    let balance = services
        .accounts
        .get_balance(&alice, alice_account)
        .await
        .expect("balance");
    assert_eq!(balance, Decimal::from_str("1000.00").unwrap());
}

#[tokio::test]
#[ignore]
async fn protected_routes_require_bearer_token() {
    let http = reqwest::Client::new();
    let resp = http
        .get(format!("{}/accounts/1/balance", BASE_URL))
        .send()
        .await
        .expect("request");
    assert_eq!(resp.status(), reqwest::StatusCode::UNAUTHORIZED);

    let resp = http
        .get(format!("{}/accounts/1/balance", BASE_URL))
        .bearer_auth("not-a-real-token")
        .send()
        .await
        .expect("request");
    assert_eq!(resp.status(), reqwest::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore]
async fn duplicate_registration_conflicts() {
    let services = Services::new(BASE_URL);
    let username = format!("e2e_dup_{}", chrono::Utc::now().timestamp_micros());
    services
        .auth
        .register(&username, "password123")
        .await
        .expect("first registration");
    let second = services.auth.register(&username, "password123").await;
    assert!(second.is_err(), "duplicate username must conflict");
}
