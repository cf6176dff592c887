//! TEbucks terminal client: a two-level blocking menu loop over the REST API.

use rust_decimal::Decimal;

use tebucks::client::console;
use tebucks::client::services::{Services, Session};
use tebucks::transfer::{NewTransfer, TransferStatus, TransferType};

fn get_base_url() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--url" && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "http://localhost:8080".to_string()
}

#[tokio::main]
async fn main() {
    let services = Services::new(&get_base_url());

    console::print_greeting();
    if let Some(session) = login_menu(&services).await {
        main_menu(&services, &session).await;
    }
}

/// Pre-login loop: register, login or exit. Returns a session on login.
async fn login_menu(services: &Services) -> Option<Session> {
    loop {
        console::print_login_menu();
        match console::prompt_for_int("Please choose an option: ") {
            0 => return None,
            1 => handle_register(services).await,
            2 => {
                if let Some(session) = handle_login(services).await {
                    return Some(session);
                }
            }
            _ => println!("Invalid Selection"),
        }
    }
}

async fn handle_register(services: &Services) {
    println!("Please register a new user account");
    let (username, password) = console::prompt_for_credentials();
    match services.auth.register(&username, &password).await {
        Ok(_) => println!("Registration successful. You can now login."),
        Err(e) => println!("Registration failed: {}", e),
    }
}

async fn handle_login(services: &Services) -> Option<Session> {
    let (username, password) = console::prompt_for_credentials();
    match services.auth.login(&username, &password).await {
        Ok(session) => Some(session),
        Err(e) => {
            println!("Login failed: {}", e);
            None
        }
    }
}

/// Post-login loop.
async fn main_menu(services: &Services, session: &Session) {
    loop {
        console::print_main_menu();
        match console::prompt_for_int("Please choose an option: ") {
            0 => return,
            1 => view_current_balance(services, session).await,
            2 => view_transfer_history(services, session).await,
            3 => view_pending_requests(services, session).await,
            4 => send_bucks(services, session).await,
            5 => println!("Requesting TE bucks is not available yet."),
            _ => println!("Invalid Selection"),
        }
    }
}

async fn own_account_id(services: &Services, session: &Session) -> Option<i64> {
    match services
        .accounts
        .get_account_by_user(session, session.user_id)
        .await
    {
        Ok(account) => Some(account.account_id),
        Err(e) => {
            println!("Could not load your account: {}", e);
            None
        }
    }
}

async fn view_current_balance(services: &Services, session: &Session) {
    let Some(account_id) = own_account_id(services, session).await else {
        return;
    };
    match services.accounts.get_balance(session, account_id).await {
        Ok(balance) => println!("Your current account balance is: ${}", balance),
        Err(e) => println!("Could not load your balance: {}", e),
    }
}

async fn view_transfer_history(services: &Services, session: &Session) {
    let Some(account_id) = own_account_id(services, session).await else {
        return;
    };
    let transfers = match services
        .transfers
        .list_transfers(session, account_id, TransferStatus::Approved.id())
        .await
    {
        Ok(t) => t,
        Err(e) => {
            println!("Could not load transfers: {}", e);
            return;
        }
    };

    console::print_history_header();
    for transfer in &transfers {
        let counterpart_account = if transfer.account_from == account_id {
            transfer.account_to
        } else {
            transfer.account_from
        };
        let counterpart = match services
            .transfers
            .get_account_owner(session, counterpart_account)
            .await
        {
            Ok(user) => user.username,
            Err(_) => "<unknown>".to_string(),
        };
        println!(
            "{}",
            console::format_history_line(
                transfer.transfer_id,
                account_id,
                transfer.account_from,
                &counterpart,
                transfer.amount,
            )
        );
    }

    // Drill-down: 0 cancels, unknown ids report an error
    let transfer_id = console::prompt_for_int("Please enter transfer ID to view details (0 to cancel): ");
    if transfer_id == 0 {
        return;
    }
    if transfers.iter().any(|t| t.transfer_id == transfer_id) {
        match services
            .transfers
            .get_transfer_detail(session, transfer_id)
            .await
        {
            Ok(detail) => console::print_transfer_details(&detail),
            Err(e) => println!("Could not load transfer details: {}", e),
        }
    } else {
        println!("You have entered an invalid transfer ID.");
    }
}

async fn view_pending_requests(services: &Services, session: &Session) {
    let Some(account_id) = own_account_id(services, session).await else {
        return;
    };
    match services
        .transfers
        .list_transfers(session, account_id, TransferStatus::Pending.id())
        .await
    {
        Ok(transfers) if transfers.is_empty() => println!("No pending requests."),
        Ok(transfers) => {
            console::print_history_header();
            for transfer in &transfers {
                println!(
                    "{:<12} Pending             $ {}",
                    transfer.transfer_id, transfer.amount
                );
            }
        }
        Err(e) => println!("Could not load pending requests: {}", e),
    }
}

async fn send_bucks(services: &Services, session: &Session) {
    let users = match services.transfers.find_transfer_candidates(session).await {
        Ok(users) => users,
        Err(e) => {
            println!("Could not load users: {}", e);
            return;
        }
    };
    console::print_users(&users);

    // Pick a counterpart by user id; 0 cancels
    let target = loop {
        let id = console::prompt_for_int("Enter ID of user you are sending to (0 to cancel): ");
        if id == 0 {
            return;
        }
        if id == session.user_id {
            println!("It is impossible to send money to yourself.");
            continue;
        }
        match users.iter().find(|u| u.user_id == id) {
            Some(user) => break user.clone(),
            None => println!("The ID you have entered is invalid."),
        }
    };

    let Some(account_from) = own_account_id(services, session).await else {
        return;
    };
    let account_to = match services
        .accounts
        .get_account_by_user(session, target.user_id)
        .await
    {
        Ok(account) => account.account_id,
        Err(e) => {
            println!("Could not load that user's account: {}", e);
            return;
        }
    };

    let amount = console::prompt_for_amount("Enter amount: ");

    // Local check against the displayed balance; the server re-validates
    // inside the settlement transaction.
    let balance = match services.accounts.get_balance(session, account_from).await {
        Ok(b) => b,
        Err(e) => {
            println!("Could not load your balance: {}", e);
            return;
        }
    };
    if amount <= Decimal::ZERO || amount > balance {
        println!(
            "You have entered an invalid amount. The transfer amount must be greater than 0 \
             and cannot be greater than your account balance"
        );
        return;
    }

    let new = NewTransfer {
        transfer_type_id: TransferType::Send.id(),
        // Sends settle immediately
        transfer_status_id: TransferStatus::Approved.id(),
        account_from,
        account_to,
        amount,
    };
    match services.transfers.create_transfer(session, &new).await {
        Ok(transfer) => {
            match services
                .transfers
                .get_transfer_detail(session, transfer.transfer_id)
                .await
            {
                Ok(detail) => console::print_transfer_details(&detail),
                Err(_) => println!("Transfer {} created.", transfer.transfer_id),
            }
        }
        Err(e) => println!("Transfer failed: {}", e),
    }
}
