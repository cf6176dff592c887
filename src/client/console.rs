//! Console prompts and formatting for the menu loop.

use std::io::{self, Write};

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::account::ShareableUser;
use crate::transfer::{TransferDetail, TransferStatus, TransferType};

pub fn print_greeting() {
    println!("*********************");
    println!("* Welcome to TEbucks! *");
    println!("*********************");
}

pub fn print_login_menu() {
    println!();
    println!("1: Register");
    println!("2: Login");
    println!("0: Exit");
}

pub fn print_main_menu() {
    println!();
    println!("1: View your current balance");
    println!("2: View your past transfers");
    println!("3: View your pending requests");
    println!("4: Send TE bucks");
    println!("5: Request TE bucks");
    println!("0: Exit");
}

pub fn print_error_message() {
    println!("An error occurred. Check the log for details.");
}

fn read_line() -> String {
    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn prompt(message: &str) -> String {
    print!("{}", message);
    let _ = io::stdout().flush();
    read_line()
}

/// Parse a menu selection / id. Returns None on anything non-numeric.
pub fn parse_int(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

/// Parse a money amount typed by the user.
pub fn parse_amount(input: &str) -> Option<Decimal> {
    Decimal::from_str(input.trim()).ok()
}

/// Keep prompting until the user enters a whole number.
pub fn prompt_for_int(message: &str) -> i64 {
    loop {
        match parse_int(&prompt(message)) {
            Some(n) => return n,
            None => println!("Please enter a number."),
        }
    }
}

/// Keep prompting until the user enters a decimal amount.
pub fn prompt_for_amount(message: &str) -> Decimal {
    loop {
        match parse_amount(&prompt(message)) {
            Some(d) => return d,
            None => println!("Please enter a decimal amount."),
        }
    }
}

/// Collect username and password.
pub fn prompt_for_credentials() -> (String, String) {
    let username = prompt("Username: ");
    let password = prompt("Password: ");
    (username, password)
}

pub fn print_users(users: &[ShareableUser]) {
    println!("-------------------------------------------");
    println!("Users");
    println!("ID           Name");
    println!("-------------------------------------------");
    for user in users {
        println!("{:<12} {}", user.user_id, user.username);
    }
}

/// One line of the transfer history table, relative to the viewing account.
pub fn format_history_line(
    transfer_id: i64,
    own_account_id: i64,
    account_from: i64,
    counterpart: &str,
    amount: Decimal,
) -> String {
    let direction = if account_from == own_account_id {
        "To:  "
    } else {
        "From:"
    };
    format!("{:<12} {} {:<18} $ {}", transfer_id, direction, counterpart, amount)
}

pub fn print_history_header() {
    println!("-------------------------------------------");
    println!("Transfers");
    println!("ID           From/To             Amount");
    println!("-------------------------------------------");
}

pub fn print_transfer_details(detail: &TransferDetail) {
    let transfer = &detail.transfer;
    let type_name = TransferType::from_id(transfer.transfer_type_id)
        .map(TransferType::as_str)
        .unwrap_or("Unknown");
    let status_name = TransferStatus::from_id(transfer.transfer_status_id)
        .map(TransferStatus::as_str)
        .unwrap_or("Unknown");

    println!("-------------------------------------------");
    println!("Transfer Details");
    println!("-------------------------------------------");
    println!(" Id: {}", transfer.transfer_id);
    println!(" From: {}", detail.from_username);
    println!(" To: {}", detail.to_username);
    println!(" Type: {}", type_name);
    println!(" Status: {}", status_name);
    println!(" Amount: ${}", transfer.amount);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_int_accepts_trimmed_numbers() {
        assert_eq!(parse_int(" 42 \n"), Some(42));
        assert_eq!(parse_int("0"), Some(0));
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("4.2"), None);
        assert_eq!(parse_int(""), None);
    }

    #[test]
    fn parse_amount_accepts_decimals() {
        assert_eq!(parse_amount("50"), Some(Decimal::from(50)));
        assert_eq!(parse_amount(" 12.34 "), Decimal::from_str("12.34").ok());
        assert_eq!(parse_amount("ten"), None);
    }

    #[test]
    fn history_line_direction_follows_own_account() {
        let amount = Decimal::from_str("903.14").unwrap();
        let outgoing = format_history_line(23, 2001, 2001, "bernice", amount);
        assert!(outgoing.contains("To:"));
        assert!(outgoing.contains("bernice"));

        let incoming = format_history_line(24, 2001, 2002, "bernice", amount);
        assert!(incoming.contains("From:"));
    }
}
