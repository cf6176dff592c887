use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Registered user. The password hash never leaves the server.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Balance-holding account, one per user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Account {
    pub account_id: i64,
    pub user_id: i64,
    /// Current balance in TE bucks
    #[schema(value_type = String, example = "1000.00")]
    pub balance: Decimal,
}

/// The subset of a user safe to show to other users when picking a
/// transfer counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ShareableUser {
    pub user_id: i64,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn account_serializes_balance_as_decimal_string() {
        let account = Account {
            account_id: 2001,
            user_id: 1001,
            balance: Decimal::from_str("1000.00").unwrap(),
        };
        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["account_id"], 2001);
        assert_eq!(json["balance"], "1000.00");
    }

    #[test]
    fn shareable_user_round_trip() {
        let json = r#"{"user_id":7,"username":"bernice"}"#;
        let user: ShareableUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.user_id, 7);
        assert_eq!(user.username, "bernice");
        assert_eq!(serde_json::to_string(&user).unwrap(), json);
    }
}
