use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Transfer type. Stored and sent on the wire as a numeric id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferType {
    /// Funds are pulled from `account_to` into `account_from`
    Request,
    /// Funds are pushed from `account_from` into `account_to`
    Send,
}

impl TransferType {
    pub fn id(self) -> i16 {
        match self {
            TransferType::Request => 1,
            TransferType::Send => 2,
        }
    }

    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            1 => Some(TransferType::Request),
            2 => Some(TransferType::Send),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransferType::Request => "Request",
            TransferType::Send => "Send",
        }
    }
}

/// Transfer lifecycle status.
///
/// Pending -> Approved | Rejected; Approved and Rejected are terminal.
/// Settlement happens exactly once, at the transition into Approved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferStatus {
    Pending,
    Approved,
    Rejected,
}

impl TransferStatus {
    pub fn id(self) -> i16 {
        match self {
            TransferStatus::Pending => 1,
            TransferStatus::Approved => 2,
            TransferStatus::Rejected => 3,
        }
    }

    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            1 => Some(TransferStatus::Pending),
            2 => Some(TransferStatus::Approved),
            3 => Some(TransferStatus::Rejected),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransferStatus::Pending => "Pending",
            TransferStatus::Approved => "Approved",
            TransferStatus::Rejected => "Rejected",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, TransferStatus::Approved | TransferStatus::Rejected)
    }
}

/// Persisted transfer record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Transfer {
    pub transfer_id: i64,
    pub transfer_type_id: i16,
    pub transfer_status_id: i16,
    pub account_from: i64,
    pub account_to: i64,
    #[schema(value_type = String, example = "50.00")]
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Transfer {
    pub fn transfer_type(&self) -> Option<TransferType> {
        TransferType::from_id(self.transfer_type_id)
    }

    pub fn status(&self) -> Option<TransferStatus> {
        TransferStatus::from_id(self.transfer_status_id)
    }
}

/// Client-proposed transfer (POST /transfers body)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewTransfer {
    #[schema(example = 2)]
    pub transfer_type_id: i16,
    #[schema(example = 2)]
    pub transfer_status_id: i16,
    pub account_from: i64,
    pub account_to: i64,
    #[schema(value_type = String, example = "50.00")]
    pub amount: Decimal,
}

/// Transfer with both counterpart usernames resolved for display
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TransferDetail {
    #[serde(flatten)]
    pub transfer: Transfer,
    pub from_username: String,
    pub to_username: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn type_and_status_wire_ids_round_trip() {
        for t in [TransferType::Request, TransferType::Send] {
            assert_eq!(TransferType::from_id(t.id()), Some(t));
        }
        for s in [
            TransferStatus::Pending,
            TransferStatus::Approved,
            TransferStatus::Rejected,
        ] {
            assert_eq!(TransferStatus::from_id(s.id()), Some(s));
        }
        assert_eq!(TransferType::from_id(0), None);
        assert_eq!(TransferStatus::from_id(9), None);
    }

    #[test]
    fn terminal_statuses() {
        assert!(!TransferStatus::Pending.is_terminal());
        assert!(TransferStatus::Approved.is_terminal());
        assert!(TransferStatus::Rejected.is_terminal());
    }

    #[test]
    fn deserialize_new_transfer_from_json() {
        let json = r#"{
            "transfer_type_id": 2,
            "transfer_status_id": 2,
            "account_from": 2001,
            "account_to": 2002,
            "amount": "50.00"
        }"#;
        let new: NewTransfer = serde_json::from_str(json).unwrap();
        assert_eq!(new.transfer_type_id, TransferType::Send.id());
        assert_eq!(new.amount, Decimal::from_str("50.00").unwrap());
    }

    #[test]
    fn deserialize_new_transfer_amount_as_number() {
        // JSON numbers must parse too, not only strings
        let json = r#"{"transfer_type_id":2,"transfer_status_id":1,"account_from":1,"account_to":2,"amount":12.5}"#;
        let new: NewTransfer = serde_json::from_str(json).unwrap();
        assert_eq!(new.amount, Decimal::from_str("12.5").unwrap());
    }

    #[test]
    fn transfer_detail_flattens_transfer_fields() {
        let detail = TransferDetail {
            transfer: Transfer {
                transfer_id: 23,
                transfer_type_id: 2,
                transfer_status_id: 2,
                account_from: 2001,
                account_to: 2002,
                amount: Decimal::from_str("903.14").unwrap(),
                created_at: chrono::Utc::now(),
            },
            from_username: "alice".to_string(),
            to_username: "bernice".to_string(),
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["transfer_id"], 23);
        assert_eq!(json["from_username"], "alice");
        assert_eq!(json["to_username"], "bernice");
    }
}
