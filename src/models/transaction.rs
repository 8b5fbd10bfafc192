use serde::Serialize;

use crate::types::{Amount, TransactionId, TransactionKind};

/// A single recorded transaction.
///
/// Transactions are immutable once stored. The parent link is held as a plain id and child
/// relationships are rebuilt from the store's parent index, so no transaction ever owns or
/// borrows another one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Externally supplied unique id.
    pub transaction_id: TransactionId,
    /// Strictly positive amount.
    pub amount: Amount,
    /// Transaction type, matched case-insensitively.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// The transaction this one hangs under, if any. Must exist when this one is created.
    pub parent_id: Option<TransactionId>
}

impl Transaction {
    pub fn new(transaction_id: TransactionId, amount: Amount, kind: TransactionKind, parent_id: Option<TransactionId>) -> Self {
        Self {
            transaction_id,
            amount,
            kind,
            parent_id
        }
    }
}
