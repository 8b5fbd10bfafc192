use crate::types::TransactionId;
use thiserror::Error;

const TRANSACTION: &str = "Transaction";
const PARENT_TRANSACTION: &str = "Parent Transaction";

#[derive(Debug, Error, PartialEq)]
pub enum TransactionError {
    #[error("Transaction already exists with id: {transaction_id}")]
    AlreadyExists {
        transaction_id: TransactionId
    },
    #[error("{resource} not found with id: {transaction_id}")]
    NotFound {
        resource: &'static str,
        transaction_id: TransactionId
    },
    #[error("Transaction [{transaction_id}] was reached twice while summing, the hierarchy is not a forest")]
    CycleDetected {
        transaction_id: TransactionId
    }
}

impl TransactionError {
    pub fn already_exists(transaction_id: TransactionId) -> Self {
        Self::AlreadyExists { transaction_id }
    }

    pub fn not_found(transaction_id: TransactionId) -> Self {
        Self::NotFound { resource: TRANSACTION, transaction_id }
    }

    pub fn parent_not_found(parent_id: TransactionId) -> Self {
        Self::NotFound { resource: PARENT_TRANSACTION, transaction_id: parent_id }
    }

    pub fn cycle_detected(transaction_id: TransactionId) -> Self {
        Self::CycleDetected { transaction_id }
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True for failures that mean a store invariant was broken rather than a bad request.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::CycleDetected { .. })
    }
}
