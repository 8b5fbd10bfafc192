use super::{Transaction, TransactionError};

use anyhow::Result;
use serde_json::json;

use crate::types::{Amount, TransactionId, TransactionKind};

fn create_transaction(transaction_id: TransactionId, amount: f64, kind: &str, parent_id: Option<TransactionId>) -> Result<Transaction> {
    Ok(Transaction::new(transaction_id, Amount::new(amount)?, TransactionKind::new(kind)?, parent_id))
}

#[test]
fn test_transaction_keeps_optional_parent_link() -> Result<()> {
    let root = create_transaction(10, 5000.0, "cars", None)?;
    let child = create_transaction(11, 10000.0, "shopping", Some(10))?;

    assert_eq!(root.parent_id, None);
    assert_eq!(child.parent_id, Some(10));

    Ok(())
}

#[test]
fn test_transaction_serializes_with_wire_field_names() -> Result<()> {
    let transaction = create_transaction(11, 10000.0, "Shopping", Some(10))?;

    let value = serde_json::to_value(&transaction)?;

    assert_eq!(value, json!({
        "transactionId": 11,
        "amount": 10000.0,
        "type": "Shopping",
        "parentId": 10
    }));

    Ok(())
}

#[test]
fn test_error_messages_name_the_missing_resource() {
    assert_eq!(TransactionError::already_exists(2000).to_string(), "Transaction already exists with id: 2000");
    assert_eq!(TransactionError::not_found(99).to_string(), "Transaction not found with id: 99");
    assert_eq!(TransactionError::parent_not_found(7).to_string(), "Parent Transaction not found with id: 7");
}

#[test]
fn test_error_classification_is_mutually_exclusive() {
    let already_exists = TransactionError::already_exists(1);
    let parent_not_found = TransactionError::parent_not_found(1);
    let not_found = TransactionError::not_found(1);
    let cycle = TransactionError::cycle_detected(1);

    assert!(already_exists.is_already_exists() && !already_exists.is_not_found() && !already_exists.is_internal());
    assert!(parent_not_found.is_not_found() && !parent_not_found.is_internal());
    assert!(not_found.is_not_found() && !not_found.is_already_exists());
    assert!(cycle.is_internal() && !cycle.is_not_found() && !cycle.is_already_exists());
}
