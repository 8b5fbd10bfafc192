use crate::models::{Transaction, TransactionError};
use crate::storage::{Storage, TransactionStorage};
use crate::types::{Amount, TransactionId, TransactionKind};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Enforces creation rules on top of a [`Storage`] and computes hierarchical sums.
///
/// The engine holds no state of its own beyond the injected store, so it is cheap to share
/// behind an `Arc` and safe to call from many requests at once.
pub struct AggregationEngine<S: Storage = TransactionStorage> {
    storage: Arc<S>
}

impl<S: Storage> AggregationEngine<S> {
    /// Creates a new engine over the provided storage.
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Records a new transaction.
    ///
    /// `amount` and `kind` arrive already validated. The parent, when given, must already be
    /// stored, which is what keeps the hierarchy acyclic.
    ///
    /// # Errors
    /// - `AlreadyExists` if `transaction_id` is taken, including when a concurrent insert of the
    ///   same id wins the race.
    /// - `NotFound` naming the parent if `parent_id` is not stored.
    pub fn create_transaction(
        &self,
        transaction_id: TransactionId,
        amount: Amount,
        kind: TransactionKind,
        parent_id: Option<TransactionId>
    ) -> Result<(), TransactionError> {
        info!("Processing new transaction [{transaction_id}]");

        if self.storage.get(transaction_id).is_some() {
            warn!("Transaction [{transaction_id}] already exists");
            return Err(TransactionError::already_exists(transaction_id));
        }

        if let Some(parent_id) = parent_id {
            if self.storage.get(parent_id).is_none() {
                warn!("Parent transaction [{parent_id}] not found for transaction [{transaction_id}]");
                return Err(TransactionError::parent_not_found(parent_id));
            }
        }

        let transaction = Transaction::new(transaction_id, amount, kind, parent_id);
        let description = format!("type={}, amount={}, parent={:?}", transaction.kind, transaction.amount, parent_id);

        self.storage.insert(transaction).inspect_err(|_| {
            warn!("Transaction [{transaction_id}] was created concurrently by another request");
        })?;

        info!("Transaction [{transaction_id}] created: {description}");

        Ok(())
    }

    /// Ids of every transaction whose type matches `kind` ignoring case. Unknown kinds yield an
    /// empty list.
    pub fn list_ids_by_kind(&self, kind: &str) -> Vec<TransactionId> {
        info!("Listing transactions of type [{kind}]");

        self.storage.find_by_kind(kind)
            .into_iter()
            .map(|transaction| transaction.transaction_id)
            .collect()
    }

    pub fn get_transaction(&self, transaction_id: TransactionId) -> Result<Transaction, TransactionError> {
        self.storage.get(transaction_id)
            .ok_or_else(|| TransactionError::not_found(transaction_id))
    }

    /// Sum of the amount of `transaction_id` and of all of its descendants.
    ///
    /// The walk uses an explicit stack, so hierarchy depth is bounded by memory and not by the
    /// call stack. Inserts racing with the walk may or may not be counted, but no node is ever
    /// counted twice.
    ///
    /// # Errors
    /// - `NotFound` if `transaction_id` is not stored. A missing root is an error, never a zero sum.
    /// - `CycleDetected` if a node is reached twice, which the insert rules make impossible.
    pub fn sum_subtree(&self, transaction_id: TransactionId) -> Result<f64, TransactionError> {
        info!("Summing hierarchy under transaction [{transaction_id}]");

        let root = self.storage.get(transaction_id).ok_or_else(|| {
            warn!("Transaction [{transaction_id}] not found");
            TransactionError::not_found(transaction_id)
        })?;

        let mut total = 0.0 + root.amount;
        let mut visited = HashSet::from([root.transaction_id]);
        let mut pending = vec![root.transaction_id];

        while let Some(node_id) = pending.pop() {
            for child in self.storage.find_children(node_id) {
                if !visited.insert(child.transaction_id) {
                    error!("Transaction [{}] reached twice under [{transaction_id}]", child.transaction_id);
                    return Err(TransactionError::cycle_detected(child.transaction_id));
                }

                total += child.amount;
                pending.push(child.transaction_id);
            }
        }

        debug!("Summed {} transactions under [{transaction_id}]: {total}", visited.len());

        Ok(total)
    }

    /// Removes every stored transaction.
    pub fn reset(&self) {
        info!("Clearing all transactions");
        self.storage.clear();
    }
}
