mod transaction_storage;

use crate::models::{Transaction, TransactionError};
use crate::types::TransactionId;

pub use transaction_storage::TransactionStorage;

/// Concurrent, insert-only transaction store.
///
/// Implementations synchronize internally; every method may be called from any number of
/// threads without outside locking. Sequences returned by the lookup methods have no defined
/// order.
pub trait Storage: Send + Sync + 'static {
    /// Stores `transaction` unless its id is already taken. Of two concurrent inserts with the
    /// same id exactly one succeeds, the other gets `AlreadyExists`.
    fn insert(&self, transaction: Transaction) -> Result<(), TransactionError>;
    fn get(&self, transaction_id: TransactionId) -> Option<Transaction>;
    /// All transactions whose type matches `kind` ignoring case.
    fn find_by_kind(&self, kind: &str) -> Vec<Transaction>;
    fn find_children(&self, parent_id: TransactionId) -> Vec<Transaction>;
    fn all(&self) -> Vec<Transaction>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Drops every stored transaction. Only meant for resetting state between scenarios.
    fn clear(&self);
}
