use crate::models::{Transaction, TransactionError};
use crate::storage::Storage;
use crate::types::{TransactionId, TransactionKind};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::hash::Hash;
use tracing::trace;

/// In-memory store backed by `DashMap`.
///
/// Transactions live in a primary map keyed by id. Two secondary indexes map a parent id to its
/// children and a folded type key to the ids of that type, so neither lookup scans the store.
///
/// Lock ordering: an insert releases its primary shard before touching an index, and readers
/// copy ids out of an index before resolving them against the primary map. No thread ever holds
/// a shard of one map while waiting on another.
pub struct TransactionStorage {
    transactions: DashMap<TransactionId, Transaction>,
    children: DashMap<TransactionId, Vec<TransactionId>>,
    kinds: DashMap<String, Vec<TransactionId>>
}

impl TransactionStorage {
    pub fn new() -> Self {
        Self {
            transactions: DashMap::new(),
            children: DashMap::new(),
            kinds: DashMap::new()
        }
    }

    fn resolve(&self, transaction_ids: Vec<TransactionId>) -> Vec<Transaction> {
        //NOTE: An id can sit in an index for a moment after its primary entry was dropped by clear(), skip those
        transaction_ids.into_iter()
            .filter_map(|transaction_id| self.get(transaction_id))
            .collect()
    }

    fn indexed_ids<K: Eq + Hash>(index: &DashMap<K, Vec<TransactionId>>, key: &K) -> Vec<TransactionId> {
        index.get(key)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }
}

impl Default for TransactionStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for TransactionStorage {
    fn insert(&self, transaction: Transaction) -> Result<(), TransactionError> {
        let transaction_id = transaction.transaction_id;
        let parent_id = transaction.parent_id;
        let kind_key = transaction.kind.key().to_string();

        match self.transactions.entry(transaction_id) {
            Entry::Occupied(_) => return Err(TransactionError::already_exists(transaction_id)),
            Entry::Vacant(entry) => {
                entry.insert(transaction);
            }
        }

        if let Some(parent_id) = parent_id {
            self.children.entry(parent_id).or_default().push(transaction_id);
        }

        self.kinds.entry(kind_key).or_default().push(transaction_id);

        trace!("Transaction [{transaction_id}] stored");

        Ok(())
    }

    fn get(&self, transaction_id: TransactionId) -> Option<Transaction> {
        self.transactions.get(&transaction_id).map(|entry| entry.value().clone())
    }

    fn find_by_kind(&self, kind: &str) -> Vec<Transaction> {
        let ids = Self::indexed_ids(&self.kinds, &TransactionKind::normalize(kind));
        self.resolve(ids)
    }

    fn find_children(&self, parent_id: TransactionId) -> Vec<Transaction> {
        let ids = Self::indexed_ids(&self.children, &parent_id);
        self.resolve(ids)
    }

    fn all(&self) -> Vec<Transaction> {
        self.transactions.iter().map(|entry| entry.value().clone()).collect()
    }

    fn len(&self) -> usize {
        self.transactions.len()
    }

    fn clear(&self) {
        self.transactions.clear();
        self.children.clear();
        self.kinds.clear();
    }
}
