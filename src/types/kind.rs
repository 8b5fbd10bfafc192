use crate::types::errors::KindError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};

/// The caller-supplied transaction type, e.g. `"cars"` or `"DEBIT"`.
///
/// The original spelling is kept for display. Matching goes through [`TransactionKind::key`],
/// which folds case one character at a time, so `"DEBIT"` and `"debit"` name the same kind.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TransactionKind {
    name: String,
    key: String
}

impl TransactionKind {
    pub fn new(name: impl Into<String>) -> Result<Self, KindError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(KindError::Blank);
        }

        let key = Self::normalize(&name);

        Ok(Self { name, key })
    }

    /// The spelling the transaction was created with.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Folds a raw type string into the form used for lookups.
    ///
    /// Each character is mapped on its own to the lowercase of its uppercase, without context
    /// rules, so `"ΟΔΟΣ"` and `"οδοσ"` or `"İ"` and `"i"` share a key.
    pub fn normalize(value: &str) -> String {
        value.chars().map(Self::fold).collect()
    }

    fn fold(character: char) -> char {
        let mut upper = character.to_uppercase();

        //NOTE: Multi-character expansions (e.g. 'ß' -> "SS") keep the character unchanged
        let upper = match (upper.next(), upper.next()) {
            (Some(single), None) => single,
            _ => character
        };

        upper.to_lowercase().next().unwrap_or(upper)
    }
}

impl Display for TransactionKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.name)
    }
}

impl Serialize for TransactionKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.name)
    }
}
