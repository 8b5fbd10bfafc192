mod amount;
mod errors;
mod kind;

pub use amount::Amount;
pub use errors::{AmountError, KindError};
pub use kind::TransactionKind;

pub type TransactionId = i64;
