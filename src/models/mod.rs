mod errors;
#[cfg(test)]
mod tests;
mod transaction;

pub use errors::TransactionError;
pub use transaction::Transaction;
