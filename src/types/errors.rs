use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AmountError {
    #[error("Amount must be positive")]
    NotPositive,
    #[error("Amount must be a finite number")]
    NotFinite
}

#[derive(Debug, Error, PartialEq)]
pub enum KindError {
    #[error("Type is required")]
    Blank
}
