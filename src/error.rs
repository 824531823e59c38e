use thiserror::Error;

/// Errors raised while building a [`ChangeSolver`](crate::ChangeSolver) or answering a query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChangeError {
    #[error("negative totals are not allowed")]
    InvalidAmount,

    #[error("the total {0} cannot be represented in the given currency")]
    Unrepresentable(i64),

    #[error("the total {0} is too large to compute change for")]
    AmountTooLarge(i64),

    #[error("at least one denomination is required")]
    NoDenominations,

    #[error("denominations must be positive, got {0}")]
    NonPositiveDenomination(i64),
}

pub type Result<T> = std::result::Result<T, ChangeError>;
