use thiserror::Error;

/// Reasons a search stops without an answer.
///
/// An unreachable target is not an error: searches report it as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// The search examined `limit` vertices without reaching a conclusion.
    #[error("search budget exhausted: visited {limit} vertices without a result")]
    BudgetExhausted { limit: usize },

    /// The weight function returned a negative or NaN weight.
    #[error("invalid edge weight {weight}: weights must be non-negative numbers")]
    InvalidWeight { weight: f64 },
}

pub type Result<T> = std::result::Result<T, SearchError>;
