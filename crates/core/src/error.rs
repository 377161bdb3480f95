/// Domain-level failure kinds.
///
/// The `Display` output of each variant is exactly the message returned to
/// API clients, so callers build the full text when constructing the error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// Client input violates a constraint (bad id or invalid product fields).
    #[error("{0}")]
    BadRequest(String),

    /// The referenced row does not exist.
    #[error("{0}")]
    NotFound(String),
}
