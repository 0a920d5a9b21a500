use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("identifier must not be empty")]
    EmptyIdentifier,
    #[error("identifier {0:?} contains a NUL character")]
    NulInIdentifier(String),
}
