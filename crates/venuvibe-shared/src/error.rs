use thiserror::Error;

/// Text did not name any variant of a closed enumeration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} '{value}'")]
pub struct ParseStatusError {
    pub kind: &'static str,
    pub value: String,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CredentialError {
    #[error("Stored credential is not valid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("Stored credential has wrong length: expected {expected} bytes, got {actual}")]
    Length { expected: usize, actual: usize },
}
