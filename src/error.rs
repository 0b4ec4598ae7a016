use thiserror::Error;

use crate::{api, validate::FieldErrors};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid input: {0}")]
    Validation(FieldErrors),
    #[error("a submission is already in progress")]
    Busy,
    #[error(transparent)]
    Api(#[from] api::Error),
}

impl From<FieldErrors> for Error {
    fn from(from: FieldErrors) -> Self {
        Self::Validation(from)
    }
}

impl Error {
    #[must_use]
    pub const fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
