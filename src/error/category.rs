use thiserror::Error;

use crate::error::ValidationError;

#[derive(Error, Debug, PartialEq)]
pub enum CategoryError {
    #[error("Category name {0:?} is already taken")]
    NameTaken(String),
    #[error("Category code {0:?} is already taken")]
    CodeTaken(String),
    #[error("Category ID {0} not found")]
    NotFound(i32),
    #[error("Category code {0:?} not found")]
    CodeNotFound(String),
    #[error("min_members {min} exceeds max_members {max}")]
    MemberBounds { min: i32, max: i32 },
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
