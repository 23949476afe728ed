use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AllianceError {
    #[error("Alliance name {0:?} is already taken")]
    NameTaken(String),
    #[error("Alliance tag {0:?} is already taken")]
    TagTaken(String),
    #[error("Alliance ID {0} not found")]
    NotFound(i32),
}
