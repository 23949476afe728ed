use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NpcError {
    #[error("NPC code {0:?} is already taken")]
    CodeTaken(String),
    #[error("NPC ID {0} not found")]
    NotFound(i32),
    #[error("NPC code {0:?} not found")]
    CodeNotFound(String),
}
