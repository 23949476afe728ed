use thiserror::Error;

/// Raised synchronously before any write when a JSON bag field is malformed
/// or a value is out of its allowed range.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Field {field:?} must be a JSON object of numeric values")]
    NotANumberMap { field: String },
    #[error("Trait {name:?} value {value} is outside the allowed range 0..=5")]
    TraitOutOfRange { name: String, value: f64 },
    #[error("Progression key {key:?} is not a positive integer level")]
    BadProgressionLevel { key: String },
    #[error("Progression threshold for level {key:?} must be a non-negative integer")]
    BadProgressionThreshold { key: String },
    #[error("Field {field:?} must be a JSON object")]
    NotAnObject { field: String },
    #[error("Dialogue context {context:?} must be a list of strings")]
    BadDialogue { context: String },
    #[error("Schedule for {day:?} must be a list of [start, end) hour pairs within 0..=24")]
    BadSchedule { day: String },
    #[error("Interaction result must be an object with a boolean `success` field")]
    ResultMissingSuccess,
}
