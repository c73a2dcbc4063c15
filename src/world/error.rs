use thiserror::Error;

use super::validator::ValidationError;

/// Reasons a world definition cannot be turned into a playable `World`.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("failed to parse world definition: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{0} may not be empty")]
    EmptyField(&'static str),

    #[error("duplicate room: {0}")]
    DuplicateRoom(String),

    #[error("duplicate item: {0}")]
    DuplicateItem(String),

    #[error("item '{item}' has an unusable start_location '{location}'")]
    BadLocation { item: String, location: String },

    #[error("world definition is invalid: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
