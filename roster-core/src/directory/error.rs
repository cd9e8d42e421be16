use serde::Deserialize;
use thiserror::Error;

use super::{Collection, Operation};

pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Domain-level failure surfaced by a directory call.
///
/// Display renders only the operator-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// Update or delete addressed an identifier the directory does not know.
    #[error("{0}")]
    NotFound(String),
    /// Validation failure on create/update.
    #[error("{0}")]
    BadRequest(String),
    /// Internal failure on list/delete.
    #[error("{0}")]
    ServerFault(String),
    /// Transport failure, undecodable body, or a status this operation does
    /// not classify.
    #[error("{message}")]
    Unclassified {
        status: Option<u16>,
        message: String,
    },
}

#[derive(Deserialize)]
struct ErrorPayload {
    message: Option<String>,
}

impl DirectoryError {
    /// Map a non-success status to the taxonomy for this operation.
    ///
    /// | op     | 404      | 400        | 500         |
    /// |--------|----------|------------|-------------|
    /// | list   |          |            | ServerFault |
    /// | create |          | BadRequest |             |
    /// | update | NotFound | BadRequest |             |
    /// | delete | NotFound |            | ServerFault |
    pub fn classify(
        collection: Collection,
        operation: Operation,
        status: u16,
        body: &str,
    ) -> Self {
        use Operation::*;

        match (operation, status) {
            (Update | Delete, 404) => DirectoryError::NotFound(format!(
                "{} not found",
                capitalize(collection.singular())
            )),
            (Create | Update, 400) => DirectoryError::BadRequest(
                server_message(body)
                    .unwrap_or_else(|| fallback_message(collection, operation)),
            ),
            (List | Delete, 500) => DirectoryError::ServerFault(
                server_message(body)
                    .unwrap_or_else(|| fallback_message(collection, operation)),
            ),
            _ => DirectoryError::Unclassified {
                status: Some(status),
                message: if body.trim().is_empty() {
                    format!("request failed with status {status}")
                } else {
                    format!("request failed with status {status}: {body}")
                },
            },
        }
    }

    /// Wrap a transport-level failure, preserving its detail.
    pub fn transport(err: reqwest::Error) -> Self {
        DirectoryError::Unclassified {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }

    /// HTTP status behind this error, when one is known.
    pub fn status(&self) -> Option<u16> {
        match self {
            DirectoryError::NotFound(_) => Some(404),
            DirectoryError::BadRequest(_) => Some(400),
            DirectoryError::ServerFault(_) => Some(500),
            DirectoryError::Unclassified { status, .. } => *status,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            DirectoryError::NotFound(_) => "not-found",
            DirectoryError::BadRequest(_) => "bad-request",
            DirectoryError::ServerFault(_) => "server-fault",
            DirectoryError::Unclassified { .. } => "unclassified",
        }
    }
}

fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorPayload>(body)
        .ok()
        .and_then(|payload| payload.message)
        .filter(|message| !message.is_empty())
}

fn fallback_message(collection: Collection, operation: Operation) -> String {
    let noun = match operation {
        Operation::List => collection.path(),
        _ => collection.singular(),
    };
    format!("Failed to {} {}", operation.verb(), noun)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
