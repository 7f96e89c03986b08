//! Vista data representations.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use derive_more::Error;

pub mod request;
pub mod role;
pub mod team;
pub mod user;

/// API error.
#[derive(Clone, Debug, Deserialize, Serialize, Error)]
pub struct ApiError {
    /// An API error code.
    pub code: ErrorCode,
    /// A user-friendly message of the error.
    pub message: String,
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.message.fmt(f)
    }
}

/// An API error code.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(from = "u32", into = "u32")]
pub enum ErrorCode {
    /// The request consisted of malformed JSON.
    MalformedJson,
    /// The request had a well-formed body, but the data was otherwise
    /// unexpected.
    InvalidData,
    /// The resource was not found.
    NotFound,
    /// An internal server error occured.
    ///
    /// This is a bug, usually.
    InternalServerError,
    /// Any other error code.
    Other(u32),
}

impl From<u32> for ErrorCode {
    fn from(value: u32) -> Self {
        match value {
            4000 => ErrorCode::MalformedJson,
            4001 => ErrorCode::InvalidData,
            4003 => ErrorCode::NotFound,
            5000 => ErrorCode::InternalServerError,
            other => ErrorCode::Other(other),
        }
    }
}

impl From<ErrorCode> for u32 {
    fn from(value: ErrorCode) -> Self {
        match value {
            ErrorCode::MalformedJson => 4000,
            ErrorCode::InvalidData => 4001,
            ErrorCode::NotFound => 4003,
            ErrorCode::InternalServerError => 5000,
            ErrorCode::Other(other) => other,
        }
    }
}
