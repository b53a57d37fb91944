use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::schemas::{ExpenseId, ParticipantId};

#[derive(Debug, Error, PartialEq)]
pub enum GroupError {
    #[error("participant name must not be empty")]
    EmptyName,

    #[error("at least two participants are needed before adding expenses")]
    NotEnoughParticipants,

    #[error("expense amount must be a positive number (got {0})")]
    InvalidAmount(f64),

    #[error("unknown participant: {0}")]
    UnknownParticipant(ParticipantId),

    #[error("unknown expense: {0}")]
    UnknownExpense(ExpenseId),

    #[error("participant {0} still has expenses attached")]
    ParticipantHasExpenses(ParticipantId),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("couldn't find group {0}")]
    GroupNotFound(String),

    #[error("group {0} already exists")]
    GroupExists(String),

    #[error(transparent)]
    Group(#[from] GroupError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::GroupNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::GroupExists(_) => StatusCode::CONFLICT,
            ApiError::Group(err) => match err {
                GroupError::UnknownParticipant(_) | GroupError::UnknownExpense(_) => {
                    StatusCode::NOT_FOUND
                }
                GroupError::ParticipantHasExpenses(_) => StatusCode::CONFLICT,
                GroupError::EmptyName
                | GroupError::NotEnoughParticipants
                | GroupError::InvalidAmount(_) => StatusCode::UNPROCESSABLE_ENTITY,
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).body(self.to_string())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid port {0:?}")]
    InvalidPort(String),

    #[error("invalid log format {0:?}, expected \"human\" or \"json\"")]
    InvalidLogFormat(String),
}
