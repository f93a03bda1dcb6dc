//! Error types for `patterns-pets`.

use chrono::NaiveDate;
use thiserror::Error;

/// A name or date of birth failed its own validity constraints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("pet name must not be empty")]
  EmptyName,

  #[error("pet name is {len} characters long; the limit is {max}")]
  NameTooLong { len: usize, max: usize },

  #[error("pet name must not contain control characters")]
  NameControlCharacter,

  #[error("date of birth {date} is after today ({today})")]
  BornInFuture { date: NaiveDate, today: NaiveDate },

  #[error("date of birth {date} is before the earliest plausible date {earliest}")]
  ImplausiblyOld { date: NaiveDate, earliest: NaiveDate },

  #[error("date of birth is missing")]
  MissingDateOfBirth,

  #[error("invalid date {0:?}, expected YYYY-MM-DD")]
  InvalidDate(String),
}

pub type Result<T, E = ValidationError> = std::result::Result<T, E>;
