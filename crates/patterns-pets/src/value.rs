//! Value objects owned by a [`Pet`](crate::Pet).
//!
//! Each type validates on construction and exposes no mutators, so an
//! instance that exists is always valid.

use std::{fmt, str::FromStr};

use chrono::{Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Result, ValidationError};

// ─── Identity ────────────────────────────────────────────────────────────────

/// Opaque pet identifier.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PetId(Uuid);

impl PetId {
  /// A fresh random identifier.
  pub fn new() -> Self { Self(Uuid::new_v4()) }

  /// The placeholder carried by a record no persistence layer has claimed.
  pub fn nil() -> Self { Self(Uuid::nil()) }

  pub fn is_nil(&self) -> bool { self.0.is_nil() }

  pub fn as_uuid(&self) -> Uuid { self.0 }
}

impl Default for PetId {
  fn default() -> Self { Self::new() }
}

impl From<Uuid> for PetId {
  fn from(id: Uuid) -> Self { Self(id) }
}

impl fmt::Display for PetId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.0, f)
  }
}

// ─── Name ────────────────────────────────────────────────────────────────────

/// A trimmed, non-empty pet name of bounded length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PetName(String);

impl PetName {
  pub const MAX_LEN: usize = 64;

  pub fn new(raw: &str) -> Result<Self> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
      return Err(ValidationError::EmptyName);
    }
    let len = trimmed.chars().count();
    if len > Self::MAX_LEN {
      return Err(ValidationError::NameTooLong { len, max: Self::MAX_LEN });
    }
    if trimmed.chars().any(char::is_control) {
      return Err(ValidationError::NameControlCharacter);
    }
    Ok(Self(trimmed.to_owned()))
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl TryFrom<String> for PetName {
  type Error = ValidationError;

  fn try_from(raw: String) -> Result<Self> { Self::new(&raw) }
}

impl From<PetName> for String {
  fn from(name: PetName) -> Self { name.0 }
}

impl FromStr for PetName {
  type Err = ValidationError;

  fn from_str(s: &str) -> Result<Self> { Self::new(s) }
}

impl fmt::Display for PetName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

// ─── Date of birth ───────────────────────────────────────────────────────────

/// A calendar date that is neither in the future nor more than
/// [`MAX_AGE_YEARS`](Self::MAX_AGE_YEARS) in the past.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
  Deserialize,
)]
#[serde(try_from = "NaiveDate", into = "NaiveDate")]
pub struct PetDateOfBirth(NaiveDate);

impl PetDateOfBirth {
  pub const MAX_AGE_YEARS: u32 = 50;

  /// Validate `date` against the current UTC date.
  pub fn new(date: NaiveDate) -> Result<Self> {
    Self::new_as_of(date, Utc::now().date_naive())
  }

  /// Validate `date` against an explicit `today`.
  pub fn new_as_of(date: NaiveDate, today: NaiveDate) -> Result<Self> {
    if date > today {
      return Err(ValidationError::BornInFuture { date, today });
    }
    let earliest = today
      .checked_sub_months(Months::new(12 * Self::MAX_AGE_YEARS))
      .unwrap_or(NaiveDate::MIN);
    if date < earliest {
      return Err(ValidationError::ImplausiblyOld { date, earliest });
    }
    Ok(Self(date))
  }

  /// The raw calendar date.
  pub fn value(&self) -> NaiveDate { self.0 }
}

impl TryFrom<NaiveDate> for PetDateOfBirth {
  type Error = ValidationError;

  fn try_from(date: NaiveDate) -> Result<Self> { Self::new(date) }
}

impl From<PetDateOfBirth> for NaiveDate {
  fn from(dob: PetDateOfBirth) -> Self { dob.0 }
}

impl FromStr for PetDateOfBirth {
  type Err = ValidationError;

  fn from_str(s: &str) -> Result<Self> {
    let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
      .map_err(|_| ValidationError::InvalidDate(s.to_owned()))?;
    Self::new(date)
  }
}

impl fmt::Display for PetDateOfBirth {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.0, f)
  }
}
