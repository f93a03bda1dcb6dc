//! The `Pet` entity and its unvalidated wire form.
//!
//! A pet is distinguished by its [`PetId`], never by its field values. The
//! name and date of birth are replaced wholesale through setters; the id is
//! fixed for the lifetime of the value.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  Result, ValidationError,
  value::{PetDateOfBirth, PetId, PetName},
};

// ─── Pet ─────────────────────────────────────────────────────────────────────

/// An identity-bearing pet record.
///
/// Deserialisation goes through [`PetRecord`], so a `Pet` obtained from any
/// source has passed the same validation as one built with [`Pet::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PetRecord")]
pub struct Pet {
  id:            PetId,
  name:          PetName,
  date_of_birth: PetDateOfBirth,
}

impl Pet {
  /// Build a pet with a freshly generated id.
  pub fn new(name: PetName, date_of_birth: PetDateOfBirth) -> Self {
    Self::with_id(PetId::new(), name, date_of_birth)
  }

  /// Build a pet whose id was assigned by the owning store.
  pub fn with_id(
    id: PetId,
    name: PetName,
    date_of_birth: PetDateOfBirth,
  ) -> Self {
    Self { id, name, date_of_birth }
  }

  /// Validate raw inputs and build a pet. `date_of_birth` is `YYYY-MM-DD`.
  pub fn try_new(name: &str, date_of_birth: &str) -> Result<Self> {
    let name = PetName::new(name)?;
    let date_of_birth = date_of_birth.parse::<PetDateOfBirth>()?;
    Ok(Self::new(name, date_of_birth))
  }

  pub fn id(&self) -> PetId { self.id }

  pub fn name(&self) -> &PetName { &self.name }

  pub fn date_of_birth(&self) -> PetDateOfBirth { self.date_of_birth }

  pub fn set_name(&mut self, name: PetName) { self.name = name; }

  pub fn set_date_of_birth(&mut self, date_of_birth: PetDateOfBirth) {
    self.date_of_birth = date_of_birth;
  }

  /// Validate `raw` and replace the name. On error the pet is unchanged.
  pub fn try_set_name(&mut self, raw: &str) -> Result<()> {
    let name = PetName::new(raw)?;
    tracing::debug!(pet = %self.id, from = %self.name, to = %name, "renaming pet");
    self.set_name(name);
    Ok(())
  }

  /// Validate `date` and replace the date of birth. On error the pet is
  /// unchanged.
  pub fn try_set_date_of_birth(&mut self, date: NaiveDate) -> Result<()> {
    let date_of_birth = PetDateOfBirth::new(date)?;
    tracing::debug!(pet = %self.id, %date, "changing date of birth");
    self.set_date_of_birth(date_of_birth);
    Ok(())
  }

  /// Human-readable rendering: `Id = …, Name = …, Birth = YYYY-MM-DD`.
  pub fn describe(&self) -> String { self.to_string() }
}

impl fmt::Display for Pet {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Id = {}, Name = {}, Birth = {}",
      self.id,
      self.name,
      self.date_of_birth.value()
    )
  }
}

// ─── PetRecord ───────────────────────────────────────────────────────────────

/// The uninitialised form of a [`Pet`], as it arrives from a deserialiser.
///
/// Carries raw, unchecked fields and offers no domain behaviour. The only way
/// to use one is to convert it with [`Pet::try_from`]. A missing `id` becomes
/// [`PetId::nil`].
///
/// `date_of_birth` is already a calendar date here, so text that is not
/// `YYYY-MM-DD` is rejected by the deserialiser with chrono's parse error,
/// before [`ValidationError::InvalidDate`] could apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PetRecord {
  pub id:            Option<Uuid>,
  pub name:          String,
  pub date_of_birth: Option<NaiveDate>,
}

impl TryFrom<PetRecord> for Pet {
  type Error = ValidationError;

  fn try_from(record: PetRecord) -> Result<Self> {
    let name = PetName::new(&record.name)?;
    let date = record
      .date_of_birth
      .ok_or(ValidationError::MissingDateOfBirth)?;
    let date_of_birth = PetDateOfBirth::new(date)?;
    let id = record.id.map(PetId::from).unwrap_or_else(PetId::nil);
    Ok(Self::with_id(id, name, date_of_birth))
  }
}

impl From<&Pet> for PetRecord {
  fn from(pet: &Pet) -> Self {
    Self {
      id:            Some(pet.id.as_uuid()),
      name:          pet.name.to_string(),
      date_of_birth: Some(pet.date_of_birth.value()),
    }
  }
}
