//! The student model.

use serde::{Deserialize, Serialize};

/// A student identified by roll number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
  roll_no: String,
  name:    String,
}

impl Student {
  pub fn new(roll_no: impl Into<String>, name: impl Into<String>) -> Self {
    Self { roll_no: roll_no.into(), name: name.into() }
  }

  pub fn roll_no(&self) -> &str { &self.roll_no }

  pub fn set_roll_no(&mut self, roll_no: impl Into<String>) {
    self.roll_no = roll_no.into();
  }

  pub fn name(&self) -> &str { &self.name }

  pub fn set_name(&mut self, name: impl Into<String>) {
    self.name = name.into();
  }
}
