//! Mediates between a [`Student`] model and a [`StudentView`].

use crate::{Result, Student, StudentView};

pub struct StudentController<V> {
  model: Student,
  view:  V,
}

impl<V: StudentView> StudentController<V> {
  pub fn new(model: Student, view: V) -> Self { Self { model, view } }

  pub fn set_student_name(&mut self, name: impl Into<String>) {
    let name = name.into();
    tracing::debug!(roll_no = %self.model.roll_no(), %name, "updating student name");
    self.model.set_name(name);
  }

  pub fn student_name(&self) -> &str { self.model.name() }

  pub fn set_student_roll_no(&mut self, roll_no: impl Into<String>) {
    self.model.set_roll_no(roll_no);
  }

  pub fn student_roll_no(&self) -> &str { self.model.roll_no() }

  pub fn model(&self) -> &Student { &self.model }

  /// Re-render the view from the current model.
  pub fn update_view(&mut self) -> Result<()> {
    self
      .view
      .print_student_details(self.model.name(), self.model.roll_no())
  }

  pub fn into_parts(self) -> (Student, V) { (self.model, self.view) }
}
