//! Views that present a student.

use std::io::Write;

use crate::Result;

pub trait StudentView {
  fn print_student_details(&mut self, name: &str, roll_no: &str) -> Result<()>;
}

/// Prints a three-line student card to any writer.
#[derive(Debug)]
pub struct ConsoleView<W> {
  out: W,
}

impl<W: Write> ConsoleView<W> {
  pub fn new(out: W) -> Self { Self { out } }

  pub fn into_inner(self) -> W { self.out }
}

impl ConsoleView<std::io::Stdout> {
  pub fn stdout() -> Self { Self::new(std::io::stdout()) }
}

impl<W: Write> StudentView for ConsoleView<W> {
  fn print_student_details(&mut self, name: &str, roll_no: &str) -> Result<()> {
    writeln!(self.out, "Student: ")?;
    writeln!(self.out, "Name: {name}")?;
    writeln!(self.out, "Roll No: {roll_no}")?;
    self.out.flush()?;
    Ok(())
  }
}
