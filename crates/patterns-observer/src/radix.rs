//! Observers that print the subject's state in a fixed radix.

use std::io::Write;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::{
  ObserverError,
  subject::{Observer, ObserverId, Subject, SubjectState},
};

/// The base an observer renders the state in.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Display,
  EnumString,
  EnumIter,
  Serialize,
  Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Radix {
  Binary,
  Octal,
  Hex,
}

impl Radix {
  /// The fixed label printed before the digits.
  pub fn label(&self) -> &'static str {
    match self {
      Self::Binary => "Binary String",
      Self::Octal => "Octal String",
      Self::Hex => "Hex String",
    }
  }

  /// Lowercase digits without prefix or padding. Negative values render as
  /// their 64-bit two's-complement pattern.
  pub fn render(&self, value: i64) -> String {
    match self {
      Self::Binary => format!("{value:b}"),
      Self::Octal => format!("{value:o}"),
      Self::Hex => format!("{value:x}"),
    }
  }

  /// The full line an observer emits, without the trailing newline.
  pub fn line(&self, value: i64) -> String {
    format!("{}: {}", self.label(), self.render(value))
  }
}

/// Writes `"{label}: {digits}\n"` to its sink on every update.
#[derive(Debug)]
pub struct RadixObserver<W> {
  radix: Radix,
  sink:  W,
}

impl<W: Write> RadixObserver<W> {
  pub fn new(radix: Radix, sink: W) -> Self { Self { radix, sink } }

  pub fn hex(sink: W) -> Self { Self::new(Radix::Hex, sink) }
}

impl<W: Write + 'static> RadixObserver<W> {
  /// Build an observer and register it with `subject` in one step, so it is
  /// never reachable half-wired.
  pub fn attach_to(subject: &mut Subject, radix: Radix, sink: W) -> ObserverId {
    subject.attach(Box::new(Self::new(radix, sink)))
  }
}

impl<W: Write> Observer for RadixObserver<W> {
  fn update(&mut self, subject: &SubjectState) -> Result<(), ObserverError> {
    let line = self.radix.line(subject.get_state());
    writeln!(self.sink, "{line}")?;
    self.sink.flush()?;
    Ok(())
  }
}
