//! The subject, its observable state, and the observer trait.

use std::fmt;

use crate::{NotifyError, ObserverError, ObserverFailure, Result};

// ─── State ───────────────────────────────────────────────────────────────────

/// The observable half of a [`Subject`], handed to observers on update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubjectState {
  state: i64,
}

impl SubjectState {
  pub fn get_state(&self) -> i64 { self.state }
}

// ─── Observer ────────────────────────────────────────────────────────────────

/// A party notified on every state change of the subject it is attached to.
///
/// Attaching moves the observer into the subject, so an observer belongs to
/// exactly one subject for its whole life.
pub trait Observer {
  fn update(&mut self, subject: &SubjectState) -> Result<(), ObserverError>;
}

impl<F> Observer for F
where
  F: FnMut(&SubjectState) -> Result<(), ObserverError>,
{
  fn update(&mut self, subject: &SubjectState) -> Result<(), ObserverError> {
    self(subject)
  }
}

/// Position of an observer in its subject's dispatch list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(usize);

impl ObserverId {
  pub fn index(&self) -> usize { self.0 }
}

impl fmt::Display for ObserverId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{}", self.0)
  }
}

// ─── Dispatch ────────────────────────────────────────────────────────────────

/// What [`Subject::set_state`] does when an observer fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DispatchPolicy {
  /// Stop at the first failure and return it.
  #[default]
  FailFast,
  /// Notify every observer, then report all failures together.
  Isolate,
}

// ─── Subject ─────────────────────────────────────────────────────────────────

/// Holds an integer state and broadcasts every change to its observers.
#[derive(Default)]
pub struct Subject {
  state:     SubjectState,
  observers: Vec<Box<dyn Observer>>,
  policy:    DispatchPolicy,
}

impl Subject {
  pub fn new() -> Self { Self::default() }

  pub fn with_policy(policy: DispatchPolicy) -> Self {
    Self { policy, ..Self::default() }
  }

  /// Register `observer` for all future state changes. Registering the same
  /// kind of observer twice yields two independent dispatch entries.
  pub fn attach(&mut self, observer: Box<dyn Observer>) -> ObserverId {
    let id = ObserverId(self.observers.len());
    self.observers.push(observer);
    tracing::trace!(observer = %id, "observer attached");
    id
  }

  pub fn observer_count(&self) -> usize { self.observers.len() }

  pub fn get_state(&self) -> i64 { self.state.get_state() }

  /// Store `value`, then notify every observer in registration order.
  ///
  /// Every call notifies, including one that repeats the current value.
  pub fn set_state(&mut self, value: i64) -> Result<()> {
    self.state.state = value;
    tracing::debug!(
      state = value,
      observers = self.observers.len(),
      "state changed"
    );
    match self.policy {
      DispatchPolicy::FailFast => self.notify_fail_fast(),
      DispatchPolicy::Isolate => self.notify_isolated(),
    }
  }

  fn notify_fail_fast(&mut self) -> Result<()> {
    let Self { state, observers, .. } = self;
    for (index, observer) in observers.iter_mut().enumerate() {
      let id = ObserverId(index);
      tracing::trace!(observer = %id, "notifying observer");
      if let Err(source) = observer.update(state) {
        tracing::warn!(observer = %id, error = %source, "observer failed; dispatch aborted");
        return Err(NotifyError::Observer { observer: id, source });
      }
    }
    Ok(())
  }

  fn notify_isolated(&mut self) -> Result<()> {
    let Self { state, observers, .. } = self;
    let attempted = observers.len();
    let mut failures = Vec::new();
    for (index, observer) in observers.iter_mut().enumerate() {
      let id = ObserverId(index);
      tracing::trace!(observer = %id, "notifying observer");
      if let Err(error) = observer.update(state) {
        tracing::warn!(observer = %id, %error, "observer failed");
        failures.push(ObserverFailure { observer: id, error });
      }
    }
    if failures.is_empty() {
      Ok(())
    } else {
      Err(NotifyError::Dispatch { attempted, failures })
    }
  }
}

impl fmt::Debug for Subject {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Subject")
      .field("state", &self.state.get_state())
      .field("observers", &self.observers.len())
      .field("policy", &self.policy)
      .finish()
  }
}
