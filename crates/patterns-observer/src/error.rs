//! Error types for `patterns-observer`.

use thiserror::Error;

use crate::subject::ObserverId;

/// A failure raised by a single observer while handling an update.
#[derive(Debug, Error)]
pub enum ObserverError {
  #[error("output error: {0}")]
  Io(#[from] std::io::Error),

  #[error("update rejected: {0}")]
  Rejected(String),
}

/// One observer's failure during an isolated dispatch round.
#[derive(Debug)]
pub struct ObserverFailure {
  pub observer: ObserverId,
  pub error:    ObserverError,
}

/// Returned by [`Subject::set_state`](crate::Subject::set_state). The new
/// state has already been stored when either variant is returned.
#[derive(Debug, Error)]
pub enum NotifyError {
  /// Fail-fast dispatch stopped at this observer; later observers were not
  /// notified.
  #[error("observer {observer} failed: {source}")]
  Observer {
    observer: ObserverId,
    #[source]
    source:   ObserverError,
  },

  /// Isolated dispatch reached every observer; these are the ones that
  /// failed, in registration order.
  #[error("{} of {attempted} observers failed", .failures.len())]
  Dispatch {
    attempted: usize,
    failures:  Vec<ObserverFailure>,
  },
}

pub type Result<T, E = NotifyError> = std::result::Result<T, E>;
