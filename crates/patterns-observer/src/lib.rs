//! A synchronous one-to-many notification channel.
//!
//! A [`Subject`] holds an integer state and an ordered list of observers.
//! Every call to [`Subject::set_state`] stores the new value and then calls
//! each observer in registration order on the calling thread. Observers pull
//! the value they render from the [`SubjectState`] they are handed.
//!
//! ```
//! use patterns_observer::{Radix, RadixObserver, SharedBuffer, Subject};
//!
//! let mut subject = Subject::new();
//! let out = SharedBuffer::default();
//! RadixObserver::attach_to(&mut subject, Radix::Hex, out.clone());
//!
//! subject.set_state(255).unwrap();
//! assert_eq!(out.contents(), "Hex String: ff\n");
//! ```

pub mod error;
pub mod radix;
pub mod sink;
pub mod subject;

pub use error::{NotifyError, ObserverError, ObserverFailure, Result};
pub use radix::{Radix, RadixObserver};
pub use sink::SharedBuffer;
pub use subject::{DispatchPolicy, Observer, ObserverId, Subject, SubjectState};

#[cfg(test)]
mod tests;
