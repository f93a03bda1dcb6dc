//! Dispatch behaviour of `Subject` and the radix observers.

use std::{cell::RefCell, rc::Rc, str::FromStr};

use strum::IntoEnumIterator;

use crate::{
  DispatchPolicy, NotifyError, ObserverError, Radix, RadixObserver,
  SharedBuffer, Subject, SubjectState,
};

fn hex_subject() -> (Subject, SharedBuffer) {
  let mut subject = Subject::new();
  let out = SharedBuffer::default();
  RadixObserver::attach_to(&mut subject, Radix::Hex, out.clone());
  (subject, out)
}

/// An observer that appends `(tag, state)` to a shared log.
fn recorder(
  tag: &'static str,
  log: &Rc<RefCell<Vec<(&'static str, i64)>>>,
) -> Box<dyn crate::Observer> {
  let log = Rc::clone(log);
  Box::new(move |s: &SubjectState| -> Result<(), ObserverError> {
    log.borrow_mut().push((tag, s.get_state()));
    Ok(())
  })
}

fn failing(reason: &'static str) -> Box<dyn crate::Observer> {
  Box::new(move |_: &SubjectState| -> Result<(), ObserverError> {
    Err(ObserverError::Rejected(reason.into()))
  })
}

// ─── Hex rendering ───────────────────────────────────────────────────────────

#[test]
fn hex_observer_prints_255_as_ff() {
  let (mut subject, out) = hex_subject();
  subject.set_state(255).unwrap();
  assert_eq!(out.contents(), "Hex String: ff\n");
}

#[test]
fn hex_observer_prints_zero() {
  let (mut subject, out) = hex_subject();
  subject.set_state(0).unwrap();
  assert_eq!(out.contents(), "Hex String: 0\n");
}

#[test]
fn negative_state_renders_as_twos_complement() {
  let (mut subject, out) = hex_subject();
  subject.set_state(-1).unwrap();
  subject.set_state(-255).unwrap();
  subject.set_state(i64::MIN).unwrap();
  assert_eq!(
    out.contents(),
    "Hex String: ffffffffffffffff\n\
     Hex String: ffffffffffffff01\n\
     Hex String: 8000000000000000\n"
  );
}

#[test]
fn hex_digits_are_lowercase() {
  assert_eq!(Radix::Hex.render(0xABCDEF), "abcdef");
  assert_eq!(Radix::Hex.line(i64::MAX), "Hex String: 7fffffffffffffff");
}

#[test]
fn other_radixes_use_their_own_labels() {
  assert_eq!(Radix::Octal.line(8), "Octal String: 10");
  assert_eq!(Radix::Binary.line(5), "Binary String: 101");
}

#[test]
fn radix_names_parse_and_display() {
  for radix in Radix::iter() {
    assert_eq!(Radix::from_str(&radix.to_string()).unwrap(), radix);
  }
  assert_eq!(Radix::from_str("hex").unwrap(), Radix::Hex);
  assert!(Radix::from_str("decimal").is_err());
}

// ─── Dispatch ────────────────────────────────────────────────────────────────

#[test]
fn repeated_value_notifies_every_time() {
  let (mut subject, out) = hex_subject();
  subject.set_state(42).unwrap();
  subject.set_state(42).unwrap();
  assert_eq!(out.contents(), "Hex String: 2a\nHex String: 2a\n");
}

#[test]
fn two_observers_are_notified_in_attachment_order() {
  let mut subject = Subject::new();
  let out = SharedBuffer::default();
  RadixObserver::attach_to(&mut subject, Radix::Hex, out.clone());
  RadixObserver::attach_to(&mut subject, Radix::Hex, out.clone());

  subject.set_state(16).unwrap();
  assert_eq!(out.contents(), "Hex String: 10\nHex String: 10\n");
}

#[test]
fn ordering_is_by_registration() {
  let log = Rc::new(RefCell::new(Vec::new()));
  let mut subject = Subject::new();
  subject.attach(recorder("first", &log));
  subject.attach(recorder("second", &log));
  subject.attach(recorder("third", &log));

  subject.set_state(7).unwrap();
  assert_eq!(
    *log.borrow(),
    vec![("first", 7), ("second", 7), ("third", 7)]
  );
}

#[test]
fn observers_see_the_new_state() {
  let log = Rc::new(RefCell::new(Vec::new()));
  let mut subject = Subject::new();
  subject.attach(recorder("only", &log));

  assert_eq!(subject.get_state(), 0);
  subject.set_state(3).unwrap();
  subject.set_state(-9).unwrap();
  assert_eq!(subject.get_state(), -9);
  assert_eq!(*log.borrow(), vec![("only", 3), ("only", -9)]);
}

#[test]
fn set_state_without_observers_is_fine() {
  let mut subject = Subject::new();
  subject.set_state(1).unwrap();
  assert_eq!(subject.get_state(), 1);
  assert_eq!(subject.observer_count(), 0);
}

#[test]
fn hex_constructor_attached_by_hand_matches_factory() {
  let mut subject = Subject::new();
  let by_hand = SharedBuffer::default();
  let by_factory = SharedBuffer::default();
  subject.attach(Box::new(RadixObserver::hex(by_hand.clone())));
  RadixObserver::attach_to(&mut subject, Radix::Hex, by_factory.clone());

  subject.set_state(4096).unwrap();
  assert_eq!(by_hand.contents(), "Hex String: 1000\n");
  assert_eq!(by_hand.contents(), by_factory.contents());
}

#[test]
fn attach_returns_registration_index() {
  let mut subject = Subject::new();
  let a = RadixObserver::attach_to(&mut subject, Radix::Hex, SharedBuffer::default());
  let b = RadixObserver::attach_to(&mut subject, Radix::Octal, SharedBuffer::default());
  assert_eq!(a.index(), 0);
  assert_eq!(b.index(), 1);
  assert_eq!(b.to_string(), "#1");
}

// ─── Failure handling ────────────────────────────────────────────────────────

#[test]
fn fail_fast_stops_at_first_failure() {
  let log = Rc::new(RefCell::new(Vec::new()));
  let mut subject = Subject::new();
  subject.attach(recorder("before", &log));
  subject.attach(failing("boom"));
  subject.attach(recorder("after", &log));

  let err = subject.set_state(5).unwrap_err();
  match err {
    NotifyError::Observer { observer, source } => {
      assert_eq!(observer.index(), 1);
      assert!(matches!(source, ObserverError::Rejected(ref r) if r == "boom"));
    }
    other => panic!("unexpected error: {other:?}"),
  }
  assert_eq!(*log.borrow(), vec![("before", 5)]);
  assert_eq!(subject.get_state(), 5);
}

#[test]
fn isolate_reaches_every_observer_and_collects_failures() {
  let log = Rc::new(RefCell::new(Vec::new()));
  let mut subject = Subject::with_policy(DispatchPolicy::Isolate);
  subject.attach(failing("first"));
  subject.attach(recorder("middle", &log));
  subject.attach(failing("last"));

  let err = subject.set_state(9).unwrap_err();
  assert_eq!(err.to_string(), "2 of 3 observers failed");
  let NotifyError::Dispatch { attempted, failures } = err else {
    panic!("expected aggregated failures");
  };
  assert_eq!(attempted, 3);
  let indices: Vec<_> = failures.iter().map(|f| f.observer.index()).collect();
  assert_eq!(indices, vec![0, 2]);
  assert_eq!(*log.borrow(), vec![("middle", 9)]);
}

#[test]
fn isolate_without_failures_is_ok() {
  let mut subject = Subject::with_policy(DispatchPolicy::Isolate);
  let out = SharedBuffer::default();
  RadixObserver::attach_to(&mut subject, Radix::Binary, out.clone());
  subject.set_state(2).unwrap();
  assert_eq!(out.take(), "Binary String: 10\n");
  assert!(out.is_empty());
}

#[test]
fn sink_errors_surface_as_io_failures() {
  struct Closed;

  impl std::io::Write for Closed {
    fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
      Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
  }

  let mut subject = Subject::new();
  RadixObserver::attach_to(&mut subject, Radix::Hex, Closed);
  let err = subject.set_state(1).unwrap_err();
  assert!(matches!(
    err,
    NotifyError::Observer { source: ObserverError::Io(_), .. }
  ));
}
