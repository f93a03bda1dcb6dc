//! An in-memory output sink that can be shared between observers.

use std::{
  cell::RefCell,
  io::{self, Write},
  rc::Rc,
};

/// A cloneable byte buffer; every clone writes into the same storage.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
  /// Everything written so far, decoded lossily as UTF-8.
  pub fn contents(&self) -> String {
    String::from_utf8_lossy(&self.0.borrow()).into_owned()
  }

  /// Drain the buffer, returning what it held.
  pub fn take(&self) -> String {
    let bytes = std::mem::take(&mut *self.0.borrow_mut());
    String::from_utf8_lossy(&bytes).into_owned()
  }

  pub fn is_empty(&self) -> bool { self.0.borrow().is_empty() }
}

impl Write for SharedBuffer {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    self.0.borrow_mut().extend_from_slice(buf);
    Ok(buf.len())
  }

  fn flush(&mut self) -> io::Result<()> { Ok(()) }
}
