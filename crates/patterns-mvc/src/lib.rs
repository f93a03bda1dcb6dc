//! Model-view-controller over a student record.
//!
//! The [`Student`] model knows nothing about presentation, a
//! [`StudentView`] knows nothing about storage, and the
//! [`StudentController`] is the only place the two meet.

pub mod controller;
pub mod error;
pub mod model;
pub mod view;

pub use controller::StudentController;
pub use error::{Error, Result};
pub use model::Student;
pub use view::{ConsoleView, StudentView};
