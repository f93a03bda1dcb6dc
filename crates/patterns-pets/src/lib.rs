//! Entity model for a pet record.
//!
//! A [`Pet`] is identified by its [`PetId`]; its name and date of birth are
//! value objects that validate themselves on construction and are only ever
//! replaced wholesale.

pub mod error;
pub mod pet;
pub mod value;

pub use error::{Result, ValidationError};
pub use pet::{Pet, PetRecord};
pub use value::{PetDateOfBirth, PetId, PetName};
