//! Error types for `patterns-proxy`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("image output error: {0}")]
  Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
