//! Error types for `patterns-mvc`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to render view: {0}")]
  Render(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
