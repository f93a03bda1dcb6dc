//! The `Image` abstraction, a disk-backed image, and its lazy proxy.

use std::io::Write;

use crate::Result;

/// Something that can be shown on an output stream.
pub trait Image {
  fn display(&mut self, out: &mut dyn Write) -> Result<()>;
}

/// An image that is loaded the moment it is constructed.
#[derive(Debug)]
pub struct RealImage {
  file_name: String,
}

impl RealImage {
  /// Load `file_name`, reporting the load on `out`.
  pub fn load(file_name: impl Into<String>, out: &mut dyn Write) -> Result<Self> {
    let file_name = file_name.into();
    tracing::info!(file = %file_name, "loading image");
    writeln!(out, "Loading {file_name}")?;
    Ok(Self { file_name })
  }

  pub fn file_name(&self) -> &str { &self.file_name }
}

impl Image for RealImage {
  fn display(&mut self, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Displaying {}", self.file_name)?;
    Ok(())
  }
}

/// Stands in for a [`RealImage`] and loads it on the first
/// [`display`](Image::display). Later displays reuse the loaded image.
#[derive(Debug)]
pub struct ProxyImage {
  file_name: String,
  real:      Option<RealImage>,
}

impl ProxyImage {
  pub fn new(file_name: impl Into<String>) -> Self {
    Self { file_name: file_name.into(), real: None }
  }

  pub fn is_loaded(&self) -> bool { self.real.is_some() }

  pub fn file_name(&self) -> &str { &self.file_name }
}

impl Image for ProxyImage {
  fn display(&mut self, out: &mut dyn Write) -> Result<()> {
    if let Some(real) = &mut self.real {
      return real.display(out);
    }
    let real = self.real.insert(RealImage::load(self.file_name.clone(), out)?);
    real.display(out)
  }
}
