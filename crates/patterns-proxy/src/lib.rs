//! A virtual proxy that defers loading an image until it is first shown.

pub mod error;
pub mod image;

pub use error::{Error, Result};
pub use image::{Image, ProxyImage, RealImage};
