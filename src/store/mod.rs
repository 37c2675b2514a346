pub mod definitions;
pub mod sheet;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("image decode error: {0}")]
  Image(#[from] image::ImageError),

  #[error("unknown line in sprite definition block: {0:?}")]
  UnknownLine(String),

  #[error("sprite size must be non-zero, got {0}x{1}")]
  BadTileSize(u32, u32),

  #[error("sheet is smaller than one {0}x{1} sprite")]
  EmptySheet(u32, u32),
}
