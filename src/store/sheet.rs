use image::imageops;
use log::debug;
use std::fs;

use crate::models::sprites::SpriteSet;
use crate::store::LoadError;

/// Cuts a sprite sheet into sprite_w x sprite_h tiles, raster order. Any
/// remainder strip narrower or shorter than one tile is dropped. The format
/// is detected from the file contents, not the extension.
pub fn load_sprites(path: &str, sprite_w: u32, sprite_h: u32) -> Result<SpriteSet, LoadError> {
  if sprite_w == 0 || sprite_h == 0 {
    return Err(LoadError::BadTileSize(sprite_w, sprite_h));
  }

  let bytes = fs::read(path)?;
  debug!("reading spritesheet");
  let sheet = image::load_from_memory(&bytes)?.to_rgba8();
  let (sheet_w, sheet_h) = sheet.dimensions();

  let mut sprites = SpriteSet::new();
  let mut sy = 0;
  while sy + sprite_h <= sheet_h {
    let mut sx = 0;
    while sx + sprite_w <= sheet_w {
      let tile = imageops::crop_imm(&sheet, sx, sy, sprite_w, sprite_h).to_image();
      let id = sprites.push(tile);
      debug!(
        "read sprite id={} bounds=[{}, {}, {}, {}]",
        id,
        sx,
        sy,
        sx + sprite_w,
        sy + sprite_h
      );
      sx += sprite_w;
    }
    sy += sprite_h;
  }

  Ok(sprites)
}

#[cfg(test)]
mod tests {
  use super::*;
  use image::{ImageFormat, Rgba, RgbaImage};
  use tempfile::TempDir;

  // One solid colour per 72x72 cell so tiles are tellable apart.
  fn cell_colour(col: u32, row: u32) -> Rgba<u8> {
    Rgba([10 + 40 * col as u8, 10 + 40 * row as u8, 0, 255])
  }

  fn write_sheet(dir: &TempDir, name: &str, w: u32, h: u32) -> String {
    let img = RgbaImage::from_fn(w, h, |x, y| cell_colour(x / 72, y / 72));
    let path = dir.path().join(name);
    img
      .save_with_format(&path, ImageFormat::Png)
      .unwrap();
    path.to_str().unwrap().to_string()
  }

  #[test]
  fn slices_a_full_grid_in_raster_order() {
    let dir = TempDir::new().unwrap();
    let path = write_sheet(&dir, "sheet.png", 216, 144);

    let sprites = load_sprites(&path, 72, 72).unwrap();
    assert_eq!(sprites.len(), 6);

    // top row is ids 0..3, bottom row 3..6
    for (id, (col, row)) in [(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
      .iter()
      .enumerate()
    {
      let tile = sprites.get(id).unwrap();
      assert_eq!(tile.dimensions(), (72, 72));
      assert_eq!(*tile.get_pixel(0, 0), cell_colour(*col, *row));
      assert_eq!(*tile.get_pixel(71, 71), cell_colour(*col, *row));
    }
    assert!(sprites.get(6).is_none());
  }

  #[test]
  fn remainder_strips_are_dropped() {
    let dir = TempDir::new().unwrap();
    let path = write_sheet(&dir, "sheet.png", 100, 80);

    let sprites = load_sprites(&path, 72, 72).unwrap();
    assert_eq!(sprites.len(), 1);
    assert_eq!(*sprites.get(0).unwrap().get_pixel(0, 0), cell_colour(0, 0));
  }

  #[test]
  fn sheet_smaller_than_one_tile_yields_nothing() {
    let dir = TempDir::new().unwrap();
    let path = write_sheet(&dir, "sheet.png", 40, 40);

    let sprites = load_sprites(&path, 72, 72).unwrap();
    assert!(sprites.is_empty());
  }

  #[test]
  fn format_is_detected_from_content() {
    let dir = TempDir::new().unwrap();
    // PNG data behind an unhelpful extension
    let path = write_sheet(&dir, "sheet.bin", 72, 72);

    let sprites = load_sprites(&path, 72, 72).unwrap();
    assert_eq!(sprites.len(), 1);
  }

  #[test]
  fn zero_tile_size_is_rejected() {
    let result = load_sprites("irrelevant.png", 0, 72);
    assert!(matches!(result, Err(LoadError::BadTileSize(0, 72))));
  }

  #[test]
  fn missing_file_is_an_io_error() {
    let result = load_sprites("/nonexistent/sprites.png", 72, 72);
    assert!(matches!(result, Err(LoadError::Io(_))));
  }

  #[test]
  fn garbage_bytes_are_a_decode_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sheet.png");
    std::fs::write(&path, b"not an image at all").unwrap();

    let result = load_sprites(path.to_str().unwrap(), 72, 72);
    assert!(matches!(result, Err(LoadError::Image(_))));
  }
}
