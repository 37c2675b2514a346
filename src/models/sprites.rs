use image::RgbaImage;

/// All tiles cut from one sprite sheet, in raster order. Ids are contiguous
/// from 0, so the id doubles as the index into `tiles`.
#[derive(Debug)]
pub struct SpriteSet {
  pub tiles: Vec<RgbaImage>,
}

impl SpriteSet {
  pub fn new() -> SpriteSet {
    SpriteSet { tiles: Vec::new() }
  }

  /// Stores the next tile and returns the id it was assigned.
  pub fn push(&mut self, tile: RgbaImage) -> usize {
    self.tiles.push(tile);
    return self.tiles.len() - 1;
  }

  pub fn get(&self, id: usize) -> Option<&RgbaImage> {
    return self.tiles.get(id);
  }

  pub fn len(&self) -> usize {
    self.tiles.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tiles.is_empty()
  }
}
