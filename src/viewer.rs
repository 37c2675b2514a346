use macroquad::prelude::*;

use crate::models::sprites::SpriteSet;

/// Interactive sprite browser: one sprite on screen at a time, mouse wheel
/// moves through the ids.
pub struct Viewer {
  textures: Vec<Texture2D>,
  id: i32,
}

impl Viewer {
  pub fn new(sprites: &SpriteSet) -> Viewer {
    let mut textures = Vec::with_capacity(sprites.len());
    for id in 0..sprites.len() {
      if let Some(tile) = sprites.get(id) {
        let tex = Texture2D::from_rgba8(tile.width() as u16, tile.height() as u16, tile.as_raw());
        tex.set_filter(FilterMode::Nearest);
        textures.push(tex);
      }
    }
    Viewer { textures, id: 0 }
  }

  pub fn update(&mut self) {
    let (_, dy) = mouse_wheel();
    self.id = next_id(self.id, dy, self.textures.len());
  }

  pub fn draw(&self) {
    clear_background(DARKGRAY);

    let tex = &self.textures[self.id as usize];
    let x = screen_width() / 2.0 - tex.width() / 2.0;
    let y = screen_height() / 2.0 - tex.height() / 2.0;
    draw_texture(tex, x, y, WHITE);

    draw_text(&format!("viewing sprite id: {}", self.id), 2.0, 12.0, 16.0, WHITE);
    draw_text("mousewheel changes sprite", 2.0, 26.0, 16.0, WHITE);
  }
}

// Fractional wheel deltas step one sprite at a time; whole notches jump by a
// fifth of the delta, truncated. The result stays inside [0, count-1].
fn next_id(id: i32, dy: f32, count: usize) -> i32 {
  if count == 0 {
    return 0;
  }
  let next = if dy > 0.0 && dy < 1.0 {
    id + 1
  } else if dy < 0.0 && dy > -1.0 {
    id - 1
  } else {
    id + (dy / 5.0) as i32
  };
  next.clamp(0, count as i32 - 1)
}

#[cfg(test)]
mod tests {
  use super::next_id;

  #[test]
  fn fractional_deltas_step_by_one() {
    assert_eq!(next_id(3, 0.25, 10), 4);
    assert_eq!(next_id(3, -0.25, 10), 2);
  }

  #[test]
  fn whole_deltas_step_by_a_fifth() {
    assert_eq!(next_id(0, 15.0, 10), 3);
    assert_eq!(next_id(9, -15.0, 10), 6);
    // below one notch-fifth the truncation eats the step
    assert_eq!(next_id(3, 4.0, 10), 3);
    assert_eq!(next_id(3, 0.0, 10), 3);
  }

  #[test]
  fn id_is_clamped_to_the_tile_range() {
    assert_eq!(next_id(0, -0.5, 10), 0);
    assert_eq!(next_id(9, 0.5, 10), 9);
    assert_eq!(next_id(9, 100.0, 10), 9);
    assert_eq!(next_id(0, -100.0, 10), 0);
  }

  #[test]
  fn empty_set_pins_the_id_at_zero() {
    assert_eq!(next_id(0, 1.0, 0), 0);
  }
}
