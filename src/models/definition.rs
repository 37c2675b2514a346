use std::collections::HashMap;

pub type SpriteDefinitions = HashMap<String, SpriteDefinition>;

/// One aircraft entry from the spriteDefinitions table. Every value is kept
/// as the raw token from the source line; nothing is converted to numbers or
/// booleans here.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SpriteDefinition {
  pub id: String,
  pub w: String,
  pub h: String,
  pub stroke_scale: String,
  pub no_rotate: String,
  pub no_aspect: String,
  pub view_box: String,
  pub transform: String,
  pub accent_mult: String,
  pub size: String,
}
