use log::debug;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::mem;

use crate::models::definition::{SpriteDefinition, SpriteDefinitions};
use crate::store::LoadError;

const REGEX_COMMENT: &str = r"^\s*//.*$";
const REGEX_CLOSURE: &str = r"^\s*\},?\s*$";
const REGEX_WHITESPACE: &str = r"^\s*$";

const REGEX_TABLE_OPEN: &str = r"^\s*const\s+spriteDefinitions\s+=\s+\{\s*$";
const REGEX_AIRCRAFT_NAME: &str = r#"^\s*"[\w-]+":\s+\{\s*$"#;

const REGEX_ID: &str = r"^\s*id:\s+\d+,?\s*$";
const REGEX_W: &str = r"^\s*w:\s+[\d\.]+,?\s*$";
const REGEX_H: &str = r"^\s*h:\s+[\d\.]+,?\s*$";
const REGEX_STROKE_SCALE: &str = r"^\s*strokeScale:\s+[\d\.]+,?\s*$";
const REGEX_NO_ROTATE: &str = r"^\s*noRotate:\s+(true|false),?\s*$";
const REGEX_NO_ASPECT: &str = r"^\s*noAspect:\s+(true|false),?\s*$";
const REGEX_VIEW_BOX: &str = r#"^\s*viewBox:\s+"([-0-9\.]+\s+){3}[-0-9\.]+"\s*,?\s*$"#;
const REGEX_TRANSFORM: &str = r#"^\s*transform:\s+".*?"\s*,?\s*$"#;
const REGEX_ACCENT_MULT: &str = r"^\s*accentMult:\s+[\d\.]+,?\s*$";
const REGEX_SIZE: &str = r"^\s*size:\s+\[[-0-9\.]+,\s*[-0-9\.]+\]\s*,?\s*$";

enum State {
  SeekingTable,
  SeekingName,
  CollectingFields,
}

struct Patterns {
  comment: Regex,
  closure: Regex,
  whitespace: Regex,
  table_open: Regex,
  aircraft_name: Regex,
  id: Regex,
  w: Regex,
  h: Regex,
  stroke_scale: Regex,
  no_rotate: Regex,
  no_aspect: Regex,
  view_box: Regex,
  transform: Regex,
  accent_mult: Regex,
  size: Regex,
}

impl Patterns {
  fn compile() -> Patterns {
    Patterns {
      comment: Regex::new(REGEX_COMMENT).unwrap(),
      closure: Regex::new(REGEX_CLOSURE).unwrap(),
      whitespace: Regex::new(REGEX_WHITESPACE).unwrap(),
      table_open: Regex::new(REGEX_TABLE_OPEN).unwrap(),
      aircraft_name: Regex::new(REGEX_AIRCRAFT_NAME).unwrap(),
      id: Regex::new(REGEX_ID).unwrap(),
      w: Regex::new(REGEX_W).unwrap(),
      h: Regex::new(REGEX_H).unwrap(),
      stroke_scale: Regex::new(REGEX_STROKE_SCALE).unwrap(),
      no_rotate: Regex::new(REGEX_NO_ROTATE).unwrap(),
      no_aspect: Regex::new(REGEX_NO_ASPECT).unwrap(),
      view_box: Regex::new(REGEX_VIEW_BOX).unwrap(),
      transform: Regex::new(REGEX_TRANSFORM).unwrap(),
      accent_mult: Regex::new(REGEX_ACCENT_MULT).unwrap(),
      size: Regex::new(REGEX_SIZE).unwrap(),
    }
  }
}

/// Scans an aircraft_sprite.js file for the `const spriteDefinitions = {`
/// table and collects one record per aircraft block. A line inside a block
/// that matches no known field pattern aborts the whole load.
pub fn load_sprite_definitions(path: &str) -> Result<SpriteDefinitions, LoadError> {
  let file = File::open(path)?;
  let reader = BufReader::new(file);
  let p = Patterns::compile();

  let mut defs = SpriteDefinitions::new();
  let mut state = State::SeekingTable;
  let mut aircraft_name = String::new();
  let mut def = SpriteDefinition::default();

  for line in reader.lines() {
    let line = line?;

    // comments are skipped in every state
    if p.comment.is_match(&line) {
      continue;
    }

    match state {
      State::SeekingTable => {
        if p.table_open.is_match(&line) {
          debug!("found: \"const spriteDefinitions = {{\"");
          state = State::SeekingName;
        }
      }

      State::SeekingName => {
        if p.aircraft_name.is_match(&line) {
          aircraft_name = quoted(&line);
          def = SpriteDefinition::default();
          state = State::CollectingFields;
        } else if p.closure.is_match(&line) {
          state = State::SeekingTable;
        }
      }

      State::CollectingFields => {
        if p.id.is_match(&line) {
          def.id = value_token(&line);
        } else if p.w.is_match(&line) {
          def.w = value_token(&line);
        } else if p.h.is_match(&line) {
          def.h = value_token(&line);
        } else if p.stroke_scale.is_match(&line) {
          def.stroke_scale = value_token(&line);
        } else if p.no_rotate.is_match(&line) {
          def.no_rotate = value_token(&line);
        } else if p.no_aspect.is_match(&line) {
          def.no_aspect = value_token(&line);
        } else if p.view_box.is_match(&line) {
          def.view_box = quoted(&line);
        } else if p.transform.is_match(&line) {
          def.transform = quoted(&line);
        } else if p.accent_mult.is_match(&line) {
          def.accent_mult = value_token(&line);
        } else if p.size.is_match(&line) {
          def.size = value_token(&line);
        } else if p.closure.is_match(&line) {
          debug!(
            "aircraft {}: id={} w={} h={} strokeScale={} noRotate={} noAspect={} viewBox={:?} transform={:?} accentMult={} size={}",
            aircraft_name,
            def.id,
            def.w,
            def.h,
            def.stroke_scale,
            def.no_rotate,
            def.no_aspect,
            def.view_box,
            def.transform,
            def.accent_mult,
            def.size
          );
          defs.insert(mem::take(&mut aircraft_name), mem::take(&mut def));
          state = State::SeekingName;
        } else if p.whitespace.is_match(&line) {
          // blank lines inside a block are fine
        } else {
          return Err(LoadError::UnknownLine(line));
        }
      }
    }
  }

  // EOF in any state just returns what was fully collected
  Ok(defs)
}

// value between the first colon and the trailing comma, if any
fn value_token(line: &str) -> String {
  let after = line.splitn(2, ':').nth(1).unwrap_or("");
  after.trim().trim_end_matches(',').trim().to_string()
}

// text inside the first pair of double quotes
fn quoted(line: &str) -> String {
  line.split('"').nth(1).unwrap_or("").to_string()
}
