mod models;
mod store;
mod viewer;

use clap::Parser;
use log::{error, info};
use macroquad::prelude::{next_frame, Conf};

use crate::store::{definitions, sheet, LoadError};
use crate::viewer::Viewer;

/// plane.watch aircraft sprite viewer
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
  /// Path to pw-ui's aircraft_sprite.js
  #[clap(required = true)]
  sprite_js: String,

  /// Path to pw-ui's sprites.png sheet
  #[clap(required = true)]
  sprite_png: String,

  /// Width of sprites in pixels
  #[clap(long, default_value_t = 72)]
  sprite_w: u32,

  /// Height of sprites in pixels
  #[clap(long, default_value_t = 72)]
  sprite_h: u32,
}

fn window_conf() -> Conf {
  Conf {
    window_title: String::from("plane.watch sprite viewer"),
    window_width: 300,
    window_height: 300,
    ..Default::default()
  }
}

#[macroquad::main(window_conf)]
async fn main() {
  env_logger::init();
  let args = Args::parse();

  let mut viewer = match load(&args) {
    Ok(viewer) => viewer,
    Err(err) => {
      error!("finished with error: {}", err);
      std::process::exit(1);
    }
  };

  info!("starting viewer window");
  loop {
    viewer.update();
    viewer.draw();
    next_frame().await;
  }
}

fn load(args: &Args) -> Result<Viewer, LoadError> {
  let defs = definitions::load_sprite_definitions(&args.sprite_js)?;
  info!("parsed {} sprite definitions", defs.len());

  let sprites = sheet::load_sprites(&args.sprite_png, args.sprite_w, args.sprite_h)?;
  info!("sliced {} sprites from sheet", sprites.len());
  if sprites.is_empty() {
    return Err(LoadError::EmptySheet(args.sprite_w, args.sprite_h));
  }

  Ok(Viewer::new(&sprites))
}
