mod assets;
mod error;
mod game;
mod grid;
mod input;
mod screen;

use assets::AssetManifest;
use game::Game;
use grid::{WINDOW_HEIGHT, WINDOW_WIDTH};
use screen::GameScreen;

const MANIFEST_PATH: &str = "assets/config/assets.json";

fn main() -> Result<(), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window("Rogue", WINDOW_WIDTH, WINDOW_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();

    let manifest = AssetManifest::load_from_file(MANIFEST_PATH)?;
    let screen = GameScreen::new(canvas, &texture_creator, &manifest)?;

    let mut event_pump = sdl_context.event_pump()?;

    println!("Controls:");
    println!("Arrow keys - Move one tile per press");
    println!("ESC - Quit");

    let mut game = Game::new(screen);
    game.run(&mut event_pump)
}
