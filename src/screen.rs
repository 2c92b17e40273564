use sdl2::image::LoadTexture;
use sdl2::rect::Rect;
use sdl2::render::{Texture, TextureCreator, WindowCanvas};
use sdl2::video::WindowContext;

use crate::assets::AssetManifest;
use crate::error::StartupError;
use crate::grid::{Position, TILE_SIZE};

/// Owns the drawable surface and the two images that ever appear on it
///
/// All drawing goes through `render_frame`, which layers the background
/// under the player sprite and presents the composed frame. Callers cannot
/// draw the layers out of order because the individual draw steps are
/// private.
pub struct GameScreen<'a> {
    canvas: WindowCanvas,
    background: Texture<'a>,
    player: Texture<'a>,
}

impl<'a> GameScreen<'a> {
    /// Loads both images named by the manifest and takes ownership of the
    /// canvas. Either image failing to load aborts startup.
    pub fn new(
        canvas: WindowCanvas,
        texture_creator: &'a TextureCreator<WindowContext>,
        manifest: &AssetManifest,
    ) -> Result<Self, StartupError> {
        let background = load_texture(texture_creator, &manifest.background)?;
        let player = load_texture(texture_creator, &manifest.player)?;

        Ok(GameScreen {
            canvas,
            background,
            player,
        })
    }

    /// Draws one complete frame: background, then the player sprite at
    /// `position`, then a single present.
    pub fn render_frame(&mut self, position: Position) -> Result<(), String> {
        self.draw_background()?;
        self.draw_player(position)?;
        self.canvas.present();
        Ok(())
    }

    /// Paints the background over the whole surface
    fn draw_background(&mut self) -> Result<(), String> {
        self.canvas
            .copy(&self.background, None, None)
            .map_err(|e| e.to_string())
    }

    /// Paints the player sprite on top of whatever was drawn before it
    fn draw_player(&mut self, position: Position) -> Result<(), String> {
        // row is the horizontal pixel coordinate, col the vertical one
        let dest = Rect::new(
            position.row,
            position.col,
            TILE_SIZE as u32,
            TILE_SIZE as u32,
        );
        self.canvas
            .copy(&self.player, None, Some(dest))
            .map_err(|e| e.to_string())
    }
}

/// Loads a texture from the given path with consistent error handling
fn load_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    path: &str,
) -> Result<Texture<'a>, StartupError> {
    texture_creator
        .load_texture(path)
        .map_err(|e| StartupError::AssetLoad {
            path: path.to_string(),
            message: e.to_string(),
        })
}
