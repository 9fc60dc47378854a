//! Renderer
//!
//! Turns the game's draw list into macroquad texture draws.

use macroquad::prelude::{draw_texture, draw_texture_ex, DrawTextureParams, WHITE};
use crate::assets::TextureStorage;
use crate::game::DrawCommand;

pub fn draw_frame(commands: &[DrawCommand], textures: &TextureStorage) {
    for command in commands {
        match *command {
            DrawCommand::Background => draw_texture(&textures.background, 0.0, 0.0, WHITE),
            DrawCommand::Basket { x, y } => draw_texture(&textures.basket, x, y, WHITE),
            DrawCommand::Food { x, y, tier } => draw_texture(textures.food(tier), x, y, WHITE),
            DrawCommand::Effect { kind, x, y, source } => {
                draw_texture_ex(
                    textures.effect_sheet(kind),
                    x,
                    y,
                    WHITE,
                    DrawTextureParams {
                        source: Some(macroquad::math::Rect::new(source.x, source.y, source.w, source.h)),
                        ..Default::default()
                    },
                );
            }
        }
    }
}
