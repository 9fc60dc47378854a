//! Draw Traversal
//!
//! Flattens the game state into an ordered list of sprite draws. The list
//! only names what to draw and where; the renderer maps each command onto a
//! texture it owns.

use crate::ui::Rect;
use super::effects::EffectKind;
use super::state::GameState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Background,
    Basket { x: f32, y: f32 },
    Food { x: f32, y: f32, tier: usize },
    /// One frame of an effect sheet: `source` is the slice, drawn at (x, y)
    Effect { kind: EffectKind, x: f32, y: f32, source: Rect },
}

impl GameState {
    /// Back-to-front: background, resting food, baskets, the held food,
    /// then effects on top of everything
    pub fn draw_list(&self) -> Vec<DrawCommand> {
        let mut commands = Vec::with_capacity(
            1 + self.food().len() + self.baskets().len() + self.effects().len(),
        );
        commands.push(DrawCommand::Background);

        let held = self.holding();
        commands.extend(
            self.food()
                .iter()
                .enumerate()
                .filter(|(index, _)| Some(*index) != held)
                .map(|(_, f)| DrawCommand::Food { x: f.x, y: f.y, tier: f.tier }),
        );
        commands.extend(self.baskets().iter().map(|b| DrawCommand::Basket { x: b.x, y: b.y }));
        if let Some(f) = held.map(|index| &self.food()[index]) {
            commands.push(DrawCommand::Food { x: f.x, y: f.y, tier: f.tier });
        }
        commands.extend(self.effects().iter().map(|e| DrawCommand::Effect {
            kind: e.kind,
            x: e.x,
            y: e.y,
            source: e.source_rect(),
        }));
        commands
    }
}
