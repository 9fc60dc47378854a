//! Game Module
//!
//! The merge-game simulation: baskets drop into the play field, opening one
//! yields a tier-0 food, and dragging a food onto another of the same tier
//! evolves it into the next tier.
//!
//! Everything here is plain data stepped one frame at a time. Nothing reads
//! the window or touches textures, so the whole game runs headless in tests;
//! `main.rs` feeds in mouse state and draws the resulting `DrawCommand`s.

pub mod random;
pub mod entity;
pub mod effects;
pub mod event;
pub mod state;
pub mod draw;

pub use random::RandomSource;
pub use entity::{Size, SpriteSizes};
pub use effects::EffectKind;
pub use event::GameEvent;
pub use state::GameState;
pub use draw::DrawCommand;
