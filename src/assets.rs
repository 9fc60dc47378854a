//! Texture Storage
//!
//! Every texture the game draws, loaded once at startup and kept for the life
//! of the process. The simulation never sees these; it only gets the sprite
//! sizes, and effects refer to their sheet through `EffectKind`.

use macroquad::prelude::{load_texture, Texture2D};
use crate::game::{EffectKind, Size, SpriteSizes};

/// Error type for asset loading
#[derive(Debug)]
pub enum AssetError {
    /// Texture could not be read or decoded
    Texture { path: String, message: String },
    /// Asset table is missing something the game needs
    Missing(String),
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::Texture { path, message } => write!(f, "Failed to load {}: {}", path, message),
            AssetError::Missing(msg) => write!(f, "Missing asset: {}", msg),
        }
    }
}

impl std::error::Error for AssetError {}

/// Path of the sprite for a food tier
pub fn food_texture_path(asset_dir: &str, tier: usize) -> String {
    format!("{}/food/food_{}.png", asset_dir, tier)
}

pub struct TextureStorage {
    pub background: Texture2D,
    pub basket: Texture2D,
    pub puff_open_basket: Texture2D,
    pub puff_merge_food: Texture2D,
    /// One texture per tier
    pub food: Vec<Texture2D>,
}

impl TextureStorage {
    /// Load everything under `asset_dir`; `tier_count` food sprites are expected
    pub async fn load(asset_dir: &str, tier_count: usize) -> Result<Self, AssetError> {
        let background = load(&format!("{}/background.png", asset_dir)).await?;
        let basket = load(&format!("{}/basket.png", asset_dir)).await?;
        let puff_open_basket = load(&format!("{}/puffOpenBasket.png", asset_dir)).await?;
        let puff_merge_food = load(&format!("{}/puffMergeFood.png", asset_dir)).await?;

        let mut food = Vec::with_capacity(tier_count);
        for tier in 0..tier_count {
            food.push(load(&food_texture_path(asset_dir, tier)).await?);
        }
        if food.is_empty() {
            return Err(AssetError::Missing("no food tiers configured".to_string()));
        }

        log::info!("Loaded {} textures from {}", 4 + food.len(), asset_dir);
        Ok(Self { background, basket, puff_open_basket, puff_merge_food, food })
    }

    /// Dimensions the simulation places entities with
    pub fn sprite_sizes(&self) -> SpriteSizes {
        SpriteSizes {
            basket: Size::new(self.basket.width(), self.basket.height()),
            food: Size::new(self.food[0].width(), self.food[0].height()),
        }
    }

    pub fn effect_sheet(&self, kind: EffectKind) -> &Texture2D {
        match kind {
            EffectKind::OpenBasket => &self.puff_open_basket,
            EffectKind::MergeFood => &self.puff_merge_food,
        }
    }

    /// Sprite for a tier; tiers past the table reuse the last sprite
    pub fn food(&self, tier: usize) -> &Texture2D {
        &self.food[tier.min(self.food.len() - 1)]
    }
}

async fn load(path: &str) -> Result<Texture2D, AssetError> {
    load_texture(path).await.map_err(|e| AssetError::Texture {
        path: path.to_string(),
        message: e.to_string(),
    })
}
