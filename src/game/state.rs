//! Game State
//!
//! Owns every basket, food item and effect, and advances them one frame per
//! `update`. Frame order:
//! 1. A release while a merge target is highlighted completes the merge
//! 2. Baskets descend / spawn, then a click may open a landed basket
//! 3. The held food follows the cursor, then the merge target is re-picked
//! 4. Effects age and expire
//!
//! The merge runs before holding is re-evaluated so a stale held index from
//! the previous frame is never reused after the food list shrinks.

use crate::config::GameConfig;
use crate::ui::{MouseState, Rect};
use super::effects::{EffectKind, EffectList, VisualEffect};
use super::entity::{last_hit, Basket, Food, SpriteSizes};
use super::event::{EventQueue, GameEvent};
use super::random::RandomSource;

pub struct GameState {
    config: GameConfig,
    sprites: SpriteSizes,
    rng: RandomSource,
    /// Updates run so far
    frame: u64,

    // Basket spawner
    /// Frames waited since the last basket landed
    spawn_frames: u32,
    /// Seconds to wait before the next drop
    next_refresh_secs: i32,
    /// Landing depth of the basket currently descending
    flying_target: Option<f32>,

    baskets: Vec<Basket>,
    food: Vec<Food>,
    /// Index of the food being dragged
    holding: Option<usize>,
    /// Index of the food highlighted as merge partner
    merging: Option<usize>,
    /// Highest tier produced by a merge so far
    max_food_tier: Option<usize>,

    effects: EffectList,
    events: EventQueue<GameEvent>,
}

impl GameState {
    pub fn new(config: GameConfig, sprites: SpriteSizes, mut rng: RandomSource) -> Self {
        let next_refresh_secs =
            rng.generate_int(config.min_basket_refresh_secs, config.max_basket_refresh_secs);
        Self {
            baskets: Vec::with_capacity(config.max_basket_count),
            food: Vec::with_capacity(config.max_objects_count),
            config,
            sprites,
            rng,
            frame: 0,
            spawn_frames: 0,
            next_refresh_secs,
            flying_target: None,
            holding: None,
            merging: None,
            max_food_tier: None,
            effects: EffectList::new(),
            events: EventQueue::new(),
        }
    }

    /// Advance the simulation by one frame
    pub fn update(&mut self, mouse: &MouseState) {
        self.resolve_pending_merge(mouse);
        self.update_flying_basket();
        self.update_click_on_basket(mouse);
        self.update_holding_food(mouse);
        self.update_merging_food(mouse);
        self.effects.update();
        self.frame += 1;
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn baskets(&self) -> &[Basket] {
        &self.baskets
    }

    pub fn food(&self) -> &[Food] {
        &self.food
    }

    pub fn effects(&self) -> &EffectList {
        &self.effects
    }

    /// The food being dragged, if any
    pub fn holding(&self) -> Option<usize> {
        self.holding
    }

    /// The food highlighted as merge partner, if any
    #[cfg(test)]
    pub fn merging(&self) -> Option<usize> {
        self.merging
    }

    pub fn max_food_tier(&self) -> Option<usize> {
        self.max_food_tier
    }

    /// Events produced since the last drain
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain()
    }

    /// Vertical band food may occupy, spanning the full screen width
    pub fn play_field(&self) -> Rect {
        Rect::screen(self.config.screen_width, self.config.screen_height)
            .band(self.config.field_top(), self.config.field_bottom())
    }

    fn has_room_for_basket(&self) -> bool {
        self.baskets.len() < self.config.max_basket_count
            && self.baskets.len() + self.food.len() < self.config.max_objects_count
    }

    // =========================================================================
    // Baskets
    // =========================================================================

    fn update_flying_basket(&mut self) {
        if let Some(target) = self.flying_target {
            match self.baskets.iter_mut().find(|b| b.is_flying) {
                Some(basket) if basket.y < target => {
                    basket.y = (basket.y + self.config.basket_drop_speed).min(target);
                }
                Some(basket) => {
                    basket.is_flying = false;
                    self.flying_target = None;
                    self.events.send(GameEvent::BasketLanded { x: basket.x, y: basket.y });
                }
                None => self.flying_target = None,
            }
        }

        if self.flying_target.is_none() && self.has_room_for_basket() {
            self.spawn_frames += 1;
            let wait = self.next_refresh_secs.max(0) as u64 * self.config.fps as u64;
            if self.spawn_frames as u64 > wait {
                self.spawn_basket();
            }
        }
    }

    fn spawn_basket(&mut self) {
        let size = self.sprites.basket;
        self.spawn_frames = 0;
        self.next_refresh_secs = self.rng.generate_int(
            self.config.min_basket_refresh_secs,
            self.config.max_basket_refresh_secs,
        );
        let target_y = self.rng.generate_float(
            self.config.field_top(),
            self.config.field_bottom() - size.h,
        );
        let x = self.rng.generate_float(0.0, self.config.screen_width - size.w);

        self.baskets.push(Basket { x, y: 0.0, width: size.w, height: size.h, is_flying: true });
        self.flying_target = Some(target_y);
        self.events.send(GameEvent::BasketSpawned { x, target_y });
    }

    fn update_click_on_basket(&mut self, mouse: &MouseState) {
        if !mouse.left_pressed {
            return;
        }
        let clicked = last_hit(&self.baskets, mouse.x, mouse.y, |_, b| {
            (!b.is_flying).then(|| b.rect())
        });
        let Some(index) = clicked else { return };

        let basket = self.baskets.swap_remove(index);
        self.food.push(Food::new(basket.x, basket.y, self.sprites.food));

        let area = basket.rect().puff_around(self.sprites.basket.w, self.sprites.basket.h);
        self.effects.spawn(VisualEffect::new(EffectKind::OpenBasket, area, self.config.open_basket_puff));
        self.events.send(GameEvent::BasketOpened { x: basket.x, y: basket.y });
    }

    // =========================================================================
    // Food
    // =========================================================================

    fn update_holding_food(&mut self, mouse: &MouseState) {
        if mouse.left_down {
            if let Some(index) = self.holding {
                let (width, top, bottom) =
                    (self.config.screen_width, self.config.field_top(), self.config.field_bottom());
                let food = &mut self.food[index];
                food.x = (mouse.x - food.width / 2.0).min(width - food.width).max(0.0);
                food.y = (mouse.y - food.height / 2.0).min(bottom - food.height).max(top);
            } else if let Some(index) = last_hit(&self.food, mouse.x, mouse.y, |_, f| Some(f.rect())) {
                self.holding = Some(index);
                self.food[index].is_holding = true;
                self.events.send(GameEvent::FoodPicked { tier: self.food[index].tier });
            }
        } else if let Some(index) = self.holding.take() {
            self.food[index].is_holding = false;
            if let Some(target) = self.merging.take() {
                self.food[target].is_merging = false;
            }
        }
    }

    fn update_merging_food(&mut self, mouse: &MouseState) {
        let Some(held) = self.holding else { return };

        let (x, y) = self.play_field().clamp_point(mouse.x, mouse.y);
        let tier = self.food[held].tier;
        let tolerance = self.config.merge_tolerance;
        let target = if tier + 1 < self.config.tier_count() {
            last_hit(&self.food, x, y, |index, f| {
                (index != held && f.tier == tier).then(|| f.rect().expand(tolerance))
            })
        } else {
            None
        };

        if let Some(previous) = self.merging {
            if Some(previous) != target {
                self.food[previous].is_merging = false;
            }
        }
        if let Some(index) = target {
            self.food[index].is_merging = true;
        }
        self.merging = target;
    }

    fn resolve_pending_merge(&mut self, mouse: &MouseState) {
        if mouse.left_down {
            return;
        }
        let (Some(held), Some(target)) = (self.holding, self.merging) else { return };

        self.holding = None;
        self.merging = None;
        self.food[held].is_holding = false;
        self.food[target].is_merging = false;
        self.merge_food(held, target);
    }

    /// Upgrade `held` by one tier and consume `target`
    fn merge_food(&mut self, held: usize, target: usize) {
        let food = &mut self.food[held];
        food.tier += 1;
        let tier = food.tier;

        let area = food.rect().puff_around(self.sprites.food.w, self.sprites.food.h);
        self.effects.spawn(VisualEffect::new(EffectKind::MergeFood, area, self.config.merge_food_puff));
        self.food.swap_remove(target);

        self.events.send(GameEvent::FoodMerged { tier });
        if self.max_food_tier.map_or(true, |max| tier > max) {
            self.max_food_tier = Some(tier);
            self.events.send(GameEvent::NewTierReached { tier });
        }
    }
}
