//! Veggie Evolution: a merge-style casual game
//!
//! Baskets drop onto the field. Click a landed basket to get a banana, drag
//! two foods of the same kind together and they evolve into the next one.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod assets;
mod clock;
mod config;
mod game;
mod render;
mod ui;

use macroquad::prelude::*;
use assets::TextureStorage;
use clock::FixedStep;
use config::{GameConfig, CONFIG_PATH};
use game::{GameEvent, GameState, RandomSource};
use ui::MouseState;

const ASSET_DIR: &str = "assets";

fn window_conf() -> Conf {
    let defaults = GameConfig::default();
    Conf {
        window_title: "Fruits & Vegetables Evolution game".to_string(),
        window_width: defaults.screen_width as i32,
        window_height: defaults.screen_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("=== Veggie Evolution v{} ===", VERSION);

    let config = load_config().await;
    if (config.screen_width, config.screen_height) != (screen_width(), screen_height()) {
        request_new_screen_size(config.screen_width, config.screen_height);
    }

    // The game cannot run without its sprites
    let textures = match TextureStorage::load(ASSET_DIR, config.tier_count()).await {
        Ok(textures) => textures,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut clock = FixedStep::new(config.fps);
    let mut state = GameState::new(config, textures.sprite_sizes(), RandomSource::from_time());

    loop {
        #[cfg(not(target_arch = "wasm32"))]
        let frame_start = get_time();

        // Game logic counts frames, so it steps at config.fps whatever the display rate
        clock.advance(get_frame_time() as f64, MouseState::poll(), |mouse| state.update(mouse));
        let events: Vec<GameEvent> = state.drain_events().collect();
        for event in events {
            log_event(&state, event);
        }

        clear_background(WHITE);
        render::draw_frame(&state.draw_list(), &textures);

        #[cfg(not(target_arch = "wasm32"))]
        limit_frame_rate(frame_start, clock.step());
        next_frame().await;
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn load_config() -> GameConfig {
    GameConfig::load_or_default(CONFIG_PATH)
}

#[cfg(target_arch = "wasm32")]
async fn load_config() -> GameConfig {
    match load_string(CONFIG_PATH).await {
        Ok(text) => GameConfig::from_ron_str(&text).unwrap_or_else(|e| {
            log::warn!("Ignoring config {}: {}", CONFIG_PATH, e);
            GameConfig::default()
        }),
        Err(_) => GameConfig::default(),
    }
}

fn log_event(state: &GameState, event: GameEvent) {
    let name = |tier: usize| state.config().food_name(tier).unwrap_or("?").to_string();
    match event {
        GameEvent::BasketSpawned { x, target_y } => {
            log::debug!("Basket dropping at x={:.0} toward y={:.0}", x, target_y)
        }
        GameEvent::BasketLanded { x, y } => log::debug!("Basket landed at ({:.0}, {:.0})", x, y),
        GameEvent::BasketOpened { x, y } => {
            log::debug!("Frame {}: basket opened at ({:.0}, {:.0}), {} food on field", state.frame(), x, y, state.food().len())
        }
        GameEvent::FoodPicked { tier } => log::trace!("Picked up {}", name(tier)),
        GameEvent::FoodMerged { tier } => log::info!(
            "Merged into {} (tier {}, best {:?})",
            name(tier),
            tier,
            state.max_food_tier()
        ),
        GameEvent::NewTierReached { tier } => log::info!("New best: {} (tier {})", name(tier), tier),
    }
}

/// Hold the frame until `frame_time` seconds have passed since `frame_start`.
/// Native only: saves redrawing faster than the game updates. In the browser
/// requestAnimationFrame sets the pace and `FixedStep` keeps the game rate.
#[cfg(not(target_arch = "wasm32"))]
fn limit_frame_rate(frame_start: f64, frame_time: f64) {
    // Sleep for bulk, then spin-wait for precision
    let spin_margin = 0.002; // 2ms
    while get_time() - frame_start + spin_margin < frame_time {
        std::thread::sleep(std::time::Duration::from_millis(1));
    }
    while get_time() - frame_start < frame_time {
        std::hint::spin_loop();
    }
}
