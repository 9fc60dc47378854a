//! Game Configuration
//!
//! Tuning values for the simulation, stored as RON. Every field has a default
//! so a partial file only overrides what it names:
//!
//! ```ron
//! (
//!     max_basket_count: 6,
//!     basket_drop_speed: 25.0,
//! )
//! ```

#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;
use serde::{Deserialize, Serialize};

/// Where the front end looks for overrides
pub const CONFIG_PATH: &str = "assets/config.ron";

/// Food kinds in tier order. Tier `i` uses `assets/food/food_{i}.png`.
pub const FOOD_NAMES: [&str; 15] = [
    "banana", "onion", "blueberries", "ginger", "raspberry", "cauliflower", "peach", "pumpkin",
    "pear", "papaya", "eggplant", "parsley", "courgette", "peanut", "peas",
];

/// Error type for configuration loading
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
    Validation(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Sprite-sheet animation parameters for a puff effect
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PuffConfig {
    /// Number of frames laid out horizontally in the sheet
    pub frames: u32,
    /// Game frames each animation frame is held for
    pub delay: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Top of the play field band, as a fraction of screen height
    pub field_top_ratio: f32,
    /// Bottom of the play field band, as a fraction of screen height
    pub field_bottom_ratio: f32,
    pub fps: u32,

    /// Seconds between basket drops (inclusive range, whole seconds)
    pub min_basket_refresh_secs: i32,
    pub max_basket_refresh_secs: i32,
    pub max_basket_count: usize,
    /// Pixels per frame
    pub basket_drop_speed: f32,

    /// Baskets + food on the field
    pub max_objects_count: usize,
    /// Slack around a food item when testing the cursor for a merge
    pub merge_tolerance: f32,

    pub open_basket_puff: PuffConfig,
    pub merge_food_puff: PuffConfig,

    /// Food names in tier order; the length fixes the number of tiers
    pub food_names: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 600.0,
            screen_height: 800.0,
            field_top_ratio: 0.25,
            field_bottom_ratio: 0.75,
            fps: 60,
            min_basket_refresh_secs: 1,
            max_basket_refresh_secs: 2,
            max_basket_count: 10,
            basket_drop_speed: 50.0,
            max_objects_count: 25,
            merge_tolerance: 0.1,
            open_basket_puff: PuffConfig { frames: 9, delay: 3 },
            merge_food_puff: PuffConfig { frames: 5, delay: 3 },
            food_names: FOOD_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl GameConfig {
    /// Y coordinate where the play field band starts
    pub fn field_top(&self) -> f32 {
        self.screen_height * self.field_top_ratio
    }

    /// Y coordinate where the play field band ends
    pub fn field_bottom(&self) -> f32 {
        self.screen_height * self.field_bottom_ratio
    }

    /// Number of food tiers
    pub fn tier_count(&self) -> usize {
        self.food_names.len()
    }

    /// Display name of a tier, if it exists
    pub fn food_name(&self, tier: usize) -> Option<&str> {
        self.food_names.get(tier).map(String::as_str)
    }

    /// Parse and validate a RON document
    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a RON file on disk
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    /// Load from disk, falling back to defaults when the file is absent or bad
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fail = |msg: String| Err(ConfigError::Validation(msg));

        if !(self.screen_width > 0.0 && self.screen_height > 0.0) {
            return fail(format!(
                "screen size must be positive, got {}x{}",
                self.screen_width, self.screen_height
            ));
        }
        if !(0.0..=1.0).contains(&self.field_top_ratio)
            || !(0.0..=1.0).contains(&self.field_bottom_ratio)
            || self.field_top_ratio >= self.field_bottom_ratio
        {
            return fail(format!(
                "field band {}..{} must be an increasing range within 0..1",
                self.field_top_ratio, self.field_bottom_ratio
            ));
        }
        if self.fps == 0 {
            return fail("fps must be at least 1".to_string());
        }
        if self.min_basket_refresh_secs < 0
            || self.min_basket_refresh_secs > self.max_basket_refresh_secs
        {
            return fail(format!(
                "basket refresh range {}..={} is invalid",
                self.min_basket_refresh_secs, self.max_basket_refresh_secs
            ));
        }
        if self.max_basket_count > self.max_objects_count {
            return fail(format!(
                "max_basket_count ({}) exceeds max_objects_count ({})",
                self.max_basket_count, self.max_objects_count
            ));
        }
        if self.basket_drop_speed <= 0.0 {
            return fail(format!("basket_drop_speed must be positive, got {}", self.basket_drop_speed));
        }
        if self.merge_tolerance < 0.0 {
            return fail(format!("merge_tolerance must not be negative, got {}", self.merge_tolerance));
        }
        for (name, puff) in [("open_basket_puff", &self.open_basket_puff), ("merge_food_puff", &self.merge_food_puff)] {
            if puff.frames == 0 || puff.delay == 0 {
                return fail(format!("{}: frames and delay must be at least 1", name));
            }
        }
        if self.food_names.is_empty() {
            return fail("food_names must list at least one tier".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tier_count(), 15);
        assert_eq!(config.field_top(), 200.0);
        assert_eq!(config.field_bottom(), 600.0);
        assert_eq!(config.food_name(0), Some("banana"));
        assert_eq!(config.food_name(14), Some("peas"));
        assert_eq!(config.food_name(15), None);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = GameConfig::from_ron_str("(max_basket_count: 4, basket_drop_speed: 10.0)").unwrap();
        assert_eq!(config.max_basket_count, 4);
        assert_eq!(config.basket_drop_speed, 10.0);
        assert_eq!(config.max_objects_count, 25);
        assert_eq!(config.open_basket_puff, PuffConfig { frames: 9, delay: 3 });
    }

    #[test]
    fn test_round_trip() {
        let config = GameConfig { fps: 30, ..Default::default() };
        let text = ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::default()).unwrap();
        assert_eq!(GameConfig::from_ron_str(&text).unwrap(), config);
    }

    #[test]
    fn test_rejects_inverted_refresh_range() {
        let result = GameConfig::from_ron_str("(min_basket_refresh_secs: 3, max_basket_refresh_secs: 1)");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_rejects_empty_food_list() {
        let result = GameConfig::from_ron_str("(food_names: [])");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_rejects_inverted_band() {
        let result = GameConfig::from_ron_str("(field_top_ratio: 0.8, field_bottom_ratio: 0.2)");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_rejects_zero_delay_puff() {
        let result = GameConfig::from_ron_str("(merge_food_puff: (frames: 5, delay: 0))");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_parse_error() {
        let result = GameConfig::from_ron_str("(fps: \"fast\")");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "(fps: 30, food_names: [\"apple\", \"melon\"])").unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.fps, 30);
        assert_eq!(config.tier_count(), 2);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load_or_default(dir.path().join("missing.ron"));
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_or_default_bad_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not ron at all").unwrap();
        assert_eq!(GameConfig::load_or_default(file.path()), GameConfig::default());
    }
}
