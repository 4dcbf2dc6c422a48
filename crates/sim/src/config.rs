//! Game configuration.

use crate::entity::{BOT_COLORS, Color, FOOD_COLORS, Palette};
use crate::error::ConfigError;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub food: FoodConfig,
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub virus: VirusConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl Config {
    /// Load configuration from `config.toml`, writing the defaults out if it is missing.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("config.toml"))
    }

    /// Load configuration from `path`, writing the defaults out if it is missing.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str(&contents)?
        } else {
            info!("No {} found, creating default config", path.display());
            let default_config = Self::default();
            std::fs::write(path, toml::to_string_pretty(&default_config)?)?;
            default_config
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value the simulation relies on as a precondition.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("world.size", self.world.size)?;
        positive("player.initial_radius", self.player.initial_radius)?;
        positive("player.base_speed", self.player.base_speed)?;
        positive("player.speed_reference_radius", self.player.speed_reference_radius)?;
        positive("food.min_radius", self.food.min_radius)?;
        positive("bot.min_radius", self.bot.min_radius)?;
        positive("virus.base_radius", self.virus.base_radius)?;
        positive("viewport.width", self.viewport.width)?;
        positive("viewport.height", self.viewport.height)?;
        positive("rules.eat_ratio", self.rules.eat_ratio)?;
        positive("rules.virus_divisor", self.rules.virus_divisor)?;
        positive("rules.threat_range", self.rules.threat_range)?;
        positive("camera.zoom_offset", self.camera.zoom_offset)?;
        positive("camera.zoom_floor", self.camera.zoom_floor)?;
        if self.camera.zoom_numerator < 0.0 {
            return Err(ConfigError::NonPositive {
                field: "camera.zoom_numerator",
                value: self.camera.zoom_numerator as f64,
            });
        }

        range("food.radius", self.food.min_radius, self.food.max_radius)?;
        range("bot.radius", self.bot.min_radius, self.bot.max_radius)?;
        if self.virus.radius_jitter < 0.0 {
            return Err(ConfigError::NonPositive {
                field: "virus.radius_jitter",
                value: self.virus.radius_jitter as f64,
            });
        }

        probability("bot.retarget_chance", self.bot.retarget_chance)?;
        probability("camera.follow", self.camera.follow)?;
        probability("camera.zoom_ease", self.camera.zoom_ease)?;

        self.food.palette()?;
        self.bot.palette()?;

        if self.session.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.session.score_interval_ticks == 0 {
            return Err(ConfigError::ZeroScoreInterval);
        }

        let largest = self
            .player
            .initial_radius
            .max(self.bot.max_radius)
            .max(self.virus.base_radius + self.virus.radius_jitter)
            .max(self.food.max_radius);
        if self.world.size <= largest * 2.0 {
            return Err(ConfigError::WorldTooSmall {
                size: self.world.size as f64,
                radius: largest as f64,
            });
        }

        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive {
            field,
            value: value as f64,
        })
    }
}

fn range(field: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if min < max {
        Ok(())
    } else {
        Err(ConfigError::EmptyRange {
            field,
            min: min as f64,
            max: max as f64,
        })
    }
}

fn probability(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::NotAProbability {
            field,
            value: value as f64,
        })
    }
}

/// World size and population.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorldConfig {
    /// Side length of the square world.
    #[serde(default = "default_world_size")]
    pub size: f32,
    #[serde(default = "default_food_count")]
    pub food_count: usize,
    #[serde(default = "default_bot_count")]
    pub bot_count: usize,
    #[serde(default = "default_virus_count")]
    pub virus_count: usize,
    /// Fixed RNG seed; a fresh one is drawn per session when unset.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            size: default_world_size(),
            food_count: default_food_count(),
            bot_count: default_bot_count(),
            virus_count: default_virus_count(),
            rng_seed: None,
        }
    }
}

fn default_world_size() -> f32 {
    4000.0
}
fn default_food_count() -> usize {
    800
}
fn default_bot_count() -> usize {
    25
}
fn default_virus_count() -> usize {
    15
}

/// Player configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerConfig {
    #[serde(default = "default_initial_radius")]
    pub initial_radius: f32,
    /// Speed at the reference radius.
    #[serde(default = "default_base_speed")]
    pub base_speed: f32,
    #[serde(default = "default_speed_exponent")]
    pub speed_exponent: f32,
    #[serde(default = "default_speed_reference_radius")]
    pub speed_reference_radius: f32,
    /// Pointer distance from the viewport center below which the player stands still.
    #[serde(default = "default_deadzone")]
    pub deadzone: f32,
    #[serde(default = "default_player_name")]
    pub name: String,
    /// Theme for generated nicknames; the name above is used when unset.
    #[serde(default)]
    pub nickname_theme: Option<String>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            initial_radius: default_initial_radius(),
            base_speed: default_base_speed(),
            speed_exponent: default_speed_exponent(),
            speed_reference_radius: default_speed_reference_radius(),
            deadzone: default_deadzone(),
            name: default_player_name(),
            nickname_theme: None,
        }
    }
}

fn default_initial_radius() -> f32 {
    20.0
}
fn default_base_speed() -> f32 {
    6.0
}
fn default_speed_exponent() -> f32 {
    -0.4
}
fn default_speed_reference_radius() -> f32 {
    20.0
}
fn default_deadzone() -> f32 {
    20.0
}
fn default_player_name() -> String {
    "Guest".to_string()
}

/// Food pellet configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FoodConfig {
    #[serde(default = "default_food_min_radius")]
    pub min_radius: f32,
    #[serde(default = "default_food_max_radius")]
    pub max_radius: f32,
    /// `#rrggbb` colors pellets are painted with.
    #[serde(default = "default_food_colors")]
    pub colors: Vec<String>,
}

impl Default for FoodConfig {
    fn default() -> Self {
        Self {
            min_radius: default_food_min_radius(),
            max_radius: default_food_max_radius(),
            colors: default_food_colors(),
        }
    }
}

impl FoodConfig {
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Palette::from_hex(&self.colors)
    }
}

fn default_food_min_radius() -> f32 {
    4.0
}
fn default_food_max_radius() -> f32 {
    7.0
}
fn default_food_colors() -> Vec<String> {
    FOOD_COLORS.iter().map(Color::to_string).collect()
}

/// Bot configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    #[serde(default = "default_bot_min_radius")]
    pub min_radius: f32,
    #[serde(default = "default_bot_max_radius")]
    pub max_radius: f32,
    /// Chance per tick that a bot picks a new wander target.
    #[serde(default = "default_retarget_chance")]
    pub retarget_chance: f32,
    #[serde(default = "default_bot_colors")]
    pub colors: Vec<String>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            min_radius: default_bot_min_radius(),
            max_radius: default_bot_max_radius(),
            retarget_chance: default_retarget_chance(),
            colors: default_bot_colors(),
        }
    }
}

impl BotConfig {
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Palette::from_hex(&self.colors)
    }
}

fn default_bot_min_radius() -> f32 {
    20.0
}
fn default_bot_max_radius() -> f32 {
    50.0
}
fn default_retarget_chance() -> f32 {
    0.02
}
fn default_bot_colors() -> Vec<String> {
    BOT_COLORS.iter().map(Color::to_string).collect()
}

/// Virus configuration. Radii are drawn from `base_radius + [0, radius_jitter)`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VirusConfig {
    #[serde(default = "default_virus_base_radius")]
    pub base_radius: f32,
    #[serde(default = "default_virus_radius_jitter")]
    pub radius_jitter: f32,
}

impl Default for VirusConfig {
    fn default() -> Self {
        Self {
            base_radius: default_virus_base_radius(),
            radius_jitter: default_virus_radius_jitter(),
        }
    }
}

fn default_virus_base_radius() -> f32 {
    80.0
}
fn default_virus_radius_jitter() -> f32 {
    10.0
}

/// Camera smoothing. Factors are applied once per tick.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CameraConfig {
    #[serde(default = "default_camera_follow")]
    pub follow: f32,
    #[serde(default = "default_camera_zoom_ease")]
    pub zoom_ease: f32,
    #[serde(default = "default_zoom_numerator")]
    pub zoom_numerator: f32,
    #[serde(default = "default_zoom_offset")]
    pub zoom_offset: f32,
    #[serde(default = "default_zoom_floor")]
    pub zoom_floor: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            follow: default_camera_follow(),
            zoom_ease: default_camera_zoom_ease(),
            zoom_numerator: default_zoom_numerator(),
            zoom_offset: default_zoom_offset(),
            zoom_floor: default_zoom_floor(),
        }
    }
}

fn default_camera_follow() -> f32 {
    0.1
}
fn default_camera_zoom_ease() -> f32 {
    0.05
}
fn default_zoom_numerator() -> f32 {
    20.0
}
fn default_zoom_offset() -> f32 {
    40.0
}
fn default_zoom_floor() -> f32 {
    0.3
}

/// Viewport dimensions in screen units.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ViewportConfig {
    #[serde(default = "default_viewport_width")]
    pub width: f32,
    #[serde(default = "default_viewport_height")]
    pub height: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: default_viewport_width(),
            height: default_viewport_height(),
        }
    }
}

impl ViewportConfig {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

fn default_viewport_width() -> f32 {
    1920.0
}
fn default_viewport_height() -> f32 {
    1080.0
}

/// Eating and threat thresholds.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RulesConfig {
    /// Eater radius must exceed the prey radius by this factor.
    #[serde(default = "default_eat_ratio")]
    pub eat_ratio: f32,
    /// Fraction of the prey radius allowed to stick out of the eater.
    #[serde(default = "default_eat_overlap")]
    pub eat_overlap: f32,
    /// Player radius is divided by this on a virus hit.
    #[serde(default = "default_virus_divisor")]
    pub virus_divisor: f32,
    #[serde(default = "default_threat_ratio")]
    pub threat_ratio: f32,
    #[serde(default = "default_threat_range")]
    pub threat_range: f32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            eat_ratio: default_eat_ratio(),
            eat_overlap: default_eat_overlap(),
            virus_divisor: default_virus_divisor(),
            threat_ratio: default_threat_ratio(),
            threat_range: default_threat_range(),
        }
    }
}

fn default_eat_ratio() -> f32 {
    1.1
}
fn default_eat_overlap() -> f32 {
    0.4
}
fn default_virus_divisor() -> f32 {
    2.0
}
fn default_threat_ratio() -> f32 {
    1.1
}
fn default_threat_range() -> f32 {
    500.0
}

/// Session pacing.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Tick interval in milliseconds.
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,
    /// A score signal is emitted every this many ticks.
    #[serde(default = "default_score_interval")]
    pub score_interval_ticks: u64,
    /// Rounds the headless driver plays before exiting.
    #[serde(default = "default_rounds")]
    pub rounds: u32,
    /// Ends a round that is still running after this many ticks.
    #[serde(default)]
    pub max_ticks_per_round: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval(),
            score_interval_ticks: default_score_interval(),
            rounds: default_rounds(),
            max_ticks_per_round: None,
        }
    }
}

fn default_tick_interval() -> u64 {
    16
}
fn default_score_interval() -> u64 {
    20
}
fn default_rounds() -> u32 {
    3
}
