//! `config.toml` for the binary: the game sections plus `[advisor]`.

use advisor::AdvisorConfig;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

pub const CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(flatten)]
    pub game: sim::Config,
    #[serde(default)]
    pub advisor: AdvisorConfig,
}

impl AppConfig {
    /// Load `config.toml`, writing the defaults out if it is missing.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Path::new(CONFIG_PATH))
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let config: Self = if path.exists() {
            let contents =
                std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            toml::from_str(&contents).with_context(|| format!("parsing {}", path.display()))?
        } else {
            info!("No {} found, creating default config", path.display());
            let default_config = Self::default();
            std::fs::write(path, toml::to_string_pretty(&default_config)?)
                .with_context(|| format!("writing {}", path.display()))?;
            default_config
        };
        config.game.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_split() {
        let config: AppConfig = toml::from_str(
            r#"
            [world]
            size = 2000.0
            bot_count = 5

            [advisor]
            model = "gemini-2.0-flash"
            advice_ttl_secs = 4
            "#,
        )
        .unwrap();
        assert_eq!(config.game.world.size, 2000.0);
        assert_eq!(config.game.world.bot_count, 5);
        assert_eq!(config.game.world.food_count, 800);
        assert_eq!(config.advisor.model, "gemini-2.0-flash");
        assert_eq!(config.advisor.advice_ttl_secs, 4);
        assert_eq!(config.advisor.api_key_env, "API_KEY");
    }

    #[test]
    fn test_writes_defaults_when_missing() {
        let path = std::env::temp_dir().join(format!("blob-battle-config-{}.toml", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let written = AppConfig::load_from(&path).unwrap();
        assert!(path.exists());
        let reread = AppConfig::load_from(&path).unwrap();
        assert_eq!(reread.game.world.size, written.game.world.size);
        assert_eq!(reread.advisor.model, written.advisor.model);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_invalid_game_section_rejected() {
        let path = std::env::temp_dir().join(format!("blob-battle-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "[food]\nmin_radius = 9.0\nmax_radius = 3.0\n").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
        std::fs::remove_file(&path).unwrap();
    }
}
