use crate::badges::BadgeConfig;
use crate::error::HeroError;
use crate::parallax::ParallaxSpeeds;
use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_RESTAURANT_NAME: &str = "abcd";
const MAX_BADGES: usize = 64;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub base_speed: f64,
    pub speed_step: f64,
    /// Collapse scroll bursts into one update per animation frame.
    pub coalesce: bool,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        let speeds = ParallaxSpeeds::default();
        ParallaxConfig {
            base_speed: speeds.base,
            speed_step: speeds.step,
            coalesce: false,
        }
    }
}

impl ParallaxConfig {
    pub fn speeds(&self) -> ParallaxSpeeds {
        ParallaxSpeeds {
            base: self.base_speed,
            step: self.speed_step,
        }
    }
}

/// Content and tuning for one hero section.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    /// Shown when the host passes no restaurant name.
    pub restaurant_name: String,
    pub headline: String,
    pub subheadline: String,
    pub cta_label: String,
    /// When false the hero renders its end state with no motion.
    pub animations_enabled: bool,
    pub badges: BadgeConfig,
    pub parallax: ParallaxConfig,
}

impl Default for HeroConfig {
    fn default() -> Self {
        HeroConfig {
            restaurant_name: DEFAULT_RESTAURANT_NAME.to_string(),
            headline: "מסעדה מוביל בישראל".to_string(),
            subheadline: "חווית לקוח מושלמת בכל ביקור".to_string(),
            cta_label: "קבע תור עכשיו".to_string(),
            animations_enabled: true,
            badges: BadgeConfig::default(),
            parallax: ParallaxConfig::default(),
        }
    }
}

impl HeroConfig {
    /// Parses TOML text. Missing keys keep their defaults.
    pub fn from_toml(source: &str) -> Result<Self, HeroError> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;
        Self::finish(settings)
    }

    /// Parses TOML text, then applies `HERO__*` environment overrides
    /// (e.g. `HERO__BADGES__COUNT=8`).
    pub fn load(source: &str) -> Result<Self, HeroError> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .add_source(
                config::Environment::with_prefix("HERO")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Self::finish(settings)
    }

    fn finish(settings: config::Config) -> Result<Self, HeroError> {
        let config: HeroConfig = settings.try_deserialize()?;
        config.validate()?;
        debug!(?config, "Loaded hero configuration");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), HeroError> {
        let badges = &self.badges;
        if badges.count > MAX_BADGES {
            return Err(HeroError::InvalidCount {
                field: "badges.count",
                count: badges.count,
                max: MAX_BADGES,
            });
        }
        check_finite("badges.min_size", badges.min_size)?;
        check_finite("badges.max_size", badges.max_size)?;
        if !(badges.min_size > 0.0 && badges.min_size <= badges.max_size) {
            return Err(HeroError::InvalidRange {
                field: "badges.size",
                min: badges.min_size,
                max: badges.max_size,
            });
        }
        check_finite("parallax.base_speed", self.parallax.base_speed)?;
        check_finite("parallax.speed_step", self.parallax.speed_step)?;
        Ok(())
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), HeroError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(HeroError::NotFinite { field, value })
    }
}
