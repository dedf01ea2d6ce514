use crate::ambient::AmbientShape;
use crate::badges::BadgeLayout;
use crate::choreography::Choreography;
use crate::config::HeroConfig;
use crate::parallax::ParallaxUpdater;
use rand::Rng;
use std::collections::BTreeMap;
use tracing::debug;

/// Everything one mounted hero section renders from.
///
/// Built once per mount and never mutated, so every re-render of the same
/// instance reads the same badge layout and timing tables.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroScene {
    config: HeroConfig,
    choreography: Choreography,
    shapes: Vec<AmbientShape>,
    badges: BadgeLayout,
}

impl HeroScene {
    pub fn mount<R: Rng + ?Sized>(config: &HeroConfig, rng: &mut R) -> Self {
        let badges = BadgeLayout::generate(rng, &config.badges);
        debug!(badges = badges.len(), "Mounted hero scene");
        HeroScene {
            config: config.clone(),
            choreography: Choreography::standard(),
            shapes: AmbientShape::standard(),
            badges,
        }
    }

    pub fn config(&self) -> &HeroConfig {
        &self.config
    }

    pub fn choreography(&self) -> &Choreography {
        &self.choreography
    }

    pub fn shapes(&self) -> &[AmbientShape] {
        &self.shapes
    }

    pub fn badges(&self) -> &BadgeLayout {
        &self.badges
    }

    pub fn parallax(&self) -> ParallaxUpdater {
        ParallaxUpdater::new(self.config.parallax.speeds())
    }

    pub fn animations_enabled(&self) -> bool {
        self.config.animations_enabled
    }

    /// The name to show in the badge pill: the host's value verbatim, or the
    /// configured placeholder.
    pub fn display_name<'a>(&'a self, restaurant_name: Option<&'a str>) -> &'a str {
        restaurant_name.unwrap_or(&self.config.restaurant_name)
    }

    /// `@keyframes` rules for every waveform the ambient shapes use.
    pub fn stylesheet(&self) -> String {
        let rules: BTreeMap<&'static str, String> = self
            .shapes
            .iter()
            .map(|shape| {
                (
                    shape.oscillator.animation_name(),
                    shape.oscillator.keyframes_css(),
                )
            })
            .collect();
        rules.into_values().collect::<Vec<_>>().join("\n")
    }
}
