//! Randomized floating badges scattered over the hero.

use crate::motion::{Ease, Transition, Variant, VariantLabel, Variants, VisualState, css_number};
use rand::Rng;
use serde::Deserialize;

/// Layout parameters for the badge set.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BadgeConfig {
    pub count: usize,
    pub min_size: f64,
    pub max_size: f64,
    pub glyph: String,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        BadgeConfig {
            count: 5,
            min_size: 40.0,
            max_size: 100.0,
            glyph: "🍽️".to_string(),
        }
    }
}

/// One decorative badge, positioned once per mount.
#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub index: usize,
    /// Offset from the top of the container, in percent.
    pub top_pct: f64,
    /// Offset from the left of the container, in percent.
    pub left_pct: f64,
    /// Edge length in pixels.
    pub size_px: f64,
}

impl Badge {
    pub fn entry_delay(&self) -> f64 {
        self.index as f64 * 0.2 + 1.5
    }

    pub fn entry_transition(&self) -> Transition {
        Transition::tween(1.5, Ease::EaseOut).with_delay(self.entry_delay())
    }

    pub fn variants(&self) -> Variants {
        Variants::new()
            .with(
                VariantLabel::Hidden,
                Variant::new(VisualState::new().y(-100.0).opacity(0.0)),
            )
            .with(
                VariantLabel::Visible,
                Variant::new(VisualState::new().y(0.0).opacity(0.7))
                    .with_transition(self.entry_transition()),
            )
    }

    pub fn placement_css(&self) -> String {
        let size = css_number(self.size_px);
        format!(
            "top: {}%; left: {}%; width: {size}px; height: {size}px",
            css_number(self.top_pct),
            css_number(self.left_pct),
        )
    }

    /// Full inline style: placement plus the motion state for `label`.
    pub fn style(&self, label: VariantLabel) -> String {
        let variants = self.variants();
        let Some(variant) = variants.get(label) else {
            return self.placement_css();
        };
        let mut css = format!("{}; {}", self.placement_css(), variant.state.to_css());
        if let Some(transition) = variant.transition {
            let properties = variant.state.properties();
            css.push_str("; transition: ");
            css.push_str(&transition.to_css(&properties, transition.delay));
        }
        css
    }
}

/// The badge set drawn for one mount.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BadgeLayout {
    badges: Vec<Badge>,
}

impl BadgeLayout {
    /// Draws `config.count` badges with uniformly random positions and sizes.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, config: &BadgeConfig) -> Self {
        let (lo, hi) = if config.min_size <= config.max_size {
            (config.min_size, config.max_size)
        } else {
            (config.max_size, config.min_size)
        };
        let badges = (0..config.count)
            .map(|index| Badge {
                index,
                top_pct: rng.gen_range(0.0..=100.0),
                left_pct: rng.gen_range(0.0..=100.0),
                size_px: rng.gen_range(lo..=hi),
            })
            .collect();
        BadgeLayout { badges }
    }

    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }

    pub fn len(&self) -> usize {
        self.badges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.badges.is_empty()
    }
}
