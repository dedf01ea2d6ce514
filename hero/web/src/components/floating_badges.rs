use dioxus::prelude::*;
use hero_core::{HeroScene, VariantLabel};
use std::rc::Rc;

/// Decorative badges drawn once per mount. Positions come from the scene, so
/// re-renders never reshuffle them.
#[component]
pub fn FloatingBadges(scene: Rc<HeroScene>, label: VariantLabel) -> Element {
    let glyph = scene.config().badges.glyph.clone();
    let styles: Vec<String> = scene
        .badges()
        .badges()
        .iter()
        .map(|badge| badge.style(label))
        .collect();

    rsx! {
        div { class: "hero-badges",
            for (index, style) in styles.into_iter().enumerate() {
                div { key: "{index}", class: "hero-badge", style: "{style}",
                    span { "{glyph}" }
                }
            }
        }
    }
}
