use dioxus::prelude::*;
use hero_core::HeroScene;
use std::rc::Rc;

/// Blurred background shapes. Each slot is parallax-tagged and the shape
/// inside it oscillates, so the two transforms never overwrite each other.
#[component]
pub fn AmbientLayer(scene: Rc<HeroScene>) -> Element {
    let motion = scene.animations_enabled();
    let shapes: Vec<(&'static str, String)> = scene
        .shapes()
        .iter()
        .map(|shape| {
            let style = if motion {
                shape.oscillator.animation_css()
            } else {
                shape.oscillator.initial_css()
            };
            (shape.placement, style)
        })
        .collect();

    rsx! {
        div { class: "hero-ambient",
            for (index, (placement, style)) in shapes.into_iter().enumerate() {
                div { key: "{index}", class: "parallax shape-slot {placement}",
                    div { class: "shape", style: "{style}" }
                }
            }
        }
    }
}
