use dioxus::prelude::*;
use hero_core::{HeroScene, VariantLabel};
use std::rc::Rc;

const PLACEMENTS: [&str; 2] = ["ornament-bottom", "ornament-top"];

#[component]
pub fn CardOrnaments(scene: Rc<HeroScene>, label: VariantLabel) -> Element {
    let ornaments: Vec<(&str, String)> = scene
        .choreography()
        .ornaments()
        .iter()
        .zip(PLACEMENTS)
        .map(|(ornament, placement)| (placement, ornament.style(label)))
        .collect();

    rsx! {
        for (placement, style) in ornaments {
            div { key: "{placement}", class: "ornament {placement}", style: "{style}" }
        }
    }
}
