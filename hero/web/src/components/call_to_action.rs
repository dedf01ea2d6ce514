use dioxus::prelude::*;
use hero_core::{CtaInteraction, HeroScene, PointerEvent, VariantLabel};
use std::rc::Rc;

/// The booking button. Enters with the mount choreography and reacts to hover
/// and press any number of times afterwards. Pointer events cover mouse, pen
/// and touch alike; a cancelled touch counts as leaving the button.
#[component]
pub fn CallToAction(scene: Rc<HeroScene>, label: VariantLabel) -> Element {
    let mut interaction = use_signal(CtaInteraction::new);

    let current = interaction();
    let style = match current.label() {
        Some(active) => scene.choreography().button_style(active, true),
        None => scene
            .choreography()
            .button_style(label, current.is_engaged()),
    };
    let text = scene.config().cta_label.clone();

    rsx! {
        button {
            class: "hero-cta",
            r#type: "button",
            style: "{style}",
            onpointerenter: move |_| {
                interaction.write().handle(PointerEvent::Enter);
            },
            onpointerleave: move |_| {
                interaction.write().handle(PointerEvent::Leave);
            },
            onpointerdown: move |_| {
                interaction.write().handle(PointerEvent::Press);
            },
            onpointerup: move |_| {
                interaction.write().handle(PointerEvent::Release);
            },
            onpointercancel: move |_| {
                interaction.write().handle(PointerEvent::Leave);
            },
            "{text}"
        }
    }
}
