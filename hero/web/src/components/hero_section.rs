use super::{AmbientLayer, CallToAction, CardOrnaments, FloatingBadges};
use crate::motion::{use_animation_controls, use_mount_choreography};
use crate::parallax::use_parallax;
use dioxus::prelude::*;
use hero_core::{Group, HeroConfig, HeroScene};
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_HERO_ID: AtomicUsize = AtomicUsize::new(0);

/// Animated landing-page hero for a restaurant.
///
/// The scene (badge layout included) is drawn once per mount. The content card
/// is revealed by the mount choreography, the background shapes oscillate, and
/// the parallax layer follows the window scroll until the hero is unmounted.
#[component]
pub fn HeroSection(restaurant_name: Option<String>) -> Element {
    let scene = use_hook(|| {
        let config = try_consume_context::<HeroConfig>().unwrap_or_default();
        Rc::new(HeroScene::mount(&config, &mut rand::thread_rng()))
    });
    let root_id = use_hook(|| format!("hero-{}", NEXT_HERO_ID.fetch_add(1, Ordering::Relaxed)));

    let motion = scene.animations_enabled();
    let controls = use_animation_controls(motion);
    use_mount_choreography(controls, motion);
    use_parallax(
        root_id.clone(),
        scene.parallax(),
        scene.config().parallax.coalesce,
    );

    let label = controls.label();
    let choreography = scene.choreography();
    let config = scene.config();
    let name = scene.display_name(restaurant_name.as_deref());
    let keyframes = scene.stylesheet();

    let card_style = choreography.group_style(Group::Container, label);
    let name_style = choreography.group_style(Group::NameBadge, label);
    let headline_style = choreography.group_style(Group::Headline, label);
    let subheadline_style = choreography.group_style(Group::Subheadline, label);
    let cta_style = choreography.group_style(Group::CallToAction, label);

    rsx! {
        style { "{keyframes}" }
        section { id: "{root_id}", class: "hero", dir: "rtl",
            AmbientLayer { scene: scene.clone() }

            div { class: "hero-content",
                div { class: "hero-card", style: "{card_style}",
                    div { class: "hero-name", style: "{name_style}",
                        span { class: "hero-name-pill", "{name}" }
                    }
                    h1 { class: "hero-headline", style: "{headline_style}", "{config.headline}" }
                    p { class: "hero-subheadline", style: "{subheadline_style}", "{config.subheadline}" }
                    div { class: "hero-cta-row", style: "{cta_style}",
                        CallToAction { scene: scene.clone(), label }
                    }
                    CardOrnaments { scene: scene.clone(), label }
                }
                FloatingBadges { scene: scene.clone(), label }
            }
        }
    }
}
