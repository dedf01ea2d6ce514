mod components;
mod dom;
mod motion;
mod parallax;

use crate::components::HeroSection;
use anyhow::Context;
use dioxus::prelude::*;
use hero_core::HeroConfig;
use tracing::{info, warn, Level};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const HERO_TOML: &str = include_str!("../hero.toml");

fn main() -> anyhow::Result<()> {
    dioxus::logger::init(Level::INFO).context("Failed to initialize logging")?;
    dioxus::launch(App);
    Ok(())
}

#[component]
fn App() -> Element {
    use_context_provider(|| {
        load_config().unwrap_or_else(|e| {
            warn!("Falling back to the default hero configuration: {e:#}");
            HeroConfig::default()
        })
    });

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        HeroSection {}
    }
}

fn load_config() -> anyhow::Result<HeroConfig> {
    let config = HeroConfig::load(HERO_TOML).context("Invalid hero.toml")?;
    info!(
        badges = config.badges.count,
        animations = config.animations_enabled,
        "Loaded hero configuration"
    );
    Ok(config)
}
