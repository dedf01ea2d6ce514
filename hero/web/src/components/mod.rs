mod ambient_layer;
mod call_to_action;
mod card_ornaments;
mod floating_badges;
mod hero_section;

pub use ambient_layer::AmbientLayer;
pub use call_to_action::CallToAction;
pub use card_ornaments::CardOrnaments;
pub use floating_badges::FloatingBadges;
pub use hero_section::HeroSection;
