//! Core model of the restaurant hero section: mount choreography, ambient
//! oscillators, scroll parallax and the randomized badge layout.
//!
//! The crate is host-independent. A renderer binds [`AnimationController`],
//! [`ParallaxHost`] and [`ScrollTarget`] to its own environment.
pub mod ambient;
pub mod badges;
pub mod choreography;
pub mod config;
pub mod error;
pub mod motion;
pub mod parallax;
pub mod scene;
pub mod scroll;

pub use ambient::{AmbientShape, Oscillator, Waveform};
pub use badges::{Badge, BadgeConfig, BadgeLayout};
pub use choreography::{
    AnimationController, Choreography, CtaInteraction, Group, MountOutcome, MountPhase,
    MountSequence, PointerEvent,
};
pub use config::{HeroConfig, ParallaxConfig};
pub use error::HeroError;
pub use motion::VariantLabel;
pub use parallax::{ParallaxHost, ParallaxSpeeds, ParallaxUpdater};
pub use scene::HeroScene;
pub use scroll::{ScrollCoalescer, ScrollSubscription, ScrollTarget};
