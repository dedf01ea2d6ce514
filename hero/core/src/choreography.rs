//! Mount choreography: the one-shot hidden -> visible entry of the hero's
//! content groups and the re-entrant hover/press states of the call to action.

use crate::error::HeroError;
use crate::motion::{
    Ease, Spring, Stagger, Transition, Variant, VariantLabel, Variants, VisualState,
};
use tracing::debug;

/// Delay before the first child of the content card and spacing between the
/// rest.
pub const CONTAINER_STAGGER: Stagger = Stagger {
    delay_children: 0.2,
    stagger_children: 0.3,
};

/// Extra delay of the call-to-action button beyond its group's stagger slot.
pub const BUTTON_DELAY: f64 = 0.8;

/// Shadow cast by the call to action while hovered.
pub const HOVER_SHADOW: &str = "0 10px 25px rgba(0, 0, 0, 0.1)";

/// Visual clusters revealed by the mount choreography.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    Container,
    NameBadge,
    Headline,
    Subheadline,
    CallToAction,
}

impl Group {
    /// The container's children in render order.
    pub const CHILDREN: [Group; 4] = [
        Group::NameBadge,
        Group::Headline,
        Group::Subheadline,
        Group::CallToAction,
    ];

    /// Returns the position of this group among the container's children
    pub fn child_index(&self) -> Option<usize> {
        Group::CHILDREN.iter().position(|group| group == self)
    }
}

/// A decorative disc on the content card that pops in after the copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Ornament {
    pub variants: Variants,
}

impl Ornament {
    fn new(delay: f64) -> Self {
        let variants = Variants::new()
            .with(
                VariantLabel::Hidden,
                Variant::new(VisualState::new().scale(0.0).opacity(0.0)),
            )
            .with(
                VariantLabel::Visible,
                Variant::new(VisualState::new().scale(1.0).opacity(1.0))
                    .with_transition(Transition::tween(0.8, Ease::EaseOut).with_delay(delay)),
            );
        Ornament { variants }
    }

    /// Inline style for this ornament in state `label`
    pub fn style(&self, label: VariantLabel) -> String {
        self.variants
            .get(label)
            .map(|variant| compose_style(variant, 0.0))
            .unwrap_or_default()
    }
}

/// Builds the inline style for a variant. `offset` is added to the variant's
/// own transition delay.
fn compose_style(variant: &Variant, offset: f64) -> String {
    let mut css = variant.state.to_css();
    if let Some(transition) = &variant.transition {
        let properties = variant.state.properties();
        if !properties.is_empty() {
            let delay = offset + transition.delay;
            css.push_str("; transition: ");
            css.push_str(&transition.to_css(&properties, delay));
        }
    }
    css
}

/// Timing tables for every group of the hero's content card.
#[derive(Debug, Clone, PartialEq)]
pub struct Choreography {
    container: Variants,
    item: Variants,
    button: Variants,
    ornaments: Vec<Ornament>,
}

impl Default for Choreography {
    fn default() -> Self {
        Self::standard()
    }
}

impl Choreography {
    /// Creates the hero's timing tables: a staggered fade for the card and
    /// springs for its children and the button
    pub fn standard() -> Self {
        let container = Variants::new()
            .with(
                VariantLabel::Hidden,
                Variant::new(VisualState::new().opacity(0.0)),
            )
            .with(
                VariantLabel::Visible,
                Variant::new(VisualState::new().opacity(1.0)).with_transition(
                    Transition::tween(0.3, Ease::EaseOut).with_stagger(CONTAINER_STAGGER),
                ),
            );

        let item = Variants::new()
            .with(
                VariantLabel::Hidden,
                Variant::new(VisualState::new().y(20.0).opacity(0.0)),
            )
            .with(
                VariantLabel::Visible,
                Variant::new(VisualState::new().y(0.0).opacity(1.0))
                    .with_transition(Transition::spring(Spring::new(100.0, 10.0))),
            );

        let button = Variants::new()
            .with(
                VariantLabel::Hidden,
                Variant::new(VisualState::new().scale(0.8).opacity(0.0)),
            )
            .with(
                VariantLabel::Visible,
                Variant::new(VisualState::new().scale(1.0).opacity(1.0)).with_transition(
                    Transition::spring(Spring::new(200.0, 10.0)).with_delay(BUTTON_DELAY),
                ),
            )
            .with(
                VariantLabel::Hover,
                Variant::new(VisualState::new().scale(1.05).box_shadow(HOVER_SHADOW))
                    .with_transition(Transition::spring(Spring::new(400.0, 10.0))),
            )
            .with(
                VariantLabel::Tap,
                Variant::new(VisualState::new().scale(0.95))
                    .with_transition(Transition::spring(Spring::new(500.0, 25.0))),
            );

        Choreography {
            container,
            item,
            button,
            ornaments: vec![Ornament::new(1.0), Ornament::new(1.2)],
        }
    }

    /// Gets the variants of `group`. Every child group shares one table
    pub fn variants(&self, group: Group) -> &Variants {
        match group {
            Group::Container => &self.container,
            _ => &self.item,
        }
    }

    /// Gets the call-to-action button's variants, hover and tap included
    pub fn button_variants(&self) -> &Variants {
        &self.button
    }

    /// Gets the card ornaments in render order
    pub fn ornaments(&self) -> &[Ornament] {
        &self.ornaments
    }

    fn stagger(&self) -> Stagger {
        self.container
            .get(VariantLabel::Visible)
            .and_then(|variant| variant.transition)
            .and_then(|transition| transition.stagger)
            .unwrap_or(CONTAINER_STAGGER)
    }

    /// Start offset of `group` relative to the container's visible signal.
    pub fn entry_delay(&self, group: Group) -> f64 {
        group
            .child_index()
            .map(|index| self.stagger().child_delay(index))
            .unwrap_or(0.0)
    }

    /// Start offset of the call-to-action button itself.
    pub fn button_entry_delay(&self) -> f64 {
        let own_delay = self
            .button
            .get(VariantLabel::Visible)
            .and_then(|variant| variant.transition)
            .map(|transition| transition.delay)
            .unwrap_or(0.0);
        self.entry_delay(Group::CallToAction) + own_delay
    }

    /// Inline style for `group` in state `label`.
    pub fn group_style(&self, group: Group, label: VariantLabel) -> String {
        let offset = match label {
            VariantLabel::Visible => self.entry_delay(group),
            _ => 0.0,
        };
        self.variants(group)
            .get(label)
            .map(|variant| compose_style(variant, offset))
            .unwrap_or_default()
    }

    /// Inline style for the call-to-action button. Once the visitor has
    /// interacted with it, returning to `Visible` no longer waits for the
    /// entry stagger.
    pub fn button_style(&self, label: VariantLabel, settled: bool) -> String {
        let Some(variant) = self.button.get(label) else {
            return String::new();
        };
        match label {
            VariantLabel::Visible if settled => {
                let mut variant = variant.clone();
                if let Some(transition) = variant.transition.as_mut() {
                    transition.delay = 0.0;
                }
                compose_style(&variant, 0.0)
            }
            VariantLabel::Visible => compose_style(variant, self.entry_delay(Group::CallToAction)),
            _ => compose_style(variant, 0.0),
        }
    }
}

/// The host's programmatic animation controller.
pub trait AnimationController {
    /// Tells every element bound to this controller to enter `label`.
    fn start(&mut self, label: VariantLabel);
}

/// Progress of a [`MountSequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MountPhase {
    #[default]
    Pending,
    Committed,
    Started,
}

/// Result of asking a [`MountSequence`] to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountOutcome {
    /// The controller was told to show the visible state.
    Started,
    /// The visible signal had already fired for this mount.
    AlreadyStarted,
    /// No controller was available; the host shows the end state directly.
    Degraded,
}

/// One-shot mount trigger. Fires the visible signal once per mount and never
/// before the initial render has been committed.
#[derive(Debug, Clone, Default)]
pub struct MountSequence {
    phase: MountPhase,
    degraded: bool,
}

impl MountSequence {
    /// Creates a sequence waiting for the initial render
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the current phase
    pub fn phase(&self) -> MountPhase {
        self.phase
    }

    /// Returns whether the sequence ran without a controller
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Records that the initial render has been committed.
    pub fn commit(&mut self) {
        if self.phase == MountPhase::Pending {
            self.phase = MountPhase::Committed;
        }
    }

    /// Fires the visible signal on `controller`, once per mount.
    /// Returns an error if the initial render has not been committed yet
    pub fn start(
        &mut self,
        controller: Option<&mut dyn AnimationController>,
    ) -> Result<MountOutcome, HeroError> {
        match self.phase {
            MountPhase::Pending => Err(HeroError::NotCommitted),
            MountPhase::Started => Ok(MountOutcome::AlreadyStarted),
            MountPhase::Committed => {
                self.phase = MountPhase::Started;
                match controller {
                    Some(controller) => {
                        controller.start(VariantLabel::Visible);
                        debug!("Mount choreography started");
                        Ok(MountOutcome::Started)
                    }
                    None => {
                        self.degraded = true;
                        debug!("No animation controller, showing end state");
                        Ok(MountOutcome::Degraded)
                    }
                }
            }
        }
    }

    /// The state elements should render in when they are not driven by a
    /// controller.
    pub fn resolved_label(&self) -> VariantLabel {
        if self.degraded {
            VariantLabel::Visible
        } else {
            VariantLabel::Hidden
        }
    }
}

/// Pointer input the call to action reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Enter,
    Leave,
    Press,
    Release,
}

/// Hover/press state of the call to action. Unlike the mount trigger it can be
/// entered and left any number of times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CtaInteraction {
    hovered: bool,
    pressed: bool,
    engaged: bool,
}

impl CtaInteraction {
    /// Creates an untouched button state
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a pointer event and returns the label now in effect.
    pub fn handle(&mut self, event: PointerEvent) -> Option<VariantLabel> {
        self.engaged = true;
        match event {
            PointerEvent::Enter => self.hovered = true,
            PointerEvent::Leave => {
                self.hovered = false;
                self.pressed = false;
            }
            PointerEvent::Press => self.pressed = true,
            PointerEvent::Release => self.pressed = false,
        }
        self.label()
    }

    /// `None` at rest, when the mount state applies.
    pub fn label(&self) -> Option<VariantLabel> {
        if self.pressed {
            Some(VariantLabel::Tap)
        } else if self.hovered {
            Some(VariantLabel::Hover)
        } else {
            None
        }
    }

    /// Whether the visitor has interacted with the button at least once.
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }
}
