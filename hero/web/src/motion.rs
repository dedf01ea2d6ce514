use dioxus::prelude::*;
use hero_core::{AnimationController, MountOutcome, MountSequence, VariantLabel};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};

/// Signal-backed animation controller. Elements bound to it render the state
/// it was last told to start.
#[derive(Clone, Copy, PartialEq)]
pub struct AnimationControls {
    label: Signal<VariantLabel>,
}

impl AnimationControls {
    pub fn label(&self) -> VariantLabel {
        (self.label)()
    }
}

impl AnimationController for AnimationControls {
    fn start(&mut self, label: VariantLabel) {
        self.label.set(label);
    }
}

/// Controls start hidden when motion is enabled. With motion disabled they
/// start on the visible end state and are never driven.
pub fn use_animation_controls(enabled: bool) -> AnimationControls {
    let label = use_signal(move || {
        if enabled {
            VariantLabel::Hidden
        } else {
            VariantLabel::Visible
        }
    });
    AnimationControls { label }
}

/// Fires the visible signal once, after the first render has been committed.
pub fn use_mount_choreography(controls: AnimationControls, enabled: bool) {
    let sequence = use_hook(|| Rc::new(RefCell::new(MountSequence::new())));

    use_effect(move || {
        let mut sequence = sequence.borrow_mut();
        sequence.commit();

        let mut controls = controls;
        let controller: Option<&mut dyn AnimationController> = if enabled {
            Some(&mut controls)
        } else {
            None
        };
        match sequence.start(controller) {
            Ok(MountOutcome::Degraded) => {
                debug!(label = %sequence.resolved_label(), "Hero rendered without motion")
            }
            Ok(outcome) => debug!(?outcome, "Hero mount choreography"),
            Err(e) => warn!("Hero mount choreography skipped: {e}"),
        }
    });
}
