use crate::dom::{self, DomParallaxHost, WindowScroll};
use dioxus::prelude::*;
use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use hero_core::{ParallaxHost, ParallaxUpdater, ScrollCoalescer, ScrollSubscription};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::warn;

/// Binds the hero's parallax layer to the window scroll signal for as long as
/// the calling component is mounted.
pub fn use_parallax(root_id: String, updater: ParallaxUpdater, coalesce: bool) {
    let subscription =
        use_hook(|| Rc::new(RefCell::new(ScrollSubscription::<EventListener>::default())));

    let attached = subscription.clone();
    use_effect(move || {
        if attached.borrow().is_attached() {
            return;
        }
        let window = match dom::window() {
            Ok(window) => window,
            Err(e) => {
                warn!("Parallax disabled: {e}");
                return;
            }
        };
        let host = DomParallaxHost::new(window.clone(), root_id.clone());
        let target = WindowScroll::new(window);
        *attached.borrow_mut() = ScrollSubscription::attach(&target, scroll_handler(host, updater, coalesce));
    });

    use_drop(move || subscription.borrow_mut().detach());
}

fn scroll_handler(
    host: DomParallaxHost,
    updater: ParallaxUpdater,
    coalesce: bool,
) -> Box<dyn FnMut()> {
    if !coalesce {
        return Box::new(move || {
            updater.update(&host);
        });
    }

    let host = Rc::new(host);
    let coalescer = Rc::new(RefCell::new(ScrollCoalescer::new()));
    let frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::default();
    Box::new(move || {
        if !coalescer.borrow_mut().push(host.scroll_y()) {
            return;
        }
        let host = host.clone();
        let coalescer = coalescer.clone();
        let handle = request_animation_frame(move |_| {
            if let Some(scroll_y) = coalescer.borrow_mut().take() {
                updater.update_at(&*host, scroll_y);
            }
        });
        *frame.borrow_mut() = Some(handle);
    })
}
