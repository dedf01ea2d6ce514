//! Browser bindings for the hero's scroll signal and parallax writes.

use gloo_events::EventListener;
use hero_core::parallax::translate_css;
use hero_core::{ParallaxHost, ScrollTarget};
use thiserror::Error;
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, Window};

pub const PARALLAX_SELECTOR: &str = ".parallax";

#[derive(Error, Debug)]
pub enum DomError {
    #[error("No global window is available")]
    NoWindow,
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(format!("{value:?}"))
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

/// The page's global scroll signal.
pub struct WindowScroll {
    window: Window,
}

impl WindowScroll {
    pub fn new(window: Window) -> Self {
        WindowScroll { window }
    }
}

impl ScrollTarget for WindowScroll {
    type Listener = EventListener;

    fn listen(&self, mut handler: Box<dyn FnMut()>) -> EventListener {
        EventListener::new(&self.window, "scroll", move |_| handler())
    }
}

/// Parallax elements are the `.parallax` descendants of the hero section with
/// id `root_id`, in document order.
pub struct DomParallaxHost {
    window: Window,
    root_id: String,
}

impl DomParallaxHost {
    pub fn new(window: Window, root_id: String) -> Self {
        DomParallaxHost { window, root_id }
    }

    fn elements(&self) -> Result<Option<Vec<HtmlElement>>, DomError> {
        let Some(document) = self.window.document() else {
            return Ok(None);
        };
        let Some(root) = document.get_element_by_id(&self.root_id) else {
            return Ok(None);
        };
        let nodes = root.query_selector_all(PARALLAX_SELECTOR)?;
        let elements = (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect();
        Ok(Some(elements))
    }
}

impl ParallaxHost for DomParallaxHost {
    type Element = HtmlElement;

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn parallax_elements(&self) -> Option<Vec<HtmlElement>> {
        match self.elements() {
            Ok(elements) => elements,
            Err(e) => {
                warn!("Failed to query parallax elements: {e}");
                None
            }
        }
    }

    fn apply_translation(&self, element: &HtmlElement, offset: f64) {
        if let Err(e) = element
            .style()
            .set_property("transform", &translate_css(offset))
        {
            warn!("Failed to apply parallax offset: {}", DomError::from(e));
        }
    }
}
