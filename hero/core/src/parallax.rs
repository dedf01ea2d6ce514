//! Scroll-driven parallax: every tagged element is translated vertically in
//! proportion to the scroll offset, scaled by a speed derived from its index.

use crate::motion::css_number;
use tracing::trace;

/// Per-index speed table: `speed(i) = base + step * i`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxSpeeds {
    pub base: f64,
    pub step: f64,
}

impl Default for ParallaxSpeeds {
    fn default() -> Self {
        ParallaxSpeeds {
            base: 0.2,
            step: 0.1,
        }
    }
}

impl ParallaxSpeeds {
    pub fn speed(&self, index: usize) -> f64 {
        index as f64 * self.step + self.base
    }

    /// Vertical translation in pixels of the `index`-th element.
    pub fn offset(&self, index: usize, scroll_y: f64) -> f64 {
        scroll_y * self.speed(index)
    }
}

pub fn translate_css(offset: f64) -> String {
    format!("translateY({}px)", css_number(offset))
}

/// The environment a parallax update reads from and writes to.
pub trait ParallaxHost {
    type Element;

    /// Current vertical scroll offset of the page.
    fn scroll_y(&self) -> f64;

    /// Parallax-tagged elements in render order, or `None` when the hero's
    /// root element no longer exists.
    fn parallax_elements(&self) -> Option<Vec<Self::Element>>;

    fn apply_translation(&self, element: &Self::Element, offset: f64);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ParallaxUpdater {
    speeds: ParallaxSpeeds,
}

impl ParallaxUpdater {
    pub fn new(speeds: ParallaxSpeeds) -> Self {
        ParallaxUpdater { speeds }
    }

    pub fn speeds(&self) -> ParallaxSpeeds {
        self.speeds
    }

    /// Recomputes every element's offset from the host's current scroll
    /// position. Returns the number of elements written.
    pub fn update<H: ParallaxHost + ?Sized>(&self, host: &H) -> usize {
        self.update_at(host, host.scroll_y())
    }

    /// Like [`ParallaxUpdater::update`] with an explicit scroll offset.
    pub fn update_at<H: ParallaxHost + ?Sized>(&self, host: &H, scroll_y: f64) -> usize {
        let Some(elements) = host.parallax_elements() else {
            trace!("Parallax root is gone, skipping update");
            return 0;
        };
        for (index, element) in elements.iter().enumerate() {
            host.apply_translation(element, self.speeds.offset(index, scroll_y));
        }
        elements.len()
    }
}
