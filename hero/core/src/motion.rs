//! Declarative motion descriptors: named visual states, transitions and the
//! easing curves behind them.
//!
//! Nothing in here runs an animation. The descriptors are rendered to CSS and
//! the host's style engine interpolates between them.

use std::fmt;

const REST_DELTA: f64 = 0.001;
const MAX_SETTLE_SECS: f64 = 10.0;
const SETTLE_STEP_SECS: f64 = 1.0 / 120.0;
const EASING_SAMPLES: usize = 40;

/// Formats a CSS number with at most four decimals and no trailing zeros.
pub(crate) fn css_number(value: f64) -> String {
    let mut s = format!("{value:.4}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// A CSS-compatible cubic bezier timing curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        CubicBezier { x1, y1, x2, y2 }
    }

    fn coefficients(p1: f64, p2: f64) -> (f64, f64, f64) {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        (a, b, c)
    }

    fn sample(p1: f64, p2: f64, t: f64) -> f64 {
        let (a, b, c) = Self::coefficients(p1, p2);
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(p1: f64, p2: f64, t: f64) -> f64 {
        let (a, b, c) = Self::coefficients(p1, p2);
        (3.0 * a * t + 2.0 * b) * t + c
    }

    /// Returns the curve's output for horizontal progress `x` in [0, 1].
    pub fn solve(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }

        // Newton-Raphson converges quickly for well-behaved curves
        let mut t = x;
        for _ in 0..8 {
            let error = Self::sample(self.x1, self.x2, t) - x;
            if error.abs() < 1e-7 {
                return Self::sample(self.y1, self.y2, t);
            }
            let slope = Self::sample_derivative(self.x1, self.x2, t);
            if slope.abs() < 1e-6 {
                break;
            }
            t -= error / slope;
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..64 {
            let value = Self::sample(self.x1, self.x2, t);
            if (value - x).abs() < 1e-7 {
                break;
            }
            if x > value {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        Self::sample(self.y1, self.y2, t)
    }
}

/// Named easing functions with the same curves as their CSS keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ease {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Ease {
    /// Gets the cubic-bezier control points of this curve
    pub fn bezier(&self) -> CubicBezier {
        match self {
            Ease::Linear => CubicBezier::new(0.0, 0.0, 1.0, 1.0),
            Ease::EaseIn => CubicBezier::new(0.42, 0.0, 1.0, 1.0),
            Ease::EaseOut => CubicBezier::new(0.0, 0.0, 0.58, 1.0),
            Ease::EaseInOut => CubicBezier::new(0.42, 0.0, 0.58, 1.0),
        }
    }

    /// Eased progress for linear progress `t`, clamped to [0, 1].
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Ease::Linear => t.clamp(0.0, 1.0),
            _ => self.bezier().solve(t),
        }
    }

    /// Gets the CSS timing keyword
    pub fn css(&self) -> &'static str {
        match self {
            Ease::Linear => "linear",
            Ease::EaseIn => "ease-in",
            Ease::EaseOut => "ease-out",
            Ease::EaseInOut => "ease-in-out",
        }
    }
}

/// A damped harmonic oscillator released at rest, normalized to travel 0 -> 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Default for Spring {
    fn default() -> Self {
        Spring::new(100.0, 10.0)
    }
}

impl Spring {
    /// Creates a unit-mass spring
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Spring {
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    /// Undamped angular frequency, in radians per second
    pub fn angular_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Below 1 the spring overshoots, at 1 or above it does not
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Normalized displacement at `t` seconds.
    pub fn position(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        let w0 = self.angular_frequency();
        if !w0.is_finite() || w0 <= 0.0 {
            return 1.0;
        }
        let zeta = self.damping_ratio();

        if (zeta - 1.0).abs() < 1e-6 {
            1.0 - (-w0 * t).exp() * (1.0 + w0 * t)
        } else if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * w0 * t).exp();
            1.0 - envelope * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin())
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            1.0 - (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
        }
    }

    /// Time after which the spring stays within 0.001 of its target.
    pub fn settle_duration(&self) -> f64 {
        let mut last_unsettled = 0.0;
        let mut t = 0.0;
        while t < MAX_SETTLE_SECS {
            if (1.0 - self.position(t)).abs() > REST_DELTA {
                last_unsettled = t;
            }
            t += SETTLE_STEP_SECS;
        }
        (last_unsettled + SETTLE_STEP_SECS).min(MAX_SETTLE_SECS)
    }

    /// The spring curve sampled into a CSS `linear()` timing function, to be
    /// paired with [`Spring::settle_duration`].
    pub fn css_easing(&self) -> String {
        let duration = self.settle_duration();
        let points: Vec<String> = (0..=EASING_SAMPLES)
            .map(|i| {
                if i == EASING_SAMPLES {
                    return "1".to_string();
                }
                let t = duration * i as f64 / EASING_SAMPLES as f64;
                css_number(self.position(t))
            })
            .collect();
        format!("linear({})", points.join(", "))
    }
}

/// How a transition interpolates: a physical spring or a fixed-duration tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Spring(Spring),
    Tween { duration: f64, ease: Ease },
}

impl Easing {
    /// Gets the run time in seconds. Springs run until they settle
    pub fn duration(&self) -> f64 {
        match self {
            Easing::Spring(spring) => spring.settle_duration(),
            Easing::Tween { duration, .. } => *duration,
        }
    }

    /// Gets the CSS timing function
    pub fn css_timing(&self) -> String {
        match self {
            Easing::Spring(spring) => spring.css_easing(),
            Easing::Tween { ease, .. } => ease.css().to_string(),
        }
    }
}

/// Whether a transition plays once or loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    #[default]
    Once,
    Forever,
}

/// Offsets applied to a parent's children when the parent changes state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    pub delay_children: f64,
    pub stagger_children: f64,
}

impl Stagger {
    /// Start offset of the child at `index`, relative to the parent's start.
    pub fn child_delay(&self, index: usize) -> f64 {
        self.delay_children + self.stagger_children * index as f64
    }
}

/// Timing of a change between two visual states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub easing: Easing,
    pub delay: f64,
    pub repeat: Repeat,
    pub stagger: Option<Stagger>,
}

impl Transition {
    /// Creates a spring transition with no delay
    pub fn spring(spring: Spring) -> Self {
        Transition {
            easing: Easing::Spring(spring),
            delay: 0.0,
            repeat: Repeat::Once,
            stagger: None,
        }
    }

    /// Creates a tween transition with no delay
    pub fn tween(duration: f64, ease: Ease) -> Self {
        Transition {
            easing: Easing::Tween { duration, ease },
            delay: 0.0,
            repeat: Repeat::Once,
            stagger: None,
        }
    }

    /// Sets the start delay in seconds
    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    /// Sets the offsets applied to this element's children
    pub fn with_stagger(mut self, stagger: Stagger) -> Self {
        self.stagger = Some(stagger);
        self
    }

    /// Makes the transition loop
    pub fn repeat_forever(mut self) -> Self {
        self.repeat = Repeat::Forever;
        self
    }

    /// Gets the run time in seconds
    pub fn duration(&self) -> f64 {
        self.easing.duration()
    }

    /// CSS `transition` shorthand for `properties`, starting after `delay`.
    pub fn to_css(&self, properties: &[&str], delay: f64) -> String {
        let duration = css_number(self.duration());
        let timing = self.easing.css_timing();
        let delay = css_number(delay);
        properties
            .iter()
            .map(|property| format!("{property} {duration}s {timing} {delay}s"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A style dictionary. Unset fields are left to the element's stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VisualState {
    pub y: Option<f64>,
    pub opacity: Option<f64>,
    pub scale: Option<f64>,
    pub rotate: Option<f64>,
    pub box_shadow: Option<&'static str>,
}

impl VisualState {
    /// Creates a state that sets nothing
    pub fn new() -> Self {
        Self::default()
    }

    pub fn y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn rotate(mut self, degrees: f64) -> Self {
        self.rotate = Some(degrees);
        self
    }

    pub fn box_shadow(mut self, shadow: &'static str) -> Self {
        self.box_shadow = Some(shadow);
        self
    }

    /// Gets the combined `transform` value, if any transform field is set
    pub fn transform_css(&self) -> Option<String> {
        let mut ops = Vec::new();
        if let Some(y) = self.y {
            ops.push(format!("translateY({}px)", css_number(y)));
        }
        if let Some(scale) = self.scale {
            ops.push(format!("scale({})", css_number(scale)));
        }
        if let Some(rotate) = self.rotate {
            ops.push(format!("rotate({}deg)", css_number(rotate)));
        }
        if ops.is_empty() {
            None
        } else {
            Some(ops.join(" "))
        }
    }

    /// CSS properties this state writes, in declaration order.
    pub fn properties(&self) -> Vec<&'static str> {
        let mut properties = Vec::new();
        if self.opacity.is_some() {
            properties.push("opacity");
        }
        if self.y.is_some() || self.scale.is_some() || self.rotate.is_some() {
            properties.push("transform");
        }
        if self.box_shadow.is_some() {
            properties.push("box-shadow");
        }
        properties
    }

    /// Renders the set fields as inline CSS declarations
    pub fn to_css(&self) -> String {
        let mut declarations = Vec::new();
        if let Some(opacity) = self.opacity {
            declarations.push(format!("opacity: {}", css_number(opacity)));
        }
        if let Some(transform) = self.transform_css() {
            declarations.push(format!("transform: {transform}"));
        }
        if let Some(shadow) = self.box_shadow {
            declarations.push(format!("box-shadow: {shadow}"));
        }
        declarations.join("; ")
    }
}

/// Names of the states a visual element can be told to enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantLabel {
    Hidden,
    Visible,
    Hover,
    Tap,
    Initial,
    Animate,
}

impl VariantLabel {
    /// Gets the label's name as written in variant tables
    pub fn as_str(&self) -> &'static str {
        match self {
            VariantLabel::Hidden => "hidden",
            VariantLabel::Visible => "visible",
            VariantLabel::Hover => "hover",
            VariantLabel::Tap => "tap",
            VariantLabel::Initial => "initial",
            VariantLabel::Animate => "animate",
        }
    }
}

impl fmt::Display for VariantLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A visual state and the transition used to enter it.
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    pub state: VisualState,
    pub transition: Option<Transition>,
}

impl Variant {
    /// Creates a variant entered instantly
    pub fn new(state: VisualState) -> Self {
        Variant {
            state,
            transition: None,
        }
    }

    /// Sets the transition used to enter this state
    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }
}

/// Label -> variant table for one visual element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Variants {
    entries: Vec<(VariantLabel, Variant)>,
}

impl Variants {
    /// Creates an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the variant for `label`.
    pub fn with(mut self, label: VariantLabel, variant: Variant) -> Self {
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = variant,
            None => self.entries.push((label, variant)),
        }
        self
    }

    /// Gets the variant for `label`
    pub fn get(&self, label: VariantLabel) -> Option<&Variant> {
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, variant)| variant)
    }

    /// Whether both mount states are defined.
    pub fn is_complete(&self) -> bool {
        self.get(VariantLabel::Hidden).is_some() && self.get(VariantLabel::Visible).is_some()
    }

    /// Lists the defined labels in insertion order
    pub fn labels(&self) -> impl Iterator<Item = VariantLabel> + '_ {
        self.entries.iter().map(|(label, _)| *label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn formats_css_numbers_without_trailing_zeros() {
        assert_eq!(css_number(0.0), "0");
        assert_eq!(css_number(-0.00001), "0");
        assert_eq!(css_number(1.5), "1.5");
        assert_eq!(css_number(20.0), "20");
        assert_eq!(css_number(0.123456), "0.1235");
    }

    #[test]
    fn ease_curves_hit_their_endpoints() {
        for ease in [Ease::Linear, Ease::EaseIn, Ease::EaseOut, Ease::EaseInOut] {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
        }
    }

    #[test]
    fn ease_in_out_is_symmetric_around_midpoint() {
        assert!(approx(Ease::EaseInOut.apply(0.5), 0.5));
        let early = Ease::EaseInOut.apply(0.25);
        let late = Ease::EaseInOut.apply(0.75);
        assert!(approx(early + late, 1.0));
        assert!(early < 0.25);
    }

    #[test]
    fn ease_out_leads_linear_progress() {
        assert!(Ease::EaseOut.apply(0.3) > 0.3);
        assert!(Ease::EaseIn.apply(0.3) < 0.3);
    }

    #[test]
    fn spring_starts_at_rest_and_reaches_target() {
        let spring = Spring::new(100.0, 10.0);

        assert_eq!(spring.position(0.0), 0.0);
        assert!((1.0 - spring.position(5.0)).abs() < REST_DELTA);
    }

    #[test]
    fn underdamped_spring_overshoots() {
        let spring = Spring::new(100.0, 10.0);
        assert!(spring.damping_ratio() < 1.0);

        let peak = (1..200)
            .map(|i| spring.position(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);

        assert!(peak > 1.0);
    }

    #[test]
    fn critically_damped_spring_never_overshoots() {
        let spring = Spring::new(100.0, 20.0);
        assert!(approx(spring.damping_ratio(), 1.0));

        for i in 0..500 {
            let x = spring.position(i as f64 / 100.0);
            assert!(x <= 1.0 + 1e-9, "overshoot at step {i}: {x}");
        }
    }

    #[test]
    fn overdamped_spring_rises_monotonically() {
        let spring = Spring::new(100.0, 60.0);
        let mut previous = 0.0;
        for i in 1..500 {
            let x = spring.position(i as f64 / 100.0);
            assert!(x >= previous);
            previous = x;
        }
        assert!(previous > 0.99);
    }

    #[test]
    fn heavier_damping_settles_sooner() {
        let soft = Spring::new(100.0, 10.0).settle_duration();
        let damped = Spring::new(100.0, 18.0).settle_duration();

        assert!(damped < soft);
        assert!(soft > 1.0 && soft < 2.0, "unexpected settle time {soft}");
    }

    #[test]
    fn undamped_spring_settle_time_is_capped() {
        assert_eq!(Spring::new(100.0, 0.0).settle_duration(), MAX_SETTLE_SECS);
    }

    #[test]
    fn spring_css_easing_is_a_linear_function_from_zero_to_one() {
        let easing = Spring::default().css_easing();

        assert!(easing.starts_with("linear(0, "));
        assert!(easing.ends_with(", 1)"));
        assert_eq!(easing.matches(", ").count(), EASING_SAMPLES);
    }

    #[test]
    fn can_render_tween_transition_css() {
        let transition = Transition::tween(1.5, Ease::EaseOut);

        let css = transition.to_css(&["opacity", "transform"], 2.1);

        assert_eq!(
            css,
            "opacity 1.5s ease-out 2.1s, transform 1.5s ease-out 2.1s"
        );
    }

    #[test]
    fn can_render_visual_state_css() {
        let state = VisualState::new().y(20.0).opacity(0.0);

        assert_eq!(state.to_css(), "opacity: 0; transform: translateY(20px)");
        assert_eq!(state.properties(), vec!["opacity", "transform"]);
    }

    #[test]
    fn empty_visual_state_renders_nothing() {
        let state = VisualState::new();

        assert_eq!(state.to_css(), "");
        assert!(state.transform_css().is_none());
        assert!(state.properties().is_empty());
    }

    #[test]
    fn stagger_offsets_children_incrementally() {
        let stagger = Stagger {
            delay_children: 0.2,
            stagger_children: 0.3,
        };

        assert!(approx(stagger.child_delay(0), 0.2));
        assert!(approx(stagger.child_delay(3), 1.1));
    }

    #[test]
    fn variants_replace_existing_labels() {
        let variants = Variants::new()
            .with(VariantLabel::Hidden, Variant::new(VisualState::new().opacity(0.0)))
            .with(VariantLabel::Hidden, Variant::new(VisualState::new().opacity(0.5)));

        assert_eq!(variants.labels().count(), 1);
        assert_eq!(
            variants.get(VariantLabel::Hidden).map(|v| v.state.opacity),
            Some(Some(0.5))
        );
        assert!(!variants.is_complete());
    }
}
