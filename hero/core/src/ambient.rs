//! Ambient oscillators: decorative shapes that move on infinite loops,
//! independent of the mount choreography and of each other.

use crate::motion::{Ease, Repeat, css_number};

/// Which transform an [`Oscillator`] drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Waveform {
    /// Vertical bob, in pixels.
    Float,
    /// Rocking rotation, in degrees.
    Rotate,
}

/// A repeating keyframe waveform.
#[derive(Debug, Clone, PartialEq)]
pub struct Oscillator {
    pub waveform: Waveform,
    pub initial: f64,
    pub keyframes: Vec<f64>,
    pub duration: f64,
    pub ease: Ease,
    pub repeat: Repeat,
}

impl Oscillator {
    /// Creates the vertical bob: -10px to 10px and back over 5 seconds
    pub fn float() -> Self {
        Oscillator {
            waveform: Waveform::Float,
            initial: 0.0,
            keyframes: vec![-10.0, 10.0, -10.0],
            duration: 5.0,
            ease: Ease::EaseInOut,
            repeat: Repeat::Forever,
        }
    }

    /// Creates the rocking motion: 0, 5, -5, 0 degrees over 6 seconds
    pub fn rotate() -> Self {
        Oscillator {
            waveform: Waveform::Rotate,
            initial: 0.0,
            keyframes: vec![0.0, 5.0, -5.0, 0.0],
            duration: 6.0,
            ease: Ease::EaseInOut,
            repeat: Repeat::Forever,
        }
    }

    /// Waveform value `t` seconds after the loop started. The ease is applied
    /// to each keyframe segment separately.
    pub fn value_at(&self, t: f64) -> f64 {
        match self.keyframes.as_slice() {
            [] => return self.initial,
            [only] => return *only,
            _ => {}
        }
        if self.duration <= 0.0 {
            return self.keyframes[self.keyframes.len() - 1];
        }

        let elapsed = match self.repeat {
            Repeat::Forever => t.rem_euclid(self.duration),
            Repeat::Once => t.clamp(0.0, self.duration),
        };
        let segments = self.keyframes.len() - 1;
        let position = elapsed / self.duration * segments as f64;
        let index = (position.floor() as usize).min(segments - 1);
        let local = self.ease.apply(position - index as f64);

        let from = self.keyframes[index];
        let to = self.keyframes[index + 1];
        from + (to - from) * local
    }

    /// Gets the `@keyframes` name for this waveform
    pub fn animation_name(&self) -> &'static str {
        match self.waveform {
            Waveform::Float => "hero-float",
            Waveform::Rotate => "hero-rotate",
        }
    }

    fn transform(&self, value: f64) -> String {
        match self.waveform {
            Waveform::Float => format!("translateY({}px)", css_number(value)),
            Waveform::Rotate => format!("rotate({}deg)", css_number(value)),
        }
    }

    /// Renders the `@keyframes` rule, with keyframes spaced evenly
    pub fn keyframes_css(&self) -> String {
        let last = self.keyframes.len().saturating_sub(1).max(1) as f64;
        let frames: Vec<String> = self
            .keyframes
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let offset = css_number(i as f64 / last * 100.0);
                format!("{offset}% {{ transform: {}; }}", self.transform(*value))
            })
            .collect();
        format!("@keyframes {} {{ {} }}", self.animation_name(), frames.join(" "))
    }

    /// Renders the `animation` declaration that runs the keyframes
    pub fn animation_css(&self) -> String {
        let iterations = match self.repeat {
            Repeat::Forever => "infinite",
            Repeat::Once => "1",
        };
        format!(
            "animation: {} {}s {} {}",
            self.animation_name(),
            css_number(self.duration),
            self.ease.css(),
            iterations
        )
    }

    /// Static style used when motion is disabled.
    pub fn initial_css(&self) -> String {
        format!("transform: {}", self.transform(self.initial))
    }
}

/// A blurred background shape and the waveform it runs. `placement` names
/// the stylesheet class that sizes, colors and positions it.
#[derive(Debug, Clone, PartialEq)]
pub struct AmbientShape {
    pub oscillator: Oscillator,
    pub placement: &'static str,
}

impl AmbientShape {
    /// The hero's three background shapes, in render order.
    pub fn standard() -> Vec<AmbientShape> {
        vec![
            AmbientShape {
                oscillator: Oscillator::float(),
                placement: "shape-sage-lg",
            },
            AmbientShape {
                oscillator: Oscillator::float(),
                placement: "shape-clay-xl",
            },
            AmbientShape {
                oscillator: Oscillator::rotate(),
                placement: "shape-sage-sm",
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn float_cycles_between_extremes() {
        let float = Oscillator::float();

        assert!(approx(float.value_at(0.0), -10.0));
        assert!(approx(float.value_at(2.5), 10.0));
        assert!(approx(float.value_at(5.0), -10.0));
    }

    #[test]
    fn float_repeats_forever() {
        let float = Oscillator::float();

        for t in [0.7, 1.9, 3.3] {
            assert!(approx(float.value_at(t), float.value_at(t + 5.0 * 7.0)));
        }
    }

    #[test]
    fn rotate_passes_through_every_keyframe() {
        let rotate = Oscillator::rotate();

        assert!(approx(rotate.value_at(0.0), 0.0));
        assert!(approx(rotate.value_at(2.0), 5.0));
        assert!(approx(rotate.value_at(4.0), -5.0));
        assert!(approx(rotate.value_at(6.0), 0.0));
    }

    #[test]
    fn waveforms_stay_within_keyframe_bounds() {
        for oscillator in [Oscillator::float(), Oscillator::rotate()] {
            let min = oscillator.keyframes.iter().cloned().fold(f64::MAX, f64::min);
            let max = oscillator.keyframes.iter().cloned().fold(f64::MIN, f64::max);
            for step in 0..600 {
                let value = oscillator.value_at(step as f64 * 0.01);
                assert!(value >= min - 1e-9 && value <= max + 1e-9);
            }
        }
    }

    #[test]
    fn can_render_float_keyframes() {
        let float = Oscillator::float();

        assert_eq!(
            float.keyframes_css(),
            "@keyframes hero-float { 0% { transform: translateY(-10px); } \
             50% { transform: translateY(10px); } \
             100% { transform: translateY(-10px); } }"
        );
        assert_eq!(
            float.animation_css(),
            "animation: hero-float 5s ease-in-out infinite"
        );
    }

    #[test]
    fn can_render_rotate_keyframes() {
        let rotate = Oscillator::rotate();

        let css = rotate.keyframes_css();

        assert!(css.starts_with("@keyframes hero-rotate { 0% { transform: rotate(0deg); }"));
        assert!(css.contains("33.3333% { transform: rotate(5deg); }"));
        assert!(css.contains("66.6667% { transform: rotate(-5deg); }"));
        assert_eq!(rotate.initial_css(), "transform: rotate(0deg)");
    }

    #[test]
    fn standard_shapes_float_twice_then_rotate() {
        let waveforms: Vec<Waveform> = AmbientShape::standard()
            .iter()
            .map(|shape| shape.oscillator.waveform)
            .collect();

        assert_eq!(
            waveforms,
            vec![Waveform::Float, Waveform::Float, Waveform::Rotate]
        );
    }
}
