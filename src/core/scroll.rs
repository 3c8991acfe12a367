//! Scroll position to style mapping
//!
//! Sections that move with the page compute a progress value for their element and
//! sample keyframes with it. Mirrors the usual `useScroll` / `useTransform` pairing
//! of motion libraries, without the library.

/// How far an element has travelled through the viewport.
///
/// `0.0` while its top edge is at or below the bottom of the viewport, `1.0` once its
/// bottom edge has left through the top.
pub fn scroll_progress(element_top: f64, element_height: f64, viewport_height: f64) -> f64 {
    let travel = viewport_height + element_height;
    if travel <= 0.0 {
        return 0.0;
    }
    ((viewport_height - element_top) / travel).clamp(0.0, 1.0)
}

/// Piecewise-linear mapping from progress to an output value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Keyframes {
    stops: Vec<(f64, f64)>,
}

impl Keyframes {
    /// `stops` are `(input, output)` pairs; they get sorted by input.
    pub fn new(stops: &[(f64, f64)]) -> Self {
        let mut stops = stops.to_vec();
        stops.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { stops }
    }

    /// Constant output
    pub fn constant(value: f64) -> Self {
        Self::new(&[(0.0, value)])
    }

    /// Output at `input`, clamped to the first/last stop outside the range
    pub fn sample(&self, input: f64) -> f64 {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return 0.0;
        };
        if input <= first.0 {
            return first.1;
        }
        if input >= last.0 {
            return last.1;
        }

        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if input <= b.0 {
                let span = b.0 - a.0;
                if span <= 0.0 {
                    return b.1;
                }
                let t = (input - a.0) / span;
                return a.1 + (b.1 - a.1) * t;
            }
        }

        last.1
    }
}

/// Scroll-linked transform for one layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTransform {
    pub translate_y: Keyframes,
    pub scale: Keyframes,
    pub opacity: Keyframes,
}

impl ScrollTransform {
    /// Layer drifting `distance` px against the scroll direction
    pub fn parallax(distance: f64) -> Self {
        Self {
            translate_y: Keyframes::new(&[(0.0, distance), (1.0, -distance)]),
            scale: Keyframes::constant(1.0),
            opacity: Keyframes::constant(1.0),
        }
    }

    /// Hero content fading and shrinking while the hero scrolls away
    pub fn hero_exit() -> Self {
        Self {
            translate_y: Keyframes::new(&[(0.5, 0.0), (1.0, 120.0)]),
            scale: Keyframes::new(&[(0.5, 1.0), (1.0, 0.9)]),
            opacity: Keyframes::new(&[(0.5, 1.0), (0.9, 0.0)]),
        }
    }

    /// Inline style for `progress`
    pub fn style(&self, progress: f64) -> String {
        format!(
            "transform: translate3d(0, {:.1}px, 0) scale({:.3}); opacity: {:.3};",
            self.translate_y.sample(progress),
            self.scale.sample(progress),
            self.opacity.sample(progress),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bounds() {
        // Below the fold
        assert_eq!(scroll_progress(900.0, 400.0, 800.0), 0.0);
        // Scrolled past
        assert_eq!(scroll_progress(-500.0, 400.0, 800.0), 1.0);
        // Top edge at the bottom of the viewport
        assert_eq!(scroll_progress(800.0, 400.0, 800.0), 0.0);
        // Halfway
        assert_eq!(scroll_progress(200.0, 400.0, 800.0), 0.5);
    }

    #[test]
    fn test_progress_degenerate_viewport() {
        assert_eq!(scroll_progress(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_keyframes_interpolate() {
        let k = Keyframes::new(&[(1.0, 0.0), (0.0, 100.0)]);
        assert_eq!(k.sample(0.0), 100.0);
        assert_eq!(k.sample(0.25), 75.0);
        assert_eq!(k.sample(1.0), 0.0);
    }

    #[test]
    fn test_keyframes_clamp_and_multi_segment() {
        let k = Keyframes::new(&[(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)]);
        assert_eq!(k.sample(-3.0), 0.0);
        assert_eq!(k.sample(0.5), 1.0);
        assert_eq!(k.sample(0.75), 0.5);
        assert_eq!(k.sample(4.0), 0.0);
    }

    #[test]
    fn test_keyframes_empty_and_step() {
        assert_eq!(Keyframes::default().sample(0.3), 0.0);
        let step = Keyframes::new(&[(0.0, 0.0), (0.5, 0.0), (0.5, 1.0), (1.0, 1.0)]);
        assert_eq!(step.sample(0.25), 0.0);
        assert_eq!(step.sample(0.75), 1.0);
    }

    #[test]
    fn test_hero_exit_style() {
        let t = ScrollTransform::hero_exit();
        assert_eq!(
            t.style(0.0),
            "transform: translate3d(0, 0.0px, 0) scale(1.000); opacity: 1.000;"
        );
        assert_eq!(
            t.style(1.0),
            "transform: translate3d(0, 120.0px, 0) scale(0.900); opacity: 0.000;"
        );
    }

    #[test]
    fn test_parallax_symmetry() {
        let t = ScrollTransform::parallax(40.0);
        assert_eq!(t.translate_y.sample(0.0), 40.0);
        assert_eq!(t.translate_y.sample(0.5), 0.0);
        assert_eq!(t.translate_y.sample(1.0), -40.0);
    }
}
