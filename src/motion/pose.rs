/// Animatable properties of one element. Distances are px, angles degrees,
/// `width` a percentage of the parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotate: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub width: Option<f64>,
}

const PERSPECTIVE_PX: f64 = 1000.0;

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    pub const IDENTITY: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
        rotate_x: 0.0,
        rotate_y: 0.0,
        width: None,
    };

    pub const fn opacity(mut self, v: f64) -> Self {
        self.opacity = v;
        self
    }

    pub const fn x(mut self, v: f64) -> Self {
        self.x = v;
        self
    }

    pub const fn y(mut self, v: f64) -> Self {
        self.y = v;
        self
    }

    pub const fn scale(mut self, v: f64) -> Self {
        self.scale = v;
        self
    }

    pub const fn rotate(mut self, v: f64) -> Self {
        self.rotate = v;
        self
    }

    pub const fn rotate_x(mut self, v: f64) -> Self {
        self.rotate_x = v;
        self
    }

    pub const fn rotate_y(mut self, v: f64) -> Self {
        self.rotate_y = v;
        self
    }

    pub const fn width(mut self, v: f64) -> Self {
        self.width = Some(v);
        self
    }

    pub fn lerp(&self, to: &Pose, t: f64) -> Pose {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Pose {
            opacity: mix(self.opacity, to.opacity),
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            scale: mix(self.scale, to.scale),
            rotate: mix(self.rotate, to.rotate),
            rotate_x: mix(self.rotate_x, to.rotate_x),
            rotate_y: mix(self.rotate_y, to.rotate_y),
            width: match (self.width, to.width) {
                (Some(a), Some(b)) => Some(mix(a, b)),
                (a, b) => b.or(a),
            },
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective({PERSPECTIVE_PX}px) translate3d({:.2}px, {:.2}px, 0px) rotate({:.2}deg) rotateX({:.2}deg) rotateY({:.2}deg) scale({:.4})",
            self.x, self.y, self.rotate, self.rotate_x, self.rotate_y, self.scale
        )
    }

    /// `(property, value)` pairs to write as inline styles.
    pub fn css_properties(&self) -> Vec<(&'static str, String)> {
        let mut props = vec![
            ("opacity", format!("{:.4}", self.opacity.clamp(0.0, 1.0))),
            ("transform", self.transform()),
        ];
        if let Some(w) = self.width {
            props.push(("width", format!("{:.2}%", w)));
        }
        props
    }

    pub fn to_css(&self) -> String {
        self.css_properties()
            .into_iter()
            .map(|(k, v)| format!("{k}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Rotation `(rotate_x, rotate_y)` for a pointer at `pointer` over `rect`
/// (`left, top, width, height`). The pointer offset from the centre,
/// normalised to `[-0.5, 0.5]`, is scaled by `factor`.
pub fn tilt(pointer: (f64, f64), rect: (f64, f64, f64, f64), factor: f64) -> (f64, f64) {
    let (px, py) = pointer;
    let (left, top, width, height) = rect;
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let nx = ((px - left) / width).clamp(0.0, 1.0) - 0.5;
    let ny = ((py - top) / height).clamp(0.0, 1.0) - 0.5;
    (ny * factor, nx * factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        let from = Pose::IDENTITY.opacity(0.0).y(100.0);
        let to = Pose::IDENTITY;
        let mid = from.lerp(&to, 0.5);
        assert_eq!(mid.opacity, 0.5);
        assert_eq!(mid.y, 50.0);
        assert_eq!(mid.scale, 1.0);
        assert_eq!(from.lerp(&to, 1.0), to);
        assert_eq!(from.lerp(&to, 0.0), from);
    }

    #[test]
    fn test_width_lerp() {
        let from = Pose::IDENTITY.width(0.0);
        let to = Pose::IDENTITY.width(90.0);
        assert_eq!(from.lerp(&to, 0.5).width, Some(45.0));
        assert_eq!(Pose::IDENTITY.lerp(&to, 0.1).width, Some(90.0));
        assert_eq!(Pose::IDENTITY.lerp(&Pose::IDENTITY, 0.3).width, None);
    }

    #[test]
    fn test_css() {
        let css = Pose::IDENTITY.opacity(0.0).x(-100.0).to_css();
        assert!(css.starts_with("opacity: 0.0000;"));
        assert!(css.contains("translate3d(-100.00px, 0.00px, 0px)"));
        assert!(!css.contains("width"));

        let css = Pose::IDENTITY.width(85.0).to_css();
        assert!(css.ends_with("width: 85.00%;"));
    }

    #[test]
    fn test_tilt() {
        let rect = (100.0, 200.0, 400.0, 200.0);
        assert_eq!(tilt((300.0, 300.0), rect, 30.0), (0.0, 0.0));
        assert_eq!(tilt((100.0, 200.0), rect, 30.0), (-15.0, -15.0));
        assert_eq!(tilt((500.0, 400.0), rect, 15.0), (7.5, 7.5));
        // outside the box is clamped to the edge
        assert_eq!(tilt((900.0, 300.0), rect, 30.0), (0.0, 15.0));
        assert_eq!(tilt((1.0, 1.0), (0.0, 0.0, 0.0, 10.0), 30.0), (0.0, 0.0));
    }
}
